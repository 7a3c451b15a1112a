//! Reading and writing window properties as typed values.
//!
//! X properties are untyped on the wire: the server hands back a
//! type atom, an element width (8, 16 or 32 bits), an element count
//! and a byte buffer. [`PropCodec`] checks all of those against what
//! the caller expects and turns the buffer into owned Rust values.
//!
//! # Failure policy
//!
//! Every read either returns the whole value or fails with
//! [`XError::PropertyMissing`] or [`XError::PropertyMalformed`];
//! nothing is partially decoded and no default is ever substituted.
//! Falling back to a default (and warning about it) is up to the
//! caller.
//!
//! # Ownership
//!
//! Every read goes to the server and returns a freshly allocated
//! value owned by the caller. The codec keeps nothing.

use std::fmt;

use byteorder::{ByteOrder, NativeEndian};
#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::{trace, warn};

use super::{
    atom::{Atom, Atoms},
    core::{
        EventMask, PropFormat, PropMode, RawProperty, Result, XAtom, XConn, XError, XWindowID,
        ANY_PROPERTY_TYPE,
    },
    encoding::Locale,
    event::ClientMessageEvent,
};
use crate::config::PropConfig;

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An element type a property can be made of.
///
/// Implemented for `u8`, `u16` and `u32`, the three formats
/// the X protocol allows. The format is part of the type, so a read
/// can never decode a buffer at the wrong width.
pub trait PropElement: Copy + Default + fmt::Debug + private::Sealed {
    /// The format this element is stored as.
    const FORMAT: PropFormat;

    /// Decodes native-endian bytes. `raw.len()` must be a multiple
    /// of the element size.
    fn decode(raw: &[u8]) -> Vec<Self>;

    /// Encodes elements as native-endian bytes.
    fn encode(values: &[Self]) -> Vec<u8>;
}

impl PropElement for u8 {
    const FORMAT: PropFormat = PropFormat::Format8;

    fn decode(raw: &[u8]) -> Vec<u8> {
        raw.to_vec()
    }

    fn encode(values: &[u8]) -> Vec<u8> {
        values.to_vec()
    }
}

impl PropElement for u16 {
    const FORMAT: PropFormat = PropFormat::Format16;

    fn decode(raw: &[u8]) -> Vec<u16> {
        let mut out = vec![0; raw.len() / 2];
        NativeEndian::read_u16_into(raw, &mut out);
        out
    }

    fn encode(values: &[u16]) -> Vec<u8> {
        let mut out = vec![0; values.len() * 2];
        NativeEndian::write_u16_into(values, &mut out);
        out
    }
}

impl PropElement for u32 {
    const FORMAT: PropFormat = PropFormat::Format32;

    fn decode(raw: &[u8]) -> Vec<u32> {
        let mut out = vec![0; raw.len() / 4];
        NativeEndian::read_u32_into(raw, &mut out);
        out
    }

    fn encode(values: &[u32]) -> Vec<u8> {
        let mut out = vec![0; values.len() * 4];
        NativeEndian::write_u32_into(values, &mut out);
        out
    }
}

/// A decoded property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// A single 32-bit value.
    Cardinal(u32),

    /// A list of 32-bit values: cardinals, windows, atoms, pixmaps.
    Cardinals(Vec<u32>),

    /// A single text string.
    Text(String),

    /// A list of text strings.
    TextList(Vec<String>),

    /// Raw 8-bit data of a type that is not text.
    U8List(Vec<u8>),

    /// Raw 16-bit data.
    U16List(Vec<u16>),
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Property::*;

        match self {
            Cardinal(n) => write!(f, "Cardinal: {}", n),
            Cardinals(ns) => write!(f, "Cardinals: {:?}", ns),
            Text(s) => write!(f, "Text: {:?}", s),
            TextList(strs) => write!(f, "Strings: {:?}", strs),
            U8List(u8s) => {
                let out = u8s
                    .iter()
                    .map(|s| format!("{:#04x}", s))
                    .collect::<Vec<String>>()
                    .join(",");
                write!(f, "u8[] - [{}]", out)
            }
            U16List(u16s) => {
                let out = u16s
                    .iter()
                    .map(|s| format!("{:#06x}", s))
                    .collect::<Vec<String>>()
                    .join(",");
                write!(f, "u16[] - [{}]", out)
            }
        }
    }
}

/// Splits NUL-separated text into its strings.
///
/// A trailing NUL ends the last string rather than starting a new
/// empty one, so `b"a\0b\0"` and `b"a\0b"` both give `["a", "b"]`.
/// Empty input gives no strings at all.
pub(crate) fn split_nul(raw: &[u8]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut rest = raw;

    while !rest.is_empty() {
        match rest.iter().position(|b| *b == 0) {
            Some(idx) => {
                out.push(rest[..idx].to_vec());
                rest = &rest[idx + 1..];
            }
            None => {
                out.push(rest.to_vec());
                break;
            }
        }
    }
    out
}

/// Joins strings with a NUL after every one, including the last.
pub(crate) fn join_nul<S: AsRef<[u8]>>(list: &[S]) -> Vec<u8> {
    let mut out = Vec::with_capacity(list.iter().map(|s| s.as_ref().len() + 1).sum());
    for s in list {
        out.extend_from_slice(s.as_ref());
        out.push(0);
    }
    out
}

/// Decodes a list of UTF-8 strings, replacing invalid ones with "".
fn utf8_list(window: XWindowID, property: XAtom, list: Vec<Vec<u8>>) -> Vec<String> {
    list.into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            String::from_utf8(raw).unwrap_or_else(|_| {
                warn!(
                    "String {} of property {} on window {} is not valid UTF-8",
                    idx, property, window
                );
                String::new()
            })
        })
        .collect()
}

/// The number of 32-bit units needed to hold `count` elements of `format`.
fn longs_for(format: PropFormat, count: usize) -> u32 {
    let bytes = count.saturating_mul(format.size());
    u32::try_from(bytes.div_ceil(4)).unwrap_or(u32::MAX)
}

/// Typed access to window properties.
///
/// A `PropCodec` borrows the connection and the atom table; it is
/// cheap to create and holds no state of its own besides the
/// configured limits and locale.
///
/// # Example
///
/// ```no_run
/// use wmprops::x::{Atom, Atoms, X11RBConn, XConn};
/// use wmprops::x::property::PropCodec;
/// use wmprops::PropConfig;
///
/// let conn = X11RBConn::new().expect("could not connect");
/// let atoms = Atoms::intern_all(&conn).expect("could not intern atoms");
/// let config = PropConfig::new();
/// let props = PropCodec::new(&conn, &atoms, &config).expect("bad config");
///
/// let root = conn.root();
/// let desktops = props
///     .get32(root, atoms.get(Atom::NetNumberOfDesktops), atoms.get(Atom::Cardinal))
///     .unwrap_or(1);
/// ```
pub struct PropCodec<'a, X: XConn> {
    conn: &'a X,
    atoms: &'a Atoms,
    locale: Locale,
    max_long_length: u32,
    message_mask: EventMask,
}

impl<'a, X: XConn> PropCodec<'a, X> {
    /// Creates a codec with the given configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(conn: &'a X, atoms: &'a Atoms, config: &PropConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            conn,
            atoms,
            locale: config.locale()?,
            max_long_length: config.max_long_length(),
            message_mask: config.client_message_mask(),
        })
    }

    /// Replaces the locale used for `STRING` properties.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The connection this codec talks to.
    pub fn conn(&self) -> &'a X {
        self.conn
    }

    /// The atom table this codec resolves atoms with.
    pub fn atoms(&self) -> &'a Atoms {
        self.atoms
    }

    /// The locale used for `STRING` properties.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[inline]
    pub(crate) fn atom(&self, atom: Atom) -> XAtom {
        self.atoms.get(atom)
    }

    pub(crate) fn message_mask(&self) -> EventMask {
        self.message_mask
    }

    /// Performs the request and checks existence, type and format.
    fn read(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        format: PropFormat,
        long_length: u32,
    ) -> Result<RawProperty> {
        let raw = self
            .conn
            .get_property(window, property, type_, 0, long_length)?;

        if raw.is_missing() {
            trace!("Property {} not set on window {}", property, window);
            return Err(XError::PropertyMissing { window, property });
        }
        if type_ != ANY_PROPERTY_TYPE && raw.type_ != type_ {
            return Err(XError::malformed(
                window,
                property,
                format!("expected type {}, got {}", type_, raw.type_),
            ));
        }
        if raw.format != format.bits() {
            return Err(XError::malformed(
                window,
                property,
                format!("expected {} data, got format {}", format, raw.format),
            ));
        }
        if raw.value.len() % format.size() != 0 {
            return Err(XError::malformed(
                window,
                property,
                format!("{} bytes is not a whole number of elements", raw.value.len()),
            ));
        }
        Ok(raw)
    }

    /// Reads exactly `count` elements of a property.
    ///
    /// Succeeds only if the property exists with type `type_`,
    /// is made of `E` elements and holds at least `count` of them.
    /// Any excess elements are ignored.
    #[cfg_attr(debug_assertions, instrument(target = "prop", level = "trace", skip(self)))]
    pub fn get_fixed<E: PropElement>(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        count: usize,
    ) -> Result<Vec<E>> {
        let raw = self.read(window, property, type_, E::FORMAT, longs_for(E::FORMAT, count))?;

        let available = raw.len();
        if available < count {
            return Err(XError::malformed(
                window,
                property,
                format!("expected {} elements, got {}", count, available),
            ));
        }

        Ok(E::decode(&raw.value[..count * E::FORMAT.size()]))
    }

    /// Reads every element of a property, however many there are.
    ///
    /// An existing property with no elements reads as an empty `Vec`.
    #[cfg_attr(debug_assertions, instrument(target = "prop", level = "trace", skip(self)))]
    pub fn get_all<E: PropElement>(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
    ) -> Result<Vec<E>> {
        let raw = self.read(window, property, type_, E::FORMAT, self.max_long_length)?;
        self.check_complete(window, property, &raw)?;

        Ok(E::decode(&raw.value))
    }

    fn check_complete(&self, window: XWindowID, property: XAtom, raw: &RawProperty) -> Result<()> {
        if raw.bytes_after > 0 {
            return Err(XError::malformed(
                window,
                property,
                format!(
                    "longer than the maximum of {} longs ({} bytes left)",
                    self.max_long_length, raw.bytes_after
                ),
            ));
        }
        Ok(())
    }

    /// Reads a single 32-bit value.
    pub fn get32(&self, window: XWindowID, property: XAtom, type_: XAtom) -> Result<u32> {
        let values = self.get_fixed::<u32>(window, property, type_, 1)?;
        values
            .first()
            .copied()
            .ok_or_else(|| XError::malformed(window, property, "no elements"))
    }

    /// Reads an array of 32-bit values of any length.
    pub fn get_array32(&self, window: XWindowID, property: XAtom, type_: XAtom) -> Result<Vec<u32>> {
        self.get_all::<u32>(window, property, type_)
    }

    /// Reads an 8-bit property as text.
    ///
    /// The text ends at the first NUL, or at the end of the data if
    /// there is none. The bytes are returned without a terminator and
    /// without any decoding.
    pub fn get_string(&self, window: XWindowID, property: XAtom, type_: XAtom) -> Result<Vec<u8>> {
        let mut raw = self.get_all::<u8>(window, property, type_)?;
        if let Some(nul) = raw.iter().position(|b| *b == 0) {
            raw.truncate(nul);
        }
        Ok(raw)
    }

    /// Reads an 8-bit property as a list of NUL-separated strings.
    ///
    /// Fails if the split yields no strings at all, which includes a
    /// property that exists but is empty. Callers that treat an empty
    /// list as valid must handle that case themselves.
    pub fn get_string_list(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
    ) -> Result<Vec<Vec<u8>>> {
        let raw = self.get_all::<u8>(window, property, type_)?;
        let list = split_nul(&raw);

        if list.is_empty() {
            return Err(XError::malformed(window, property, "contains no strings"));
        }
        Ok(list)
    }

    /// Reads a `UTF8_STRING` property.
    ///
    /// Fails if the text is not valid UTF-8.
    pub fn get_string_utf8(&self, window: XWindowID, property: XAtom) -> Result<String> {
        let raw = self.get_string(window, property, self.atom(Atom::UTF8String))?;

        String::from_utf8(raw)
            .map_err(|e| XError::malformed(window, property, format!("invalid UTF-8: {}", e)))
    }

    /// Reads a `STRING` property and converts it from the locale
    /// encoding to UTF-8.
    ///
    /// Fails if the text is not valid in the locale encoding.
    pub fn get_string_locale(&self, window: XWindowID, property: XAtom) -> Result<String> {
        let raw = self.get_string(window, property, self.atom(Atom::String))?;

        match self.locale.to_utf8(&raw) {
            Some(text) => Ok(text.into_owned()),
            None => Err(XError::malformed(
                window,
                property,
                format!("not valid {} text", self.locale.name()),
            )),
        }
    }

    /// Reads a `UTF8_STRING` list.
    ///
    /// Strings that are not valid UTF-8 are replaced with empty ones,
    /// so the positions of the others are kept.
    pub fn get_strings_utf8(&self, window: XWindowID, property: XAtom) -> Result<Vec<String>> {
        let list = self.get_string_list(window, property, self.atom(Atom::UTF8String))?;
        Ok(utf8_list(window, property, list))
    }

    /// Reads a `STRING` list, converting each string from the locale
    /// encoding to UTF-8.
    ///
    /// Strings that fail to convert are replaced with empty ones.
    pub fn get_strings_locale(&self, window: XWindowID, property: XAtom) -> Result<Vec<String>> {
        let list = self.get_string_list(window, property, self.atom(Atom::String))?;
        Ok(self.locale_list(window, property, &list))
    }

    fn locale_list(&self, window: XWindowID, property: XAtom, list: &[Vec<u8>]) -> Vec<String> {
        list.iter()
            .enumerate()
            .map(|(idx, raw)| match self.locale.to_utf8(raw) {
                Some(text) => text.into_owned(),
                None => {
                    warn!(
                        "String {} of property {} on window {} is not valid {}",
                        idx,
                        property,
                        window,
                        self.locale.name()
                    );
                    String::new()
                }
            })
            .collect()
    }

    /// Reads a property of any type and decodes it by its actual
    /// type and format.
    ///
    /// Returns the actual type alongside the value. 32-bit data reads
    /// as [`Property::Cardinal`] when it has a single element and as
    /// [`Property::Cardinals`] otherwise. `UTF8_STRING` and `STRING`
    /// data without a NUL reads as [`Property::Text`] and fails if it
    /// cannot be decoded; data with one reads as [`Property::TextList`],
    /// where undecodable strings become empty ones.
    #[cfg_attr(debug_assertions, instrument(target = "prop", level = "trace", skip(self)))]
    pub fn get_any(&self, window: XWindowID, property: XAtom) -> Result<(XAtom, Property)> {
        let raw = self
            .conn
            .get_property(window, property, ANY_PROPERTY_TYPE, 0, self.max_long_length)?;

        if raw.is_missing() {
            return Err(XError::PropertyMissing { window, property });
        }
        self.check_complete(window, property, &raw)?;
        let format = PropFormat::from_raw(raw.format).ok_or_else(|| {
            XError::malformed(window, property, format!("invalid format {}", raw.format))
        })?;

        let type_ = raw.type_;
        let value = match format {
            PropFormat::Format32 => {
                let mut values = u32::decode(&raw.value);
                if values.len() == 1 {
                    Property::Cardinal(values.remove(0))
                } else {
                    Property::Cardinals(values)
                }
            }
            PropFormat::Format16 => Property::U16List(u16::decode(&raw.value)),
            PropFormat::Format8 if type_ == self.atom(Atom::UTF8String) => {
                if raw.value.contains(&0) {
                    Property::TextList(utf8_list(window, property, split_nul(&raw.value)))
                } else {
                    Property::Text(String::from_utf8(raw.value).map_err(|e| {
                        XError::malformed(window, property, format!("invalid UTF-8: {}", e))
                    })?)
                }
            }
            PropFormat::Format8 if type_ == self.atom(Atom::String) => {
                if raw.value.contains(&0) {
                    Property::TextList(self.locale_list(window, property, &split_nul(&raw.value)))
                } else {
                    match self.locale.to_utf8(&raw.value) {
                        Some(text) => Property::Text(text.into_owned()),
                        None => {
                            return Err(XError::malformed(
                                window,
                                property,
                                format!("not valid {} text", self.locale.name()),
                            ))
                        }
                    }
                }
            }
            PropFormat::Format8 => Property::U8List(raw.value),
        };
        Ok((type_, value))
    }

    //* ========== WRITES ========== *//

    /// Replaces a property with the given elements.
    #[cfg_attr(debug_assertions, instrument(target = "prop", level = "trace", skip(self, values)))]
    pub fn set_all<E: PropElement>(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        values: &[E],
    ) -> Result<()> {
        self.conn.change_property(
            window,
            property,
            type_,
            E::FORMAT,
            PropMode::Replace,
            &E::encode(values),
        )
    }

    /// Sets a property to a single 32-bit value.
    pub fn set32(&self, window: XWindowID, property: XAtom, type_: XAtom, value: u32) -> Result<()> {
        self.set_all::<u32>(window, property, type_, &[value])
    }

    /// Sets a property to an array of 32-bit values.
    pub fn set_array32(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        values: &[u32],
    ) -> Result<()> {
        self.set_all::<u32>(window, property, type_, values)
    }

    /// Sets a `UTF8_STRING` property to a single string, without a terminator.
    pub fn set_string_utf8(&self, window: XWindowID, property: XAtom, value: &str) -> Result<()> {
        self.set_all::<u8>(window, property, self.atom(Atom::UTF8String), value.as_bytes())
    }

    /// Sets a `STRING` property, converting `value` to the locale encoding.
    ///
    /// Fails without writing if `value` cannot be represented
    /// in the locale encoding.
    pub fn set_string_locale(&self, window: XWindowID, property: XAtom, value: &str) -> Result<()> {
        let encoded = self.locale.from_utf8(value).ok_or_else(|| {
            XError::malformed(
                window,
                property,
                format!("cannot represent {:?} as {}", value, self.locale.name()),
            )
        })?;
        self.set_all::<u8>(window, property, self.atom(Atom::String), &encoded)
    }

    /// Replaces a property with a list of strings.
    ///
    /// Every string, including the last, is followed by a NUL.
    pub fn set_string_list<S: AsRef<[u8]>>(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        list: &[S],
    ) -> Result<()> {
        trace!(
            "Setting {} strings on property {} of window {}",
            list.len(),
            property,
            window
        );
        self.set_all::<u8>(window, property, type_, &join_nul(list))
    }

    /// Replaces a `UTF8_STRING` property with a list of strings.
    pub fn set_strings_utf8<S: AsRef<str>>(
        &self,
        window: XWindowID,
        property: XAtom,
        list: &[S],
    ) -> Result<()> {
        let bytes: Vec<&[u8]> = list.iter().map(|s| s.as_ref().as_bytes()).collect();
        self.set_string_list(window, property, self.atom(Atom::UTF8String), &bytes[..])
    }

    /// Writes a decoded value back as a property of type `type_`.
    ///
    /// [`Property::Text`] is written without a terminator,
    /// [`Property::TextList`] with one after every string.
    pub fn set(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        value: &Property,
    ) -> Result<()> {
        match value {
            Property::Cardinal(n) => self.set32(window, property, type_, *n),
            Property::Cardinals(ns) => self.set_array32(window, property, type_, ns),
            Property::Text(s) => self.set_all::<u8>(window, property, type_, s.as_bytes()),
            Property::TextList(strs) => self.set_string_list(window, property, type_, &strs[..]),
            Property::U8List(bytes) => self.set_all::<u8>(window, property, type_, bytes),
            Property::U16List(words) => self.set_all::<u16>(window, property, type_, words),
        }
    }

    /// Deletes a property. Deleting a property that is not set succeeds.
    pub fn erase(&self, window: XWindowID, property: XAtom) -> Result<()> {
        trace!("Erasing property {} on window {}", property, window);
        self.conn.delete_property(window, property)
    }

    /// Sends a 32-bit client message about `about` to the root window.
    ///
    /// This is how state changes are requested from the window manager,
    /// as opposed to writing the properties directly.
    #[cfg_attr(debug_assertions, instrument(target = "prop", level = "trace", skip(self)))]
    pub fn send_client_message(
        &self,
        about: XWindowID,
        message_type: XAtom,
        data: [u32; 4],
    ) -> Result<()> {
        let event = ClientMessageEvent::with_longs(about, message_type, data);
        self.conn
            .send_client_message(self.conn.root(), self.message_mask, event)
    }
}

impl<X: XConn> fmt::Debug for PropCodec<'_, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropCodec")
            .field("locale", &self.locale)
            .field("max_long_length", &self.max_long_length)
            .field("message_mask", &self.message_mask)
            .finish()
    }
}
