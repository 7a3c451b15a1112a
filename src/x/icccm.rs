//! Typed access to the ICCCM window properties.
//!
//! For more information on what these properties mean, consult the
//! [ICCCM](https://www.x.org/releases/X11R7.6/doc/xorg-docs/specs/ICCCM/icccm.html)
//! reference.
//!
//! The methods here are thin wrappers over [`PropCodec`] that fix the
//! property, type and shape of each standard property. They fail the
//! same way the codec does.

use std::convert::TryFrom;

use thiserror::Error;
use tracing::trace;

use super::{
    atom::Atom,
    core::{EventMask, Result, XAtom, XConn, XError, XWindowID, Xid, CURRENT_TIME},
    event::ClientMessageEvent,
    property::PropCodec,
};

/// An error when decoding a structured property from its raw elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintsError {
    /// There were fewer elements than the structure needs.
    #[error("expected at least {expected} elements, got {got}")]
    TooShort {
        /// The number of elements needed.
        expected: usize,
        /// The number of elements present.
        got: usize,
    },
    /// A field held a value outside its allowed range.
    #[error("invalid value {value} for {field}")]
    InvalidValue {
        /// The field that was invalid.
        field: &'static str,
        /// The offending value.
        value: u32,
    },
}

pub(crate) fn check_len(raw: &[u32], expected: usize) -> std::result::Result<(), HintsError> {
    if raw.len() < expected {
        Err(HintsError::TooShort {
            expected,
            got: raw.len(),
        })
    } else {
        Ok(())
    }
}

/// The ICCCM-defined window states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WmState {
    /// The window is withdrawn (unmapped).
    #[default]
    Withdrawn = 0,
    /// The window is shown as normal.
    Normal = 1,
    /// The window has been "iconified".
    Iconic = 3,
}

impl TryFrom<u32> for WmState {
    type Error = HintsError;

    fn try_from(from: u32) -> std::result::Result<Self, HintsError> {
        match from {
            0 => Ok(Self::Withdrawn),
            1 => Ok(Self::Normal),
            // 2 was ZoomState, which ICCCM folds into IconicState
            2 | 3 => Ok(Self::Iconic),
            n => Err(HintsError::InvalidValue {
                field: "state",
                value: n,
            }),
        }
    }
}

bitflags! {

/// The flags used inside WmHints.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmHintsFlags: u32 {
    /// The input hint is set
    const INPUT_HINT            = 0b0000000001;
    /// The state hint is set
    const STATE_HINT            = 0b0000000010;
    /// The icon pixmap hint is set
    const ICON_PIXMAP_HINT      = 0b0000000100;
    /// The icon window hint is set
    const ICON_WINDOW_HINT      = 0b0000001000;
    /// The icon position hint is set
    const ICON_POSITION_HINT    = 0b0000010000;
    /// The icon mask hint is set
    const ICON_MASK_HINT        = 0b0000100000;
    /// The window group hint is set
    const WINDOW_GROUP_HINT     = 0b0001000000;
    /// The urgency hint is set
    const URGENCY_HINT          = 0b0100000000;
}

/// The flags used inside WmSizeHints.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmSizeHintsFlags: u32 {
    /// User-specified x and y
    const US_POSITION   = 0b0000000001;
    /// User-specified window size
    const US_SIZE       = 0b0000000010;
    /// Program-specified position
    const P_POSITION    = 0b0000000100;
    /// Program-specified size
    const P_SIZE        = 0b0000001000;
    /// Program-specified minimum size
    const P_MIN_SIZE    = 0b0000010000;
    /// Program specified maximum size
    const P_MAX_SIZE    = 0b0000100000;
    /// Program specified resize increments
    const P_RESIZE_INC  = 0b0001000000;
    /// Program specified aspect ratios
    const P_ASPECT      = 0b0010000000;
    /// Program specified base size
    const P_BASE_SIZE   = 0b0100000000;
    /// Program specified window gravity
    const P_WIN_GRAVITY = 0b1000000000;
}

/// The fields of `_MOTIF_WM_HINTS` that are present.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifFlags: u32 {
    /// The functions field is set
    const FUNCTIONS   = 1 << 0;
    /// The decorations field is set
    const DECORATIONS = 1 << 1;
}

/// The window functions a Motif client allows.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifFunctions: u32 {
    const ALL      = 1 << 0;
    const RESIZE   = 1 << 1;
    const MOVE     = 1 << 2;
    const MINIMIZE = 1 << 3;
    const MAXIMIZE = 1 << 4;
    const CLOSE    = 1 << 5;
}

/// The decorations a Motif client wants.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifDecorations: u32 {
    const ALL      = 1 << 0;
    const BORDER   = 1 << 1;
    const RESIZEH  = 1 << 2;
    const TITLE    = 1 << 3;
    const MENU     = 1 << 4;
    const MINIMIZE = 1 << 5;
    const MAXIMIZE = 1 << 6;
}

}

/// The length of the data for WM_HINTS.
pub const WM_HINTS_LEN: usize = 9;

/// The length of WM_HINTS written by clients that predate `window_group`.
pub const WM_HINTS_MIN_LEN: usize = 8;

/// The length of the data for WM_SIZE_HINTS.
pub const WM_SIZE_HINTS_LEN: usize = 18;

/// The length of pre-ICCCM WM_SIZE_HINTS, without base size and gravity.
pub const WM_SIZE_HINTS_MIN_LEN: usize = 15;

/// The minimum length of the data for _MOTIF_WM_HINTS.
pub const MOTIF_HINTS_MIN_LEN: usize = 3;

/// The instance and class names of a window (WM_CLASS).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WmClass {
    /// The instance name.
    pub instance: String,
    /// The class name.
    pub class: String,
}

/// ICCCM-defined window hints (WM_HINTS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WmHints {
    /// Which of the fields are set.
    pub flags: WmHintsFlags,
    /// Whether the window wants input focus from the window manager.
    pub accepts_input: bool,
    /// The state the window should be mapped in.
    pub initial_state: WmState,
    pub icon_pixmap: u32,
    pub icon_window: XWindowID,
    pub icon_pos: (i32, i32),
    pub icon_mask: u32,
    pub window_group: XWindowID,
}

impl WmHints {
    /// Returns an empty `WmHints`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Test whether `flag` is set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wmprops::x::icccm::{WmHints, WmHintsFlags};
    ///
    /// let wm_hints = WmHints::new();
    ///
    /// /* URGENCY flag is not set */
    /// assert!(!wm_hints.is_set(WmHintsFlags::URGENCY_HINT));
    /// ```
    pub fn is_set(&self, flag: WmHintsFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Test if the urgency flag is set.
    pub fn urgent(&self) -> bool {
        self.flags.contains(WmHintsFlags::URGENCY_HINT)
    }
}

impl TryFrom<&[u32]> for WmHints {
    type Error = HintsError;

    /// Parses WmHints according to the following C struct definition:
    ///
    /// ```c
    /// typedef struct {
    ///     int32_t flags;
    ///     uint32_t input;
    ///     int32_t initial_state;
    ///     xcb_pixmap_t icon_pixmap;
    ///     xcb_window_t icon_window;
    ///     int32_t icon_x, icon_y;
    ///     xcb_pixmap_t icon_mask;
    ///     xcb_window_t window_group;
    /// } xcb_icccm_wm_hints_t;
    /// ```
    ///
    /// Data without `window_group` is accepted, with no window group.
    fn try_from(from: &[u32]) -> std::result::Result<Self, HintsError> {
        check_len(from, WM_HINTS_MIN_LEN)?;

        // unknown bits are ignored rather than rejected
        let mut flags = WmHintsFlags::from_bits_truncate(from[0]);
        let window_group = match from.get(8) {
            Some(group) => Xid(*group),
            None => {
                flags.remove(WmHintsFlags::WINDOW_GROUP_HINT);
                Xid(0)
            }
        };

        let accepts_input = !flags.contains(WmHintsFlags::INPUT_HINT) || from[1] > 0;

        let initial_state = if flags.contains(WmHintsFlags::STATE_HINT) {
            WmState::try_from(from[2])?
        } else {
            WmState::Normal
        };

        Ok(WmHints {
            flags,
            accepts_input,
            initial_state,
            icon_pixmap: from[3],
            icon_window: Xid(from[4]),
            icon_pos: (from[5] as i32, from[6] as i32),
            icon_mask: from[7],
            window_group,
        })
    }
}

/// ICCCM-defined window size hints (WM_SIZE_HINTS).
///
/// A field is `Some` only if its flag is set.
/// Position and Size are outdated and only exist for
/// backwards compatibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct WmSizeHints {
    pub flags: WmSizeHintsFlags,
    pub position: Option<(i32, i32)>,
    pub size: Option<(i32, i32)>,
    pub min_size: Option<(i32, i32)>,
    pub max_size: Option<(i32, i32)>,
    pub resize_inc: Option<(i32, i32)>,
    pub min_aspect: Option<(i32, i32)>,
    pub max_aspect: Option<(i32, i32)>,
    pub base_size: Option<(i32, i32)>,
    pub gravity: Option<u32>,
}

impl WmSizeHints {
    /// Returns an empty `WmSizeHints`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Test whether `flag` is set.
    pub fn is_set(&self, flag: WmSizeHintsFlags) -> bool {
        self.flags.contains(flag)
    }
}

impl TryFrom<&[u32]> for WmSizeHints {
    type Error = HintsError;

    /// Parses WmSizeHints according to the following C struct definition:
    ///
    /// ```c
    /// typedef struct {
    ///     uint32_t flags;
    ///     int32_t x, y;
    ///     int32_t width, height;
    ///     int32_t min_width, min_height;
    ///     int32_t max_width, max_height;
    ///     int32_t width_inc, height_inc;
    ///     int32_t min_aspect_num, min_aspect_den;
    ///     int32_t max_aspect_num, max_aspect_den;
    ///     int32_t base_width, base_height;
    ///     uint32_t win_gravity;
    /// } xcb_size_hints_t;
    /// ```
    ///
    /// Pre-ICCCM data ends before `base_width`; base size and
    /// gravity are then unset whatever the flags say.
    fn try_from(from: &[u32]) -> std::result::Result<Self, HintsError> {
        use WmSizeHintsFlags as WMSHFlags;

        check_len(from, WM_SIZE_HINTS_MIN_LEN)?;

        let mut flags = WMSHFlags::from_bits_truncate(from[0]);
        if from.len() < WM_SIZE_HINTS_LEN {
            flags.remove(WMSHFlags::P_BASE_SIZE | WMSHFlags::P_WIN_GRAVITY);
        }
        let pair = |flag: WMSHFlags, idx: usize| {
            if flags.intersects(flag) {
                Some((from[idx] as i32, from[idx + 1] as i32))
            } else {
                None
            }
        };

        Ok(WmSizeHints {
            flags,
            position: pair(WMSHFlags::US_POSITION | WMSHFlags::P_POSITION, 1),
            size: pair(WMSHFlags::US_SIZE | WMSHFlags::P_SIZE, 3),
            min_size: pair(WMSHFlags::P_MIN_SIZE, 5),
            max_size: pair(WMSHFlags::P_MAX_SIZE, 7),
            resize_inc: pair(WMSHFlags::P_RESIZE_INC, 9),
            min_aspect: pair(WMSHFlags::P_ASPECT, 11),
            max_aspect: pair(WMSHFlags::P_ASPECT, 13),
            base_size: pair(WMSHFlags::P_BASE_SIZE, 15),
            gravity: flags.contains(WMSHFlags::P_WIN_GRAVITY).then(|| from[17]),
        })
    }
}

/// Motif window manager hints (_MOTIF_WM_HINTS).
///
/// Only the first three fields are used; clients commonly set
/// just those.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct MotifHints {
    pub flags: MotifFlags,
    pub functions: MotifFunctions,
    pub decorations: MotifDecorations,
}

impl MotifHints {
    /// Does the window owning the hints provide its own decorations?
    pub fn undecorated(&self) -> bool {
        self.flags.contains(MotifFlags::DECORATIONS) && self.decorations.is_empty()
    }
}

impl TryFrom<&[u32]> for MotifHints {
    type Error = HintsError;

    fn try_from(from: &[u32]) -> std::result::Result<Self, HintsError> {
        check_len(from, MOTIF_HINTS_MIN_LEN)?;

        Ok(MotifHints {
            flags: MotifFlags::from_bits_truncate(from[0]),
            functions: MotifFunctions::from_bits_truncate(from[1]),
            decorations: MotifDecorations::from_bits_truncate(from[2]),
        })
    }
}

impl<'a, X: XConn> PropCodec<'a, X> {
    pub(crate) fn parse<T>(&self, window: XWindowID, property: XAtom, raw: &[u32]) -> Result<T>
    where
        T: for<'r> TryFrom<&'r [u32], Error = HintsError>,
    {
        T::try_from(raw).map_err(|e| XError::malformed(window, property, e.to_string()))
    }

    /// Reads `WM_NAME`, converting it from the locale encoding.
    pub fn wm_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_locale(window, self.atom(Atom::WmName))
    }

    /// Sets `WM_NAME` in the locale encoding.
    pub fn set_wm_name(&self, window: XWindowID, name: &str) -> Result<()> {
        self.set_string_locale(window, self.atom(Atom::WmName), name)
    }

    /// Reads `WM_ICON_NAME`, converting it from the locale encoding.
    pub fn wm_icon_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_locale(window, self.atom(Atom::WmIconName))
    }

    /// Reads `WM_CLASS`.
    ///
    /// Fails unless both the instance and the class name are present.
    pub fn wm_class(&self, window: XWindowID) -> Result<WmClass> {
        let property = self.atom(Atom::WmClass);
        let mut names = self.get_strings_locale(window, property)?.into_iter();

        match (names.next(), names.next()) {
            (Some(instance), Some(class)) => Ok(WmClass { instance, class }),
            _ => Err(XError::malformed(
                window,
                property,
                "expected an instance and a class name",
            )),
        }
    }

    /// Reads `WM_WINDOW_ROLE`.
    pub fn wm_window_role(&self, window: XWindowID) -> Result<String> {
        self.get_string_locale(window, self.atom(Atom::WmWindowRole))
    }

    /// Reads `WM_CLIENT_MACHINE`.
    pub fn wm_client_machine(&self, window: XWindowID) -> Result<String> {
        self.get_string_locale(window, self.atom(Atom::WmClientMachine))
    }

    /// Reads `WM_PROTOCOLS`, the protocols the client participates in.
    pub fn wm_protocols(&self, window: XWindowID) -> Result<Vec<XAtom>> {
        let raw = self.get_array32(
            window,
            self.atom(Atom::WmProtocols),
            self.atom(Atom::Atom),
        )?;
        Ok(raw.into_iter().map(Xid).collect())
    }

    /// Whether the client lists `protocol` in `WM_PROTOCOLS`.
    ///
    /// A missing `WM_PROTOCOLS` means no protocols are supported.
    pub fn supports_protocol(&self, window: XWindowID, protocol: Atom) -> Result<bool> {
        match self.wm_protocols(window) {
            Ok(protocols) => Ok(protocols.contains(&self.atom(protocol))),
            Err(XError::PropertyMissing { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Sends a `WM_PROTOCOLS` message such as `WM_DELETE_WINDOW`
    /// or `WM_TAKE_FOCUS` to the client itself.
    pub fn send_protocol(&self, window: XWindowID, protocol: Atom, time: u32) -> Result<()> {
        trace!("Sending {} to window {}", protocol, window);
        let event = ClientMessageEvent::with_longs(
            window,
            self.atom(Atom::WmProtocols),
            [*self.atom(protocol), time, 0, 0],
        );
        self.conn()
            .send_client_message(window, EventMask::NO_EVENT, event)
    }

    /// Asks the client to close `window` with `WM_DELETE_WINDOW`.
    pub fn send_delete_window(&self, window: XWindowID) -> Result<()> {
        self.send_protocol(window, Atom::WmDeleteWindow, CURRENT_TIME)
    }

    /// Reads `WM_TRANSIENT_FOR`.
    pub fn wm_transient_for(&self, window: XWindowID) -> Result<XWindowID> {
        self.get32(
            window,
            self.atom(Atom::WmTransientFor),
            self.atom(Atom::Window),
        )
        .map(Xid)
    }

    /// Reads `WM_CLIENT_LEADER`.
    pub fn wm_client_leader(&self, window: XWindowID) -> Result<XWindowID> {
        self.get32(
            window,
            self.atom(Atom::WmClientLeader),
            self.atom(Atom::Window),
        )
        .map(Xid)
    }

    /// Reads `WM_STATE` as the state and the icon window.
    pub fn wm_state(&self, window: XWindowID) -> Result<(WmState, XWindowID)> {
        let property = self.atom(Atom::WmState);
        let raw = self.get_fixed::<u32>(window, property, property, 2)?;

        let state = WmState::try_from(raw[0])
            .map_err(|e| XError::malformed(window, property, e.to_string()))?;
        Ok((state, Xid(raw[1])))
    }

    /// Sets `WM_STATE`.
    pub fn set_wm_state(&self, window: XWindowID, state: WmState, icon: XWindowID) -> Result<()> {
        let property = self.atom(Atom::WmState);
        self.set_array32(window, property, property, &[state as u32, *icon])
    }

    /// Reads `WM_HINTS`.
    pub fn wm_hints(&self, window: XWindowID) -> Result<WmHints> {
        let property = self.atom(Atom::WmHints);
        let raw = self.get_all::<u32>(window, property, property)?;
        self.parse(window, property, &raw)
    }

    /// Reads `WM_NORMAL_HINTS`.
    pub fn wm_normal_hints(&self, window: XWindowID) -> Result<WmSizeHints> {
        let property = self.atom(Atom::WmNormalHints);
        let raw = self.get_all::<u32>(window, property, self.atom(Atom::WmSizeHints))?;
        self.parse(window, property, &raw)
    }

    /// Reads `_MOTIF_WM_HINTS`.
    pub fn motif_hints(&self, window: XWindowID) -> Result<MotifHints> {
        let property = self.atom(Atom::MotifWmHints);
        let raw = self.get_fixed::<u32>(window, property, property, MOTIF_HINTS_MIN_LEN)?;
        self.parse(window, property, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x::{
        dummy::DummyConn,
        encoding::Locale,
        property::tests::{setup, WIN},
    };

    #[test]
    fn test_wm_hints_parsing() {
        let raw = [
            (WmHintsFlags::INPUT_HINT | WmHintsFlags::STATE_HINT | WmHintsFlags::URGENCY_HINT)
                .bits(),
            0,
            3,
            0,
            0,
            10,
            20,
            0,
            0x400,
        ];
        let hints = WmHints::try_from(&raw[..]).expect("valid hints");

        assert!(hints.urgent());
        assert!(!hints.accepts_input);
        assert_eq!(hints.initial_state, WmState::Iconic);
        assert_eq!(hints.icon_pos, (10, 20));
        assert_eq!(hints.window_group, Xid(0x400));

        let bad_state = [WmHintsFlags::STATE_HINT.bits(), 0, 7, 0, 0, 0, 0, 0, 0];
        assert!(WmHints::try_from(&bad_state[..]).is_err());
        assert_eq!(
            WmHints::try_from(&raw[..4]),
            Err(HintsError::TooShort {
                expected: 8,
                got: 4
            })
        );

        // without window_group
        let mut old = raw;
        old[0] |= WmHintsFlags::WINDOW_GROUP_HINT.bits();
        let hints = WmHints::try_from(&old[..WM_HINTS_MIN_LEN]).expect("valid old hints");
        assert_eq!(hints.window_group, Xid(0));
        assert!(!hints.is_set(WmHintsFlags::WINDOW_GROUP_HINT));
        assert_eq!(hints.icon_pos, (10, 20));
    }

    #[test]
    fn test_size_hints_parsing() {
        let mut raw = [0u32; WM_SIZE_HINTS_LEN];
        raw[0] = (WmSizeHintsFlags::P_SIZE | WmSizeHintsFlags::P_MIN_SIZE).bits();
        raw[3] = 640;
        raw[4] = 480;
        raw[5] = 100;
        raw[6] = (-1i32) as u32;

        let hints = WmSizeHints::try_from(&raw[..]).expect("valid hints");
        assert_eq!(hints.size, Some((640, 480)));
        assert_eq!(hints.min_size, Some((100, -1)));
        assert_eq!(hints.position, None);
        assert_eq!(hints.gravity, None);

        raw[0] |= (WmSizeHintsFlags::P_BASE_SIZE | WmSizeHintsFlags::P_WIN_GRAVITY).bits();
        raw[15] = 20;
        raw[16] = 10;
        raw[17] = 5;
        let hints = WmSizeHints::try_from(&raw[..]).expect("valid hints");
        assert_eq!(hints.base_size, Some((20, 10)));
        assert_eq!(hints.gravity, Some(5));

        // pre-ICCCM data has no base size or gravity
        let hints = WmSizeHints::try_from(&raw[..WM_SIZE_HINTS_MIN_LEN]).expect("valid old hints");
        assert_eq!(hints.size, Some((640, 480)));
        assert_eq!(hints.base_size, None);
        assert_eq!(hints.gravity, None);
        assert!(!hints.is_set(WmSizeHintsFlags::P_BASE_SIZE));

        assert!(WmSizeHints::try_from(&raw[..14]).is_err());
    }

    #[test]
    fn test_hints_through_codec() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();
        let motif = atoms.get(Atom::MotifWmHints);

        props
            .set_array32(WIN, motif, motif, &[MotifFlags::DECORATIONS.bits(), 0, 0])
            .unwrap();
        assert!(props.motif_hints(WIN).unwrap().undecorated());

        props.set_array32(WIN, motif, motif, &[2, 0]).unwrap();
        assert!(matches!(
            props.motif_hints(WIN),
            Err(XError::PropertyMalformed { .. })
        ));

        let wm_hints = atoms.get(Atom::WmHints);
        props
            .set_array32(WIN, wm_hints, wm_hints, &[WmHintsFlags::STATE_HINT.bits(), 0, 9, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert!(matches!(
            props.wm_hints(WIN),
            Err(XError::PropertyMalformed { .. })
        ));

        // short forms written by older clients still read
        props
            .set_array32(WIN, wm_hints, wm_hints, &[WmHintsFlags::INPUT_HINT.bits(), 1, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert!(props.wm_hints(WIN).unwrap().accepts_input);

        let normal = atoms.get(Atom::WmNormalHints);
        let mut old = [0u32; WM_SIZE_HINTS_MIN_LEN];
        old[0] = WmSizeHintsFlags::P_MIN_SIZE.bits();
        old[5] = 200;
        old[6] = 100;
        props
            .set_array32(WIN, normal, atoms.get(Atom::WmSizeHints), &old)
            .unwrap();
        assert_eq!(props.wm_normal_hints(WIN).unwrap().min_size, Some((200, 100)));

        props
            .set_array32(WIN, normal, atoms.get(Atom::WmSizeHints), &old[..10])
            .unwrap();
        assert!(matches!(
            props.wm_normal_hints(WIN),
            Err(XError::PropertyMalformed { .. })
        ));
    }

    #[test]
    fn test_wm_state_round_trip() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        props.set_wm_state(WIN, WmState::Iconic, Xid(0x300)).unwrap();
        assert_eq!(props.wm_state(WIN).unwrap(), (WmState::Iconic, Xid(0x300)));
    }

    #[test]
    fn test_wm_class() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config)
            .unwrap()
            .with_locale(Locale::latin1());
        let (class, string) = (atoms.get(Atom::WmClass), atoms.get(Atom::String));

        props
            .set_string_list(WIN, class, string, &["xterm", "XTerm"])
            .unwrap();
        assert_eq!(
            props.wm_class(WIN).unwrap(),
            WmClass {
                instance: "xterm".into(),
                class: "XTerm".into()
            }
        );

        props.set_string_list(WIN, class, string, &["xterm"]).unwrap();
        assert!(props.wm_class(WIN).is_err());
    }

    #[test]
    fn test_protocols() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        assert!(!props.supports_protocol(WIN, Atom::WmDeleteWindow).unwrap());

        props
            .set_array32(
                WIN,
                atoms.get(Atom::WmProtocols),
                atoms.get(Atom::Atom),
                &[*atoms.get(Atom::WmDeleteWindow)],
            )
            .unwrap();
        assert!(props.supports_protocol(WIN, Atom::WmDeleteWindow).unwrap());
        assert!(!props.supports_protocol(WIN, Atom::WmTakeFocus).unwrap());

        props.send_delete_window(WIN).unwrap();
        let (dest, mask, event) = conn.sent_messages()[0];
        assert_eq!(dest, WIN);
        assert_eq!(mask, EventMask::NO_EVENT);
        assert_eq!(event.type_, atoms.get(Atom::WmProtocols));
        assert_eq!(
            event.data.as_u32(),
            Some(&[*atoms.get(Atom::WmDeleteWindow), CURRENT_TIME, 0, 0, 0])
        );
        assert_ne!(dest, DummyConn::ROOT);
    }

    #[test]
    fn test_transient_for() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        assert!(matches!(
            props.wm_transient_for(WIN),
            Err(XError::PropertyMissing { .. })
        ));
        props
            .set32(
                WIN,
                atoms.get(Atom::WmTransientFor),
                atoms.get(Atom::Window),
                0x500,
            )
            .unwrap();
        assert_eq!(props.wm_transient_for(WIN).unwrap(), Xid(0x500));
    }
}
