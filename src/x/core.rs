//! Core types for interfacing with the X server.
//!
//! This module defines the backend-agnostic types used throughout
//! this crate for talking to the X server: resource IDs, event masks,
//! property formats, the raw property reply, and the error type.

use core::ops::{Deref, DerefMut};
use std::fmt::{self, Display};

use thiserror::Error;

#[doc(inline)]
pub use super::traits::XConn;

//* ========== X RESOURCE IDS ========== *//

/// General constant for expressing None when passing X IDs.
pub const XID_NONE: Xid = Xid::zero();

/// Wrapper type to represent IDs used by the X server.
///
/// This is used by the server to identify all sorts
/// of X resources, including windows and atoms. The
/// full unsigned 32-bit range is valid.
///
/// You can create an Xid from a `u32`:
///
/// ```rust
/// use wmprops::x::Xid;
///
/// let id = Xid::from(69);
/// let val = id.val();
///
/// assert_eq!(val, 69);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Default)]
pub struct Xid(pub(crate) u32);

impl Xid {
    /// Return an Xid set to 0.
    pub const fn zero() -> Self {
        Xid(0)
    }

    /// Returns the internal value of the Xid.
    pub const fn val(&self) -> u32 {
        self.0
    }

    /// Whether this is the `None` resource.
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Xid {
    fn from(f: u32) -> Xid {
        Xid(f)
    }
}

impl From<Xid> for u32 {
    fn from(f: Xid) -> u32 {
        f.0
    }
}

impl Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xid({})", self.0)
    }
}

impl Deref for Xid {
    type Target = u32;

    fn deref(&self) -> &u32 {
        &self.0
    }
}

impl DerefMut for Xid {
    fn deref_mut(&mut self) -> &mut u32 {
        &mut self.0
    }
}

/// An X server ID for a given window.
pub type XWindowID = Xid;

/// An X Atom.
pub type XAtom = Xid;

/// The atom passed to `GetProperty` to accept any property type.
pub const ANY_PROPERTY_TYPE: XAtom = Xid::zero();

/// The timestamp meaning "now" in client messages.
pub const CURRENT_TIME: u32 = 0;

//* ========== EVENT MASKS ========== *//

bitflags! {

/// The subset of X event masks used by this crate.
///
/// The bit values are the ones defined by the core protocol,
/// so they can be passed to a backend unchanged.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventMask: u32 {
    /// Structure changes on the window itself.
    const STRUCTURE_NOTIFY      = 1 << 17;
    /// Structure changes on the window's children.
    const SUBSTRUCTURE_NOTIFY   = 1 << 19;
    /// Redirection of structure requests on the window's children.
    const SUBSTRUCTURE_REDIRECT = 1 << 20;
    /// Changes to the window's properties.
    const PROPERTY_CHANGE       = 1 << 22;
}

}

impl EventMask {
    /// The empty mask, deselecting all events.
    pub const NO_EVENT: EventMask = EventMask::empty();
}

//* ========== PROPERTY DATA ========== *//

/// How a property write combines with the existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropMode {
    /// Overwrite the whole property.
    Replace = 0,
    /// Insert the data before the existing value.
    Prepend = 1,
    /// Insert the data after the existing value.
    Append = 2,
}

/// The element width of a property, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropFormat {
    /// 8-bit elements.
    Format8 = 8,
    /// 16-bit elements.
    Format16 = 16,
    /// 32-bit elements.
    Format32 = 32,
}

impl PropFormat {
    /// Parses the format byte of a `GetProperty` reply.
    ///
    /// Returns `None` for 0 (no such property) and invalid sizes.
    pub fn from_raw(format: u8) -> Option<Self> {
        match format {
            8 => Some(Self::Format8),
            16 => Some(Self::Format16),
            32 => Some(Self::Format32),
            _ => None,
        }
    }

    /// The format as sent on the wire.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// The size of a single element in bytes.
    pub const fn size(self) -> usize {
        (self as usize) / 8
    }
}

impl Display for PropFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// The undecoded reply to a `GetProperty` request.
///
/// `value` holds the elements in native byte order,
/// exactly as the backend received them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawProperty {
    /// The actual type of the property, or `XID_NONE` if it does not exist.
    pub type_: XAtom,
    /// The actual format of the property, or 0 if it does not exist.
    pub format: u8,
    /// The number of bytes remaining after the returned data.
    pub bytes_after: u32,
    /// The returned data.
    pub value: Vec<u8>,
}

impl RawProperty {
    /// Whether the server reported the property as nonexistent.
    pub fn is_missing(&self) -> bool {
        self.type_.is_none() && self.format == 0
    }

    /// The number of elements contained in `value`.
    pub fn len(&self) -> usize {
        match PropFormat::from_raw(self.format) {
            Some(f) => self.value.len() / f.size(),
            None => 0,
        }
    }

    /// Whether the reply carries no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//* ========== ERRORS ========== *//

/// Possible errors returned by the X connection and the property codec.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum XError {
    /// An error when establishing or using the connection with the server.
    ///
    /// This is not recoverable.
    #[error("X connection error: {0}")]
    Connection(String),

    /// An error caused by a malformed protocol request.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// No screens were found on the server.
    #[error("Could not find screens from X server")]
    NoScreens,

    /// An internal server error.
    #[error("X server error: {0}")]
    ServerError(String),

    /// The property does not exist on the window.
    #[error("property {property} is not set on window {window}")]
    PropertyMissing {
        /// The window that was queried.
        window: XWindowID,
        /// The property that was requested.
        property: XAtom,
    },

    /// The property exists but does not have the expected shape.
    #[error("property {property} on window {window} is malformed: {reason}")]
    PropertyMalformed {
        /// The window that was queried.
        window: XWindowID,
        /// The property that was requested.
        property: XAtom,
        /// What was wrong with it.
        reason: String,
    },

    /// The configuration could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl XError {
    /// Whether the error means the connection is unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, XError::Connection(_))
    }

    pub(crate) fn malformed<S: Into<String>>(
        window: XWindowID,
        property: XAtom,
        reason: S,
    ) -> Self {
        XError::PropertyMalformed {
            window,
            property,
            reason: reason.into(),
        }
    }
}

/// Result type for XConn and the property codec.
pub type Result<T> = ::core::result::Result<T, XError>;
