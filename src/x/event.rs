//! Event types exchanged through the property layer.

use std::convert::TryFrom;

use super::core::{XAtom, XWindowID};

/// Data associated with a property change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEvent {
    /// The window whose property changed.
    pub window: XWindowID,
    /// The property that changed.
    pub atom: XAtom,
    /// The time of the change.
    pub time: u32,
    /// Whether the property was deleted rather than changed.
    pub deleted: bool,
}

/// A client message, as sent with `SendEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientMessageEvent {
    /// The window the message is about.
    pub window: XWindowID,
    /// The message type.
    pub type_: XAtom,
    /// The message data.
    pub data: ClientMessageData,
}

impl ClientMessageEvent {
    /// Creates a 32-bit format message carrying four longs,
    /// the shape used by every EWMH request. The fifth long is 0.
    pub fn with_longs(window: XWindowID, type_: XAtom, data: [u32; 4]) -> Self {
        Self {
            window,
            type_,
            data: ClientMessageData::U32([data[0], data[1], data[2], data[3], 0]),
        }
    }
}

/// The different formats of a Client message's data,
/// as specified by ICCCM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMessageData {
    /// 8-bit format.
    U8([u8; 20]),
    /// 16-bit format.
    U16([u16; 10]),
    /// 32-bit format.
    U32([u32; 5]),
}

impl ClientMessageData {
    /// The format of the data, in bits.
    pub fn format(&self) -> u8 {
        match self {
            Self::U8(_) => 8,
            Self::U16(_) => 16,
            Self::U32(_) => 32,
        }
    }

    /// Returns the 32-bit data if the message is in that format.
    pub fn as_u32(&self) -> Option<&[u32; 5]> {
        match self {
            Self::U32(data) => Some(data),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_u8(&self) -> bool {
        matches!(self, Self::U8(_))
    }

    #[inline(always)]
    pub fn is_u16(&self) -> bool {
        matches!(self, Self::U16(_))
    }

    #[inline(always)]
    pub fn is_u32(&self) -> bool {
        matches!(self, Self::U32(_))
    }
}

macro_rules! _impl_tryfrom {
    ($t:ty, $count:expr, $variant:expr) => {
        impl TryFrom<&[$t]> for ClientMessageData {
            type Error = std::array::TryFromSliceError;

            fn try_from(data: &[$t]) -> Result<Self, Self::Error> {
                Ok($variant(<[$t; $count]>::try_from(data)?))
            }
        }
    };
}

_impl_tryfrom!(u8, 20, Self::U8);
_impl_tryfrom!(u16, 10, Self::U16);
_impl_tryfrom!(u32, 5, Self::U32);
