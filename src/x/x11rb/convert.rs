//! Conversions between x11rb event types and our own.

use std::convert::TryFrom;

use x11rb::protocol::xproto;

use crate::x::{
    core::{EventMask, XError, Xid},
    event::{ClientMessageData, ClientMessageEvent, PropertyEvent},
};

//* event mask conversions
#[doc(hidden)]
impl From<EventMask> for xproto::EventMask {
    fn from(from: EventMask) -> xproto::EventMask {
        xproto::EventMask::from(from.bits())
    }
}

#[doc(hidden)]
impl From<&xproto::PropertyNotifyEvent> for PropertyEvent {
    fn from(event: &xproto::PropertyNotifyEvent) -> Self {
        PropertyEvent {
            window: Xid(event.window),
            atom: Xid(event.atom),
            time: event.time,
            deleted: event.state == xproto::Property::DELETE,
        }
    }
}

#[doc(hidden)]
impl TryFrom<&xproto::ClientMessageEvent> for ClientMessageData {
    type Error = XError;

    fn try_from(event: &xproto::ClientMessageEvent) -> Result<Self, XError> {
        match event.format {
            8 => Ok(Self::U8(event.data.as_data8())),
            16 => Ok(Self::U16(event.data.as_data16())),
            32 => Ok(Self::U32(event.data.as_data32())),
            n => Err(XError::Protocol(format!(
                "client message with invalid format {}",
                n
            ))),
        }
    }
}

#[doc(hidden)]
impl TryFrom<&xproto::ClientMessageEvent> for ClientMessageEvent {
    type Error = XError;

    fn try_from(event: &xproto::ClientMessageEvent) -> Result<Self, XError> {
        Ok(ClientMessageEvent {
            window: Xid(event.window),
            type_: Xid(event.type_),
            data: ClientMessageData::try_from(event)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_notify_conversion() {
        let raw = xproto::PropertyNotifyEvent {
            response_type: xproto::PROPERTY_NOTIFY_EVENT,
            sequence: 0,
            window: 0x400,
            atom: 300,
            time: 1234,
            state: xproto::Property::DELETE,
        };
        let ev = PropertyEvent::from(&raw);

        assert_eq!(ev.window, Xid(0x400));
        assert_eq!(ev.atom, Xid(300));
        assert!(ev.deleted);
    }

    #[test]
    fn test_client_message_conversion() {
        let raw = xproto::ClientMessageEvent::new(32, 0x400u32, 301u32, [1u32, 2, 3, 4, 5]);
        let ev = ClientMessageEvent::try_from(&raw).expect("valid format");

        assert_eq!(ev.window, Xid(0x400));
        assert_eq!(ev.type_, Xid(301));
        assert_eq!(ev.data.as_u32(), Some(&[1, 2, 3, 4, 5]));

        let mut bad = raw.clone();
        bad.format = 24;
        assert!(ClientMessageEvent::try_from(&bad).is_err());
    }
}
