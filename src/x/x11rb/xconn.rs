//! Implementation of `XConn` for `X11RBConn`.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, ChangeWindowAttributesAux, ConnectionExt as XConnectionExt};

#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::trace;

use super::{Initialized, X11RBConn};
use crate::x::{
    core::{
        EventMask, PropFormat, PropMode, RawProperty, Result, XAtom, XConn, XError, XWindowID,
        Xid,
    },
    event::{ClientMessageData, ClientMessageEvent},
};

impl XConn for X11RBConn<Initialized> {
    fn root(&self) -> XWindowID {
        self.root
    }

    fn intern_atom(&self, name: &str) -> Result<XAtom> {
        Ok(Xid(self
            .conn
            .intern_atom(false, name.as_bytes())?
            .reply()?
            .atom))
    }

    fn atom_name(&self, atom: XAtom) -> Result<String> {
        trace!("Looking up name of atom {}", atom);

        let name = self.conn.get_atom_name(*atom)?.reply()?.name;
        String::from_utf8(name).map_err(|e| XError::ServerError(format!("invalid atom name: {}", e)))
    }

    #[cfg_attr(
        debug_assertions,
        instrument(target = "xconn", level = "trace", skip(self))
    )]
    fn get_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        long_offset: u32,
        long_length: u32,
    ) -> Result<RawProperty> {
        let r = self
            .conn
            .get_property(false, *window, *property, *type_, long_offset, long_length)?
            .reply()?;

        if r.type_ == x11rb::NONE {
            trace!("prop type is none");
        }

        Ok(RawProperty {
            type_: Xid(r.type_),
            format: r.format,
            bytes_after: r.bytes_after,
            value: r.value,
        })
    }

    #[cfg_attr(
        debug_assertions,
        instrument(target = "xconn", level = "trace", skip(self, data))
    )]
    fn change_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        format: PropFormat,
        mode: PropMode,
        data: &[u8],
    ) -> Result<()> {
        let mode = match mode {
            PropMode::Replace => xproto::PropMode::REPLACE,
            PropMode::Prepend => xproto::PropMode::PREPEND,
            PropMode::Append => xproto::PropMode::APPEND,
        };
        let count = u32::try_from(data.len() / format.size())
            .map_err(|_| XError::Protocol(format!("{} bytes is too long for a property", data.len())))?;

        self.conn
            .change_property(mode, *window, *property, *type_, format.bits(), count, data)?
            .check()?;
        Ok(())
    }

    fn delete_property(&self, window: XWindowID, property: XAtom) -> Result<()> {
        trace!("Deleting property {} on window {}", property, window);
        self.conn.delete_property(*window, *property)?.check()?;
        Ok(())
    }

    fn send_client_message(
        &self,
        destination: XWindowID,
        mask: EventMask,
        event: ClientMessageEvent,
    ) -> Result<()> {
        use xproto::ClientMessageData as XClientMessageData;
        use ClientMessageData::*;

        trace!(
            "Sending client message {} about window {} to {}",
            event.type_,
            event.window,
            destination
        );

        let (format, to_send) = match event.data {
            U8(bytes) => (8, XClientMessageData::from(bytes)),
            U16(words) => (16, XClientMessageData::from(words)),
            U32(dwords) => (32, XClientMessageData::from(dwords)),
        };

        let event = xproto::ClientMessageEvent::new(format, *event.window, *event.type_, to_send);

        self.conn
            .send_event(false, *destination, xproto::EventMask::from(mask), event)?
            .check()?;
        Ok(())
    }

    fn select_input(&self, window: XWindowID, mask: EventMask) -> Result<()> {
        trace!("Selecting {:?} on window {}", mask, window);

        self.conn
            .change_window_attributes(
                *window,
                &ChangeWindowAttributesAux::new().event_mask(xproto::EventMask::from(mask)),
            )?
            .check()?;
        self.conn.flush()?;
        Ok(())
    }
}
