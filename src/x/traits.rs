//! The trait that defines the interface to the X server.
//!
//! `XConn` is deliberately small: it is the set of protocol requests
//! the property layer needs and nothing more. Everything above it
//! (the atom table, the property codec and the property window
//! registry) is written purely in terms of these methods.
//!
//! ```text
//!    PropCodec    PropWindows
//!         \           /
//!          \         /
//!            Atoms
//!              |
//!            XConn
//!              |
//!      ------------------
//!      |                |
//!  X11RBConn       (your backend)
//! ```

use super::core::{EventMask, PropFormat, PropMode, RawProperty, Result, XAtom, XWindowID};
use super::event::ClientMessageEvent;

/// A trait used to define the interface between the property layer
/// and the X server.
///
/// Its methods map directly to X protocol requests and are all
/// synchronous: reads wait for the reply, writes are checked before
/// returning, so a failed round trip always surfaces as an `Err`
/// from the method that caused it.
///
/// # Implementors
///
/// This crate provides [X11RBConn][1], backed by the `x11rb` library.
///
/// [1]: crate::x::x11rb::X11RBConn
pub trait XConn {
    /// Returns the root window of the screen in use.
    fn root(&self) -> XWindowID;

    /// Interns an atom by name, creating it on the server if it
    /// does not exist yet.
    fn intern_atom(&self, name: &str) -> Result<XAtom>;

    /// Looks up the name of an atom on the server.
    fn atom_name(&self, atom: XAtom) -> Result<String>;

    /// Reads part of a window property.
    ///
    /// `long_offset` and `long_length` are in units of 32 bits,
    /// as in the `GetProperty` request. `type_` may be
    /// [`ANY_PROPERTY_TYPE`](super::core::ANY_PROPERTY_TYPE).
    ///
    /// The reply is returned as-is: a missing property is *not* an
    /// error at this level.
    fn get_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        long_offset: u32,
        long_length: u32,
    ) -> Result<RawProperty>;

    /// Writes a window property.
    ///
    /// `data` holds whole elements of `format` in native byte order.
    fn change_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        format: PropFormat,
        mode: PropMode,
        data: &[u8],
    ) -> Result<()>;

    /// Deletes a window property. Deleting a missing property succeeds.
    fn delete_property(&self, window: XWindowID, property: XAtom) -> Result<()>;

    /// Sends a client message to `destination`, delivered to clients
    /// that selected any event in `mask` on it.
    fn send_client_message(
        &self,
        destination: XWindowID,
        mask: EventMask,
        event: ClientMessageEvent,
    ) -> Result<()>;

    /// Replaces the event mask selected by this client on `window`.
    fn select_input(&self, window: XWindowID, mask: EventMask) -> Result<()>;
}
