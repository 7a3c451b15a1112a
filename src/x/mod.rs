//! Types and traits providing a unified interface with the X server.
//!
//! The core of this module is the `XConn` trait, which defines the
//! requests the property layer makes of the X server. Everything else
//! builds on top of it:
//!
//! - [`atom`] holds the atom table,
//! - [`property`] holds the property codec,
//! - [`icccm`] and [`ewmh`] hold typed helpers for the standard
//!   properties and client messages,
//! - [`propwin`] holds the property window registry.
//!
//! For a concrete implementation of `XConn`, the [`x11rb`] submodule
//! offers one backed by the `x11rb` library.
//!
//! ## Connection Object Initialization
//!
//! The `XConn` implementor has two states: uninitialized, and
//! initialized, marked in its type constructor. Uninitialized
//! connections have only established a connection to the server
//! and have not yet looked up the root window. `XConn` is only
//! implemented for initialized connections, so users have to call
//! the `init` method for a connection object to be usable.

pub mod atom;
pub mod core;
pub mod encoding;
pub mod event;
pub mod ewmh;
pub mod icccm;
pub mod property;
pub mod propwin;
mod traits;

/// Implementation of `XConn` backed by the `x11rb` library.
pub mod x11rb;

#[doc(inline)]
pub use self::core::{EventMask, Result, XAtom, XConn, XError, XWindowID, Xid};
#[doc(inline)]
pub use atom::{Atom, Atoms};
#[doc(inline)]
pub use event::{ClientMessageEvent, PropertyEvent};
#[doc(inline)]
pub use property::{PropCodec, Property};
#[doc(inline)]
pub use propwin::{PropWinType, PropWindows};

#[doc(inline)]
pub use self::x11rb::X11RBConn;
#[doc(inline)]
pub use status::ConnStatus;
pub(crate) use status::{Initialized, Uninitialized};

/* since xconn implementations can only be tested
on a system with an X server running, disable this
unless we specifically enable the `protocol` cfg flag
which should only be be used if testing locally */

/* the dummy connection does not talk to a server,
so keep it enabled for standard testing */
#[cfg(test)]
pub(crate) mod dummy;

pub mod status {
    //! Types for representing connection status.
    //!
    //! This module contains the [`ConnStatus`] sealed trait,
    //! as well as its two implementors, [`Initialized`] and
    //! [`Uninitialized`]. These are used to mark the state of
    //! the connection object, and act as guards to only
    //! expose [`XConn`](crate::x::XConn) methods when safe
    //! to do so.
    mod private {
        pub trait Sealed {}
    }

    /// A trait defining marker types `Uninitialized` and `Initialized`.
    pub trait ConnStatus: private::Sealed {}

    /// A marker struct indicating a connection is uninitialized.
    ///
    /// Uninitialized connections do not expose any methods.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Uninitialized;

    impl ConnStatus for Uninitialized {}
    impl private::Sealed for Uninitialized {}

    /// A marker type indicating a connection is initialized and can be used.
    ///
    /// Initialized connections expose all available methods.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Initialized;

    impl ConnStatus for Initialized {}
    impl private::Sealed for Initialized {}
}
