//! Window property access for EWMH/ICCCM compliant X11 window managers.
//!
//! `wmprops` is the layer of a window manager that sits between the
//! client manager and the raw X protocol. It provides three things:
//!
//! - An [atom table](x::atom::Atoms) that interns every well-known
//!   atom exactly once and is immutable afterwards.
//! - A [property codec](x::property::PropCodec) that reads and writes
//!   window properties as typed values, covering the 8, 16 and 32-bit
//!   property formats and locale to UTF-8 conversion.
//! - A [property window registry](x::propwin::PropWindows) that tracks
//!   which clients care about property changes on auxiliary windows,
//!   and keeps the X event subscription in sync with that.
//!
//! All of these talk to the X server through the [`XConn`](x::XConn)
//! trait, so they can be driven by the provided x11rb backend or by
//! anything else that speaks the protocol.
//!
//! # Example
//!
//! ```no_run
//! use wmprops::x::{Atom, Atoms, X11RBConn, XConn};
//! use wmprops::x::property::PropCodec;
//! use wmprops::PropConfig;
//!
//! let conn = X11RBConn::new().expect("could not connect");
//! let atoms = Atoms::intern_all(&conn).expect("could not intern atoms");
//! let config = PropConfig::new();
//!
//! let props = PropCodec::new(&conn, &atoms, &config).expect("bad config");
//! let root = conn.root();
//!
//! match props.current_desktop(root) {
//!     Ok(desktop) => println!("on desktop {}", desktop),
//!     Err(e) => println!("could not get current desktop: {}", e),
//! }
//! # let _ = atoms.get(Atom::NetCurrentDesktop);
//! ```

#[macro_use]
extern crate bitflags;

pub mod config;
pub mod x;

#[doc(inline)]
pub use crate::config::{PropConfig, PropConfigBuilder};
#[doc(inline)]
pub use crate::x::core::{Result, XError};
