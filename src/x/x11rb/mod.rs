use core::marker::PhantomData;

use x11rb::connection::Connection;
use x11rb::errors;
use x11rb::rust_connection::RustConnection;

use custom_debug_derive::Debug;
use tracing::{debug, trace};

use super::{
    core::{Result, XError, XWindowID, Xid},
    ConnStatus, Initialized, Uninitialized,
};

mod convert;
mod xconn;

/// A connection to an X server, backed by the x11rb library.
///
/// This is a very simple connection to the X server
/// and is completely synchronous, despite the async capabilities
/// of the underlying library. Every write is checked before
/// returning, so errors surface from the call that caused them.
///
/// It implements [XConn][1] and thus can be used with the
/// atom table, the property codec and the property window registry.
///
/// # Usage
///
/// ```no_run
/// use wmprops::x::x11rb::X11RBConn;
///
/// let conn = X11RBConn::connect().expect("Connection error");
/// let conn = conn.init().expect("Could not initialize");
///
/// /* or: */
/// let conn = X11RBConn::new().expect("Connection error");
/// ```
///
/// [1]: crate::x::core::XConn
#[derive(Debug)]
pub struct X11RBConn<S: ConnStatus> {
    #[debug(skip)]
    conn: RustConnection,
    root: XWindowID,
    idx: usize,
    _marker: PhantomData<S>,
}

impl X11RBConn<Uninitialized> {
    /// Connect to the X server and allocate a new Connection.
    ///
    /// The display is taken from the `DISPLAY` environment variable.
    pub fn connect() -> Result<Self> {
        let (conn, idx) = x11rb::connect(None)?;
        trace!("Connected to x server, got preferred screen {}", idx);

        Ok(Self {
            conn,
            root: Xid::zero(),
            idx,
            _marker: PhantomData,
        })
    }

    /// Initializes the connection.
    ///
    /// This looks up the root window of the preferred screen.
    pub fn init(self) -> Result<X11RBConn<Initialized>> {
        let root = match self.conn.setup().roots.get(self.idx) {
            Some(screen) => Xid(screen.root),
            None => return Err(XError::NoScreens),
        };
        debug!("Got root: {}", root);

        Ok(X11RBConn {
            conn: self.conn,
            root,
            idx: self.idx,
            _marker: PhantomData,
        })
    }
}

impl X11RBConn<Initialized> {
    /// Shortcut static method for directly creating
    /// an initialized connection.
    pub fn new() -> Result<Self> {
        X11RBConn::connect()?.init()
    }

    /// Exposes `X11RBConn`'s internal connection.
    ///
    /// Use this to receive events, which can then be converted
    /// into [`PropertyEvent`](crate::x::PropertyEvent)s and
    /// [`ClientMessageEvent`](crate::x::ClientMessageEvent)s.
    pub fn conn(&self) -> &RustConnection {
        &self.conn
    }

    /// The index of the screen in use.
    pub fn screen_idx(&self) -> usize {
        self.idx
    }

    /// Flushes all pending requests to the server.
    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}

impl From<errors::ConnectionError> for XError {
    fn from(e: errors::ConnectionError) -> XError {
        use errors::ConnectionError::*;
        match e {
            UnknownError | InsufficientMemory | FdPassingFailed => {
                XError::Connection(e.to_string())
            }
            IoError(e) => XError::Connection(e.to_string()),
            other => XError::Protocol(other.to_string()),
        }
    }
}

impl From<errors::ConnectError> for XError {
    fn from(e: errors::ConnectError) -> XError {
        XError::Connection(e.to_string())
    }
}

impl From<errors::ReplyError> for XError {
    fn from(e: errors::ReplyError) -> XError {
        match e {
            errors::ReplyError::ConnectionError(e) => e.into(),
            errors::ReplyError::X11Error(e) => XError::Protocol(format!("{:?}", e.error_kind)),
        }
    }
}

impl From<errors::ReplyOrIdError> for XError {
    fn from(e: errors::ReplyOrIdError) -> XError {
        if let errors::ReplyOrIdError::ConnectionError(e) = e {
            e.into()
        } else {
            XError::ServerError(e.to_string())
        }
    }
}
