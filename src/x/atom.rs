//! The atom table.
//!
//! Every well-known atom used by the property layer is named by a
//! variant of [`Atom`]. [`Atoms::intern_all`] resolves all of them
//! against the server once, at startup, and the resulting table is
//! never modified afterwards, so it can be shared by reference with
//! everything that needs it.
//!
//! A few EWMH "atoms" are really just integer constants passed in
//! client messages and properties. Those live here as plain enums
//! ([`Orientation`], [`Corner`], [`MoveResize`], [`StateAction`]
//! and [`RequestSource`]) and are never interned.
use std::collections::HashMap;
use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{
    AsRefStr, Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr,
};

use tracing::{debug, trace};

use super::core::{Result, XAtom, XConn, XID_NONE};

/// Internal representations of X atoms.
///
/// This allows for some measure of type safety around dealing with atoms.
/// The grouping below is for documentation only.
#[derive(
    AsRefStr,
    IntoStaticStr,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
)]
pub enum Atom {
    //* Basic types
    /// CARDINAL
    #[strum(serialize = "CARDINAL")]
    Cardinal,
    /// WINDOW
    #[strum(serialize = "WINDOW")]
    Window,
    /// PIXMAP
    #[strum(serialize = "PIXMAP")]
    Pixmap,
    /// ATOM
    #[strum(serialize = "ATOM")]
    Atom,
    /// STRING
    #[strum(serialize = "STRING")]
    String,
    /// UTF8_STRING
    #[strum(serialize = "UTF8_STRING")]
    UTF8String,
    /// MANAGER
    #[strum(serialize = "MANAGER")]
    Manager,

    //* ICCCM
    /// WM_COLORMAP_WINDOWS
    #[strum(serialize = "WM_COLORMAP_WINDOWS")]
    WmColormapWindows,
    /// WM_PROTOCOLS
    #[strum(serialize = "WM_PROTOCOLS")]
    WmProtocols,
    /// WM_STATE
    #[strum(serialize = "WM_STATE")]
    WmState,
    /// WM_CHANGE_STATE
    #[strum(serialize = "WM_CHANGE_STATE")]
    WmChangeState,
    /// WM_DELETE_WINDOW
    #[strum(serialize = "WM_DELETE_WINDOW")]
    WmDeleteWindow,
    /// WM_TAKE_FOCUS
    #[strum(serialize = "WM_TAKE_FOCUS")]
    WmTakeFocus,
    /// WM_NAME
    #[strum(serialize = "WM_NAME")]
    WmName,
    /// WM_ICON_NAME
    #[strum(serialize = "WM_ICON_NAME")]
    WmIconName,
    /// WM_CLASS
    #[strum(serialize = "WM_CLASS")]
    WmClass,
    /// WM_WINDOW_ROLE
    #[strum(serialize = "WM_WINDOW_ROLE")]
    WmWindowRole,
    /// WM_CLIENT_MACHINE
    #[strum(serialize = "WM_CLIENT_MACHINE")]
    WmClientMachine,
    /// WM_COMMAND
    #[strum(serialize = "WM_COMMAND")]
    WmCommand,
    /// WM_CLIENT_LEADER
    #[strum(serialize = "WM_CLIENT_LEADER")]
    WmClientLeader,
    /// WM_TRANSIENT_FOR
    #[strum(serialize = "WM_TRANSIENT_FOR")]
    WmTransientFor,
    /// WM_HINTS
    #[strum(serialize = "WM_HINTS")]
    WmHints,
    /// WM_NORMAL_HINTS
    #[strum(serialize = "WM_NORMAL_HINTS")]
    WmNormalHints,
    /// WM_SIZE_HINTS
    #[strum(serialize = "WM_SIZE_HINTS")]
    WmSizeHints,
    /// SM_CLIENT_ID
    #[strum(serialize = "SM_CLIENT_ID")]
    SmClientId,
    /// _MOTIF_WM_HINTS
    #[strum(serialize = "_MOTIF_WM_HINTS")]
    MotifWmHints,

    //* EWMH root window properties
    /// _NET_SUPPORTED
    #[strum(serialize = "_NET_SUPPORTED")]
    NetSupported,
    /// _NET_CLIENT_LIST
    #[strum(serialize = "_NET_CLIENT_LIST")]
    NetClientList,
    /// _NET_CLIENT_LIST_STACKING
    #[strum(serialize = "_NET_CLIENT_LIST_STACKING")]
    NetClientListStacking,
    /// _NET_NUMBER_OF_DESKTOPS
    #[strum(serialize = "_NET_NUMBER_OF_DESKTOPS")]
    NetNumberOfDesktops,
    /// _NET_DESKTOP_GEOMETRY
    #[strum(serialize = "_NET_DESKTOP_GEOMETRY")]
    NetDesktopGeometry,
    /// _NET_DESKTOP_VIEWPORT
    #[strum(serialize = "_NET_DESKTOP_VIEWPORT")]
    NetDesktopViewport,
    /// _NET_CURRENT_DESKTOP
    #[strum(serialize = "_NET_CURRENT_DESKTOP")]
    NetCurrentDesktop,
    /// _NET_DESKTOP_NAMES
    #[strum(serialize = "_NET_DESKTOP_NAMES")]
    NetDesktopNames,
    /// _NET_ACTIVE_WINDOW
    #[strum(serialize = "_NET_ACTIVE_WINDOW")]
    NetActiveWindow,
    /// _NET_RESTACK_WINDOW
    #[strum(serialize = "_NET_RESTACK_WINDOW")]
    NetRestackWindow,
    /// _NET_WORKAREA
    #[strum(serialize = "_NET_WORKAREA")]
    NetWorkarea,
    /// _NET_SUPPORTING_WM_CHECK
    #[strum(serialize = "_NET_SUPPORTING_WM_CHECK")]
    NetSupportingWmCheck,
    /// _NET_DESKTOP_LAYOUT
    #[strum(serialize = "_NET_DESKTOP_LAYOUT")]
    NetDesktopLayout,
    /// _NET_SHOWING_DESKTOP
    #[strum(serialize = "_NET_SHOWING_DESKTOP")]
    NetShowingDesktop,

    //* EWMH root window messages
    /// _NET_CLOSE_WINDOW
    #[strum(serialize = "_NET_CLOSE_WINDOW")]
    NetCloseWindow,
    /// _NET_WM_MOVERESIZE
    #[strum(serialize = "_NET_WM_MOVERESIZE")]
    NetWmMoveresize,
    /// _NET_MOVERESIZE_WINDOW
    #[strum(serialize = "_NET_MOVERESIZE_WINDOW")]
    NetMoveresizeWindow,
    /// _NET_REQUEST_FRAME_EXTENTS
    #[strum(serialize = "_NET_REQUEST_FRAME_EXTENTS")]
    NetRequestFrameExtents,
    /// _NET_STARTUP_ID
    #[strum(serialize = "_NET_STARTUP_ID")]
    NetStartupId,

    //* EWMH application window properties
    /// _NET_WM_NAME
    #[strum(serialize = "_NET_WM_NAME")]
    NetWmName,
    /// _NET_WM_VISIBLE_NAME
    #[strum(serialize = "_NET_WM_VISIBLE_NAME")]
    NetWmVisibleName,
    /// _NET_WM_ICON_NAME
    #[strum(serialize = "_NET_WM_ICON_NAME")]
    NetWmIconName,
    /// _NET_WM_VISIBLE_ICON_NAME
    #[strum(serialize = "_NET_WM_VISIBLE_ICON_NAME")]
    NetWmVisibleIconName,
    /// _NET_WM_DESKTOP
    #[strum(serialize = "_NET_WM_DESKTOP")]
    NetWmDesktop,
    /// _NET_WM_WINDOW_TYPE
    #[strum(serialize = "_NET_WM_WINDOW_TYPE")]
    NetWmWindowType,
    /// _NET_WM_STATE
    #[strum(serialize = "_NET_WM_STATE")]
    NetWmState,
    /// _NET_WM_STRUT
    #[strum(serialize = "_NET_WM_STRUT")]
    NetWmStrut,
    /// _NET_WM_STRUT_PARTIAL
    #[strum(serialize = "_NET_WM_STRUT_PARTIAL")]
    NetWmStrutPartial,
    /// _NET_WM_ICON
    #[strum(serialize = "_NET_WM_ICON")]
    NetWmIcon,
    /// _NET_WM_ICON_GEOMETRY
    #[strum(serialize = "_NET_WM_ICON_GEOMETRY")]
    NetWmIconGeometry,
    /// _NET_WM_PID
    #[strum(serialize = "_NET_WM_PID")]
    NetWmPid,
    /// _NET_WM_ALLOWED_ACTIONS
    #[strum(serialize = "_NET_WM_ALLOWED_ACTIONS")]
    NetWmAllowedActions,
    /// _NET_WM_USER_TIME
    #[strum(serialize = "_NET_WM_USER_TIME")]
    NetWmUserTime,
    /// _NET_WM_USER_TIME_WINDOW
    #[strum(serialize = "_NET_WM_USER_TIME_WINDOW")]
    NetWmUserTimeWindow,
    /// _NET_FRAME_EXTENTS
    #[strum(serialize = "_NET_FRAME_EXTENTS")]
    NetFrameExtents,
    /// _NET_WM_PING
    #[strum(serialize = "_NET_WM_PING")]
    NetWmPing,
    /// _NET_WM_SYNC_REQUEST
    #[strum(serialize = "_NET_WM_SYNC_REQUEST")]
    NetWmSyncRequest,
    /// _NET_WM_SYNC_REQUEST_COUNTER
    #[strum(serialize = "_NET_WM_SYNC_REQUEST_COUNTER")]
    NetWmSyncRequestCounter,

    //* EWMH window types
    /// _NET_WM_WINDOW_TYPE_DESKTOP
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_DESKTOP")]
    NetWmWindowTypeDesktop,
    /// _NET_WM_WINDOW_TYPE_DOCK
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_DOCK")]
    NetWmWindowTypeDock,
    /// _NET_WM_WINDOW_TYPE_TOOLBAR
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_TOOLBAR")]
    NetWmWindowTypeToolbar,
    /// _NET_WM_WINDOW_TYPE_MENU
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_MENU")]
    NetWmWindowTypeMenu,
    /// _NET_WM_WINDOW_TYPE_UTILITY
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_UTILITY")]
    NetWmWindowTypeUtility,
    /// _NET_WM_WINDOW_TYPE_SPLASH
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_SPLASH")]
    NetWmWindowTypeSplash,
    /// _NET_WM_WINDOW_TYPE_DIALOG
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_DIALOG")]
    NetWmWindowTypeDialog,
    /// _NET_WM_WINDOW_TYPE_NORMAL
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_NORMAL")]
    NetWmWindowTypeNormal,

    //* EWMH allowed actions
    /// _NET_WM_ACTION_MOVE
    #[strum(serialize = "_NET_WM_ACTION_MOVE")]
    NetWmActionMove,
    /// _NET_WM_ACTION_RESIZE
    #[strum(serialize = "_NET_WM_ACTION_RESIZE")]
    NetWmActionResize,
    /// _NET_WM_ACTION_MINIMIZE
    #[strum(serialize = "_NET_WM_ACTION_MINIMIZE")]
    NetWmActionMinimize,
    /// _NET_WM_ACTION_SHADE
    #[strum(serialize = "_NET_WM_ACTION_SHADE")]
    NetWmActionShade,
    /// _NET_WM_ACTION_MAXIMIZE_HORZ
    #[strum(serialize = "_NET_WM_ACTION_MAXIMIZE_HORZ")]
    NetWmActionMaximizeHorz,
    /// _NET_WM_ACTION_MAXIMIZE_VERT
    #[strum(serialize = "_NET_WM_ACTION_MAXIMIZE_VERT")]
    NetWmActionMaximizeVert,
    /// _NET_WM_ACTION_FULLSCREEN
    #[strum(serialize = "_NET_WM_ACTION_FULLSCREEN")]
    NetWmActionFullscreen,
    /// _NET_WM_ACTION_CHANGE_DESKTOP
    #[strum(serialize = "_NET_WM_ACTION_CHANGE_DESKTOP")]
    NetWmActionChangeDesktop,
    /// _NET_WM_ACTION_CLOSE
    #[strum(serialize = "_NET_WM_ACTION_CLOSE")]
    NetWmActionClose,
    /// _NET_WM_ACTION_ABOVE
    #[strum(serialize = "_NET_WM_ACTION_ABOVE")]
    NetWmActionAbove,
    /// _NET_WM_ACTION_BELOW
    #[strum(serialize = "_NET_WM_ACTION_BELOW")]
    NetWmActionBelow,

    //* EWMH window states
    /// _NET_WM_STATE_MODAL
    #[strum(serialize = "_NET_WM_STATE_MODAL")]
    NetWmStateModal,
    /// _NET_WM_STATE_STICKY
    #[strum(serialize = "_NET_WM_STATE_STICKY")]
    NetWmStateSticky,
    /// _NET_WM_STATE_MAXIMIZED_VERT
    #[strum(serialize = "_NET_WM_STATE_MAXIMIZED_VERT")]
    NetWmStateMaximizedVert,
    /// _NET_WM_STATE_MAXIMIZED_HORZ
    #[strum(serialize = "_NET_WM_STATE_MAXIMIZED_HORZ")]
    NetWmStateMaximizedHorz,
    /// _NET_WM_STATE_SHADED
    #[strum(serialize = "_NET_WM_STATE_SHADED")]
    NetWmStateShaded,
    /// _NET_WM_STATE_SKIP_TASKBAR
    #[strum(serialize = "_NET_WM_STATE_SKIP_TASKBAR")]
    NetWmStateSkipTaskbar,
    /// _NET_WM_STATE_SKIP_PAGER
    #[strum(serialize = "_NET_WM_STATE_SKIP_PAGER")]
    NetWmStateSkipPager,
    /// _NET_WM_STATE_HIDDEN
    #[strum(serialize = "_NET_WM_STATE_HIDDEN")]
    NetWmStateHidden,
    /// _NET_WM_STATE_FULLSCREEN
    #[strum(serialize = "_NET_WM_STATE_FULLSCREEN")]
    NetWmStateFullscreen,
    /// _NET_WM_STATE_ABOVE
    #[strum(serialize = "_NET_WM_STATE_ABOVE")]
    NetWmStateAbove,
    /// _NET_WM_STATE_BELOW
    #[strum(serialize = "_NET_WM_STATE_BELOW")]
    NetWmStateBelow,
    /// _NET_WM_STATE_DEMANDS_ATTENTION
    #[strum(serialize = "_NET_WM_STATE_DEMANDS_ATTENTION")]
    NetWmStateDemandsAttention,

    //* KDE extensions
    /// _KDE_WM_CHANGE_STATE
    #[strum(serialize = "_KDE_WM_CHANGE_STATE")]
    KdeWmChangeState,
    /// _KDE_NET_WM_FRAME_STRUT
    #[strum(serialize = "_KDE_NET_WM_FRAME_STRUT")]
    KdeNetWmFrameStrut,
    /// _KDE_NET_WM_WINDOW_TYPE_OVERRIDE
    #[strum(serialize = "_KDE_NET_WM_WINDOW_TYPE_OVERRIDE")]
    KdeNetWmWindowTypeOverride,
    /// _KDE_NET_WM_SYSTEM_TRAY_WINDOW_FOR
    #[strum(serialize = "_KDE_NET_WM_SYSTEM_TRAY_WINDOW_FOR")]
    KdeNetWmSystemTrayWindowFor,
    /// _KDE_NET_SYSTEM_TRAY_WINDOWS
    #[strum(serialize = "_KDE_NET_SYSTEM_TRAY_WINDOWS")]
    KdeNetSystemTrayWindows,
    /// KWM_WIN_ICON
    #[strum(serialize = "KWM_WIN_ICON")]
    KwmWinIcon,

    //* Openbox extensions
    /// _OPENBOX_PID
    #[strum(serialize = "_OPENBOX_PID")]
    OpenboxPid,
    /// _OB_THEME
    #[strum(serialize = "_OB_THEME")]
    ObTheme,
    /// _OB_CONFIG_FILE
    #[strum(serialize = "_OB_CONFIG_FILE")]
    ObConfigFile,
    /// _OB_CONTROL
    #[strum(serialize = "_OB_CONTROL")]
    ObControl,
    /// _OB_WM_ACTION_UNDECORATE
    #[strum(serialize = "_OB_WM_ACTION_UNDECORATE")]
    ObWmActionUndecorate,
    /// _OB_WM_STATE_UNDECORATED
    #[strum(serialize = "_OB_WM_STATE_UNDECORATED")]
    ObWmStateUndecorated,
}

/// The atoms advertised in `_NET_SUPPORTED`.
pub const NET_SUPPORTED_ATOMS: &[Atom] = &[
    Atom::NetSupported,
    Atom::NetSupportingWmCheck,
    Atom::NetClientList,
    Atom::NetClientListStacking,
    Atom::NetNumberOfDesktops,
    Atom::NetDesktopGeometry,
    Atom::NetDesktopViewport,
    Atom::NetCurrentDesktop,
    Atom::NetDesktopNames,
    Atom::NetActiveWindow,
    Atom::NetRestackWindow,
    Atom::NetWorkarea,
    Atom::NetDesktopLayout,
    Atom::NetShowingDesktop,
    Atom::NetCloseWindow,
    Atom::NetWmMoveresize,
    Atom::NetMoveresizeWindow,
    Atom::NetRequestFrameExtents,
    Atom::NetStartupId,
    Atom::NetWmName,
    Atom::NetWmVisibleName,
    Atom::NetWmIconName,
    Atom::NetWmVisibleIconName,
    Atom::NetWmDesktop,
    Atom::NetWmStrut,
    Atom::NetWmStrutPartial,
    Atom::NetWmIcon,
    Atom::NetWmIconGeometry,
    Atom::NetWmUserTime,
    Atom::NetWmUserTimeWindow,
    Atom::NetFrameExtents,
    Atom::NetWmPing,
    Atom::NetWmSyncRequest,
    Atom::NetWmSyncRequestCounter,
    Atom::NetWmWindowType,
    Atom::NetWmWindowTypeDesktop,
    Atom::NetWmWindowTypeDock,
    Atom::NetWmWindowTypeToolbar,
    Atom::NetWmWindowTypeMenu,
    Atom::NetWmWindowTypeUtility,
    Atom::NetWmWindowTypeSplash,
    Atom::NetWmWindowTypeDialog,
    Atom::NetWmWindowTypeNormal,
    Atom::NetWmAllowedActions,
    Atom::NetWmActionMove,
    Atom::NetWmActionResize,
    Atom::NetWmActionMinimize,
    Atom::NetWmActionShade,
    Atom::NetWmActionMaximizeHorz,
    Atom::NetWmActionMaximizeVert,
    Atom::NetWmActionFullscreen,
    Atom::NetWmActionChangeDesktop,
    Atom::NetWmActionClose,
    Atom::NetWmActionAbove,
    Atom::NetWmActionBelow,
    Atom::NetWmState,
    Atom::NetWmStateModal,
    Atom::NetWmStateSticky,
    Atom::NetWmStateMaximizedVert,
    Atom::NetWmStateMaximizedHorz,
    Atom::NetWmStateShaded,
    Atom::NetWmStateSkipTaskbar,
    Atom::NetWmStateSkipPager,
    Atom::NetWmStateHidden,
    Atom::NetWmStateFullscreen,
    Atom::NetWmStateAbove,
    Atom::NetWmStateBelow,
    Atom::NetWmStateDemandsAttention,
    Atom::ObWmActionUndecorate,
    Atom::ObWmStateUndecorated,
];

/// A table associating every known [`Atom`] with its
/// server-side value.
///
/// Built once with [`Atoms::intern_all`], then read-only.
#[derive(Clone, custom_debug_derive::Debug)]
pub struct Atoms {
    /// Indexed by the `Atom` discriminant.
    known: [XAtom; Atom::COUNT],
    #[debug(skip)]
    by_value: HashMap<XAtom, Atom>,
}

impl Atoms {
    /// Interns every known atom on the server.
    ///
    /// Interning itself cannot fail on a live connection, so any
    /// error returned here means the connection is unusable.
    pub fn intern_all<X: XConn>(conn: &X) -> Result<Self> {
        let mut known = [XID_NONE; Atom::COUNT];
        let mut by_value = HashMap::with_capacity(Atom::COUNT);

        for atom in Atom::iter() {
            let value = conn.intern_atom(atom.as_ref())?;
            trace!("Interned atom {}: {}", atom, value);
            known[atom as usize] = value;
            by_value.insert(value, atom);
        }

        debug!("Interned {} atoms", Atom::COUNT);
        Ok(Self { known, by_value })
    }

    /// Returns the value of a known atom.
    #[inline]
    pub fn get(&self, atom: Atom) -> XAtom {
        self.known[atom as usize]
    }

    /// Returns the values of several known atoms, in order.
    pub fn get_all(&self, atoms: &[Atom]) -> Vec<XAtom> {
        atoms.iter().map(|a| self.get(*a)).collect()
    }

    /// Looks up an atom by its protocol name.
    ///
    /// Returns `None` if the name is not one of the known atoms.
    pub fn retrieve(&self, name: &str) -> Option<XAtom> {
        Atom::from_str(name).ok().map(|a| self.get(a))
    }

    /// Returns the known atom with the given value, if any.
    pub fn lookup(&self, value: XAtom) -> Option<Atom> {
        self.by_value.get(&value).copied()
    }

    /// Returns the protocol name of a value, if it is a known atom.
    pub fn retrieve_by_value(&self, value: XAtom) -> Option<&'static str> {
        self.lookup(value).map(|a| a.into())
    }

    /// The number of atoms in the table.
    pub fn len(&self) -> usize {
        Atom::COUNT
    }

    /// Always false: the table holds every known atom.
    pub fn is_empty(&self) -> bool {
        false
    }
}

//* ========== CONSTANT "ATOMS" ========== *//

/// `_NET_DESKTOP_LAYOUT` orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Desktops are laid out in rows.
    Horz = 0,
    /// Desktops are laid out in columns.
    Vert = 1,
}

/// `_NET_DESKTOP_LAYOUT` starting corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

/// `_NET_WM_MOVERESIZE` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResize {
    SizeTopLeft = 0,
    SizeTop = 1,
    SizeTopRight = 2,
    SizeRight = 3,
    SizeBottomRight = 4,
    SizeBottom = 5,
    SizeBottomLeft = 6,
    SizeLeft = 7,
    Move = 8,
    SizeKeyboard = 9,
    MoveKeyboard = 10,
    Cancel = 11,
}

/// The action of a `_NET_WM_STATE` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAction {
    Remove = 0,
    Add = 1,
    Toggle = 2,
}

/// The source indication carried by EWMH requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestSource {
    /// Sent by an old client that predates source indication.
    None = 0,
    /// Sent by a normal application.
    Application = 1,
    /// Sent by a pager or other direct user action.
    #[default]
    Pager = 2,
}

macro_rules! impl_try_from_u32 {
    ($name:ident, $($var:ident),+) => {
        impl std::convert::TryFrom<u32> for $name {
            type Error = u32;

            fn try_from(from: u32) -> ::core::result::Result<Self, u32> {
                $(
                    if from == $name::$var as u32 {
                        return Ok($name::$var)
                    }
                )+
                Err(from)
            }
        }
    }
}

impl_try_from_u32!(Orientation, Horz, Vert);
impl_try_from_u32!(Corner, TopLeft, TopRight, BottomRight, BottomLeft);
impl_try_from_u32!(
    MoveResize,
    SizeTopLeft, SizeTop, SizeTopRight, SizeRight, SizeBottomRight,
    SizeBottom, SizeBottomLeft, SizeLeft, Move, SizeKeyboard, MoveKeyboard, Cancel
);
impl_try_from_u32!(StateAction, Remove, Add, Toggle);
impl_try_from_u32!(RequestSource, None, Application, Pager);
