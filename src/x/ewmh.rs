//! Typed access to the EWMH properties and client messages.
//!
//! See the [EWMH](https://specifications.freedesktop.org/wm-spec/latest/)
//! for what each of these means. Properties on client windows and on
//! the root window are read and written here as typed values;
//! requests that must go through the window manager are sent as
//! client messages to the root window.

use std::convert::TryFrom;

use tracing::{debug, warn};

use super::{
    atom::{Atom, Corner, MoveResize, Orientation, RequestSource, StateAction},
    core::{Result, XAtom, XConn, XError, XWindowID, Xid},
    event::{ClientMessageData, ClientMessageEvent},
    icccm::{check_len, HintsError},
    property::PropCodec,
};

/// The length of `_NET_WM_STRUT` and `_NET_FRAME_EXTENTS`.
pub const STRUT_LEN: usize = 4;

/// The length of `_NET_WM_STRUT_PARTIAL`.
pub const STRUT_PARTIAL_LEN: usize = 12;

/// Space reserved along each screen edge (`_NET_WM_STRUT`).
///
/// The same layout is used for frame extents (`_NET_FRAME_EXTENTS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strut {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Strut {
    fn from_raw(raw: &[u32]) -> Self {
        Self {
            left: raw[0],
            right: raw[1],
            top: raw[2],
            bottom: raw[3],
        }
    }

    fn to_raw(self) -> [u32; STRUT_LEN] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// Space reserved along part of each screen edge (`_NET_WM_STRUT_PARTIAL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrutPartial {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub left_start_y: u32,
    pub left_end_y: u32,
    pub right_start_y: u32,
    pub right_end_y: u32,
    pub top_start_x: u32,
    pub top_end_x: u32,
    pub bottom_start_x: u32,
    pub bottom_end_x: u32,
}

impl StrutPartial {
    fn from_raw(raw: &[u32]) -> Self {
        Self {
            left: raw[0],
            right: raw[1],
            top: raw[2],
            bottom: raw[3],
            left_start_y: raw[4],
            left_end_y: raw[5],
            right_start_y: raw[6],
            right_end_y: raw[7],
            top_start_x: raw[8],
            top_end_x: raw[9],
            bottom_start_x: raw[10],
            bottom_end_x: raw[11],
        }
    }

    /// The plain strut, without the edge ranges.
    pub fn strut(&self) -> Strut {
        Strut {
            left: self.left,
            right: self.right,
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// One image from `_NET_WM_ICON`.
///
/// `data` holds `width * height` ARGB pixels, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetWmIcon {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u32>,
}

/// Splits the contents of `_NET_WM_ICON` into its images.
///
/// An incomplete trailing image is dropped. Returns `None` if there
/// is no complete image at all.
fn parse_icons(raw: &[u32]) -> Option<Vec<NetWmIcon>> {
    let mut icons = Vec::new();
    let mut rest = raw;

    while let [width, height, pixels @ ..] = rest {
        let size = (*width as usize).checked_mul(*height as usize)?;
        if size == 0 || size > pixels.len() {
            if size > pixels.len() {
                debug!("Dropping incomplete {}x{} icon", width, height);
            }
            break;
        }
        icons.push(NetWmIcon {
            width: *width,
            height: *height,
            data: pixels[..size].to_vec(),
        });
        rest = &pixels[size..];
    }

    if icons.is_empty() {
        None
    } else {
        Some(icons)
    }
}

/// A rectangle on the root window, as used by `_NET_WORKAREA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The arrangement of desktops in a pager (`_NET_DESKTOP_LAYOUT`).
///
/// A column or row count of 0 means it is computed from the other
/// and the number of desktops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopLayout {
    pub orientation: Orientation,
    pub columns: u32,
    pub rows: u32,
    pub corner: Corner,
}

impl TryFrom<&[u32]> for DesktopLayout {
    type Error = HintsError;

    /// The starting corner is optional and defaults to the top left.
    fn try_from(raw: &[u32]) -> std::result::Result<Self, HintsError> {
        check_len(raw, 3)?;

        let orientation = Orientation::try_from(raw[0]).map_err(|value| {
            HintsError::InvalidValue {
                field: "orientation",
                value,
            }
        })?;
        let corner = match raw.get(3) {
            Some(c) => Corner::try_from(*c)
                .map_err(|value| HintsError::InvalidValue {
                    field: "starting corner",
                    value,
                })?,
            None => Corner::default(),
        };
        if raw[1] == 0 && raw[2] == 0 {
            return Err(HintsError::InvalidValue {
                field: "columns and rows",
                value: 0,
            });
        }

        Ok(DesktopLayout {
            orientation,
            columns: raw[1],
            rows: raw[2],
            corner,
        })
    }
}

fn xids(raw: Vec<u32>) -> Vec<Xid> {
    raw.into_iter().map(Xid).collect()
}

fn raw_xids(ids: &[Xid]) -> Vec<u32> {
    ids.iter().map(|id| id.val()).collect()
}

impl<'a, X: XConn> PropCodec<'a, X> {
    fn get_cardinal(&self, window: XWindowID, atom: Atom) -> Result<u32> {
        self.get32(window, self.atom(atom), self.atom(Atom::Cardinal))
    }

    fn set_cardinal(&self, window: XWindowID, atom: Atom, value: u32) -> Result<()> {
        self.set32(window, self.atom(atom), self.atom(Atom::Cardinal), value)
    }

    fn get_window(&self, window: XWindowID, atom: Atom) -> Result<XWindowID> {
        self.get32(window, self.atom(atom), self.atom(Atom::Window))
            .map(Xid)
    }

    fn set_window(&self, window: XWindowID, atom: Atom, value: XWindowID) -> Result<()> {
        self.set32(window, self.atom(atom), self.atom(Atom::Window), *value)
    }

    fn get_atoms(&self, window: XWindowID, atom: Atom) -> Result<Vec<XAtom>> {
        self.get_array32(window, self.atom(atom), self.atom(Atom::Atom))
            .map(xids)
    }

    fn set_atoms(&self, window: XWindowID, atom: Atom, values: &[XAtom]) -> Result<()> {
        self.set_array32(
            window,
            self.atom(atom),
            self.atom(Atom::Atom),
            &raw_xids(values),
        )
    }

    fn get_windows(&self, window: XWindowID, atom: Atom) -> Result<Vec<XWindowID>> {
        self.get_array32(window, self.atom(atom), self.atom(Atom::Window))
            .map(xids)
    }

    fn set_windows(&self, window: XWindowID, atom: Atom, values: &[XWindowID]) -> Result<()> {
        self.set_array32(
            window,
            self.atom(atom),
            self.atom(Atom::Window),
            &raw_xids(values),
        )
    }

    /// Maps interned atoms back to known atoms, dropping unknown ones.
    fn known_atoms(&self, values: &[XAtom]) -> Vec<Atom> {
        values
            .iter()
            .filter_map(|a| {
                let known = self.atoms().lookup(*a);
                if known.is_none() {
                    warn!("Ignoring unknown atom {}", a);
                }
                known
            })
            .collect()
    }

    //* ========== CLIENT WINDOW PROPERTIES ========== *//

    /// Reads `_NET_WM_NAME`.
    pub fn net_wm_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_utf8(window, self.atom(Atom::NetWmName))
    }

    /// Sets `_NET_WM_NAME`.
    pub fn set_net_wm_name(&self, window: XWindowID, name: &str) -> Result<()> {
        self.set_string_utf8(window, self.atom(Atom::NetWmName), name)
    }

    /// Reads `_NET_WM_ICON_NAME`.
    pub fn net_wm_icon_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_utf8(window, self.atom(Atom::NetWmIconName))
    }

    /// Reads `_NET_WM_VISIBLE_NAME`.
    pub fn net_wm_visible_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_utf8(window, self.atom(Atom::NetWmVisibleName))
    }

    /// Sets `_NET_WM_VISIBLE_NAME`, the title the window manager displays.
    pub fn set_net_wm_visible_name(&self, window: XWindowID, name: &str) -> Result<()> {
        self.set_string_utf8(window, self.atom(Atom::NetWmVisibleName), name)
    }

    /// Reads `_NET_WM_VISIBLE_ICON_NAME`.
    pub fn net_wm_visible_icon_name(&self, window: XWindowID) -> Result<String> {
        self.get_string_utf8(window, self.atom(Atom::NetWmVisibleIconName))
    }

    /// Sets `_NET_WM_VISIBLE_ICON_NAME`.
    pub fn set_net_wm_visible_icon_name(&self, window: XWindowID, name: &str) -> Result<()> {
        self.set_string_utf8(window, self.atom(Atom::NetWmVisibleIconName), name)
    }

    /// Reads `_NET_WM_DESKTOP`. `0xFFFFFFFF` means all desktops.
    pub fn wm_desktop(&self, window: XWindowID) -> Result<u32> {
        self.get_cardinal(window, Atom::NetWmDesktop)
    }

    /// Sets `_NET_WM_DESKTOP`.
    pub fn set_wm_desktop(&self, window: XWindowID, desktop: u32) -> Result<()> {
        self.set_cardinal(window, Atom::NetWmDesktop, desktop)
    }

    /// Reads `_NET_WM_WINDOW_TYPE` as the raw atoms, in order of preference.
    pub fn window_type(&self, window: XWindowID) -> Result<Vec<XAtom>> {
        self.get_atoms(window, Atom::NetWmWindowType)
    }

    /// Reads `_NET_WM_WINDOW_TYPE`, keeping only the known types.
    pub fn window_types(&self, window: XWindowID) -> Result<Vec<Atom>> {
        Ok(self.known_atoms(&self.window_type(window)?))
    }

    /// Reads `_NET_WM_STATE`.
    pub fn net_wm_state(&self, window: XWindowID) -> Result<Vec<XAtom>> {
        self.get_atoms(window, Atom::NetWmState)
    }

    /// Reads `_NET_WM_STATE`, keeping only the known states.
    pub fn net_wm_states(&self, window: XWindowID) -> Result<Vec<Atom>> {
        Ok(self.known_atoms(&self.net_wm_state(window)?))
    }

    /// Sets `_NET_WM_STATE`.
    pub fn set_net_wm_state(&self, window: XWindowID, states: &[Atom]) -> Result<()> {
        self.set_atoms(window, Atom::NetWmState, &self.atoms().get_all(states))
    }

    /// Reads `_NET_WM_STRUT`.
    pub fn strut(&self, window: XWindowID) -> Result<Strut> {
        let raw = self.get_fixed::<u32>(
            window,
            self.atom(Atom::NetWmStrut),
            self.atom(Atom::Cardinal),
            STRUT_LEN,
        )?;
        Ok(Strut::from_raw(&raw))
    }

    /// Reads `_NET_WM_STRUT_PARTIAL`.
    pub fn strut_partial(&self, window: XWindowID) -> Result<StrutPartial> {
        let raw = self.get_fixed::<u32>(
            window,
            self.atom(Atom::NetWmStrutPartial),
            self.atom(Atom::Cardinal),
            STRUT_PARTIAL_LEN,
        )?;
        Ok(StrutPartial::from_raw(&raw))
    }

    /// Reads `_NET_WM_ICON` as the list of images it contains.
    ///
    /// Fails if the property does not hold a single complete image.
    pub fn icons(&self, window: XWindowID) -> Result<Vec<NetWmIcon>> {
        let property = self.atom(Atom::NetWmIcon);
        let raw = self.get_array32(window, property, self.atom(Atom::Cardinal))?;

        parse_icons(&raw).ok_or_else(|| XError::malformed(window, property, "no complete icon"))
    }

    /// Reads `_NET_WM_PID`.
    pub fn pid(&self, window: XWindowID) -> Result<u32> {
        self.get_cardinal(window, Atom::NetWmPid)
    }

    /// Reads `_NET_WM_USER_TIME`.
    pub fn user_time(&self, window: XWindowID) -> Result<u32> {
        self.get_cardinal(window, Atom::NetWmUserTime)
    }

    /// Reads `_NET_WM_USER_TIME_WINDOW`, the window that carries
    /// `_NET_WM_USER_TIME` on the client's behalf.
    pub fn user_time_window(&self, window: XWindowID) -> Result<XWindowID> {
        self.get_window(window, Atom::NetWmUserTimeWindow)
    }

    /// Reads `_NET_FRAME_EXTENTS`.
    pub fn frame_extents(&self, window: XWindowID) -> Result<Strut> {
        let raw = self.get_fixed::<u32>(
            window,
            self.atom(Atom::NetFrameExtents),
            self.atom(Atom::Cardinal),
            STRUT_LEN,
        )?;
        Ok(Strut::from_raw(&raw))
    }

    /// Sets `_NET_FRAME_EXTENTS`.
    pub fn set_frame_extents(&self, window: XWindowID, extents: Strut) -> Result<()> {
        self.set_array32(
            window,
            self.atom(Atom::NetFrameExtents),
            self.atom(Atom::Cardinal),
            &extents.to_raw(),
        )
    }

    /// Reads `_NET_WM_ALLOWED_ACTIONS`.
    pub fn allowed_actions(&self, window: XWindowID) -> Result<Vec<Atom>> {
        let raw = self.get_atoms(window, Atom::NetWmAllowedActions)?;
        Ok(self.known_atoms(&raw))
    }

    /// Sets `_NET_WM_ALLOWED_ACTIONS`.
    pub fn set_allowed_actions(&self, window: XWindowID, actions: &[Atom]) -> Result<()> {
        self.set_atoms(
            window,
            Atom::NetWmAllowedActions,
            &self.atoms().get_all(actions),
        )
    }

    //* ========== ROOT WINDOW PROPERTIES ========== *//

    /// Reads `_NET_SUPPORTED`.
    pub fn supported(&self, root: XWindowID) -> Result<Vec<XAtom>> {
        self.get_atoms(root, Atom::NetSupported)
    }

    /// Sets `_NET_SUPPORTED`.
    pub fn set_supported(&self, root: XWindowID, atoms: &[Atom]) -> Result<()> {
        self.set_atoms(root, Atom::NetSupported, &self.atoms().get_all(atoms))
    }

    /// Reads `_NET_CLIENT_LIST`, in mapping order.
    pub fn client_list(&self, root: XWindowID) -> Result<Vec<XWindowID>> {
        self.get_windows(root, Atom::NetClientList)
    }

    /// Sets `_NET_CLIENT_LIST`.
    pub fn set_client_list(&self, root: XWindowID, clients: &[XWindowID]) -> Result<()> {
        self.set_windows(root, Atom::NetClientList, clients)
    }

    /// Reads `_NET_CLIENT_LIST_STACKING`, bottom to top.
    pub fn client_list_stacking(&self, root: XWindowID) -> Result<Vec<XWindowID>> {
        self.get_windows(root, Atom::NetClientListStacking)
    }

    /// Sets `_NET_CLIENT_LIST_STACKING`.
    pub fn set_client_list_stacking(&self, root: XWindowID, clients: &[XWindowID]) -> Result<()> {
        self.set_windows(root, Atom::NetClientListStacking, clients)
    }

    /// Reads `_NET_NUMBER_OF_DESKTOPS`.
    pub fn number_of_desktops(&self, root: XWindowID) -> Result<u32> {
        self.get_cardinal(root, Atom::NetNumberOfDesktops)
    }

    /// Sets `_NET_NUMBER_OF_DESKTOPS`.
    pub fn set_number_of_desktops(&self, root: XWindowID, count: u32) -> Result<()> {
        self.set_cardinal(root, Atom::NetNumberOfDesktops, count)
    }

    /// Reads `_NET_DESKTOP_GEOMETRY` as (width, height).
    pub fn desktop_geometry(&self, root: XWindowID) -> Result<(u32, u32)> {
        let raw = self.get_fixed::<u32>(
            root,
            self.atom(Atom::NetDesktopGeometry),
            self.atom(Atom::Cardinal),
            2,
        )?;
        Ok((raw[0], raw[1]))
    }

    /// Sets `_NET_DESKTOP_GEOMETRY`.
    pub fn set_desktop_geometry(&self, root: XWindowID, width: u32, height: u32) -> Result<()> {
        self.set_array32(
            root,
            self.atom(Atom::NetDesktopGeometry),
            self.atom(Atom::Cardinal),
            &[width, height],
        )
    }

    /// Reads `_NET_DESKTOP_VIEWPORT`, one (x, y) pair per desktop.
    ///
    /// A trailing odd element is ignored.
    pub fn desktop_viewport(&self, root: XWindowID) -> Result<Vec<(u32, u32)>> {
        let raw = self.get_array32(
            root,
            self.atom(Atom::NetDesktopViewport),
            self.atom(Atom::Cardinal),
        )?;
        Ok(raw.chunks_exact(2).map(|c| (c[0], c[1])).collect())
    }

    /// Sets `_NET_DESKTOP_VIEWPORT`.
    pub fn set_desktop_viewport(&self, root: XWindowID, viewports: &[(u32, u32)]) -> Result<()> {
        let raw: Vec<u32> = viewports.iter().flat_map(|(x, y)| [*x, *y]).collect();
        self.set_array32(
            root,
            self.atom(Atom::NetDesktopViewport),
            self.atom(Atom::Cardinal),
            &raw,
        )
    }

    /// Reads `_NET_CURRENT_DESKTOP`.
    pub fn current_desktop(&self, root: XWindowID) -> Result<u32> {
        self.get_cardinal(root, Atom::NetCurrentDesktop)
    }

    /// Sets `_NET_CURRENT_DESKTOP`.
    pub fn set_current_desktop(&self, root: XWindowID, desktop: u32) -> Result<()> {
        self.set_cardinal(root, Atom::NetCurrentDesktop, desktop)
    }

    /// Reads `_NET_DESKTOP_NAMES`.
    pub fn desktop_names(&self, root: XWindowID) -> Result<Vec<String>> {
        self.get_strings_utf8(root, self.atom(Atom::NetDesktopNames))
    }

    /// Sets `_NET_DESKTOP_NAMES`.
    pub fn set_desktop_names<S: AsRef<str>>(&self, root: XWindowID, names: &[S]) -> Result<()> {
        self.set_strings_utf8(root, self.atom(Atom::NetDesktopNames), names)
    }

    /// Reads `_NET_ACTIVE_WINDOW`. `XID_NONE` means no window is active.
    pub fn active_window(&self, root: XWindowID) -> Result<XWindowID> {
        self.get_window(root, Atom::NetActiveWindow)
    }

    /// Sets `_NET_ACTIVE_WINDOW`.
    pub fn set_active_window(&self, root: XWindowID, window: XWindowID) -> Result<()> {
        self.set_window(root, Atom::NetActiveWindow, window)
    }

    /// Reads `_NET_WORKAREA`, one area per desktop.
    pub fn workarea(&self, root: XWindowID) -> Result<Vec<Area>> {
        let raw = self.get_array32(
            root,
            self.atom(Atom::NetWorkarea),
            self.atom(Atom::Cardinal),
        )?;
        Ok(raw
            .chunks_exact(4)
            .map(|c| Area {
                x: c[0],
                y: c[1],
                width: c[2],
                height: c[3],
            })
            .collect())
    }

    /// Sets `_NET_WORKAREA`.
    pub fn set_workarea(&self, root: XWindowID, areas: &[Area]) -> Result<()> {
        let raw: Vec<u32> = areas
            .iter()
            .flat_map(|a| [a.x, a.y, a.width, a.height])
            .collect();
        self.set_array32(
            root,
            self.atom(Atom::NetWorkarea),
            self.atom(Atom::Cardinal),
            &raw,
        )
    }

    /// Reads `_NET_SUPPORTING_WM_CHECK`.
    pub fn supporting_wm_check(&self, window: XWindowID) -> Result<XWindowID> {
        self.get_window(window, Atom::NetSupportingWmCheck)
    }

    /// Sets `_NET_SUPPORTING_WM_CHECK` on both the root and the check
    /// window, as a compliant window manager must.
    pub fn set_supporting_wm_check(&self, root: XWindowID, check: XWindowID) -> Result<()> {
        self.set_window(check, Atom::NetSupportingWmCheck, check)?;
        self.set_window(root, Atom::NetSupportingWmCheck, check)
    }

    /// Reads `_NET_SHOWING_DESKTOP`.
    pub fn showing_desktop(&self, root: XWindowID) -> Result<bool> {
        self.get_cardinal(root, Atom::NetShowingDesktop)
            .map(|v| v != 0)
    }

    /// Sets `_NET_SHOWING_DESKTOP`.
    pub fn set_showing_desktop(&self, root: XWindowID, showing: bool) -> Result<()> {
        self.set_cardinal(root, Atom::NetShowingDesktop, showing as u32)
    }

    /// Reads `_NET_DESKTOP_LAYOUT`.
    pub fn desktop_layout(&self, root: XWindowID) -> Result<DesktopLayout> {
        let property = self.atom(Atom::NetDesktopLayout);
        let raw = self.get_array32(root, property, self.atom(Atom::Cardinal))?;

        self.parse(root, property, &raw)
    }

    /// Sets `_NET_DESKTOP_LAYOUT`, including the starting corner.
    pub fn set_desktop_layout(&self, root: XWindowID, layout: DesktopLayout) -> Result<()> {
        self.set_array32(
            root,
            self.atom(Atom::NetDesktopLayout),
            self.atom(Atom::Cardinal),
            &[
                layout.orientation as u32,
                layout.columns,
                layout.rows,
                layout.corner as u32,
            ],
        )
    }

    //* ========== REQUESTS ========== *//

    /// Asks the window manager to switch to `desktop`.
    pub fn request_current_desktop(&self, desktop: u32, time: u32) -> Result<()> {
        self.send_client_message(
            self.conn().root(),
            self.atom(Atom::NetCurrentDesktop),
            [desktop, time, 0, 0],
        )
    }

    /// Asks the window manager to activate `window`.
    pub fn request_active_window(
        &self,
        window: XWindowID,
        source: RequestSource,
        time: u32,
        current: XWindowID,
    ) -> Result<()> {
        self.send_client_message(
            window,
            self.atom(Atom::NetActiveWindow),
            [source as u32, time, *current, 0],
        )
    }

    /// Asks the window manager to change one or two `_NET_WM_STATE`s.
    pub fn request_wm_state(
        &self,
        window: XWindowID,
        action: StateAction,
        first: Atom,
        second: Option<Atom>,
        source: RequestSource,
    ) -> Result<()> {
        let second = second.map(|a| *self.atom(a)).unwrap_or(0);
        self.send_client_message(
            window,
            self.atom(Atom::NetWmState),
            [action as u32, *self.atom(first), second, source as u32],
        )
    }

    /// Asks the window manager to close `window`.
    pub fn request_close_window(
        &self,
        window: XWindowID,
        time: u32,
        source: RequestSource,
    ) -> Result<()> {
        self.send_client_message(
            window,
            self.atom(Atom::NetCloseWindow),
            [time, source as u32, 0, 0],
        )
    }

    /// Asks the window manager to move `window` to `desktop`.
    pub fn request_wm_desktop(
        &self,
        window: XWindowID,
        desktop: u32,
        source: RequestSource,
    ) -> Result<()> {
        self.send_client_message(
            window,
            self.atom(Atom::NetWmDesktop),
            [desktop, source as u32, 0, 0],
        )
    }

    /// Asks the window manager to start an interactive move or resize.
    ///
    /// This is the one request that uses all five longs.
    pub fn request_moveresize(
        &self,
        window: XWindowID,
        x_root: i32,
        y_root: i32,
        direction: MoveResize,
        button: u32,
        source: RequestSource,
    ) -> Result<()> {
        let event = ClientMessageEvent {
            window,
            type_: self.atom(Atom::NetWmMoveresize),
            data: ClientMessageData::U32([
                x_root as u32,
                y_root as u32,
                direction as u32,
                button,
                source as u32,
            ]),
        };
        self.conn()
            .send_client_message(self.conn().root(), self.message_mask(), event)
    }

    /// Asks the window manager to change the number of desktops.
    pub fn request_number_of_desktops(&self, count: u32) -> Result<()> {
        self.send_client_message(
            self.conn().root(),
            self.atom(Atom::NetNumberOfDesktops),
            [count, 0, 0, 0],
        )
    }

    /// Asks the window manager to enter or leave showing-desktop mode.
    pub fn request_showing_desktop(&self, showing: bool) -> Result<()> {
        self.send_client_message(
            self.conn().root(),
            self.atom(Atom::NetShowingDesktop),
            [showing as u32, 0, 0, 0],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x::{
        core::EventMask,
        dummy::DummyConn,
        property::tests::{setup, WIN},
    };

    const ROOT: XWindowID = DummyConn::ROOT;

    #[test]
    fn test_icon_parsing() {
        let raw = [2, 1, 0xAA, 0xBB, 1, 1, 0xCC];
        let icons = parse_icons(&raw).expect("two icons");
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].data, vec![0xAA, 0xBB]);
        assert_eq!(icons[1].width, 1);

        // the incomplete trailing icon is dropped
        let raw = [1, 1, 0xAA, 16, 16, 0, 0];
        assert_eq!(parse_icons(&raw).map(|i| i.len()), Some(1));

        // no complete icon at all
        assert!(parse_icons(&[16, 16, 0, 0]).is_none());
        assert!(parse_icons(&[]).is_none());
        assert!(parse_icons(&[0, 0]).is_none());
    }

    #[test]
    fn test_icons_through_codec() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();
        let (icon, card) = (atoms.get(Atom::NetWmIcon), atoms.get(Atom::Cardinal));

        props.set_array32(WIN, icon, card, &[1, 2, 5, 6]).unwrap();
        assert_eq!(
            props.icons(WIN).unwrap(),
            vec![NetWmIcon {
                width: 1,
                height: 2,
                data: vec![5, 6]
            }]
        );

        props.set_array32(WIN, icon, card, &[4, 4, 1]).unwrap();
        assert!(matches!(
            props.icons(WIN),
            Err(XError::PropertyMalformed { .. })
        ));
    }

    #[test]
    fn test_struts() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();
        let card = atoms.get(Atom::Cardinal);

        props
            .set_array32(WIN, atoms.get(Atom::NetWmStrut), card, &[0, 0, 24, 0])
            .unwrap();
        assert_eq!(
            props.strut(WIN).unwrap(),
            Strut {
                top: 24,
                ..Default::default()
            }
        );

        // a partial strut cut short is malformed
        let partial = atoms.get(Atom::NetWmStrutPartial);
        props.set_array32(WIN, partial, card, &[0, 0, 24, 0]).unwrap();
        assert!(props.strut_partial(WIN).is_err());

        let mut full = [0u32; STRUT_PARTIAL_LEN];
        full[2] = 24;
        full[9] = 1919;
        props.set_array32(WIN, partial, card, &full).unwrap();
        let strut = props.strut_partial(WIN).unwrap();
        assert_eq!(strut.top_end_x, 1919);
        assert_eq!(strut.strut().top, 24);
    }

    #[test]
    fn test_desktop_layout() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();
        let (layout, card) = (atoms.get(Atom::NetDesktopLayout), atoms.get(Atom::Cardinal));

        // the corner is optional
        props.set_array32(ROOT, layout, card, &[1, 2, 0]).unwrap();
        assert_eq!(
            props.desktop_layout(ROOT).unwrap(),
            DesktopLayout {
                orientation: Orientation::Vert,
                columns: 2,
                rows: 0,
                corner: Corner::TopLeft,
            }
        );

        let written = DesktopLayout {
            orientation: Orientation::Horz,
            columns: 0,
            rows: 3,
            corner: Corner::BottomRight,
        };
        props.set_desktop_layout(ROOT, written).unwrap();
        assert_eq!(props.desktop_layout(ROOT).unwrap(), written);

        props.set_array32(ROOT, layout, card, &[5, 2, 2]).unwrap();
        assert!(props.desktop_layout(ROOT).is_err());
        props.set_array32(ROOT, layout, card, &[0, 0, 0]).unwrap();
        assert!(matches!(
            props.desktop_layout(ROOT),
            Err(XError::PropertyMalformed { .. })
        ));

        assert_eq!(
            DesktopLayout::try_from(&[0, 2, 2, 9][..]),
            Err(HintsError::InvalidValue {
                field: "starting corner",
                value: 9
            })
        );
        assert_eq!(
            DesktopLayout::try_from(&[1, 2][..]),
            Err(HintsError::TooShort {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_root_properties() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        props.set_number_of_desktops(ROOT, 4).unwrap();
        props.set_current_desktop(ROOT, 2).unwrap();
        props
            .set_desktop_names(ROOT, &["one", "two", "three", "four"])
            .unwrap();
        props
            .set_client_list(ROOT, &[Xid(0x200), Xid(0x300)])
            .unwrap();
        props.set_showing_desktop(ROOT, true).unwrap();
        props
            .set_desktop_viewport(ROOT, &[(0, 0), (1920, 0)])
            .unwrap();

        assert_eq!(props.number_of_desktops(ROOT).unwrap(), 4);
        assert_eq!(props.current_desktop(ROOT).unwrap(), 2);
        assert_eq!(props.desktop_names(ROOT).unwrap()[3], "four");
        assert_eq!(
            props.client_list(ROOT).unwrap(),
            vec![Xid(0x200), Xid(0x300)]
        );
        assert!(props.showing_desktop(ROOT).unwrap());
        assert_eq!(
            props.desktop_viewport(ROOT).unwrap(),
            vec![(0, 0), (1920, 0)]
        );

        // an empty client list is a valid array
        props.set_client_list(ROOT, &[]).unwrap();
        assert!(props.client_list(ROOT).unwrap().is_empty());
    }

    #[test]
    fn test_supporting_wm_check() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();
        let check = Xid(0x600);

        props.set_supporting_wm_check(ROOT, check).unwrap();
        assert_eq!(props.supporting_wm_check(ROOT).unwrap(), check);
        assert_eq!(props.supporting_wm_check(check).unwrap(), check);
    }

    #[test]
    fn test_window_states() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        props
            .set_net_wm_state(WIN, &[Atom::NetWmStateFullscreen, Atom::NetWmStateAbove])
            .unwrap();
        assert_eq!(
            props.net_wm_states(WIN).unwrap(),
            vec![Atom::NetWmStateFullscreen, Atom::NetWmStateAbove]
        );

        // unknown atoms are dropped from the typed view
        let unknown = conn.intern_atom("_SOME_OTHER_STATE").unwrap();
        props
            .set_array32(
                WIN,
                atoms.get(Atom::NetWmState),
                atoms.get(Atom::Atom),
                &[*unknown, *atoms.get(Atom::NetWmStateSticky)],
            )
            .unwrap();
        assert_eq!(props.net_wm_state(WIN).unwrap().len(), 2);
        assert_eq!(
            props.net_wm_states(WIN).unwrap(),
            vec![Atom::NetWmStateSticky]
        );
    }

    #[test]
    fn test_requests() {
        let (conn, atoms, config) = setup();
        let props = PropCodec::new(&conn, &atoms, &config).unwrap();

        props
            .request_wm_state(
                WIN,
                StateAction::Toggle,
                Atom::NetWmStateMaximizedHorz,
                Some(Atom::NetWmStateMaximizedVert),
                RequestSource::Pager,
            )
            .unwrap();
        props
            .request_moveresize(WIN, 100, -5, MoveResize::Move, 1, RequestSource::Application)
            .unwrap();
        props.request_current_desktop(3, 0).unwrap();

        let sent = conn.sent_messages();
        assert_eq!(sent.len(), 3);
        for (dest, mask, _) in &sent {
            assert_eq!(*dest, ROOT);
            assert!(mask.contains(EventMask::SUBSTRUCTURE_REDIRECT));
        }

        let state = sent[0].2;
        assert_eq!(state.window, WIN);
        assert_eq!(
            state.data.as_u32(),
            Some(&[
                2,
                *atoms.get(Atom::NetWmStateMaximizedHorz),
                *atoms.get(Atom::NetWmStateMaximizedVert),
                2,
                0
            ])
        );

        let moveresize = sent[1].2;
        assert_eq!(
            moveresize.data.as_u32(),
            Some(&[100, (-5i32) as u32, 8, 1, 1])
        );

        let desktop = sent[2].2;
        assert_eq!(desktop.window, ROOT);
        assert_eq!(desktop.type_, atoms.get(Atom::NetCurrentDesktop));
    }
}
