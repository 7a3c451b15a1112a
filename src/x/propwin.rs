//! The property window registry.
//!
//! Some clients delegate part of their state to an auxiliary window:
//! `_NET_WM_USER_TIME_WINDOW` names a separate window that carries
//! `_NET_WM_USER_TIME` on the client's behalf. The window manager has
//! to watch property changes on those windows and route them back to
//! the clients that care.
//!
//! [`PropWindows`] keeps that mapping, per usage, and keeps the X
//! event subscription in sync with it: a window has `PropertyChange`
//! selected exactly as long as someone is registered on it.

use std::fmt::Debug;

use indexmap::IndexMap;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};
use thiserror::Error;
#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::{debug, error, trace};

use super::{
    atom::Atom,
    core::{EventMask, XConn, XError, XWindowID},
    event::PropertyEvent,
};

/// What a client is watching a property window for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
pub enum PropWinType {
    /// The window carries `_NET_WM_USER_TIME` for the client.
    UserTime,
}

impl PropWinType {
    /// The property whose changes matter for this usage.
    pub fn property(&self) -> Atom {
        match self {
            PropWinType::UserTime => Atom::NetWmUserTime,
        }
    }
}

/// Errors from misusing the registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// The client was already registered on the window for this usage.
    #[error("client already registered on window {window} for {usage}")]
    DuplicateRegistration {
        window: XWindowID,
        usage: PropWinType,
    },

    /// The client was not registered on the window for this usage.
    #[error("client not registered on window {window} for {usage}")]
    UnknownRegistration {
        window: XWindowID,
        usage: PropWinType,
    },

    /// The registry was shut down with windows still registered.
    #[error("{0} property windows still registered at shutdown")]
    NotEmpty(usize),

    /// The registry was used before `startup` or after `shutdown`.
    #[error("property window registry is not running")]
    NotRunning,

    /// Changing the event subscription failed.
    #[error(transparent)]
    X(#[from] XError),
}

type Slots<C> = [Vec<C>; PropWinType::COUNT];

/// The registry of property windows and the clients watching them.
///
/// `C` is whatever the caller uses to refer to a client; it only
/// needs to be comparable. Clients in a slot are kept in the order
/// they were registered.
#[derive(Debug, Clone)]
pub struct PropWindows<C> {
    table: Option<IndexMap<XWindowID, Slots<C>>>,
}

impl<C> Default for PropWindows<C> {
    fn default() -> Self {
        Self { table: None }
    }
}

impl<C: Clone + PartialEq + Debug> PropWindows<C> {
    /// Creates a registry. It must be started before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the registry with an empty table.
    ///
    /// When `reconfig` is set this does nothing, so registrations
    /// survive a reconfiguration.
    pub fn startup(&mut self, reconfig: bool) {
        if reconfig {
            return;
        }
        debug!("Starting property window registry");
        self.table = Some(IndexMap::new());
    }

    /// Shuts down the registry.
    ///
    /// Either way `Err(NotEmpty)` is returned if any window is still
    /// registered. When `reconfig` is set the table is left as it is,
    /// so calling this again gives the same result. Otherwise the table
    /// is destroyed regardless, and leftover windows keep whatever
    /// event mask they had.
    pub fn shutdown(&mut self, reconfig: bool) -> Result<(), RegistryError> {
        if reconfig {
            return match &self.table {
                Some(table) if !table.is_empty() => {
                    error!(
                        "{} property windows still registered at reconfiguration",
                        table.len()
                    );
                    Err(RegistryError::NotEmpty(table.len()))
                }
                _ => Ok(()),
            };
        }
        debug!("Shutting down property window registry");

        match self.table.take() {
            Some(table) if !table.is_empty() => {
                error!(
                    "{} property windows still registered at shutdown",
                    table.len()
                );
                Err(RegistryError::NotEmpty(table.len()))
            }
            _ => Ok(()),
        }
    }

    /// Whether the registry has been started and not shut down.
    pub fn is_running(&self) -> bool {
        self.table.is_some()
    }

    /// Registers `client` as watching `window` for `usage`.
    ///
    /// The first registration on a window selects `PropertyChange`
    /// on it. If that fails, nothing is registered.
    #[cfg_attr(
        debug_assertions,
        instrument(target = "propwin", level = "trace", skip(self, conn))
    )]
    pub fn add<X: XConn>(
        &mut self,
        conn: &X,
        window: XWindowID,
        usage: PropWinType,
        client: C,
    ) -> Result<(), RegistryError> {
        let table = self.table.as_mut().ok_or(RegistryError::NotRunning)?;

        match table.get_mut(&window) {
            Some(slots) => {
                let slot = &mut slots[usage as usize];
                if slot.contains(&client) {
                    error!(
                        "Client {:?} is already registered on window {} for {}",
                        client, window, usage
                    );
                    return Err(RegistryError::DuplicateRegistration { window, usage });
                }
                slot.push(client);
            }
            None => {
                conn.select_input(window, EventMask::PROPERTY_CHANGE)?;
                trace!("Watching property window {}", window);

                let mut slots: Slots<C> = std::array::from_fn(|_| Vec::new());
                slots[usage as usize].push(client);
                table.insert(window, slots);
            }
        }
        Ok(())
    }

    /// Unregisters `client` from watching `window` for `usage`.
    ///
    /// When no client is left on the window for any usage, its events
    /// are deselected and it is dropped from the registry. The window
    /// is dropped even if deselecting fails, as it usually does for a
    /// window that was already destroyed; the error is still returned.
    #[cfg_attr(
        debug_assertions,
        instrument(target = "propwin", level = "trace", skip(self, conn))
    )]
    pub fn remove<X: XConn>(
        &mut self,
        conn: &X,
        window: XWindowID,
        usage: PropWinType,
        client: &C,
    ) -> Result<(), RegistryError> {
        let table = self.table.as_mut().ok_or(RegistryError::NotRunning)?;

        let slots = match table.get_mut(&window) {
            Some(slots) => slots,
            None => {
                error!("Window {} is not a registered property window", window);
                return Err(RegistryError::UnknownRegistration { window, usage });
            }
        };

        let slot = &mut slots[usage as usize];
        match slot.iter().position(|c| c == client) {
            Some(idx) => {
                slot.remove(idx);
            }
            None => {
                error!(
                    "Client {:?} is not registered on window {} for {}",
                    client, window, usage
                );
                return Err(RegistryError::UnknownRegistration { window, usage });
            }
        }

        if slots.iter().all(Vec::is_empty) {
            table.shift_remove(&window);
            trace!("No longer watching property window {}", window);
            conn.select_input(window, EventMask::NO_EVENT)?;
        }
        Ok(())
    }

    /// The clients watching `window` for `usage`, in registration order.
    ///
    /// Empty if the window is not registered.
    pub fn get_clients(&self, window: XWindowID, usage: PropWinType) -> &[C] {
        self.table
            .as_ref()
            .and_then(|t| t.get(&window))
            .map(|slots| slots[usage as usize].as_slice())
            .unwrap_or(&[])
    }

    /// Whether `window` is registered for any usage.
    pub fn contains(&self, window: XWindowID) -> bool {
        self.table
            .as_ref()
            .map(|t| t.contains_key(&window))
            .unwrap_or(false)
    }

    /// The registered windows, in the order they were first registered.
    pub fn windows(&self) -> impl Iterator<Item = XWindowID> + '_ {
        self.table.iter().flat_map(|t| t.keys().copied())
    }

    /// The number of registered windows.
    pub fn len(&self) -> usize {
        self.table.as_ref().map(IndexMap::len).unwrap_or(0)
    }

    /// Whether no window is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every (usage, client) pair interested in the window of `event`.
    ///
    /// This does not look at which property changed; compare the
    /// event's atom against [`PropWinType::property`] for that.
    pub fn dispatch<'s>(
        &'s self,
        event: &PropertyEvent,
    ) -> impl Iterator<Item = (PropWinType, &'s C)> + 's {
        let slots = self.table.as_ref().and_then(|t| t.get(&event.window));

        slots.into_iter().flat_map(|slots| {
            PropWinType::iter().flat_map(move |usage| {
                slots[usage as usize].iter().map(move |client| (usage, client))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x::{core::Xid, dummy::DummyConn};

    const AUX: XWindowID = Xid(0x800);
    const OTHER: XWindowID = Xid(0x900);

    fn running() -> PropWindows<u32> {
        let mut reg = PropWindows::new();
        reg.startup(false);
        reg
    }

    #[test_log::test]
    fn test_subscription_edges() {
        let conn = DummyConn::new();
        let mut reg = running();

        reg.add(&conn, AUX, PropWinType::UserTime, 1).unwrap();
        assert_eq!(conn.event_mask(AUX), EventMask::PROPERTY_CHANGE);
        assert_eq!(conn.select_calls(), 1);

        // further registrations do not touch the subscription
        reg.add(&conn, AUX, PropWinType::UserTime, 2).unwrap();
        assert_eq!(conn.select_calls(), 1);
        assert_eq!(reg.get_clients(AUX, PropWinType::UserTime), &[1, 2]);

        reg.remove(&conn, AUX, PropWinType::UserTime, &1).unwrap();
        assert_eq!(conn.select_calls(), 1);
        assert!(reg.contains(AUX));

        // the last removal deselects and drops the entry
        reg.remove(&conn, AUX, PropWinType::UserTime, &2).unwrap();
        assert_eq!(conn.select_calls(), 2);
        assert_eq!(conn.event_mask(AUX), EventMask::NO_EVENT);
        assert!(!reg.contains(AUX));
        assert!(reg.get_clients(AUX, PropWinType::UserTime).is_empty());
    }

    #[test_log::test]
    fn test_duplicate_registration() {
        let conn = DummyConn::new();
        let mut reg = running();

        reg.add(&conn, AUX, PropWinType::UserTime, 7).unwrap();
        let err = reg.add(&conn, AUX, PropWinType::UserTime, 7).unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateRegistration {
                window: AUX,
                usage: PropWinType::UserTime
            }
        );
        // not deduplicated into a second entry either
        assert_eq!(reg.get_clients(AUX, PropWinType::UserTime), &[7]);
    }

    #[test_log::test]
    fn test_unknown_removal() {
        let conn = DummyConn::new();
        let mut reg = running();

        assert!(matches!(
            reg.remove(&conn, AUX, PropWinType::UserTime, &1),
            Err(RegistryError::UnknownRegistration { .. })
        ));

        reg.add(&conn, AUX, PropWinType::UserTime, 1).unwrap();
        assert!(matches!(
            reg.remove(&conn, AUX, PropWinType::UserTime, &2),
            Err(RegistryError::UnknownRegistration { .. })
        ));
        assert_eq!(conn.select_calls(), 1);
    }

    #[test]
    fn test_failed_subscription_registers_nothing() {
        let conn = DummyConn::new();
        let mut reg = running();
        conn.break_connection();

        let err = reg.add(&conn, AUX, PropWinType::UserTime, 1).unwrap_err();
        assert!(matches!(err, RegistryError::X(ref e) if e.is_fatal()));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_dispatch() {
        let conn = DummyConn::new();
        let mut reg = running();

        reg.add(&conn, AUX, PropWinType::UserTime, 1).unwrap();
        reg.add(&conn, AUX, PropWinType::UserTime, 2).unwrap();
        reg.add(&conn, OTHER, PropWinType::UserTime, 3).unwrap();

        let event = PropertyEvent {
            window: AUX,
            atom: Xid(300),
            time: 0,
            deleted: false,
        };
        let got: Vec<_> = reg.dispatch(&event).collect();
        assert_eq!(
            got,
            vec![(PropWinType::UserTime, &1), (PropWinType::UserTime, &2)]
        );

        let unrelated = PropertyEvent {
            window: Xid(0xA00),
            ..event
        };
        assert_eq!(reg.dispatch(&unrelated).count(), 0);
        assert_eq!(reg.windows().collect::<Vec<_>>(), vec![AUX, OTHER]);
    }

    #[test]
    fn test_startup_and_shutdown() {
        let conn = DummyConn::new();
        let mut reg: PropWindows<u32> = PropWindows::new();

        assert_eq!(
            reg.add(&conn, AUX, PropWinType::UserTime, 1),
            Err(RegistryError::NotRunning)
        );

        reg.startup(false);
        reg.add(&conn, AUX, PropWinType::UserTime, 1).unwrap();

        // reconfiguring with registrations left reports them but keeps them
        assert_eq!(reg.shutdown(true), Err(RegistryError::NotEmpty(1)));
        assert_eq!(reg.shutdown(true), Err(RegistryError::NotEmpty(1)));
        reg.startup(true);
        assert_eq!(reg.get_clients(AUX, PropWinType::UserTime), &[1]);
        assert_eq!(conn.event_mask(AUX), EventMask::PROPERTY_CHANGE);

        // the final shutdown reports leftovers and clears the table anyway
        assert_eq!(reg.shutdown(false), Err(RegistryError::NotEmpty(1)));
        assert!(!reg.is_running());
        assert!(reg.get_clients(AUX, PropWinType::UserTime).is_empty());

        reg.startup(false);
        assert!(reg.is_empty());

        // an empty table passes both checks
        reg.shutdown(true).unwrap();
        reg.startup(true);
        assert!(reg.is_running());
        reg.shutdown(false).unwrap();
    }
}
