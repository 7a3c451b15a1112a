//! An in-memory stand-in for the X server, used for testing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::x::{
    core::{
        EventMask, PropFormat, PropMode, RawProperty, Result, XAtom, XConn, XError, XWindowID,
        Xid, ANY_PROPERTY_TYPE,
    },
    event::ClientMessageEvent,
};

/// The atoms the core protocol predefines, with their fixed values.
const PREDEFINED: &[(&str, u32)] = &[
    ("PRIMARY", 1),
    ("SECONDARY", 2),
    ("ATOM", 4),
    ("CARDINAL", 6),
    ("PIXMAP", 20),
    ("STRING", 31),
    ("WINDOW", 33),
    ("WM_COMMAND", 34),
    ("WM_HINTS", 35),
    ("WM_CLIENT_MACHINE", 36),
    ("WM_ICON_NAME", 37),
    ("WM_NAME", 39),
    ("WM_NORMAL_HINTS", 40),
    ("WM_SIZE_HINTS", 41),
    ("WM_CLASS", 67),
    ("WM_TRANSIENT_FOR", 68),
];

/// First value handed out for atoms created at runtime.
const FIRST_RUNTIME_ATOM: u32 = 69;

#[derive(Debug, Clone)]
struct StoredProperty {
    type_: XAtom,
    format: PropFormat,
    data: Vec<u8>,
}

/// A dummy connection implementing XConn that does not interface
/// with an X server at all, and should only be used for testing.
///
/// `DummyConn` keeps atoms, window properties and selected event
/// masks in memory and follows the reply semantics of the real
/// `GetProperty` request, so code exercised against it behaves the
/// same way against a live server. Client messages that would have
/// been sent are recorded instead.
#[derive(Debug)]
pub struct DummyConn {
    root: XWindowID,
    atoms: RefCell<IndexMap<String, XAtom>>,
    props: RefCell<HashMap<(XWindowID, XAtom), StoredProperty>>,
    masks: RefCell<HashMap<XWindowID, EventMask>>,
    select_calls: Cell<usize>,
    sent: RefCell<Vec<(XWindowID, EventMask, ClientMessageEvent)>>,
    broken: Cell<bool>,
}

impl DummyConn {
    /// Root window ID used by every DummyConn.
    pub const ROOT: XWindowID = Xid(0x100);

    /// Creates a new DummyConn with only the predefined atoms.
    pub fn new() -> Self {
        let atoms = PREDEFINED
            .iter()
            .map(|(name, val)| (name.to_string(), Xid(*val)))
            .collect();

        Self {
            root: Self::ROOT,
            atoms: RefCell::new(atoms),
            props: RefCell::new(HashMap::new()),
            masks: RefCell::new(HashMap::new()),
            select_calls: Cell::new(0),
            sent: RefCell::new(Vec::new()),
            broken: Cell::new(false),
        }
    }

    /// Makes every subsequent request fail with a connection error.
    pub fn break_connection(&self) {
        self.broken.set(true);
    }

    /// The event mask currently selected on `window`.
    pub fn event_mask(&self, window: XWindowID) -> EventMask {
        self.masks
            .borrow()
            .get(&window)
            .copied()
            .unwrap_or(EventMask::NO_EVENT)
    }

    /// How many times `select_input` has been called.
    pub fn select_calls(&self) -> usize {
        self.select_calls.get()
    }

    /// All client messages sent so far.
    pub fn sent_messages(&self) -> Vec<(XWindowID, EventMask, ClientMessageEvent)> {
        self.sent.borrow().clone()
    }

    /// Whether `window` currently has `property` set.
    pub fn has_property(&self, window: XWindowID, property: XAtom) -> bool {
        self.props.borrow().contains_key(&(window, property))
    }

    /// The raw bytes stored for a property, if any.
    pub fn raw_data(&self, window: XWindowID, property: XAtom) -> Option<Vec<u8>> {
        self.props
            .borrow()
            .get(&(window, property))
            .map(|p| p.data.clone())
    }

    fn check_alive(&self) -> Result<()> {
        if self.broken.get() {
            Err(XError::Connection("connection to dummy server closed".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for DummyConn {
    fn default() -> Self {
        Self::new()
    }
}

impl XConn for DummyConn {
    fn root(&self) -> XWindowID {
        self.root
    }

    fn intern_atom(&self, name: &str) -> Result<XAtom> {
        self.check_alive()?;
        let mut atoms = self.atoms.borrow_mut();
        if let Some(atom) = atoms.get(name) {
            return Ok(*atom);
        }
        let atom = Xid(FIRST_RUNTIME_ATOM + (atoms.len() - PREDEFINED.len()) as u32);
        atoms.insert(name.to_string(), atom);
        Ok(atom)
    }

    fn atom_name(&self, atom: XAtom) -> Result<String> {
        self.check_alive()?;
        self.atoms
            .borrow()
            .iter()
            .find(|(_, v)| **v == atom)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| XError::Protocol(format!("BadAtom: {}", atom)))
    }

    fn get_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        long_offset: u32,
        long_length: u32,
    ) -> Result<RawProperty> {
        self.check_alive()?;
        let props = self.props.borrow();

        let stored = match props.get(&(window, property)) {
            Some(stored) => stored,
            None => return Ok(RawProperty::default()),
        };
        let total = stored.data.len();

        // mismatched types return the actual type and size but no data
        if type_ != ANY_PROPERTY_TYPE && type_ != stored.type_ {
            return Ok(RawProperty {
                type_: stored.type_,
                format: stored.format.bits(),
                bytes_after: total as u32,
                value: Vec::new(),
            });
        }

        let start = 4 * long_offset as usize;
        if start > total {
            return Err(XError::Protocol(format!("BadValue: offset {}", long_offset)));
        }
        let end = total.min(start.saturating_add(4 * long_length as usize));

        Ok(RawProperty {
            type_: stored.type_,
            format: stored.format.bits(),
            bytes_after: (total - end) as u32,
            value: stored.data[start..end].to_vec(),
        })
    }

    fn change_property(
        &self,
        window: XWindowID,
        property: XAtom,
        type_: XAtom,
        format: PropFormat,
        mode: PropMode,
        data: &[u8],
    ) -> Result<()> {
        self.check_alive()?;
        let mut props = self.props.borrow_mut();
        let key = (window, property);

        if mode == PropMode::Replace || !props.contains_key(&key) {
            props.insert(
                key,
                StoredProperty {
                    type_,
                    format,
                    data: data.to_vec(),
                },
            );
            return Ok(());
        }
        let existing = match props.get_mut(&key) {
            Some(existing) => existing,
            None => return Ok(()),
        };

        if existing.type_ != type_ || existing.format != format {
            return Err(XError::Protocol("BadMatch: type or format differs".into()));
        }
        if mode == PropMode::Prepend {
            let mut new = data.to_vec();
            new.extend_from_slice(&existing.data);
            existing.data = new;
        } else {
            existing.data.extend_from_slice(data);
        }
        Ok(())
    }

    fn delete_property(&self, window: XWindowID, property: XAtom) -> Result<()> {
        self.check_alive()?;
        self.props.borrow_mut().remove(&(window, property));
        Ok(())
    }

    fn send_client_message(
        &self,
        destination: XWindowID,
        mask: EventMask,
        event: ClientMessageEvent,
    ) -> Result<()> {
        self.check_alive()?;
        self.sent.borrow_mut().push((destination, mask, event));
        Ok(())
    }

    fn select_input(&self, window: XWindowID, mask: EventMask) -> Result<()> {
        self.check_alive()?;
        self.select_calls.set(self.select_calls.get() + 1);
        self.masks.borrow_mut().insert(window, mask);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_property_semantics() {
        let conn = DummyConn::new();
        let (win, prop, card) = (Xid(5), Xid(300), Xid(6));

        let missing = conn.get_property(win, prop, card, 0, 10).unwrap();
        assert!(missing.is_missing());

        let data: Vec<u8> = (0u8..12).collect();
        conn.change_property(win, prop, card, PropFormat::Format32, PropMode::Replace, &data)
            .unwrap();

        let partial = conn.get_property(win, prop, card, 1, 1).unwrap();
        assert_eq!(partial.value, vec![4, 5, 6, 7]);
        assert_eq!(partial.bytes_after, 4);

        let wrong = conn.get_property(win, prop, Xid(31), 0, 10).unwrap();
        assert_eq!(wrong.type_, card);
        assert!(wrong.value.is_empty());
        assert_eq!(wrong.bytes_after, 12);
    }

    #[test]
    fn test_append_and_prepend() {
        let conn = DummyConn::new();
        let (win, prop, ty) = (Xid(5), Xid(300), Xid(31));

        conn.change_property(win, prop, ty, PropFormat::Format8, PropMode::Replace, b"bb")
            .unwrap();
        conn.change_property(win, prop, ty, PropFormat::Format8, PropMode::Append, b"c")
            .unwrap();
        conn.change_property(win, prop, ty, PropFormat::Format8, PropMode::Prepend, b"a")
            .unwrap();

        assert_eq!(conn.raw_data(win, prop), Some(b"abbc".to_vec()));
        assert!(conn
            .change_property(win, prop, Xid(6), PropFormat::Format32, PropMode::Append, &[0; 4])
            .is_err());
    }

    #[test]
    fn test_runtime_atoms() {
        let conn = DummyConn::new();
        let a = conn.intern_atom("_NET_WM_NAME").unwrap();
        let b = conn.intern_atom("_NET_WM_STATE").unwrap();

        assert_eq!(a, Xid(FIRST_RUNTIME_ATOM));
        assert_eq!(b, Xid(FIRST_RUNTIME_ATOM + 1));
        assert_eq!(conn.intern_atom("_NET_WM_NAME").unwrap(), a);
        assert_eq!(conn.atom_name(b).unwrap(), "_NET_WM_STATE");
        assert_eq!(conn.intern_atom("STRING").unwrap(), Xid(31));
    }
}
