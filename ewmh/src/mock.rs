//! In memory windowing connection recording everything `ewmh` asks of it
use crate::{
    conn::{ClientMessage, RawProperty, WindowingConnection},
    window::Window,
    EwmhError, EwmhResult,
};
use std::{cell::RefCell, collections::HashMap};
use x11rb::protocol::xproto::{Atom, EventMask};

pub(crate) const ROOT: u32 = 0x1e1;
const FIRST_ATOM: Atom = 300;

pub(crate) struct MockConnection {
    atoms: RefCell<Vec<String>>,
    properties: HashMap<(u32, String), RawProperty>,
    sent: RefCell<Vec<(ClientMessage, EventMask)>>,
    failing_atoms: bool,
}

impl MockConnection {
    pub(crate) fn new() -> Self {
        Self {
            atoms: RefCell::new(vec![]),
            properties: HashMap::new(),
            sent: RefCell::new(vec![]),
            failing_atoms: false,
        }
    }

    /// Every name to atom resolution fails
    pub(crate) fn failing_atoms(mut self) -> Self {
        self.failing_atoms = true;
        self
    }

    pub(crate) fn with_u32(mut self, win: u32, name: &str, items: &[u32]) -> Self {
        self.properties.insert((win, name.to_owned()), RawProperty::from_u32(6, items));
        self
    }

    pub(crate) fn with_text(mut self, win: u32, name: &str, text: &str) -> Self {
        self.properties.insert((win, name.to_owned()), RawProperty::from_text(0x130, text));
        self
    }

    pub(crate) fn sent(&self) -> Vec<(ClientMessage, EventMask)> {
        self.sent.borrow().clone()
    }

    pub(crate) fn last_sent(&self) -> (ClientMessage, EventMask) {
        self.sent.borrow().last().cloned().expect("no client message was sent")
    }
}

impl WindowingConnection for MockConnection {
    fn atom(&self, name: &str, only_if_exists: bool) -> EwmhResult<Atom> {
        if self.failing_atoms {
            return Err(EwmhError::AtomNotFound(name.to_owned()).into());
        }
        let mut atoms = self.atoms.borrow_mut();
        if let Some(i) = atoms.iter().position(|x| x == name) {
            return Ok(FIRST_ATOM + i as Atom);
        }
        if only_if_exists {
            return Ok(x11rb::NONE);
        }
        atoms.push(name.to_owned());
        Ok(FIRST_ATOM + (atoms.len() - 1) as Atom)
    }

    fn atom_name(&self, atom: Atom) -> EwmhResult<String> {
        atom.checked_sub(FIRST_ATOM)
            .and_then(|i| self.atoms.borrow().get(i as usize).cloned())
            .ok_or_else(|| EwmhError::AtomNameNotFound(atom).into())
    }

    fn get_property(&self, window: Window, property: Atom) -> EwmhResult<Option<RawProperty>> {
        let name = self.atom_name(property)?;
        Ok(self.properties.get(&(window.id, name)).cloned())
    }

    fn send_client_message(&self, msg: &ClientMessage, mask: EventMask) -> EwmhResult<()> {
        self.sent.borrow_mut().push((msg.clone(), mask));
        Ok(())
    }

    fn root(&self) -> Window {
        Window::new(ROOT)
    }
}
