//! The windowing connection is the only collaborator `ewmh` talks to. It owns the actual wire
//! protocol, `ewmh` only translates between typed EWMH values and the generic primitives below.
//!
//! Connections are typically not thread safe. Callers sharing one across threads must serialize
//! access themselves.
use crate::{window::Window, EwmhResult};
use std::borrow::Cow;
use x11rb::protocol::xproto::{Atom, EventMask};

/// Raw property payload as returned by the server for a get property request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty {
    pub type_: Atom,    // actual type of the property
    pub format: u8,     // 8, 16 or 32 bit items
    pub value: Vec<u8>, // native byte order
}

impl RawProperty {
    /// Build a 32 bit property from the given items
    pub fn from_u32(type_: Atom, items: &[u32]) -> Self {
        Self { type_, format: 32, value: items.iter().flat_map(|x| x.to_ne_bytes()).collect() }
    }

    /// Build an 8 bit property from the given text
    pub fn from_text(type_: Atom, text: &str) -> Self {
        Self { type_, format: 8, value: text.as_bytes().to_vec() }
    }

    /// Get the 32 bit items of the property or None if the property isn't 32 bit formatted
    pub fn value32(&self) -> Option<Vec<u32>> {
        if self.format != 32 {
            return None;
        }
        Some(self.value.chunks_exact(4).map(|x| u32::from_ne_bytes([x[0], x[1], x[2], x[3]])).collect())
    }

    /// Get the property as UTF-8 text, replacing invalid sequences
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

/// Payload of a client message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageData {
    Words([u32; 5]),
    Text(String),
}

/// Client message about `window` delivered to the `destination` root window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMessage {
    pub destination: Window, // root window receiving the event
    pub window: Window,
    pub message_type: Atom,
    pub data: MessageData,
}

/// Primitives `ewmh` needs from the underlying windowing connection
pub trait WindowingConnection {
    /// Resolve the given name to its atom code, creating the atom unless `only_if_exists` is set
    fn atom(&self, name: &str, only_if_exists: bool) -> EwmhResult<Atom>;

    /// Resolve the given atom code back to its name
    fn atom_name(&self, atom: Atom) -> EwmhResult<String>;

    /// Fetch the full property of any type from the given window. Unset properties are `None`.
    fn get_property(&self, window: Window, property: Atom) -> EwmhResult<Option<RawProperty>>;

    /// Queue the client message for delivery to its destination with the given event mask
    fn send_client_message(&self, msg: &ClientMessage, mask: EventMask) -> EwmhResult<()>;

    /// Default root window of the connection
    fn root(&self) -> Window;

    /// Resolve the given id to a window handle
    fn window(&self, id: u32) -> Window {
        Window::new(id)
    }
}

impl<T: WindowingConnection + ?Sized> WindowingConnection for &T {
    fn atom(&self, name: &str, only_if_exists: bool) -> EwmhResult<Atom> {
        (**self).atom(name, only_if_exists)
    }

    fn atom_name(&self, atom: Atom) -> EwmhResult<String> {
        (**self).atom_name(atom)
    }

    fn get_property(&self, window: Window, property: Atom) -> EwmhResult<Option<RawProperty>> {
        (**self).get_property(window, property)
    }

    fn send_client_message(&self, msg: &ClientMessage, mask: EventMask) -> EwmhResult<()> {
        (**self).send_client_message(msg, mask)
    }

    fn root(&self) -> Window {
        (**self).root()
    }

    fn window(&self, id: u32) -> Window {
        (**self).window(id)
    }
}
