//! [`WindowingConnection`] on top of an already established x11rb connection
use crate::{
    conn::{ClientMessage, MessageData, RawProperty, WindowingConnection},
    window::Window,
    EwmhError, EwmhResult,
};
use std::str;
use tracing::trace;
use x11rb::{
    connection::Connection,
    errors::ReplyError,
    protocol::{
        xproto::{Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask},
        ErrorKind,
    },
};

/// Size of the client message data in bytes
const MESSAGE_BYTES: usize = 20;

/// X11Connection adapts an x11rb connection. Connecting, flushing and event handling stay with
/// the owner of the connection.
pub struct X11Connection<C: Connection> {
    conn: C,   // x11 connection
    root: u32, // root window id
}

impl<C: Connection> X11Connection<C> {
    /// Wrap the connection using the given root window
    pub fn new(conn: C, root: u32) -> Self {
        Self { conn, root }
    }

    /// Wrap the connection using the root window of the given screen
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// let (conn, screen) = x11rb::connect(None).unwrap();
    /// let conn = X11Connection::from_screen(conn, screen);
    /// ```
    pub fn from_screen(conn: C, screen: usize) -> Self {
        let root = conn.setup().roots[screen].root;
        Self::new(conn, root)
    }

    /// Get the underlying x11rb connection
    pub fn conn(&self) -> &C {
        &self.conn
    }

    /// Send all queued requests, e.g. the client messages of the setters, to the server
    pub fn flush(&self) -> EwmhResult<()> {
        self.conn.flush()?;
        Ok(())
    }
}

impl<C: Connection> WindowingConnection for X11Connection<C> {
    fn atom(&self, name: &str, only_if_exists: bool) -> EwmhResult<Atom> {
        let atom = self.conn.intern_atom(only_if_exists, name.as_bytes())?.reply()?.atom;
        if atom == x11rb::NONE {
            return Err(EwmhError::AtomNotFound(name.to_owned()).into());
        }
        trace!("atom: name: {}, atom: {}", name, atom);
        Ok(atom)
    }

    fn atom_name(&self, atom: Atom) -> EwmhResult<String> {
        match self.conn.get_atom_name(atom)?.reply() {
            Ok(reply) => Ok(str::from_utf8(&reply.name)?.to_owned()),
            Err(ReplyError::X11Error(ref err)) if err.error_kind == ErrorKind::Atom => {
                Err(EwmhError::AtomNameNotFound(atom).into())
            },
            Err(err) => Err(err.into()),
        }
    }

    fn get_property(&self, window: Window, property: Atom) -> EwmhResult<Option<RawProperty>> {
        let reply = self.conn.get_property(false, window.id, property, AtomEnum::ANY, 0, u32::MAX)?.reply()?;
        if reply.type_ == x11rb::NONE {
            return Ok(None);
        }
        Ok(Some(RawProperty { type_: reply.type_, format: reply.format, value: reply.value }))
    }

    fn send_client_message(&self, msg: &ClientMessage, mask: EventMask) -> EwmhResult<()> {
        let event = match msg.data {
            MessageData::Words(words) => ClientMessageEvent::new(32, msg.window.id, msg.message_type, words),
            MessageData::Text(ref text) => ClientMessageEvent::new(8, msg.window.id, msg.message_type, frame(text)),
        };
        self.conn.send_event(false, msg.destination.id, mask, event)?;
        Ok(())
    }

    fn root(&self) -> Window {
        Window::new(self.root)
    }
}

// Client messages carry a fixed 20 bytes, longer text is cut off
fn frame(text: &str) -> [u8; MESSAGE_BYTES] {
    let mut data = [0u8; MESSAGE_BYTES];
    for (dst, src) in data.iter_mut().zip(text.as_bytes()) {
        *dst = *src;
    }
    data
}
