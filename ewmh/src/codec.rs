//! Encoding and decoding rules between typed EWMH values and the raw payloads carried by property
//! replies and client messages.
//!
//! Every property known to `ewmh` has a static [`PropertyDescriptor`]. Getters feed the raw reply
//! through one of the `decode_*` functions and setters pack their arguments with [`words`] or
//! [`text`] before handing the [`MessageData`] to the connection.
use crate::{
    atoms::{self, *},
    conn::{MessageData, RawProperty, WindowingConnection},
    window::Window,
    EwmhError, EwmhResult,
};
use tracing::trace;
use x11rb::protocol::xproto::EventMask;

/// Number of 32 bit items a client message can carry
pub const MESSAGE_WORDS: usize = 5;

// Define the second byte of the move resize flags 32bit value
// Used to indicate that the associated value has been changed and needs to be acted upon
pub type MoveResizeWindowFlags = u32;
pub const MOVE_RESIZE_WINDOW_X: MoveResizeWindowFlags = 1 << 8;
pub const MOVE_RESIZE_WINDOW_Y: MoveResizeWindowFlags = 1 << 9;
pub const MOVE_RESIZE_WINDOW_WIDTH: MoveResizeWindowFlags = 1 << 10;
pub const MOVE_RESIZE_WINDOW_HEIGHT: MoveResizeWindowFlags = 1 << 11;

// Source indication for the move resize flags. Shares its bit with the height flag so a message
// always reports the height as present.
pub const MOVE_RESIZE_WINDOW_SOURCE: MoveResizeWindowFlags = 1 << 11;

/// Event mask used for client messages unless the caller provides one
pub fn default_event_mask() -> EventMask {
    EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY
}

/// Wire representation of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Cardinal32,
    Utf8,
}

/// Window a property logically belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Root,
    Window,
}

/// Static description of a single EWMH property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub encoding: Encoding,
    pub scope: Scope,
    pub readable: bool,
    pub writable: bool,
}

const fn prop(name: &'static str, encoding: Encoding, scope: Scope, readable: bool, writable: bool) -> PropertyDescriptor {
    PropertyDescriptor { name, encoding, scope, readable, writable }
}

/// The full property catalog
pub static DESCRIPTORS: [PropertyDescriptor; 18] = [
    prop(_NET_CLIENT_LIST, Encoding::Cardinal32, Scope::Root, true, false),
    prop(_NET_CLIENT_LIST_STACKING, Encoding::Cardinal32, Scope::Root, true, false),
    prop(_NET_NUMBER_OF_DESKTOPS, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_DESKTOP_GEOMETRY, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_DESKTOP_VIEWPORT, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_CURRENT_DESKTOP, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_ACTIVE_WINDOW, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_WORKAREA, Encoding::Cardinal32, Scope::Root, true, false),
    prop(_NET_SHOWING_DESKTOP, Encoding::Cardinal32, Scope::Root, true, true),
    prop(_NET_CLOSE_WINDOW, Encoding::Cardinal32, Scope::Window, false, true),
    prop(_NET_MOVERESIZE_WINDOW, Encoding::Cardinal32, Scope::Window, false, true),
    prop(_NET_WM_NAME, Encoding::Utf8, Scope::Window, true, true),
    prop(_NET_WM_VISIBLE_NAME, Encoding::Utf8, Scope::Window, true, true),
    prop(_NET_WM_DESKTOP, Encoding::Cardinal32, Scope::Window, true, true),
    prop(_NET_WM_WINDOW_TYPE, Encoding::Cardinal32, Scope::Window, true, false),
    prop(_NET_WM_STATE, Encoding::Cardinal32, Scope::Window, true, true),
    prop(_NET_WM_ALLOWED_ACTIONS, Encoding::Cardinal32, Scope::Window, true, false),
    prop(_NET_WM_PID, Encoding::Cardinal32, Scope::Window, true, false),
];

/// Look up the descriptor for the given property name
pub fn descriptor(name: &str) -> Option<&'static PropertyDescriptor> {
    DESCRIPTORS.iter().find(|x| x.name == name)
}

// Decoding
//--------------------------------------------------------------------------------------------------

/// All 32 bit items of the property, empty when the property is unset
pub fn decode_cardinals(raw: Option<RawProperty>) -> Vec<u32> {
    raw.and_then(|x| x.value32()).unwrap_or_default()
}

/// First 32 bit item of the property, `None` when the property is unset or empty
pub fn decode_cardinal(raw: Option<RawProperty>) -> Option<u32> {
    decode_cardinals(raw).first().copied()
}

/// Property value as text, `None` when the property is unset
pub fn decode_text(raw: Option<RawProperty>) -> Option<String> {
    raw.map(|x| x.text().into_owned())
}

/// Window handles for every item of the property, zero ids being `None`
pub fn decode_windows<C: WindowingConnection>(conn: &C, raw: Option<RawProperty>) -> Vec<Option<Window>> {
    decode_cardinals(raw).into_iter().map(|id| resolve_window(conn, id)).collect()
}

/// Window handle for the first item of the property
pub fn decode_window<C: WindowingConnection>(conn: &C, raw: Option<RawProperty>) -> Option<Window> {
    decode_cardinal(raw).and_then(|id| resolve_window(conn, id))
}

/// Names of the given atom codes. Codes the connection can't name become [`atoms::UNKNOWN`].
pub fn decode_names<C: WindowingConnection>(conn: &C, codes: &[u32]) -> Vec<String> {
    codes
        .iter()
        .map(|&atom| match conn.atom_name(atom) {
            Ok(name) => name,
            Err(err) => {
                trace!("decode_names: atom: {}, err: {}", atom, err);
                atoms::UNKNOWN.to_owned()
            },
        })
        .collect()
}

fn resolve_window<C: WindowingConnection>(conn: &C, id: u32) -> Option<Window> {
    Window::from_id(id).map(|x| conn.window(x.id))
}

// Encoding
//--------------------------------------------------------------------------------------------------

/// Pack the items into the fixed five word client message payload, padding with zeros and
/// dropping anything past the fifth item.
pub fn words(items: &[u32]) -> MessageData {
    let mut data = [0u32; MESSAGE_WORDS];
    for (dst, src) in data.iter_mut().zip(items) {
        *dst = *src;
    }
    MessageData::Words(data)
}

/// Pack the text as is
pub fn text(value: &str) -> MessageData {
    MessageData::Text(value.to_owned())
}

/// Current unix timestamp as used by the close window message
pub fn timestamp() -> u32 {
    chrono::Utc::now().timestamp() as u32
}

/// MoveResize describes a `_NET_MOVERESIZE_WINDOW` request. Only the provided values are flagged
/// for the window manager to act upon, the others are sent as zero.
///
/// ### Examples
/// ```
/// use ewmh::prelude::*;
/// let mr = MoveResize::new(0).x(10).height(20);
/// assert_eq!(mr.flags(), 0x0900);
/// assert_eq!(mr.words(), [0x0900, 10, 0, 0, 20]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResize {
    pub gravity: u32,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub w: Option<u32>,
    pub h: Option<u32>,
}

impl MoveResize {
    /// Create a new request using the given gravity and no values
    ///
    /// ### Arguments
    /// * `gravity` - one of the X gravity constants or 0 for the window's own gravity
    pub fn new(gravity: u32) -> Self {
        Self { gravity, ..Default::default() }
    }

    /// Create a new request from optional values
    pub fn from_options(gravity: u32, x: Option<u32>, y: Option<u32>, w: Option<u32>, h: Option<u32>) -> Self {
        Self { gravity, x, y, w, h }
    }

    pub fn x(mut self, x: u32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: u32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn width(mut self, w: u32) -> Self {
        self.w = Some(w);
        self
    }

    pub fn height(mut self, h: u32) -> Self {
        self.h = Some(h);
        self
    }

    /// Gravity and flags word
    ///
    /// Gravity is defined as the lower byte of the move resize flags 32bit value
    /// <https://tronche.com/gui/x/xlib/window/attributes/gravity.html>
    pub fn flags(&self) -> MoveResizeWindowFlags {
        let mut flags = self.gravity | MOVE_RESIZE_WINDOW_SOURCE;
        if self.x.is_some() {
            flags |= MOVE_RESIZE_WINDOW_X;
        }
        if self.y.is_some() {
            flags |= MOVE_RESIZE_WINDOW_Y;
        }
        if self.w.is_some() {
            flags |= MOVE_RESIZE_WINDOW_WIDTH;
        }
        if self.h.is_some() {
            flags |= MOVE_RESIZE_WINDOW_HEIGHT;
        }
        flags
    }

    /// Full message payload
    pub fn words(&self) -> [u32; MESSAGE_WORDS] {
        [
            self.flags(),
            self.x.unwrap_or(0),
            self.y.unwrap_or(0),
            self.w.unwrap_or(0),
            self.h.unwrap_or(0),
        ]
    }
}

/// StateRef names a window state either by its atom code or by its atom name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateRef {
    Code(u32),
    Name(String),
}

impl StateRef {
    /// Resolve to the atom code, interning the name if the server doesn't know it yet
    pub fn resolve<C: WindowingConnection>(&self, conn: &C) -> EwmhResult<u32> {
        match self {
            StateRef::Code(code) => Ok(*code),
            StateRef::Name(name) => {
                let atom = conn.atom(name, false)?;
                if atom == x11rb::NONE {
                    return Err(EwmhError::AtomNotFound(name.clone()).into());
                }
                trace!("resolve: state: {}, atom: {}", name, atom);
                Ok(atom)
            },
        }
    }
}

impl From<u32> for StateRef {
    fn from(val: u32) -> Self {
        StateRef::Code(val)
    }
}

impl From<&str> for StateRef {
    fn from(val: &str) -> Self {
        StateRef::Name(val.to_owned())
    }
}

impl From<String> for StateRef {
    fn from(val: String) -> Self {
        StateRef::Name(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockConnection;

    #[test]
    fn test_words_pads_and_truncates() {
        assert_eq!(words(&[7]), MessageData::Words([7, 0, 0, 0, 0]));
        assert_eq!(words(&[1, 2, 3, 4, 5, 6, 7]), MessageData::Words([1, 2, 3, 4, 5]));
        assert_eq!(words(&[]), MessageData::Words([0; 5]));
    }

    #[test]
    fn test_text_is_not_padded() {
        assert_eq!(text("Hello"), MessageData::Text("Hello".to_owned()));
    }

    #[test]
    fn test_move_resize_flags() {
        let mr = MoveResize::from_options(0, Some(10), None, None, Some(20));
        assert_eq!(mr.flags(), 0x0900);
        assert_eq!(mr.words(), [0x0900, 10, 0, 0, 20]);

        // Width stays unflagged when left out
        assert_eq!(mr.flags() & MOVE_RESIZE_WINDOW_WIDTH, 0);

        // Gravity lands in the lower byte, source bit is always set
        let mr = MoveResize::new(5);
        assert_eq!(mr.words(), [0x0805, 0, 0, 0, 0]);

        let mr = MoveResize::new(1).x(1).y(2).width(3).height(4);
        assert_eq!(mr.words(), [0x0F01, 1, 2, 3, 4]);
    }

    #[test]
    fn test_move_resize_zero_value_is_still_present() {
        let mr = MoveResize::new(0).y(0);
        assert_eq!(mr.flags(), MOVE_RESIZE_WINDOW_SOURCE | MOVE_RESIZE_WINDOW_Y);
    }

    #[test]
    fn test_decode_absent_data() {
        assert_eq!(decode_cardinals(None), Vec::<u32>::new());
        assert_eq!(decode_cardinal(None), None);
        assert_eq!(decode_text(None), None);
        assert_eq!(decode_cardinal(Some(RawProperty::from_u32(6, &[]))), None);
    }

    #[test]
    fn test_decode_windows_maps_zero_to_none() {
        let conn = MockConnection::new();
        let raw = RawProperty::from_u32(33, &[0x400001, 0, 0x400002]);
        assert_eq!(
            decode_windows(&conn, Some(raw)),
            vec![Some(Window::new(0x400001)), None, Some(Window::new(0x400002))]
        );
        assert_eq!(decode_window(&conn, Some(RawProperty::from_u32(33, &[0]))), None);
    }

    #[test]
    fn test_decode_names_degrades_to_unknown() {
        let conn = MockConnection::new();
        let fullscreen = conn.atom("_NET_WM_STATE_FULLSCREEN", false).unwrap();
        assert_eq!(decode_names(&conn, &[fullscreen, 9999]), vec!["_NET_WM_STATE_FULLSCREEN", "UNKNOWN"]);
    }

    #[test]
    fn test_state_ref_resolution() {
        let conn = MockConnection::new();
        assert_eq!(StateRef::from(42u32).resolve(&conn).unwrap(), 42);

        let code = StateRef::from("_NET_WM_STATE_ABOVE").resolve(&conn).unwrap();
        assert_eq!(conn.atom("_NET_WM_STATE_ABOVE", true).unwrap(), code);
    }

    #[test]
    fn test_state_ref_resolution_failure_is_fatal() {
        let conn = MockConnection::new().failing_atoms();
        let err = StateRef::from("_NET_WM_STATE_ABOVE").resolve(&conn).unwrap_err();
        assert_eq!(err.downcast_ref::<EwmhError>(), Some(&EwmhError::AtomNotFound("_NET_WM_STATE_ABOVE".to_owned())));
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(descriptor(_NET_WM_NAME).unwrap().encoding, Encoding::Utf8);
        assert_eq!(descriptor(_NET_CLIENT_LIST).unwrap().writable, false);
        assert_eq!(descriptor(_NET_CLOSE_WINDOW).unwrap().readable, false);
        assert!(descriptor("_NET_FOO").is_none());
    }
}
