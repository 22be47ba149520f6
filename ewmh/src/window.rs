use std::fmt;

/// Window is a transient handle onto a window of the windowing system. Handles carry nothing but
/// the window id so two handles are equal exactly when their ids are. They are created on demand
/// from raw ids through [`crate::WindowingConnection::window`] and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window {
    pub id: u32,
}

impl Window {
    /// Create a new window handle for the given id
    ///
    /// ### Arguments
    /// * `id` - id of the window
    ///
    /// ### Examples
    /// ```
    /// use ewmh::prelude::*;
    /// let win = Window::new(12345);
    /// assert_eq!(win.id, 12345);
    /// ```
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// Resolve a raw property value into a window handle. Zero is the `None` window.
    ///
    /// ### Examples
    /// ```
    /// use ewmh::prelude::*;
    /// assert_eq!(Window::from_id(0), None);
    /// assert_eq!(Window::from_id(7), Some(Window::new(7)));
    /// ```
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            x11rb::NONE => None,
            _ => Some(Self::new(id)),
        }
    }
}

// Implement format! support
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08x}", self.id)
    }
}

impl From<Window> for u32 {
    fn from(win: Window) -> Self {
        win.id
    }
}
