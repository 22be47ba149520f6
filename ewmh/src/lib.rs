//! `ewmh` implements the client side of the [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! as a way to integrate with EWMH compatible window managers. The EWHM spec builds on the lower
//! level Inter Client Communication Conventions Manual (ICCCM) to define interactions between
//! window managers, compositing managers and applications.
//!
//! [Root Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s03.html)
//! The EWMH spec defines a number of properties that EWHM compliant window managers will maintain
//! and return to clients requesting information. `ewmh` reads those properties and asks the window
//! manager for changes through client messages, each property being available as a typed accessor
//! on [`Ewmh`] as well as generically by its name.
//!
//! `ewmh` doesn't manage the connection itself. Any [`WindowingConnection`] will do, with
//! [`X11Connection`] adapting an x11rb connection.
//!
//! ### Examples
//! ```ignore
//! use ewmh::prelude::*;
//! let (conn, screen) = x11rb::connect(None).unwrap();
//! let ewmh = Ewmh::new(X11Connection::from_screen(conn, screen));
//! let win = ewmh.active_window().unwrap().unwrap();
//! ewmh.set_wm_state(win, WM_STATE_ADD, "_NET_WM_STATE_FULLSCREEN", 0u32).unwrap();
//! ewmh.conn().flush().unwrap();
//! ```
pub mod atoms;
pub mod codec;
mod conn;
mod dispatch;
mod error;
mod ewmh;
mod model;
mod window;
mod x11;

#[cfg(test)]
mod mock;

pub use crate::ewmh::Ewmh;
pub use codec::{MoveResize, StateRef};
pub use conn::{ClientMessage, MessageData, RawProperty, WindowingConnection};
pub use dispatch::{Getter, Setter};
pub use error::*;
pub use model::*;
pub use window::Window;
pub use x11::X11Connection;

/// All essential symbols in a simple consumable form
///
/// ### Examples
/// ```
/// use ewmh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::atoms::*;
    pub use crate::codec::{MoveResizeWindowFlags, MOVE_RESIZE_WINDOW_HEIGHT, MOVE_RESIZE_WINDOW_WIDTH, MOVE_RESIZE_WINDOW_X, MOVE_RESIZE_WINDOW_Y};
    pub use crate::*;
}
