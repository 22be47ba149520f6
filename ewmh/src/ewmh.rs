//! `Ewmh` uses the [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! as a way to integrate with EWMH compatible window managers.
//!
//! [Root Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s03.html)
//! Window managers maintain properties on the root window and on every client window. Getters
//! read those properties directly. Setters never write a property themselves, instead they send a
//! client message to the root window asking the window manager to perform the change.
//!
//! Every property can be accessed in two ways, through its typed accessor or generically by name:
//! ```ignore
//! let win = ewmh.active_window()?;
//! let win = ewmh.get_property("_NET_ACTIVE_WINDOW", &[])?;
//!
//! ewmh.set_active_window(win)?;
//! ewmh.set_property("_NET_ACTIVE_WINDOW", &[win.into()])?;
//! ```
//! Messages are only queued. Flushing the connection is up to the caller.
use crate::{
    atoms::*,
    codec::{self, MoveResize, StateRef},
    conn::{ClientMessage, MessageData, RawProperty, WindowingConnection},
    dispatch::{self, Args, Getter, Setter},
    model::{Arg, PropertyValue},
    window::Window,
    EwmhError, EwmhResult,
};
use std::collections::HashMap;
use tracing::{debug, trace};
use x11rb::protocol::xproto::EventMask;

/// Ewmh provides typed and generic access to the EWMH properties of a single windowing connection
/// and root window.
pub struct Ewmh<C: WindowingConnection> {
    conn: C,                                   // windowing connection
    root: Window,                              // root window
    readable: HashMap<&'static str, Getter>,   // readable property dispatch
    writable: HashMap<&'static str, Setter>,   // writable property dispatch
}

impl<C: WindowingConnection> Ewmh<C> {
    /// Create a new instance using the connection's default root window
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// let (conn, screen) = x11rb::connect(None).unwrap();
    /// let ewmh = Ewmh::new(X11Connection::from_screen(conn, screen));
    /// ```
    pub fn new(conn: C) -> Self {
        let root = conn.root();
        Self::with_root(conn, root)
    }

    /// Create a new instance using the given root window
    pub fn with_root(conn: C, root: Window) -> Self {
        debug!("new: root: {}", root);
        Self { conn, root, readable: dispatch::readable_table(), writable: dispatch::writable_table() }
    }

    /// Get the underlying windowing connection
    pub fn conn(&self) -> &C {
        &self.conn
    }

    /// Get the root window
    pub fn root(&self) -> Window {
        self.root
    }

    // Setters
    //----------------------------------------------------------------------------------------------

    /// Set the number of desktops (`_NET_NUMBER_OF_DESKTOPS`)
    pub fn set_number_of_desktops(&self, nb: u32) -> EwmhResult<()> {
        self.send_message(_NET_NUMBER_OF_DESKTOPS, codec::words(&[nb]), None, None)
    }

    /// Set the desktop geometry (`_NET_DESKTOP_GEOMETRY`)
    ///
    /// ### Arguments
    /// * `w` - desktop width
    /// * `h` - desktop height
    pub fn set_desktop_geometry(&self, w: u32, h: u32) -> EwmhResult<()> {
        self.send_message(_NET_DESKTOP_GEOMETRY, codec::words(&[w, h]), None, None)
    }

    /// Set the viewport of the current desktop (`_NET_DESKTOP_VIEWPORT`)
    pub fn set_desktop_viewport(&self, w: u32, h: u32) -> EwmhResult<()> {
        self.send_message(_NET_DESKTOP_VIEWPORT, codec::words(&[w, h]), None, None)
    }

    /// Switch to the given desktop (`_NET_CURRENT_DESKTOP`)
    pub fn set_current_desktop(&self, i: u32) -> EwmhResult<()> {
        self.send_message(_NET_CURRENT_DESKTOP, codec::words(&[i, x11rb::CURRENT_TIME]), None, None)
    }

    /// Activate the given window (`_NET_ACTIVE_WINDOW`)
    pub fn set_active_window(&self, win: Window) -> EwmhResult<()> {
        let data = codec::words(&[SOURCE_APPLICATION, x11rb::CURRENT_TIME, win.id]);
        self.send_message(_NET_ACTIVE_WINDOW, data, Some(win), None)
    }

    /// Enter or leave the showing the desktop mode (`_NET_SHOWING_DESKTOP`)
    pub fn set_showing_desktop(&self, show: bool) -> EwmhResult<()> {
        self.send_message(_NET_SHOWING_DESKTOP, codec::words(&[show as u32]), None, None)
    }

    /// Close the given window (`_NET_CLOSE_WINDOW`)
    pub fn set_close_window(&self, win: Window) -> EwmhResult<()> {
        let data = codec::words(&[codec::timestamp(), SOURCE_APPLICATION]);
        self.send_message(_NET_CLOSE_WINDOW, data, Some(win), None)
    }

    /// Move and or resize the given window (`_NET_MOVERESIZE_WINDOW`)
    ///
    /// ### Arguments
    /// * `win` - window to manipulate
    /// * `mr` - gravity and the values to change, values left out are not touched
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// ewmh.set_moveresize_window(win, MoveResize::new(0).x(0).y(0).width(500).height(500)).unwrap();
    /// ```
    pub fn set_moveresize_window(&self, win: Window, mr: MoveResize) -> EwmhResult<()> {
        self.send_message(_NET_MOVERESIZE_WINDOW, MessageData::Words(mr.words()), Some(win), None)
    }

    /// Set the title of the given window (`_NET_WM_NAME`)
    pub fn set_wm_name(&self, win: Window, name: &str) -> EwmhResult<()> {
        self.send_message(_NET_WM_NAME, codec::text(name), Some(win), None)
    }

    /// Set the visible title of the given window (`_NET_WM_VISIBLE_NAME`)
    pub fn set_wm_visible_name(&self, win: Window, name: &str) -> EwmhResult<()> {
        self.send_message(_NET_WM_VISIBLE_NAME, codec::text(name), Some(win), None)
    }

    /// Move the given window to the given desktop (`_NET_WM_DESKTOP`)
    pub fn set_wm_desktop(&self, win: Window, i: u32) -> EwmhResult<()> {
        self.send_message(_NET_WM_DESKTOP, codec::words(&[i, SOURCE_APPLICATION]), Some(win), None)
    }

    /// Add, remove or toggle one or two states of the given window (`_NET_WM_STATE`)
    ///
    /// ### Arguments
    /// * `win` - window to manipulate
    /// * `action` - one of `WM_STATE_REMOVE`, `WM_STATE_ADD` or `WM_STATE_TOGGLE`
    /// * `state` - state atom code or name, see [`NET_WM_STATES`]
    /// * `state2` - second state atom code or name, 0 for none
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// ewmh.set_wm_state(win, WM_STATE_ADD, "_NET_WM_STATE_MAXIMIZED_HORZ", "_NET_WM_STATE_MAXIMIZED_VERT").unwrap();
    /// ```
    pub fn set_wm_state(
        &self, win: Window, action: u32, state: impl Into<StateRef>, state2: impl Into<StateRef>,
    ) -> EwmhResult<()> {
        let state = state.into().resolve(&self.conn)?;
        let state2 = state2.into().resolve(&self.conn)?;
        let data = codec::words(&[action, state, state2, SOURCE_APPLICATION]);
        self.send_message(_NET_WM_STATE, data, Some(win), None)
    }

    // Getters
    //----------------------------------------------------------------------------------------------

    /// Get the windows managed by the window manager (`_NET_CLIENT_LIST`)
    pub fn client_list(&self) -> EwmhResult<Vec<Option<Window>>> {
        Ok(codec::decode_windows(&self.conn, self.get_raw(_NET_CLIENT_LIST, None)?))
    }

    /// Get the managed windows in bottom to top stacking order (`_NET_CLIENT_LIST_STACKING`)
    pub fn client_list_stacking(&self) -> EwmhResult<Vec<Option<Window>>> {
        Ok(codec::decode_windows(&self.conn, self.get_raw(_NET_CLIENT_LIST_STACKING, None)?))
    }

    /// Get the number of desktops (`_NET_NUMBER_OF_DESKTOPS`)
    pub fn number_of_desktops(&self) -> EwmhResult<Option<u32>> {
        Ok(codec::decode_cardinal(self.get_raw(_NET_NUMBER_OF_DESKTOPS, None)?))
    }

    /// Get the desktop geometry as width and height (`_NET_DESKTOP_GEOMETRY`)
    pub fn desktop_geometry(&self) -> EwmhResult<Vec<u32>> {
        Ok(codec::decode_cardinals(self.get_raw(_NET_DESKTOP_GEOMETRY, None)?))
    }

    /// Get the top left corner of each desktop's viewport as x, y pairs (`_NET_DESKTOP_VIEWPORT`)
    pub fn desktop_viewport(&self) -> EwmhResult<Vec<u32>> {
        Ok(codec::decode_cardinals(self.get_raw(_NET_DESKTOP_VIEWPORT, None)?))
    }

    /// Get the current desktop number (`_NET_CURRENT_DESKTOP`)
    pub fn current_desktop(&self) -> EwmhResult<Option<u32>> {
        Ok(codec::decode_cardinal(self.get_raw(_NET_CURRENT_DESKTOP, None)?))
    }

    /// Get the active window, `None` when no window is active (`_NET_ACTIVE_WINDOW`)
    pub fn active_window(&self) -> EwmhResult<Option<Window>> {
        Ok(codec::decode_window(&self.conn, self.get_raw(_NET_ACTIVE_WINDOW, None)?))
    }

    /// Get the work area of each desktop as x, y, width, height quadruples (`_NET_WORKAREA`)
    pub fn workarea(&self) -> EwmhResult<Vec<u32>> {
        // Defined as: _NET_WORKAREA, x, y, width, height CARDINAL[][4]/32
        Ok(codec::decode_cardinals(self.get_raw(_NET_WORKAREA, None)?))
    }

    /// Get the showing the desktop mode, 1 when active (`_NET_SHOWING_DESKTOP`)
    pub fn showing_desktop(&self) -> EwmhResult<Option<u32>> {
        Ok(codec::decode_cardinal(self.get_raw(_NET_SHOWING_DESKTOP, None)?))
    }

    /// Get the title of the given window (`_NET_WM_NAME`)
    pub fn wm_name(&self, win: Window) -> EwmhResult<Option<String>> {
        Ok(codec::decode_text(self.get_raw(_NET_WM_NAME, Some(win))?))
    }

    /// Get the title the window manager displays for the given window (`_NET_WM_VISIBLE_NAME`)
    pub fn wm_visible_name(&self, win: Window) -> EwmhResult<Option<String>> {
        Ok(codec::decode_text(self.get_raw(_NET_WM_VISIBLE_NAME, Some(win))?))
    }

    /// Get the desktop of the given window (`_NET_WM_DESKTOP`)
    pub fn wm_desktop(&self, win: Window) -> EwmhResult<Option<u32>> {
        Ok(codec::decode_cardinal(self.get_raw(_NET_WM_DESKTOP, Some(win))?))
    }

    /// Get the window type atoms of the given window (`_NET_WM_WINDOW_TYPE`)
    pub fn wm_window_type(&self, win: Window) -> EwmhResult<Vec<u32>> {
        Ok(codec::decode_cardinals(self.get_raw(_NET_WM_WINDOW_TYPE, Some(win))?))
    }

    /// Get the window type names of the given window, see [`NET_WM_WINDOW_TYPES`]
    pub fn wm_window_type_names(&self, win: Window) -> EwmhResult<Vec<String>> {
        Ok(codec::decode_names(&self.conn, &self.wm_window_type(win)?))
    }

    /// Get the state atoms of the given window (`_NET_WM_STATE`)
    pub fn wm_state(&self, win: Window) -> EwmhResult<Vec<u32>> {
        Ok(codec::decode_cardinals(self.get_raw(_NET_WM_STATE, Some(win))?))
    }

    /// Get the state names of the given window, see [`NET_WM_STATES`]
    pub fn wm_state_names(&self, win: Window) -> EwmhResult<Vec<String>> {
        Ok(codec::decode_names(&self.conn, &self.wm_state(win)?))
    }

    /// Get the allowed action atoms of the given window (`_NET_WM_ALLOWED_ACTIONS`)
    pub fn wm_allowed_actions(&self, win: Window) -> EwmhResult<Vec<u32>> {
        Ok(codec::decode_cardinals(self.get_raw(_NET_WM_ALLOWED_ACTIONS, Some(win))?))
    }

    /// Get the allowed action names of the given window, see [`NET_WM_ACTIONS`]
    pub fn wm_allowed_actions_names(&self, win: Window) -> EwmhResult<Vec<String>> {
        Ok(codec::decode_names(&self.conn, &self.wm_allowed_actions(win)?))
    }

    /// Get the process id owning the given window (`_NET_WM_PID`)
    pub fn wm_pid(&self, win: Window) -> EwmhResult<Option<u32>> {
        Ok(codec::decode_cardinal(self.get_raw(_NET_WM_PID, Some(win))?))
    }

    // Generic access
    //----------------------------------------------------------------------------------------------

    /// Get the names of all readable properties
    pub fn readable_properties(&self) -> Vec<&'static str> {
        self.readable.keys().copied().collect()
    }

    /// Get the names of all writable properties
    pub fn writable_properties(&self) -> Vec<&'static str> {
        self.writable.keys().copied().collect()
    }

    /// Get the value of the property by name. The arguments are those of the typed getter, e.g.
    /// for `_NET_WM_STATE` see [`Ewmh::wm_state`]. Getters returning atoms take an optional flag as
    /// second argument to get names instead of codes.
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// let states = ewmh.get_property("_NET_WM_STATE", &[win.into(), true.into()]).unwrap();
    /// ```
    pub fn get_property(&self, name: &str, args: &[Arg]) -> EwmhResult<PropertyValue> {
        let getter = *self.readable.get(name).ok_or_else(|| EwmhError::UnknownReadableProperty(name.to_owned()))?;
        debug!("get_property: name: {}, getter: {:?}", name, getter);
        let args = Args::new(name, args);
        let value = match getter {
            Getter::ClientList => {
                args.done(0)?;
                PropertyValue::Windows(self.client_list()?)
            },
            Getter::ClientListStacking => {
                args.done(0)?;
                PropertyValue::Windows(self.client_list_stacking()?)
            },
            Getter::NumberOfDesktops => {
                args.done(0)?;
                PropertyValue::Cardinal(self.number_of_desktops()?)
            },
            Getter::DesktopGeometry => {
                args.done(0)?;
                PropertyValue::Cardinals(self.desktop_geometry()?)
            },
            Getter::DesktopViewport => {
                args.done(0)?;
                PropertyValue::Cardinals(self.desktop_viewport()?)
            },
            Getter::CurrentDesktop => {
                args.done(0)?;
                PropertyValue::Cardinal(self.current_desktop()?)
            },
            Getter::ActiveWindow => {
                args.done(0)?;
                PropertyValue::Window(self.active_window()?)
            },
            Getter::Workarea => {
                args.done(0)?;
                PropertyValue::Cardinals(self.workarea()?)
            },
            Getter::ShowingDesktop => {
                args.done(0)?;
                PropertyValue::Cardinal(self.showing_desktop()?)
            },
            Getter::WmName => {
                args.done(1)?;
                PropertyValue::Text(self.wm_name(args.window(0)?)?)
            },
            Getter::WmVisibleName => {
                args.done(1)?;
                PropertyValue::Text(self.wm_visible_name(args.window(0)?)?)
            },
            Getter::WmDesktop => {
                args.done(1)?;
                PropertyValue::Cardinal(self.wm_desktop(args.window(0)?)?)
            },
            Getter::WmPid => {
                args.done(1)?;
                PropertyValue::Cardinal(self.wm_pid(args.window(0)?)?)
            },
            Getter::WmWindowType => {
                self.symbolic(&args, Self::wm_window_type, Self::wm_window_type_names)?
            },
            Getter::WmState => self.symbolic(&args, Self::wm_state, Self::wm_state_names)?,
            Getter::WmAllowedActions => {
                self.symbolic(&args, Self::wm_allowed_actions, Self::wm_allowed_actions_names)?
            },
        };
        Ok(value)
    }

    /// Set the value of the property by name by sending a message to the root window. The
    /// arguments are those of the typed setter, e.g. for `_NET_WM_STATE` see [`Ewmh::set_wm_state`].
    /// Trailing optional arguments may be left out or given as [`Arg::Omitted`].
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// ewmh.set_property("_NET_MOVERESIZE_WINDOW", &[win.into(), 0.into(), Some(10).into(), None.into(), None.into(), Some(20).into()]).unwrap();
    /// ```
    pub fn set_property(&self, name: &str, args: &[Arg]) -> EwmhResult<()> {
        let setter = *self.writable.get(name).ok_or_else(|| EwmhError::UnknownWritableProperty(name.to_owned()))?;
        debug!("set_property: name: {}, setter: {:?}", name, setter);
        let args = Args::new(name, args);
        match setter {
            Setter::NumberOfDesktops => {
                args.done(1)?;
                self.set_number_of_desktops(args.cardinal(0)?)
            },
            Setter::DesktopGeometry => {
                args.done(2)?;
                self.set_desktop_geometry(args.cardinal(0)?, args.cardinal(1)?)
            },
            Setter::DesktopViewport => {
                args.done(2)?;
                self.set_desktop_viewport(args.cardinal(0)?, args.cardinal(1)?)
            },
            Setter::CurrentDesktop => {
                args.done(1)?;
                self.set_current_desktop(args.cardinal(0)?)
            },
            Setter::ActiveWindow => {
                args.done(1)?;
                self.set_active_window(args.window(0)?)
            },
            Setter::ShowingDesktop => {
                args.done(1)?;
                self.set_showing_desktop(args.flag(0)?)
            },
            Setter::CloseWindow => {
                args.done(1)?;
                self.set_close_window(args.window(0)?)
            },
            Setter::MoveResizeWindow => {
                args.done(6)?;
                let mr = MoveResize::from_options(
                    args.optional_cardinal(1)?.unwrap_or(0),
                    args.optional_cardinal(2)?,
                    args.optional_cardinal(3)?,
                    args.optional_cardinal(4)?,
                    args.optional_cardinal(5)?,
                );
                self.set_moveresize_window(args.window(0)?, mr)
            },
            Setter::WmName => {
                args.done(2)?;
                self.set_wm_name(args.window(0)?, args.text(1)?)
            },
            Setter::WmVisibleName => {
                args.done(2)?;
                self.set_wm_visible_name(args.window(0)?, args.text(1)?)
            },
            Setter::WmDesktop => {
                args.done(2)?;
                self.set_wm_desktop(args.window(0)?, args.cardinal(1)?)
            },
            Setter::WmState => {
                args.done(4)?;
                let state2 = args.optional_state(3)?.unwrap_or(StateRef::Code(0));
                self.set_wm_state(args.window(0)?, args.cardinal(1)?, args.state(2)?, state2)
            },
        }
    }

    /// Send the client message for the given property to the root window. `win` is the window the
    /// message is about and defaults to the root window, `mask` defaults to substructure redirect
    /// and notify.
    ///
    /// ### Examples
    /// ```ignore
    /// use ewmh::prelude::*;
    /// let flags = MOVE_RESIZE_WINDOW_WIDTH | MOVE_RESIZE_WINDOW_HEIGHT;
    /// ewmh.send_message(_NET_MOVERESIZE_WINDOW, MessageData::Words([flags, 0, 0, 500, 500]),
    ///     Some(win), None).unwrap();
    /// ```
    pub fn send_message(
        &self, name: &str, data: MessageData, win: Option<Window>, mask: Option<EventMask>,
    ) -> EwmhResult<()> {
        let msg = ClientMessage {
            destination: self.root,
            window: win.unwrap_or(self.root),
            message_type: self.conn.atom(name, false)?,
            data,
        };
        let mask = mask.unwrap_or_else(codec::default_event_mask);
        self.conn.send_client_message(&msg, mask)?;
        debug!("send_message: name: {}, root: {}, win: {}, data: {:?}", name, msg.destination, msg.window, msg.data);
        Ok(())
    }

    fn get_raw(&self, name: &str, win: Option<Window>) -> EwmhResult<Option<RawProperty>> {
        let win = win.unwrap_or(self.root);
        let reply = self.conn.get_property(win, self.conn.atom(name, false)?)?;
        trace!("get_raw: name: {}, win: {}, reply: {:?}", name, win, reply);
        Ok(reply)
    }

    fn symbolic(
        &self, args: &Args, codes: fn(&Self, Window) -> EwmhResult<Vec<u32>>,
        names: fn(&Self, Window) -> EwmhResult<Vec<String>>,
    ) -> EwmhResult<PropertyValue> {
        args.done(2)?;
        let win = args.window(0)?;
        match args.optional_flag(1)?.unwrap_or(false) {
            true => Ok(PropertyValue::Names(names(self, win)?)),
            false => Ok(PropertyValue::Cardinals(codes(self, win)?)),
        }
    }
}
