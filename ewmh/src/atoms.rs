//! Atom names used by the EWMH property catalog along with the reference vocabularies for window
//! types, allowed actions and states.
//!
//! [Application Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s05.html)
#![allow(non_upper_case_globals)]

// Root window properties
pub const _NET_CLIENT_LIST: &str = "_NET_CLIENT_LIST";
pub const _NET_CLIENT_LIST_STACKING: &str = "_NET_CLIENT_LIST_STACKING";
pub const _NET_NUMBER_OF_DESKTOPS: &str = "_NET_NUMBER_OF_DESKTOPS";
pub const _NET_DESKTOP_GEOMETRY: &str = "_NET_DESKTOP_GEOMETRY";
pub const _NET_DESKTOP_VIEWPORT: &str = "_NET_DESKTOP_VIEWPORT";
pub const _NET_CURRENT_DESKTOP: &str = "_NET_CURRENT_DESKTOP";
pub const _NET_ACTIVE_WINDOW: &str = "_NET_ACTIVE_WINDOW";
pub const _NET_WORKAREA: &str = "_NET_WORKAREA";
pub const _NET_SHOWING_DESKTOP: &str = "_NET_SHOWING_DESKTOP";

// Root window messages
pub const _NET_CLOSE_WINDOW: &str = "_NET_CLOSE_WINDOW";
pub const _NET_MOVERESIZE_WINDOW: &str = "_NET_MOVERESIZE_WINDOW";

// Application window properties
pub const _NET_WM_NAME: &str = "_NET_WM_NAME";
pub const _NET_WM_VISIBLE_NAME: &str = "_NET_WM_VISIBLE_NAME";
pub const _NET_WM_DESKTOP: &str = "_NET_WM_DESKTOP";
pub const _NET_WM_WINDOW_TYPE: &str = "_NET_WM_WINDOW_TYPE";
pub const _NET_WM_STATE: &str = "_NET_WM_STATE";
pub const _NET_WM_ALLOWED_ACTIONS: &str = "_NET_WM_ALLOWED_ACTIONS";
pub const _NET_WM_PID: &str = "_NET_WM_PID";

/// Placeholder returned for codes the server could not name
pub const UNKNOWN: &str = "UNKNOWN";

/// Source indication for client messages, 1 meaning a normal application
pub const SOURCE_APPLICATION: u32 = 1;

// `_NET_WM_STATE` message actions
pub const WM_STATE_REMOVE: u32 = 0;
pub const WM_STATE_ADD: u32 = 1;
pub const WM_STATE_TOGGLE: u32 = 2;

/// All known window types
pub const NET_WM_WINDOW_TYPES: [&str; 13] = [
    "_NET_WM_WINDOW_TYPE_DESKTOP",
    "_NET_WM_WINDOW_TYPE_DOCK",
    "_NET_WM_WINDOW_TYPE_TOOLBAR",
    "_NET_WM_WINDOW_TYPE_MENU",
    "_NET_WM_WINDOW_TYPE_UTILITY",
    "_NET_WM_WINDOW_TYPE_SPLASH",
    "_NET_WM_WINDOW_TYPE_DIALOG",
    "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU",
    "_NET_WM_WINDOW_TYPE_POPUP_MENU",
    "_NET_WM_WINDOW_TYPE_NOTIFICATION",
    "_NET_WM_WINDOW_TYPE_COMBO",
    "_NET_WM_WINDOW_TYPE_DND",
    "_NET_WM_WINDOW_TYPE_NORMAL",
];

/// All known window actions
pub const NET_WM_ACTIONS: [&str; 12] = [
    "_NET_WM_ACTION_MOVE",
    "_NET_WM_ACTION_RESIZE",
    "_NET_WM_ACTION_MINIMIZE",
    "_NET_WM_ACTION_SHADE",
    "_NET_WM_ACTION_STICK",
    "_NET_WM_ACTION_MAXIMIZE_HORZ",
    "_NET_WM_ACTION_MAXIMIZE_VERT",
    "_NET_WM_ACTION_FULLSCREEN",
    "_NET_WM_ACTION_CHANGE_DESKTOP",
    "_NET_WM_ACTION_CLOSE",
    "_NET_WM_ACTION_ABOVE",
    "_NET_WM_ACTION_BELOW",
];

/// All known window states
pub const NET_WM_STATES: [&str; 12] = [
    "_NET_WM_STATE_MODAL",
    "_NET_WM_STATE_STICKY",
    "_NET_WM_STATE_MAXIMIZED_VERT",
    "_NET_WM_STATE_MAXIMIZED_HORZ",
    "_NET_WM_STATE_SHADED",
    "_NET_WM_STATE_SKIP_TASKBAR",
    "_NET_WM_STATE_SKIP_PAGER",
    "_NET_WM_STATE_HIDDEN",
    "_NET_WM_STATE_FULLSCREEN",
    "_NET_WM_STATE_ABOVE",
    "_NET_WM_STATE_BELOW",
    "_NET_WM_STATE_DEMANDS_ATTENTION",
];
