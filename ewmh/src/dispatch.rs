//! Name to accessor tables backing the generic property accessors
use crate::{atoms::*, codec::StateRef, model::Arg, window::Window, EwmhError, EwmhResult};
use std::collections::HashMap;

/// Getter identifies one typed getter of [`crate::Ewmh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Getter {
    ClientList,
    ClientListStacking,
    NumberOfDesktops,
    DesktopGeometry,
    DesktopViewport,
    CurrentDesktop,
    ActiveWindow,
    Workarea,
    ShowingDesktop,
    WmName,
    WmVisibleName,
    WmDesktop,
    WmWindowType,
    WmState,
    WmAllowedActions,
    WmPid,
}

/// Setter identifies one typed setter of [`crate::Ewmh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setter {
    NumberOfDesktops,
    DesktopGeometry,
    DesktopViewport,
    CurrentDesktop,
    ActiveWindow,
    ShowingDesktop,
    CloseWindow,
    MoveResizeWindow,
    WmName,
    WmVisibleName,
    WmDesktop,
    WmState,
}

pub(crate) fn readable_table() -> HashMap<&'static str, Getter> {
    HashMap::from([
        (_NET_CLIENT_LIST, Getter::ClientList),
        (_NET_CLIENT_LIST_STACKING, Getter::ClientListStacking),
        (_NET_NUMBER_OF_DESKTOPS, Getter::NumberOfDesktops),
        (_NET_DESKTOP_GEOMETRY, Getter::DesktopGeometry),
        (_NET_DESKTOP_VIEWPORT, Getter::DesktopViewport),
        (_NET_CURRENT_DESKTOP, Getter::CurrentDesktop),
        (_NET_ACTIVE_WINDOW, Getter::ActiveWindow),
        (_NET_WORKAREA, Getter::Workarea),
        (_NET_SHOWING_DESKTOP, Getter::ShowingDesktop),
        (_NET_WM_NAME, Getter::WmName),
        (_NET_WM_VISIBLE_NAME, Getter::WmVisibleName),
        (_NET_WM_DESKTOP, Getter::WmDesktop),
        (_NET_WM_WINDOW_TYPE, Getter::WmWindowType),
        (_NET_WM_STATE, Getter::WmState),
        (_NET_WM_ALLOWED_ACTIONS, Getter::WmAllowedActions),
        (_NET_WM_PID, Getter::WmPid),
    ])
}

pub(crate) fn writable_table() -> HashMap<&'static str, Setter> {
    HashMap::from([
        (_NET_NUMBER_OF_DESKTOPS, Setter::NumberOfDesktops),
        (_NET_DESKTOP_GEOMETRY, Setter::DesktopGeometry),
        (_NET_DESKTOP_VIEWPORT, Setter::DesktopViewport),
        (_NET_CURRENT_DESKTOP, Setter::CurrentDesktop),
        (_NET_ACTIVE_WINDOW, Setter::ActiveWindow),
        (_NET_SHOWING_DESKTOP, Setter::ShowingDesktop),
        (_NET_CLOSE_WINDOW, Setter::CloseWindow),
        (_NET_MOVERESIZE_WINDOW, Setter::MoveResizeWindow),
        (_NET_WM_NAME, Setter::WmName),
        (_NET_WM_VISIBLE_NAME, Setter::WmVisibleName),
        (_NET_WM_DESKTOP, Setter::WmDesktop),
        (_NET_WM_STATE, Setter::WmState),
    ])
}

/// Positional arguments of a generic accessor call, checked against what the typed accessor
/// expects before any request goes out.
pub(crate) struct Args<'a> {
    property: &'a str,
    items: &'a [Arg],
}

impl<'a> Args<'a> {
    pub(crate) fn new(property: &'a str, items: &'a [Arg]) -> Self {
        Self { property, items }
    }

    fn invalid(&self, position: usize, expected: &'static str) -> EwmhError {
        EwmhError::InvalidArgument { property: self.property.to_owned(), position, expected }
    }

    fn get(&self, position: usize) -> Option<&'a Arg> {
        match self.items.get(position) {
            Some(Arg::Omitted) | None => None,
            x => x,
        }
    }

    pub(crate) fn window(&self, position: usize) -> EwmhResult<Window> {
        match self.get(position) {
            Some(Arg::Window(win)) => Ok(*win),
            _ => Err(self.invalid(position, "a window").into()),
        }
    }

    pub(crate) fn cardinal(&self, position: usize) -> EwmhResult<u32> {
        self.optional_cardinal(position)?.ok_or_else(|| self.invalid(position, "a cardinal").into())
    }

    pub(crate) fn optional_cardinal(&self, position: usize) -> EwmhResult<Option<u32>> {
        match self.get(position) {
            Some(Arg::Cardinal(x)) => Ok(Some(*x)),
            None => Ok(None),
            _ => Err(self.invalid(position, "a cardinal").into()),
        }
    }

    pub(crate) fn text(&self, position: usize) -> EwmhResult<&'a str> {
        match self.get(position) {
            Some(Arg::Text(x)) => Ok(x.as_str()),
            _ => Err(self.invalid(position, "text").into()),
        }
    }

    /// Flags also accept cardinals, any non zero value being true
    pub(crate) fn flag(&self, position: usize) -> EwmhResult<bool> {
        self.optional_flag(position)?.ok_or_else(|| self.invalid(position, "a flag").into())
    }

    pub(crate) fn optional_flag(&self, position: usize) -> EwmhResult<Option<bool>> {
        match self.get(position) {
            Some(Arg::Flag(x)) => Ok(Some(*x)),
            Some(Arg::Cardinal(x)) => Ok(Some(*x != 0)),
            None => Ok(None),
            _ => Err(self.invalid(position, "a flag").into()),
        }
    }

    /// States are either an atom code or an atom name
    pub(crate) fn optional_state(&self, position: usize) -> EwmhResult<Option<StateRef>> {
        match self.get(position) {
            Some(Arg::Cardinal(x)) => Ok(Some(StateRef::Code(*x))),
            Some(Arg::Text(x)) => Ok(Some(StateRef::Name(x.clone()))),
            None => Ok(None),
            _ => Err(self.invalid(position, "a state code or name").into()),
        }
    }

    pub(crate) fn state(&self, position: usize) -> EwmhResult<StateRef> {
        self.optional_state(position)?.ok_or_else(|| self.invalid(position, "a state code or name").into())
    }

    /// Reject anything given past the expected number of arguments
    pub(crate) fn done(&self, count: usize) -> EwmhResult<()> {
        match self.items.len() > count {
            true => Err(self.invalid(count, "absent").into()),
            false => Ok(()),
        }
    }
}
