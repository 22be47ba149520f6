use std::fmt;

use crate::{codec::StateRef, window::Window};

/// Arg is a single positional argument for the generic property accessors
/// [`crate::Ewmh::get_property`] and [`crate::Ewmh::set_property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Cardinal(u32),
    Window(Window),
    Text(String),
    Flag(bool),
    Omitted,
}

impl From<u32> for Arg {
    fn from(val: u32) -> Self {
        Arg::Cardinal(val)
    }
}

impl From<Option<u32>> for Arg {
    fn from(val: Option<u32>) -> Self {
        val.map(Arg::Cardinal).unwrap_or(Arg::Omitted)
    }
}

impl From<Window> for Arg {
    fn from(val: Window) -> Self {
        Arg::Window(val)
    }
}

impl From<&str> for Arg {
    fn from(val: &str) -> Self {
        Arg::Text(val.to_owned())
    }
}

impl From<String> for Arg {
    fn from(val: String) -> Self {
        Arg::Text(val)
    }
}

impl From<bool> for Arg {
    fn from(val: bool) -> Self {
        Arg::Flag(val)
    }
}

impl From<StateRef> for Arg {
    fn from(val: StateRef) -> Self {
        match val {
            StateRef::Code(code) => Arg::Cardinal(code),
            StateRef::Name(name) => Arg::Text(name),
        }
    }
}

/// PropertyValue is the result of the generic [`crate::Ewmh::get_property`] accessor, one variant
/// per shape of value the typed getters return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Cardinal(Option<u32>),
    Cardinals(Vec<u32>),
    Window(Option<Window>),
    Windows(Vec<Option<Window>>),
    Text(Option<String>),
    Names(Vec<String>),
}

// Implement format! support
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyValue::Cardinal(Some(x)) => write!(f, "{}", x),
            PropertyValue::Window(Some(x)) => write!(f, "{}", x),
            PropertyValue::Text(Some(x)) => write!(f, "{}", x),
            PropertyValue::Cardinal(None) | PropertyValue::Window(None) | PropertyValue::Text(None) => {
                write!(f, "-")
            },
            PropertyValue::Cardinals(x) => write!(f, "{:?}", x),
            PropertyValue::Windows(x) => {
                let ids: Vec<String> = x.iter().map(|x| x.map(|x| x.to_string()).unwrap_or_default()).collect();
                write!(f, "[{}]", ids.join(", "))
            },
            PropertyValue::Names(x) => write!(f, "{}", x.join(", ")),
        }
    }
}
