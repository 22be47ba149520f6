use std::error::Error as StdError;
use std::fmt;

/// `EwmhResult<T>` provides a simplified result type with a common error type
pub type EwmhResult<T> = std::result::Result<T, ErrorWrapper>;

/// EwmhError defines all the internal errors that `ewmh` might return
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EwmhError {
    AtomNameNotFound(u32),
    AtomNotFound(String),
    InvalidArgument { property: String, position: usize, expected: &'static str },
    UnknownReadableProperty(String),
    UnknownWritableProperty(String),
}
impl std::error::Error for EwmhError {}
impl fmt::Display for EwmhError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EwmhError::AtomNameNotFound(ref atom) => write!(f, "no atom name is registered for code {}", atom),
            EwmhError::AtomNotFound(ref name) => write!(f, "atom {} could not be resolved", name),
            EwmhError::InvalidArgument { ref property, position, expected } => {
                write!(f, "argument {} of {} must be {}", position, property, expected)
            },
            EwmhError::UnknownReadableProperty(ref name) => write!(f, "Unknown readable property: {}", name),
            EwmhError::UnknownWritableProperty(ref name) => write!(f, "Unknown writable property: {}", name),
        }
    }
}

/// ErrorWrapper provides wrapper around all the underlying library dependencys that `ewmh` uses
/// such that we can easily surface all errors from `ewmh` in a single easy way.
#[derive(Debug)]
pub enum ErrorWrapper {
    Ewmh(EwmhError),

    // std::str::Utf8Error
    Utf8(std::str::Utf8Error),

    // x11rb errors
    Connection(x11rb::errors::ConnectionError),
    Reply(x11rb::errors::ReplyError),
}
impl ErrorWrapper {
    /// Implemented directly on the `Error` type to reduce casting required
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.as_ref().is::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.as_ref().downcast_ref::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_mut<T: StdError + 'static>(&mut self) -> Option<&mut T> {
        self.as_mut().downcast_mut::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    /// which allows for using as_ref to get the correct pass through.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_ref().source()
    }
}
impl StdError for ErrorWrapper {}

impl fmt::Display for ErrorWrapper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorWrapper::Ewmh(ref err) => write!(f, "{}", err),
            ErrorWrapper::Utf8(ref err) => write!(f, "{}", err),
            ErrorWrapper::Connection(ref err) => write!(f, "{}", err),
            ErrorWrapper::Reply(ref err) => write!(f, "{}", err),
        }
    }
}

impl AsRef<dyn StdError> for ErrorWrapper {
    fn as_ref(&self) -> &(dyn StdError + 'static) {
        match *self {
            ErrorWrapper::Ewmh(ref err) => err,
            ErrorWrapper::Utf8(ref err) => err,
            ErrorWrapper::Connection(ref err) => err,
            ErrorWrapper::Reply(ref err) => err,
        }
    }
}

impl AsMut<dyn StdError> for ErrorWrapper {
    fn as_mut(&mut self) -> &mut (dyn StdError + 'static) {
        match *self {
            ErrorWrapper::Ewmh(ref mut err) => err,
            ErrorWrapper::Utf8(ref mut err) => err,
            ErrorWrapper::Connection(ref mut err) => err,
            ErrorWrapper::Reply(ref mut err) => err,
        }
    }
}

impl From<EwmhError> for ErrorWrapper {
    fn from(err: EwmhError) -> ErrorWrapper {
        ErrorWrapper::Ewmh(err)
    }
}

impl From<std::str::Utf8Error> for ErrorWrapper {
    fn from(err: std::str::Utf8Error) -> ErrorWrapper {
        ErrorWrapper::Utf8(err)
    }
}

// x11rb errors
//--------------------------------------------------------------------------------------------------
impl From<x11rb::errors::ConnectionError> for ErrorWrapper {
    fn from(err: x11rb::errors::ConnectionError) -> ErrorWrapper {
        ErrorWrapper::Connection(err)
    }
}

impl From<x11rb::errors::ReplyError> for ErrorWrapper {
    fn from(err: x11rb::errors::ReplyError) -> ErrorWrapper {
        ErrorWrapper::Reply(err)
    }
}
