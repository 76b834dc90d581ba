//! Error handling during decoding.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::{error, fmt};
use crate::key::OsType;
use super::source::Pos;


//------------ ContentError --------------------------------------------------

/// The reason decoding failed at the content level.
///
/// A value of this type describes why encoded data could not be turned into
/// a descriptor tree. It does not carry the position the failure happened
/// at. That position is added by [`DecodeError`] which is what the decoding
/// functions actually return.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentError {
    /// The data ended before the current structure was complete.
    Truncated,

    /// A type code did not match any of the known value types.
    UnknownType(OsType),

    /// A form code did not match any of the known reference forms.
    UnknownForm(OsType),

    /// Nested values exceeded the configured depth limit.
    DepthLimit,

    /// The decoded tree exceeded the configured item limit.
    ItemLimit,
}


//--- Display and Error

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ContentError::Truncated => {
                f.write_str("unexpected end of data")
            }
            ContentError::UnknownType(key) => {
                write!(f, "unknown value type '{}'", key)
            }
            ContentError::UnknownForm(key) => {
                write!(f, "unknown reference form '{}'", key)
            }
            ContentError::DepthLimit => {
                f.write_str("nesting depth limit exceeded")
            }
            ContentError::ItemLimit => {
                f.write_str("item limit exceeded")
            }
        }
    }
}

impl error::Error for ContentError { }


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// This type collects all the things that can go wrong during decoding. It
/// is generic over the error type of the underlying source so that sources
/// can hand through their own failures. Decoding a byte slice uses
/// [`Infallible`][std::convert::Infallible] here, in which case only
/// content errors can ever appear.
///
/// Content errors carry the position in the source they were discovered at
/// which can be used for diagnostics.
#[derive(Clone, Debug)]
pub struct DecodeError<S> {
    inner: ErrorKind<S>,
}

#[derive(Clone, Debug)]
enum ErrorKind<S> {
    Source(S),
    Content {
        error: ContentError,
        pos: Pos,
    }
}

impl<S> DecodeError<S> {
    /// Creates a decode error from a content error and a position.
    pub fn content(error: ContentError, pos: Pos) -> Self {
        DecodeError {
            inner: ErrorKind::Content { error, pos }
        }
    }

    /// Returns the content error if the error is a content error.
    pub fn content_error(&self) -> Option<ContentError> {
        match self.inner {
            ErrorKind::Source(_) => None,
            ErrorKind::Content { error, .. } => Some(error),
        }
    }

    /// Returns the position of the error if it is a content error.
    pub fn pos(&self) -> Option<Pos> {
        match self.inner {
            ErrorKind::Source(_) => None,
            ErrorKind::Content { pos, .. } => Some(pos),
        }
    }

    /// Returns whether the error is due to the data ending early.
    pub fn is_truncated(&self) -> bool {
        self.content_error() == Some(ContentError::Truncated)
    }
}


//--- From

impl<S> From<S> for DecodeError<S> {
    fn from(err: S) -> Self {
        DecodeError { inner: ErrorKind::Source(err) }
    }
}


//--- Display and Error

impl<S: fmt::Display> fmt::Display for DecodeError<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner {
            ErrorKind::Source(ref err) => err.fmt(f),
            ErrorKind::Content { ref error, pos } => {
                write!(f, "{} (at position {})", error, pos)
            }
        }
    }
}

impl<S: error::Error> error::Error for DecodeError<S> { }


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_access() {
        let err = DecodeError::<std::convert::Infallible>::content(
            ContentError::Truncated, Pos::from(12)
        );
        assert!(err.is_truncated());
        assert_eq!(err.content_error(), Some(ContentError::Truncated));
        assert_eq!(
            format!("{}", err), "unexpected end of data (at position 12)"
        );
    }

    #[test]
    fn unknown_type_display() {
        let err = ContentError::UnknownType(OsType::new(*b"nope"));
        assert_eq!(format!("{}", err), "unknown value type 'nope'");
    }
}
