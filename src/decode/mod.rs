//! Decoding machinery.
//!
//! This module provides the plumbing the descriptor types are decoded
//! with: the [`Source`] abstraction data is read from together with its
//! concrete implementations, the [`Decoder`] context that threads the
//! resource guards of [`Params`][crate::Params] through the recursive
//! structure, and the error types.

pub use self::decoder::Decoder;
pub use self::error::{ContentError, DecodeError};
pub use self::source::{
    Fragment, IntoSource, LimitedFragment, LimitedSource, Pos,
    ReaderFragment, ReaderSource, SliceFragment, SliceSource, Source,
};

mod decoder;
mod error;
mod source;
