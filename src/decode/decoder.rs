//! The decoding context.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use bytes::Bytes;
use crate::key::OsType;
use crate::params::Params;
use super::error::{ContentError, DecodeError};
use super::source::{Pos, Source};


//------------ Decoder -------------------------------------------------------

/// The context of a descriptor decode in progress.
///
/// A decoder wraps the source being read together with the [`Params`] the
/// decode was started with. It threads the two resource guards through the
/// recursive structure of the data: a depth counter that every recursive
/// variant passes through via [`descend`][Self::descend] and a cumulative
/// item tally fed by [`charge_item`][Self::charge_item].
///
/// The `take_from` constructors of the descriptor types all operate on a
/// decoder. It cannot be created directly; a decode always starts through
/// [`Descriptor::decode`][crate::Descriptor::decode] or
/// [`Params::decode`].
pub struct Decoder<'a, S> {
    /// The source data gets read from.
    source: &'a mut S,

    /// The parameters of this decode.
    params: &'a Params,

    /// The current nesting depth.
    depth: usize,

    /// The number of items decoded so far.
    items: usize,
}

impl<'a, S: Source> Decoder<'a, S> {
    /// Creates a new decoder atop a source.
    pub(crate) fn new(params: &'a Params, source: &'a mut S) -> Self {
        Self { source, params, depth: 0, items: 0 }
    }

    /// Returns the parameters of this decode.
    pub fn params(&self) -> &Params {
        self.params
    }

    /// Returns the current position in the source.
    pub fn pos(&self) -> Pos {
        self.source.pos()
    }

    /// Returns a content error at the current position.
    pub fn content_err(&self, err: ContentError) -> DecodeError<S::Error> {
        DecodeError::content(err, self.pos())
    }
}

/// # Reading Data
///
/// These methods hand through the typed reads of the underlying
/// [`Source`].
impl<'a, S: Source> Decoder<'a, S> {
    /// Takes a four-byte type code.
    pub fn take_type(&mut self) -> Result<OsType, DecodeError<S::Error>> {
        OsType::take_from(self.source)
    }

    /// Takes a boolean octet.
    pub fn take_bool(&mut self) -> Result<bool, DecodeError<S::Error>> {
        self.source.take_bool()
    }

    /// Takes a big-endian unsigned 32 bit integer.
    pub fn take_u32(&mut self) -> Result<u32, DecodeError<S::Error>> {
        self.source.take_u32()
    }

    /// Takes a big-endian signed 32 bit integer.
    pub fn take_i32(&mut self) -> Result<i32, DecodeError<S::Error>> {
        self.source.take_i32()
    }

    /// Takes a big-endian signed 64 bit integer.
    pub fn take_i64(&mut self) -> Result<i64, DecodeError<S::Error>> {
        self.source.take_i64()
    }

    /// Takes a big-endian 64 bit float.
    pub fn take_f64(&mut self) -> Result<f64, DecodeError<S::Error>> {
        self.source.take_f64()
    }

    /// Takes a little-endian unsigned 32 bit integer.
    pub fn take_u32_le(&mut self) -> Result<u32, DecodeError<S::Error>> {
        self.source.take_u32_le()
    }

    /// Takes `len` octets of raw data.
    pub fn take_bytes(
        &mut self, len: u32
    ) -> Result<Bytes, DecodeError<S::Error>> {
        self.source.take_bytes(len)
    }

    /// Takes a UTF-16 string of the given number of code units.
    pub fn take_utf16(
        &mut self, char_count: u32
    ) -> Result<String, DecodeError<S::Error>> {
        self.source.take_utf16(char_count)
    }

    /// Takes a length-prefixed UTF-16 string.
    pub fn take_unicode_string(
        &mut self
    ) -> Result<String, DecodeError<S::Error>> {
        self.source.take_unicode_string()
    }
}

/// # Resource Guards
///
impl<'a, S: Source> Decoder<'a, S> {
    /// Runs `op` one nesting level deeper.
    ///
    /// The recursive variants of the format have no intrinsic depth limit,
    /// so every recursion into a nested descriptor, list, or object array
    /// has to pass through here. Fails with [`ContentError::DepthLimit`]
    /// once the configured maximum depth is reached.
    pub fn descend<T, F>(
        &mut self, op: F
    ) -> Result<T, DecodeError<S::Error>>
    where F: FnOnce(&mut Self) -> Result<T, DecodeError<S::Error>> {
        if self.depth >= self.params.max_depth() {
            return Err(self.content_err(ContentError::DepthLimit))
        }
        self.depth += 1;
        let res = op(self);
        self.depth -= 1;
        res
    }

    /// Accounts for one more decoded item.
    ///
    /// Every descriptor item, list element, and object array node passes
    /// through here before it is decoded. Fails with
    /// [`ContentError::ItemLimit`] once the configured maximum has been
    /// reached.
    pub fn charge_item(&mut self) -> Result<(), DecodeError<S::Error>> {
        if self.items >= self.params.max_items() {
            return Err(self.content_err(ContentError::ItemLimit))
        }
        self.items += 1;
        Ok(())
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::SliceSource;

    #[test]
    fn descend_restores_depth() {
        let params = Params::default().with_max_depth(1);
        let mut source = SliceSource::new(b"");
        let mut dec = Decoder::new(&params, &mut source);

        dec.descend(|_| Ok(())).unwrap();
        dec.descend(|_| Ok(())).unwrap();
        let err = dec.descend(|dec| {
            dec.descend(|_| Ok(()))
        }).unwrap_err();
        assert_eq!(err.content_error(), Some(ContentError::DepthLimit));
    }

    #[test]
    fn charge_item() {
        let params = Params::default().with_max_items(2);
        let mut source = SliceSource::new(b"");
        let mut dec = Decoder::new(&params, &mut source);

        dec.charge_item().unwrap();
        dec.charge_item().unwrap();
        let err = dec.charge_item().unwrap_err();
        assert_eq!(err.content_error(), Some(ContentError::ItemLimit));
    }
}
