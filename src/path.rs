//! File paths.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::fmt;
use crate::decode::{Decoder, DecodeError, Source};
use crate::key::OsType;


//------------ FilePath ------------------------------------------------------

/// A file path with its platform signature.
///
/// File path items are the odd ones out of the format: while everything
/// else is big-endian, the two size fields between the signature and the
/// path text are little-endian. The item also starts with an overall
/// length that is redundant with those size fields. Neither it nor the
/// byte size are checked against the path actually read since the
/// redundancy carries no meaning of its own.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePath {
    /// The four-byte platform signature.
    signature: OsType,

    /// The path text.
    path: String,
}

impl FilePath {
    /// Creates a new file path from a signature and the path text.
    pub fn new(signature: OsType, path: impl Into<String>) -> Self {
        Self { signature, path: path.into() }
    }

    /// Returns the platform signature.
    pub fn signature(&self) -> OsType {
        self.signature
    }

    /// Returns the path text.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Takes a file path from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let _ = dec.take_u32()?;
        let signature = dec.take_type()?;
        let _ = dec.take_u32_le()?;
        let char_count = dec.take_u32_le()?;
        let path = dec.take_utf16(char_count)?;
        Ok(Self { signature, path })
    }
}


//--- Display

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path)
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use crate::decode::SliceSource;

    #[test]
    fn take_from() {
        let params = Params::default();
        let mut source = SliceSource::new(
            //  length      sig     byte size LE        char count LE
            b"\x00\x00\x00\x10txtU\x04\x00\x00\x00\x02\x00\x00\x00\
              \x00/\x00a"
        );
        let mut dec = Decoder::new(&params, &mut source);
        let path = FilePath::take_from(&mut dec).unwrap();
        assert_eq!(path.signature(), OsType::new(*b"txtU"));
        assert_eq!(path.path(), "/a");
    }

    #[test]
    fn size_fields_are_not_validated() {
        // Both the overall length and the byte size disagree with the
        // actual path. The decode must not care.
        let params = Params::default();
        let mut source = SliceSource::new(
            b"\xff\xff\xff\xfftxtU\x99\x00\x00\x00\x02\x00\x00\x00\
              \x00/\x00a"
        );
        let mut dec = Decoder::new(&params, &mut source);
        assert_eq!(FilePath::take_from(&mut dec).unwrap().path(), "/a");
    }

    #[test]
    fn truncated_path() {
        let params = Params::default();
        let mut source = SliceSource::new(
            b"\x00\x00\x00\x10txtU\x04\x00\x00\x00\x08\x00\x00\x00\
              \x00/\x00a"
        );
        let mut dec = Decoder::new(&params, &mut source);
        assert!(FilePath::take_from(&mut dec).unwrap_err().is_truncated());
    }
}
