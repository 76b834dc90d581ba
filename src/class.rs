//! Class information.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::fmt;
use crate::decode::{Decoder, DecodeError, Source};
use crate::ident::Ident;


//------------ ClassInfo -----------------------------------------------------

/// The class naming a descriptor or reference target.
///
/// Every descriptor starts with such a header giving the class a Unicode
/// name and an [identifier][Ident]. Class values also appear on their own
/// as items and inside references.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClassInfo {
    /// The name of the class.
    name: String,

    /// The identifier of the class.
    id: Ident,
}

impl ClassInfo {
    /// Creates new class information from a name and an identifier.
    pub fn new(name: impl Into<String>, id: impl Into<Ident>) -> Self {
        Self { name: name.into(), id: id.into() }
    }

    /// Returns the name of the class.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the class.
    pub fn id(&self) -> &Ident {
        &self.id
    }

    /// Takes class information from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let name = dec.take_unicode_string()?;
        let id = Ident::take_from(dec)?;
        Ok(Self { name, id })
    }
}


//--- Display

impl fmt::Display for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use crate::decode::{Decoder, SliceSource};

    #[test]
    fn take_from() {
        // Name "null", zero id length, numeric id 0.
        let params = Params::default();
        let mut source = SliceSource::new(
            b"\x00\x00\x00\x04\x00n\x00u\x00l\x00l\
              \x00\x00\x00\x00\x00\x00\x00\x00"
        );
        let mut dec = Decoder::new(&params, &mut source);
        let info = ClassInfo::take_from(&mut dec).unwrap();
        assert_eq!(info.name(), "null");
        assert_eq!(*info.id(), Ident::Code(0));
    }

    #[test]
    fn truncated_name() {
        let params = Params::default();
        let mut source = SliceSource::new(b"\x00\x00\x00\x04\x00n");
        let mut dec = Decoder::new(&params, &mut source);
        assert!(ClassInfo::take_from(&mut dec).unwrap_err().is_truncated());
    }
}
