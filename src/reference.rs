//! References to objects outside the descriptor.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use crate::class::ClassInfo;
use crate::decode::{ContentError, Decoder, DecodeError, Source};
use crate::ident::Ident;
use crate::key::OsType;


//------------ Reference -----------------------------------------------------

/// A pointer-like value describing what is being referred to.
///
/// A reference does not hold decoded content itself. It names a class and
/// describes how the referred-to object is to be found within that class:
/// by name, by index, by identifier, and so on. The way is given by a
/// four-byte form code on the wire and determines what payload follows;
/// both are captured by the [`Target`] enum.
#[derive(Clone, Debug, PartialEq)]
pub struct Reference {
    /// The class of the referred-to object.
    class: ClassInfo,

    /// How the referred-to object is found.
    target: Target,
}

impl Reference {
    /// Creates a new reference from a class and a target.
    pub fn new(class: ClassInfo, target: Target) -> Self {
        Self { class, target }
    }

    /// Returns the class of the referred-to object.
    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    /// Returns how the referred-to object is found.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the four-byte form code matching the target.
    pub fn form(&self) -> OsType {
        match self.target {
            Target::Class => OsType::FORM_CLASS,
            Target::Enumerated(_) => OsType::FORM_ENUMERATED,
            Target::Identifier(_) => OsType::FORM_IDENTIFIER,
            Target::Index(_) => OsType::FORM_INDEX,
            Target::Name(_) => OsType::FORM_NAME,
            Target::Offset(_) => OsType::FORM_OFFSET,
            Target::Property(_) => OsType::FORM_PROPERTY,
        }
    }

    /// Takes a reference from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let form_pos = dec.pos();
        let form = dec.take_type()?;
        let class = ClassInfo::take_from(dec)?;
        let target = match form {
            OsType::FORM_CLASS => Target::Class,
            OsType::FORM_ENUMERATED => {
                Target::Enumerated(Ident::take_enum_from(dec)?)
            }
            OsType::FORM_IDENTIFIER => {
                Target::Identifier(dec.take_i32()?)
            }
            OsType::FORM_INDEX => Target::Index(dec.take_i32()?),
            OsType::FORM_NAME => Target::Name(dec.take_unicode_string()?),
            OsType::FORM_OFFSET => Target::Offset(dec.take_i32()?),
            OsType::FORM_PROPERTY => {
                Target::Property(Ident::take_from(dec)?)
            }
            form => {
                return Err(DecodeError::content(
                    ContentError::UnknownForm(form), form_pos
                ))
            }
        };
        Ok(Self { class, target })
    }
}


//------------ Target --------------------------------------------------------

/// The form-specific payload of a reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// The reference names the class as a whole.
    Class,

    /// The referred-to object is an enumerated value.
    Enumerated(Ident),

    /// The referred-to object has a unique numeric identifier.
    Identifier(i32),

    /// The referred-to object sits at an index within its class.
    Index(i32),

    /// The referred-to object has a Unicode name.
    Name(String),

    /// The referred-to object sits at an offset from the current one.
    Offset(i32),

    /// The reference names a property of the class.
    Property(Ident),
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use crate::decode::SliceSource;

    // An empty class header: empty name, numeric id 0.
    const CLASS: &[u8] = b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";

    fn take_reference(data: &[u8]) -> Result<Reference, ContentError> {
        let params = Params::default();
        let mut source = SliceSource::new(data);
        Reference::take_from(&mut Decoder::new(&params, &mut source))
            .map_err(|err| err.content_error().unwrap())
    }

    fn encoded(form: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut res = form.to_vec();
        res.extend_from_slice(CLASS);
        res.extend_from_slice(payload);
        res
    }

    #[test]
    fn class_form() {
        let re = take_reference(&encoded(b"Clss", b"")).unwrap();
        assert_eq!(*re.target(), Target::Class);
        assert_eq!(re.form(), OsType::FORM_CLASS);
    }

    #[test]
    fn enumerated_form() {
        let re = take_reference(&encoded(
            b"Enmr", b"\x00\x00\x00\x04Ornt\x00\x00\x00\x04Hrzn"
        )).unwrap();
        assert_eq!(
            *re.target(), Target::Enumerated(Ident::Name("Hrzn".into()))
        );
    }

    #[test]
    fn integer_forms() {
        assert_eq!(
            *take_reference(
                &encoded(b"Idnt", b"\x00\x00\x00\x2a")
            ).unwrap().target(),
            Target::Identifier(42)
        );
        assert_eq!(
            *take_reference(
                &encoded(b"indx", b"\x00\x00\x00\x07")
            ).unwrap().target(),
            Target::Index(7)
        );
        assert_eq!(
            *take_reference(
                &encoded(b"rele", b"\xff\xff\xff\xff")
            ).unwrap().target(),
            Target::Offset(-1)
        );
    }

    #[test]
    fn name_form() {
        let re = take_reference(&encoded(
            b"name", b"\x00\x00\x00\x02\x00h\x00i"
        )).unwrap();
        assert_eq!(*re.target(), Target::Name("hi".into()));
    }

    #[test]
    fn property_form() {
        let re = take_reference(&encoded(
            b"prop", b"\x00\x00\x00\x04Opct"
        )).unwrap();
        assert_eq!(
            *re.target(), Target::Property(Ident::Name("Opct".into()))
        );
    }

    #[test]
    fn unknown_form() {
        assert_eq!(
            take_reference(&encoded(b"Wrng", b"")).unwrap_err(),
            ContentError::UnknownForm(OsType::new(*b"Wrng"))
        );
    }
}
