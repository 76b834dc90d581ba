//! String-or-numeric identifiers.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::fmt;
use crate::decode::{Decoder, DecodeError, Source};
use crate::key::OsType;


//------------ Ident ---------------------------------------------------------

/// An identifier naming a class, an item, or an enum value.
///
/// Identifiers appear in two wire forms distinguished by their 32 bit
/// length prefix: a zero length means a four-byte numeric code follows,
/// any other length means that many octets of identifier text follow. The
/// numeric codes conventionally are four-character codes like the type
/// codes, which is how [`Display`][fmt::Display] renders them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Ident {
    /// A four-byte numeric identifier.
    Code(u32),

    /// A textual identifier.
    Name(String),
}

impl Ident {
    /// Takes an identifier from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let len = dec.take_u32()?;
        if len == 0 {
            dec.take_u32().map(Ident::Code)
        }
        else {
            let octets = dec.take_bytes(len)?;
            Ok(Ident::Name(String::from_utf8_lossy(&octets).into_owned()))
        }
    }

    /// Takes an enumerated value from the beginning of the decoder.
    ///
    /// An enumerated value consists of two consecutive identifiers of
    /// which the first repeats type information the caller already has, so
    /// only the second is returned.
    pub fn take_enum_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let _ = Ident::take_from(dec)?;
        Ident::take_from(dec)
    }

    /// Returns the identifier text if this is a textual identifier.
    pub fn as_name(&self) -> Option<&str> {
        match *self {
            Ident::Code(_) => None,
            Ident::Name(ref name) => Some(name.as_str()),
        }
    }

    /// Returns the numeric code if this is a numeric identifier.
    pub fn as_code(&self) -> Option<u32> {
        match *self {
            Ident::Code(code) => Some(code),
            Ident::Name(_) => None,
        }
    }
}


//--- From

impl From<u32> for Ident {
    fn from(code: u32) -> Self {
        Ident::Code(code)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::Name(name.into())
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::Name(name)
    }
}


//--- PartialEq

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.as_name() == Some(other)
    }
}

impl<'a> PartialEq<&'a str> for Ident {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_name() == Some(*other)
    }
}

impl PartialEq<u32> for Ident {
    fn eq(&self, other: &u32) -> bool {
        self.as_code() == Some(*other)
    }
}


//--- Display

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Ident::Code(code) => {
                fmt::Display::fmt(&OsType::new(code.to_be_bytes()), f)
            }
            Ident::Name(ref name) => f.write_str(name),
        }
    }
}


//------------ Tests ---------------------------------------------------------
