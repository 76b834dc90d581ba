//! The four-byte type codes of the descriptor format.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::decode::{DecodeError, Source};


//------------ OsType --------------------------------------------------------

/// A four-byte code identifying the type of an encoded item.
///
/// Every value inside a descriptor is preceded by such a code which selects
/// how the following octets are to be interpreted. The same code space is
/// also used for the form of a reference, the unit of a unit double, and the
/// signature of a file path. The codes consist of four octets that almost
/// always are printable ASCII, e.g., `b"bool"` or `b"UntF"`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OsType([u8; 4]);

/// # Constants for Value Type Codes
///
impl OsType {
    /// The code for a boolean item, `b"bool"`.
    pub const BOOLEAN: Self = OsType(*b"bool");

    /// The code for a class item, `b"type"`.
    pub const CLASS: Self = OsType(*b"type");

    /// The code for a global class item, `b"GlbC"`.
    ///
    /// Decodes exactly like [`OsType::CLASS`].
    pub const GLOBAL_CLASS: Self = OsType(*b"GlbC");

    /// The code for a nested descriptor item, `b"Objc"`.
    pub const OBJECT: Self = OsType(*b"Objc");

    /// The code for a global nested descriptor item, `b"GlbO"`.
    ///
    /// Decodes exactly like [`OsType::OBJECT`].
    pub const GLOBAL_OBJECT: Self = OsType(*b"GlbO");

    /// The code for a double item, `b"doub"`.
    pub const DOUBLE: Self = OsType(*b"doub");

    /// The code for an enumerated item, `b"enum"`.
    pub const ENUMERATED: Self = OsType(*b"enum");

    /// The code for an alias item, `b"alis"`.
    pub const ALIAS: Self = OsType(*b"alis");

    /// The code for a file path item, `b"Pth "`.
    pub const FILE_PATH: Self = OsType(*b"Pth ");

    /// The code for a 32 bit integer item, `b"long"`.
    pub const INTEGER: Self = OsType(*b"long");

    /// The code for a 64 bit integer item, `b"comp"`.
    pub const LARGE_INTEGER: Self = OsType(*b"comp");

    /// The code for a list item, `b"VlLs"`.
    pub const LIST: Self = OsType(*b"VlLs");

    /// The code for an object array item, `b"ObAr"`.
    pub const OBJECT_ARRAY: Self = OsType(*b"ObAr");

    /// The code for a raw data item, `b"tdta"`.
    pub const RAW_DATA: Self = OsType(*b"tdta");

    /// The code for a reference item, `b"obj "`.
    pub const REFERENCE: Self = OsType(*b"obj ");

    /// The code for a Unicode text item, `b"TEXT"`.
    pub const TEXT: Self = OsType(*b"TEXT");

    /// The code for a unit double item, `b"UntF"`.
    pub const UNIT_DOUBLE: Self = OsType(*b"UntF");
}

/// # Constants for Reference Forms
///
impl OsType {
    /// The form of a class reference, `b"Clss"`.
    pub const FORM_CLASS: Self = OsType(*b"Clss");

    /// The form of an enumerated reference, `b"Enmr"`.
    pub const FORM_ENUMERATED: Self = OsType(*b"Enmr");

    /// The form of an identifier reference, `b"Idnt"`.
    pub const FORM_IDENTIFIER: Self = OsType(*b"Idnt");

    /// The form of an index reference, `b"indx"`.
    pub const FORM_INDEX: Self = OsType(*b"indx");

    /// The form of a name reference, `b"name"`.
    pub const FORM_NAME: Self = OsType(*b"name");

    /// The form of a relative offset reference, `b"rele"`.
    pub const FORM_OFFSET: Self = OsType(*b"rele");

    /// The form of a property reference, `b"prop"`.
    pub const FORM_PROPERTY: Self = OsType(*b"prop");
}

/// # Constants for Unit Codes
///
impl OsType {
    /// The unit code for angles in degrees, `b"#Ang"`.
    pub const UNIT_ANGLE: Self = OsType(*b"#Ang");

    /// The unit code for densities, `b"#Rsl"`.
    pub const UNIT_DENSITY: Self = OsType(*b"#Rsl");

    /// The unit code for distances, `b"#Rlt"`.
    pub const UNIT_DISTANCE: Self = OsType(*b"#Rlt");

    /// The unit code for unitless values, `b"#Nne"`.
    pub const UNIT_NONE: Self = OsType(*b"#Nne");

    /// The unit code for percentages, `b"#Prc"`.
    pub const UNIT_PERCENT: Self = OsType(*b"#Prc");

    /// The unit code for pixel counts, `b"#Pxl"`.
    pub const UNIT_PIXELS: Self = OsType(*b"#Pxl");

    /// The unit code for millimeters, `b"#Mlm"`.
    pub const UNIT_MILLIMETERS: Self = OsType(*b"#Mlm");

    /// The unit code for points, `b"#Pnt"`.
    pub const UNIT_POINTS: Self = OsType(*b"#Pnt");
}

/// # Creation and Conversion
///
impl OsType {
    /// Creates a type code from its four octets.
    pub const fn new(octets: [u8; 4]) -> Self {
        OsType(octets)
    }

    /// Returns the four octets of the code.
    pub const fn to_octets(self) -> [u8; 4] {
        self.0
    }
}

/// # Decoding
///
impl OsType {
    /// Takes a type code from the beginning of a source.
    pub fn take_from<S: Source>(
        source: &mut S
    ) -> Result<Self, DecodeError<S::Error>> {
        source.take_array().map(OsType)
    }
}


//--- From

impl From<[u8; 4]> for OsType {
    fn from(octets: [u8; 4]) -> Self {
        OsType(octets)
    }
}


//--- Display and Debug

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            if (0x20..0x7f).contains(&ch) {
                fmt::Write::write_char(f, ch as char)?;
            }
            else {
                write!(f, "\\x{:02x}", ch)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OsType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OsType({})", self)
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::SliceSource;

    #[test]
    fn take_from() {
        let mut source = SliceSource::new(b"UntF#Prc");
        assert_eq!(
            OsType::take_from(&mut source).unwrap(), OsType::UNIT_DOUBLE
        );
        assert_eq!(
            OsType::take_from(&mut source).unwrap(), OsType::UNIT_PERCENT
        );
        assert!(OsType::take_from(&mut source).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", OsType::REFERENCE), "obj ");
        assert_eq!(
            format!("{}", OsType::new([0x62, 0x6f, 0x6f, 0x07])),
            "boo\\x07"
        );
    }
}
