//! Unit doubles.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::fmt;
use crate::decode::{Decoder, DecodeError, Source};
use crate::key::OsType;


//------------ UnitDouble ----------------------------------------------------

/// A float paired with a physical or display unit.
///
/// The unit arrives as a four-byte code on the wire. The codes known to
/// carry meaning map to a [`Unit`] through [`unit`][Self::unit]; any other
/// code is preserved as is and simply maps to no unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDouble {
    /// The four-byte unit code.
    code: OsType,

    /// The value itself.
    value: f64,
}

impl UnitDouble {
    /// Creates a new unit double from a code and a value.
    pub fn new(code: OsType, value: f64) -> Self {
        Self { code, value }
    }

    /// Returns the raw unit code.
    pub fn code(&self) -> OsType {
        self.code
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit of the value if the code is a recognized one.
    pub fn unit(&self) -> Option<Unit> {
        match self.code {
            OsType::UNIT_ANGLE => Some(Unit::Angle),
            OsType::UNIT_DENSITY => Some(Unit::Density),
            OsType::UNIT_DISTANCE => Some(Unit::Distance),
            OsType::UNIT_NONE => Some(Unit::None),
            OsType::UNIT_PERCENT => Some(Unit::Percent),
            OsType::UNIT_PIXELS => Some(Unit::Pixels),
            OsType::UNIT_MILLIMETERS => Some(Unit::Millimeters),
            OsType::UNIT_POINTS => Some(Unit::Points),
            _ => None,
        }
    }

    /// Takes a unit double from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let code = dec.take_type()?;
        let value = dec.take_f64()?;
        Ok(Self { code, value })
    }
}


//--- Display

impl fmt::Display for UnitDouble {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.unit() {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{} '{}'", self.value, self.code),
        }
    }
}


//------------ Unit ----------------------------------------------------------

/// The semantic unit of a unit double.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    /// An angle in degrees.
    Angle,

    /// A density, typically in units per inch.
    Density,

    /// A distance in base units of the document resolution.
    Distance,

    /// A plain number without a unit.
    None,

    /// A percentage.
    Percent,

    /// A number of pixels.
    Pixels,

    /// A length in millimeters.
    Millimeters,

    /// A length in typographic points.
    Points,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Unit::Angle => "Angle",
            Unit::Density => "Density",
            Unit::Distance => "Distance",
            Unit::None => "None",
            Unit::Percent => "Percent",
            Unit::Pixels => "Pixels",
            Unit::Millimeters => "Millimeters",
            Unit::Points => "Points",
        })
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use crate::decode::SliceSource;

    fn take_unit_double(data: &[u8]) -> UnitDouble {
        let params = Params::default();
        let mut source = SliceSource::new(data);
        UnitDouble::take_from(
            &mut Decoder::new(&params, &mut source)
        ).unwrap()
    }

    #[test]
    fn recognized_unit() {
        let value = take_unit_double(
            b"#Prc\x40\x49\x00\x00\x00\x00\x00\x00"
        );
        assert_eq!(value.unit(), Some(Unit::Percent));
        assert_eq!(value.value(), 50.0);
        assert_eq!(value.code(), OsType::UNIT_PERCENT);
    }

    #[test]
    fn unrecognized_unit() {
        let value = take_unit_double(
            b"#Xyz\x40\x49\x00\x00\x00\x00\x00\x00"
        );
        assert_eq!(value.unit(), None);
        assert_eq!(value.code(), OsType::new(*b"#Xyz"));
        assert_eq!(value.value(), 50.0);
    }
}
