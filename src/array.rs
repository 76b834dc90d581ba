//! Object arrays.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use crate::class::ClassInfo;
use crate::decode::{Decoder, DecodeError, Source};
use crate::params::ObjectArrayMode;
use crate::value::Value;


//------------ ObjectArray ---------------------------------------------------

/// A classed array of item rows.
///
/// The wire layout declares a row count, a class shared by all rows, and
/// the number of items per row. What a row item looks like depends on the
/// [`ObjectArrayMode`] of the decode: nested object arrays in
/// [`Nested`][ObjectArrayMode::Nested] mode, values carrying their own
/// type code in [`Tagged`][ObjectArrayMode::Tagged] mode. See the mode
/// documentation for why this is a parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectArray {
    /// The class shared by all rows.
    class: ClassInfo,

    /// The rows of the array.
    rows: Vec<Vec<Value>>,
}

impl ObjectArray {
    /// Creates a new object array from a class and its rows.
    pub fn new(class: ClassInfo, rows: Vec<Vec<Value>>) -> Self {
        Self { class, rows }
    }

    /// Returns the class shared by all rows.
    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    /// Returns the rows of the array.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the array has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Takes an object array from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let row_count = dec.take_u32()?;
        let class = ClassInfo::take_from(dec)?;
        let items_per_row = dec.take_u32()?;
        let mut rows = Vec::new();
        for _ in 0..row_count {
            let mut row = Vec::new();
            for _ in 0..items_per_row {
                dec.charge_item()?;
                let item = match dec.params().array_mode() {
                    ObjectArrayMode::Nested => {
                        dec.descend(|dec| {
                            ObjectArray::take_from(dec)
                                .map(Value::ObjectArray)
                        })?
                    }
                    ObjectArrayMode::Tagged => {
                        dec.descend(Value::take_from)?
                    }
                };
                row.push(item);
            }
            rows.push(row);
        }
        Ok(Self { class, rows })
    }
}


//------------ Tests ---------------------------------------------------------
