//! Decoding parameters.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use crate::decode::{Decoder, DecodeError, IntoSource, Source};
use crate::descriptor::Descriptor;


//------------ Params --------------------------------------------------------

/// The parameters of a decode.
///
/// The wire format places no limit on how deeply descriptors, lists, and
/// object arrays may nest nor on how many items they may declare, so a
/// decode of untrusted data needs configured bounds. A `Params` value
/// carries these bounds together with the object array interpretation and
/// serves as the entry point for a parameterized decode:
///
/// ```rust,ignore
/// let desc = Params::default()
///     .with_max_depth(16)
///     .decode(data.as_slice())?;
/// ```
///
/// [`Descriptor::decode`] is a shortcut for decoding with the default
/// parameters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Params {
    /// The maximum nesting depth.
    max_depth: usize,

    /// The maximum overall number of items.
    max_items: usize,

    /// How object array content is to be interpreted.
    array_mode: ObjectArrayMode,
}

impl Params {
    /// Returns a params value with the given maximum nesting depth.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Returns a params value with the given overall item limit.
    ///
    /// The limit counts every descriptor item, list element, and object
    /// array node of the entire decode.
    pub fn with_max_items(self, max_items: usize) -> Self {
        Self { max_items, ..self }
    }

    /// Returns a params value with the given object array interpretation.
    pub fn with_array_mode(self, array_mode: ObjectArrayMode) -> Self {
        Self { array_mode, ..self }
    }

    /// Returns the maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the overall item limit.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Returns the object array interpretation.
    pub fn array_mode(&self) -> ObjectArrayMode {
        self.array_mode
    }

    /// Decodes a descriptor from the beginning of `source`.
    ///
    /// The decode either produces a complete descriptor tree or fails
    /// with the first error encountered. Data following the descriptor is
    /// left unread.
    pub fn decode<S: IntoSource>(
        &self, source: S
    ) -> Result<Descriptor, DecodeError<<S::Source as Source>::Error>> {
        let mut source = source.into_source();
        Descriptor::take_from(&mut Decoder::new(self, &mut source))
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_items: 0x10_0000,
            array_mode: ObjectArrayMode::Nested,
        }
    }
}


//------------ ObjectArrayMode -----------------------------------------------

/// The interpretation of object array content.
///
/// The object array wire layout declares a row count, a class, and an item
/// count per row, but it does not say what a row item is. The reader this
/// format is known from treats every row item as another, recursively
/// decoded object array, which means item data can only ever terminate in
/// arrays declaring zero rows or zero items. Real files suggest row items
/// may instead carry their own type code like list elements do. Since the
/// two layouts cannot be told apart from the bytes alone, the choice is an
/// explicit decoding parameter rather than built in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ObjectArrayMode {
    /// Every row item is a nested object array.
    ///
    /// This is the literal layout implemented by the established readers
    /// of the format and therefore the default.
    Nested,

    /// Every row item carries its own four-byte type code.
    Tagged,
}

impl Default for ObjectArrayMode {
    fn default() -> Self {
        ObjectArrayMode::Nested
    }
}


//------------ Tests ---------------------------------------------------------
