//! The descriptor itself.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use crate::class::ClassInfo;
use crate::decode::{
    Decoder, DecodeError, IntoSource, Source,
};
use crate::ident::Ident;
use crate::params::Params;
use crate::value::Value;


//------------ Descriptor ----------------------------------------------------

/// A self-describing keyed record.
///
/// A descriptor consists of a [class header][ClassInfo] followed by a
/// sequence of items, each pairing an [identifier][Ident] with a typed
/// [`Value`]. Values can be descriptors themselves, which is how the
/// format nests.
///
/// Items keep the order they appear in on the wire. A key showing up a
/// second time replaces the value stored under it without moving the item,
/// which matches what mapping the items by key would do.
///
/// This type also provides the entry point into decoding:
///
/// ```rust,ignore
/// let desc = Descriptor::decode(data.as_slice())?;
/// ```
///
/// decodes with the default [`Params`]; use [`Params::decode`] to decode
/// with explicit limits or a different object array interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    /// The class of the descriptor.
    class: ClassInfo,

    /// The keyed items in wire order.
    items: Vec<(Ident, Value)>,
}

/// # Creation and Access
///
impl Descriptor {
    /// Creates a new, empty descriptor with the given class.
    pub fn new(class: ClassInfo) -> Self {
        Self { class, items: Vec::new() }
    }

    /// Returns the class of the descriptor.
    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the descriptor has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the value stored under the given key.
    ///
    /// The key can be anything an [`Ident`] can be compared with, most
    /// usefully a string slice.
    pub fn get<K: ?Sized>(&self, key: &K) -> Option<&Value>
    where Ident: PartialEq<K> {
        self.items.iter().find_map(|(item_key, value)| {
            if *item_key == *key {
                Some(value)
            }
            else {
                None
            }
        })
    }

    /// Returns an iterator over the items in wire order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.items.iter())
    }

    /// Inserts a value under a key.
    ///
    /// If the key is already present, replaces the value stored under it,
    /// keeping the item's position. Otherwise appends a new item.
    pub fn insert(&mut self, key: Ident, value: Value) {
        match self.items.iter_mut().find(|(item_key, _)| *item_key == key) {
            Some(item) => item.1 = value,
            None => self.items.push((key, value)),
        }
    }
}

/// # Decoding
///
impl Descriptor {
    /// Decodes a descriptor from the beginning of `source`.
    ///
    /// Uses the default [`Params`]. The decode either produces a complete
    /// descriptor tree or fails with the first error encountered; there
    /// are no partial results. Data following the descriptor is left
    /// unread.
    pub fn decode<S: IntoSource>(
        source: S
    ) -> Result<Self, DecodeError<<S::Source as Source>::Error>> {
        Params::default().decode(source)
    }

    /// Takes a descriptor from the beginning of the decoder.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let class = ClassInfo::take_from(dec)?;
        let count = dec.take_u32()?;
        let mut res = Self::new(class);
        for _ in 0..count {
            dec.charge_item()?;
            let key = Ident::take_from(dec)?;
            let value = Value::take_from(dec)?;
            res.insert(key, value);
        }
        Ok(res)
    }
}


//--- IntoIterator

impl<'a> IntoIterator for &'a Descriptor {
    type Item = (&'a Ident, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


//------------ Iter ----------------------------------------------------------

/// An iterator over the items of a [`Descriptor`].
pub struct Iter<'a>(std::slice::Iter<'a, (Ident, Value)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Ident, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key, value))
    }
}


//------------ Tests ---------------------------------------------------------
