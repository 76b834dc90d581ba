//! The values of descriptor items.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use bytes::Bytes;
use crate::array::ObjectArray;
use crate::class::ClassInfo;
use crate::decode::{ContentError, Decoder, DecodeError, Source};
use crate::descriptor::Descriptor;
use crate::ident::Ident;
use crate::key::OsType;
use crate::path::FilePath;
use crate::reference::Reference;
use crate::unit::UnitDouble;


//------------ Value ---------------------------------------------------------

/// The value of a descriptor item.
///
/// On the wire, every value is preceded by a four-byte [type
/// code][OsType] that selects its layout. This enum covers all seventeen
/// codes the format defines. Two pairs of codes share a variant: plain and
/// global classes both decode to [`Value::Class`] and plain and global
/// objects both decode to [`Value::Descriptor`], as the members of each
/// pair are encoded identically.
///
/// [`Value::Alias`] and [`Value::RawData`] are likewise octet strings of
/// the same layout, but they remain separate variants so that the
/// distinction made by the wire data is not lost.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean. Encoded as a single octet with any non-zero value true.
    Boolean(bool),

    /// A reference to a class.
    Class(ClassInfo),

    /// A nested descriptor.
    Descriptor(Descriptor),

    /// A 64 bit float.
    Double(f64),

    /// An enumerated value.
    ///
    /// Only the value identifier is kept. The type identifier that
    /// precedes it on the wire repeats the information of the item key and
    /// is dropped during decoding.
    Enumerated(Ident),

    /// An opaque alias record.
    Alias(Bytes),

    /// A file path.
    FilePath(FilePath),

    /// A signed 32 bit integer.
    Integer(i32),

    /// A signed 64 bit integer.
    LargeInteger(i64),

    /// A sequence of values, each carrying its own type code.
    List(Vec<Value>),

    /// A classed array of item rows.
    ObjectArray(ObjectArray),

    /// Opaque raw data.
    RawData(Bytes),

    /// A reference to an object outside the descriptor.
    Reference(Reference),

    /// Unicode text.
    Text(String),

    /// A float paired with a unit.
    UnitDouble(UnitDouble),
}

/// # Decoding
///
impl Value {
    /// Takes a value from the beginning of the decoder.
    ///
    /// Reads the four-byte type code and then the value it announces.
    pub fn take_from<S: Source>(
        dec: &mut Decoder<S>
    ) -> Result<Self, DecodeError<S::Error>> {
        let key = dec.take_type()?;
        Self::take_keyed_from(dec, key)
    }

    /// Takes a value of the type announced by `key` from the decoder.
    ///
    /// This is for callers that have already read the type code
    /// themselves. An unrecognized code fails with
    /// [`ContentError::UnknownType`].
    pub fn take_keyed_from<S: Source>(
        dec: &mut Decoder<S>, key: OsType,
    ) -> Result<Self, DecodeError<S::Error>> {
        match key {
            OsType::BOOLEAN => {
                dec.take_bool().map(Value::Boolean)
            }
            OsType::CLASS | OsType::GLOBAL_CLASS => {
                ClassInfo::take_from(dec).map(Value::Class)
            }
            OsType::OBJECT | OsType::GLOBAL_OBJECT => {
                dec.descend(Descriptor::take_from).map(Value::Descriptor)
            }
            OsType::DOUBLE => {
                dec.take_f64().map(Value::Double)
            }
            OsType::ENUMERATED => {
                Ident::take_enum_from(dec).map(Value::Enumerated)
            }
            OsType::ALIAS => {
                let len = dec.take_u32()?;
                dec.take_bytes(len).map(Value::Alias)
            }
            OsType::FILE_PATH => {
                FilePath::take_from(dec).map(Value::FilePath)
            }
            OsType::INTEGER => {
                dec.take_i32().map(Value::Integer)
            }
            OsType::LARGE_INTEGER => {
                dec.take_i64().map(Value::LargeInteger)
            }
            OsType::LIST => {
                let count = dec.take_u32()?;
                dec.descend(|dec| {
                    let mut items = Vec::new();
                    for _ in 0..count {
                        dec.charge_item()?;
                        items.push(Value::take_from(dec)?);
                    }
                    Ok(items)
                }).map(Value::List)
            }
            OsType::OBJECT_ARRAY => {
                ObjectArray::take_from(dec).map(Value::ObjectArray)
            }
            OsType::RAW_DATA => {
                let len = dec.take_u32()?;
                dec.take_bytes(len).map(Value::RawData)
            }
            OsType::REFERENCE => {
                Reference::take_from(dec).map(Value::Reference)
            }
            OsType::TEXT => {
                dec.take_unicode_string().map(Value::Text)
            }
            OsType::UNIT_DOUBLE => {
                UnitDouble::take_from(dec).map(Value::UnitDouble)
            }
            key => {
                Err(dec.content_err(ContentError::UnknownType(key)))
            }
        }
    }
}

/// # Access to Content
///
impl Value {
    /// Returns the boolean if the value is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match *self {
            Value::Boolean(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the integer if the value is a 32 bit integer.
    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            Value::Integer(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the float if the value is a plain double.
    pub fn as_double(&self) -> Option<f64> {
        match *self {
            Value::Double(val) => Some(val),
            _ => None,
        }
    }

    /// Returns the text if the value is Unicode text.
    pub fn as_text(&self) -> Option<&str> {
        match *self {
            Value::Text(ref val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Returns the descriptor if the value is a nested descriptor.
    pub fn as_descriptor(&self) -> Option<&Descriptor> {
        match *self {
            Value::Descriptor(ref val) => Some(val),
            _ => None,
        }
    }

    /// Returns the elements if the value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match *self {
            Value::List(ref val) => Some(val.as_slice()),
            _ => None,
        }
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::Params;
    use crate::decode::SliceSource;

    //------------ Buf -------------------------------------------------

    /// A builder for hand-made wire data.
    #[derive(Clone, Debug, Default)]
    pub struct Buf(Vec<u8>);

    impl Buf {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(mut self, data: &[u8]) -> Self {
            self.0.extend_from_slice(data);
            self
        }

        pub fn u32(self, val: u32) -> Self {
            self.raw(&val.to_be_bytes())
        }

        /// Appends a length-prefixed UTF-16 string.
        pub fn text(mut self, val: &str) -> Self {
            let units = val.encode_utf16().collect::<Vec<_>>();
            self = self.u32(units.len() as u32);
            for unit in units {
                self = self.raw(&unit.to_be_bytes());
            }
            self
        }

        /// Appends a textual identifier.
        pub fn ident(self, val: &str) -> Self {
            self.u32(val.len() as u32).raw(val.as_bytes())
        }

        /// Appends a numeric identifier.
        pub fn ident_code(self, val: u32) -> Self {
            self.u32(0).u32(val)
        }

        /// Appends a class header with the given name and numeric id.
        pub fn class(self, name: &str, id: u32) -> Self {
            self.text(name).ident_code(id)
        }

        pub fn into_vec(self) -> Vec<u8> {
            self.0
        }
    }

    pub fn decode_value(data: &[u8]) -> Result<Value, ContentError> {
        decode_value_params(&Params::default(), data)
    }

    pub fn decode_value_params(
        params: &Params, data: &[u8]
    ) -> Result<Value, ContentError> {
        let mut source = SliceSource::new(data);
        Value::take_from(&mut Decoder::new(params, &mut source))
            .map_err(|err| err.content_error().unwrap())
    }

    //------------ Actual tests ----------------------------------------

    #[test]
    fn boolean() {
        assert_eq!(
            decode_value(b"bool\x01").unwrap(), Value::Boolean(true)
        );
        assert_eq!(
            decode_value(b"bool\x00").unwrap(), Value::Boolean(false)
        );

        // Any non-zero octet is true, not just 1.
        assert_eq!(
            decode_value(b"bool\x17").unwrap(), Value::Boolean(true)
        );
    }

    #[test]
    fn class() {
        let data = Buf::new().raw(b"type").class("Lyr ", 42).into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::Class(ClassInfo::new("Lyr ", 42u32))
        );

        // A global class decodes identically.
        let data = Buf::new().raw(b"GlbC").class("Lyr ", 42).into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::Class(ClassInfo::new("Lyr ", 42u32))
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            decode_value(b"long\xff\xff\xff\xd6").unwrap(),
            Value::Integer(-42)
        );
        assert_eq!(
            decode_value(b"comp\x00\x00\x00\x01\x00\x00\x00\x00").unwrap(),
            Value::LargeInteger(1 << 32)
        );
        assert_eq!(
            decode_value(
                b"doub\x40\x49\x00\x00\x00\x00\x00\x00"
            ).unwrap(),
            Value::Double(50.0)
        );
    }

    #[test]
    fn enumerated() {
        let data = Buf::new()
            .raw(b"enum").ident("Ornt").ident("Hrzn").into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::Enumerated(Ident::Name("Hrzn".into()))
        );
    }

    #[test]
    fn octet_strings() {
        let data = Buf::new().raw(b"alis").u32(3).raw(b"abc").into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::Alias(Bytes::from_static(b"abc"))
        );

        let data = Buf::new().raw(b"tdta").u32(3).raw(b"abc").into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::RawData(Bytes::from_static(b"abc"))
        );
    }

    #[test]
    fn text() {
        let data = Buf::new().raw(b"TEXT").text("hello").into_vec();
        assert_eq!(
            decode_value(&data).unwrap(), Value::Text("hello".into())
        );
    }

    #[test]
    fn empty_list() {
        let data = Buf::new().raw(b"VlLs").u32(0).into_vec();
        assert_eq!(decode_value(&data).unwrap(), Value::List(Vec::new()));
    }

    #[test]
    fn mixed_list() {
        let data = Buf::new()
            .raw(b"VlLs").u32(3)
            .raw(b"bool\x01")
            .raw(b"long").u32(7)
            .raw(b"TEXT").text("hi")
            .into_vec();
        assert_eq!(
            decode_value(&data).unwrap(),
            Value::List(vec![
                Value::Boolean(true),
                Value::Integer(7),
                Value::Text("hi".into()),
            ])
        );
    }

    #[test]
    fn nested_descriptor() {
        let data = Buf::new()
            .raw(b"Objc").class("null", 0).u32(1)
            .ident("Md  ").raw(b"bool\x01")
            .into_vec();
        let value = decode_value(&data).unwrap();
        let desc = value.as_descriptor().unwrap();
        assert_eq!(desc.class().name(), "null");
        assert_eq!(
            desc.get("Md  ").and_then(Value::as_boolean), Some(true)
        );

        // A global object decodes identically.
        let data = Buf::new()
            .raw(b"GlbO").class("null", 0).u32(0)
            .into_vec();
        assert!(decode_value(&data).unwrap().as_descriptor().is_some());
    }

    #[test]
    fn unknown_type() {
        assert_eq!(
            decode_value(b"Wrng\x01\x02\x03\x04").unwrap_err(),
            ContentError::UnknownType(OsType::new(*b"Wrng"))
        );
    }

    #[test]
    fn deep_list_nesting_is_limited() {
        let mut data = Vec::new();
        for _ in 0..100 {
            data.extend_from_slice(b"VlLs\x00\x00\x00\x01");
        }
        assert_eq!(
            decode_value(&data).unwrap_err(), ContentError::DepthLimit
        );
    }

    #[test]
    fn long_list_is_limited() {
        let mut data = b"VlLs\xff\xff\xff\xff".to_vec();
        for _ in 0..200 {
            data.extend_from_slice(b"bool\x01");
        }
        assert_eq!(
            decode_value_params(
                &Params::default().with_max_items(100), &data
            ).unwrap_err(),
            ContentError::ItemLimit
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::Boolean(true).as_integer(), None);
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::Double(0.5).as_double(), Some(0.5));
        assert_eq!(Value::Text("x".into()).as_text(), Some("x"));
        assert_eq!(Value::List(Vec::new()).as_list(), Some(&[][..]));
    }
}
