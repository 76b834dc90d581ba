//! Handling of Adobe Photoshop descriptor structures.
//!
//! Photoshop files carry much of their structured metadata, e.g., layer
//! effects, text engine state, or tool options, in a self-describing
//! binary record format Adobe calls a descriptor. A descriptor names a
//! class and maps four-character keys to typed values which may in turn
//! be descriptors again, making the format recursively nestable.
//!
//! This crate decodes such structures into a value tree. Decoding starts
//! from a positioned byte cursor, typically placed right at the
//! descriptor by whatever parses the surrounding file, and is strictly
//! read-only: there is no encoder. The crate does not parse the
//! surrounding file format either; it deals with descriptors only.
//!
//! The entry point is [`Descriptor::decode`]:
//!
//! ```rust,ignore
//! use psdesc::Descriptor;
//!
//! let desc = Descriptor::decode(data.as_slice())?;
//! for (key, value) in desc.iter() {
//!     println!("{}: {:?}", key, value);
//! }
//! ```
//!
//! Since the wire format places no bound on nesting depth or item counts,
//! decoding untrusted data should configure limits through [`Params`],
//! which doubles as the parameterized entry point. The machinery
//! underneath, including the [`Source`][decode::Source] abstraction that
//! data is read through, lives in the [`decode`] module.

pub use self::array::ObjectArray;
pub use self::class::ClassInfo;
pub use self::descriptor::Descriptor;
pub use self::ident::Ident;
pub use self::key::OsType;
pub use self::params::{ObjectArrayMode, Params};
pub use self::path::FilePath;
pub use self::reference::{Reference, Target};
pub use self::unit::{Unit, UnitDouble};
pub use self::value::Value;

pub mod decode;

mod array;
mod class;
mod descriptor;
mod ident;
mod key;
mod params;
mod path;
mod reference;
mod unit;
mod value;
