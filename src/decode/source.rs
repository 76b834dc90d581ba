//! The source of data for decoding.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::{cmp, error, io, ops};
use std::convert::{Infallible, TryFrom};
use bytes::Bytes;
use super::error::{ContentError, DecodeError};


//------------ Source --------------------------------------------------------

/// A view into a sequence of octets to be decoded.
///
/// A source maintains a current read position and hands out data in
/// [fragments][Fragment]: requesting a number of octets provides a fragment
/// of at most that length which can be inspected and, if the data is indeed
/// to be processed, consumed, advancing the position. A fragment shorter
/// than requested means the source has run out of data.
///
/// Atop this, the trait provides the typed reads of the descriptor wire
/// format. The format is big-endian throughout apart from two fields inside
/// file path items, so the unqualified methods read big-endian and the
/// little-endian exceptions carry an `_le` suffix. All typed reads fail
/// with [`ContentError::Truncated`] if the source cannot provide enough
/// octets.
pub trait Source {
    /// The fragment type this source provides data through.
    type Fragment<'f>: Fragment<'f> where Self: 'f;

    /// The error type of the source itself.
    ///
    /// This covers errors of the underlying means of transport, not errors
    /// in the encoded data. Sources that read from memory use
    /// [`Infallible`] here.
    type Error: error::Error;


    //--- Required methods

    /// Returns the current read position.
    fn pos(&self) -> Pos;

    /// Requests a fragment of `len` octets at the current position.
    ///
    /// The returned fragment may be shorter than requested if the source
    /// doesn't have enough data left.
    fn request<'f>(
        &'f mut self, len: usize
    ) -> Result<Self::Fragment<'f>, Self::Error>;


    //--- Provided methods

    /// Requests a fragment of exactly `len` octets.
    ///
    /// Returns a truncation error if the source has less data left.
    fn request_exact<'f>(
        &'f mut self, len: usize
    ) -> Result<Self::Fragment<'f>, DecodeError<Self::Error>> {
        let pos = self.pos();
        let frag = self.request(len)?;
        if frag.slice().len() < len {
            Err(DecodeError::content(ContentError::Truncated, pos))
        }
        else {
            Ok(frag)
        }
    }

    /// Takes a fixed number of octets from the source.
    fn take_array<const N: usize>(
        &mut self
    ) -> Result<[u8; N], DecodeError<Self::Error>> {
        let pos = self.pos();
        let frag = self.request(N)?;
        match <[u8; N]>::try_from(frag.slice()) {
            Ok(res) => {
                frag.consume();
                Ok(res)
            }
            Err(_) => {
                Err(DecodeError::content(ContentError::Truncated, pos))
            }
        }
    }

    /// Takes a single octet, interpreting any non-zero value as `true`.
    fn take_bool(&mut self) -> Result<bool, DecodeError<Self::Error>> {
        self.take_array::<1>().map(|octets| octets[0] != 0)
    }

    /// Takes a big-endian unsigned 32 bit integer.
    fn take_u32(&mut self) -> Result<u32, DecodeError<Self::Error>> {
        self.take_array().map(u32::from_be_bytes)
    }

    /// Takes a big-endian signed 32 bit integer.
    fn take_i32(&mut self) -> Result<i32, DecodeError<Self::Error>> {
        self.take_array().map(i32::from_be_bytes)
    }

    /// Takes a big-endian signed 64 bit integer.
    fn take_i64(&mut self) -> Result<i64, DecodeError<Self::Error>> {
        self.take_array().map(i64::from_be_bytes)
    }

    /// Takes a big-endian 64 bit float.
    fn take_f64(&mut self) -> Result<f64, DecodeError<Self::Error>> {
        self.take_array().map(f64::from_be_bytes)
    }

    /// Takes a little-endian unsigned 32 bit integer.
    fn take_u32_le(&mut self) -> Result<u32, DecodeError<Self::Error>> {
        self.take_array().map(u32::from_le_bytes)
    }

    /// Takes a little-endian signed 32 bit integer.
    fn take_i32_le(&mut self) -> Result<i32, DecodeError<Self::Error>> {
        self.take_array().map(i32::from_le_bytes)
    }

    /// Takes `len` octets of raw data.
    fn take_bytes(
        &mut self, len: u32
    ) -> Result<Bytes, DecodeError<Self::Error>> {
        let pos = self.pos();
        let len = match usize::try_from(len) {
            Ok(len) => len,
            Err(_) => {
                return Err(
                    DecodeError::content(ContentError::Truncated, pos)
                )
            }
        };
        let frag = self.request_exact(len)?;
        let res = Bytes::copy_from_slice(frag.slice());
        frag.consume();
        Ok(res)
    }

    /// Takes a UTF-16 string of the given number of code units.
    ///
    /// Each code unit takes two octets in big-endian order. Unpaired
    /// surrogates are replaced rather than treated as errors.
    fn take_utf16(
        &mut self, char_count: u32
    ) -> Result<String, DecodeError<Self::Error>> {
        let pos = self.pos();
        let len = match usize::try_from(char_count).ok().and_then(|count| {
            count.checked_mul(2)
        }) {
            Some(len) => len,
            None => {
                return Err(
                    DecodeError::content(ContentError::Truncated, pos)
                )
            }
        };
        let frag = self.request_exact(len)?;
        let units = frag.slice().chunks_exact(2).map(|chunk| {
            u16::from_be_bytes([chunk[0], chunk[1]])
        }).collect::<Vec<_>>();
        frag.consume();
        Ok(String::from_utf16_lossy(&units))
    }

    /// Takes a length-prefixed UTF-16 string.
    ///
    /// The string starts with a 32 bit code unit count followed by that
    /// many big-endian UTF-16 code units.
    fn take_unicode_string(
        &mut self
    ) -> Result<String, DecodeError<Self::Error>> {
        let count = self.take_u32()?;
        self.take_utf16(count)
    }
}


//------------ Fragment ------------------------------------------------------

/// A portion of data requested from a source.
///
/// The data can be inspected through [`slice`][Self::slice]. Only when the
/// fragment is [consumed][Self::consume] does the source advance past it.
/// Dropping the fragment instead leaves the source untouched.
pub trait Fragment<'f> {
    /// Returns the octets of the fragment.
    fn slice(&self) -> &[u8];

    /// Consumes the fragment, advancing the source.
    fn consume(self);
}


//------------ IntoSource ----------------------------------------------------

/// A type that can be converted into a source.
pub trait IntoSource {
    type Source: Source;

    fn into_source(self) -> Self::Source;
}

impl<T: Source> IntoSource for T {
    type Source = Self;

    fn into_source(self) -> Self::Source {
        self
    }
}

impl<'a> IntoSource for &'a [u8] {
    type Source = SliceSource<'a>;

    fn into_source(self) -> Self::Source {
        SliceSource::new(self)
    }
}


//------------ SliceSource ---------------------------------------------------

/// A source providing data from a byte slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> SliceSource<'s> {
    /// Creates a new source from the given slice.
    pub fn new(data: &'s [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the data that hasn't been consumed yet.
    pub fn remaining(&self) -> &[u8] {
        self.data
    }
}

impl<'s> Source for SliceSource<'s> {
    type Fragment<'f> = SliceFragment<'s, 'f> where Self: 'f;
    type Error = Infallible;

    fn pos(&self) -> Pos {
        self.pos.into()
    }

    fn request<'f>(
        &'f mut self, len: usize
    ) -> Result<Self::Fragment<'f>, Self::Error> {
        let (head, tail) = match self.data.split_at_checked(len) {
            Some(some) => some,
            None => (self.data, b"".as_ref())
        };
        Ok(SliceFragment { source: self, head, tail })
    }
}


//------------ SliceFragment -------------------------------------------------

/// The fragment type of a [`SliceSource`].
pub struct SliceFragment<'s, 'f> {
    source: &'f mut SliceSource<'s>,
    head: &'f [u8],
    tail: &'s [u8],
}

impl<'s, 'f> Fragment<'f> for SliceFragment<'s, 'f> {
    fn slice(&self) -> &[u8] {
        self.head
    }

    fn consume(self) {
        self.source.data = self.tail;
        self.source.pos += self.head.len();
    }
}


//------------ ReaderSource --------------------------------------------------

/// The maximum amount the buffer of a reader source grows at a time.
const READ_CHUNK: usize = 0x1_0000;

/// A source providing data from an `io::Read` reader.
///
/// The source maintains an internal buffer that fragments are served from.
/// It grows in steps of at most 64 kBytes at a time, so a request for an
/// absurd length cannot allocate more memory than the reader actually has
/// data. Errors of the reader other than interrupts are handed through as
/// source errors; running dry is not an error on this level but results in
/// short fragments.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
}

impl<R> ReaderSource<R> {
    /// Creates a new source using the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
        }
    }
}

impl<R: io::Read> Source for ReaderSource<R> {
    type Fragment<'f> = ReaderFragment<'f> where Self: 'f;
    type Error = io::Error;

    fn pos(&self) -> Pos {
        self.pos.into()
    }

    fn request<'f>(
        &'f mut self, len: usize
    ) -> Result<Self::Fragment<'f>, Self::Error> {
        while self.buf.len() < len {
            let start = self.buf.len();
            let chunk = cmp::min(len - start, READ_CHUNK);
            self.buf.resize(start + chunk, 0);
            let mut filled = 0;
            while filled < chunk {
                match self.reader.read(&mut self.buf[start + filled..]) {
                    Ok(0) => break,
                    Ok(n) => filled += n,
                    Err(ref err)
                        if err.kind() == io::ErrorKind::Interrupted => { }
                    Err(err) => {
                        self.buf.truncate(start + filled);
                        return Err(err)
                    }
                }
            }
            self.buf.truncate(start + filled);
            if filled < chunk {
                break
            }
        }
        let len = cmp::min(len, self.buf.len());
        Ok(ReaderFragment { buf: &mut self.buf, pos: &mut self.pos, len })
    }
}

//------------ ReaderFragment ------------------------------------------------

/// The fragment type of a [`ReaderSource`].
pub struct ReaderFragment<'f> {
    buf: &'f mut Vec<u8>,
    pos: &'f mut usize,
    len: usize,
}

impl<'f> Fragment<'f> for ReaderFragment<'f> {
    fn slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    fn consume(self) {
        self.buf.copy_within(self.len.., 0);
        self.buf.truncate(self.buf.len() - self.len);
        *self.pos += self.len;
    }
}


//------------ LimitedSource -------------------------------------------------

/// A source wrapper that limits the octets handed out.
///
/// Requests past the limit result in short fragments and thus truncation
/// errors from the typed reads. Wrapping a reader source this way bounds
/// the amount of memory a decode of untrusted data can consume.
pub struct LimitedSource<'a, S> {
    source: &'a mut S,
    limit: usize,
}

impl<'a, S> LimitedSource<'a, S> {
    /// Creates a new limited source.
    pub fn new(source: &'a mut S, limit: usize) -> Self {
        Self { source, limit }
    }

    /// Returns the number of octets still available.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<'a, S: Source> Source for LimitedSource<'a, S> {
    type Fragment<'f> = LimitedFragment<'f, S> where Self: 'f, S: 'f;
    type Error = S::Error;

    fn pos(&self) -> Pos {
        self.source.pos()
    }

    fn request<'f>(
        &'f mut self, len: usize
    ) -> Result<Self::Fragment<'f>, Self::Error> {
        let len = cmp::min(len, self.limit);
        Ok(LimitedFragment {
            fragment: self.source.request(len)?,
            limit: &mut self.limit,
            len
        })
    }
}


//------------ LimitedFragment -----------------------------------------------

/// The fragment type of a [`LimitedSource`].
pub struct LimitedFragment<'f, S: Source + 'f> {
    fragment: S::Fragment<'f>,
    limit: &'f mut usize,
    len: usize,
}

impl<'f, S: Source + 'f> Fragment<'f> for LimitedFragment<'f, S> {
    fn slice(&self) -> &[u8] {
        self.fragment.slice()
    }

    fn consume(self) {
        self.fragment.consume();
        *self.limit -= self.len;
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type can only be used for diagnostics. They can not be
/// used to determine how far a source has been advanced since it was
/// created. This is why we use a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl ops::Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Pos(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}


//------------ Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_reads() {
        let mut source = SliceSource::new(
            b"\x01\x00\x00\x00\x2a\xff\xff\xff\xd6\
              \x40\x49\x00\x00\x00\x00\x00\x00"
        );
        assert!(source.take_bool().unwrap());
        assert_eq!(source.take_u32().unwrap(), 42);
        assert_eq!(source.take_i32().unwrap(), -42);
        assert_eq!(source.take_f64().unwrap(), 50.0);
        assert!(source.take_u32().unwrap_err().is_truncated());
    }

    #[test]
    fn little_endian_reads() {
        let mut source = SliceSource::new(b"\x2a\x00\x00\x00");
        assert_eq!(source.take_u32_le().unwrap(), 42);
    }

    #[test]
    fn take_bytes() {
        let mut source = SliceSource::new(b"abcdef");
        assert_eq!(source.take_bytes(4).unwrap().as_ref(), b"abcd");
        assert!(source.take_bytes(4).unwrap_err().is_truncated());
    }

    #[test]
    fn unicode_string() {
        let mut source = SliceSource::new(
            b"\x00\x00\x00\x04\x00n\x00u\x00l\x00l"
        );
        assert_eq!(source.take_unicode_string().unwrap(), "null");
        assert!(source.take_unicode_string().unwrap_err().is_truncated());
    }

    #[test]
    fn reader_source() {
        let data = b"\x00\x00\x00\x2a\x17".to_vec();
        let mut source = ReaderSource::new(io::Cursor::new(data));
        assert_eq!(source.take_u32().unwrap(), 42);
        assert_eq!(source.take_array::<1>().unwrap(), [0x17]);
        assert!(source.take_bool().unwrap_err().is_truncated());
    }

    #[test]
    fn limited_source() {
        let mut inner = SliceSource::new(b"\x00\x00\x00\x2a\x01");
        let mut source = LimitedSource::new(&mut inner, 4);
        assert_eq!(source.take_u32().unwrap(), 42);
        assert!(source.take_bool().unwrap_err().is_truncated());
        assert_eq!(source.limit(), 0);
    }

    #[test]
    fn fragments_only_advance_on_consume() {
        let mut source = SliceSource::new(b"abcd");
        {
            let frag = source.request(2).unwrap();
            assert_eq!(frag.slice(), b"ab");
        }
        let frag = source.request(2).unwrap();
        assert_eq!(frag.slice(), b"ab");
        frag.consume();
        assert_eq!(source.remaining(), b"cd");
    }
}
