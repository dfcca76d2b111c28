use crate::conversion::convert_coordinate;
use crate::error::{DecodeError, DecodeResult};
use crate::parser::schema::{FieldRule, FieldSpec};

/// Fixed-width unsigned integers the cursor can read in network byte order
pub trait BigEndian: Sized + Copy {
    const WIDTH: usize;
    fn from_be_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_big_endian {
    ($($ty:ty),*) => {
        $(
            impl BigEndian for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_be_bytes(buf)
                }
            }
        )*
    };
}

impl_big_endian!(u8, u16, u32, u64);

/// Forward-only read cursor over an AVL frame buffer
///
/// Every read consumes exactly the requested number of bytes or fails with
/// `TruncatedFrame` without moving. There is no way to seek.
pub struct AvlCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> AvlCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the underlying buffer
    pub fn buffer_len(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes
    pub fn read(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(DecodeError::TruncatedFrame {
                offset: self.pos,
                needed: n,
                available,
            });
        }

        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_be<T: BigEndian>(&mut self) -> DecodeResult<T> {
        let bytes = self.read(T::WIDTH)?;
        Ok(T::from_be_slice(bytes))
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        self.read_be()
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        self.read_be()
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        self.read_be()
    }

    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        self.read_be()
    }

    /// Consume the raw bytes of a schema field
    pub fn read_field(&mut self, spec: &FieldSpec) -> DecodeResult<&'a [u8]> {
        self.read(spec.width)
    }

    pub fn skip_field(&mut self, spec: &FieldSpec) -> DecodeResult<()> {
        debug_assert_eq!(spec.rule, FieldRule::Skip, "field '{}'", spec.key);
        self.read_field(spec).map(|_| ())
    }

    /// Read an unsigned schema field whose width matches `T`
    pub fn read_uint_field<T: BigEndian>(&mut self, spec: &FieldSpec) -> DecodeResult<T> {
        debug_assert_eq!(spec.rule, FieldRule::Unsigned, "field '{}'", spec.key);
        debug_assert_eq!(spec.width, T::WIDTH, "field '{}'", spec.key);
        self.read_be()
    }

    pub fn read_ascii_field(&mut self, spec: &FieldSpec) -> DecodeResult<String> {
        debug_assert_eq!(spec.rule, FieldRule::Ascii, "field '{}'", spec.key);
        let bytes = self.read_field(spec)?;
        if !bytes.is_ascii() {
            return Err(DecodeError::InvalidEncoding {
                bytes: hex::encode(bytes),
            });
        }
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn read_hex_field(&mut self, spec: &FieldSpec) -> DecodeResult<String> {
        debug_assert_eq!(spec.rule, FieldRule::Hex, "field '{}'", spec.key);
        Ok(hex::encode(self.read_field(spec)?))
    }

    pub fn read_coordinate_field(&mut self, spec: &FieldSpec) -> DecodeResult<f64> {
        debug_assert_eq!(spec.rule, FieldRule::Coordinate, "field '{}'", spec.key);
        debug_assert_eq!(spec.width, u32::WIDTH, "field '{}'", spec.key);
        Ok(convert_coordinate(self.read_u32()?))
    }
}
