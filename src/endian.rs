//! Fixed-width integer codecs.
//!
//! The plain `encode_*`/`decode_*` functions are the hot path: the caller has
//! already sized the buffer for its frame layout, so nothing is checked beyond
//! the slice indexing itself. The `try_*` variants report a short buffer as
//! [`CodecError::BufferTooSmall`] instead.
//!
//! # Panics
//!
//! Every unchecked function panics if the buffer is shorter than the width of
//! the integer being transferred.

use crate::error::{CodecError, ensure_capacity};
use crate::{Decode, Encode, FixedWidth};

fn head<const N: usize>(buffer: &[u8]) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&buffer[..N]);
    out
}

pub fn encode_8_bits(value: u8, buffer: &mut [u8]) {
    buffer[0] = value;
}

pub fn decode_8_bits(buffer: &[u8]) -> u8 {
    buffer[0]
}

pub fn encode_16_big_endian(value: u16, buffer: &mut [u8]) {
    buffer[..2].copy_from_slice(&value.to_be_bytes());
}

pub fn encode_32_big_endian(value: u32, buffer: &mut [u8]) {
    buffer[..4].copy_from_slice(&value.to_be_bytes());
}

pub fn encode_64_big_endian(value: u64, buffer: &mut [u8]) {
    buffer[..8].copy_from_slice(&value.to_be_bytes());
}

pub fn encode_16_little_endian(value: u16, buffer: &mut [u8]) {
    buffer[..2].copy_from_slice(&value.to_le_bytes());
}

pub fn encode_32_little_endian(value: u32, buffer: &mut [u8]) {
    buffer[..4].copy_from_slice(&value.to_le_bytes());
}

pub fn encode_64_little_endian(value: u64, buffer: &mut [u8]) {
    buffer[..8].copy_from_slice(&value.to_le_bytes());
}

pub fn decode_16_big_endian(buffer: &[u8]) -> u16 {
    u16::from_be_bytes(head(buffer))
}

pub fn decode_32_big_endian(buffer: &[u8]) -> u32 {
    u32::from_be_bytes(head(buffer))
}

pub fn decode_64_big_endian(buffer: &[u8]) -> u64 {
    u64::from_be_bytes(head(buffer))
}

pub fn decode_16_little_endian(buffer: &[u8]) -> u16 {
    u16::from_le_bytes(head(buffer))
}

pub fn decode_32_little_endian(buffer: &[u8]) -> u32 {
    u32::from_le_bytes(head(buffer))
}

pub fn decode_64_little_endian(buffer: &[u8]) -> u64 {
    u64::from_le_bytes(head(buffer))
}

/// IEEE-754 single precision, transported as its 32-bit pattern.
pub fn encode_float_big_endian(value: f32, buffer: &mut [u8]) {
    encode_32_big_endian(value.to_bits(), buffer);
}

pub fn encode_float_little_endian(value: f32, buffer: &mut [u8]) {
    encode_32_little_endian(value.to_bits(), buffer);
}

pub fn decode_float_big_endian(buffer: &[u8]) -> f32 {
    f32::from_bits(decode_32_big_endian(buffer))
}

pub fn decode_float_little_endian(buffer: &[u8]) -> f32 {
    f32::from_bits(decode_32_little_endian(buffer))
}

/// Writes the low `size` bytes of `value` MSB-first and returns `size`.
///
/// Used when the width of a field is only known at runtime (memory dumps,
/// logged variables). A size outside 1, 2, 4 or 8 writes nothing and returns 0.
pub fn encode_sized_big_endian(value: u64, size: u8, buffer: &mut [u8]) -> usize {
    match size {
        1 => encode_8_bits(value as u8, buffer),
        2 => encode_16_big_endian(value as u16, buffer),
        4 => encode_32_big_endian(value as u32, buffer),
        8 => encode_64_big_endian(value, buffer),
        _ => return 0,
    }
    size as usize
}

pub fn try_encode_16_big_endian(value: u16, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(2, buffer.len())?;
    encode_16_big_endian(value, buffer);
    Ok(2)
}

pub fn try_encode_32_big_endian(value: u32, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(4, buffer.len())?;
    encode_32_big_endian(value, buffer);
    Ok(4)
}

pub fn try_encode_64_big_endian(value: u64, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(8, buffer.len())?;
    encode_64_big_endian(value, buffer);
    Ok(8)
}

pub fn try_encode_16_little_endian(value: u16, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(2, buffer.len())?;
    encode_16_little_endian(value, buffer);
    Ok(2)
}

pub fn try_encode_32_little_endian(value: u32, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(4, buffer.len())?;
    encode_32_little_endian(value, buffer);
    Ok(4)
}

pub fn try_encode_64_little_endian(value: u64, buffer: &mut [u8]) -> Result<usize, CodecError> {
    ensure_capacity(8, buffer.len())?;
    encode_64_little_endian(value, buffer);
    Ok(8)
}

pub fn try_decode_16_big_endian(buffer: &[u8]) -> Result<u16, CodecError> {
    ensure_capacity(2, buffer.len())?;
    Ok(decode_16_big_endian(buffer))
}

pub fn try_decode_32_big_endian(buffer: &[u8]) -> Result<u32, CodecError> {
    ensure_capacity(4, buffer.len())?;
    Ok(decode_32_big_endian(buffer))
}

pub fn try_decode_64_big_endian(buffer: &[u8]) -> Result<u64, CodecError> {
    ensure_capacity(8, buffer.len())?;
    Ok(decode_64_big_endian(buffer))
}

pub fn try_decode_16_little_endian(buffer: &[u8]) -> Result<u16, CodecError> {
    ensure_capacity(2, buffer.len())?;
    Ok(decode_16_little_endian(buffer))
}

pub fn try_decode_32_little_endian(buffer: &[u8]) -> Result<u32, CodecError> {
    ensure_capacity(4, buffer.len())?;
    Ok(decode_32_little_endian(buffer))
}

pub fn try_decode_64_little_endian(buffer: &[u8]) -> Result<u64, CodecError> {
    ensure_capacity(8, buffer.len())?;
    Ok(decode_64_little_endian(buffer))
}

/// Byte order picked at runtime rather than by function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub fn encode_u16(self, value: u16, buffer: &mut [u8]) {
        match self {
            ByteOrder::BigEndian => encode_16_big_endian(value, buffer),
            ByteOrder::LittleEndian => encode_16_little_endian(value, buffer),
        }
    }

    pub fn encode_u32(self, value: u32, buffer: &mut [u8]) {
        match self {
            ByteOrder::BigEndian => encode_32_big_endian(value, buffer),
            ByteOrder::LittleEndian => encode_32_little_endian(value, buffer),
        }
    }

    pub fn encode_u64(self, value: u64, buffer: &mut [u8]) {
        match self {
            ByteOrder::BigEndian => encode_64_big_endian(value, buffer),
            ByteOrder::LittleEndian => encode_64_little_endian(value, buffer),
        }
    }

    pub fn decode_u16(self, buffer: &[u8]) -> u16 {
        match self {
            ByteOrder::BigEndian => decode_16_big_endian(buffer),
            ByteOrder::LittleEndian => decode_16_little_endian(buffer),
        }
    }

    pub fn decode_u32(self, buffer: &[u8]) -> u32 {
        match self {
            ByteOrder::BigEndian => decode_32_big_endian(buffer),
            ByteOrder::LittleEndian => decode_32_little_endian(buffer),
        }
    }

    pub fn decode_u64(self, buffer: &[u8]) -> u64 {
        match self {
            ByteOrder::BigEndian => decode_64_big_endian(buffer),
            ByteOrder::LittleEndian => decode_64_little_endian(buffer),
        }
    }
}

/// Integer serialized MSB-first through [`Encode`]/[`Decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigEndian<T>(pub T);

/// Integer serialized LSB-first through [`Encode`]/[`Decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LittleEndian<T>(pub T);

macro_rules! impl_wire_int {
    ($wrapper:ident, $int:ty, $width:literal, $try_encode:ident, $try_decode:ident) => {
        impl FixedWidth for $wrapper<$int> {
            const WIDTH: usize = $width;
        }

        impl Encode for $wrapper<$int> {
            type Error = CodecError;

            fn encode(&self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
                $try_encode(self.0, buffer)
            }
        }

        impl<'a> Decode<'a> for $wrapper<$int> {
            type Error = CodecError;

            fn decode(data: &'a [u8]) -> Result<Self, Self::Error> {
                $try_decode(data).map($wrapper)
            }
        }
    };
}

impl_wire_int!(BigEndian, u16, 2, try_encode_16_big_endian, try_decode_16_big_endian);
impl_wire_int!(BigEndian, u32, 4, try_encode_32_big_endian, try_decode_32_big_endian);
impl_wire_int!(BigEndian, u64, 8, try_encode_64_big_endian, try_decode_64_big_endian);
impl_wire_int!(LittleEndian, u16, 2, try_encode_16_little_endian, try_decode_16_little_endian);
impl_wire_int!(LittleEndian, u32, 4, try_encode_32_little_endian, try_decode_32_little_endian);
impl_wire_int!(LittleEndian, u64, 8, try_encode_64_little_endian, try_decode_64_little_endian);
