//! Checked cursors for laying out and walking frame fields in order.
//!
//! A failed put or get leaves the cursor where it was, so the caller can
//! report the short frame without having consumed a partial field.

use crate::address::AddressCodec;
use crate::endian;
use crate::error::{CodecError, ensure_capacity};
use crate::{Decode, Encode, FixedWidth};

#[derive(Debug)]
pub struct WireWriter<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> WireWriter<'a> {
        WireWriter { buffer, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.position]
    }

    pub fn into_written(self) -> &'a mut [u8] {
        let WireWriter { buffer, position } = self;
        &mut buffer[..position]
    }

    fn reserve(&mut self, width: usize) -> Result<&mut [u8], CodecError> {
        ensure_capacity(width, self.remaining())?;
        let start = self.position;
        self.position += width;
        Ok(&mut self.buffer[start..start + width])
    }

    pub fn put_u8(&mut self, value: u8) -> Result<(), CodecError> {
        endian::encode_8_bits(value, self.reserve(1)?);
        Ok(())
    }

    pub fn put_u16_be(&mut self, value: u16) -> Result<(), CodecError> {
        endian::encode_16_big_endian(value, self.reserve(2)?);
        Ok(())
    }

    pub fn put_u32_be(&mut self, value: u32) -> Result<(), CodecError> {
        endian::encode_32_big_endian(value, self.reserve(4)?);
        Ok(())
    }

    pub fn put_u64_be(&mut self, value: u64) -> Result<(), CodecError> {
        endian::encode_64_big_endian(value, self.reserve(8)?);
        Ok(())
    }

    pub fn put_u16_le(&mut self, value: u16) -> Result<(), CodecError> {
        endian::encode_16_little_endian(value, self.reserve(2)?);
        Ok(())
    }

    pub fn put_u32_le(&mut self, value: u32) -> Result<(), CodecError> {
        endian::encode_32_little_endian(value, self.reserve(4)?);
        Ok(())
    }

    pub fn put_u64_le(&mut self, value: u64) -> Result<(), CodecError> {
        endian::encode_64_little_endian(value, self.reserve(8)?);
        Ok(())
    }

    pub fn put_slice(&mut self, data: &[u8]) -> Result<(), CodecError> {
        self.reserve(data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Writes an address at the codec's width.
    pub fn put_address(&mut self, codec: &AddressCodec, address: u64) -> Result<(), CodecError> {
        let field = self.reserve(codec.width().bytes())?;
        codec.encode_address_big_endian(field, address);
        Ok(())
    }

    pub fn put<E>(&mut self, value: &E) -> Result<(), CodecError>
    where
        E: Encode<Error = CodecError>,
    {
        let written = value.encode(&mut self.buffer[self.position..])?;
        self.position += written;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> WireReader<'a> {
        WireReader { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn take(&mut self, width: usize) -> Result<&'a [u8], CodecError> {
        ensure_capacity(width, self.remaining())?;
        let data = self.data;
        let start = self.position;
        self.position += width;
        Ok(&data[start..start + width])
    }

    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        Ok(endian::decode_8_bits(self.take(1)?))
    }

    pub fn get_u16_be(&mut self) -> Result<u16, CodecError> {
        Ok(endian::decode_16_big_endian(self.take(2)?))
    }

    pub fn get_u32_be(&mut self) -> Result<u32, CodecError> {
        Ok(endian::decode_32_big_endian(self.take(4)?))
    }

    pub fn get_u64_be(&mut self) -> Result<u64, CodecError> {
        Ok(endian::decode_64_big_endian(self.take(8)?))
    }

    pub fn get_u16_le(&mut self) -> Result<u16, CodecError> {
        Ok(endian::decode_16_little_endian(self.take(2)?))
    }

    pub fn get_u32_le(&mut self) -> Result<u32, CodecError> {
        Ok(endian::decode_32_little_endian(self.take(4)?))
    }

    pub fn get_u64_le(&mut self) -> Result<u64, CodecError> {
        Ok(endian::decode_64_little_endian(self.take(8)?))
    }

    pub fn get_slice(&mut self, length: usize) -> Result<&'a [u8], CodecError> {
        self.take(length)
    }

    pub fn get_address(&mut self, codec: &AddressCodec) -> Result<u64, CodecError> {
        let field = self.take(codec.width().bytes())?;
        let mut address = 0;
        codec.decode_address_big_endian(field, &mut address);
        Ok(address)
    }

    /// Decodes a fixed-width value and advances past exactly `D::WIDTH` bytes.
    pub fn get<D>(&mut self) -> Result<D, CodecError>
    where
        D: Decode<'a, Error = CodecError> + FixedWidth,
    {
        ensure_capacity(D::WIDTH, self.remaining())?;
        let data = self.data;
        let value = D::decode(&data[self.position..self.position + D::WIDTH])?;
        self.position += D::WIDTH;
        Ok(value)
    }
}
