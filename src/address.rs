//! Memory address fields.
//!
//! An address travels as `W` bytes, most significant byte first, where `W` is
//! the pointer width of the target. Both ends agree on `W` out of band; the
//! host side configures an [`AddressCodec`] with the width the target reports,
//! the target side simply uses [`AddressCodec::native`]. Every operation
//! returns the number of bytes it consumed so a parser can advance its cursor
//! without knowing `W` itself.

use core::mem::size_of;

use crate::error::{CodecError, ensure_capacity};

const _: () = assert!(
    matches!(size_of::<usize>(), 1 | 2 | 4 | 8),
    "unsupported pointer width"
);

/// Number of bytes an address occupies on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressWidth {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl AddressWidth {
    /// Pointer width of the build.
    pub const NATIVE: AddressWidth = match size_of::<usize>() {
        1 => AddressWidth::One,
        2 => AddressWidth::Two,
        4 => AddressWidth::Four,
        _ => AddressWidth::Eight,
    };

    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Largest address that survives a round trip at this width.
    pub const fn max_address(self) -> u64 {
        match self {
            AddressWidth::Eight => u64::MAX,
            w => (1u64 << (w.bytes() * 8)) - 1,
        }
    }
}

impl TryFrom<u8> for AddressWidth {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AddressWidth::One),
            2 => Ok(AddressWidth::Two),
            4 => Ok(AddressWidth::Four),
            8 => Ok(AddressWidth::Eight),
            w => Err(CodecError::UnsupportedAddressWidth(w)),
        }
    }
}

impl From<AddressWidth> for u8 {
    fn from(value: AddressWidth) -> Self {
        value as u8
    }
}

/// Encodes and decodes addresses at one fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCodec {
    width: AddressWidth,
}

impl AddressCodec {
    pub fn new(width: AddressWidth) -> AddressCodec {
        log::debug!("address codec configured for {} byte addresses", width.bytes());
        AddressCodec { width }
    }

    /// Codec for the pointer width of the running build.
    pub fn native() -> AddressCodec {
        AddressCodec::new(AddressWidth::NATIVE)
    }

    pub fn width(&self) -> AddressWidth {
        self.width
    }

    /// Writes the low `W` bytes of `address` MSB-first and returns `W`.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than `W`.
    pub fn encode_address_big_endian(&self, buffer: &mut [u8], address: u64) -> usize {
        let w = self.width.bytes();
        let bytes = address.to_be_bytes();
        buffer[..w].copy_from_slice(&bytes[bytes.len() - w..]);
        w
    }

    /// Same as [`encode_address_big_endian`](Self::encode_address_big_endian)
    /// for the address `pointer` refers to.
    pub fn encode_pointer_big_endian<T>(&self, buffer: &mut [u8], pointer: *const T) -> usize {
        self.encode_address_big_endian(buffer, pointer.addr() as u64)
    }

    /// Reads `W` bytes MSB-first into `address` and returns `W`.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than `W`.
    pub fn decode_address_big_endian(&self, buffer: &[u8], address: &mut u64) -> usize {
        let w = self.width.bytes();
        let mut bytes = [0; 8];
        bytes[8 - w..].copy_from_slice(&buffer[..w]);
        *address = u64::from_be_bytes(bytes);
        w
    }

    pub fn try_encode_address_big_endian(
        &self,
        buffer: &mut [u8],
        address: u64,
    ) -> Result<usize, CodecError> {
        ensure_capacity(self.width.bytes(), buffer.len())?;
        Ok(self.encode_address_big_endian(buffer, address))
    }

    pub fn try_encode_pointer_big_endian<T>(
        &self,
        buffer: &mut [u8],
        pointer: *const T,
    ) -> Result<usize, CodecError> {
        self.try_encode_address_big_endian(buffer, pointer.addr() as u64)
    }

    pub fn try_decode_address_big_endian(
        &self,
        buffer: &[u8],
        address: &mut u64,
    ) -> Result<usize, CodecError> {
        ensure_capacity(self.width.bytes(), buffer.len())?;
        Ok(self.decode_address_big_endian(buffer, address))
    }
}

impl Default for AddressCodec {
    fn default() -> Self {
        AddressCodec::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_byte_scenario() {
        let codec = AddressCodec::new(AddressWidth::Four);
        let mut buf = [0; 4];
        assert_eq!(codec.encode_address_big_endian(&mut buf, 0x12345678), 4);
        assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn round_trip_every_width() {
        for (width, addr) in [
            (AddressWidth::One, 0xA5),
            (AddressWidth::Two, 0xBEEF),
            (AddressWidth::Four, 0xDEADBEEF),
            (AddressWidth::Eight, 0x0123_4567_89AB_CDEF),
        ] {
            let codec = AddressCodec::new(width);
            let mut buf = [0; 8];
            let written = codec.encode_address_big_endian(&mut buf, addr);
            let mut decoded = 0;
            let read = codec.decode_address_big_endian(&buf, &mut decoded);
            assert_eq!(written, width.bytes());
            assert_eq!(read, width.bytes());
            assert_eq!(decoded, addr);
        }
    }

    #[test]
    fn wide_addresses_are_truncated() {
        let codec = AddressCodec::new(AddressWidth::Two);
        let mut buf = [0xEE; 4];
        assert_eq!(codec.encode_address_big_endian(&mut buf, 0x1122_3344), 2);
        assert_eq!(buf, [0x33, 0x44, 0xEE, 0xEE]);
    }

    #[test]
    fn max_addresses() {
        assert_eq!(AddressWidth::One.max_address(), 0xFF);
        assert_eq!(AddressWidth::Two.max_address(), 0xFFFF);
        assert_eq!(AddressWidth::Four.max_address(), 0xFFFF_FFFF);
        assert_eq!(AddressWidth::Eight.max_address(), u64::MAX);
    }

    #[test]
    fn width_from_wire_byte() {
        assert_eq!(AddressWidth::try_from(4), Ok(AddressWidth::Four));
        assert_eq!(u8::from(AddressWidth::Eight), 8);
        assert_eq!(
            AddressWidth::try_from(3),
            Err(CodecError::UnsupportedAddressWidth(3))
        );
    }

    #[test]
    fn native_width_matches_usize() {
        assert_eq!(AddressWidth::NATIVE.bytes(), size_of::<usize>());
        assert_eq!(AddressCodec::default().width(), AddressWidth::NATIVE);
    }

    #[test]
    fn pointer_encodes_like_its_address() {
        let value = 42u32;
        let pointer: *const u32 = &value;
        let codec = AddressCodec::native();

        let mut from_pointer = [0; 8];
        let mut from_address = [0; 8];
        let n = codec.encode_pointer_big_endian(&mut from_pointer, pointer);
        codec.encode_address_big_endian(&mut from_address, pointer as usize as u64);
        assert_eq!(n, size_of::<usize>());
        assert_eq!(from_pointer, from_address);

        let mut decoded = 0;
        codec.decode_address_big_endian(&from_pointer, &mut decoded);
        assert_eq!(decoded as usize, pointer as usize);
    }

    #[test]
    fn checked_path_reports_capacity() {
        let codec = AddressCodec::new(AddressWidth::Eight);
        let mut buf = [0; 4];
        assert_eq!(
            codec.try_encode_address_big_endian(&mut buf, 1),
            Err(CodecError::BufferTooSmall { expected: 8, found: 4 })
        );
        let mut addr = 7;
        assert!(codec.try_decode_address_big_endian(&buf, &mut addr).is_err());
        assert_eq!(addr, 7);

        let codec = AddressCodec::new(AddressWidth::Four);
        assert_eq!(codec.try_encode_address_big_endian(&mut buf, 0xCAFE_F00D), Ok(4));
        assert_eq!(codec.try_decode_address_big_endian(&buf, &mut addr), Ok(4));
        assert_eq!(addr, 0xCAFE_F00D);
    }

    #[test]
    fn checked_pointer_encoding() {
        let value = 7u8;
        let pointer: *const u8 = &value;
        let codec = AddressCodec::native();
        let width = AddressWidth::NATIVE.bytes();

        let mut short = [0xEEu8; 8];
        assert_eq!(
            codec.try_encode_pointer_big_endian(&mut short[..width - 1], pointer),
            Err(CodecError::BufferTooSmall { expected: width, found: width - 1 })
        );
        assert_eq!(short, [0xEE; 8]);

        let mut buf = [0u8; 8];
        assert_eq!(codec.try_encode_pointer_big_endian(&mut buf, pointer), Ok(width));
        let mut decoded = 0;
        codec.decode_address_big_endian(&buf, &mut decoded);
        assert_eq!(decoded as usize, pointer as usize);
    }
}
