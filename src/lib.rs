#![no_std]

pub mod address;
pub mod checksum;
pub mod cursor;
pub mod endian;
mod error;

pub trait Encode {
    type Error;

    /// Writes `self` to the front of `buffer`, returning the bytes used.
    fn encode(&self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Decode<'a> where Self: Sized {
    type Error;

    fn decode(data: &'a [u8]) -> Result<Self, Self::Error>;
}

/// Values that always occupy the same number of bytes on the wire.
pub trait FixedWidth {
    const WIDTH: usize;
}

pub use address::{AddressCodec, AddressWidth};
pub use checksum::{FrameChecksum, crc32};
pub use cursor::{WireReader, WireWriter};
pub use endian::{BigEndian, ByteOrder, LittleEndian};
pub use error::CodecError;
