//! CRC-32 frame checksum.
//!
//! Reflected polynomial 0xEDB88320 with complemented input and output
//! (CRC-32/ISO-HDLC, the zip/Ethernet CRC). This layer only computes; comparing
//! against a received trailer is up to the frame engine.
//!
//! The seed passed to [`crc32`] is a previous result, which makes the checksum
//! chainable: `crc32(b, crc32(a, 0)) == crc32(a ++ b, 0)`.

use crc::{CRC_32_ISO_HDLC, Crc, Digest};

static FRAME_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

// The register starts at the complement of the seed. The crc crate takes its
// initial value unreflected for reflected algorithms.
fn initial_register(start_value: u32) -> u32 {
    (!start_value).reverse_bits()
}

/// CRC-32 of `data`, continuing from `start_value` (0 for a fresh checksum).
pub fn crc32(data: &[u8], start_value: u32) -> u32 {
    let mut digest = FRAME_CRC.digest_with_initial(initial_register(start_value));
    digest.update(data);
    digest.finalize()
}

/// Running checksum over a frame held in several buffers.
pub struct FrameChecksum {
    digest: Digest<'static, u32>,
}

impl FrameChecksum {
    pub fn new() -> FrameChecksum {
        FrameChecksum::with_start(0)
    }

    /// Continue from the checksum of bytes that were already processed.
    pub fn with_start(start_value: u32) -> FrameChecksum {
        FrameChecksum {
            digest: FRAME_CRC.digest_with_initial(initial_register(start_value)),
        }
    }

    pub fn update(&mut self, data: &[u8]) -> &mut FrameChecksum {
        self.digest.update(data);
        self
    }

    pub fn finalize(self) -> u32 {
        self.digest.finalize()
    }
}

impl Default for FrameChecksum {
    fn default() -> Self {
        FrameChecksum::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    #[test]
    fn known_vectors() {
        assert_eq!(crc32(b"", 0), 0);
        assert_eq!(crc32(b"123456789", 0), 0xCBF43926);
        assert_eq!(crc32(&DATA, 0), 622876539);
    }

    #[test]
    fn split_computation() {
        let head = crc32(&DATA[..5], 0);
        assert_eq!(crc32(&DATA[5..], head), 622876539);
    }

    #[test]
    fn empty_segment_keeps_seed() {
        let crc = crc32(b"123456789", 0);
        assert_eq!(crc32(&[], crc), crc);
    }

    // Bit-serial reference: complement the seed, shift out each bit LSB first.
    fn bitwise(data: &[u8], start_value: u32) -> u32 {
        let mut crc = !start_value;
        for &byte in data {
            crc ^= byte as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 {
                    (crc >> 1) ^ 0xEDB88320
                } else {
                    crc >> 1
                };
            }
        }
        !crc
    }

    #[test]
    fn matches_bit_serial_form() {
        for seed in [0, 1, 0xDEADBEEF, u32::MAX] {
            assert_eq!(crc32(&DATA, seed), bitwise(&DATA, seed));
            assert_eq!(crc32(b"frame", seed), bitwise(b"frame", seed));
        }
    }

    #[test]
    fn streaming_header_then_payload() {
        let header = [0x81, 0x02, 0x00, 0x03];
        let payload = [0xAA, 0xBB, 0xCC];

        let mut checksum = FrameChecksum::new();
        checksum.update(&header).update(&payload);
        let streamed = checksum.finalize();

        assert_eq!(streamed, crc32(&payload, crc32(&header, 0)));

        let mut resumed = FrameChecksum::with_start(crc32(&header, 0));
        resumed.update(&payload);
        assert_eq!(resumed.finalize(), streamed);
    }
}
