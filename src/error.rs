use core::fmt;

/// Error type for the checked codec operations and the wire cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer cannot hold the field being encoded or decoded.
    BufferTooSmall {
        expected: usize,
        found: usize,
    },
    /// Address widths are limited to 1, 2, 4 or 8 bytes.
    UnsupportedAddressWidth(u8),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::BufferTooSmall { expected, found } => {
                write!(f, "buffer too small: need {expected} bytes, have {found}")
            }
            CodecError::UnsupportedAddressWidth(width) => {
                write!(f, "unsupported address width of {width} bytes")
            }
        }
    }
}

impl core::error::Error for CodecError {}

/// Fails with `BufferTooSmall` unless `available` covers `required` bytes.
pub(crate) fn ensure_capacity(required: usize, available: usize) -> Result<(), CodecError> {
    if available < required {
        log::trace!("capacity check failed: need {required} bytes, have {available}");
        return Err(CodecError::BufferTooSmall {
            expected: required,
            found: available,
        });
    }
    Ok(())
}
