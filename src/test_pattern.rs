//! The fixed byte pattern each self-test transfer drives onto the SPI lines.

use crate::self_test::DELAY_INJECTION_INDEX;

/// The transfer pattern. Six bytes with a mix of runs and alternations, so a one-bit offset in
/// the captured stream is unambiguous at every byte boundary. The byte at index 3 (`0xA8`) is the
/// one whose transmit-buffer load the injected delay precedes.
pub const TEST_PATTERN: [u8; 6] = [0x56, 0x6E, 0x1C, 0xA8, 0xD3, 0xAD];
