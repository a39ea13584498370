//! Log-formatting helpers for dumping a transfer pattern the way it appears on the wire.

/// A wrapper struct whose [core::fmt::Display] implementation prints each byte of the provided
/// data with the provided formatting function, separated by single spaces.
struct FormatBytes<'a, F> {
    data: &'a [u8],
    elem_formatter: F,
}
impl<'a, F, R> core::fmt::Display for FormatBytes<'a, F>
where
    F: Fn(&'a u8) -> R,
    R: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, elem) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", (self.elem_formatter)(elem))?;
        }
        Ok(())
    }
}

/// A byte formatter that prints the value in hexadecimal format.
struct HexFormatter<'a>(&'a u8);
impl<'a> core::fmt::Display for HexFormatter<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// A byte formatter that prints the value in binary, most significant bit first. The peripheral
/// shifts bytes out MSB first, so the printed bit stream reads left to right in transmission
/// order and can be compared one-for-one against an analyser capture.
struct BinaryFormatter<'a>(&'a u8);
impl<'a> core::fmt::Display for BinaryFormatter<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

/// Logs the given pattern in hexadecimal and in wire bit order, for checking a capture against
/// the bytes that were actually loaded.
pub fn log_pattern(log_level: log::Level, data: &[u8]) {
    log::log!(
        log_level,
        "pattern ({} bytes): {}",
        data.len(),
        FormatBytes {
            data,
            elem_formatter: HexFormatter
        }
    );
    log::log!(
        log_level,
        "wire bits (MSB first): {}",
        FormatBytes {
            data,
            elem_formatter: BinaryFormatter
        }
    );
}
