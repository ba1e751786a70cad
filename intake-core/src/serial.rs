//! Serial parsing
//!
//! A serial splits into the text before its last run of decimal digits, the
//! run itself, and the text after it. Only ASCII `0`-`9` count as digits.

use crate::constants::SERIAL_RADIX;

/// A serial split around its rightmost maximal digit run
///
/// All three parts borrow from the original string and concatenate back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSerial<'a> {
    /// Text before the digit run
    pub prefix: &'a str,

    /// The digit run (non-empty, ASCII digits only)
    pub digits: &'a str,

    /// Text after the digit run
    pub suffix: &'a str,
}

impl<'a> ParsedSerial<'a> {
    /// Parse a serial, returning `None` when it contains no decimal digit
    ///
    /// Earlier digit runs stay in the prefix: `"A1B23"` yields
    /// `("A1B", "23", "")`.
    pub fn parse(serial: &'a str) -> Option<Self> {
        let bytes = serial.as_bytes();

        // ASCII digits never occur inside a multi-byte UTF-8 sequence, so the
        // byte offsets found here are always char boundaries.
        let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
        let start = bytes[..end]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |pos| pos + 1);

        Some(Self {
            prefix: &serial[..start],
            digits: &serial[start..end],
            suffix: &serial[end..],
        })
    }

    /// Numeric value of the digit run, or `None` if it does not fit in a `u64`
    ///
    /// Leading zeros are insignificant.
    pub fn value(&self) -> Option<u64> {
        self.digits.bytes().try_fold(0u64, |acc, b| {
            acc.checked_mul(SERIAL_RADIX as u64)?
                .checked_add(u64::from(b - b'0'))
        })
    }

    /// Width of the digit run as written, leading zeros included
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Whether `other` belongs to the same serial family (same prefix and suffix)
    pub fn same_family(&self, other: &ParsedSerial<'_>) -> bool {
        self.prefix == other.prefix && self.suffix == other.suffix
    }
}
