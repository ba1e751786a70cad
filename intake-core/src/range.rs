//! Serial range expansion
//!
//! Two serials from the same family (identical prefix and suffix) expand to
//! every serial between them, inclusive, with the counter zero-padded to the
//! wider of the two endpoints.

use crate::constants::{MAX_BULK_ITEMS, PAD_CHAR};
use crate::error::IntakeError;
use crate::serial::ParsedSerial;

#[cfg(feature = "logging")]
use tracing::debug;

/// A validated serial range that has not been materialized yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialRange {
    prefix: String,
    suffix: String,
    start: u64,
    end: u64,
    width: usize,
}

impl SerialRange {
    /// Validate two endpoints and build the range
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. both endpoints contain a representable digit run
    /// 2. prefixes and suffixes match exactly
    /// 3. start does not exceed end
    ///
    /// No size limit is applied here; see [`SerialRange::check_limit`].
    pub fn new(start: &str, end: &str) -> Result<Self, IntakeError> {
        let (first, last) = match (ParsedSerial::parse(start), ParsedSerial::parse(end)) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(IntakeError::MissingNumericComponent),
        };

        if !first.same_family(&last) {
            return Err(IntakeError::PrefixSuffixMismatch {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let (start_num, end_num) = match (first.value(), last.value()) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(IntakeError::MissingNumericComponent),
        };

        if start_num > end_num {
            return Err(IntakeError::ReversedRange {
                start: start_num,
                end: end_num,
            });
        }

        Ok(Self {
            prefix: first.prefix.to_string(),
            suffix: first.suffix.to_string(),
            start: start_num,
            end: end_num,
            width: first.width().max(last.width()),
        })
    }

    /// Number of serials in the range
    ///
    /// Computed arithmetically; a full `u64` span has 2^64 members, hence `u128`.
    pub fn len(&self) -> u128 {
        u128::from(self.end) - u128::from(self.start) + 1
    }

    /// Always false: a valid range holds at least one serial
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reject the range if it spans more than `max` serials
    pub fn check_limit(&self, max: usize) -> Result<(), IntakeError> {
        let requested = self.len();
        if requested > max as u128 {
            return Err(IntakeError::RangeTooLarge { requested, max });
        }
        Ok(())
    }

    /// Minimum width of the rendered counter
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render one counter value as a serial of this family
    pub fn render(&self, value: u64) -> String {
        let digits = value.to_string();
        let pad = self.width.saturating_sub(digits.len());

        let mut serial =
            String::with_capacity(self.prefix.len() + pad + digits.len() + self.suffix.len());
        serial.push_str(&self.prefix);
        serial.extend(core::iter::repeat(PAD_CHAR).take(pad));
        serial.push_str(&digits);
        serial.push_str(&self.suffix);
        serial
    }

    /// First serial of the range
    pub fn first(&self) -> String {
        self.render(self.start)
    }

    /// Last serial of the range
    pub fn last(&self) -> String {
        self.render(self.end)
    }

    /// Iterate the serials lazily in ascending order
    pub fn iter(&self) -> SerialRangeIter<'_> {
        SerialRangeIter {
            range: self,
            next: Some(self.start),
        }
    }

    /// Materialize the range, refusing anything above `max` serials
    pub fn expand_with_limit(&self, max: usize) -> Result<Vec<String>, IntakeError> {
        self.check_limit(max)?;
        Ok(self.iter().collect())
    }
}

/// Ascending iterator over the serials of a [`SerialRange`]
#[derive(Debug, Clone)]
pub struct SerialRangeIter<'a> {
    range: &'a SerialRange,
    next: Option<u64>,
}

impl Iterator for SerialRangeIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let value = self.next?;
        self.next = if value < self.range.end {
            Some(value + 1)
        } else {
            None
        };
        Some(self.range.render(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(value) => {
                let remaining = u128::from(self.range.end) - u128::from(value) + 1;
                match usize::try_from(remaining) {
                    Ok(n) => (n, Some(n)),
                    Err(_) => (usize::MAX, None),
                }
            }
            None => (0, Some(0)),
        }
    }
}

impl<'a> IntoIterator for &'a SerialRange {
    type Item = String;
    type IntoIter = SerialRangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Expand two serials into the inclusive, zero-padded sequence between them
///
/// At most [`MAX_BULK_ITEMS`] serials are generated; larger ranges fail with
/// [`IntakeError::RangeTooLarge`] before anything is allocated.
pub fn expand(start: &str, end: &str) -> Result<Vec<String>, IntakeError> {
    expand_with_limit(start, end, MAX_BULK_ITEMS)
}

/// Like [`expand`] with a caller-chosen cap
pub fn expand_with_limit(start: &str, end: &str, max: usize) -> Result<Vec<String>, IntakeError> {
    let range = SerialRange::new(start, end)?;

    #[cfg(feature = "logging")]
    debug!(
        "Expanding {} serials from {:?} to {:?} (width {})",
        range.len(),
        start,
        end,
        range.width()
    );

    range.expand_with_limit(max)
}
