//! Constants and limits for bulk intake

/// Maximum number of serials produced by a single intake call.
///
/// Shared by range mode and list mode.
pub const MAX_BULK_ITEMS: usize = 1000;

/// Character used to left-pad generated numbers
pub const PAD_CHAR: char = '0';

/// Numeric base of the serial counter
pub const SERIAL_RADIX: u32 = 10;
