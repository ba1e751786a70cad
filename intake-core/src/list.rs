//! Newline-delimited list intake

use crate::constants::MAX_BULK_ITEMS;
use crate::error::IntakeError;
use std::collections::HashSet;

#[cfg(feature = "logging")]
use tracing::debug;

/// Parse an explicit list of serials, one per line
///
/// Entries are trimmed and blank lines dropped. The list must be non-empty,
/// hold at most [`MAX_BULK_ITEMS`] entries and contain no exact duplicates.
pub fn parse_serial_list(text: &str) -> Result<Vec<String>, IntakeError> {
    parse_serial_list_with_limit(text, MAX_BULK_ITEMS)
}

/// Like [`parse_serial_list`] with a caller-chosen cap
pub fn parse_serial_list_with_limit(text: &str, max: usize) -> Result<Vec<String>, IntakeError> {
    let entries: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(IntakeError::EmptyList);
    }

    if entries.len() > max {
        return Err(IntakeError::TooManyItems {
            requested: entries.len(),
            max,
        });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(*entry) {
            #[cfg(feature = "logging")]
            debug!("Rejecting list with duplicate entry {:?}", entry);

            return Err(IntakeError::DuplicateSerial((*entry).to_string()));
        }
    }

    Ok(entries.into_iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_trims_and_skips_blank_lines() {
        let serials = parse_serial_list("  A1 \n\nA2\r\n\t\nA3").unwrap();
        assert_eq!(serials, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_list_empty() {
        assert_eq!(parse_serial_list(""), Err(IntakeError::EmptyList));
        assert_eq!(parse_serial_list(" \n \r\n"), Err(IntakeError::EmptyList));
    }

    #[test]
    fn test_list_duplicate_is_case_sensitive() {
        assert_eq!(
            parse_serial_list("A1\nB2\nA1"),
            Err(IntakeError::DuplicateSerial("A1".into()))
        );
        assert_eq!(parse_serial_list("a1\nA1").unwrap(), vec!["a1", "A1"]);
    }

    #[test]
    fn test_list_duplicate_after_trim() {
        assert_eq!(
            parse_serial_list("A1\n  A1  "),
            Err(IntakeError::DuplicateSerial("A1".into()))
        );
    }

    #[test]
    fn test_list_cap() {
        let text: String = (0..1001).map(|i| format!("S{}\n", i)).collect();
        assert_eq!(
            parse_serial_list(&text),
            Err(IntakeError::TooManyItems {
                requested: 1001,
                max: 1000
            })
        );

        let text: String = (0..1000).map(|i| format!("S{}\n", i)).collect();
        assert_eq!(parse_serial_list(&text).unwrap().len(), 1000);
    }

    #[test]
    fn test_list_keeps_order() {
        let serials = parse_serial_list("Z9\nA1\nM5").unwrap();
        assert_eq!(serials, vec!["Z9", "A1", "M5"]);
    }
}
