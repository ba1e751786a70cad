//! Error types for intake operations

/// Errors that can occur while resolving serials for bulk intake
///
/// Every variant is a validation failure with a user-presentable message;
/// none of them indicate a system fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// One of the endpoints has no usable numeric run
    #[error("no numeric component found; a range requires both endpoints to contain a trailing numeric run")]
    MissingNumericComponent,

    /// Prefix or suffix differs between the endpoints
    #[error("non-numeric parts of the two serials differ: {start:?} vs {end:?}")]
    PrefixSuffixMismatch {
        /// Start serial as given.
        start: String,
        /// End serial as given.
        end: String,
    },

    /// Start number is greater than end number
    #[error("start of range exceeds end of range: {start} > {end}")]
    ReversedRange {
        /// Numeric value of the start serial.
        start: u64,
        /// Numeric value of the end serial.
        end: u64,
    },

    /// Range would generate more serials than allowed
    #[error("range too large; a maximum of {max} items may be generated in one call, but {requested} were requested")]
    RangeTooLarge {
        /// Number of serials the range spans.
        requested: u128,
        /// Configured per-call maximum.
        max: usize,
    },

    /// List input holds more entries than allowed
    #[error("too many serials; a maximum of {max} items may be added in one call, but {requested} were given")]
    TooManyItems {
        /// Number of entries in the list.
        requested: usize,
        /// Configured per-call maximum.
        max: usize,
    },

    /// List input has no entries
    #[error("no serials given; enter at least one serial per line")]
    EmptyList,

    /// List input repeats an entry
    #[error("duplicate serial in list: {0}")]
    DuplicateSerial(String),
}

/// Coarse classification of [`IntakeError`] for callers that branch on the
/// failure category rather than its details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Endpoint without a representable digit run
    MissingNumericComponent,
    /// Endpoints belong to different serial families
    PrefixSuffixMismatch,
    /// Start exceeds end
    ReversedRange,
    /// Request exceeds the per-call cap
    RangeTooLarge,
    /// Malformed list input (empty or duplicated)
    InvalidList,
}

impl IntakeError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntakeError::MissingNumericComponent => ErrorKind::MissingNumericComponent,
            IntakeError::PrefixSuffixMismatch { .. } => ErrorKind::PrefixSuffixMismatch,
            IntakeError::ReversedRange { .. } => ErrorKind::ReversedRange,
            IntakeError::RangeTooLarge { .. } | IntakeError::TooManyItems { .. } => {
                ErrorKind::RangeTooLarge
            }
            IntakeError::EmptyList | IntakeError::DuplicateSerial(_) => ErrorKind::InvalidList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_too_large_message_names_cap_and_count() {
        let err = IntakeError::RangeTooLarge {
            requested: 1001,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "range too large; a maximum of 1000 items may be generated in one call, but 1001 were requested"
        );
    }

    #[test]
    fn test_list_cap_shares_range_kind() {
        let err = IntakeError::TooManyItems {
            requested: 2000,
            max: 1000,
        };
        assert_eq!(err.kind(), ErrorKind::RangeTooLarge);
        assert_eq!(
            IntakeError::DuplicateSerial("A1".into()).kind(),
            ErrorKind::InvalidList
        );
    }
}
