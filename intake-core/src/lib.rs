//! # Intake Core
//!
//! Serial range expansion and bulk stock intake for barcode-tracked inventory.
//!
//! ## Modules
//!
//! - `constants`: Intake limits shared by every mode
//! - `error`: Validation error taxonomy
//! - `serial`: Serial parsing (prefix, trailing digit run, suffix)
//! - `range`: Range expansion with zero padding
//! - `list`: Newline-delimited list intake
//! - `intake`: Unified bulk-intake resolver, previews and conflict checks

#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod intake;
pub mod list;
pub mod range;
pub mod serial;

// Re-export commonly used types
pub use error::{ErrorKind, IntakeError};
pub use intake::{
    expand_serial_range, find_conflicts, resolve_scan_pair, resolve_serials, ExpansionResult,
    IntakeLimits, IntakePreview, IntakeRequest,
};
pub use list::parse_serial_list;
pub use range::{expand, SerialRange};
pub use serial::ParsedSerial;

/// Result type alias for intake operations
pub type Result<T> = core::result::Result<T, IntakeError>;
