//! Unified bulk-intake resolution
//!
//! Range mode, list mode and scan pairs all resolve to the same ordered list
//! of serials through [`resolve_serials`], so form handlers and scan handlers
//! consume them identically.

use crate::constants::MAX_BULK_ITEMS;
use crate::error::IntakeError;
use crate::list::parse_serial_list_with_limit;
use crate::range::expand_with_limit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Per-call limits applied when resolving serials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeLimits {
    /// Maximum number of serials one call may produce
    pub max_items: usize,
}

impl IntakeLimits {
    /// Create limits, clamping `max_items` to [`MAX_BULK_ITEMS`]
    pub fn new(max_items: usize) -> Self {
        if max_items > MAX_BULK_ITEMS {
            #[cfg(feature = "logging")]
            warn!(
                "Requested item cap {} exceeds hard limit, using {}",
                max_items, MAX_BULK_ITEMS
            );
        }
        Self {
            max_items: max_items.min(MAX_BULK_ITEMS),
        }
    }

    /// Effective cap, never above [`MAX_BULK_ITEMS`]
    ///
    /// Values deserialized directly bypass [`IntakeLimits::new`], so the clamp
    /// is applied again here.
    pub fn cap(&self) -> usize {
        self.max_items.min(MAX_BULK_ITEMS)
    }
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_items: MAX_BULK_ITEMS,
        }
    }
}

/// A bulk-intake request in any supported mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum IntakeRequest {
    /// Expand every serial between two endpoints
    Range {
        /// First serial of the range
        start: String,
        /// Last serial of the range
        end: String,
    },

    /// Take an explicit newline-delimited list
    List {
        /// One serial per line
        text: String,
    },

    /// Two consecutive barcode scans used as range endpoints
    Scan {
        /// First scanned barcode
        first: String,
        /// Second scanned barcode
        second: String,
    },
}

impl IntakeRequest {
    /// Resolve this request into the serials to add
    pub fn resolve(&self, limits: &IntakeLimits) -> Result<Vec<String>, IntakeError> {
        resolve_serials(self, limits)
    }
}

/// Resolve serials for bulk intake, whichever mode the request uses
pub fn resolve_serials(
    request: &IntakeRequest,
    limits: &IntakeLimits,
) -> Result<Vec<String>, IntakeError> {
    let max = limits.cap();

    let result = match request {
        IntakeRequest::Range { start, end } => expand_with_limit(start, end, max),
        IntakeRequest::List { text } => parse_serial_list_with_limit(text, max),
        IntakeRequest::Scan { first, second } => resolve_scan_pair(first, second, limits),
    };

    #[cfg(feature = "logging")]
    match &result {
        Ok(serials) => debug!("Resolved {} serials for intake", serials.len()),
        Err(e) => debug!("Intake request rejected: {}", e),
    }

    result
}

/// Resolve two scanned barcodes as a range
///
/// Scanners commonly terminate each read with a newline or pad it with
/// spaces; surrounding whitespace is stripped before expansion.
pub fn resolve_scan_pair(
    first: &str,
    second: &str,
    limits: &IntakeLimits,
) -> Result<Vec<String>, IntakeError> {
    expand_with_limit(first.trim(), second.trim(), limits.cap())
}

/// Outcome of a range expansion in the shape presented to form handlers:
/// `{"ok": true, "serials": [...]}` or `{"ok": false, "reason": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ExpansionWire", try_from = "ExpansionWire")]
pub enum ExpansionResult {
    /// Serials were resolved
    Ok {
        /// Resolved serials in ascending (range) or input (list) order
        serials: Vec<String>,
    },

    /// Validation failed
    Err {
        /// User-presentable failure message
        reason: String,
    },
}

impl ExpansionResult {
    /// Whether the expansion succeeded
    pub fn is_ok(&self) -> bool {
        matches!(self, ExpansionResult::Ok { .. })
    }

    /// Resolved serials, if any
    pub fn serials(&self) -> Option<&[String]> {
        match self {
            ExpansionResult::Ok { serials } => Some(serials.as_slice()),
            ExpansionResult::Err { .. } => None,
        }
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            ExpansionResult::Ok { .. } => None,
            ExpansionResult::Err { reason } => Some(reason.as_str()),
        }
    }
}

impl From<Result<Vec<String>, IntakeError>> for ExpansionResult {
    fn from(result: Result<Vec<String>, IntakeError>) -> Self {
        match result {
            Ok(serials) => ExpansionResult::Ok { serials },
            Err(e) => ExpansionResult::Err {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ExpansionWire {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    serials: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<ExpansionResult> for ExpansionWire {
    fn from(result: ExpansionResult) -> Self {
        match result {
            ExpansionResult::Ok { serials } => ExpansionWire {
                ok: true,
                serials: Some(serials),
                reason: None,
            },
            ExpansionResult::Err { reason } => ExpansionWire {
                ok: false,
                serials: None,
                reason: Some(reason),
            },
        }
    }
}

impl TryFrom<ExpansionWire> for ExpansionResult {
    type Error = String;

    fn try_from(wire: ExpansionWire) -> Result<Self, Self::Error> {
        match (wire.ok, wire.serials, wire.reason) {
            (true, Some(serials), None) => Ok(ExpansionResult::Ok { serials }),
            (false, None, Some(reason)) => Ok(ExpansionResult::Err { reason }),
            (true, _, _) => Err("successful result must carry serials and no reason".to_string()),
            (false, _, _) => Err("failed result must carry a reason and no serials".to_string()),
        }
    }
}

/// Expand a serial range into the form-handler result shape
pub fn expand_serial_range(start: &str, end: &str) -> ExpansionResult {
    expand_with_limit(start, end, MAX_BULK_ITEMS).into()
}

/// Summary of resolved serials for preview surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePreview {
    /// Number of serials
    pub count: usize,

    /// First serial, if any
    pub first: Option<String>,

    /// Last serial, if any
    pub last: Option<String>,
}

impl IntakePreview {
    /// Summarize a resolved list
    pub fn of(serials: &[String]) -> Self {
        Self {
            count: serials.len(),
            first: serials.first().cloned(),
            last: serials.last().cloned(),
        }
    }
}

/// Candidate serials that already exist in stock, in candidate order
///
/// Matching is exact and case-sensitive.
pub fn find_conflicts<'a, S>(candidates: &'a [String], existing: &[S]) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let existing: HashSet<&str> = existing.iter().map(|s| s.as_ref()).collect();

    let conflicts: Vec<&str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|serial| existing.contains(serial))
        .collect();

    #[cfg(feature = "logging")]
    if !conflicts.is_empty() {
        warn!(
            "{} of {} serials already exist in stock",
            conflicts.len(),
            candidates.len()
        );
    }

    conflicts
}
