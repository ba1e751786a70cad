use anyhow::{Context, Result};
use intake_core::{resolve_serials, ExpansionResult, IntakeLimits, IntakeRequest};
use serde::Deserialize;
use tracing::info;

use super::{read_input, write_output};

/// Request file: an intake request plus optional per-request limits
#[derive(Deserialize)]
struct RequestFile {
    #[serde(flatten)]
    request: IntakeRequest,
    #[serde(default)]
    max_items: Option<usize>,
}

/// Resolve a JSON intake request and emit the `{"ok": ..}` result object
///
/// Validation failures are part of the result, not errors; only I/O and
/// malformed request files fail the command.
pub fn execute(request_path: &str, output: Option<&str>, limits: &IntakeLimits) -> Result<()> {
    info!("Resolving intake request from {}", request_path);

    let content = read_input(request_path)?;
    let file: RequestFile =
        serde_json::from_str(&content).with_context(|| "Failed to parse intake request JSON")?;

    // A request may tighten the cap but never raise it past the CLI setting
    let limits = match file.max_items {
        Some(max) => IntakeLimits::new(max.min(limits.cap())),
        None => *limits,
    };

    let result = ExpansionResult::from(resolve_serials(&file.request, &limits));
    match &result {
        ExpansionResult::Ok { serials } => info!("Resolved {} serials", serials.len()),
        ExpansionResult::Err { reason } => info!("Request rejected: {}", reason),
    }

    let json = serde_json::to_string_pretty(&result)
        .with_context(|| "Failed to serialize expansion result")?;
    write_output(output, &json)
}
