use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use colored::*;
use intake_core::{resolve_serials, ExpansionResult, IntakeLimits, IntakePreview, IntakeRequest};
use tracing::{info, warn};

use super::{read_input, write_output};

pub fn execute(
    input: &str,
    output: Option<&str>,
    format: OutputFormat,
    limits: &IntakeLimits,
) -> Result<()> {
    info!("Reading serial list from {}", input);

    let text = read_input(input)?;
    let request = IntakeRequest::List { text };

    let serials = match resolve_serials(&request, limits) {
        Ok(serials) => serials,
        Err(e) => {
            warn!("List rejected: {}", e);
            bail!("{} {}", "✗".red(), e);
        }
    };

    let preview = IntakePreview::of(&serials);
    info!(
        "Accepted {} serials ({} .. {})",
        preview.count,
        preview.first.as_deref().unwrap_or("-"),
        preview.last.as_deref().unwrap_or("-")
    );

    let content = match format {
        OutputFormat::Lines => serials.join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&ExpansionResult::Ok { serials })
            .with_context(|| "Failed to serialize list result")?,
    };
    write_output(output, &content)
}
