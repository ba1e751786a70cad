use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use colored::*;
use intake_core::{range::SerialRange, ExpansionResult, IntakeLimits};
use tracing::{info, warn};

use super::write_output;

pub fn execute(
    start: &str,
    end: &str,
    output: Option<&str>,
    format: OutputFormat,
    limits: &IntakeLimits,
) -> Result<()> {
    info!("Expanding serial range {} .. {}", start, end);

    let result = SerialRange::new(start, end).and_then(|range| {
        info!(
            "Range spans {} serials (counter width {})",
            range.len(),
            range.width()
        );
        range.expand_with_limit(limits.cap())
    });

    let serials = match result {
        Ok(serials) => serials,
        Err(e) => {
            warn!("Range rejected: {}", e);
            if format == OutputFormat::Json {
                let failed = ExpansionResult::Err {
                    reason: e.to_string(),
                };
                let json = serde_json::to_string_pretty(&failed)
                    .with_context(|| "Failed to serialize expansion result")?;
                write_output(output, &json)?;
            }
            bail!("{} {}", "✗".red(), e);
        }
    };

    let content = match format {
        OutputFormat::Lines => serials.join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&ExpansionResult::Ok {
            serials: serials.clone(),
        })
        .with_context(|| "Failed to serialize expansion result")?,
    };
    write_output(output, &content)?;

    info!("{} Expanded {} serials", "✓".green(), serials.len());

    Ok(())
}
