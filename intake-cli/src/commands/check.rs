use anyhow::{bail, Result};
use colored::*;
use intake_core::{find_conflicts, resolve_serials, IntakeLimits, IntakeRequest};
use tracing::info;

use super::read_input;

/// Resolve a serial list and compare it against an existing stock listing
///
/// Fails when the list itself is invalid or when any serial is already in
/// stock; returns the number of serials cleared for intake otherwise.
pub fn execute(input: &str, existing: &str, limits: &IntakeLimits) -> Result<usize> {
    info!("Checking {} against stock listing {}", input, existing);

    let request = IntakeRequest::List {
        text: read_input(input)?,
    };
    let serials = resolve_serials(&request, limits)?;

    let stock_text = read_input(existing)?;
    let stock: Vec<&str> = stock_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    info!("Stock listing holds {} serials", stock.len());

    let conflicts = find_conflicts(&serials, &stock);

    println!("\n=== Intake Check ===");
    println!("Candidate serials:  {}", serials.len());
    println!("Already in stock:   {}", conflicts.len());

    if conflicts.is_empty() {
        println!("{} All {} serials are new", "✓".green(), serials.len());
        return Ok(serials.len());
    }

    for serial in &conflicts {
        println!("  {} {}", "✗".red(), serial);
    }
    bail!(
        "{} of {} serials already exist in stock",
        conflicts.len(),
        serials.len()
    );
}
