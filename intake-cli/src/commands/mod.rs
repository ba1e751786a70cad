pub mod check;
pub mod expand;
pub mod list;
pub mod resolve;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Read a whole input file, or stdin when `path` is `-`
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

/// Write `content` to `output`, or to stdout when no path is given
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Output written to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
