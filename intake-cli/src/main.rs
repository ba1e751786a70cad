use anyhow::Result;
use clap::{Parser, Subcommand};
use intake_cli::{commands, OutputFormat};
use intake_core::{constants::MAX_BULK_ITEMS, IntakeLimits};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Intake - Serial range expansion and bulk stock intake", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum serials per call (cannot exceed the hard limit of 1000)
    #[arg(long, global = true, default_value_t = MAX_BULK_ITEMS)]
    max_items: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a serial range into every serial between two endpoints
    Expand {
        /// First serial of the range
        #[arg(short, long)]
        start: String,

        /// Last serial of the range
        #[arg(short, long)]
        end: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },

    /// Validate a newline-delimited serial list
    List {
        /// Input file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },

    /// Resolve a JSON intake request (range, list or scan mode)
    Resolve {
        /// Request file, or - for stdin
        #[arg(short, long)]
        request: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a serial list against an existing stock listing
    Check {
        /// Input file with candidate serials, or - for stdin
        #[arg(short, long)]
        input: String,

        /// File listing serials already in stock, one per line
        #[arg(long)]
        existing: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let limits = IntakeLimits::new(cli.max_items);

    // Execute command
    match cli.command {
        Commands::Expand {
            start,
            end,
            output,
            format,
        } => commands::expand::execute(&start, &end, output.as_deref(), format, &limits),

        Commands::List {
            input,
            output,
            format,
        } => commands::list::execute(&input, output.as_deref(), format, &limits),

        Commands::Resolve { request, output } => {
            commands::resolve::execute(&request, output.as_deref(), &limits)
        }

        Commands::Check { input, existing } => {
            commands::check::execute(&input, &existing, &limits).map(|_| ())
        }
    }
}
