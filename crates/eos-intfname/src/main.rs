//! eos-intfname - print EOS interface names for raw interface IDs
//!
//! IDs are taken from the command line, or from stdin when none are given.

use anyhow::Context;
use clap::Parser;
use eos_intfname::{OutputFormat, read_tokens, run, write_type_table};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Decode Arista EOS internal interface IDs
#[derive(Parser, Debug)]
#[command(name = "eos-intfname")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interface IDs, decimal or 0x-prefixed hex (read from stdin if omitted)
    ids: Vec<String>,

    /// Emit one JSON object per ID
    #[arg(short = 'j', long, conflicts_with = "verbose")]
    json: bool,

    /// Print the hex ID next to each name
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print the known interface type codes and exit
    #[arg(long, conflicts_with = "ids")]
    list_types: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.verbose {
            OutputFormat::Verbose
        } else {
            OutputFormat::Text
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("eos-intfname: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run_cli(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "eos-intfname failed");
            eprintln!("eos-intfname: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging to stderr so stdout stays machine-readable
fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{}'", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set logger: {}", e))
}

/// Returns whether every input token decoded.
fn run_cli(args: &Args) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.list_types {
        write_type_table(&mut out).context("writing type table")?;
        return Ok(true);
    }

    let tokens = if args.ids.is_empty() {
        info!("reading interface IDs from stdin");
        read_tokens(io::stdin().lock()).context("reading stdin")?
    } else {
        args.ids.clone()
    };

    let mut err = io::stderr().lock();
    let summary = run(&tokens, &mut out, &mut err, args.format()).context("writing output")?;
    info!(decoded = summary.decoded, failed = summary.failed, "done");

    Ok(summary.is_success())
}
