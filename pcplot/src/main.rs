use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libpctrace::{Extractor, TraceSummary};

mod plot;

#[derive(Parser, Debug)]
#[command(version, about = "Plot the program counter evolution of an emulator trace log")]
pub struct Args {
    /// Trace log written by the emulator tracer.
    #[arg(default_value = libpctrace::DEFAULT_LOG_PATH)]
    log_path: PathBuf,

    /// Fail on lines that start like a trace line but don't decode.
    #[arg(short, long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv skipped lines).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the trace summary instead of opening the plot window.
    #[arg(long)]
    no_plot: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let extractor = if args.strict {
        Extractor::strict()
    } else {
        Extractor::new()
    };

    let trace = extractor
        .extract_file(&args.log_path)
        .with_context(|| format!("Failed to extract PC trace from {}", args.log_path.display()))?;

    let summary = TraceSummary::from_trace(&trace);

    if args.no_plot {
        println!("{}", summary);
        return Ok(());
    }

    log::info!("{}", summary);
    plot::show(&trace)
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
