use std::io;
use std::num::NonZeroU32;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use zbench_cli::{run, PlainView, ReportView, RunOptions, Tui, DEFAULT_URL};
use zbench_codecs::default_registry;
use zbench_core::DEFAULT_COUNT;

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "zbench",
    about = "Benchmark compression ratio and round-trip latency of a codec panel on a downloaded payload",
    version
)]
struct Cli {
    /// Compress and decompress iterations per codec
    #[arg(long, default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// URL of the payload to benchmark
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// Print the table to stdout instead of opening the full-screen view
    #[arg(long)]
    plain: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = RunOptions {
        url: cli.url,
        count: NonZeroU32::new(cli.count).context("--count must be at least 1")?,
    };
    let registry = default_registry();

    let mut view: Box<dyn ReportView> = if cli.plain {
        Box::new(PlainView::new(io::stdout()))
    } else {
        Box::new(Tui::stdout())
    };

    run(&opts, &registry, view.as_mut()).context("benchmark aborted")?;
    Ok(())
}
