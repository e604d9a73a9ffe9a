use std::io;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use dna_trie::driver::{OutputFormat, Session, SessionConfig};


/// Run a file of INSERT / REMOVE / PRINT / SEARCH commands against a DNA sequence trie.
#[derive(StructOpt)]
#[structopt(name = "dna-trie")]
struct Cli {
    /// The command file to execute, one command per line
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,

    /// Output format for command results
    #[structopt(long, default_value = "text", possible_values = &["text", "json"])]
    format: OutputFormat,

    /// Keep operand case instead of upper-casing sequences before validation
    #[structopt(long)]
    case_sensitive: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG is honoured too
    #[structopt(short, long, parse(from_occurrences))]
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
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::from_args();
    init_tracing(args.verbose);

    let config = SessionConfig::builder()
        .format(args.format)
        .normalize_case(!args.case_sensitive)
        .build();

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), config);
    let summary = session.run_file(&args.path)
        .with_context(|| format!("running commands from {}", args.path.display()))?;

    tracing::info!(executed = summary.executed, skipped = summary.skipped, "done");
    Ok(())
}
