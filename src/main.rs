//! `walktrace` command line.
//!
//! Reads a node count from stdin, builds the self-loop graph and walks it
//! from node 0. Prints nothing unless `--emit` is given; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use walktrace::{OutputFormat, WalkBound, WalkConfig, WalkMode};

#[derive(Parser)]
#[command(name = "walktrace")]
#[command(version)]
#[command(about = "Preorder depth-first walk over an n-node self-loop graph read from stdin")]
struct Cli {
    /// Walk semantics
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Follow edges only from nodes shallower than this depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Stop once the trace holds this many entries
    #[arg(long)]
    max_trace: Option<usize>,

    /// Remove every bound (a literal walk over a cycle never finishes)
    #[arg(long, conflicts_with_all = ["max_depth", "max_trace"])]
    unbounded: bool,

    /// Print the trace to stdout
    #[arg(long)]
    emit: bool,

    /// Output format for --emit
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Literal,
    Visited,
}

impl From<ModeArg> for WalkMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Literal => WalkMode::Literal,
            ModeArg::Visited => WalkMode::Visited,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<WalkConfig> {
        let mut config = match &self.config {
            Some(path) => WalkConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WalkConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.unbounded {
            config.bound = WalkBound::unbounded();
        } else if self.max_depth.is_some() || self.max_trace.is_some() {
            config.bound = WalkBound {
                max_depth: self.max_depth,
                max_trace_len: self.max_trace,
            };
        }
        if self.emit {
            config.emit = true;
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved config");
    if config.mode == WalkMode::Literal {
        tracing::debug!(
            "every node gets itself as its only neighbor; literal walks cycle on node 0"
        );
    }

    let report = walktrace::run(&mut io::stdin().lock(), &config).context("walk failed")?;

    if config.emit {
        let rendered = report.render(config.format).context("rendering trace")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}").context("writing trace")?;
    }
    Ok(())
}
