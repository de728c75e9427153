//! `hiergraph`: render graph6 tables and hierarchy search logs.
//!
//! ```text
//! hiergraph graph6 [--table FILE] [--layout FILE] [--columns N] [-o graph6.svg]
//! hiergraph hierarchy [INPUT|-] [--format svg|tree|graphml|json] [--strict] [-o FILE]
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    match cli.command {
        Commands::Graph6(args) => commands::graph6::run(&args),
        Commands::Hierarchy(args) => commands::hierarchy::run(&args),
    }
}

/// Initialize the tracing subscriber on stderr; `RUST_LOG` wins over flags.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
