// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_graph_path;

/// Command-line arguments for `depsort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depsort",
    version,
    about = "Order the nodes of a dependency graph so dependencies come first.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph file (TOML).
    ///
    /// Default: `Depsort.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_graph_path())]
    pub graph: PathBuf,

    /// Use the built-in example graph instead of reading a file.
    #[arg(long, conflicts_with = "graph")]
    pub demo: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print dependents before their dependencies instead.
    #[arg(long)]
    pub dependents_first: bool,

    /// Verify a comma-separated order (e.g. "D,B,C,A") instead of sorting.
    #[arg(long, value_name = "ORDER")]
    pub check: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPSORT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The input graph followed by the computed order.
    Text,
    /// Graphviz DOT rendering of the graph.
    Dot,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
