//! This file defines the command-line interface (CLI) for the litentropy application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "litentropy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measure the Shannon entropy of books, sentence by sentence",
    long_about = "litentropy downloads public-domain books, splits them into sentences, computes the Shannon entropy of each sentence's character distribution and compares the per-book averages with the maximum entropy of random printable text and the density of cryptographic keys.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `litentropy` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Downloads the corpus, measures every book and writes the report and chart.
    #[command(about = "Downloads the corpus, measures every book and writes the report and chart.")]
    Analyze(AnalyzeCommand),

    /// Prints the entropy of a text given inline, in a file, or on stdin.
    #[command(about = "Prints the Shannon entropy of a text (argument, file, or stdin).")]
    Measure(MeasureCommand),

    /// Lists the books in the corpus configuration.
    #[command(about = "Lists the books in the corpus configuration.")]
    Books(BooksCommand),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug, Default)]
pub struct AnalyzeCommand {
    /// Path to a corpus configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE", help = "Path to a corpus configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Directory where downloaded books are cached.
    #[arg(long = "cache-dir", value_name = "DIR", env = "LITENTROPY_CACHE_DIR", help = "Directory where downloaded books are cached.")]
    pub cache_dir: Option<PathBuf>,

    /// Only use cached copies; never download.
    #[arg(long = "offline", help = "Only read books from the cache directory; never download.")]
    pub offline: bool,

    /// Analyze only these books (comma-separated names).
    #[arg(long = "book", short = 'b', value_delimiter = ',', value_name = "NAME", help = "Analyze only these books (comma-separated names).")]
    pub books: Vec<String>,

    /// Sentences must be longer than this many characters to be measured.
    #[arg(long = "min-sentence-chars", value_name = "N", help = "Sentences must be longer than N characters to be measured.")]
    pub min_sentence_chars: Option<usize>,

    /// Where to write the comparison chart (.png or .svg).
    #[arg(long = "chart", value_name = "FILE", help = "Where to write the comparison chart (.png or .svg).")]
    pub chart: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(
        long = "no-chart",
        env = "LITENTROPY_NO_CHART",
        value_parser = clap::builder::BoolishValueParser::new(),
        help = "Skip chart rendering."
    )]
    pub no_chart: bool,

    /// Where to write the text report.
    #[arg(long = "report", value_name = "FILE", help = "Where to write the text report.")]
    pub report: Option<PathBuf>,

    /// Export per-book statistics to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export per-book statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,
}

/// Arguments for the `measure` command.
#[derive(Parser, Debug, Default)]
pub struct MeasureCommand {
    /// Text to measure. Reads from --input-file or stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file (reads from stdin if neither TEXT nor a file is given).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Measure each sentence separately and print their mean.
    #[arg(long = "per-sentence", help = "Measure each sentence separately and print their mean.")]
    pub per_sentence: bool,

    /// Minimum sentence length for --per-sentence.
    #[arg(long = "min-sentence-chars", value_name = "N", default_value_t = 0, requires = "per_sentence", help = "With --per-sentence, only measure sentences longer than N characters.")]
    pub min_sentence_chars: usize,
}

/// Arguments for the `books` command.
#[derive(Parser, Debug, Default)]
pub struct BooksCommand {
    /// Path to a corpus configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE", help = "Path to a corpus configuration file (YAML).")]
    pub config: Option<PathBuf>,
}
