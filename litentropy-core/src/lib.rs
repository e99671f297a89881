// litentropy-core/src/lib.rs
//! # Litentropy Core Library
//!
//! `litentropy-core` turns a list of public-domain books into comparable
//! entropy figures. Each book is downloaded (or read from a local cache),
//! split into sentences, and every sentence is measured with the Shannon
//! entropy kernel from `litentropy-entropy`. The per-sentence values are
//! averaged per book and reported next to fixed theoretical and
//! cryptographic baselines.
//!
//! ## Modules
//!
//! * `config`: Defines `CorpusConfig` and `BookSource`, loaded from YAML.
//! * `source`: The `TextSource` trait with HTTP and cache-only providers.
//! * `segmenter`: The `SentenceSegmenter` trait and the punctuation segmenter.
//! * `analysis`: Runs the pipeline and aggregates per-book statistics.
//! * `report`: Text report, JSON summary and the comparison chart.
//! * `errors`: The `LitentropyError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use litentropy_core::{analyze_text, PunctuationSegmenter};
//!
//! let text = "Call me Ishmael. Some years ago, never mind how long precisely.";
//! let analysis = analyze_text("Moby Dick", text, &PunctuationSegmenter::new(), 0).unwrap();
//! assert_eq!(analysis.sentence_count, 2);
//! assert!(analysis.mean_entropy() > 3.0);
//! ```
//!
//! ## Error Handling
//!
//! Fallible library calls return `LitentropyError` where callers may want to
//! react to a specific failure (a download or a missing cache file), and
//! `anyhow::Result` for configuration and report I/O.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod config;
pub mod errors;
pub mod report;
pub mod segmenter;
pub mod source;

/// Re-exports the corpus configuration types.
pub use config::{merge_configs, validate_config, AnalysisSettings, BookSource, CorpusConfig, OutputSettings};

/// Re-exports the custom error type for clear error reporting.
pub use errors::LitentropyError;

/// Re-exports the collaborator seams and their default implementations.
pub use segmenter::{filter_sentences, PunctuationSegmenter, SentenceSegmenter};
pub use source::{CachedTextSource, HttpTextSource, TextSource};

pub use analysis::{analyze_text, sentence_entropies, BookAnalysis, CorpusAnalyzer, CorpusResults};

pub use report::{render_chart, render_text_report, write_json_summary, write_text_report};

/// The entropy kernel, re-exported for callers that only depend on this crate.
pub use litentropy_entropy as entropy;
