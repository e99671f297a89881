//! Configuration management for `litentropy-core`.
//!
//! This module defines which books make up a corpus and how they are
//! analysed and reported. It handles deserialization of YAML configurations
//! and provides utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::LitentropyError;

/// Sentences must be strictly longer than this many characters to be measured.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;
pub const DEFAULT_CACHE_DIR: &str = ".";
pub const DEFAULT_CHART_PATH: &str = "entropy_comparison.png";
pub const DEFAULT_REPORT_PATH: &str = "entropy_report.txt";

/// A single public-domain text to download and analyse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct BookSource {
    /// Display name used in logs, reports and the chart (e.g., "Moby Dick").
    pub name: String,
    /// Where the plain-text edition is downloaded from.
    pub url: String,
    /// File name of the cached copy inside the cache directory.
    pub filename: String,
}

/// Settings for the sentence pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Minimum trimmed sentence length (exclusive, in characters).
    pub min_sentence_chars: Option<usize>,
}

/// Where downloaded texts and generated artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputSettings {
    pub cache_dir: Option<PathBuf>,
    pub chart_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    /// Optional JSON summary; nothing is written when unset.
    pub json_path: Option<PathBuf>,
}

/// Represents the top-level configuration structure for litentropy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CorpusConfig {
    pub books: Vec<BookSource>,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl CorpusConfig {
    /// Loads a corpus configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading corpus configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CorpusConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        info!("Loaded {} books from file {}.", config.books.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in corpus from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default corpus from embedded string...");
        let default_yaml = include_str!("../config/default_corpus.yaml");
        let config: CorpusConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default corpus")?;

        debug!("Loaded {} default books.", config.books.len());
        Ok(config)
    }

    /// Keeps only the books named in `names`. An empty list keeps everything.
    pub fn select_books(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }

        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let known: HashSet<&str> = self.books.iter().map(|b| b.name.as_str()).collect();

        for name in wanted.difference(&known) {
            warn!("Book '{}' is not in the corpus configuration.", name);
        }

        self.books.retain(|book| wanted.contains(book.name.as_str()));
        debug!("{} books selected for analysis.", self.books.len());
    }

    pub fn min_sentence_chars(&self) -> usize {
        self.analysis
            .min_sentence_chars
            .unwrap_or(DEFAULT_MIN_SENTENCE_CHARS)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.output
            .cache_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output
            .chart_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_PATH))
    }

    pub fn report_path(&self) -> PathBuf {
        self.output
            .report_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
    }

    pub fn json_path(&self) -> Option<&Path> {
        self.output.json_path.as_deref()
    }
}

/// Merges a user-supplied configuration over the defaults.
///
/// User books replace default books with the same name in place; new books
/// are appended in the order the user listed them. Settings are overridden
/// field by field.
pub fn merge_configs(default_config: CorpusConfig, user_config: Option<CorpusConfig>) -> CorpusConfig {
    debug!("merge_configs called. Default books: {}", default_config.books.len());

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let mut books = default_config.books;
    for user_book in user_cfg.books {
        match books.iter_mut().find(|b| b.name == user_book.name) {
            Some(existing) => {
                debug!("Overriding default book '{}'.", user_book.name);
                *existing = user_book;
            }
            None => books.push(user_book),
        }
    }

    let mut analysis = default_config.analysis;
    if let Some(min_chars) = user_cfg.analysis.min_sentence_chars {
        debug!("Overriding min_sentence_chars with user value: {}", min_chars);
        analysis.min_sentence_chars = Some(min_chars);
    }

    let mut output = default_config.output;
    let user_output = user_cfg.output;
    if user_output.cache_dir.is_some() {
        output.cache_dir = user_output.cache_dir;
    }
    if user_output.chart_path.is_some() {
        output.chart_path = user_output.chart_path;
    }
    if user_output.report_path.is_some() {
        output.report_path = user_output.report_path;
    }
    if user_output.json_path.is_some() {
        output.json_path = user_output.json_path;
    }

    debug!("Final total books after merge: {}", books.len());
    CorpusConfig { books, analysis, output }
}

/// Checks every book entry and reports all problems at once.
pub fn validate_config(config: &CorpusConfig) -> Result<(), LitentropyError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for book in &config.books {
        if book.name.trim().is_empty() {
            errors.push("A book has an empty `name` field.".to_string());
        } else if !names.insert(book.name.as_str()) {
            errors.push(format!("Duplicate book name found: '{}'.", book.name));
        }

        if !(book.url.starts_with("http://") || book.url.starts_with("https://")) {
            errors.push(format!("Book '{}' has a non-HTTP url: '{}'.", book.name, book.url));
        }

        if book.filename.trim().is_empty() {
            errors.push(format!("Book '{}' has an empty `filename` field.", book.name));
        } else if book.filename.contains(['/', '\\']) {
            errors.push(format!(
                "Book '{}': filename '{}' must not contain a path separator.",
                book.name, book.filename
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(LitentropyError::InvalidConfig(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str) -> BookSource {
        BookSource {
            name: name.to_string(),
            url: format!("https://example.org/{}.txt", name),
            filename: format!("{}.txt", name),
        }
    }

    #[test]
    fn default_corpus_has_three_books() {
        let config = CorpusConfig::load_default().unwrap();
        let names: Vec<&str> = config.books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Moby Dick", "Frankenstein", "The Adventures of Sherlock Holmes"]);
        assert_eq!(config.min_sentence_chars(), DEFAULT_MIN_SENTENCE_CHARS);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = CorpusConfig::default();
        assert_eq!(config.min_sentence_chars(), 20);
        assert_eq!(config.cache_dir(), PathBuf::from("."));
        assert_eq!(config.chart_path(), PathBuf::from("entropy_comparison.png"));
        assert_eq!(config.report_path(), PathBuf::from("entropy_report.txt"));
        assert!(config.json_path().is_none());
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = CorpusConfig {
            books: vec![
                book("a"),
                book("a"),
                BookSource { name: "".into(), url: "ftp://x".into(), filename: "dir/x.txt".into() },
            ],
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("Duplicate book name found: 'a'"));
        assert!(err.contains("empty `name`"));
        assert!(err.contains("non-HTTP url"));
        assert!(err.contains("path separator"));
    }

    #[test]
    fn select_books_keeps_configured_order() {
        let mut config = CorpusConfig { books: vec![book("a"), book("b"), book("c")], ..Default::default() };
        config.select_books(&["c".to_string(), "a".to_string(), "missing".to_string()]);
        let names: Vec<&str> = config.books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn select_books_with_no_names_is_a_no_op() {
        let mut config = CorpusConfig { books: vec![book("a"), book("b")], ..Default::default() };
        config.select_books(&[]);
        assert_eq!(config.books.len(), 2);
    }
}
