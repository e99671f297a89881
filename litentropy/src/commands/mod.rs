//! Implementations of the `litentropy` subcommands.

pub mod analyze;
pub mod books;
pub mod measure;

use anyhow::Result;
use litentropy_core::{merge_configs, CorpusConfig};
use std::path::Path;

/// Loads the embedded corpus and merges an optional user file over it.
pub fn load_corpus_config(user_path: Option<&Path>) -> Result<CorpusConfig> {
    let defaults = CorpusConfig::load_default()?;
    let user = user_path.map(CorpusConfig::load_from_file).transpose()?;
    Ok(merge_configs(defaults, user))
}
