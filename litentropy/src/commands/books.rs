//! `litentropy books`: lists the configured corpus.

use anyhow::Result;
use std::io::{self, Write};

use crate::cli::BooksCommand;
use crate::commands::load_corpus_config;
use crate::ui::summary_table::books_table;

pub fn run_books(cmd: &BooksCommand) -> Result<()> {
    let config = load_corpus_config(cmd.config.as_deref())?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", books_table(&config.books))?;
    Ok(())
}
