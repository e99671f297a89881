// litentropy/src/lib.rs
//! # litentropy CLI
//!
//! Command-line front end for the litentropy corpus analyzer. Argument
//! parsing lives in [`cli`], each subcommand in [`commands`], and terminal
//! formatting in [`ui`].

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::analyze::run_analyze;
pub use commands::books::run_books;
pub use commands::measure::run_measure;
