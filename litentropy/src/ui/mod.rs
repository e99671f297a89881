//! Terminal presentation: coloured status messages and result tables.

pub mod output_format;
pub mod summary_table;
