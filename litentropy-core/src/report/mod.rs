//! Reporting layer: plain-text report, JSON summary and comparison chart.
//!
//! Every output puts the per-book averages next to the fixed reference
//! baselines from `litentropy_entropy::baselines`.
//!
//! License: MIT OR Apache-2.0

pub mod chart;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use log::info;
use serde::Serialize;
use std::path::Path;

use litentropy_entropy::reference_baselines;

use crate::analysis::CorpusResults;

pub use chart::{chart_bars, render_chart, y_axis_limit, Bar, BarKind};

pub const REPORT_TITLE: &str = "Entropy Analysis Report";
const REPORT_RULE_WIDTH: usize = 35;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the text report for `results`, stamped with `generated_at`.
pub fn render_text_report(results: &CorpusResults, generated_at: NaiveDateTime) -> String {
    let mut out = format!(
        "{}\n{}\nGenerated at: {}\n\n",
        REPORT_TITLE,
        "=".repeat(REPORT_RULE_WIDTH),
        generated_at.format(TIMESTAMP_FORMAT)
    );
    for (name, entropy) in results.averages() {
        out.push_str(&format!(
            "- Average entropy for '{}': {:.4} bits/character\n",
            name, entropy
        ));
    }
    out.push_str("\nReport generated successfully.");
    out
}

/// Writes the text report to `path`, stamped with the current local time.
pub fn write_text_report(results: &CorpusResults, path: &Path) -> Result<()> {
    info!("Generating report at '{}'...", path.display());
    let report = render_text_report(results, Local::now().naive_local());
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    info!("Report finished.");
    Ok(())
}

#[derive(Debug, Serialize)]
struct BookSummary<'a> {
    name: &'a str,
    sentence_count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

#[derive(Debug, Serialize)]
struct BaselineSummary {
    label: &'static str,
    bits_per_symbol: f64,
    total_key_bits: Option<u32>,
}

#[derive(Debug, Serialize)]
struct CorpusSummary<'a> {
    generated_at: String,
    unit: &'static str,
    books: Vec<BookSummary<'a>>,
    baselines: Vec<BaselineSummary>,
}

/// Serializes per-book statistics and the baselines as pretty JSON.
pub fn render_json_summary(results: &CorpusResults, generated_at: NaiveDateTime) -> Result<String> {
    let summary = CorpusSummary {
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        unit: "bits/character",
        books: results
            .books
            .iter()
            .map(|b| BookSummary {
                name: &b.name,
                sentence_count: b.sentence_count,
                mean: b.stats.mean,
                std_dev: b.stats.std_dev,
                min: b.stats.min,
                max: b.stats.max,
            })
            .collect(),
        baselines: reference_baselines()
            .into_iter()
            .map(|b| BaselineSummary {
                label: b.label,
                bits_per_symbol: b.bits_per_symbol,
                total_key_bits: b.total_key_bits,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&summary).context("Failed to serialize JSON summary")
}

pub fn write_json_summary(results: &CorpusResults, path: &Path) -> Result<()> {
    let json = render_json_summary(results, Local::now().naive_local())?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON summary: {}", path.display()))?;
    info!("JSON summary written to '{}'.", path.display());
    Ok(())
}
