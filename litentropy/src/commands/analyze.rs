//! `litentropy analyze`: the full download → measure → report run.

use anyhow::{bail, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::sync::Arc;

use litentropy_core::{
    render_chart, validate_config, write_json_summary, write_text_report, CachedTextSource,
    CorpusAnalyzer, CorpusConfig, HttpTextSource, PunctuationSegmenter, TextSource,
};

use crate::cli::AnalyzeCommand;
use crate::commands::load_corpus_config;
use crate::ui::output_format::{stderr_message, MessageKind};
use crate::ui::summary_table::results_table;

/// Applies command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut CorpusConfig, cmd: &AnalyzeCommand) {
    if let Some(dir) = &cmd.cache_dir {
        config.output.cache_dir = Some(dir.clone());
    }
    if let Some(min_chars) = cmd.min_sentence_chars {
        config.analysis.min_sentence_chars = Some(min_chars);
    }
    if let Some(chart) = &cmd.chart {
        config.output.chart_path = Some(chart.clone());
    }
    if let Some(report) = &cmd.report {
        config.output.report_path = Some(report.clone());
    }
    if let Some(json) = &cmd.json_file {
        config.output.json_path = Some(json.clone());
    }
    config.select_books(&cmd.books);
}

pub async fn run_analyze(cmd: &AnalyzeCommand, quiet: bool) -> Result<()> {
    let mut config = load_corpus_config(cmd.config.as_deref())?;
    apply_overrides(&mut config, cmd);
    validate_config(&config)?;

    if config.books.is_empty() {
        bail!("No books selected for analysis.");
    }

    let cache_dir = config.cache_dir();
    let source: Arc<dyn TextSource> = if cmd.offline {
        debug!("Offline mode: reading books from {}", cache_dir.display());
        Arc::new(CachedTextSource::new(cache_dir))
    } else {
        Arc::new(HttpTextSource::new(cache_dir))
    };

    let analyzer = CorpusAnalyzer::new(
        source,
        Arc::new(PunctuationSegmenter::new()),
        config.min_sentence_chars(),
    );
    let results = analyzer.run(&config.books).await;

    if results.is_empty() {
        bail!("No analysis could be completed.");
    }
    info!("--- Analysis of all books complete ---");

    {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", results_table(&results))?;
    }

    if cmd.no_chart {
        debug!("Chart rendering disabled.");
    } else {
        let chart_path = config.chart_path();
        match render_chart(&results, &chart_path) {
            Ok(()) => stderr_message(
                MessageKind::Success,
                format!("Chart saved to '{}'.", chart_path.display()),
                quiet,
            ),
            Err(e) => stderr_message(MessageKind::Warn, format!("Chart was not written: {}", e), quiet),
        }
    }

    let report_path = config.report_path();
    write_text_report(&results, &report_path)?;
    stderr_message(
        MessageKind::Success,
        format!("Report saved to '{}'.", report_path.display()),
        quiet,
    );

    if let Some(json_path) = config.json_path() {
        write_json_summary(&results, json_path)?;
        stderr_message(
            MessageKind::Success,
            format!("JSON summary saved to '{}'.", json_path.display()),
            quiet,
        );
    }

    Ok(())
}
