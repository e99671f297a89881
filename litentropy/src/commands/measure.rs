//! `litentropy measure`: entropy of an ad-hoc text.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};

use litentropy_core::entropy::{compute_stats, shannon_entropy};
use litentropy_core::{filter_sentences, sentence_entropies, PunctuationSegmenter, SentenceSegmenter};

use crate::cli::MeasureCommand;

/// Reads the input selected by `cmd`: the inline text, a file, or stdin.
fn read_input(cmd: &MeasureCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.input_file {
        debug!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }
    debug!("Reading input from stdin.");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Writes the measurement of `input` to `writer`.
///
/// Whole-text mode prints a single value. Per-sentence mode prints one
/// `entropy<TAB>sentence` line per sentence and a final `mean` line.
pub fn write_measurement<W: Write>(writer: &mut W, input: &str, cmd: &MeasureCommand) -> Result<()> {
    if !cmd.per_sentence {
        writeln!(writer, "{:.6}", shannon_entropy(input))?;
        return Ok(());
    }

    let segmenter = PunctuationSegmenter::new();
    let sentences = filter_sentences(segmenter.segment(input), cmd.min_sentence_chars);
    let entropies = sentence_entropies(&sentences);

    for (sentence, entropy) in sentences.iter().zip(&entropies) {
        // Keep one record per line even for sentences spanning several lines.
        let flat = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(writer, "{:.6}\t{}", entropy, flat)?;
    }
    let stats = compute_stats(&entropies);
    writeln!(writer, "mean\t{:.6}\t({} sentences)", stats.mean, stats.count)?;
    Ok(())
}

pub fn run_measure(cmd: &MeasureCommand) -> Result<()> {
    let input = read_input(cmd)?;
    let mut stdout = io::stdout().lock();
    write_measurement(&mut stdout, &input, cmd)
}
