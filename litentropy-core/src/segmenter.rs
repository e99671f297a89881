//! Sentence segmentation.
//!
//! Splits raw book text into sentence-like slices so that each one can be
//! measured independently. The default segmenter is punctuation driven with
//! an abbreviation list, which is close enough to a trained tokenizer for
//! averaging purposes and needs no model data.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A terminator run, any closing quotes or brackets, then whitespace or end of text.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([.!?]+["'\u{201D}\u{2019})\]]*)(?:\s+|$)"#)
        .expect("sentence boundary pattern is valid")
});

/// Words that are usually followed by a period without ending a sentence.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "hon", "capt", "col",
    "gen", "lt", "sgt", "mt", "messrs", "mme", "vs", "e.g", "i.e", "cf", "viz", "vol",
    "ch", "fig", "inc", "ltd", "co",
];

/// Splits text into sentences.
pub trait SentenceSegmenter: Send + Sync {
    /// Returns the trimmed, non-empty sentences of `text` in order.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Regex-driven segmenter that ends sentences at `.`, `!` or `?`.
#[derive(Debug, Clone)]
pub struct PunctuationSegmenter {
    abbreviations: HashSet<String>,
}

impl Default for PunctuationSegmenter {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl PunctuationSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds abbreviations (without their trailing period, any case).
    pub fn with_abbreviations<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations
            .extend(extra.into_iter().map(|a| a.as_ref().to_lowercase()));
        self
    }

    /// True when a single period after `preceding` is part of an abbreviation
    /// or an initial rather than the end of a sentence.
    fn is_abbreviation(&self, preceding: &str) -> bool {
        let word = preceding
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c.is_alphabetic(),
            _ => self.abbreviations.contains(&word.to_lowercase()),
        }
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for caps in SENTENCE_BOUNDARY.captures_iter(text) {
            let (Some(whole), Some(terminator)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let run = terminator
                .as_str()
                .trim_end_matches(|c: char| !matches!(c, '.' | '!' | '?'));
            if run == "." && self.is_abbreviation(&text[start..terminator.start()]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..terminator.end()]);
            start = whole.end();
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Keeps sentences whose trimmed length is strictly greater than `min_chars`.
///
/// Short fragments (chapter headings, list markers, stray initials) are noise
/// for per-sentence entropy and are dropped before measuring.
pub fn filter_sentences(sentences: Vec<&str>, min_chars: usize) -> Vec<&str> {
    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        PunctuationSegmenter::new().segment(text)
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(split("One. Two! Three?"), vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn keeps_unterminated_tail() {
        assert_eq!(split("First sentence. And a tail"), vec!["First sentence.", "And a tail"]);
    }

    #[test]
    fn keeps_closing_quotes_with_their_sentence() {
        let text = "\u{201C}Where is he?\u{201D} she asked. \"Gone.\" He left.";
        assert_eq!(
            split(text),
            vec!["\u{201C}Where is he?\u{201D}", "she asked.", "\"Gone.\"", "He left."]
        );
    }

    #[test]
    fn does_not_split_after_abbreviations_or_initials() {
        let text = "Mr. Holmes met Dr. Watson at St. Bart's. J. H. Watson was late.";
        assert_eq!(
            split(text),
            vec!["Mr. Holmes met Dr. Watson at St. Bart's.", "J. H. Watson was late."]
        );
    }

    #[test]
    fn ellipsis_after_abbreviation_still_ends_sentence() {
        assert_eq!(split("He saw Mr... Then silence."), vec!["He saw Mr...", "Then silence."]);
    }

    #[test]
    fn decimals_do_not_split() {
        assert_eq!(split("Pi is 3.14 roughly. Yes."), vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn newlines_count_as_whitespace() {
        let text = "It was the best of times.\nIt was the worst\nof times.";
        assert_eq!(split(text), vec!["It was the best of times.", "It was the worst\nof times."]);
    }

    #[test]
    fn extra_abbreviations_are_case_insensitive() {
        let segmenter = PunctuationSegmenter::new().with_abbreviations(["Chap"]);
        assert_eq!(segmenter.segment("See chap. Two of it."), vec!["See chap. Two of it."]);
    }

    #[test]
    fn empty_and_blank_text_have_no_sentences() {
        assert!(split("").is_empty());
        assert!(split("   \n\t ").is_empty());
    }

    #[test]
    fn filter_is_strictly_greater_than_minimum() {
        let exactly_twenty = "abcdefghij klmnopqrs";
        assert_eq!(exactly_twenty.chars().count(), 20);
        let longer = "abcdefghij klmnopqrst";

        let kept = filter_sentences(vec![exactly_twenty, longer, "  short  "], 20);
        assert_eq!(kept, vec![longer]);
    }

    #[test]
    fn filter_counts_characters_not_bytes() {
        let accented = "ééééééééééééééééééééé";
        assert_eq!(accented.chars().count(), 21);
        assert_eq!(filter_sentences(vec![accented], 20), vec![accented]);
        assert!(filter_sentences(vec![accented], 21).is_empty());
    }
}
