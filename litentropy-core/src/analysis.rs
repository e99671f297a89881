//! The corpus pipeline: text → sentences → per-sentence entropy → per-book average.
//!
//! Books are fetched concurrently. Measuring a book is CPU bound and runs on
//! the blocking pool so that slow downloads of other books keep progressing.
//!
//! License: MIT OR Apache-2.0

use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::task::JoinSet;

use litentropy_entropy::{compute_stats, shannon_entropy, EntropyStats};

use crate::config::BookSource;
use crate::errors::LitentropyError;
use crate::segmenter::{filter_sentences, SentenceSegmenter};
use crate::source::TextSource;

/// Aggregated entropy figures for one book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookAnalysis {
    pub name: String,
    /// Sentences that survived the length filter and were measured.
    pub sentence_count: usize,
    pub stats: EntropyStats,
}

impl BookAnalysis {
    /// Mean of the per-sentence entropies, in bits per character.
    pub fn mean_entropy(&self) -> f64 {
        self.stats.mean
    }
}

/// Measures each sentence on its own.
pub fn sentence_entropies(sentences: &[&str]) -> Vec<f64> {
    sentences.iter().map(|s| shannon_entropy(s)).collect()
}

/// Segments, filters and measures a single text.
///
/// Returns `None` when no sentence is longer than `min_sentence_chars`.
pub fn analyze_text(
    name: &str,
    text: &str,
    segmenter: &dyn SentenceSegmenter,
    min_sentence_chars: usize,
) -> Option<BookAnalysis> {
    let sentences = filter_sentences(segmenter.segment(text), min_sentence_chars);
    info!("Text processed. Found {} relevant sentences in '{}'.", sentences.len(), name);

    if sentences.is_empty() {
        return None;
    }

    let stats = compute_stats(&sentence_entropies(&sentences));
    Some(BookAnalysis {
        name: name.to_string(),
        sentence_count: sentences.len(),
        stats,
    })
}

/// Per-book results in configured order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusResults {
    pub books: Vec<BookAnalysis>,
}

impl CorpusResults {
    /// Book label to average entropy, the mapping reports are rendered from.
    pub fn averages(&self) -> Vec<(&str, f64)> {
        self.books
            .iter()
            .map(|b| (b.name.as_str(), b.mean_entropy()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&BookAnalysis> {
        self.books.iter().find(|b| b.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }
}

/// Runs the full pipeline over a list of books.
#[derive(Clone)]
pub struct CorpusAnalyzer {
    source: Arc<dyn TextSource>,
    segmenter: Arc<dyn SentenceSegmenter>,
    min_sentence_chars: usize,
}

impl CorpusAnalyzer {
    pub fn new(
        source: Arc<dyn TextSource>,
        segmenter: Arc<dyn SentenceSegmenter>,
        min_sentence_chars: usize,
    ) -> Self {
        Self {
            source,
            segmenter,
            min_sentence_chars,
        }
    }

    /// Fetches and measures every book. Books that cannot be fetched or that
    /// yield no usable sentences are logged and left out of the results.
    pub async fn run(&self, books: &[BookSource]) -> CorpusResults {
        debug!(
            "Analyzing {} books with source '{}' (min sentence chars: {}).",
            books.len(),
            self.source.name(),
            self.min_sentence_chars
        );

        let mut tasks = JoinSet::new();
        for (index, book) in books.iter().cloned().enumerate() {
            let source = Arc::clone(&self.source);
            let segmenter = Arc::clone(&self.segmenter);
            let min_chars = self.min_sentence_chars;

            tasks.spawn(async move {
                info!("--- Starting analysis for: {} ---", book.name);
                let outcome = analyze_book(source, segmenter, &book, min_chars).await;
                (index, book.name, outcome)
            });
        }

        let mut analysed = Vec::with_capacity(books.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(Some(analysis)))) => {
                    info!(
                        "Result for '{}': Average Entropy = {:.4} bits/character",
                        analysis.name,
                        analysis.mean_entropy()
                    );
                    analysed.push((index, analysis));
                }
                Ok((_, name, Ok(None))) => {
                    warn!("No sentences to measure in '{}'; skipping it.", name);
                }
                Ok((_, name, Err(e))) => {
                    warn!("Skipping '{}': {}", name, e);
                }
                Err(e) => error!("Analysis task failed: {}", e),
            }
        }

        analysed.sort_by_key(|(index, _)| *index);
        CorpusResults {
            books: analysed.into_iter().map(|(_, analysis)| analysis).collect(),
        }
    }
}

async fn analyze_book(
    source: Arc<dyn TextSource>,
    segmenter: Arc<dyn SentenceSegmenter>,
    book: &BookSource,
    min_chars: usize,
) -> Result<Option<BookAnalysis>, LitentropyError> {
    let text = source.fetch(book).await?;
    let name = book.name.clone();

    tokio::task::spawn_blocking(move || analyze_text(&name, &text, segmenter.as_ref(), min_chars))
        .await
        .map_err(|e| LitentropyError::AnyhowWrapper(anyhow::anyhow!("measuring task panicked: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::PunctuationSegmenter;
    use approx::assert_abs_diff_eq;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves fixed texts; names without a text fail like a missing cache file.
    struct FixedSource {
        texts: HashMap<String, String>,
    }

    #[async_trait]
    impl TextSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self, book: &BookSource) -> Result<String, LitentropyError> {
            self.texts.get(&book.name).cloned().ok_or_else(|| LitentropyError::Cache {
                path: book.filename.clone().into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not cached"),
            })
        }
    }

    fn book(name: &str) -> BookSource {
        BookSource {
            name: name.to_string(),
            url: format!("https://example.org/{}", name),
            filename: format!("{}.txt", name),
        }
    }

    fn analyzer(texts: &[(&str, &str)], min_chars: usize) -> CorpusAnalyzer {
        let texts = texts.iter().map(|(n, t)| (n.to_string(), t.to_string())).collect();
        CorpusAnalyzer::new(
            Arc::new(FixedSource { texts }),
            Arc::new(PunctuationSegmenter::new()),
            min_chars,
        )
    }

    #[test]
    fn averages_sentence_entropies_not_whole_text() {
        let analysis = analyze_text("t", "aaaa. bbbb.", &PunctuationSegmenter::new(), 0).unwrap();
        // "aaaa." and "bbbb." have identical two-symbol distributions.
        let single = shannon_entropy("aaaa.");
        assert_eq!(analysis.sentence_count, 2);
        assert_abs_diff_eq!(analysis.mean_entropy(), single, epsilon = 1e-12);
        assert!(analysis.mean_entropy() < shannon_entropy("aaaa. bbbb."));
    }

    #[test]
    fn short_sentences_are_filtered_before_measuring() {
        let text = "Hi. This sentence is comfortably over twenty characters.";
        let analysis = analyze_text("t", text, &PunctuationSegmenter::new(), 20).unwrap();
        assert_eq!(analysis.sentence_count, 1);
        assert_abs_diff_eq!(
            analysis.mean_entropy(),
            shannon_entropy("This sentence is comfortably over twenty characters."),
            epsilon = 1e-12
        );
    }

    #[test]
    fn text_without_long_sentences_yields_none() {
        assert!(analyze_text("t", "Short. Tiny!", &PunctuationSegmenter::new(), 20).is_none());
        assert!(analyze_text("t", "", &PunctuationSegmenter::new(), 0).is_none());
    }

    #[tokio::test]
    async fn run_keeps_configured_order_and_skips_failures() {
        let analyzer = analyzer(
            &[
                ("first", "The first book has one long sentence in it."),
                ("third", "Third book, also one sentence of reasonable length!"),
                ("empty", "No. Yes."),
            ],
            20,
        );
        let books = vec![book("first"), book("missing"), book("third"), book("empty")];

        let results = analyzer.run(&books).await;

        let names: Vec<&str> = results.averages().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert!(results.get("missing").is_none());
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn run_over_no_books_is_empty() {
        let results = analyzer(&[], 20).run(&[]).await;
        assert!(results.is_empty());
    }
}
