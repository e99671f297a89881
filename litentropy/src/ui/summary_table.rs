//! Tables printed to stdout by the `analyze` and `books` commands.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use litentropy_core::entropy::reference_baselines;
use litentropy_core::{BookSource, CorpusResults};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Per-book statistics followed by the reference baselines.
pub fn results_table(results: &CorpusResults) -> Table {
    let mut table = new_table(vec!["Source", "Sentences", "Mean (bits/char)", "Std dev", "Min", "Max"]);

    for book in &results.books {
        table.add_row(vec![
            Cell::new(&book.name),
            number(book.sentence_count.to_string()),
            number(format!("{:.4}", book.stats.mean)),
            number(format!("{:.4}", book.stats.std_dev)),
            number(format!("{:.4}", book.stats.min)),
            number(format!("{:.4}", book.stats.max)),
        ]);
    }

    for baseline in reference_baselines() {
        table.add_row(vec![
            Cell::new(baseline.label),
            Cell::new("-"),
            number(format!("{:.4}", baseline.bits_per_symbol)),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ]);
    }
    table
}

/// The configured books and where each is cached.
pub fn books_table(books: &[BookSource]) -> Table {
    let mut table = new_table(vec!["Name", "URL", "Cache file"]);
    for book in books {
        table.add_row(vec![&book.name, &book.url, &book.filename]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use litentropy_core::BookAnalysis;
    use litentropy_core::entropy::EntropyStats;

    #[test]
    fn results_table_lists_books_then_baselines() {
        let results = CorpusResults {
            books: vec![BookAnalysis {
                name: "Frankenstein".to_string(),
                sentence_count: 3,
                stats: EntropyStats { count: 3, mean: 4.0, std_dev: 0.25, min: 3.5, max: 4.5 },
            }],
        };
        let rendered = results_table(&results).to_string();
        assert!(rendered.contains("Frankenstein"));
        assert!(rendered.contains("4.0000"));
        assert!(rendered.contains("6.5699"));
        assert!(rendered.contains("AES-256 key (density)"));
    }

    #[test]
    fn books_table_shows_cache_files() {
        let books = vec![BookSource {
            name: "Dracula".to_string(),
            url: "https://www.gutenberg.org/files/345/345-0.txt".to_string(),
            filename: "dracula.txt".to_string(),
        }];
        let rendered = books_table(&books).to_string();
        assert!(rendered.contains("dracula.txt"));
    }
}
