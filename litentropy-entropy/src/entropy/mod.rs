// litentropy-entropy/src/entropy/mod.rs
use alloc::collections::BTreeMap;
use libm::log2;

use crate::BitsPerSymbol;

/// Calculates the zeroth-order Shannon entropy of a text sample.
///
/// Each `char` is one symbol. Counting is case-sensitive and no whitespace
/// or Unicode normalization is applied, so `"aA"` and `"aa"` differ.
///
/// Returns the entropy in bits per symbol. The empty string yields `0.0`.
pub fn shannon_entropy(text: &str) -> BitsPerSymbol {
    shannon_entropy_of(text.chars())
}

/// Calculates the Shannon entropy of an arbitrary sequence of discrete symbols.
pub fn shannon_entropy_of<T, I>(symbols: I) -> BitsPerSymbol
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut frequencies: BTreeMap<T, usize> = BTreeMap::new();
    let mut total = 0usize;
    for symbol in symbols {
        *frequencies.entry(symbol).or_insert(0) += 1;
        total += 1;
    }

    entropy_from_counts(frequencies.into_values(), total)
}

/// Calculates the Shannon entropy of a byte slice, one byte per symbol.
pub fn shannon_entropy_bytes(data: &[u8]) -> BitsPerSymbol {
    let mut frequencies = [0usize; 256];
    for &byte in data {
        frequencies[byte as usize] += 1;
    }

    entropy_from_counts(frequencies.into_iter(), data.len())
}

fn entropy_from_counts<I: Iterator<Item = usize>>(counts: I, total: usize) -> BitsPerSymbol {
    // log2(0) is never evaluated: empty input has no counts to visit.
    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    let mut entropy = 0.0;

    for count in counts.filter(|&c| c > 0) {
        let p = count as f64 / len;
        entropy -= p * log2(p);
    }

    entropy
}
