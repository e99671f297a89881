//! Fixed reference points that entropy measurements are compared against.

use libm::log2;

use crate::BitsPerSymbol;

/// Number of printable ASCII characters (0x20..=0x7E).
pub const PRINTABLE_ASCII_SYMBOLS: usize = 95;

/// Entropy density of a uniformly random cryptographic key: one byte per symbol.
pub const CRYPTO_KEY_DENSITY: BitsPerSymbol = 8.0;

/// Upper bound on zeroth-order entropy for an alphabet of `k` distinct symbols.
pub fn max_entropy_for_alphabet(k: usize) -> BitsPerSymbol {
    if k <= 1 {
        return 0.0;
    }
    log2(k as f64)
}

/// Entropy of text drawn uniformly at random from the printable ASCII set.
pub fn printable_ascii_max_entropy() -> BitsPerSymbol {
    max_entropy_for_alphabet(PRINTABLE_ASCII_SYMBOLS)
}

/// A named reference value drawn next to measured texts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBaseline {
    pub label: &'static str,
    pub bits_per_symbol: BitsPerSymbol,
    /// Total entropy of the key this density stands for, when it is a key.
    pub total_key_bits: Option<u32>,
}

/// The baselines shown in every report, in display order.
pub fn reference_baselines() -> [ReferenceBaseline; 3] {
    [
        ReferenceBaseline {
            label: "Theoretical max (95 random chars)",
            bits_per_symbol: printable_ascii_max_entropy(),
            total_key_bits: None,
        },
        ReferenceBaseline {
            label: "AES-256 key (density)",
            bits_per_symbol: CRYPTO_KEY_DENSITY,
            total_key_bits: Some(256),
        },
        ReferenceBaseline {
            label: "Kyber-1024 key (density)",
            bits_per_symbol: CRYPTO_KEY_DENSITY,
            total_key_bits: Some(8192),
        },
    ]
}
