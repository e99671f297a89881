// litentropy-entropy/src/lib.rs
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod statistics;
pub mod baselines;

pub use entropy::{shannon_entropy, shannon_entropy_bytes, shannon_entropy_of};
pub use statistics::{compute_stats, EntropyStats};
pub use baselines::{reference_baselines, ReferenceBaseline};

/// Entropy measured in bits per symbol.
pub type BitsPerSymbol = f64;
