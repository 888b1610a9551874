//! Heuristic English syllable counting.
//!
//! Words are scanned one character at a time by a small state machine over
//! the classes in [`syllabic_core::character`]. The count is an
//! approximation driven purely by vowel groups, hyphens and a silent
//! trailing `e`; no dictionary is consulted.
//!
//! - [`scanner`] -- the state machine, the scan driver and tracing

pub mod scanner;

pub use scanner::{InvalidWord, count_syllables, trace, try_count_syllables};
