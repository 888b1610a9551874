//! Shared building blocks for syllabic scanners.
//!
//! - [`character`] -- ASCII character classes and the predicates scanners
//!   branch on

pub mod character;
