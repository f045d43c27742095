//! Shared building blocks for the ugu word censor.
//!
//! - [`character`] -- Letter classification and simple case mapping
//! - [`bounds`] -- Code-point spans produced by the scanner

pub mod bounds;
pub mod character;

pub use bounds::WordBounds;

/// Replacement character used for every code point of a censored span.
pub const DEFAULT_MASK: char = '*';
