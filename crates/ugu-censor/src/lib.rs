//! Dictionary-based word censor.
//!
//! Words are registered per language; [`Censor::censor_text`] masks every
//! occurrence in a text, including inflected forms (through a per-language
//! [`Stemmer`]) and occurrences with punctuation inside them ("и.г.р.а").
//!
//! ```
//! use ugu_censor::Censor;
//!
//! let mut censor = Censor::with_stemmer_factory(ugu_censor::stemmer::NoStemming);
//! censor.add_words(["игра", "яблоко"], "ru");
//!
//! let (text, censored) = censor.censor_text("Игра, а потом яблоко.", "ru");
//! assert_eq!(text, "****, а потом ******.");
//! assert!(censored);
//! ```
//!
//! # Architecture
//!
//! - [`censor`] -- The [`Censor`] handle: dictionary table and scan entry points
//! - [`dictionary`] -- One language's trie and stemmer
//! - [`scan`] -- Candidate locator, bound resolver and output assembly
//! - [`stemmer`] -- Stemmer capability and the Snowball factory

pub mod censor;
pub mod dictionary;
pub mod scan;
pub mod stemmer;

pub use censor::{Censor, CensorOptions};
pub use dictionary::Dictionary;
pub use stemmer::{NoStemming, Stemmer, StemmerFactory};
pub use ugu_core::WordBounds;
