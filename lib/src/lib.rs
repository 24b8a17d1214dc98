//! Rule-based Finnish lemmatizer.
//!
//! ```no_run
//! use fi_lemma::{Category, Lemmatizer, Lookups};
//!
//! let lookups = Lookups::load("assets/fi")?;
//! let lemmatizer = Lemmatizer::new(lookups)?;
//!
//! assert_eq!(lemmatizer.lemmatize_tag("valikon", "NOUN"), ["valikko"]);
//! assert_eq!(lemmatizer.lemmatize("!", Category::Punctuation), ["!"]);
//! # Ok::<(), fi_lemma::Error>(())
//! ```

pub mod candidates;
pub mod category;
pub mod compound;
pub mod enclitic;
pub mod error;
pub mod exception;
pub mod gradation;
pub mod harmony;
pub mod lemmatizer;
pub mod lookup;
pub mod rule;
pub mod trie;
pub mod validate;

pub use crate::{
    category::{Category, Pos},
    error::Error,
    lemmatizer::{Lemmatize, Lemmatizer},
    lookup::Lookups,
};
