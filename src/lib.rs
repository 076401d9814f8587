//! Prefix lookup over a static vocabulary.
//!
//! A [`corpus::Corpus`] turns a file, URL or literal text into unique words,
//! which are inserted into a balanced [`avltree::AvlTree`] and then queried
//! by prefix through a [`index::WordMatcher`].

pub mod avltree;
pub mod corpus;
pub mod error;
pub mod index;
pub mod prompt;

pub use avltree::AvlTree;
pub use corpus::{Corpus, Source};
pub use error::CorpusError;
pub use index::{AvlWordIndex, ListWordIndex, MatcherKind, WordMatcher, build_matcher};
