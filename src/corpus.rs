//! Corpus acquisition and tokenization.
//!
//! A corpus source is a single string that is either an `http(s)://` URL, a
//! path to a `.txt` file, or the literal text itself. The text is split into
//! runs of word characters; punctuation is dropped and digit runs stay whole.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CorpusError, Result};

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Where the corpus text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// No source given; yields no text.
    Empty,
    Url(String),
    File(PathBuf),
    /// The source string is the text.
    Literal(String),
}

impl Source {
    pub fn classify(source: &str) -> Self {
        if source.is_empty() {
            Source::Empty
        } else if source.starts_with("http://") || source.starts_with("https://") {
            Source::Url(source.to_string())
        } else if source.rsplit_once('.').is_some_and(|(_, ext)| ext == "txt") {
            Source::File(PathBuf::from(source))
        } else {
            Source::Literal(source.to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Empty => "empty",
            Source::Url(_) => "url",
            Source::File(_) => "file",
            Source::Literal(_) => "literal",
        }
    }

    /// Reads the full text behind this source.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Empty => Ok(String::new()),
            Source::Url(url) => {
                let text = reqwest::blocking::get(url)?.error_for_status()?.text()?;
                Ok(text)
            }
            Source::File(path) => std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
                path: path.clone(),
                source,
            }),
            Source::Literal(text) => Ok(text.clone()),
        }
    }
}

/// Raw corpus text plus the tokenization rules applied to it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Classifies `source` and reads it. Nothing is returned on failure, so
    /// an index can never be built from a partial load.
    pub fn load(source: &str) -> Result<Self> {
        let source = Source::classify(source);
        let text = source.read()?;
        tracing::debug!(kind = source.kind(), bytes = text.len(), "corpus loaded");
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every word in order of appearance, repeats included.
    pub fn words(&self) -> Vec<&str> {
        WORD_RE.find_iter(&self.text).map(|m| m.as_str()).collect()
    }

    /// Distinct words in order of first appearance.
    pub fn unique_words(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.words()
            .into_iter()
            .filter(|w| seen.insert(*w))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::io::Write;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn classify_sources() {
        assert_eq!(Source::classify(""), Source::Empty);
        assert_eq!(
            Source::classify("https://example.com/words"),
            Source::Url("https://example.com/words".into())
        );
        assert_eq!(
            Source::classify("http://example.com/a.txt"),
            Source::Url("http://example.com/a.txt".into())
        );
        assert_eq!(
            Source::classify("assets/corpus.txt"),
            Source::File(PathBuf::from("assets/corpus.txt"))
        );
        assert_eq!(
            Source::classify("This is a test text."),
            Source::Literal("This is a test text.".into())
        );
        assert_eq!(Source::classify("notes.md"), Source::Literal("notes.md".into()));
        assert_eq!(Source::classify("txt"), Source::Literal("txt".into()));
    }

    #[test]
    fn literal_and_empty_sources_read_directly() {
        assert_eq!(Source::classify("").read().unwrap(), "");
        assert_eq!(Source::classify("plain words").read().unwrap(), "plain words");
    }

    #[test]
    fn reads_local_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Test file content").unwrap();
        let path = file.path().to_str().unwrap();

        let corpus = Corpus::load(path).unwrap();
        assert_eq!(corpus.text(), "Test file content");
        assert_eq!(corpus.words(), vec!["Test", "file", "content"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = Corpus::load(path.to_str().unwrap()).unwrap_err();
        match err {
            CorpusError::Read { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn words_simple_text() {
        let corpus = Corpus::from_text("This is a test text.");
        assert_eq!(corpus.words(), vec!["This", "is", "a", "test", "text"]);
    }

    #[test]
    fn words_drop_punctuation_and_keep_numbers() {
        let corpus = Corpus::from_text("Hello, world! This is a sample text with 123 numbers.");
        assert_eq!(
            corpus.words(),
            vec!["Hello", "world", "This", "is", "a", "sample", "text", "with", "123", "numbers"]
        );
    }

    #[test]
    fn words_special_characters() {
        let corpus = Corpus::from_text("Hello, world! How are you today? #@$");
        assert_eq!(corpus.words(), vec!["Hello", "world", "How", "are", "you", "today"]);
    }

    #[test]
    fn words_multiline() {
        let corpus = Corpus::from_text("This is a\nmultiline\nsentence.");
        assert_eq!(corpus.words(), vec!["This", "is", "a", "multiline", "sentence"]);
    }

    #[test]
    fn words_unicode() {
        let corpus = Corpus::from_text("ação, açúcar; árvore!");
        assert_eq!(corpus.words(), vec!["ação", "açúcar", "árvore"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        let corpus = Corpus::from_text("");
        assert!(corpus.words().is_empty());
        assert!(corpus.unique_words().is_empty());
    }

    #[test]
    fn unique_words_dedupe_in_first_seen_order() {
        let corpus = Corpus::from_text("the cat saw the other cat, then the dog");
        assert_eq!(
            corpus.unique_words(),
            vec!["the", "cat", "saw", "other", "then", "dog"]
        );
    }

    #[test]
    fn unique_words_complex_text() {
        let corpus = Corpus::from_text("Hello, world! How are you today? #@$ Hello again, world.");
        let got: BTreeSet<String> = corpus.unique_words().into_iter().collect();
        assert_eq!(
            got,
            set(&["Hello", "world", "How", "are", "you", "today", "again"])
        );
        assert!(corpus.unique_words().iter().all(|w| !w.is_empty()));
    }
}
