//! Word matchers answering prefix queries over a loaded vocabulary.

use std::time::Instant;

use crate::avltree::AvlTree;

/// Something that can autocomplete a prefix against a fixed vocabulary.
pub trait WordMatcher {
    /// All known words starting with `prefix`. An empty prefix is rejected
    /// and yields no words.
    fn autocomplete(&self, prefix: &str) -> Vec<String>;

    /// Number of distinct words held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn name(&self) -> &'static str;
}

/// Which matcher to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatcherKind {
    /// Balanced search tree with pruned prefix traversal
    #[default]
    Avl,
    /// Linear scan over the word list
    List,
}

pub fn build_matcher<I>(kind: MatcherKind, words: I) -> Box<dyn WordMatcher>
where
    I: IntoIterator<Item = String>,
{
    match kind {
        MatcherKind::Avl => Box::new(AvlWordIndex::build(words)),
        MatcherKind::List => Box::new(ListWordIndex::new(words)),
    }
}

/// Prefix index backed by an [`AvlTree`].
#[derive(Debug, Clone, Default)]
pub struct AvlWordIndex {
    tree: AvlTree<String>,
}

impl AvlWordIndex {
    /// Inserts every word, one at a time. Empty words are skipped.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let start = Instant::now();
        let mut tree = AvlTree::new();
        for word in words.into_iter().filter(|w| !w.is_empty()) {
            tree.insert(word);
        }
        tracing::info!(
            elements = tree.len(),
            height = tree.height(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "AVL index built"
        );
        Self { tree }
    }

    pub fn tree(&self) -> &AvlTree<String> {
        &self.tree
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl WordMatcher for AvlWordIndex {
    fn autocomplete(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let start = Instant::now();
        let results: Vec<String> = self
            .tree
            .search_prefix(prefix)
            .into_iter()
            .map(str::to_string)
            .collect();
        tracing::debug!(
            prefix,
            results = results.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "AVL prefix search"
        );
        results
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn name(&self) -> &'static str {
        "avl"
    }
}

/// Baseline matcher scanning every word on each query.
#[derive(Debug, Clone, Default)]
pub struct ListWordIndex {
    words: Vec<String>,
}

impl ListWordIndex {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let start = Instant::now();
        let mut words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        // Callers normally hand over unique words; keep the first of any repeat.
        let mut seen = std::collections::HashSet::new();
        words.retain(|w| seen.insert(w.clone()));
        tracing::info!(
            elements = words.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "word list built"
        );
        Self { words }
    }
}

impl WordMatcher for ListWordIndex {
    fn autocomplete(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let start = Instant::now();
        let results: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.starts_with(prefix))
            .cloned()
            .collect();
        tracing::debug!(
            prefix,
            results = results.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "list prefix search"
        );
        results
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
