use std::path::PathBuf;

/// Errors raised while acquiring the text a corpus is built from.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CorpusError {
    /// A local corpus file could not be read.
    #[error("failed to read corpus file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An HTTP source could not be fetched or answered with an error status.
    #[error("failed to fetch corpus: {0}")]
    Fetch(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
