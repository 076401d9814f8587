use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fmt;
use std::process;

use wordavl::{CorpusError, MatcherKind};

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "wordavl", about = "Prefix word lookup over a balanced tree", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Corpus source: an http(s) URL, a path to a .txt file, or literal text
    #[arg(long, global = true, env = "WORDAVL_CORPUS", default_value = "assets/corpus.txt")]
    pub corpus: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for prefixes interactively
    Search {
        /// Matcher to build
        #[arg(value_enum, default_value = "avl")]
        matcher: MatcherKind,
    },

    /// Print the words starting with a prefix, one per line
    Lookup {
        prefix: String,

        /// Matcher to build
        #[arg(long, value_enum, default_value = "avl")]
        matcher: MatcherKind,

        /// Sort the matches before printing
        #[arg(long)]
        sorted: bool,
    },

    /// Show word count and tree height for the corpus
    Stats,
}

pub enum CliError {
    Corpus(CorpusError),
    Io(std::io::Error),
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Corpus(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Io(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<CorpusError> for CliError {
    fn from(e: CorpusError) -> Self {
        CliError::Corpus(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
