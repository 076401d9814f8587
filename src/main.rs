mod cli;

use std::io::{self, Write};

use clap::Parser;
use colored::*;

use cli::{Cli, CliError, CliResult, Commands, exit_with_error};
use wordavl::{AvlWordIndex, Corpus, WordMatcher, build_matcher, prompt};

fn init_tracing(cli: &Cli) {
    // --quiet silences everything; --verbose honours RUST_LOG, falling back
    // to debug; otherwise only warnings reach stderr.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load fully before building anything; a failed load never reaches an index.
    let corpus = Corpus::load(&cli.corpus)?;
    let words = corpus.unique_words();

    match cli.command {
        Commands::Search { matcher } => {
            let matcher = build_matcher(matcher, words);
            tracing::info!(matcher = matcher.name(), words = matcher.len(), "matcher ready");
            let stdin = io::stdin();
            prompt::run(&*matcher, stdin.lock(), io::stdout().lock())?;
            Ok(())
        }

        Commands::Lookup {
            prefix,
            matcher,
            sorted,
        } => {
            if prefix.is_empty() {
                return Err(CliError::Usage("please provide a non-empty prefix".into()));
            }
            let matcher = build_matcher(matcher, words);
            let mut results = matcher.autocomplete(&prefix);
            if sorted {
                results.sort_unstable();
            }
            let mut out = io::stdout().lock();
            for word in &results {
                writeln!(out, "{word}")?;
            }
            Ok(())
        }

        Commands::Stats => {
            let index = AvlWordIndex::build(words);
            println!("{} {}", "words:".green(), index.len());
            println!("{} {}", "height:".green(), index.height());
            Ok(())
        }
    }
}
