//! Interactive prefix prompt.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::index::WordMatcher;

const EXIT_COMMAND: &str = "exit";

/// Reads prefixes line by line from `input` and writes matches to `output`
/// until EOF or `exit`.
pub fn run<R, W>(matcher: &dyn WordMatcher, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", "Welcome to Word Prefix Matcher!".green())?;
    writeln!(
        output,
        "Enter a prefix to search for words or type '{}' to quit.",
        EXIT_COMMAND.yellow()
    )?;

    let mut line = String::new();
    loop {
        write!(output, "{} ", "Enter prefix:".cyan())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let prefix = line.trim_end_matches(['\r', '\n']);

        if prefix.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        if prefix.is_empty() {
            writeln!(output, "{}", "Please provide a prefix.".yellow())?;
            continue;
        }

        let words = matcher.autocomplete(prefix);
        if words.is_empty() {
            writeln!(output, "{}", "No words found with the given prefix.".red())?;
        } else {
            writeln!(output, "{}", "Words found:".green())?;
            writeln!(output, "{}", words.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AvlWordIndex;

    fn session(lines: &str) -> String {
        colored::control::set_override(false);
        let index = AvlWordIndex::build(["cat", "car", "dog"].map(String::from));
        let mut out = Vec::new();
        run(&index, lines.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_stops_the_loop() {
        let out = session("EXIT\ndog\n");
        assert!(out.starts_with("Welcome to Word Prefix Matcher!"));
        assert!(!out.contains("Words found:"));
    }

    #[test]
    fn eof_stops_the_loop() {
        let out = session("");
        assert_eq!(out.matches("Enter prefix:").count(), 1);
    }

    #[test]
    fn empty_prefix_asks_again() {
        let out = session("\nexit\n");
        assert!(out.contains("Please provide a prefix."));
        assert_eq!(out.matches("Enter prefix:").count(), 2);
    }

    #[test]
    fn prints_matches_and_misses() {
        let out = session("do\nzz\nca\r\n");
        assert!(out.contains("Words found:\ndog\n"));
        assert!(out.contains("No words found with the given prefix."));
        assert!(out.contains("car") && out.contains("cat"));
    }
}
