//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout; informational messages go to stderr and respect the
//! quiet flag. When `--json` is enabled, results are machine-readable JSON.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print an informational message to stderr (respects quiet mode).
pub fn info(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format entries as `key = value` lines, in map order.
pub fn format_entries(entries: &BTreeMap<String, String>) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a list of items, one per line.
pub fn format_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_quiet_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn entries_are_one_per_line() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), "2".to_string());
        entries.insert("a:x".to_string(), "1".to_string());
        assert_eq!(format_entries(&entries), "a:x = 1\nb = 2");
        assert_eq!(format_entries(&BTreeMap::new()), "");
    }

    #[test]
    fn list_is_one_per_line() {
        assert_eq!(format_list(&["a", "b"]), "a\nb");
        assert_eq!(format_list::<&str>(&[]), "");
    }
}
