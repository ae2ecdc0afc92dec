//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--set <KEY=VALUE>` / `-s`: Add a value to the store (repeatable, in order)
//! - `--lock <KEY>`: Mark a key read-only once all values are set (repeatable)
//! - `--block <NAME>`: Run the command against a view of one block
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};

/// pipeconf - Inspect and exercise hierarchical pipeline configuration
#[derive(Parser, Debug)]
#[command(name = "pipeconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set a configuration value; later values for the same key win
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_assignment,
        global = true
    )]
    pub set: Vec<(String, String)>,

    /// Mark a key read-only after all values have been set
    #[arg(long = "lock", value_name = "KEY", global = true)]
    pub lock: Vec<String>,

    /// Address every key through a view of this block
    #[arg(long, value_name = "NAME", global = true)]
    pub block: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Parse a `KEY=VALUE` assignment. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing key in '{raw}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value of a key
    #[command(
        name = "get",
        long_about = "Print the value stored at a key.\n\n\
            Fails if the key has no value, unless --default is given, in which \
            case the default is printed instead. The store is never modified.",
        after_help = "\
EXAMPLES:
    # Read a nested key
    pipeconf -s detector:threshold=0.5 get detector:threshold

    # Read through a view of the detector block
    pipeconf -s detector:threshold=0.5 --block detector get threshold

    # Fall back to a default
    pipeconf get missing --default 1"
    )]
    Get {
        /// Key to read
        key: String,

        /// Value to print when the key is not set
        #[arg(long)]
        default: Option<String>,
    },

    /// Print whether a key has a value
    Has {
        /// Key to check
        key: String,
    },

    /// List keys at the current scope
    Keys,

    /// Print every key and value at the current scope
    Dump {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an independent copy of one block
    #[command(
        name = "subblock",
        long_about = "Print an independent copy of everything under one block.\n\n\
            Keys are printed with the block name stripped. Keys outside the \
            block are never included.",
        after_help = "\
EXAMPLES:
    pipeconf -s reader:path=in.txt -s writer:path=out.txt subblock reader"
    )]
    Subblock {
        /// Block name (may itself be a compound key)
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a key, then print the remaining entries
    Unset {
        /// Key to remove
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge a second set of values over the store, then print the result
    #[command(
        name = "merge",
        long_about = "Merge a second set of values over the store.\n\n\
            Every --with value overwrites the store's value for the same key; \
            keys not mentioned are left alone. If any incoming key is locked, \
            nothing is merged.",
        after_help = "\
EXAMPLES:
    pipeconf -s a=1 -s b=1 merge --with b=2 --with e=3"
    )]
    Merge {
        /// Incoming value
        #[arg(long = "with", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        with: Vec<(String, String)>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    pipeconf completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    pipeconf completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
