//! Command line argument parsing for the docspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::allowlist::EntryKind;

/// docspell - spelling allow-list for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(name = "docspell")]
#[command(about = "Check tokens against a documentation spelling allow-list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Allow-list file (JSON or plain text); the built-in list is used when absent
    #[arg(short, long, value_name = "FILE", env = "DOCSPELL_ALLOWLIST")]
    pub allowlist: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List allow-list entries
    List(ListArgs),

    /// Check whether tokens are allowed
    Check(CheckArgs),

    /// Validate an allow-list file
    Validate(ValidateArgs),

    /// Report words in text files that the allow-list does not cover
    Scan(ScanArgs),

    /// Write the active allow-list as JSON
    Export(ExportArgs),
}

/// Arguments for listing entries
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Only list entries of this kind
    #[arg(short, long)]
    pub kind: Option<EntryKind>,
}

/// Arguments for checking tokens
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Tokens to check
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    /// Fail if any token is not allowed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for validating an allow-list file
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Allow-list file (JSON or plain text)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for scanning text files
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Files to scan
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Custom token pattern (regular expression)
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,

    /// Fail if any unknown word is found
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for exporting the allow-list
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let args =
            DocspellArgs::try_parse_from(["docspell", "check", "gradle", "FooBar", "--strict"])
                .unwrap();

        match args.command {
            Command::Check(check) => {
                assert_eq!(check.tokens, vec!["gradle", "FooBar"]);
                assert!(check.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = DocspellArgs::try_parse_from(["docspell", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = DocspellArgs::try_parse_from(["docspell", "-q", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = DocspellArgs::try_parse_from(["docspell", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_parse_list_kind() {
        let args = DocspellArgs::try_parse_from([
            "docspell", "--format", "json", "list", "--kind", "pattern",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::List(list) => assert_eq!(list.kind, Some(EntryKind::Pattern)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_tokens() {
        assert!(DocspellArgs::try_parse_from(["docspell", "check"]).is_err());
    }
}
