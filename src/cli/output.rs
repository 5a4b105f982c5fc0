//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::scan::Finding;
use crate::cli::args::{DocspellArgs, OutputFormat};
use crate::error::Result;

/// A single entry as listed by `list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryListing {
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result structure for `list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub entries: Vec<EntryListing>,
}

/// Verdict for one token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenVerdict {
    pub token: String,
    pub allowed: bool,
    /// The entry that allowed the token, rendered as in `list`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<String>,
}

/// Result structure for `check`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub verdicts: Vec<TokenVerdict>,
    pub denied: usize,
}

/// Result structure for `validate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub path: String,
    pub valid: bool,
    /// Literal count, present only when the file is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literals: Option<usize>,
    /// Pattern count, present only when the file is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Unknown words found in one file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileFindings {
    pub path: String,
    pub findings: Vec<Finding>,
}

/// Result structure for `scan`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResults {
    pub files: Vec<FileFindings>,
    pub total_findings: usize,
    pub duration_ms: u64,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print this result for a terminal reader.
    fn print_human(&self, args: &DocspellArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &DocspellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DocspellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for ListResult {
    fn print_human(&self, args: &DocspellArgs) {
        for entry in &self.entries {
            match &entry.description {
                Some(description) if args.verbosity() > 0 => {
                    println!("{:<8} {}  ({})", entry.kind, entry.value, description)
                }
                _ => println!("{:<8} {}", entry.kind, entry.value),
            }
        }
    }
}

impl HumanOutput for CheckResults {
    fn print_human(&self, args: &DocspellArgs) {
        for verdict in &self.verdicts {
            match &verdict.matched_by {
                Some(entry) => println!("allowed  {}  [{}]", verdict.token, entry),
                None => println!("unknown  {}", verdict.token),
            }
        }

        if args.verbosity() > 0 {
            println!();
            println!(
                "{} of {} token(s) not allowed",
                self.denied,
                self.verdicts.len()
            );
        }
    }
}

impl HumanOutput for ValidationResult {
    fn print_human(&self, _args: &DocspellArgs) {
        match (&self.error, self.literals, self.patterns) {
            (Some(error), _, _) => println!("{}: {}", self.path, error),
            (None, Some(literals), Some(patterns)) => {
                println!("{}: ok ({literals} literals, {patterns} patterns)", self.path)
            }
            (None, _, _) => println!("{}: ok", self.path),
        }
    }
}

impl HumanOutput for ScanResults {
    fn print_human(&self, args: &DocspellArgs) {
        for file in &self.files {
            for finding in &file.findings {
                println!(
                    "{}:{}:{}: {}",
                    file.path, finding.line, finding.column, finding.word
                );
            }
        }

        if args.verbosity() > 0 {
            println!();
            println!(
                "{} unknown word(s) in {} file(s) ({}ms)",
                self.total_findings,
                self.files.len(),
                self.duration_ms
            );
        }
    }
}
