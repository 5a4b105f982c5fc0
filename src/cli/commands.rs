//! Command implementations for the docspell CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::allowlist::{AllowList, AllowListConfig, AllowListEntry, AllowListFile};
use crate::analysis::scan::find_unknown_words;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DocspellError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DocspellArgs) -> Result<()> {
    match &args.command {
        Command::List(list_args) => list_entries(list_args, &args),
        Command::Check(check_args) => check_tokens(check_args, &args),
        Command::Validate(validate_args) => validate_file(validate_args, &args),
        Command::Scan(scan_args) => scan_files(scan_args, &args),
        Command::Export(export_args) => export_allowlist(export_args, &args),
    }
}

/// Load the allow-list selected by the global arguments.
pub fn load_allowlist(args: &DocspellArgs) -> Result<AllowList> {
    match &args.allowlist {
        Some(path) => {
            info!("Loading allow-list from {}", path.display());
            AllowListFile::load(path)?.build()
        }
        None => {
            debug!("Using built-in allow-list");
            Ok(AllowList::builtin())
        }
    }
}

/// List allow-list entries.
fn list_entries(args: &ListArgs, cli_args: &DocspellArgs) -> Result<()> {
    let allowlist = load_allowlist(cli_args)?;
    let entries = allowlist
        .entries()
        .iter()
        .filter(|entry| args.kind.is_none_or(|kind| entry.kind() == kind))
        .map(|entry| EntryListing {
            kind: entry.kind().to_string(),
            value: entry.raw().to_string(),
            description: match entry {
                AllowListEntry::Pattern(pattern) => pattern.description().map(str::to_string),
                AllowListEntry::Literal(_) => None,
            },
        })
        .collect();

    output_result("Allow-list entries", &ListResult { entries }, cli_args)
}

/// Check tokens against the allow-list.
fn check_tokens(args: &CheckArgs, cli_args: &DocspellArgs) -> Result<()> {
    let allowlist = load_allowlist(cli_args)?;

    let verdicts: Vec<TokenVerdict> = args
        .tokens
        .iter()
        .map(|token| {
            let matched_by = allowlist.find_match(token).map(|entry| entry.to_string());
            TokenVerdict {
                token: token.clone(),
                allowed: matched_by.is_some(),
                matched_by,
            }
        })
        .collect();
    let denied = verdicts.iter().filter(|verdict| !verdict.allowed).count();

    output_result("Token check", &CheckResults { verdicts, denied }, cli_args)?;

    if args.strict && denied > 0 {
        return Err(DocspellError::other(format!("{denied} token(s) not allowed")));
    }

    Ok(())
}

/// Validate an allow-list file.
fn validate_file(args: &ValidateArgs, cli_args: &DocspellArgs) -> Result<()> {
    let path = args.file.display().to_string();
    let file = AllowListFile::load(&args.file)?;

    let result = match file.build() {
        Ok(allowlist) => ValidationResult {
            path,
            valid: true,
            literals: Some(allowlist.literals().count()),
            patterns: Some(allowlist.patterns().count()),
            error: None,
        },
        Err(e) if e.is_malformed_pattern() => ValidationResult {
            path,
            valid: false,
            literals: None,
            patterns: None,
            error: Some(e.to_string()),
        },
        Err(e) => return Err(e),
    };

    output_result("Validation result", &result, cli_args)?;

    if !result.valid {
        return Err(DocspellError::other(format!(
            "{} is not a valid allow-list",
            args.file.display()
        )));
    }

    Ok(())
}

/// Scan text files for words not covered by the allow-list.
fn scan_files(args: &ScanArgs, cli_args: &DocspellArgs) -> Result<()> {
    let allowlist = load_allowlist(cli_args)?;
    let tokenizer = match &args.token_pattern {
        Some(pattern) => RegexTokenizer::with_pattern(pattern).map_err(|e| {
            DocspellError::invalid_argument(format!("--token-pattern {pattern:?}: {e}"))
        })?,
        None => RegexTokenizer::new()?,
    };

    let start_time = Instant::now();
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(scan_file(&allowlist, &tokenizer, path)?);
    }
    let total_findings: usize = files.iter().map(|file| file.findings.len()).sum();

    let results = ScanResults {
        files,
        total_findings,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    output_result("Scan results", &results, cli_args)?;

    if args.strict && total_findings > 0 {
        return Err(DocspellError::other(format!(
            "{total_findings} unknown word(s) found"
        )));
    }

    Ok(())
}

fn scan_file(
    allowlist: &AllowList,
    tokenizer: &RegexTokenizer,
    path: &Path,
) -> Result<FileFindings> {
    let text = fs::read_to_string(path)?;
    let findings = find_unknown_words(allowlist, tokenizer, &text)?;
    debug!("{}: {} unknown word(s)", path.display(), findings.len());

    Ok(FileFindings {
        path: path.display().to_string(),
        findings,
    })
}

/// Export the active allow-list as JSON.
fn export_allowlist(args: &ExportArgs, cli_args: &DocspellArgs) -> Result<()> {
    let allowlist = load_allowlist(cli_args)?;
    let config = AllowListConfig::from_allowlist(&allowlist);

    match &args.output {
        Some(path) => {
            config.save_json(path, cli_args.pretty)?;
            if cli_args.verbosity() > 0 {
                println!("Exported {} entries to {}", allowlist.len(), path.display());
            }
        }
        None => println!("{}", config.to_json_string(cli_args.pretty)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::EntryKind;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> DocspellArgs {
        DocspellArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_builtin_by_default() {
        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "list"])
        };
        let allowlist = load_allowlist(&args).unwrap();
        assert!(allowlist.is_allowed("gradle"));
    }

    #[test]
    fn test_check_strict_fails_on_unknown() {
        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "check", "gradle", "randomlowercaseword", "--strict"])
        };
        assert!(execute_command(args).is_err());

        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "check", "gradle", "FooBar", "--strict"])
        };
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_validate_reports_malformed_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"{ "patterns": ["^package:.*"], "words": ["gradle"] }"#).unwrap();
        fs::write(&bad, r#"{ "patterns": ["^package:(.*"], "words": [] }"#).unwrap();

        let args = parse(&["docspell", "-q", "validate", good.to_str().unwrap()]);
        assert!(execute_command(args).is_ok());

        let args = parse(&["docspell", "-q", "validate", bad.to_str().unwrap()]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_validate_failure_omits_counts() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "gradle\nmelos\n^[bad\n").unwrap();

        let args = parse(&["docspell", "-q", "validate", bad.to_str().unwrap()]);
        assert!(execute_command(args).is_err());

        let result = ValidationResult {
            path: "bad.txt".to_string(),
            valid: false,
            literals: None,
            patterns: None,
            error: Some("entry 2".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("literals").is_none());
        assert!(json.get("patterns").is_none());
        assert_eq!(json["valid"], false);
    }

    #[test]
    fn test_list_filters_by_kind() {
        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "list", "--kind", "pattern"])
        };
        assert!(matches!(
            &args.command,
            Command::List(list) if list.kind == Some(EntryKind::Pattern)
        ));
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_bad_token_pattern_is_invalid_argument() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "gradle").unwrap();

        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "scan", doc.to_str().unwrap(), "--token-pattern", "[a-"])
        };
        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, DocspellError::InvalidArgument(_)));
        assert!(err.to_string().contains("--token-pattern"));
    }

    #[test]
    fn test_export_then_load() {
        let dir = TempDir::new().unwrap();
        let exported = dir.path().join("exported.json");

        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "export", "-o", exported.to_str().unwrap()])
        };
        execute_command(args).unwrap();

        let args = DocspellArgs {
            allowlist: Some(exported.clone()),
            ..parse(&["docspell", "list"])
        };
        let allowlist = load_allowlist(&args).unwrap();
        assert_eq!(allowlist.len(), AllowList::builtin().len());
        assert!(allowlist.is_allowed("package:melos"));
    }

    #[test]
    fn test_scan_strict() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "Configure Crashlytics with gradle").unwrap();

        let args = DocspellArgs {
            allowlist: None,
            ..parse(&["docspell", "-q", "scan", doc.to_str().unwrap(), "--strict"])
        };
        // "with" is ordinary English and not on the allow-list.
        assert!(execute_command(args).is_err());
    }
}
