//! `portclippy`: lints a FreeBSD Ports `Makefile` without modifying it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use portfmt::cli::{self, EXIT_ERROR, EXIT_FINDINGS, EXIT_OK};
use portfmt::edit::{self, Finding, Severity};
use portfmt::error::ParserError;

/// Lint a port Makefile for unknown variables/targets, duplicate
/// commands, stale commented-out metadata and unsorted values.
#[derive(Parser, Debug)]
#[command(name = "portclippy", version, about)]
struct Args {
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    cli::init_logging();
    let args = Args::parse();

    let mut found_anything = false;
    let mut had_error = false;
    for path in &args.files {
        match lint_file(path) {
            Ok(findings) => {
                found_anything |= !findings.is_empty();
                for finding in &findings {
                    print_finding(path, finding);
                }
            }
            Err(err) => {
                cli::report_error(path, &err);
                had_error = true;
            }
        }
    }

    if had_error {
        cli::exit(EXIT_ERROR)
    } else if found_anything {
        cli::exit(EXIT_FINDINGS)
    } else {
        cli::exit(EXIT_OK)
    }
}

fn lint_file(path: &PathBuf) -> Result<Vec<Finding>, ParserError> {
    let input = std::fs::read_to_string(path)?;
    let ast = portfmt::builder::parse_str(&input)?;

    let mut findings = edit::lint_bsd_port(&ast);
    findings.extend(edit::lint_clones(&ast));
    findings.extend(edit::lint_commented_portrevision(&ast));
    findings.extend(edit::lint_order(&ast));
    findings.sort_by_key(|f| f.range.start);
    Ok(findings)
}

fn print_finding(path: &PathBuf, finding: &Finding) {
    let level = match finding.severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    println!(
        "{}:{}: {level}: {}",
        path.display(),
        finding.range.start,
        finding.message
    );
}
