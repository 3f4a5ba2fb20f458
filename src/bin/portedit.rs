//! `portedit`: programmatic edits to a single FreeBSD Ports `Makefile`
//! (revision/epoch bumps, version bumps, `Uses`/`OPTIONS` merges,
//! one-off mandatory-pass application, unknown-variable/target queries).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use portfmt::ast::Node;
use portfmt::cli::{self, EXIT_FINDINGS, EXIT_OK};
use portfmt::edit;
use portfmt::error::ParserError;
use portfmt::format;
use portfmt::settings::ParserSettings;
use regex::Regex;

/// Apply a single programmatic edit to a port Makefile.
#[derive(Parser, Debug)]
#[command(name = "portedit", version, about)]
struct Args {
    /// The Makefile to edit.
    file: PathBuf,

    /// Rewrite the file in place instead of printing to stdout.
    #[arg(short = 'i', long)]
    in_place: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// `list` to print the names `apply <edit>` accepts, or the name
    /// of one mandatory sanitizing pass to run again on its own.
    Apply { edit: String },
    /// Increment PORTEPOCH, inserting it if absent.
    BumpEpoch,
    /// Increment PORTREVISION, inserting it if absent.
    BumpRevision,
    /// Print every variable assignment whose name matches a regex.
    Get { pattern: String },
    /// Parse `expr` as a `VAR=value value...` assignment and merge its
    /// values into the file's existing `VAR`, deduping and re-sorting
    /// as needed.
    Merge {
        #[arg(short = 'e')]
        expr: String,
    },
    /// Normalize the file: this is a no-op beyond the mandatory passes
    /// every `portedit` invocation already runs, for callers that want
    /// to request normalization without any other edit.
    SanitizeAppend,
    /// Set PORTVERSION/DISTVERSION and clear PORTREVISION.
    SetVersion { version: String },
    /// List target names `portclippy`'s knowledge base doesn't recognize.
    UnknownTargets,
    /// List variable names `portclippy`'s knowledge base doesn't recognize.
    UnknownVars,
}

fn main() -> ExitCode {
    cli::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => cli::exit(code),
        Err(err) => cli::report_error(&args.file, &err),
    }
}

fn run(args: &Args) -> Result<u8, ParserError> {
    let input = std::fs::read_to_string(&args.file)?;
    let mut ast = portfmt::builder::parse_str(&input)?;
    edit::run_mandatory_passes(&mut ast)?;

    match &args.command {
        Command::Apply { edit: name } if name == "list" => {
            for pass in edit::available_passes() {
                println!("{}", pass.name());
            }
            return Ok(EXIT_OK);
        }
        Command::Apply { edit: name } => {
            let pass = edit::find_pass(name).ok_or_else(|| ParserError::InvalidArgument {
                location: Default::default(),
                message: format!("unknown edit `{name}`, see `apply list`"),
            })?;
            pass.run(&mut ast)?;
        }
        Command::BumpEpoch => edit::edit_bump_epoch(&mut ast)?,
        Command::BumpRevision => edit::edit_bump_revision(&mut ast)?,
        Command::Get { pattern } => {
            let re = Regex::new(pattern).map_err(|e| ParserError::InvalidArgument {
                location: Default::default(),
                message: e.to_string(),
            })?;
            ast.walk(|node| {
                if let Node::Variable(v) = node {
                    if re.is_match(&v.name) {
                        println!("{}{}{}", v.name, v.modifier.as_str(), v.words.join(" "));
                    }
                }
                true
            });
            return Ok(EXIT_OK);
        }
        Command::Merge { expr } => {
            let mut assignment_text = expr.clone();
            assignment_text.push('\n');
            let parsed = portfmt::builder::parse_str(&assignment_text)?;
            let Some(Node::Variable(v)) = parsed.root.into_iter().find(|n| matches!(n, Node::Variable(_))) else {
                return Err(ParserError::InvalidArgument {
                    location: Default::default(),
                    message: format!("`{expr}` is not a variable assignment"),
                });
            };
            edit::edit_merge(&mut ast, &v.name, &v.words)?;
        }
        Command::SanitizeAppend => {}
        Command::SetVersion { version } => edit::edit_set_version(&mut ast, version)?,
        Command::UnknownTargets => {
            let mut any = false;
            for f in edit::lint_bsd_port(&ast) {
                if f.message.starts_with("unknown target") {
                    println!("{}: {}", f.range.start, f.message);
                    any = true;
                }
            }
            return Ok(if any { EXIT_FINDINGS } else { EXIT_OK });
        }
        Command::UnknownVars => {
            let mut any = false;
            for f in edit::lint_bsd_port(&ast) {
                if f.message.starts_with("unknown variable") {
                    println!("{}: {}", f.range.start, f.message);
                    any = true;
                }
            }
            return Ok(if any { EXIT_FINDINGS } else { EXIT_OK });
        }
    }

    let settings = ParserSettings::default();
    let output = format::print(&ast, &settings);
    if args.in_place {
        std::fs::write(&args.file, output)?;
    } else {
        print!("{output}");
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Makefile");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn args(file: PathBuf, command: Command) -> Args {
        Args { file, in_place: false, command }
    }

    #[test]
    fn apply_list_does_not_error() {
        let (_dir, path) = write_temp("PORTNAME=\tfoo\n");
        let a = args(path, Command::Apply { edit: "list".to_string() });
        assert_eq!(run(&a).unwrap(), EXIT_OK);
    }

    #[test]
    fn apply_unknown_edit_is_rejected() {
        let (_dir, path) = write_temp("PORTNAME=\tfoo\n");
        let a = args(path, Command::Apply { edit: "bogus".to_string() });
        assert!(run(&a).is_err());
    }

    #[test]
    fn apply_dedup_tokens_by_name() {
        let (_dir, path) = write_temp("USES=\tgmake cmake cmake\n");
        let a = args(path, Command::Apply { edit: "dedup-tokens".to_string() });
        assert_eq!(run(&a).unwrap(), EXIT_OK);
    }

    #[test]
    fn bump_epoch_inserts_when_absent() {
        let (_dir, path) = write_temp("PORTVERSION=\t1.0\n");
        let a = args(path.clone(), Command::BumpEpoch);
        run(&a).unwrap();
    }

    #[test]
    fn merge_parses_assignment_expression() {
        let (_dir, path) = write_temp("USES=\tcmake\n");
        let a = args(path, Command::Merge { expr: "USES=gmake".to_string() });
        assert_eq!(run(&a).unwrap(), EXIT_OK);
    }

    #[test]
    fn get_matches_variable_names_by_regex() {
        let (_dir, path) = write_temp("PORTNAME=\tfoo\nPORTVERSION=\t1.0\n");
        let a = args(path, Command::Get { pattern: "^PORT".to_string() });
        assert_eq!(run(&a).unwrap(), EXIT_OK);
    }

    #[test]
    fn unknown_vars_reports_findings_exit_code() {
        let (_dir, path) = write_temp("TOTALLY_MADE_UP_VAR=\tfoo\n");
        let a = args(path, Command::UnknownVars);
        assert_eq!(run(&a).unwrap(), EXIT_FINDINGS);
    }

    #[test]
    fn unknown_targets_reports_findings_exit_code() {
        let (_dir, path) = write_temp("bogus-target:\n\techo hi\n");
        let a = args(path, Command::UnknownTargets);
        assert_eq!(run(&a).unwrap(), EXIT_FINDINGS);
    }
}
