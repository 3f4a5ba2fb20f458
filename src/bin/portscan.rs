//! `portscan`: lints every port Makefile under a ports tree concurrently,
//! one worker per CPU, and persists the aggregate report as a log.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use portfmt::cli::{self, EXIT_ERROR, EXIT_FINDINGS, EXIT_OK};
use portfmt::edit::{self, Finding};
use rayon::prelude::*;
use regex::Regex;
use tracing::warn;

/// Recursively lint a ports tree (or a single category/port directory),
/// persisting findings as a log.
#[derive(Parser, Debug)]
#[command(name = "portscan", version, about)]
struct Args {
    /// Directory for timestamped log files and the `portscan-latest`/
    /// `portscan-previous` symlinks. Findings still print to stdout
    /// when omitted; only the log files are skipped.
    #[arg(short = 'l', long = "logdir")]
    logdir: Option<PathBuf>,

    /// Root of the ports tree. Falls back to `$PORTSDIR`, then `.`.
    #[arg(short = 'p', long = "portsdir")]
    portsdir: Option<PathBuf>,

    /// Only scan origins (`category/portname`) matching this regex.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Restrict to the unknown-variable check.
    #[arg(long = "unknown-vars")]
    unknown_vars: bool,
    /// Restrict to the unknown-target check.
    #[arg(long = "unknown-targets")]
    unknown_targets: bool,
    /// Restrict to the duplicate-target-command check.
    #[arg(long = "clones")]
    clones: bool,
    /// Restrict to the commented-out PORTREVISION/PORTEPOCH check.
    #[arg(long = "commented-revision")]
    commented_revision: bool,
    /// Restrict to the unsorted-values check.
    #[arg(long = "order")]
    order: bool,

    /// Origins (`category/portname`) to scan. Scans the whole tree
    /// rooted at `--portsdir` when empty.
    origins: Vec<String>,
}

/// Which checks `lint_one` runs. Every field true unless the CLI named
/// at least one specific check, in which case only the named ones run.
#[derive(Debug, Clone, Copy)]
struct Checks {
    unknown_vars: bool,
    unknown_targets: bool,
    clones: bool,
    commented_revision: bool,
    order: bool,
}

impl Checks {
    fn from_args(args: &Args) -> Self {
        let any = args.unknown_vars
            || args.unknown_targets
            || args.clones
            || args.commented_revision
            || args.order;
        if !any {
            return Self {
                unknown_vars: true,
                unknown_targets: true,
                clones: true,
                commented_revision: true,
                order: true,
            };
        }
        Self {
            unknown_vars: args.unknown_vars,
            unknown_targets: args.unknown_targets,
            clones: args.clones,
            commented_revision: args.commented_revision,
            order: args.order,
        }
    }
}

struct OriginReport {
    origin: String,
    findings: Vec<Finding>,
}

fn main() -> ExitCode {
    cli::init_logging();
    let args = Args::parse();

    let portsdir = args
        .portsdir
        .clone()
        .or_else(|| std::env::var_os("PORTSDIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let query = match &args.query {
        Some(pattern) => match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                eprintln!("{pattern}: {err}");
                return cli::exit(EXIT_ERROR);
            }
        },
        None => None,
    };

    let mut makefiles = Vec::new();
    if let Err(err) = collect_makefiles(&portsdir, &mut makefiles) {
        eprintln!("{}: {err}", portsdir.display());
        return cli::exit(EXIT_ERROR);
    }

    let origins: Vec<(String, PathBuf)> = makefiles
        .into_iter()
        .map(|path| (origin_of(&portsdir, &path), path))
        .filter(|(origin, _)| args.origins.is_empty() || args.origins.contains(origin))
        .filter(|(origin, _)| query.as_ref().is_none_or(|re| re.is_match(origin)))
        .collect();

    let checks = Checks::from_args(&args);
    let log: Mutex<Vec<OriginReport>> = Mutex::new(Vec::new());
    let errors: Mutex<Vec<(String, String)>> = Mutex::new(Vec::new());

    origins.par_iter().for_each(|(origin, path)| match lint_one(path, checks) {
        Ok(findings) => {
            if !findings.is_empty() {
                log.lock().unwrap().push(OriginReport {
                    origin: origin.clone(),
                    findings,
                });
            }
        }
        Err(err) => {
            warn!(origin = %origin, error = %err, "failed to parse");
            errors.lock().unwrap().push((origin.clone(), err.to_string()));
        }
    });

    let mut reports = log.into_inner().unwrap();
    reports.sort_by(|a, b| a.origin.cmp(&b.origin));
    let errors = errors.into_inner().unwrap();

    let lines = render_log_lines(&reports, &errors, origins.len());
    for line in &lines {
        println!("{line}");
    }

    if let Some(logdir) = &args.logdir {
        if let Err(err) = persist_log(logdir, &lines) {
            eprintln!("{}: {err}", logdir.display());
            return cli::exit(EXIT_ERROR);
        }
    }

    let total_findings: usize = reports.iter().map(|r| r.findings.len()).sum();
    if !errors.is_empty() {
        cli::exit(EXIT_ERROR)
    } else if total_findings > 0 {
        cli::exit(EXIT_FINDINGS)
    } else {
        cli::exit(EXIT_OK)
    }
}

/// Maps a finding's message to its one/two-letter log `TYPE` (§6):
/// `V` unknown variable, `T` unknown target, `Vc` duplicate target
/// command, `Ce` commented-out PORTREVISION/PORTEPOCH, `Vv` unsorted
/// values. `OD`/`OG`/`O`/`Cu`/`C` are reserved for option-metadata and
/// category-membership cross-file checks this tree doesn't implement.
fn finding_type(message: &str) -> &'static str {
    if message.starts_with("unknown variable") {
        "V"
    } else if message.starts_with("unknown target") {
        "T"
    } else if message.starts_with("duplicate of the command") {
        "Vc"
    } else if message.starts_with("commented-out") {
        "Ce"
    } else {
        "Vv"
    }
}

fn render_log_lines(reports: &[OriginReport], errors: &[(String, String)], scanned: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for report in reports {
        for finding in &report.findings {
            lines.push(format!(
                "{} {} {}",
                finding_type(&finding.message),
                report.origin,
                finding.message
            ));
        }
    }
    for (origin, message) in errors {
        lines.push(format!("E {origin} {message}"));
    }
    let total_findings: usize = reports.iter().map(|r| r.findings.len()).sum();
    lines.push(format!(
        "# scanned {scanned} origin(s), {total_findings} finding(s) in {} origin(s), {} error(s)",
        reports.len(),
        errors.len()
    ));
    lines
}

/// Writes `lines` to a new timestamped file in `logdir`, then rotates
/// `portscan-previous` to what `portscan-latest` pointed to and
/// `portscan-latest` to the new file.
fn persist_log(logdir: &Path, lines: &[String]) -> std::io::Result<()> {
    std::fs::create_dir_all(logdir)?;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let log_name = format!("portscan-{timestamp}.log");
    let log_path = logdir.join(&log_name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&log_path, contents)?;

    let latest = logdir.join("portscan-latest");
    let previous = logdir.join("portscan-previous");
    if let Ok(prior_target) = std::fs::read_link(&latest) {
        let _ = std::fs::remove_file(&previous);
        #[cfg(unix)]
        std::os::unix::fs::symlink(&prior_target, &previous)?;
    }
    let _ = std::fs::remove_file(&latest);
    #[cfg(unix)]
    std::os::unix::fs::symlink(&log_name, &latest)?;
    Ok(())
}

/// The ports-tree-relative `category/portname` for a Makefile path, or
/// the path itself when it isn't nested two levels under `portsdir`.
fn origin_of(portsdir: &Path, makefile: &Path) -> String {
    let dir = makefile.parent().unwrap_or(makefile);
    match dir.strip_prefix(portsdir) {
        Ok(rel) if rel.components().count() > 0 => rel.to_string_lossy().replace('\\', "/"),
        _ => dir.to_string_lossy().to_string(),
    }
}

fn collect_makefiles(root: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if root.is_file() {
        out.push(root.to_path_buf());
        return Ok(());
    }
    let mut entries: Vec<_> = std::fs::read_dir(root)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::path);
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_makefiles(&path, out)?;
        } else if path.file_name().and_then(|n| n.to_str()) == Some("Makefile") {
            out.push(path);
        }
    }
    Ok(())
}

fn lint_one(path: &Path, checks: Checks) -> portfmt::error::Result<Vec<Finding>> {
    let input = std::fs::read_to_string(path)?;
    let ast = portfmt::builder::parse_str(&input)?;
    let mut findings = Vec::new();
    if checks.unknown_vars || checks.unknown_targets {
        findings.extend(edit::lint_bsd_port(&ast));
    }
    if checks.clones {
        findings.extend(edit::lint_clones(&ast));
    }
    if checks.commented_revision {
        findings.extend(edit::lint_commented_portrevision(&ast));
    }
    if checks.order {
        findings.extend(edit::lint_order(&ast));
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_of_strips_portsdir_prefix() {
        let portsdir = PathBuf::from("/usr/ports");
        let makefile = PathBuf::from("/usr/ports/www/nginx/Makefile");
        assert_eq!(origin_of(&portsdir, &makefile), "www/nginx");
    }

    #[test]
    fn finding_type_maps_known_messages() {
        assert_eq!(finding_type("unknown variable `FOO`"), "V");
        assert_eq!(finding_type("unknown target `bogus`"), "T");
        assert_eq!(finding_type("duplicate of the command at line 3"), "Vc");
        assert_eq!(finding_type("commented-out PORTREVISION/PORTEPOCH should be deleted, not disabled"), "Ce");
        assert_eq!(finding_type("values of `USES` are not sorted"), "Vv");
    }

    #[test]
    fn checks_from_args_defaults_to_all_when_none_named() {
        let args = Args {
            logdir: None,
            portsdir: None,
            query: None,
            unknown_vars: false,
            unknown_targets: false,
            clones: false,
            commented_revision: false,
            order: false,
            origins: Vec::new(),
        };
        let checks = Checks::from_args(&args);
        assert!(checks.unknown_vars && checks.order && checks.clones);
    }

    #[test]
    fn checks_from_args_restricts_to_named_checks() {
        let args = Args {
            logdir: None,
            portsdir: None,
            query: None,
            unknown_vars: true,
            unknown_targets: false,
            clones: false,
            commented_revision: false,
            order: false,
            origins: Vec::new(),
        };
        let checks = Checks::from_args(&args);
        assert!(checks.unknown_vars);
        assert!(!checks.order);
    }

    #[test]
    fn persist_log_rotates_latest_into_previous() {
        let dir = tempfile::tempdir().unwrap();
        persist_log(dir.path(), &["# first run".to_string()]).unwrap();
        let first_target = std::fs::read_link(dir.path().join("portscan-latest")).unwrap();
        persist_log(dir.path(), &["# second run".to_string()]).unwrap();
        let previous_target = std::fs::read_link(dir.path().join("portscan-previous")).unwrap();
        assert_eq!(previous_target, first_target);
    }
}
