//! Shared CLI plumbing (C10) for the four `port*` binaries: exit-code
//! mapping, diagnostic rendering and logging setup.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::error::ParserError;

/// Exit codes shared by every binary, per the crate's documented
/// interface: `0` success, `1` a hard parser/IO/edit error, `2`
/// differences found (or no change to apply) and nothing else went
/// wrong.
pub const EXIT_OK: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_FINDINGS: u8 = 2;

/// Initializes `tracing-subscriber` from `RUST_LOG`, defaulting to
/// `portfmt=info` when unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfmt=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints a [`ParserError`] to stderr as `path: message`, followed by
/// its `note()`/`help()` pair, then returns [`EXIT_ERROR`]. When
/// `PORTFMT_DEBUG` is set, the error's `Debug` source chain is printed
/// too.
pub fn report_error(path: &Path, err: &ParserError) -> ExitCode {
    eprintln!("{}: {err}", path.display());
    eprintln!("  note: {}", err.note());
    eprintln!("  help: {}", err.help());
    if std::env::var_os("PORTFMT_DEBUG").is_some() {
        eprintln!("{err:#?}");
    }
    ExitCode::from(EXIT_ERROR)
}

/// Prints a [`ParserError::DifferencesFound`] note/help pair to stderr
/// (`-D` diff mode's non-empty-diff case, `unknown-targets`/`unknown-vars`
/// style lint findings) and returns [`EXIT_FINDINGS`], not [`EXIT_ERROR`]:
/// a diff being non-empty isn't a hard failure.
pub fn report_differences(path: &Path) -> ExitCode {
    let err = ParserError::DifferencesFound;
    eprintln!("{}: {err}", path.display());
    eprintln!("  note: {}", err.note());
    eprintln!("  help: {}", err.help());
    ExitCode::from(EXIT_FINDINGS)
}

pub fn exit(code: u8) -> ExitCode {
    ExitCode::from(code)
}
