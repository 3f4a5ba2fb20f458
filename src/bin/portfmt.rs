//! `portfmt`: reformats FreeBSD Ports `Makefile`s.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use portfmt::cli::{self, EXIT_FINDINGS, EXIT_OK};
use portfmt::edit;
use portfmt::error::ParserError;
use portfmt::format;
use portfmt::settings::ParserSettings;

/// Reformat a FreeBSD Ports Makefile.
#[derive(Parser, Debug)]
#[command(name = "portfmt", version, about)]
struct Args {
    /// File to format. Reads stdin and writes stdout when omitted.
    file: Option<PathBuf>,

    /// Rewrite the file in place instead of printing to stdout.
    #[arg(short = 'i')]
    in_place: bool,

    /// Print a unified diff instead of the reformatted text, and exit 2
    /// if it is non-empty. Takes an optional number of context lines.
    #[arg(short = 'D', value_name = "ctx", num_args = 0..=1, default_missing_value = "3")]
    diff: Option<usize>,

    /// Enable debug tracing, regardless of `RUST_LOG`.
    #[arg(short = 'd')]
    debug: bool,

    /// Trim trailing whitespace from every line before formatting.
    #[arg(short = 't')]
    trim_trailing_whitespace: bool,

    /// Disable goal-column alignment for variables the knowledge base
    /// doesn't recognize.
    #[arg(short = 'u')]
    no_unknown_goal_col: bool,

    /// Force goal-column alignment for variables the knowledge base
    /// doesn't recognize (the default; accepted for symmetry with `-u`).
    #[arg(short = 'U')]
    unknown_goal_col: bool,

    /// Wrap values at this column instead of the default.
    #[arg(short = 'w', long)]
    wrapcol: Option<usize>,

    /// Load settings from this config file before applying flags.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.debug && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "portfmt=debug");
    }
    cli::init_logging();

    let mut settings = match &args.config {
        Some(path) => match ParserSettings::from_file(path) {
            Ok(s) => s,
            Err(err) => return cli::report_error(path, &err),
        },
        None => ParserSettings::default(),
    };
    if let Some(wrapcol) = args.wrapcol {
        settings.wrapcol = wrapcol;
    }
    if args.unknown_goal_col {
        settings.unknown_var_goal_col = Some(true);
    } else if args.no_unknown_goal_col {
        settings.unknown_var_goal_col = Some(false);
    }

    match &args.file {
        Some(path) => match run_file(path, &settings, &args) {
            Ok(code) => cli::exit(code),
            Err(err) => cli::report_error(path, &err),
        },
        None => run_stdin(&settings, &args),
    }
}

fn run_stdin(settings: &ParserSettings, args: &Args) -> ExitCode {
    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        return cli::report_error(&PathBuf::from("<stdin>"), &ParserError::Io(err));
    }
    match reformat(&input, settings, args) {
        Ok((text, changed, is_diff)) => {
            print!("{text}");
            if is_diff && changed {
                return cli::report_differences(&PathBuf::from("<stdin>"));
            }
            cli::exit(EXIT_OK)
        }
        Err(err) => cli::report_error(&PathBuf::from("<stdin>"), &err),
    }
}

fn run_file(path: &PathBuf, settings: &ParserSettings, args: &Args) -> Result<u8, ParserError> {
    let input = std::fs::read_to_string(path)?;
    let (text, changed, is_diff) = reformat(&input, settings, args)?;

    if is_diff {
        print!("{text}");
        return Ok(if changed { EXIT_FINDINGS } else { EXIT_OK });
    }
    if args.in_place {
        if changed {
            std::fs::write(path, &text)?;
        }
    } else {
        print!("{text}");
    }
    Ok(EXIT_OK)
}

/// Reformats `input`, returning the text to print, whether it differs
/// from `input`, and whether that text is a diff rather than the
/// reformatted file itself.
fn reformat(input: &str, settings: &ParserSettings, args: &Args) -> Result<(String, bool, bool), ParserError> {
    let source = if args.trim_trailing_whitespace {
        trim_trailing_whitespace(input)
    } else {
        input.to_string()
    };
    let mut ast = portfmt::builder::parse_str(&source)?;
    edit::run_mandatory_passes(&mut ast)?;
    let formatted = format::print(&ast, settings);
    let changed = formatted != input;

    if let Some(ctx) = args.diff {
        Ok((format::unified_diff(input, &formatted, ctx), changed, true))
    } else {
        Ok((formatted, changed, false))
    }
}

fn trim_trailing_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        let (line, newline) = match line.strip_suffix('\n') {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        out.push_str(line.trim_end());
        if newline {
            out.push('\n');
        }
    }
    out
}
