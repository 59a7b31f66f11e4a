//! Command-line argument handling
//!
//! The program takes exactly two positional paths and nothing else: no
//! flags, not even `--help`. Anything after the second path is ignored, and
//! a value that starts with `-`, a bare `--` included, is still just a path.

use crate::error::{ErrorCategory, ErrorKind, Result, UpscaleError};
use crate::upscale::UpscaleJob;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::iter;
use std::path::PathBuf;

/// Printed to stdout when fewer than two arguments are given.
pub const USAGE: &str = "Usage: python upscale.py <input> <output>";

#[derive(Parser, Debug)]
#[command(name = "upscale")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path of the image to upscale
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Path the upscaled image would be saved to
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[arg(hide = true, num_args = 1..)]
    ignored: Vec<OsString>,
}

/// Build an [`UpscaleJob`] from a raw argument list.
///
/// The first item is the program name, as yielded by `std::env::args_os`.
pub fn parse_args<I, T>(args: I) -> Result<UpscaleJob>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("upscale"));

    // Everything after the program name is positional, so clap must not see
    // any later `--` or `-x` as syntax.
    let argv = iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(args);

    let cli = Cli::try_parse_from(argv).map_err(|e| {
        tracing::debug!(error = %e, "argument parsing failed");
        missing_arguments()
    })?;

    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    match (cli.input, cli.output) {
        (Some(input), Some(output)) => Ok(UpscaleJob::new(input, output)),
        _ => Err(missing_arguments()),
    }
}

/// Write the usage line to `out`.
///
/// A closed or failing stream is reported as [`ErrorKind::Io`] rather than
/// panicking the way `println!` would.
pub fn write_usage(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", USAGE)
        .and_then(|()| out.flush())
        .map_err(|e| {
            UpscaleError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                "failed to write usage",
                e,
            )
        })
}

fn missing_arguments() -> UpscaleError {
    UpscaleError::with_kind(ErrorCategory::User, ErrorKind::MissingArguments, USAGE)
}
