//! upscale CLI - simulated image upscaling
//!
//! `upscale <input> <output>` reports the job, pauses, and reports where the
//! result would be saved. Fewer than two arguments prints usage and exits 1.

use std::io;
use std::process;

use upscale::cli;
use upscale::error::UpscaleError;
use upscale::logging;
use upscale::pause::ThreadSleepPause;
use upscale::upscale as run;

fn main() {
    logging::init_logger();

    let job = match cli::parse_args(std::env::args_os()) {
        Ok(job) => job,
        Err(e) if e.is_missing_arguments() => {
            if let Err(write_err) = cli::write_usage(&mut io::stdout().lock()) {
                tracing::warn!(error = %write_err.report(), "could not print usage");
            }
            process::exit(e.exit_code());
        }
        Err(e) => fail(e),
    };

    let stdout = io::stdout();
    let result = run::upscale(&job, &mut stdout.lock(), &mut ThreadSleepPause::new());

    if let Err(e) = result {
        fail(e.with_context(format!("failed to upscale {}", job.input.display())));
    }
}

fn fail(e: UpscaleError) -> ! {
    tracing::debug!(error = %e.report(), "upscale failed");
    eprintln!("Error: {}", e.report());
    process::exit(e.exit_code())
}
