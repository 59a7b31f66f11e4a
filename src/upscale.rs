//! Simulated upscale operation
//!
//! Nothing here reads or writes image data. The operation reports that it
//! is starting, waits out [`SIMULATED_WORK`], and reports where the result
//! would have been saved. Moving files and running a real model is left to
//! whatever invokes this program.

use crate::error::{ErrorCategory, ErrorKind, Result, UpscaleError};
use crate::pause::{Pause, SIMULATED_WORK};
use std::io::{self, Write};
use std::path::PathBuf;

/// Multiplier used when the caller does not pick one.
pub const DEFAULT_FACTOR: u32 = 2;

/// One invocation's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpscaleJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub factor: u32,
}

impl UpscaleJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            factor: DEFAULT_FACTOR,
        }
    }

    pub fn with_factor(mut self, factor: u32) -> Self {
        self.factor = factor;
        self
    }

    pub fn start_message(&self) -> String {
        format!("Upscaling {} by {}x...", self.input.display(), self.factor)
    }

    pub fn completion_message(&self) -> String {
        format!("Saved to {}", self.output.display())
    }
}

/// Run the simulated upscale
///
/// Writes the start line to `out`, blocks on `pause` for [`SIMULATED_WORK`],
/// then writes the completion line. Each line is flushed as soon as it is
/// written so a reader sees the start line before the pause begins.
pub fn upscale(job: &UpscaleJob, out: &mut dyn Write, pause: &mut dyn Pause) -> Result<()> {
    tracing::debug!(input = %job.input.display(), factor = job.factor, "upscale started");
    write_line(out, &job.start_message())?;

    pause.pause(SIMULATED_WORK);

    write_line(out, &job.completion_message())?;
    tracing::debug!(output = %job.output.display(), "upscale completed");
    Ok(())
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(out, "{}", line)
        .and_then(|()| out.flush())
        .map_err(|e| write_error(line, e))
}

fn write_error(line: &str, err: io::Error) -> UpscaleError {
    UpscaleError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::Io,
        format!("failed to write status line {:?}", line),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Records every pause it is asked for.
    #[derive(Default)]
    struct RecordingPause {
        calls: Vec<Duration>,
    }

    impl Pause for RecordingPause {
        fn pause(&mut self, duration: Duration) {
            self.calls.push(duration);
        }
    }

    /// Writer that fails every write.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_messages_use_default_factor() {
        let job = UpscaleJob::new("photo.png", "photo_2x.png");
        assert_eq!(job.factor, 2);
        assert_eq!(job.start_message(), "Upscaling photo.png by 2x...");
        assert_eq!(job.completion_message(), "Saved to photo_2x.png");
    }

    #[test]
    fn test_custom_factor() {
        let job = UpscaleJob::new("in.jpg", "out.jpg").with_factor(4);
        assert_eq!(job.start_message(), "Upscaling in.jpg by 4x...");
    }

    #[test]
    fn test_upscale_prints_both_lines_and_pauses_once() {
        let job = UpscaleJob::new("photo.png", "photo_2x.png");
        let mut out = Vec::new();
        let mut pause = RecordingPause::default();

        upscale(&job, &mut out, &mut pause).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Upscaling photo.png by 2x...\nSaved to photo_2x.png\n"
        );
        assert_eq!(pause.calls, vec![SIMULATED_WORK]);
    }

    #[test]
    fn test_start_line_written_before_pause() {
        struct CheckingPause<'a> {
            seen: &'a std::cell::RefCell<Vec<u8>>,
            at_pause: Option<String>,
        }

        impl Pause for CheckingPause<'_> {
            fn pause(&mut self, _duration: Duration) {
                self.at_pause = Some(String::from_utf8(self.seen.borrow().clone()).unwrap());
            }
        }

        struct SharedWriter<'a>(&'a std::cell::RefCell<Vec<u8>>);

        impl Write for SharedWriter<'_> {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.borrow_mut().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = std::cell::RefCell::new(Vec::new());
        let job = UpscaleJob::new("a.png", "b.png");
        let mut writer = SharedWriter(&buffer);
        let mut pause = CheckingPause {
            seen: &buffer,
            at_pause: None,
        };

        upscale(&job, &mut writer, &mut pause).unwrap();

        assert_eq!(pause.at_pause.as_deref(), Some("Upscaling a.png by 2x...\n"));
    }

    #[test]
    fn test_paths_are_not_validated() {
        let job = UpscaleJob::new("/definitely/not/here.png", "");
        let mut out = Vec::new();
        upscale(&job, &mut out, &mut RecordingPause::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Upscaling /definitely/not/here.png by 2x..."));
        assert!(text.ends_with("Saved to \n"));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let job = UpscaleJob::new("photo.png", "photo_2x.png");
        let mut pause = RecordingPause::default();

        let err = upscale(&job, &mut BrokenWriter, &mut pause).expect_err("write should fail");

        assert_eq!(err.kind, Some(ErrorKind::Io));
        assert_eq!(err.category, ErrorCategory::Internal);
        assert!(pause.calls.is_empty(), "no pause after a failed start line");
    }
}
