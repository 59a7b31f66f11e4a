//! upscale - placeholder image upscaler
//!
//! Prints what it would do, waits a fixed two seconds, and prints where the
//! result would have gone. No image data is read or written.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod pause;
pub mod upscale;
