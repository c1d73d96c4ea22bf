//! Error types
//!
//! The rasterizer degrades silently by design: out-of-bounds sample writes
//! are discarded, unknown styles skip their draw step, and degenerate
//! geometry plots zero samples. The only fatal conditions are configuration
//! mistakes, reported here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The bound output buffer is smaller than `width * height * 4` bytes
    #[error("render target too small: need {needed} bytes, got {len}")]
    TargetTooSmall { needed: usize, len: usize },
    /// The sample rate must be a positive integer
    #[error("sample rate must be positive")]
    InvalidSampleRate,
}
