//! Sample fuzz-target functions around a defensive parser for FUZZ-tagged,
//! length-prefixed frames.
//!
//! Usage: Use [FuzzFrame::from] to validate a frame and borrow its payload,
//! or [process_input] to run the full validate-copy-release contract and
//! receive a status. The remaining sample targets (integer parsing, bounded
//! copy, summation, substring search) live in [targets].
//!
//! Every function in this crate is total over arbitrary input: malformed
//! bytes are reported through return values, never through panics.

use thiserror::Error;

pub mod frame;
pub mod targets;

pub use frame::{process_input, FuzzFrame, ProcessOutcome};

/// Result type for the crate
pub type FrameResult<T> = core::result::Result<T, FrameError>;

/// Selects how the length field of a frame is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Validated decoding: the length field is an explicit little-endian
    /// `u64` and the payload begins after the full header.
    #[default]
    Strict,
    /// Fidelity to the original sample target: the length field is read in
    /// native byte order and the payload begins at
    /// offset 8, overlapping the upper length bytes. The decoded value is
    /// still bounds-checked with overflow-safe arithmetic before any copy.
    Native,
}

/// Error types for the crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Input is empty
    #[error("empty input")]
    EmptyInput,
    /// Input ends before the tag or the length field
    #[error("unexpected end of data")]
    UnexpectedEndOfData,
    /// The first four bytes are not the FUZZ tag
    #[error("invalid magic number")]
    InvalidMagic,
    /// Declared payload length is zero
    #[error("declared payload length is zero")]
    EmptyPayload,
    /// Declared payload length exceeds the available input
    #[error("declared payload length exceeds available input")]
    PayloadOutOfBounds,
}
