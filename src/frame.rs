//! The FUZZ frame parser.
//!
//! A frame has the shape
//! `[tag: 4 bytes "FUZZ"][length: 8-byte unsigned integer][payload]`.
//! The length field is attacker-controlled and is validated against the
//! actual remaining input before a single payload byte is touched.

use crate::{DecodeMode, FrameError, FrameResult};

/// The 4-byte tag marking a recognized frame
const FRAME_TAG: [u8; 4] = *b"FUZZ";

/// Offset of the length field
const LEN_OFFSET: usize = 4;
/// Width of the length field in bytes
const LEN_SIZE: usize = 8;
/// Total header size: tag plus length field
const HEADER_SIZE: usize = LEN_OFFSET + LEN_SIZE;
/// Payload offset used by [DecodeMode::Native]. The original sample target
/// copies from offset 8, overlapping the upper four length bytes.
const NATIVE_PAYLOAD_OFFSET: usize = 8;

/// A validated view of a FUZZ frame. Borrows the input; constructing one
/// performs no allocation.
#[derive(Debug, Clone, Copy)]
pub struct FuzzFrame<'a> {
    data: &'a [u8],
    mode: DecodeMode,
    declared_len: usize,
    payload_offset: usize,
}

impl<'a> FuzzFrame<'a> {
    /// Parse a FUZZ frame from data
    pub fn from(data: &'a [u8], mode: DecodeMode) -> FrameResult<FuzzFrame<'a>> {
        if data.is_empty() {
            return Err(FrameError::EmptyInput);
        }

        // probe tag
        if data.len() < FRAME_TAG.len() {
            return Err(FrameError::UnexpectedEndOfData);
        }
        if data[..FRAME_TAG.len()] != FRAME_TAG {
            return Err(FrameError::InvalidMagic);
        }

        // read the length field
        if data.len() < HEADER_SIZE {
            return Err(FrameError::UnexpectedEndOfData);
        }
        let mut len_bytes: [u8; LEN_SIZE] = [0; LEN_SIZE];
        len_bytes.copy_from_slice(&data[LEN_OFFSET..LEN_OFFSET + LEN_SIZE]);
        let declared_len = match mode {
            DecodeMode::Strict => u64::from_le_bytes(len_bytes),
            DecodeMode::Native => u64::from_ne_bytes(len_bytes),
        };
        if declared_len == 0 {
            return Err(FrameError::EmptyPayload);
        }
        let declared_len =
            usize::try_from(declared_len).map_err(|_| FrameError::PayloadOutOfBounds)?;

        // bounds check, overflow-safe: a declared length near usize::MAX
        // must reject instead of wrapping into a false pass
        let payload_offset = match mode {
            DecodeMode::Strict => HEADER_SIZE,
            DecodeMode::Native => NATIVE_PAYLOAD_OFFSET,
        };
        let payload_end = payload_offset
            .checked_add(declared_len)
            .ok_or(FrameError::PayloadOutOfBounds)?;
        if payload_end > data.len() {
            return Err(FrameError::PayloadOutOfBounds);
        }

        Ok(FuzzFrame {
            data,
            mode,
            declared_len,
            payload_offset,
        })
    }

    /// Get the declared payload length
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Get the decode mode this frame was parsed with
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Get the byte offset of the payload within the input
    pub fn payload_offset(&self) -> usize {
        self.payload_offset
    }

    /// Get the payload: exactly `declared_len` bytes starting at the mode's
    /// payload offset
    pub fn payload(&self) -> &'a [u8] {
        &self.data[self.payload_offset..self.payload_offset + self.declared_len]
    }
}

/// Outcome of [process_input], the externally observable status of the
/// validate-copy-release contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The frame was valid and its payload was copied
    Processed,
    /// The input was empty
    EmptyInput,
    /// Any other validation failure: bad tag, truncated header, zero or
    /// oversized declared length
    Malformed,
    /// The scratch buffer could not be allocated
    AllocationFailed,
}

/// Validate `data` as a FUZZ frame, copy its payload into a scratch buffer
/// sized to the declared length, release the buffer, and report the outcome.
///
/// The scratch buffer never escapes this call; rejected inputs allocate
/// nothing. Calling this twice on the same input yields the same outcome.
pub fn process_input(data: &[u8], mode: DecodeMode) -> ProcessOutcome {
    let frame = match FuzzFrame::from(data, mode) {
        Ok(frame) => frame,
        Err(FrameError::EmptyInput) => return ProcessOutcome::EmptyInput,
        Err(_) => return ProcessOutcome::Malformed,
    };

    let payload = frame.payload();
    let mut scratch: Vec<u8> = Vec::new();
    if scratch.try_reserve_exact(payload.len()).is_err() {
        return ProcessOutcome::AllocationFailed;
    }
    scratch.extend_from_slice(payload);
    debug_assert_eq!(scratch.len(), frame.declared_len());
    // scratch is dropped here; the copied data is not retained
    ProcessOutcome::Processed
}
