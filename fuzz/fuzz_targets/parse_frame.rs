use afl::fuzz;
use fuzz_frame_rs::{DecodeMode, FuzzFrame};

/// Fuzz target for FuzzFrame::from()
/// This tests the frame validation logic with various byte inputs
///
/// The parser must handle all inputs gracefully without panicking, in both
/// decode modes, and an accepted frame must expose exactly declared_len
/// payload bytes.
fn main() {
    fuzz!(|data: &[u8]| {
        for mode in [DecodeMode::Strict, DecodeMode::Native] {
            if let Ok(frame) = FuzzFrame::from(data, mode) {
                assert_eq!(frame.payload().len(), frame.declared_len());
            }
        }
    });
}
