use afl::fuzz;
use fuzz_frame_rs::{process_input, DecodeMode};

/// Fuzz target for process_input()
/// This tests the full validate-copy-release contract
///
/// Progressively truncated slices are probed as well, to exercise the
/// off-by-one paths around the tag, length field, and payload bounds.
fn main() {
    fuzz!(|data: &[u8]| {
        for mode in [DecodeMode::Strict, DecodeMode::Native] {
            let first = process_input(data, mode);
            // no hidden state: a second pass must agree
            assert_eq!(first, process_input(data, mode));
        }

        for trim in 1..data.len().min(32) {
            let _ = process_input(&data[..data.len() - trim], DecodeMode::Strict);
        }
    });
}
