use afl::fuzz;
use fuzz_frame_rs::targets::{copy_bounded, find_substring, parse_int, sum_array};

/// Fuzz target for the supplementary sample targets
///
/// The input is split in half: the first half drives parse_int and the
/// copy, the halves together drive the substring search.
fn main() {
    fuzz!(|data: &[u8]| {
        let (head, tail) = data.split_at(data.len() / 2);

        let _ = parse_int(head);

        let mut buffer = [0u8; 16];
        let copied = copy_bounded(&mut buffer, head);
        assert!(copied <= buffer.len());

        if let Some(offset) = find_substring(data, tail) {
            assert_eq!(&data[offset..offset + tail.len()], tail);
        }

        let values: Vec<i32> = data
            .chunks_exact(4)
            .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let _ = sum_array(&values);
    });
}
