//! The remaining sample targets: small functions exercised by fuzzers to
//! check that they stay total over arbitrary input.

/// Parse a decimal integer with atoi semantics: optional leading ASCII
/// whitespace, optional sign, digits until the first non-digit. Empty or
/// non-numeric input yields 0. Values outside the `i32` range saturate.
pub fn parse_int(s: &[u8]) -> i32 {
    // one past i32::MAX, so both saturation directions survive the clamp
    const CUTOFF: i64 = i32::MAX as i64 + 1;

    let mut i = 0;
    while i < s.len() && s[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    let mut acc: i64 = 0;
    while i < s.len() && s[i].is_ascii_digit() {
        if acc < CUTOFF {
            acc = acc * 10 + (s[i] - b'0') as i64;
        }
        i += 1;
    }

    let acc = if negative { -acc } else { acc };
    acc.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Truncating copy into a caller-provided buffer. Copies
/// `min(dest.len(), src.len())` bytes and returns the count; never writes
/// past `dest`.
pub fn copy_bounded(dest: &mut [u8], src: &[u8]) -> usize {
    let n = dest.len().min(src.len());
    dest[..n].copy_from_slice(&src[..n]);
    n
}

/// Sum of the elements, widened to `i64` so the sum cannot overflow for any
/// slice that fits in memory.
pub fn sum_array(values: &[i32]) -> i64 {
    values.iter().map(|&v| v as i64).sum()
}

/// Find the first occurrence of `needle` in `haystack` and return its byte
/// offset. An empty needle matches at offset 0.
pub fn find_substring(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
