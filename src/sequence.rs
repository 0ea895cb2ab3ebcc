//! Character codes and the deltas between them.

use crate::TERMINATOR;

/// Map `text` to its UTF-16 code units followed by the line-feed terminator.
///
/// Characters outside the Basic Multilingual Plane contribute a surrogate
/// pair, so the result is `text.encode_utf16().count() + 1` long.
pub fn code_sequence(text: &str) -> Vec<u16> {
    let mut codes: Vec<u16> = text.encode_utf16().collect();
    codes.push(TERMINATOR);
    codes
}

/// Express each code relative to the one before it, starting from zero.
///
/// Running prefix sums of the result reproduce `codes` exactly.
pub fn delta_sequence(codes: &[u16]) -> Vec<i32> {
    let mut previous = 0i32;
    codes
        .iter()
        .map(|&code| {
            let current = i32::from(code);
            let delta = current - previous;
            previous = current;
            delta
        })
        .collect()
}
