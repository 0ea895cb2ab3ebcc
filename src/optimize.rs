//! Peephole cleanup of the assembled program.

/// Drop `<>` and `><` pairs in one left-to-right pass.
///
/// Matches do not overlap and the output is not rescanned, so a pair that
/// only becomes adjacent after a deletion survives: `><><` collapses
/// completely, but `<<>>` keeps its outer `<>`.
pub fn remove_redundant_shifts(code: &str) -> String {
    let mut output = String::with_capacity(code.len());
    let mut chars = code.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(&next) = chars.peek() {
            if matches!((c, next), ('<', '>') | ('>', '<')) {
                chars.next();
                continue;
            }
        }
        output.push(c);
    }

    output
}
