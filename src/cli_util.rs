use std::io::{self, Write};
use crate::InputError;

/// Print an [`InputError`] to stderr, prefixed with the program name,
/// followed by a hint where one helps.
pub fn print_input_error(program: &str, err: &InputError) {
    eprintln!("{program}: {err}");

    match err {
        InputError::Io { source, .. } if source.kind() == io::ErrorKind::InvalidData => {
            eprintln!("  input must be UTF-8 text");
        }
        InputError::NoLine { .. } => {
            eprintln!("  pass TEXT as arguments, or pipe a line to stdin");
        }
        _ => {}
    }
    let _ = io::stderr().flush();
}

/// Flush both standard streams, ignoring failures.
pub fn flush_streams() {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}
