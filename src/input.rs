//! Where the line to encode comes from.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Errors that can occur while acquiring the input line.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading failed, including input that is not valid UTF-8.
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The source ended before a single line was available.
    #[error("no input line available from {origin}")]
    NoLine { origin: String },

    /// Positional text and `--file` were both given.
    #[error("cannot use positional TEXT together with --file")]
    Conflict,
}

/// One of the three places a line can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional words, joined with single spaces.
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from command-line values: text, then file, then stdin.
    pub fn from_args(text: Vec<String>, file: Option<PathBuf>) -> Result<Self, InputError> {
        match (text.is_empty(), file) {
            (false, Some(_)) => Err(InputError::Conflict),
            (false, None) => Ok(InputSource::Text(text.join(" "))),
            (true, Some(path)) => Ok(InputSource::File(path)),
            (true, None) => Ok(InputSource::Stdin),
        }
    }

    /// Human-readable name used in error messages.
    pub fn origin(&self) -> String {
        match self {
            InputSource::Text(_) => "arguments".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    /// Read the first line from this source, without its line ending.
    ///
    /// Positional text always yields a line, even when empty. Files and
    /// stdin must contain at least a line terminator or some text.
    pub fn read_line(&self) -> Result<String, InputError> {
        match self {
            InputSource::Text(text) => Ok(text.lines().next().unwrap_or_default().to_string()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::Io {
                    origin: self.origin(),
                    source,
                })?;
                read_first_line(&mut BufReader::new(file), &self.origin())
            }
            InputSource::Stdin => read_first_line(&mut io::stdin().lock(), &self.origin()),
        }
    }
}

/// Read one line from `reader`, stripping a trailing `\n` or `\r\n`.
pub fn read_first_line<R: BufRead>(reader: &mut R, origin: &str) -> Result<String, InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|source| InputError::Io {
        origin: origin.to_string(),
        source,
    })?;

    if read == 0 {
        return Err(InputError::NoLine { origin: origin.to_string() });
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
