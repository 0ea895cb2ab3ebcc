//! A Brainfuck generator for single lines of text.
//!
//! Given a line of text, this crate produces a Brainfuck program that prints
//! that line followed by a newline.
//!
//! Features and behaviors:
//! - Each character is reached from the previous one, so runs of similar
//!   characters stay cheap.
//! - Changes larger than [`MULTIPLICATION_THRESHOLD`] use a multiplication
//!   loop over the nearest well-factored number, with a small fix-up after.
//! - Adjacent `<>`/`><` pairs are removed in a single pass at the end.
//! - Characters are handled as UTF-16 code units; generated programs need
//!   wrapping cells of at least 16 bits, or wider cells.
//!
//! Quick start:
//!
//! ```
//! use text2bf::BrainfuckWriter;
//!
//! let program = BrainfuckWriter::new("A").generate();
//! assert_eq!(program, "++++++++[>++++++++<-]>+.<+++++++[>--------<-]>+.<");
//! ```

pub mod cli_util;
pub mod commands;
pub mod config;
pub mod factor;
pub mod fragment;
pub mod input;
pub mod optimize;
pub mod sequence;
pub mod theme;
mod writer;

pub use factor::{FactorTriple, search_factors};
pub use fragment::{Direction, emit_fragment};
pub use input::{InputError, InputSource};
pub use optimize::remove_redundant_shifts;
pub use writer::BrainfuckWriter;

/// Largest change written as plain `+`/`-` runs; anything above uses a loop.
pub const MULTIPLICATION_THRESHOLD: u32 = 12;

/// How far either side of a magnitude the factor search looks.
pub const FACTOR_NEIGHBOURHOOD: u32 = 2;

/// Code appended after the input (line feed).
pub const TERMINATOR: u16 = 10;

/// Distance from the origin/counter cell to the output register.
pub const REGISTER_OFFSET: usize = 1;
