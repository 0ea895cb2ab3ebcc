use crate::fragment::{Direction, emit_fragment};
use crate::optimize::remove_redundant_shifts;
use crate::sequence::{code_sequence, delta_sequence};

/// Generates a Brainfuck program that prints a line of text.
///
/// The program prints the input followed by a single `\n`. It uses two
/// cells: the origin cell as a loop counter and the cell to its right as the
/// output register. A loop may overshoot its target by up to
/// [`FACTOR_NEIGHBOURHOOD`](crate::FACTOR_NEIGHBOURHOOD) before the fix-up,
/// so the register can briefly dip below 0 or rise past 65535. Run the
/// program on wrapping cells of at least 16 bits, or on wider cells.
pub struct BrainfuckWriter<'writer> {
    input: &'writer str,
}

impl<'writer> BrainfuckWriter<'writer> {
    pub fn new(input: &'writer str) -> Self {
        Self { input }
    }

    /// The concatenated fragments before the pointer-shift cleanup.
    pub fn raw(&self) -> String {
        let codes = code_sequence(self.input);
        log::debug!("input encodes to {} codes", codes.len());

        let mut output = String::new();
        for delta in delta_sequence(&codes) {
            output.push_str(&emit_fragment(delta.unsigned_abs(), Direction::of(delta)));
        }
        output
    }

    /// The finished program.
    pub fn generate(&self) -> String {
        let raw = self.raw();
        let program = remove_redundant_shifts(&raw);
        log::debug!(
            "generated {} instructions ({} before removing redundant shifts)",
            program.len(),
            raw.len()
        );
        program
    }
}
