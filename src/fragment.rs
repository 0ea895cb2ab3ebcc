//! Per-delta code fragments.
//!
//! Every fragment starts and ends with the pointer on the origin cell, which
//! doubles as the loop counter and is always zero between fragments. The
//! character being printed lives in the working register `REGISTER_OFFSET`
//! cells to the right and carries its value over from the previous fragment.

use crate::factor::{FactorTriple, search_factors};
use crate::{MULTIPLICATION_THRESHOLD, REGISTER_OFFSET};

/// Which way a fragment moves the working register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Direction needed to apply `delta`. Zero counts as an increment.
    pub fn of(delta: i32) -> Self {
        if delta < 0 { Direction::Decrement } else { Direction::Increment }
    }

    /// The instruction that moves a cell this way.
    pub fn symbol(self) -> char {
        match self {
            Direction::Increment => '+',
            Direction::Decrement => '-',
        }
    }

    /// `1` or `-1`, for scaling a signed adjustment.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

/// Emit code that moves the working register by `magnitude` in `direction`,
/// prints it, and returns to the origin.
///
/// Magnitudes up to [`MULTIPLICATION_THRESHOLD`] are written out directly;
/// anything larger goes through a multiplication loop built from
/// [`search_factors`].
pub fn emit_fragment(magnitude: u32, direction: Direction) -> String {
    let forward = ">".repeat(REGISTER_OFFSET);
    let backward = "<".repeat(REGISTER_OFFSET);
    let mut output = String::new();

    if magnitude > MULTIPLICATION_THRESHOLD {
        let triple = search_factors(magnitude);
        log::trace!("magnitude {magnitude} {direction:?}: loop {triple:?}");

        let FactorTriple { outer, inner, adjustment } = triple;
        let residual = direction.sign() * adjustment;

        push_repeated(&mut output, '+', outer); // loop counter
        output.push('[');
        output.push_str(&forward);
        push_repeated(&mut output, direction.symbol(), inner);
        output.push_str(&backward);
        output.push_str("-]");
        output.push_str(&forward);
        if residual < 0 {
            push_repeated(&mut output, '-', residual.unsigned_abs());
        } else {
            push_repeated(&mut output, '+', residual.unsigned_abs());
        }
    } else {
        log::trace!("magnitude {magnitude} {direction:?}: direct");
        output.push_str(&forward);
        push_repeated(&mut output, direction.symbol(), magnitude);
    }

    output.push('.');
    output.push_str(&backward);
    output
}

fn push_repeated(output: &mut String, symbol: char, count: u32) {
    output.extend(std::iter::repeat_n(symbol, count as usize));
}
