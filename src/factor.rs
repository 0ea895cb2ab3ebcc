//! Factor search for multiplication loops.
//!
//! A loop of the form `+++[>+++++<-]` adds `outer * inner` to the working
//! cell for roughly `outer + inner` instructions, so the cheapest loop for a
//! magnitude is the one whose two factors are closest together. Nearby
//! numbers often factor far better than the magnitude itself (primes in
//! particular), and the difference is paid back with a few direct
//! increments after the loop.

use crate::FACTOR_NEIGHBOURHOOD;

/// A decomposition `outer * inner + adjustment` of some magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorTriple {
    /// Loop counter: how many times the loop body runs.
    pub outer: u32,
    /// Symbols applied to the working cell per iteration.
    pub inner: u32,
    /// Residual applied directly after the loop.
    pub adjustment: i32,
}

impl FactorTriple {
    /// The value this triple decomposes.
    pub fn value(&self) -> i64 {
        i64::from(self.outer) * i64::from(self.inner) + i64::from(self.adjustment)
    }
}

/// Split `n` into `(a, b)` with `a * b == n` and `a <= sqrt(n) <= b`.
///
/// `a` is the largest divisor not exceeding the integer square root, which
/// makes the pair as balanced as `n` allows. Primes come back as `(1, n)`.
pub fn factor_pair(n: u32) -> (u32, u32) {
    if n == 0 {
        return (0, 0);
    }
    let a = (1..=n.isqrt()).rev().find(|d| n % d == 0).unwrap_or(1);
    (a, n / a)
}

/// Find the best multiplicative decomposition of `n` within the
/// `±FACTOR_NEIGHBOURHOOD` window.
///
/// Candidates `n + offset` are ranked by the spread of their factor pair;
/// among equally balanced candidates the smallest `|offset|` wins, and the
/// lower candidate wins an exact tie. The returned adjustment is `-offset`,
/// so `outer * inner + adjustment == n` always holds.
pub fn search_factors(n: u32) -> FactorTriple {
    let window = i64::from(FACTOR_NEIGHBOURHOOD);

    (-window..=window)
        .filter_map(|offset| {
            let candidate = u32::try_from(i64::from(n) + offset).ok()?;
            if candidate == 0 {
                return None;
            }
            let (a, b) = factor_pair(candidate);
            Some((b - a, offset.unsigned_abs(), a, b, offset))
        })
        // min_by_key keeps the first of equal keys, i.e. the lower candidate.
        .min_by_key(|&(spread, distance, ..)| (spread, distance))
        .map(|(_, _, outer, inner, offset)| FactorTriple {
            outer,
            inner,
            adjustment: -(offset as i32),
        })
        .unwrap_or(FactorTriple { outer: 1, inner: n, adjustment: 0 })
}
