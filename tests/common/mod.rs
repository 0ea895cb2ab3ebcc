//! A small tape machine for checking what generated programs print.
//!
//! Cells are `i64`s on a tape that grows to the right, either unbounded or
//! wrapping modulo 2^16; every `.` emits the current cell as one UTF-16 code
//! unit.

#![allow(dead_code)]

#[derive(Debug, PartialEq, Eq)]
pub enum TapeError {
    UnmatchedBracket { ip: usize },
    PointerUnderflow { ip: usize },
    InvalidCharacter { ch: char, ip: usize },
    CellOutOfRange { ip: usize, value: i64 },
    StepLimitExceeded { limit: usize },
}

pub struct TapeMachine {
    memory: Vec<i64>,
    pointer: usize,
    output: Vec<u16>,
    modulus: Option<i64>,
    // smallest and largest value any cell held
    low: i64,
    high: i64,
}

impl TapeMachine {
    /// Unbounded cells.
    pub fn new() -> Self {
        Self { memory: vec![0], pointer: 0, output: Vec::new(), modulus: None, low: 0, high: 0 }
    }

    /// Cells that wrap like a `u16`.
    pub fn wrapping_u16() -> Self {
        Self { modulus: Some(1 << 16), ..Self::new() }
    }

    fn adjust(&mut self, by: i64) {
        let mut value = self.memory[self.pointer] + by;
        if let Some(modulus) = self.modulus {
            value = value.rem_euclid(modulus);
        }
        self.memory[self.pointer] = value;
        self.low = self.low.min(value);
        self.high = self.high.max(value);
    }

    pub fn run(&mut self, code: &str, max_steps: usize) -> Result<(), TapeError> {
        let chars: Vec<char> = code.chars().collect();

        // jump_map[i] holds the matching index for '[' or ']' at index i.
        let mut jump_map: Vec<Option<usize>> = vec![None; chars.len()];
        let mut stack: Vec<usize> = Vec::new();
        for (i, &c) in chars.iter().enumerate() {
            if c == '[' {
                stack.push(i);
            } else if c == ']' {
                let Some(open_index) = stack.pop() else {
                    return Err(TapeError::UnmatchedBracket { ip: i });
                };
                jump_map[open_index] = Some(i);
                jump_map[i] = Some(open_index);
            }
        }
        if let Some(&ip) = stack.last() {
            return Err(TapeError::UnmatchedBracket { ip });
        }

        let mut ip = 0;
        let mut steps = 0;
        while ip < chars.len() {
            if steps >= max_steps {
                return Err(TapeError::StepLimitExceeded { limit: max_steps });
            }
            match chars[ip] {
                '>' => {
                    self.pointer += 1;
                    if self.pointer == self.memory.len() {
                        self.memory.push(0);
                    }
                }
                '<' => {
                    if self.pointer == 0 {
                        return Err(TapeError::PointerUnderflow { ip });
                    }
                    self.pointer -= 1;
                }
                '+' => self.adjust(1),
                '-' => self.adjust(-1),
                '.' => {
                    let value = self.memory[self.pointer];
                    let unit = u16::try_from(value)
                        .map_err(|_| TapeError::CellOutOfRange { ip, value })?;
                    self.output.push(unit);
                }
                '[' => {
                    if self.memory[self.pointer] == 0 {
                        ip = jump_map[ip].expect("validated bracket");
                    }
                }
                ']' => {
                    if self.memory[self.pointer] != 0 {
                        ip = jump_map[ip].expect("validated bracket");
                    }
                }
                ch => return Err(TapeError::InvalidCharacter { ch, ip }),
            }
            steps += 1;
            ip += 1;
        }
        Ok(())
    }

    pub fn output(&self) -> &[u16] {
        &self.output
    }

    pub fn output_string(&self) -> String {
        String::from_utf16(&self.output).expect("output should be valid UTF-16")
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[i64] {
        &self.memory
    }

    /// `(min, max)` over every value a cell took during the run.
    pub fn cell_range(&self) -> (i64, i64) {
        (self.low, self.high)
    }
}

/// Run `code` to completion and return what it printed.
pub fn execute(code: &str) -> String {
    let mut machine = TapeMachine::new();
    machine.run(code, 50_000_000).expect("program should run");
    machine.output_string()
}

/// Like [`execute`], on wrapping 16-bit cells.
pub fn execute_wrapping_u16(code: &str) -> String {
    let mut machine = TapeMachine::wrapping_u16();
    machine.run(code, 50_000_000).expect("program should run");
    machine.output_string()
}
