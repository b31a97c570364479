use std::io::{self, Read, Write};

use crate::error::BrainfuckError;
use crate::jumps::{JumpStrategy, Jumps};
use crate::loader::Program;

/// Number of cells on the tape.
pub const TAPE_SIZE: usize = 30_000;

/// How a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The instruction pointer reached the end of the program.
    Completed,
    /// A `,` found no more input. The rest of the program was abandoned;
    /// this counts as a successful run.
    InputExhausted { ip: usize },
}

/// Execution context: program, jump source, tape, pointers and the I/O
/// collaborators, all owned by one value.
///
/// The tape is circular: `<` at cell 0 moves to the last cell and `>` at the
/// last cell moves to cell 0. Cells wrap modulo 256.
pub struct Engine<R, W> {
    program: Program,
    jumps: Jumps,
    tape: Vec<u8>,
    pointer: usize,
    ip: usize,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Engine<R, W> {
    /// Build an engine using precomputed jumps.
    ///
    /// Malformed bracket nesting is rejected here, before anything runs.
    pub fn new(program: Program, input: R, output: W) -> Result<Self, BrainfuckError> {
        Self::with_strategy(program, JumpStrategy::Precompute, input, output)
    }

    /// Build an engine with an explicit jump strategy.
    pub fn with_strategy(
        program: Program,
        strategy: JumpStrategy,
        input: R,
        output: W,
    ) -> Result<Self, BrainfuckError> {
        let jumps = Jumps::prepare(&program, strategy)?;
        Ok(Self {
            program,
            jumps,
            tape: vec![0; TAPE_SIZE],
            pointer: 0,
            ip: 0,
            input,
            output,
        })
    }

    /// Execute until the program ends or input runs out.
    pub fn run(&mut self) -> Result<Outcome, BrainfuckError> {
        let code_len = self.program.len();

        while self.ip < code_len {
            match self.program[self.ip] {
                b'+' => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1);
                }
                b'-' => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1);
                }
                b'>' => {
                    self.pointer = if self.pointer == TAPE_SIZE - 1 { 0 } else { self.pointer + 1 };
                }
                b'<' => {
                    self.pointer = if self.pointer == 0 { TAPE_SIZE - 1 } else { self.pointer - 1 };
                }
                b'.' => self.write_cell()?,
                b',' => {
                    let Some(byte) = self.read_byte() else {
                        log::debug!("input exhausted at instruction {}", self.ip);
                        return Ok(Outcome::InputExhausted { ip: self.ip });
                    };
                    self.tape[self.pointer] = byte;
                }
                b'[' => {
                    if self.tape[self.pointer] == 0 {
                        self.ip = self.jumps.target(&self.program, self.ip)?;
                    }
                }
                b']' => {
                    if self.tape[self.pointer] != 0 {
                        self.ip = self.jumps.target(&self.program, self.ip)?;
                    }
                }
                _ => {}
            }
            // Jumps land on the partner bracket; this steps past it.
            self.ip += 1;
        }

        log::debug!("program completed");
        Ok(Outcome::Completed)
    }

    fn write_cell(&mut self) -> Result<(), BrainfuckError> {
        let byte = [self.tape[self.pointer]];
        self.output
            .write_all(&byte)
            .and_then(|_| self.output.flush())
            .map_err(|source| BrainfuckError::Io { ip: self.ip, source })
    }

    /// One byte of input, or `None` on end of stream or a read error.
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!("input error treated as end of input: {e}");
                    return None;
                }
            }
        }
    }
}

impl<R, W> Engine<R, W> {
    /// Current data pointer.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Value of the cell under the data pointer.
    pub fn cell(&self) -> u8 {
        self.tape[self.pointer]
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    /// Index of the next instruction to execute.
    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Consume the engine and hand back the output collaborator.
    pub fn into_output(self) -> W {
        self.output
    }
}
