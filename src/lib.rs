//! A minimal Brainfuck interpreter.
//!
//! The program is loaded as raw bytes, bracket jumps are resolved, and an
//! [`Engine`] runs it over a circular tape of 30,000 byte cells.
//!
//! Behaviors:
//! - Cells wrap modulo 256; the data pointer wraps at both ends of the tape.
//! - Bytes outside `><+-.,[]` are comments.
//! - With [`JumpStrategy::Precompute`] (the default) unmatched brackets are
//!   rejected before anything runs. [`JumpStrategy::Scan`] finds partners at
//!   runtime and reports a scan that leaves the program as an error.
//! - `.` writes one byte and flushes. `,` reads one byte; when input is
//!   exhausted the run stops early with [`Outcome::InputExhausted`], which
//!   callers treat as success.
//!
//! Quick start:
//!
//! ```
//! use tape_bf::{Engine, Outcome, Program};
//!
//! let program = Program::from("++++++++[>++++++++<-]>+.");
//! let mut engine = Engine::new(program, std::io::empty(), Vec::new()).unwrap();
//! assert_eq!(engine.run().unwrap(), Outcome::Completed);
//! assert_eq!(engine.into_output(), b"A");
//! ```

pub mod cli_util;
pub mod commands;
pub mod engine;
pub mod error;
pub mod jumps;
pub mod loader;

pub use engine::{Engine, Outcome, TAPE_SIZE};
pub use error::{BracketKind, BrainfuckError};
pub use jumps::{JumpStrategy, JumpTable};
pub use loader::Program;
