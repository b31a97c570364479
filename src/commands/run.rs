use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli_util::print_error;
use crate::{Engine, JumpStrategy, Outcome, Program};

/// Normal completion, or input ran out during `,`.
pub const EXIT_OK: i32 = 0;
/// Malformed brackets or an output failure.
pub const EXIT_RUNTIME: i32 = 1;
/// The source file could not be opened or read.
pub const EXIT_LOAD: i32 = 2;
/// Missing or unrecognised arguments.
pub const EXIT_USAGE: i32 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "bf",
    version,
    about = "Run a Brainfuck program from FILE, reading `,` from stdin and writing `.` to stdout",
    after_help = "Exit status: 0 on completion, and also when `,` finds stdin exhausted \
                  (the rest of the program is skipped); 1 on malformed brackets or output \
                  failure; 2 when FILE cannot be read; 3 on usage errors."
)]
pub struct RunArgs {
    /// Path to the Brainfuck source file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How matching brackets are located
    #[arg(long = "jumps", value_enum, value_name = "STRATEGY", default_value_t = JumpStrategy::Precompute)]
    pub jumps: JumpStrategy,
}

pub fn run(program: &str, args: RunArgs) -> i32 {
    let RunArgs { file, jumps } = args;

    let source = match Program::from_path(&file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{program}: cannot open {}: {e}", file.display());
            let _ = io::stderr().flush();
            return EXIT_LOAD;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut engine = match Engine::with_strategy(source.clone(), jumps, stdin, stdout) {
        Ok(engine) => engine,
        Err(err) => {
            print_error(Some(program), &source, &err);
            return EXIT_RUNTIME;
        }
    };

    match engine.run() {
        Ok(Outcome::Completed) => EXIT_OK,
        Ok(Outcome::InputExhausted { ip }) => {
            log::info!("stdin exhausted at instruction {ip}; stopping");
            EXIT_OK
        }
        Err(err) => {
            print_error(Some(program), engine.program(), &err);
            EXIT_RUNTIME
        }
    }
}
