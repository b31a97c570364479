use clap::Parser;
use clap::error::ErrorKind;
use tape_bf::commands::run::{self, RunArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match RunArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => run::EXIT_OK,
                _ => run::EXIT_USAGE,
            };
            std::process::exit(code);
        }
    };

    std::process::exit(run::run("bf", args));
}
