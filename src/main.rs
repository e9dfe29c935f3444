use std::{env, process::ExitCode};

use error::Error;

mod abi;
mod args;
mod error;
mod mark;
mod patch;

fn main() -> ExitCode {
    let result = args::parse_from(env::args_os()).and_then(|invocation| match invocation {
        args::Invocation::Info(text) => {
            print!("{text}");
            Ok(())
        }
        args::Invocation::Mark(options) => mark::run(&options),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // clap renders its own "error: " prefix and usage line.
        Err(Error::Usage(err)) => {
            eprint!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
