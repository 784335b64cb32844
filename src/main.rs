use std::{fs, process::ExitCode};

use clap::Parser;
use iorn::{
    interpreter::io::{Diagnostics, Host, LineInput, Stdout, Terminal},
    run_script,
};

/// iorn runs scripts written in Iorn, a small imperative scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells iorn to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints diagnostics without color.
    #[arg(long)]
    no_color: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut diagnostics = Terminal;

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                diagnostics.report(&format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                            &args.contents),
                                   None);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut output = Stdout;
    let mut input = LineInput::stdin();
    let mut host = Host { output:      &mut output,
                          diagnostics: &mut diagnostics,
                          input:       &mut input, };

    if run_script(&script, &mut host) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
