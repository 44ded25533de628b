use std::{
    fs,
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use nulla::get_result;
use tracing_subscriber::EnvFilter;

/// nulla is a tiny arithmetic language with numbers, null, and the five
/// binary operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nulla to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Expression or script to evaluate. Starts the repl when omitted.
    contents: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                              EnvFilter::new("warn")
                                                          }))
        .with_target(false)
        .init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            process::exit(1);
        })
    } else {
        contents
    };

    match get_result(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Runs the interactive shell.
///
/// Reads a line, runs it through the pipeline, and prints the resulting
/// value or the diagnostic. Errors do not end the session; an empty line or
/// a line containing `exit` or `quit` terminates the process with a
/// non-zero status.
fn repl() -> ! {
    println!("\nnulla repl v0.1");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input).is_err() {
            process::exit(1);
        }

        let input = input.trim();
        if input.is_empty() || input.contains("exit") || input.contains("quit") {
            process::exit(1);
        }

        match get_result(input) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
