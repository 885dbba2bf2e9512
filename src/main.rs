use std::{fs, io};

use clap::Parser;
use quill::{
    interpreter::evaluator::core::{Config, MAX_CALL_DEPTH, Scoping},
    run,
    run_lines,
};

/// quill is a small dynamically typed scripting language with variables,
/// functions, loops and console I/O.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value of
    /// a quill script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Evaluates every line on its own and prints each line's value.
    #[arg(short, long, conflicts_with = "pipe_mode")]
    line_mode: bool,

    /// Lets functions see the local variables of their callers.
    #[arg(long)]
    dynamic_scope: bool,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config { scoping:        if args.dynamic_scope {
                                              Scoping::Dynamic
                                          } else {
                                              Scoping::Lexical
                                          },
                          max_call_depth: args.max_depth, };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = if args.line_mode {
        run_lines(&script, config, &mut input, &mut output)
    } else {
        run(&script, config, &mut input, &mut output, args.pipe_mode).map(|_| ())
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
