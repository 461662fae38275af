use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use lispty::{
    get_result_with,
    interpreter::evaluator::core::{EvalConfig, Evaluator},
};

/// lispty evaluates Lisp-like integer expressions with S-expressions and
/// Q-expressions. Without an expression it reads lines from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lispty to treat the contents as a file path and evaluate each
    /// line of that file.
    #[arg(short, long)]
    file: bool,

    /// Maximum nesting of evaluated S-expressions. Unbounded if omitted.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Prompt printed before each line in interactive mode.
    #[arg(long, default_value = "lispty> ")]
    prompt: String,

    contents: Option<String>,
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=lispty=debug` or `RUST_LOG=lispty=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn print_result(source: &str, evaluator: &Evaluator) {
    match get_result_with(source, evaluator) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("{e}"),
    }
}

fn run_prompt(prompt: &str, evaluator: &Evaluator) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => print_result(line.trim_end(), evaluator),
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();
    let evaluator = Evaluator::new(EvalConfig { max_depth: args.max_depth });

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });

            for line in script.lines()
                              .map(str::trim)
                              .filter(|line| !line.is_empty() && !line.starts_with(';'))
            {
                print_result(line, &evaluator);
            }
        },
        Some(source) => print_result(&source, &evaluator),
        None => run_prompt(&args.prompt, &evaluator),
    }
}
