use std::process::ExitCode;

use clap::Parser;
use newton::{newton_raphson, Outcome, SolveError, SolverOptions};

/// fr evaluates an arithmetic expression. When the expression refers to a
/// variable, fr instead runs a Newton-Raphson search for a root of it,
/// starting from --x0.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial guess for the root search.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x0: f64,

    /// Convergence tolerance on |f(x)|.
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,

    /// Step size of the central-difference derivative.
    #[arg(long, default_value_t = 1e-6)]
    step: f64,

    /// Maximum number of Newton iterations.
    #[arg(long, default_value_t = 50)]
    max_iter: usize,

    /// Expression to evaluate; starts an interactive session when omitted.
    expr: Option<String>,
}

fn run(input: &str, x0: f64, opts: &SolverOptions) -> Result<(), ()> {
    match newton_raphson(input, x0, opts) {
        Ok(Outcome::Value(value)) => {
            println!("{}", value);
            Ok(())
        }
        Ok(Outcome::Root { var, x }) => {
            println!("{} = {}", var, x);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if let SolveError::Eval(e) = err {
                eprintln!("{}", input);
                eprintln!("{}", e.marker(input.len()));
            }
            Err(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.tol <= 0.0 {
        eprintln!("--tol must be > 0. Got {}", args.tol);
        return ExitCode::FAILURE;
    }
    if args.step <= 0.0 {
        eprintln!("--step must be > 0. Got {}", args.step);
        return ExitCode::FAILURE;
    }
    if args.max_iter == 0 {
        eprintln!("--max-iter must be > 0");
        return ExitCode::FAILURE;
    }
    let opts = SolverOptions {
        tol: args.tol,
        step: args.step,
        max_iter: args.max_iter,
    };

    if let Some(expr) = args.expr {
        return match run(&expr, args.x0, &opts) {
            Ok(()) => ExitCode::SUCCESS,
            Err(()) => ExitCode::FAILURE,
        };
    }

    use rustyline::error::ReadlineError;
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Readline err: {:?}", e);
            return ExitCode::FAILURE;
        }
    };
    loop {
        match rl.readline("fr> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Readline err: {:?}", e);
                return ExitCode::FAILURE;
            }
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                let _ = run(&line, args.x0, &opts);
            }
        }
    }
}
