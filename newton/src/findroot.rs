use descent::{EvalError, Expression};
use thiserror::Error;

/// Knobs for the root search. All three must be positive; the front end
/// validates them before a search starts.
#[derive(Clone, Copy, Debug)]
pub struct SolverOptions {
    /// Convergence tolerance on |f(x)|.
    pub tol: f64,
    /// Step size of the central-difference derivative.
    pub step: f64,
    /// Hard cap on Newton iterations.
    pub max_iter: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            tol: 1e-6,
            step: 1e-6,
            max_iter: 50,
        }
    }
}

/// What a run produced: a plain value when the expression has no variable,
/// or the variable's name with the guess it converged to.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    Value(f64),
    Root { var: String, x: f64 },
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The central difference came out exactly zero, so a Newton step
    /// would divide by it.
    #[error("derivative vanished at x = {x}")]
    FlatDerivative { x: f64 },
    #[error("failed to converge after {iterations} iterations: |f({x})| = {residual} > {tol}")]
    NoConvergence {
        iterations: usize,
        x: f64,
        residual: f64,
        tol: f64,
    },
}

/// Plain, unguarded Newton-Raphson on the expression text: no dampening,
/// no bracketing fallback, divergence only caught by the iteration cap.
///
/// Every evaluation point re-parses `text` from scratch with the guess
/// bound to the variable, so nothing carries over between iterations
/// besides the guess itself. An expression with no variable short-circuits
/// to calculator mode and the search parameters are ignored.
pub fn newton_raphson(text: &str, x0: f64, opts: &SolverOptions) -> Result<Outcome, SolveError> {
    let mut x = x0;
    let mut last = (x0, f64::INFINITY);
    for _ in 0..opts.max_iter {
        let f0 = Expression::with_variable(text, x).eval()?;
        let Some(var) = f0.variable else {
            return Ok(Outcome::Value(f0.value));
        };
        if f0.value.abs() <= opts.tol {
            return Ok(Outcome::Root { var, x });
        }
        last = (x, f0.value.abs());
        // central difference, each side a fresh independent evaluation
        let hi = Expression::with_variable(text, x + opts.step).eval()?;
        let lo = Expression::with_variable(text, x - opts.step).eval()?;
        let fprime = (hi.value - lo.value) / (2.0 * opts.step);
        if fprime == 0.0 {
            return Err(SolveError::FlatDerivative { x });
        }
        x -= f0.value / fprime;
    }
    // the cap counts convergence tests: report the last guess we tested
    let (x, residual) = last;
    Err(SolveError::NoConvergence {
        iterations: opts.max_iter,
        x,
        residual,
        tol: opts.tol,
    })
}
