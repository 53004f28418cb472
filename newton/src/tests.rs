use crate::{newton_raphson, Outcome, SolveError, SolverOptions};
use descent::ErrorKind;

#[test]
fn calculator_mode() {
    let opts = SolverOptions::default();
    assert_eq!(
        newton_raphson("2*3+4", 0.0, &opts).unwrap(),
        Outcome::Value(10.0)
    );
    // without a variable the search parameters are irrelevant
    let strict = SolverOptions {
        tol: 1e-30,
        max_iter: 1,
        ..Default::default()
    };
    assert_eq!(
        newton_raphson("553+(3+20)+(7+3)", 9.0, &strict).unwrap(),
        Outcome::Value(586.0)
    );
}

#[test]
fn already_converged_seed() {
    let opts = SolverOptions::default();
    match newton_raphson("x", 0.0, &opts).unwrap() {
        Outcome::Root { var, x } => {
            assert_eq!(var, "x");
            assert_eq!(x, 0.0);
        }
        other => panic!("expected a root, got {:?}", other),
    }
}

#[test]
fn linear_root() {
    let opts = SolverOptions::default();
    match newton_raphson("x", 10.0, &opts).unwrap() {
        Outcome::Root { var, x } => {
            assert_eq!(var, "x");
            assert!(x.abs() <= opts.tol);
        }
        other => panic!("expected a root, got {:?}", other),
    }
}

#[test]
fn quadratic_root() {
    let opts = SolverOptions::default();
    match newton_raphson("x*x - 4", 1.0, &opts).unwrap() {
        Outcome::Root { var, x } => {
            assert_eq!(var, "x");
            assert!((x - 2.0).abs() < 1e-4);
        }
        other => panic!("expected a root, got {:?}", other),
    }
}

#[test]
fn transcendental_root() {
    let opts = SolverOptions::default();
    match newton_raphson("sin(x)", 3.0, &opts).unwrap() {
        Outcome::Root { x, .. } => assert!((x - std::f64::consts::PI).abs() < 1e-3),
        other => panic!("expected a root, got {:?}", other),
    }
}

#[test]
fn flat_derivative_is_fatal() {
    let opts = SolverOptions::default();
    let err = newton_raphson("x - x + 5", 1.0, &opts).unwrap_err();
    assert_eq!(err, SolveError::FlatDerivative { x: 1.0 });
}

#[test]
fn convergence_failure_reports_the_exact_cap() {
    // |x*x| <= 1e-12 needs ~30 halvings from 1024; ten won't do
    let opts = SolverOptions {
        tol: 1e-12,
        step: 1e-6,
        max_iter: 10,
    };
    match newton_raphson("x*x", 1024.0, &opts).unwrap_err() {
        SolveError::NoConvergence {
            iterations,
            x,
            residual,
            tol,
        } => {
            assert_eq!(iterations, 10);
            assert_eq!(tol, opts.tol);
            assert!(residual > opts.tol);
            assert!(x > 0.0);
        }
        other => panic!("expected convergence failure, got {:?}", other),
    }
}

#[test]
fn eval_errors_are_fatal() {
    let opts = SolverOptions::default();
    match newton_raphson("5/0", 1.0, &opts).unwrap_err() {
        SolveError::Eval(e) => assert_eq!(e.kind, ErrorKind::DivByZero),
        other => panic!("expected an eval error, got {:?}", other),
    }
    match newton_raphson("x + y", 1.0, &opts).unwrap_err() {
        SolveError::Eval(e) => assert_eq!(e.kind, ErrorKind::MultipleVars),
        other => panic!("expected an eval error, got {:?}", other),
    }
}
