//! Walks through Newton's method on a few small problems and prints every
//! iterate.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory -- root
//! cargo run --example trajectory -- minimize
//! cargo run --example trajectory -- rootless
//! cargo run --example trajectory -- flat
//! ```
//!
//! # Modes
//!
//! - **root** — Find a root of f(x) = (x − 3)² − 9 from x = 0.1.
//!   Shows the residual collapsing quadratically toward the root at 0.
//!
//! - **minimize** — Minimize the same f by running Newton on f'.
//!   Since f is a parabola, one step lands on the minimum at x = 3.
//!
//! - **rootless** — Try to find a root of g(x) = (x − 3)² + 1, which has none.
//!   The iterates wander until the iteration bound is hit.
//!
//! - **flat** — Start f(x) = x² − 4 at x = 0, where the tangent is flat.
//!   A divergence guard stops the solve at the first non-finite iterate.

use std::error::Error;

use tangent_core::{WithDerivative, WithSecondDerivative};
use tangent_observers::{DivergenceGuard, History};
use tangent_solvers::{equation::newton, optimization};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "root".into());
    match mode.as_str() {
        "root" => root(),
        "minimize" => minimize(),
        "rootless" => rootless(),
        "flat" => flat(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: trajectory [root|minimize|rootless|flat]");
            std::process::exit(1);
        }
    }
}

fn print_history(history: &History) {
    println!("{:>5}  {:>24}  {:>24}", "iter", "x", "residual");
    for record in history.records() {
        println!(
            "{:>5}  {:>24.16e}  {:>24.16e}",
            record.iter, record.x, record.residual
        );
    }
}

fn root() -> Result<(), Box<dyn Error>> {
    let f = WithDerivative::new(|x: f64| (x - 3.0).powi(2) - 9.0, |x: f64| 2.0 * (x - 3.0));
    let mut history = History::new();

    let solution = newton::solve(&f, 0.1, &newton::Config::default(), &mut history)?;

    print_history(&history);
    println!("root ≈ {} after {} iterations", solution.x, solution.iters);
    println!(
        "e(t+1)/e(t)² = {:?}",
        history.convergence_ratios(0.0, 2.0)
    );
    Ok(())
}

fn minimize() -> Result<(), Box<dyn Error>> {
    let f = WithSecondDerivative::new(
        |x: f64| (x - 3.0).powi(2) - 9.0,
        |x: f64| 2.0 * (x - 3.0),
        |_x: f64| 2.0,
    );
    let mut history = History::new();

    let solution =
        optimization::newton::minimize(&f, 0.1, &newton::Config::default(), &mut history)?;

    print_history(&history);
    println!(
        "minimum at x = {}, f(x) = {}, f''(x) = {}",
        solution.x, solution.objective, solution.curvature
    );
    Ok(())
}

fn rootless() -> Result<(), Box<dyn Error>> {
    let g = WithDerivative::new(|x: f64| (x - 3.0).powi(2) + 1.0, |x: f64| 2.0 * (x - 3.0));
    let config = newton::Config::default().with_max_iters(20);
    let mut history = History::new();

    match newton::solve(&g, 0.1, &config, &mut history) {
        Ok(solution) => println!("unexpectedly converged: {solution:?}"),
        Err(err) => {
            print_history(&history);
            println!("{err}");
        }
    }
    Ok(())
}

fn flat() -> Result<(), Box<dyn Error>> {
    let f = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
    let mut guard = DivergenceGuard::non_finite();

    let solution = newton::solve(&f, 0.0, &newton::Config::default(), &mut guard)?;

    println!(
        "status = {:?}, x = {}, tripped at iteration {:?}",
        solution.status,
        solution.x,
        guard.tripped_at()
    );
    Ok(())
}
