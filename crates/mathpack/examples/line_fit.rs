//! Fits a polynomial to `x,y` pairs read from stdin, one pair per line.
//!
//! Usage: `line_fit [degree] < points.csv`

use std::io::{self, BufRead};

use anyhow::{bail, Context};
use mathpack::linalg::{MatrixN, VectorN};

fn main() -> anyhow::Result<()> {
    mathpack::init_logger!();

    let degree: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("degree must be a non-negative integer")?,
        None => 1,
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (i, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((x, y)) = line.split_once(',') else {
            bail!("line {}: expected `x,y`, got '{line}'", i + 1);
        };
        xs.push(x.trim().parse::<f64>().with_context(|| format!("line {}", i + 1))?);
        ys.push(y.trim().parse::<f64>().with_context(|| format!("line {}", i + 1))?);
    }
    if xs.len() <= degree {
        bail!(
            "need more than {degree} points for a degree {degree} fit, got {}",
            xs.len()
        );
    }

    let d = MatrixN::from_fn(xs.len(), degree + 1, |r, c| xs[r].powi(c as i32));
    let y = VectorN::from(ys);
    let mut coeffs = VectorN::zeros(degree + 1);
    mathpack::lls(&d, &y, &mut coeffs)?;

    println!("coefficients (ascending powers):");
    println!("{coeffs}");

    let residual = &(&d * &coeffs) - &y;
    log::info!("rms residual: {}", (residual.norm2() / xs.len() as f64).sqrt());

    Ok(())
}
