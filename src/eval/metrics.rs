//! Caller-side evaluation helpers built on `Network::forward`.
//!
//! None of these touch the network's parameters.

use crate::cost::Cost;
use crate::error::{NetworkError, Result};
use crate::network::{Example, Network};

/// Mean per-example cost over `examples`.
pub fn mean_cost(network: &Network, examples: &[Example], cost: Cost) -> Result<f64> {
    mean_over(network, examples, |output, example| cost.loss(output, &example.target))
}

/// Mean over examples of the mean squared output error.
pub fn mean_squared_error(network: &Network, examples: &[Example]) -> Result<f64> {
    mean_over(network, examples, |output, example| {
        check_target(output, example)?;
        let n = output.len() as f64;
        Ok(output
            .iter()
            .zip(example.target.iter())
            .map(|(a, y)| (a - y).powi(2))
            .sum::<f64>()
            / n)
    })
}

/// Fraction of examples whose strongest output unit is the target's
/// strongest component (one-hot classification).
pub fn accuracy(network: &Network, examples: &[Example]) -> Result<f64> {
    strict_accuracy(network, examples, f64::INFINITY)
}

/// Like `accuracy`, but a hit also requires the winning output value to lie
/// within `tolerance` of the target's maximum.
pub fn strict_accuracy(network: &Network, examples: &[Example], tolerance: f64) -> Result<f64> {
    mean_over(network, examples, |output, example| {
        check_target(output, example)?;
        let hit = match (argmax(output), argmax(&example.target)) {
            (Some((i, v)), Some((j, y))) => i == j && (v - y).abs() < tolerance,
            _ => false,
        };
        Ok(if hit { 1.0 } else { 0.0 })
    })
}

fn mean_over<F>(network: &Network, examples: &[Example], mut score: F) -> Result<f64>
where
    F: FnMut(&[f64], &Example) -> Result<f64>,
{
    if examples.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    let mut total = 0.0;
    for example in examples {
        let output = network.forward(&example.input)?;
        total += score(&output, example)?;
    }
    Ok(total / examples.len() as f64)
}

fn check_target(output: &[f64], example: &Example) -> Result<()> {
    if output.len() != example.target.len() {
        return Err(NetworkError::ShapeMismatch {
            context: "target",
            expected: output.len(),
            got: example.target.len(),
        });
    }
    Ok(())
}

/// Index and value of the first maximum. `None` for an empty or all-NaN slice.
fn argmax(v: &[f64]) -> Option<(usize, f64)> {
    v.iter().enumerate().fold(None, |best, (i, &x)| match best {
        Some((_, m)) if x <= m => best,
        _ if x.is_nan() => best,
        _ => Some((i, x)),
    })
}
