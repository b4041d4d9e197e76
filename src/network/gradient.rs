use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Per-layer parameter gradients, laid out exactly like `Network`: index 0 is
/// a 0×0 placeholder for the input layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

impl Gradient {
    /// An all-zero gradient shaped for `network`.
    pub fn zeros_like(network: &Network) -> Gradient {
        Gradient {
            weights: network.weights().iter().map(|w| Matrix::zeros(w.rows, w.cols)).collect(),
            biases: network.biases().iter().map(|b| Matrix::zeros(b.rows, b.cols)).collect(),
        }
    }

    /// Accumulates `other` into `self`. Shapes are checked before anything is
    /// added, so a mismatch leaves `self` untouched.
    pub fn accumulate(&mut self, other: &Gradient) -> Result<()> {
        other.check_shapes(&self.weights, &self.biases)?;
        for (w, dw) in self.weights.iter_mut().zip(other.weights.iter()) {
            w.add_assign(dw);
        }
        for (b, db) in self.biases.iter_mut().zip(other.biases.iter()) {
            b.add_assign(db);
        }
        Ok(())
    }

    /// Checks that every layer of `self` has the shape of the matching
    /// `weights` / `biases` entry.
    pub(crate) fn check_shapes(&self, weights: &[Matrix], biases: &[Matrix]) -> Result<()> {
        check_layers("weight gradient", weights, &self.weights)?;
        check_layers("bias gradient", biases, &self.biases)
    }
}

fn check_layers(context: &'static str, expected: &[Matrix], got: &[Matrix]) -> Result<()> {
    if expected.len() != got.len() {
        return Err(NetworkError::ShapeMismatch {
            context: "gradient layers",
            expected: expected.len(),
            got: got.len(),
        });
    }
    for (e, g) in expected.iter().zip(got.iter()) {
        if e.rows != g.rows {
            return Err(NetworkError::ShapeMismatch { context, expected: e.rows, got: g.rows });
        }
        if e.cols != g.cols {
            return Err(NetworkError::ShapeMismatch { context, expected: e.cols, got: g.cols });
        }
    }
    Ok(())
}
