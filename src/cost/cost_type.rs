use serde::{Deserialize, Serialize};

use crate::cost::{CostFunction, CrossEntropyCost, QuadraticCost};
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Selects which cost the trainer minimizes.
///
/// - `Quadratic`   : `½‖a − y‖²`; output error is `(a − y) ⊙ σ'(z)`.
/// - `CrossEntropy`: binary cross-entropy; output error is `a − y`.
///
/// Training entry points match on this once per call and run a loop
/// monomorphized over the chosen `CostFunction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    Quadratic,
    #[default]
    CrossEntropy,
}

impl Cost {
    /// Output-layer error signal for column-stacked `z`, `a` and `y`.
    /// The result has the shape of `y`.
    pub fn derivative(&self, z: &Matrix, a: &Matrix, y: &Matrix) -> Result<Matrix> {
        check_same_shape(z, y)?;
        check_same_shape(a, y)?;
        Ok(match self {
            Cost::Quadratic => QuadraticCost::derivative(z, a, y),
            Cost::CrossEntropy => CrossEntropyCost::derivative(z, a, y),
        })
    }

    /// Scalar cost of the prediction `a` against target `y`.
    pub fn loss(&self, a: &[f64], y: &[f64]) -> Result<f64> {
        if a.len() != y.len() {
            return Err(NetworkError::ShapeMismatch {
                context: "cost",
                expected: y.len(),
                got: a.len(),
            });
        }
        let (a, y) = (Matrix::column(a), Matrix::column(y));
        Ok(match self {
            Cost::Quadratic => QuadraticCost::loss(&a, &y),
            Cost::CrossEntropy => CrossEntropyCost::loss(&a, &y),
        })
    }
}

fn check_same_shape(m: &Matrix, y: &Matrix) -> Result<()> {
    if m.rows != y.rows {
        return Err(NetworkError::ShapeMismatch {
            context: "cost rows",
            expected: y.rows,
            got: m.rows,
        });
    }
    if m.cols != y.cols {
        return Err(NetworkError::ShapeMismatch {
            context: "cost columns",
            expected: y.cols,
            got: m.cols,
        });
    }
    Ok(())
}
