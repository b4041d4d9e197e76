use crate::cost::CostFunction;
use crate::math::matrix::Matrix;

/// Binary cross-entropy summed over sigmoid output units:
///   C = −Σ [y·ln(a) + (1 − y)·ln(1 − a)]
pub struct CrossEntropyCost;

impl CostFunction for CrossEntropyCost {
    fn loss(a: &Matrix, y: &Matrix) -> f64 {
        a.data
            .iter()
            .flatten()
            .zip(y.data.iter().flatten())
            .map(|(a, y)| -(y * a.ln() + (1.0 - y) * (1.0 - a).ln()))
            .sum()
    }

    /// With sigmoid outputs the σ'(z) term cancels, leaving `a − y`.
    fn derivative(_z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix {
        a - y
    }
}
