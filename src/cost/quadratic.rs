use crate::activation::sigmoid::sigmoid_prime;
use crate::cost::CostFunction;
use crate::math::matrix::Matrix;

/// Squared-error cost `C = ½‖a − y‖²`.
pub struct QuadraticCost;

impl CostFunction for QuadraticCost {
    fn loss(a: &Matrix, y: &Matrix) -> f64 {
        let diff = a - y;
        0.5 * diff.data.iter().flatten().map(|d| d * d).sum::<f64>()
    }

    /// `(a − y) ⊙ σ'(z)`. The σ'(z) factor is what makes learning crawl
    /// once an output unit saturates.
    fn derivative(z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix {
        (a - y).hadamard(&z.map(sigmoid_prime))
    }
}
