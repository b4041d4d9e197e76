pub mod cost_type;
pub mod cross_entropy;
pub mod quadratic;

use crate::math::matrix::Matrix;

pub use cost_type::Cost;
pub use cross_entropy::CrossEntropyCost;
pub use quadratic::QuadraticCost;

/// A cost paired with sigmoid output units.
///
/// `derivative` returns the output-layer error signal δ_L, i.e. ∂C/∂z_L, for
/// each column of a batch. `loss` is the scalar cost of one output column (or
/// the sum over all columns of a batch).
pub trait CostFunction {
    fn loss(a: &Matrix, y: &Matrix) -> f64;

    fn derivative(z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix;
}
