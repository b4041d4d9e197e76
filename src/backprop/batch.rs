use crate::activation::sigmoid::{sigmoid, sigmoid_prime};
use crate::cost::{Cost, CostFunction, CrossEntropyCost, QuadraticCost};
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::{Example, Gradient, Network};

impl Network {
    /// Gradient of the cost summed (not averaged) over `examples`.
    ///
    /// All examples are processed at once as the columns of one input matrix.
    /// Nothing is applied to the network.
    pub fn gradient(&self, cost: Cost, examples: &[Example]) -> Result<Gradient> {
        if examples.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }
        for example in examples {
            self.check_example(example)?;
        }

        Ok(match cost {
            Cost::Quadratic => batch_gradient::<QuadraticCost>(self, examples),
            Cost::CrossEntropy => batch_gradient::<CrossEntropyCost>(self, examples),
        })
    }

    /// Gradient for a single example: the one-column case of `gradient`.
    pub fn example_gradient(&self, cost: Cost, example: &Example) -> Result<Gradient> {
        self.gradient(cost, std::slice::from_ref(example))
    }
}

/// Vectorized backpropagation over a batch of `m` examples.
///
/// Inputs and targets are stacked as the columns of `X` (n₀ × m) and `Y`
/// (n_L × m). Every `z_l`, `a_l` and `δ_l` is then an `n_l × m` matrix, and
///   ∂W_l = δ_l · a_(l-1)ᵀ     (sums the per-column outer products)
///   ∂b_l = Σ_j δ_l[:, j]
///
/// Example shapes must already have been checked against `network`.
pub fn batch_gradient<C: CostFunction>(network: &Network, batch: &[Example]) -> Gradient {
    let depth = network.depth();
    let sizes = network.sizes();
    let weights = network.weights();
    let biases = network.biases();

    let x = Matrix::from_columns(sizes[0], batch.iter().map(|e| e.input.as_slice()));
    let y = Matrix::from_columns(sizes[depth - 1], batch.iter().map(|e| e.target.as_slice()));

    // Forward pass, caching z_l and a_l. z_0 is unused.
    let mut zs = vec![Matrix::default()];
    let mut activations = vec![x];
    for l in 1..depth {
        let z = (&weights[l] * &activations[l - 1]).add_broadcast(&biases[l]);
        activations.push(z.map(sigmoid));
        zs.push(z);
    }

    let last = depth - 1;
    let mut gradient = Gradient {
        weights: vec![Matrix::default(); depth],
        biases: vec![Matrix::default(); depth],
    };

    let mut delta = C::derivative(&zs[last], &activations[last], &y);
    for l in (1..depth).rev() {
        gradient.weights[l] = &delta * &activations[l - 1].transpose();
        gradient.biases[l] = delta.sum_columns();

        if l > 1 {
            delta = (&weights[l].transpose() * &delta).hadamard(&zs[l - 1].map(sigmoid_prime));
        }
    }

    gradient
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gradient_mirrors_network_shapes() {
        let net = Network::new(&[3, 5, 4, 2], &mut StdRng::seed_from_u64(10)).unwrap();
        let batch = vec![
            Example::new(vec![0.1, 0.2, 0.3], vec![1.0, 0.0]),
            Example::new(vec![0.4, -0.2, 0.9], vec![0.0, 1.0]),
        ];
        let g = net.gradient(Cost::CrossEntropy, &batch).unwrap();
        for l in 0..net.depth() {
            assert_eq!(g.weights[l].shape(), net.weights()[l].shape());
            assert_eq!(g.biases[l].shape(), net.biases()[l].shape());
        }
    }

    #[test]
    fn test_gradient_rejects_empty_batch() {
        let net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(net.gradient(Cost::Quadratic, &[]).unwrap_err(), NetworkError::EmptyDataset);
    }

    #[test]
    fn test_gradient_rejects_bad_target() {
        let net = Network::new(&[2, 3], &mut StdRng::seed_from_u64(12)).unwrap();
        let bad = Example::new(vec![0.0, 1.0], vec![1.0]);
        let err = net.example_gradient(Cost::Quadratic, &bad).unwrap_err();
        assert_eq!(err, NetworkError::ShapeMismatch { context: "target", expected: 3, got: 1 });
    }

    #[test]
    fn test_perfect_prediction_has_zero_output_gradient() {
        let net = Network::new(&[2, 2], &mut StdRng::seed_from_u64(13)).unwrap();
        let input = vec![0.3, -0.7];
        let target = net.forward(&input).unwrap();
        let g = net.example_gradient(Cost::CrossEntropy, &Example::new(input, target)).unwrap();
        for v in g.weights[1].data.iter().flatten().chain(g.biases[1].data.iter().flatten()) {
            assert!(v.abs() < 1e-12);
        }
    }
}
