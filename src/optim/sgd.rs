use crate::error::{NetworkError, Result};
use crate::network::{Gradient, Network};

/// Plain gradient descent step with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    /// Fails unless `learning_rate` is finite and strictly positive.
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetworkError::Configuration(format!(
                "learning rate must be finite and positive, got {}",
                learning_rate
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Subtracts `learning_rate / batch_len` times a summed batch gradient
    /// from `network`. The gradient's shapes are checked before anything is
    /// written.
    pub fn step(&self, network: &mut Network, gradient: &Gradient, batch_len: usize) -> Result<()> {
        if batch_len == 0 {
            return Err(NetworkError::Configuration("batch length must be at least 1".into()));
        }
        gradient.check_shapes(network.weights(), network.biases())?;
        self.apply(network, gradient, batch_len);
        Ok(())
    }

    pub(crate) fn apply(&self, network: &mut Network, gradient: &Gradient, batch_len: usize) {
        network.apply_scaled(gradient, self.learning_rate / batch_len as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::math::matrix::Matrix;
    use crate::network::Example;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_bad_learning_rates() {
        for eta in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(Sgd::new(eta), Err(NetworkError::Configuration(_))));
        }
    }

    #[test]
    fn test_step_averages_over_batch() {
        let mut net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(20)).unwrap();
        let before = net.clone();
        let example = Example::new(vec![1.0, 0.0], vec![1.0]);
        let g = net.gradient(Cost::Quadratic, &[example.clone(), example]).unwrap();

        Sgd::new(0.5).unwrap().step(&mut net, &g, 2).unwrap();

        let expected = before.biases()[1].data[0][0] - 0.25 * g.biases[1].data[0][0];
        assert_relative_eq!(net.biases()[1].data[0][0], expected);
    }

    #[test]
    fn test_mismatched_gradient_leaves_network_untouched() {
        let mut net = Network::new(&[2, 3, 1], &mut StdRng::seed_from_u64(21)).unwrap();
        let before = net.clone();
        let mut g = Gradient::zeros_like(&net);
        g.biases[2] = Matrix::zeros(4, 1);

        let err = Sgd::new(0.1).unwrap().step(&mut net, &g, 1).unwrap_err();
        assert_eq!(err, NetworkError::ShapeMismatch { context: "bias gradient", expected: 1, got: 4 });
        assert_eq!(net, before);
    }

    #[test]
    fn test_transposed_weight_gradient_reports_rows() {
        let mut net = Network::new(&[2, 3, 1], &mut StdRng::seed_from_u64(22)).unwrap();
        let before = net.clone();
        let mut g = Gradient::zeros_like(&net);
        g.weights[1] = Matrix::zeros(2, 3);

        let err = Sgd::new(0.1).unwrap().step(&mut net, &g, 1).unwrap_err();
        assert_eq!(err, NetworkError::ShapeMismatch { context: "weight gradient", expected: 3, got: 2 });
        assert_eq!(net, before);
    }
}
