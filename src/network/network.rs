use rand::Rng;

use crate::activation::sigmoid::sigmoid;
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::example::Example;
use crate::network::gradient::Gradient;

/// Fully-connected sigmoid network.
///
/// Layer `l ≥ 1` owns a `sizes[l] × sizes[l-1]` weight matrix and a
/// `sizes[l] × 1` bias column. Index 0 holds 0×0 placeholders for the input
/// layer. Shapes are fixed at construction; training only rewrites values.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    depth: usize,
    sizes: Vec<usize>,
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from N(0, 1).
    pub fn new<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Network> {
        if sizes.len() < 2 {
            return Err(NetworkError::Configuration(format!(
                "a network needs at least an input and an output layer, got {} layer(s)",
                sizes.len()
            )));
        }
        if let Some(l) = sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::Configuration(format!("layer {} has zero width", l)));
        }

        let mut weights = vec![Matrix::default()];
        let mut biases = vec![Matrix::default()];
        for l in 1..sizes.len() {
            weights.push(Matrix::standard_normal(sizes[l], sizes[l - 1], rng));
            biases.push(Matrix::standard_normal(sizes[l], 1, rng));
        }

        Ok(Network {
            depth: sizes.len(),
            sizes: sizes.to_vec(),
            weights,
            biases,
        })
    }

    /// Number of layers, input included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.depth - 1]
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.biases
    }

    /// Total number of trainable weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.sizes.windows(2).map(|w| w[1] * w[0] + w[1]).sum()
    }

    /// Mutable access to one weight, `None` when out of range.
    pub fn weight_mut(&mut self, layer: usize, row: usize, col: usize) -> Option<&mut f64> {
        if layer == 0 {
            return None;
        }
        self.weights.get_mut(layer)?.data.get_mut(row)?.get_mut(col)
    }

    /// Mutable access to one bias, `None` when out of range.
    pub fn bias_mut(&mut self, layer: usize, row: usize) -> Option<&mut f64> {
        if layer == 0 {
            return None;
        }
        self.biases.get_mut(layer)?.data.get_mut(row)?.get_mut(0)
    }

    /// Computes the output activations for `input`. Pure read.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;

        let mut a = Matrix::column(input);
        for l in 1..self.depth {
            a = (&(&self.weights[l] * &a) + &self.biases[l]).map(sigmoid);
        }

        Ok(a.col(0))
    }

    pub(crate) fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(NetworkError::ShapeMismatch {
                context: "input",
                expected: self.input_size(),
                got: input.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_example(&self, example: &Example) -> Result<()> {
        self.check_input(&example.input)?;
        if example.target.len() != self.output_size() {
            return Err(NetworkError::ShapeMismatch {
                context: "target",
                expected: self.output_size(),
                got: example.target.len(),
            });
        }
        Ok(())
    }

    /// `W_l -= factor · ∂W_l`, `b_l -= factor · ∂b_l` for every layer.
    pub(crate) fn apply_scaled(&mut self, gradient: &Gradient, factor: f64) {
        for l in 1..self.depth {
            self.weights[l].sub_scaled(&gradient.weights[l], factor);
            self.biases[l].sub_scaled(&gradient.biases[l], factor);
        }
    }
}
