use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::cost::Cost;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`       : number of full passes over the training set
/// - `batch_size`   : examples per mini-batch; `1` gives online SGD
/// - `learning_rate`: step size η
/// - `cost`         : which cost to minimize
/// - `seed`         : seeds initialization and shuffling; `None` draws from
///                  OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub cost: Cost,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainConfig {
    /// Creates an unseeded `TrainConfig`.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64, cost: Cost) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
            cost,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The generator this configuration asks for.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
