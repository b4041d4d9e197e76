pub mod activation;
pub mod backprop;
pub mod config;
pub mod cost;
pub mod error;
pub mod eval;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use config::{ConfigError, ExperimentConfig};
pub use cost::{Cost, CostFunction, CrossEntropyCost, QuadraticCost};
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use network::{Example, Gradient, Network, NetworkSpec};
pub use optim::sgd::Sgd;
pub use train::{train_loop, EpochStats, TrainConfig};
