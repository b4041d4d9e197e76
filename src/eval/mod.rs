pub mod metrics;

pub use metrics::{accuracy, mean_cost, mean_squared_error, strict_accuracy};
