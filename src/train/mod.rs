pub mod epoch_stats;
pub mod online;
pub mod stochastic;
pub mod train_config;
pub mod train_loop;

pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use train_loop::train_loop;
