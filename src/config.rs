use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Architecture plus training hyperparameters, as stored in a JSON file:
///
/// ```json
/// {
///   "network": { "sizes": [2, 2, 1] },
///   "training": { "epochs": 2000, "batch_size": 4, "learning_rate": 0.5,
///                 "cost": "cross_entropy", "seed": 7 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub network: NetworkSpec,
    pub training: TrainConfig,
}

impl ExperimentConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config previously written by `save_json` (or by hand).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
