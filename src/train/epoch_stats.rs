use serde::{Deserialize, Serialize};

/// Per-epoch summary returned by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean cost per example over the training set after this epoch.
    pub train_cost: f64,
    /// Parameter updates applied during the epoch.
    pub updates: usize,
    /// Wall-clock duration of the epoch in milliseconds.
    pub elapsed_ms: u64,
}
