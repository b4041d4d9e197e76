use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::eval::metrics::mean_cost;
use crate::network::{Example, Network};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` epochs of mini-batch SGD and returns
/// one `EpochStats` per epoch.
///
/// `examples` is reshuffled every epoch. Deciding when to stop, or checking a
/// held-out set, is up to the caller.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    examples: &mut [Example],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    info!(
        sizes = ?network.sizes(),
        examples = examples.len(),
        epochs = config.epochs,
        batch_size = config.batch_size,
        learning_rate = config.learning_rate,
        cost = ?config.cost,
        "starting training"
    );

    let mut history = Vec::with_capacity(config.epochs);
    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let updates = network.learn_stochastically(
            config.cost,
            config.learning_rate,
            config.batch_size,
            examples,
            rng,
        )?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let train_cost = mean_cost(network, examples, config.cost)?;
        info!(epoch, total = config.epochs, train_cost, elapsed_ms, "epoch");

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_cost,
            updates,
            elapsed_ms,
        });
    }

    if let Some(last) = history.last() {
        info!(train_cost = last.train_cost, "training finished");
    }
    Ok(history)
}
