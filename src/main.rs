//! Trains a sigmoid network on the four XOR pairs and prints its predictions.
//!
//!   cargo run --release -- --epochs 2000 --seed 7
//!   cargo run --release -- --config xor.json

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dense_sgd::eval::mean_squared_error;
use dense_sgd::{train_loop, Cost, Example, ExperimentConfig, NetworkSpec, TrainConfig};

#[derive(Parser, Debug)]
#[command(name = "dense-sgd")]
#[command(about = "Train a sigmoid feed-forward network on XOR with mini-batch SGD")]
struct Cli {
    /// JSON experiment config; defaults to a 2-2-1 cross-entropy run
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured number of epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Override the configured random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_config() -> ExperimentConfig {
    ExperimentConfig {
        network: NetworkSpec::new(vec![2, 2, 1]),
        training: TrainConfig::new(2000, 4, 0.5, Cost::CrossEntropy),
    }
}

fn xor_examples() -> Vec<Example> {
    vec![
        Example::new(vec![0.0, 0.0], vec![0.0]),
        Example::new(vec![0.0, 1.0], vec![1.0]),
        Example::new(vec![1.0, 0.0], vec![1.0]),
        Example::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &cli.config {
        Some(path) => ExperimentConfig::load_json(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => default_config(),
    };
    if let Some(epochs) = cli.epochs {
        config.training.epochs = epochs;
    }
    if let Some(seed) = cli.seed {
        config.training.seed = Some(seed);
    }

    let sizes = &config.network.sizes;
    if sizes.first() != Some(&2) || sizes.last() != Some(&1) {
        bail!("XOR needs 2 inputs and 1 output, got sizes {:?}", sizes);
    }

    let mut rng = config.training.rng();
    let mut network = config.network.build(&mut rng)?;
    let mut examples = xor_examples();

    let initial_mse = mean_squared_error(&network, &examples)?;
    train_loop(&mut network, &mut examples, &config.training, &mut rng)?;
    let final_mse = mean_squared_error(&network, &examples)?;

    println!("MSE: {:.6} -> {:.6}", initial_mse, final_mse);
    for example in xor_examples() {
        let output = network.forward(&example.input)?;
        println!("{:?} -> {:.4} (target {})", example.input, output[0], example.target[0]);
    }

    Ok(())
}
