//! XOR with a 2-2-1 sigmoid network, comparing the two costs.
//!
//! Run with:
//!   cargo run --example xor

use dense_sgd::eval::mean_squared_error;
use dense_sgd::{Cost, Example, Network};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> dense_sgd::Result<()> {
    tracing_subscriber::fmt::init();

    let examples = vec![
        Example::new(vec![0.0, 0.0], vec![0.0]),
        Example::new(vec![0.0, 1.0], vec![1.0]),
        Example::new(vec![1.0, 0.0], vec![1.0]),
        Example::new(vec![1.0, 1.0], vec![0.0]),
    ];

    for cost in [Cost::Quadratic, Cost::CrossEntropy] {
        let mut rng = StdRng::seed_from_u64(7);
        let mut network = Network::new(&[2, 2, 1], &mut rng)?;
        let mut data = examples.clone();

        for epoch in 0..2000 {
            network.learn_stochastically(cost, 0.5, 4, &mut data, &mut rng)?;
            if epoch % 500 == 0 {
                println!("{:?} epoch {}: mse = {:.6}", cost, epoch, mean_squared_error(&network, &data)?);
            }
        }

        for example in &examples {
            let output = network.forward(&example.input)?;
            println!("  {:?} -> {:.4}", example.input, output[0]);
        }
    }

    Ok(())
}
