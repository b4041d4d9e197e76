use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::backprop::batch::batch_gradient;
use crate::cost::{Cost, CostFunction, CrossEntropyCost, QuadraticCost};
use crate::error::{NetworkError, Result};
use crate::network::{Example, Network};
use crate::optim::sgd::Sgd;

impl Network {
    /// Runs one epoch of mini-batch stochastic gradient descent.
    ///
    /// `examples` is shuffled in place with `rng`, cut into consecutive
    /// batches of `batch_size` (the last one possibly shorter), and each batch
    /// applies its summed gradient scaled by `eta / |batch|`.
    ///
    /// Returns the number of updates applied, `ceil(n / batch_size)`.
    ///
    /// # Errors
    /// - `EmptyDataset` if `examples` is empty
    /// - `Configuration` if `batch_size == 0` or `eta` is not a positive number
    /// - `ShapeMismatch` if any example does not fit the network
    ///
    /// Every check runs before the first update.
    pub fn learn_stochastically<R: Rng + ?Sized>(
        &mut self,
        cost: Cost,
        eta: f64,
        batch_size: usize,
        examples: &mut [Example],
        rng: &mut R,
    ) -> Result<usize> {
        if examples.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }
        if batch_size == 0 {
            return Err(NetworkError::Configuration("batch size must be at least 1".into()));
        }
        let sgd = Sgd::new(eta)?;
        for example in examples.iter() {
            self.check_example(example)?;
        }

        examples.shuffle(rng);

        let updates = match cost {
            Cost::Quadratic => run_batches::<QuadraticCost>(self, &sgd, batch_size, examples),
            Cost::CrossEntropy => run_batches::<CrossEntropyCost>(self, &sgd, batch_size, examples),
        };

        debug!(examples = examples.len(), batch_size, updates, ?cost, "epoch done");
        Ok(updates)
    }
}

fn run_batches<C: CostFunction>(
    network: &mut Network,
    sgd: &Sgd,
    batch_size: usize,
    examples: &[Example],
) -> usize {
    let mut updates = 0;
    for batch in examples.chunks(batch_size) {
        let gradient = batch_gradient::<C>(network, batch);
        sgd.apply(network, &gradient, batch.len());
        updates += 1;
    }
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(n: usize) -> Vec<Example> {
        (0..n)
            .map(|i| {
                let x = i as f64 / n as f64;
                Example::new(vec![x, 1.0 - x], vec![x])
            })
            .collect()
    }

    #[test]
    fn test_empty_dataset() {
        let mut net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(40)).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = net
            .learn_stochastically(Cost::CrossEntropy, 0.1, 4, &mut [], &mut rng)
            .unwrap_err();
        assert_eq!(err, NetworkError::EmptyDataset);
    }

    #[test]
    fn test_zero_batch_size() {
        let mut net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(41)).unwrap();
        let mut data = dataset(3);
        let err = net
            .learn_stochastically(Cost::Quadratic, 0.1, 0, &mut data, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Configuration(_)));
    }

    #[test]
    fn test_one_bad_example_blocks_whole_epoch() {
        let mut net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(42)).unwrap();
        let before = net.clone();
        let mut data = dataset(6);
        data[5].target.push(0.0);

        let err = net
            .learn_stochastically(Cost::Quadratic, 0.1, 2, &mut data, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, NetworkError::ShapeMismatch { context: "target", .. }));
        assert_eq!(net, before);
    }

    #[test]
    fn test_shuffle_keeps_every_example() {
        let mut net = Network::new(&[2, 1], &mut StdRng::seed_from_u64(43)).unwrap();
        let original = dataset(10);
        let mut data = original.clone();
        net.learn_stochastically(Cost::CrossEntropy, 0.1, 3, &mut data, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_ne!(data, original);
        for example in &original {
            assert!(data.contains(example));
        }
    }
}
