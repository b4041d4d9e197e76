// Analytic gradients checked against central differences of the scalar cost.

use approx::assert_relative_eq;
use dense_sgd::{Cost, Example, Network};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const H: f64 = 1e-5;

fn cost_at(net: &Network, cost: Cost, example: &Example) -> f64 {
    let output = net.forward(&example.input).unwrap();
    cost.loss(&output, &example.target).unwrap()
}

fn random_example(rng: &mut StdRng, n_in: usize, n_out: usize) -> Example {
    Example::new(
        (0..n_in).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        (0..n_out).map(|_| rng.gen_range(0.0..1.0)).collect(),
    )
}

fn check_gradient(cost: Cost, sizes: &[usize], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let net = Network::new(sizes, &mut rng).unwrap();
    let example = random_example(&mut rng, sizes[0], sizes[sizes.len() - 1]);
    let analytic = net.example_gradient(cost, &example).unwrap();

    for l in 1..net.depth() {
        for i in 0..sizes[l] {
            for j in 0..sizes[l - 1] {
                let mut plus = net.clone();
                *plus.weight_mut(l, i, j).unwrap() += H;
                let mut minus = net.clone();
                *minus.weight_mut(l, i, j).unwrap() -= H;
                let numeric = (cost_at(&plus, cost, &example) - cost_at(&minus, cost, &example)) / (2.0 * H);

                assert_relative_eq!(
                    analytic.weights[l].data[i][j],
                    numeric,
                    epsilon = 1e-8,
                    max_relative = 1e-5
                );
            }

            let mut plus = net.clone();
            *plus.bias_mut(l, i).unwrap() += H;
            let mut minus = net.clone();
            *minus.bias_mut(l, i).unwrap() -= H;
            let numeric = (cost_at(&plus, cost, &example) - cost_at(&minus, cost, &example)) / (2.0 * H);

            assert_relative_eq!(
                analytic.biases[l].data[i][0],
                numeric,
                epsilon = 1e-8,
                max_relative = 1e-5
            );
        }
    }
}

#[test]
fn test_quadratic_gradient_small_network() {
    check_gradient(Cost::Quadratic, &[3, 4, 2], 200);
}

#[test]
fn test_cross_entropy_gradient_small_network() {
    check_gradient(Cost::CrossEntropy, &[3, 4, 2], 201);
}

#[test]
fn test_gradients_deeper_network() {
    check_gradient(Cost::Quadratic, &[2, 5, 3, 3], 202);
    check_gradient(Cost::CrossEntropy, &[2, 5, 3, 3], 203);
}

#[test]
fn test_batch_gradient_is_gradient_of_summed_cost() {
    let mut rng = StdRng::seed_from_u64(204);
    let net = Network::new(&[3, 4, 2], &mut rng).unwrap();
    let batch: Vec<Example> = (0..5).map(|_| random_example(&mut rng, 3, 2)).collect();
    let analytic = net.gradient(Cost::CrossEntropy, &batch).unwrap();

    let total = |n: &Network| batch.iter().map(|e| cost_at(n, Cost::CrossEntropy, e)).sum::<f64>();
    let mut plus = net.clone();
    *plus.weight_mut(1, 2, 1).unwrap() += H;
    let mut minus = net.clone();
    *minus.weight_mut(1, 2, 1).unwrap() -= H;
    let numeric = (total(&plus) - total(&minus)) / (2.0 * H);

    assert_relative_eq!(analytic.weights[1].data[2][1], numeric, epsilon = 1e-8, max_relative = 1e-5);
}
