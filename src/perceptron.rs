use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::Activation;
use crate::dataset::Sample;

pub struct Perceptron {
    pub weights: Array1<f64>,
    pub bias: f64,
    pub learning_rate: f64,
    pub activation: Activation,
}

impl Perceptron {
    /// Weights and bias start as independent uniform draws in [-1, 1] from
    /// the injected random source.
    pub fn new(
        input_size: usize,
        activation: Activation,
        learning_rate: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let distribution = Uniform::new_inclusive(-1.0, 1.0);

        Self {
            weights: Array1::random_using(input_size, distribution, rng),
            bias: rng.sample(distribution),
            learning_rate,
            activation,
        }
    }

    pub fn with_seed(
        input_size: usize,
        activation: Activation,
        learning_rate: f64,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        Self::new(input_size, activation, learning_rate, &mut rng)
    }

    /// Weighted sum plus bias. `features` must match the weight count; the
    /// dot product asserts the dimensions.
    pub fn net(&self, features: &[f64]) -> f64 {
        self.bias + ArrayView1::from(features).dot(&self.weights)
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        self.activation.apply(self.net(features))
    }

    /// Online delta-rule training: every sample's error adjusts the weights
    /// immediately, so later samples in the same epoch see the update.
    /// Always runs exactly `epochs` full passes; returns the mean absolute
    /// error observed in each of them.
    pub fn fit(&mut self, samples: &[Sample], epochs: usize) -> Vec<f64> {
        let mut epoch_errors = Vec::with_capacity(epochs);

        for _ in 0..epochs {
            let mut total_error = 0.0;

            for sample in samples {
                let predicted = self.predict(&sample.features);
                let error = sample.label - predicted;

                let step = self.learning_rate * error;
                let features = ArrayView1::from(&sample.features);
                self.weights.zip_mut_with(&features, |weight, &feature| {
                    *weight += step * feature;
                });
                self.bias += step;

                total_error += error.abs();
            }

            epoch_errors.push(total_error / samples.len() as f64);
        }

        epoch_errors
    }
}
