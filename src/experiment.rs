use log::debug;
use ndarray::Array1;
use rand::Rng;

use crate::activation::Activation;
use crate::dataset::{Sample, DIMENSIONS};
use crate::perceptron::Perceptron;

pub struct Evaluation {
    pub output: f64,
    pub predicted: f64,
    pub expected: f64,
}

pub struct ExperimentReport {
    pub activation: Activation,
    pub weights: Array1<f64>,
    pub bias: f64,
    pub epoch_errors: Vec<f64>,
    pub evaluations: Vec<Evaluation>,
    pub accuracy: f64,
}

/// The step activation already emits the class itself; every other
/// activation's output is thresholded at 0.5.
pub fn classify(activation: Activation, output: f64) -> f64 {
    if activation == Activation::Step {
        output
    } else if output >= 0.5 {
        1.0
    } else {
        0.0
    }
}

/// Trains a freshly initialized perceptron for `epochs` full passes over
/// `samples`, then evaluates it on the same samples.
pub fn run(
    activation: Activation,
    samples: &[Sample],
    epochs: usize,
    learning_rate: f64,
    rng: &mut impl Rng,
) -> ExperimentReport {
    let mut model = Perceptron::new(DIMENSIONS, activation, learning_rate, rng);
    let epoch_errors = model.fit(samples, epochs);

    let evaluations: Vec<Evaluation> = samples
        .iter()
        .map(|sample| {
            let output = model.predict(&sample.features);

            Evaluation {
                output,
                predicted: classify(activation, output),
                expected: sample.label,
            }
        })
        .collect();

    #[allow(clippy::float_cmp)]
    let correct = evaluations
        .iter()
        .filter(|evaluation| evaluation.predicted == evaluation.expected)
        .count();
    let accuracy = correct as f64 / samples.len() as f64;

    debug!(
        "{activation:?}: {epochs} epochs, final mean error {:.4}, accuracy {accuracy:.3}",
        epoch_errors.last().copied().unwrap_or(f64::NAN)
    );

    ExperimentReport {
        activation,
        weights: model.weights,
        bias: model.bias,
        epoch_errors,
        evaluations,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, run};
    use crate::activation::Activation;
    use crate::dataset::student_records;
    use crate::normalize::max_abs_normalize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    #[allow(clippy::float_cmp)]
    fn step_outputs_are_used_as_classes_directly() {
        assert_eq!(classify(Activation::Step, 0.0), 0.0);
        assert_eq!(classify(Activation::Step, 1.0), 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn continuous_outputs_threshold_at_one_half() {
        assert_eq!(classify(Activation::Sigmoid, 0.49), 0.0);
        assert_eq!(classify(Activation::Sigmoid, 0.5), 1.0);
        assert_eq!(classify(Activation::Tanh, 0.9), 1.0);
        assert_eq!(classify(Activation::Linear, -0.2), 0.0);
    }

    #[test]
    fn step_perceptron_beats_the_random_baseline() {
        let samples = max_abs_normalize(&student_records());
        let mut rng = StdRng::seed_from_u64(42);

        let report = run(Activation::Step, &samples, 20, 0.1, &mut rng);

        assert!(
            report.accuracy >= 0.7,
            "training-set accuracy {} below threshold",
            report.accuracy
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn report_covers_every_sample() {
        let samples = max_abs_normalize(&student_records());
        let mut rng = StdRng::seed_from_u64(7);

        let report = run(Activation::Sigmoid, &samples, 20, 0.1, &mut rng);

        assert_eq!(report.evaluations.len(), samples.len());
        assert_eq!(report.epoch_errors.len(), 20);
        assert!(report
            .evaluations
            .iter()
            .all(|evaluation| evaluation.predicted == 0.0 || evaluation.predicted == 1.0));
        assert!((0.0..=1.0).contains(&report.accuracy));
    }
}
