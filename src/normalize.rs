use crate::dataset::{Sample, DIMENSIONS};

/// Rescales each feature column by its maximum absolute value, bounding
/// outputs to [-1, 1]. Constant-zero columns pass through unchanged.
pub fn max_abs_normalize(samples: &[Sample]) -> Vec<Sample> {
    let mut max_abs = [0.0_f64; DIMENSIONS];
    for sample in samples {
        for (column_max, value) in max_abs.iter_mut().zip(sample.features) {
            *column_max = column_max.max(value.abs());
        }
    }

    samples
        .iter()
        .map(|sample| {
            let mut features = sample.features;
            for (value, column_max) in features.iter_mut().zip(max_abs) {
                // avoid dividing by 0
                if column_max != 0.0 {
                    *value /= column_max;
                }
            }

            Sample {
                features,
                label: sample.label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::max_abs_normalize;
    use crate::dataset::{student_records, Sample, DIMENSIONS};

    fn column_samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .map(|&value| Sample {
                features: [value, 0.0, 1.0],
                label: 0.0,
            })
            .collect()
    }

    #[test]
    fn outputs_are_bounded_by_one() {
        let normalized = max_abs_normalize(&student_records());

        for sample in &normalized {
            for value in sample.features {
                assert!(value.abs() <= 1.0, "value {value} out of range");
            }
        }
    }

    #[test]
    fn known_column_scales_by_its_max_abs() {
        let samples = column_samples(&[0.0, 1.0, 4.0, 5.0, 2.0, 3.0, 0.0, 6.0, 1.0, 0.0, 2.0, 3.0]);
        let normalized = max_abs_normalize(&samples);

        // max abs is 6, so the row holding 4 becomes 4/6
        assert!((normalized[2].features[0] - 4.0 / 6.0).abs() < 1e-12);
        assert!((normalized[7].features[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_columns_pass_through_unchanged() {
        let samples = column_samples(&[1.0, 2.0, 4.0]);
        let normalized = max_abs_normalize(&samples);

        for sample in &normalized {
            assert_eq!(sample.features[1], 0.0);
            assert_eq!(sample.features[2], 1.0);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn input_is_not_mutated_and_labels_survive() {
        let samples = vec![
            Sample {
                features: [2.0, 50.0, 10.0],
                label: 1.0,
            },
            Sample {
                features: [4.0, 100.0, 20.0],
                label: 0.0,
            },
        ];
        let normalized = max_abs_normalize(&samples);

        assert_eq!(samples[0].features, [2.0, 50.0, 10.0]);
        assert_eq!(normalized[0].features, [0.5, 0.5, 0.5]);
        assert_eq!(normalized[0].label, 1.0);
        assert_eq!(normalized[1].label, 0.0);
        assert_eq!(normalized.len(), samples.len());
        assert_eq!(normalized[0].features.len(), DIMENSIONS);
    }

    #[test]
    fn negative_values_normalize_by_magnitude() {
        let samples = column_samples(&[-4.0, 2.0]);
        let normalized = max_abs_normalize(&samples);

        assert!((normalized[0].features[0] - -1.0).abs() < 1e-12);
        assert!((normalized[1].features[0] - 0.5).abs() < 1e-12);
    }
}
