use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use crate::dataset::{risk_label, Sample, DIMENSIONS};

/// Reads student records from a headered CSV with the columns
/// `failed,attendance,grade` and derives each label with the synthetic
/// risk rule. This is the external data-preparation step; the model never
/// touches files.
pub fn parse(file_path: &str) -> Result<Vec<Sample>, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut samples = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;

        if record.len() != DIMENSIONS {
            return Err(format!(
                "record {index}: expected {DIMENSIONS} fields, got {}",
                record.len()
            )
            .into());
        }

        let mut features = [0.0; DIMENSIONS];
        for (slot, field) in features.iter_mut().zip(record.iter()) {
            *slot = field.trim().parse::<f64>()?;
        }

        samples.push(Sample {
            features,
            label: risk_label(&features),
        });
    }

    Ok(samples)
}
