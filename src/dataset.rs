pub const DIMENSIONS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// failed-course count, attendance percent, grade average
    pub features: [f64; DIMENSIONS],
    pub label: f64, // 1 if at risk, 0 if not
}

/// Synthetic labeling rule for the fixture records. Illustrative only.
pub fn risk_label(features: &[f64; DIMENSIONS]) -> f64 {
    let [failed_courses, attendance, grade_average] = *features;

    if failed_courses >= 4.0 || grade_average < 10.0 || attendance < 70.0 {
        1.0
    } else {
        0.0
    }
}

pub fn student_records() -> Vec<Sample> {
    const RAW_RECORDS: [[f64; DIMENSIONS]; 12] = [
        [0.0, 95.0, 16.0],
        [1.0, 90.0, 14.0],
        [4.0, 60.0, 9.0],
        [5.0, 50.0, 8.0],
        [2.0, 75.0, 12.0],
        [3.0, 65.0, 11.0],
        [0.0, 85.0, 18.0],
        [6.0, 40.0, 6.0],
        [1.0, 72.0, 10.0],
        [0.0, 98.0, 19.0],
        [2.0, 68.0, 9.0],
        [3.0, 80.0, 13.0],
    ];

    RAW_RECORDS
        .iter()
        .map(|features| Sample {
            features: *features,
            label: risk_label(features),
        })
        .collect()
}
