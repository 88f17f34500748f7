use log::info;
use perceptron::{
    activation::Activation, dataset::student_records, experiment, normalize::max_abs_normalize,
    plot::draw_learning_curves,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let samples = match args.next() {
        Some(data_filepath) => {
            info!("loading student records from {data_filepath}");
            perceptron::parse::parse(&data_filepath)?
        }
        None => {
            info!("no dataset path given, using the built-in student records");
            student_records()
        }
    };
    assert!(!samples.is_empty());

    let normalized = max_abs_normalize(&samples);

    println!("dataset (normalized):");
    for (index, (sample, raw)) in normalized.iter().zip(&samples).enumerate() {
        println!(
            "{index:>2} {:?} -> {:?} => {}",
            raw.features, sample.features, sample.label
        );
    }

    const EPOCHS: usize = 20;
    const LEARNING_RATE: f64 = 0.1;

    let mut rng = rand::thread_rng();
    let mut curves = Vec::with_capacity(Activation::ALL.len());

    for activation in Activation::ALL {
        println!("\n==============================");
        println!("activation: {activation:?}");
        println!("==============================");

        let report = experiment::run(activation, &normalized, EPOCHS, LEARNING_RATE, &mut rng);

        let weights: Vec<String> = report
            .weights
            .iter()
            .map(|weight| format!("{weight:.4}"))
            .collect();
        println!("weights: {weights:?} bias: {:.4}", report.bias);

        for (evaluation, raw) in report.evaluations.iter().zip(&samples) {
            println!(
                "input {:?} -> output: {:.4} -> class {} (expected {})",
                raw.features, evaluation.output, evaluation.predicted, evaluation.expected
            );
        }

        let accuracy = report.accuracy * 100.0;
        println!("{activation:?} training-set accuracy: {accuracy:.1}%");

        curves.push((activation, report.epoch_errors));
    }

    if let Some(plot_filepath) = args.next() {
        draw_learning_curves(&plot_filepath, &curves)?;
        info!("learning curves written to {plot_filepath}");
    }

    Ok(())
}
