use plotters::prelude::*;
use std::error::Error;

use crate::activation::Activation;

/// Draws every experiment's per-epoch mean absolute training error into a
/// single SVG chart, one line series per activation.
pub fn draw_learning_curves(
    file_path: &str,
    curves: &[(Activation, Vec<f64>)],
) -> Result<(), Box<dyn Error>> {
    let epochs = curves
        .iter()
        .map(|(_, errors)| errors.len())
        .max()
        .unwrap_or(0);
    let highest_error = curves
        .iter()
        .flat_map(|(_, errors)| errors.iter().copied())
        .fold(f64::EPSILON, f64::max);

    let root = SVGBackend::new(file_path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "mean absolute training error per epoch",
            ("sans-serif", 24).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0usize..epochs, 0f64..highest_error)?;

    chart.configure_mesh().draw()?;

    for (index, (activation, errors)) in curves.iter().enumerate() {
        let style = ShapeStyle::from(&Palette99::pick(index).to_rgba());

        chart
            .draw_series(LineSeries::new(errors.iter().copied().enumerate(), style))?
            .label(format!("{activation:?}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
