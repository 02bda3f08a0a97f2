//! plot.rs — Box-plot rendering of the fitness distribution per harmonic.
//!
//! One box per harmonic label with every individual trial overlaid, on a
//! dark background. Rendering is the only side effect here; all statistics
//! come precomputed from `harmonics`.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::harmonics::{TrialRecord, fitness_by_harmonic};

const BG: RGBColor = RGBColor(17, 17, 17);
const FG: RGBColor = RGBColor(235, 235, 245);
const GRID: RGBColor = RGBColor(70, 70, 82);
const BOX: RGBColor = RGBColor(99, 110, 250);
const POINT: RGBColor = RGBColor(255, 161, 90);

/// Render the box plot to `out_path`. A call with no records is a no-op;
/// the caller decides whether that deserves a warning.
pub fn render_fitness_boxplot(
    out_path: &Path,
    records: &[TrialRecord],
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    let groups = fitness_by_harmonic(records);
    if groups.is_empty() {
        return Ok(());
    }

    let labels: Vec<i32> = groups.iter().map(|(n, _)| *n as i32).collect();

    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for (_, values) in &groups {
        for &v in values {
            y_min = y_min.min(v as f32);
            y_max = y_max.max(v as f32);
        }
    }
    if y_min >= y_max {
        y_min -= 0.5;
        y_max += 0.5;
    }
    let pad = 0.05 * (y_max - y_min);

    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    root.fill(&BG)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Distribución del Fitness por Armónico",
            ("sans-serif", 26).into_font().color(&FG),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(labels[..].into_segmented(), (y_min - pad)..(y_max + pad))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(GRID.mix(0.4))
        .light_line_style(TRANSPARENT)
        .axis_style(GRID)
        .label_style(("sans-serif", 16).into_font().color(&FG))
        .x_desc("Armónico (N)")
        .y_desc("Fitness de los Universos Viables")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::Exact(n) | SegmentValue::CenterOf(n) => n.to_string(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    for (label, (_, values)) in labels.iter().zip(&groups) {
        let samples: Vec<f32> = values.iter().map(|&v| v as f32).collect();
        let quartiles = Quartiles::new(&samples);
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
                .width(26)
                .whisker_width(0.5)
                .style(BOX),
        ))?;
        chart.draw_series(samples.iter().map(|&y| {
            Circle::new(
                (SegmentValue::CenterOf(label), y),
                3,
                POINT.mix(0.5).filled(),
            )
        }))?;
    }

    root.present()?;
    Ok(())
}
