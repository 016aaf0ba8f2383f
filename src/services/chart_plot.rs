use std::ops::Range;

use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::highlight::HighlightSelection;
use crate::domain::series::{ProjectionKind, SeriesPoint};
use crate::domain::settings::ChartSize;
use crate::services::processed_study_data::ProcessedStudyData;

#[derive(Error, Debug)]
pub enum ChartPlotError {
    #[error("failed to render {projection} chart: {message}")]
    Render {
        projection: &'static str,
        message: String,
    },
}

const OPTIVIS_COLOR: RGBColor = RGBColor(30, 122, 204);
const TRADITIONAL_COLOR: RGBColor = RGBColor(224, 108, 40);

/// Path of the PNG written for `kind` under `prefix`.
pub fn chart_path(prefix: &str, kind: ProjectionKind) -> String {
    format!("{prefix}.{}.png", kind.key())
}

/// Renders one PNG per highlight and returns the written paths.
pub fn write_chart_pngs(
    prefix: &str,
    data: &ProcessedStudyData,
    highlights: &[HighlightSelection],
    size: ChartSize,
) -> Result<Vec<String>, ChartPlotError> {
    highlights
        .iter()
        .map(|selection| -> Result<String, ChartPlotError> {
            let path = chart_path(prefix, selection.projection);
            render_chart_png(&path, data, selection, size)?;
            info!(path = %path, projection = selection.projection.key(), "chart written");
            Ok(path)
        })
        .collect()
}

/// Draws both series of one chart plus the highlighted markers. An empty
/// chart is still written, with a "No data" notice instead of axes.
pub fn render_chart_png(
    output_path: &str,
    data: &ProcessedStudyData,
    selection: &HighlightSelection,
    size: ChartSize,
) -> Result<(), ChartPlotError> {
    let kind = selection.projection;
    let pair = data.series(kind);

    let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(kind, e))?;

    let Some((x_range, y_range)) = axis_ranges(&pair.optivis, &pair.traditional) else {
        debug!(projection = kind.key(), "no data to plot");
        let style = TextStyle::from(("sans-serif", 28).into_font());
        root.draw_text(kind.title(), &style, (20, 20))
            .map_err(|e| render_error(kind, e))?;
        let center = (half_of(size.width).saturating_sub(50), half_of(size.height));
        root.draw_text("No data", &style, center)
            .map_err(|e| render_error(kind, e))?;
        root.present().map_err(|e| render_error(kind, e))?;
        return Ok(());
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(kind.title(), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_error(kind, e))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(kind.x_label())
        .y_desc(kind.y_label())
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| render_error(kind, e))?;

    for (label, series, color) in [
        ("OPTIVIS", &pair.optivis, OPTIVIS_COLOR),
        ("Traditional", &pair.traditional, TRADITIONAL_COLOR),
    ] {
        if series.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(
                series.iter().map(|point| (point.x, point.y)),
                color.stroke_width(2),
            ))
            .map_err(|e| render_error(kind, e))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(
                series
                    .iter()
                    .map(|point| Circle::new((point.x, point.y), 3, color.filled())),
            )
            .map_err(|e| render_error(kind, e))?;
    }

    let markers = [
        (selection.optivis, &pair.optivis, OPTIVIS_COLOR),
        (selection.traditional, &pair.traditional, TRADITIONAL_COLOR),
    ];
    for (index, series, color) in markers {
        if let Some(point) = index.and_then(|index| series.get(index)) {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (point.x, point.y),
                    9,
                    color.stroke_width(3),
                )))
                .map_err(|e| render_error(kind, e))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| render_error(kind, e))?;

    root.present().map_err(|e| render_error(kind, e))?;
    Ok(())
}

fn render_error(kind: ProjectionKind, error: impl std::fmt::Display) -> ChartPlotError {
    ChartPlotError::Render {
        projection: kind.key(),
        message: error.to_string(),
    }
}

/// Half of a pixel dimension as a backend coordinate, clamped to `i32::MAX`.
fn half_of(dimension: u32) -> i32 {
    i32::try_from(dimension / 2).unwrap_or(i32::MAX)
}

/// Padded axis ranges covering both series, `None` when there is nothing
/// to draw.
fn axis_ranges(
    optivis: &[SeriesPoint],
    traditional: &[SeriesPoint],
) -> Option<(Range<f64>, Range<f64>)> {
    let all: Vec<&SeriesPoint> = optivis.iter().chain(traditional.iter()).collect();
    if all.is_empty() {
        return None;
    }
    let x_range = padded_range(all.iter().map(|point| point.x));
    let y_range = padded_range(all.iter().map(|point| point.y));
    Some((x_range, y_range))
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    let span = max - min;
    let padding = if span < f64::EPSILON {
        min.abs().max(1.0) * 0.05
    } else {
        span * 0.05
    };
    (min - padding)..(max + padding)
}
