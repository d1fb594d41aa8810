use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

/// Styling options shared by all chart kinds.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Title displayed at the top of the chart.
    pub title: String,

    /// Label for the X axis (ignored by the pie renderer).
    pub x_label: String,

    /// Label for the Y axis (ignored by the pie renderer).
    pub y_label: String,

    /// Fragment width in pixels.
    pub width: u32,

    /// Fragment height in pixels.
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            x_label: String::new(),
            y_label: String::new(),
            width: 640,
            height: 420,
        }
    }
}

impl ChartOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Rendering failure surfaced by the drawing backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("chart rendering failed: {0}")]
pub struct ChartError(String);

// Backend error types borrow the drawing surface; flatten to a message at
// this boundary.
fn backend_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError(e.to_string())
}

/// Line chart over a date series, e.g. a sales trend.
pub fn line_chart(
    options: &ChartOptions,
    series: &[(NaiveDate, f64)],
) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        if series.is_empty() {
            draw_empty_frame(&root, options)?;
        } else {
            let mut first = series[0].0;
            let mut last = series[0].0;
            for (date, _) in series {
                first = first.min(*date);
                last = last.max(*date);
            }
            // A single-date series still needs a non-empty axis range.
            let end = if last > first {
                last
            } else {
                first.succ_opt().unwrap_or(first)
            };

            let mut chart = ChartBuilder::on(&root)
                .caption(&options.title, ("sans-serif", 24).into_font())
                .margin(10)
                .x_label_area_size(32)
                .y_label_area_size(48)
                .build_cartesian_2d(first..end, 0f64..y_axis_end(series.iter().map(|(_, v)| *v)))
                .map_err(backend_err)?;

            chart
                .configure_mesh()
                .x_desc(&options.x_label)
                .y_desc(&options.y_label)
                .x_labels(series.len().min(8))
                .draw()
                .map_err(backend_err)?;

            chart
                .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
                .map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
    }

    Ok(svg)
}

/// Vertical bar chart over labeled categories, e.g. units sold per product.
pub fn bar_chart(options: &ChartOptions, series: &[(String, f64)]) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        if series.is_empty() {
            draw_empty_frame(&root, options)?;
        } else {
            let mut chart = ChartBuilder::on(&root)
                .caption(&options.title, ("sans-serif", 24).into_font())
                .margin(10)
                .x_label_area_size(32)
                .y_label_area_size(48)
                .build_cartesian_2d(
                    (0..series.len()).into_segmented(),
                    0f64..y_axis_end(series.iter().map(|(_, v)| *v)),
                )
                .map_err(backend_err)?;

            chart
                .configure_mesh()
                .x_desc(&options.x_label)
                .y_desc(&options.y_label)
                .x_labels(series.len().min(12))
                .x_label_formatter(&|segment| match segment {
                    SegmentValue::CenterOf(i) => series
                        .get(*i)
                        .map(|(name, _)| name.clone())
                        .unwrap_or_default(),
                    _ => String::new(),
                })
                .disable_x_mesh()
                .draw()
                .map_err(backend_err)?;

            chart
                .draw_series(series.iter().enumerate().map(|(i, (_, value))| {
                    Rectangle::new(
                        [
                            (SegmentValue::Exact(i), 0.0),
                            (SegmentValue::Exact(i + 1), *value),
                        ],
                        BLUE.filled(),
                    )
                }))
                .map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
    }

    Ok(svg)
}

/// Proportional (pie) chart over labeled categories, e.g. stock share.
pub fn pie_chart(options: &ChartOptions, series: &[(String, f64)]) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        let total: f64 = series.iter().map(|(_, v)| *v).sum();
        if series.is_empty() || total <= 0.0 {
            // Nothing to apportion; render the titled empty frame.
            draw_empty_frame(&root, options)?;
        } else {
            let inner = root
                .titled(&options.title, ("sans-serif", 24).into_font())
                .map_err(backend_err)?;

            let (width, height) = inner.dim_in_pixel();
            let center = (width as i32 / 2, height as i32 / 2);
            let radius = f64::from(width.min(height)) * 0.35;

            let sizes: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
            let labels: Vec<String> = series.iter().map(|(name, _)| name.clone()).collect();
            let colors: Vec<RGBColor> = (0..series.len()).map(wheel_color).collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.label_style(("sans-serif", 16).into_font());
            pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
            inner.draw(&pie).map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
    }

    Ok(svg)
}

fn draw_empty_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    root.titled(&options.title, ("sans-serif", 24).into_font())
        .map_err(backend_err)?;
    Ok(())
}

// Upper axis bound with headroom; all-zero series still get a visible axis.
fn y_axis_end(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

fn wheel_color(idx: usize) -> RGBColor {
    const WHEEL: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, YELLOW];
    WHEEL[idx % WHEEL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn line_chart_produces_svg_markup() {
        let series = vec![(date("2024-03-01"), 50.0), (date("2024-03-02"), 5.0)];
        let svg = line_chart(&ChartOptions::titled("Sales Trend"), &series).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Sales Trend"));
    }

    #[test]
    fn line_chart_handles_single_point() {
        let series = vec![(date("2024-03-01"), 50.0)];
        let svg = line_chart(&ChartOptions::titled("Sales Trend"), &series).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn bar_chart_produces_svg_markup() {
        let series = vec![("B".to_string(), 1.0), ("A".to_string(), 5.0)];
        let svg = bar_chart(&ChartOptions::titled("Best Performing Product"), &series).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn pie_chart_produces_svg_markup() {
        let series = vec![("A".to_string(), 6.0), ("B".to_string(), 9.0)];
        let svg = pie_chart(&ChartOptions::titled("Most Product In Stock"), &series).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn empty_series_render_titled_frames() {
        let opts = ChartOptions::titled("Empty");
        assert!(line_chart(&opts, &[]).unwrap().contains("<svg"));
        assert!(bar_chart(&opts, &[]).unwrap().contains("<svg"));
        assert!(pie_chart(&opts, &[]).unwrap().contains("<svg"));
    }

    #[test]
    fn zero_total_pie_does_not_fail() {
        let series = vec![("A".to_string(), 0.0), ("B".to_string(), 0.0)];
        let svg = pie_chart(&ChartOptions::titled("Most Product In Stock"), &series).unwrap();
        assert!(svg.contains("<svg"));
    }
}
