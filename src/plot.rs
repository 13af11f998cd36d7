//! Chart rendering for a sampled [`Trajectory`].
//!
//! Nothing in [`crate::core`] depends on this module; it only reads the
//! coordinate sequences.

use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::ballistics::Trajectory;
use crate::core::window::axis_ranges;
use crate::error::PlotError;

pub const CHART_TITLE: &str = "Projectile Motion Simulation";
pub const X_AXIS_LABEL: &str = "Horizontal Distance (m)";
pub const Y_AXIS_LABEL: &str = "Vertical Distance (m)";

const NO_FINITE_EXTENT: &str = "trajectory has no finite extent";

pub const DEFAULT_WIDTH_PX: u32 = 800;
pub const DEFAULT_HEIGHT_PX: u32 = 600;

#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub output: PathBuf,
    pub launch_angle_deg: f64,
    pub width_px: u32,
    pub height_px: u32,
}

impl PlotOptions {
    pub fn new(output: impl Into<PathBuf>, launch_angle_deg: f64) -> Self {
        Self {
            output: output.into(),
            launch_angle_deg,
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
        }
    }
}

pub fn legend_label(launch_angle_deg: f64) -> String {
    format!("Launch Angle: {launch_angle_deg}°")
}

/// `trajectory_YYYYmmdd_HHMMSS.png`, stamped with `now`.
pub fn default_output_path<Tz>(now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("trajectory_{}.png", now.format("%Y%m%d_%H%M%S")))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    launch_angle_deg: f64,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 26))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()?;

    let finite_points = trajectory
        .points()
        .filter(|(x, y)| x.is_finite() && y.is_finite());
    chart
        .draw_series(LineSeries::new(finite_points, &BLUE))?
        .label(legend_label(launch_angle_deg))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
}

fn render_error(err: impl std::fmt::Display) -> PlotError {
    PlotError::Render(err.to_string())
}

fn chart_window(trajectory: &Trajectory) -> Result<(Range<f64>, Range<f64>), PlotError> {
    axis_ranges(trajectory).ok_or_else(|| PlotError::Render(NO_FINITE_EXTENT.to_string()))
}

/// Draws the titled, gridded line chart onto any `plotters` backend.
pub fn draw_trajectory<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    launch_angle_deg: f64,
) -> Result<(), PlotError> {
    let (x_range, y_range) = chart_window(trajectory)?;
    draw_chart(root, trajectory, launch_angle_deg, x_range, y_range).map_err(render_error)
}

/// Writes the chart to `options.output`; `.svg` selects the SVG backend, anything else PNG.
pub fn render_trajectory(trajectory: &Trajectory, options: &PlotOptions) -> Result<(), PlotError> {
    let (x_range, y_range) = chart_window(trajectory)?;
    let size = (options.width_px, options.height_px);
    let angle = options.launch_angle_deg;
    if is_svg(&options.output) {
        let root = SVGBackend::new(&options.output, size).into_drawing_area();
        draw_chart(&root, trajectory, angle, x_range, y_range).map_err(render_error)?;
    } else {
        let root = BitMapBackend::new(&options.output, size).into_drawing_area();
        draw_chart(&root, trajectory, angle, x_range, y_range).map_err(render_error)?;
    }

    info!(
        path = %options.output.display(),
        samples = trajectory.len(),
        "wrote trajectory chart"
    );
    Ok(())
}
