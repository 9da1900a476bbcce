//! Static chart rendering for solved trajectories.
//!
//! The solve path returns data only; this layer consumes an immutable
//! [`Trajectory`] and renders it to a PNG file. It cannot run a solve
//! itself, and a failed solve produces no trajectory to plot.

use plotters::prelude::*;

use crate::error::PkError;
use crate::simulator::Trajectory;

const X_LABEL: &str = "time [h]";
const Y_LABEL: &str = "drug mass [ng]";

fn series_color(idx: usize) -> RGBColor {
    const PALETTE: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];
    PALETTE[idx % PALETTE.len()]
}

fn axis_ranges(trajectory: &Trajectory) -> (f64, f64) {
    let max_time = trajectory.last().map(|s| s.time()).unwrap_or(1.0);
    let max_mass = trajectory
        .samples()
        .iter()
        .flat_map(|s| s.state().iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if max_mass > 0.0 { max_mass * 1.1 } else { 1.0 };
    (max_time, y_max)
}

/// Render all compartments into one combined chart.
pub fn plot_trajectory(trajectory: &Trajectory, path: &str) -> Result<(), PkError> {
    let (max_time, y_max) = axis_ranges(trajectory);
    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Drug mass per compartment", ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_time, 0.0..y_max)
        .map_err(to_plot_error)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(to_plot_error)?;

    for (idx, label) in trajectory.labels().iter().enumerate() {
        let color = series_color(idx);
        let series = trajectory.compartment(idx).unwrap_or_default();
        chart
            .draw_series(LineSeries::new(
                trajectory
                    .samples()
                    .iter()
                    .map(|s| s.time())
                    .zip(series)
                    .map(|(t, q)| (t, q)),
                color.stroke_width(2),
            ))
            .map_err(to_plot_error)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_plot_error)?;

    root.present().map_err(to_plot_error)?;
    Ok(())
}

/// Render one panel per compartment, side by side.
pub fn plot_trajectory_grid(trajectory: &Trajectory, path: &str) -> Result<(), PkError> {
    let n = trajectory.ncompartments();
    if n == 0 {
        return Ok(());
    }
    let (max_time, y_max) = axis_ranges(trajectory);
    let root = BitMapBackend::new(path, (400 * n as u32, 300)).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_error)?;

    let panels = root.split_evenly((1, n));
    for (idx, panel) in panels.iter().enumerate() {
        let label = &trajectory.labels()[idx];
        let series = trajectory.compartment(idx).unwrap_or_default();
        let color = series_color(idx);

        let mut chart = ChartBuilder::on(panel)
            .caption(label, ("sans-serif", 20.0).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..max_time, 0.0..y_max)
            .map_err(to_plot_error)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()
            .map_err(to_plot_error)?;

        chart
            .draw_series(LineSeries::new(
                trajectory
                    .samples()
                    .iter()
                    .map(|s| s.time())
                    .zip(series)
                    .map(|(t, q)| (t, q)),
                color.stroke_width(2),
            ))
            .map_err(to_plot_error)?;
    }

    root.present().map_err(to_plot_error)?;
    Ok(())
}

fn to_plot_error<E: std::fmt::Display>(err: E) -> PkError {
    PkError::Plot(err.to_string())
}
