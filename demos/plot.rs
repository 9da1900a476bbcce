//! Render a solved trajectory as a combined chart and as one panel per
//! compartment. Requires the `plot` feature.

use pksol::plot::{plot_trajectory, plot_trajectory_grid};
use pksol::{solve, Model, PkError, Protocol, DEFAULT_NSTEPS, DEFAULT_TMAX};

fn main() -> Result<(), PkError> {
    let model = Model::builder()
        .volume_central(1.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .peripheral(0.5, 2.0)
        .build();
    let protocol = Protocol::subcutaneous(|t| if t < 0.5 { 2.0 } else { 0.0 }, 1.0);

    let trajectory = solve(&model, &protocol, DEFAULT_TMAX, DEFAULT_NSTEPS)?;
    plot_trajectory(&trajectory, "trajectory.png")?;
    plot_trajectory_grid(&trajectory, "trajectory_grid.png")?;
    println!("wrote trajectory.png and trajectory_grid.png");
    Ok(())
}
