//! Subcutaneous dosing with a half-hour infusion pulse into the depot.

use pksol::{solve, Model, PkError, Protocol, DEFAULT_NSTEPS, DEFAULT_TMAX};

fn main() -> Result<(), PkError> {
    let model = Model::builder()
        .volume_central(1.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .build();
    let protocol = Protocol::subcutaneous(|t| if t < 0.5 { 2.0 } else { 0.0 }, 1.0);

    let trajectory = solve(&model, &protocol, DEFAULT_TMAX, DEFAULT_NSTEPS)?;

    for (label, idx) in trajectory.labels().iter().zip(0..) {
        println!("AUC {}: {:.4}", label, trajectory.auc(idx).unwrap_or(0.0));
    }
    if let Some(last) = trajectory.last() {
        println!("state at t = {}: {:?}", last.time(), last.state());
    }
    Ok(())
}
