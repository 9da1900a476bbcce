//! Intravenous dosing of a three-compartment model, printed as CSV.

use pksol::{solve, Model, PkError, Protocol, DEFAULT_NSTEPS, DEFAULT_TMAX};

fn main() -> Result<(), PkError> {
    let model = Model::builder()
        .volume_central(1.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .peripheral(0.5, 2.0)
        .build();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, DEFAULT_TMAX, DEFAULT_NSTEPS)?;
    trajectory.write_csv(std::io::stdout())?;
    Ok(())
}
