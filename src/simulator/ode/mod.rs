mod closure;

use diffsol::{
    error::{DiffsolError, OdeSolverError},
    ode_solver::method::OdeSolverMethod,
    OdeBuilder, OdeSolverStopReason,
};

use crate::data::Protocol;
use crate::error::IntegrationFailure;
use crate::simulator::flux::FluxKernel;
use crate::simulator::{M, V};
use closure::PkProblem;

const RTOL: f64 = 1e-6;
const ATOL: f64 = 1e-8;

/// Integrate `kernel` over `grid` from a zero initial state, returning
/// one state snapshot per grid point.
///
/// The solver is stopped exactly on every grid time, so the reported
/// states land on the requested grid rather than on interpolated
/// internal steps. `grid` must be strictly increasing with at least two
/// points; the caller validates this.
pub(crate) fn integrate(
    kernel: FluxKernel,
    protocol: &Protocol,
    grid: &[f64],
) -> Result<Vec<Vec<f64>>, IntegrationFailure> {
    let nstates = kernel.nstates();
    let problem = OdeBuilder::<M>::new()
        .atol(vec![ATOL; nstates])
        .rtol(RTOL)
        .t0(grid[0])
        .h0(1e-3)
        .build_from_eqn(PkProblem::new(kernel, *protocol, V::zeros(nstates)))?;

    let mut solver = problem.bdf::<diffsol::NalgebraLU<f64>>()?;

    let mut states = Vec::with_capacity(grid.len());
    states.push(snapshot(solver.state().y, grid[0])?);

    for &t in &grid[1..] {
        match solver.set_stop_time(t) {
            Ok(()) => loop {
                match solver.step() {
                    Ok(OdeSolverStopReason::InternalTimestep) => continue,
                    Ok(OdeSolverStopReason::TstopReached) => break,
                    Ok(reason) => {
                        // no root function is registered on the problem
                        unreachable!("unexpected solver stop reason: {:?}", reason)
                    }
                    Err(DiffsolError::OdeSolverError(OdeSolverError::StepSizeTooSmall {
                        ..
                    })) => {
                        return Err(IntegrationFailure::StepSizeTooSmall { time: t });
                    }
                    Err(err) => return Err(IntegrationFailure::Solver(err)),
                }
            },
            Err(DiffsolError::OdeSolverError(OdeSolverError::StopTimeAtCurrentTime)) => {}
            Err(err) => return Err(IntegrationFailure::Solver(err)),
        }
        states.push(snapshot(solver.state().y, t)?);
    }

    Ok(states)
}

fn snapshot(y: &V, time: f64) -> Result<Vec<f64>, IntegrationFailure> {
    if y.iter().any(|v| !v.is_finite()) {
        return Err(IntegrationFailure::NonFiniteState { time });
    }
    Ok(y.as_slice().to_vec())
}
