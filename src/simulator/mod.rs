//! The solve entry point: regimen selection, evaluation grid, and the
//! ODE integration that produces a [`Trajectory`].

pub mod flux;
mod ode;
mod trajectory;

pub use flux::FluxKernel;
pub use trajectory::{Sample, Trajectory};

use crate::data::{Model, Protocol};
use crate::error::{ConfigurationError, PkError};

pub(crate) type T = f64;
pub(crate) type V = nalgebra::DVector<T>;
pub(crate) type M = nalgebra::DMatrix<T>;

/// Default end of the evaluation interval.
pub const DEFAULT_TMAX: f64 = 1.0;
/// Default number of evaluation grid points.
pub const DEFAULT_NSTEPS: usize = 1000;

/// Simulate the model under `protocol` over `[0, tmax]`, reporting the
/// state at `nsteps` equally spaced times.
///
/// The initial state is zero in every pool. The state layout follows the
/// route: intravenous solves have `model.size()` pools starting with the
/// central compartment; subcutaneous solves prepend a depot pool.
///
/// # Errors
///
/// [`ConfigurationError`] if the model, protocol, or grid parameters are
/// invalid; all parameters are checked before any integrator work starts.
/// [`IntegrationFailure`](crate::error::IntegrationFailure) if the
/// integrator cannot produce a solution within its tolerances; no partial
/// trajectory is returned.
///
/// # Example
///
/// ```
/// use pksol::{solve, Model, Protocol};
///
/// let model = Model::builder()
///     .volume_central(1.0)
///     .clearance(1.0)
///     .peripheral(1.0, 1.0)
///     .build();
/// let protocol = Protocol::intravenous(|_t| 1.0);
///
/// let trajectory = solve(&model, &protocol, 1.0, 100).unwrap();
/// assert_eq!(trajectory.len(), 100);
/// assert_eq!(trajectory.labels(), ["central", "peripheral_1"]);
/// ```
pub fn solve(
    model: &Model,
    protocol: &Protocol,
    tmax: f64,
    nsteps: usize,
) -> Result<Trajectory, PkError> {
    model.validate()?;
    protocol.validate()?;
    if !(tmax > 0.0) || !tmax.is_finite() {
        return Err(ConfigurationError::InvalidTmax(tmax).into());
    }
    if nsteps < 2 {
        return Err(ConfigurationError::InvalidSteps(nsteps).into());
    }

    let grid = time_grid(tmax, nsteps);
    let kernel = FluxKernel::new(model, protocol);
    tracing::debug!(tmax, nsteps, route = ?protocol.route(), "starting solve");

    let states = ode::integrate(kernel, protocol, &grid).map_err(|err| {
        tracing::error!(%err, "integration failed");
        err
    })?;

    tracing::debug!(points = states.len(), "solve complete");
    Ok(Trajectory::new(
        protocol.state_labels(model.size()),
        grid,
        states,
    ))
}

/// `nsteps` equally spaced times from 0 to `tmax`, endpoints exact.
fn time_grid(tmax: f64, nsteps: usize) -> Vec<f64> {
    let dt = tmax / (nsteps - 1) as f64;
    let mut grid: Vec<f64> = (0..nsteps).map(|i| i as f64 * dt).collect();
    grid[nsteps - 1] = tmax;
    grid
}
