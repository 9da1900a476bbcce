//! Regimen-specific right-hand-side kernels.
//!
//! The kernel for a solve is selected once from the protocol route before
//! the integrator is constructed, so the hot loop never branches on a
//! stored regimen flag.

use crate::data::{Model, Protocol, Route};
use crate::simulator::V;

/// Pure right-hand side of the compartmental flux equations.
///
/// State layout per variant:
/// - `Intravenous`: `[central, peripheral_1, …]`, length `model.size()`.
/// - `Subcutaneous`: `[depot, central, peripheral_1, …]`, length
///   `model.size() + 1`.
#[derive(Debug, Clone)]
pub enum FluxKernel {
    Intravenous(Model),
    Subcutaneous { model: Model, ka: f64 },
}

impl FluxKernel {
    /// Bind the kernel variant for `protocol`'s route.
    pub fn new(model: &Model, protocol: &Protocol) -> Self {
        match protocol.route() {
            Route::Intravenous => FluxKernel::Intravenous(model.clone()),
            Route::Subcutaneous { ka } => FluxKernel::Subcutaneous {
                model: model.clone(),
                ka,
            },
        }
    }

    /// Length of the state vector this kernel operates on.
    pub fn nstates(&self) -> usize {
        match self {
            FluxKernel::Intravenous(model) => model.size(),
            FluxKernel::Subcutaneous { model, .. } => model.size() + 1,
        }
    }

    /// Evaluate the derivative of `x` under dose forcing `dose_rate`,
    /// writing into the preallocated buffer `dx`.
    ///
    /// `x` and `dx` must both have length [`nstates`](Self::nstates).
    /// Pure: no allocation, no mutation of the model parameters.
    pub fn eval(&self, x: &V, dose_rate: f64, dx: &mut V) {
        match self {
            FluxKernel::Intravenous(model) => {
                let vc = model.vc();
                let cleared = x[0] / vc * model.cl();
                let mut flux_sum = 0.0;
                for (i, (&q, &v)) in model.qps().iter().zip(model.vps()).enumerate() {
                    let flux = q * (x[0] / vc - x[i + 1] / v);
                    dx[i + 1] = flux;
                    flux_sum += flux;
                }
                dx[0] = dose_rate - cleared - flux_sum;
            }
            FluxKernel::Subcutaneous { model, ka } => {
                let vc = model.vc();
                dx[0] = dose_rate - ka * x[0];
                let cleared = x[1] / vc * model.cl();
                let mut flux_sum = 0.0;
                // peripheral pools sit one slot further out, after the depot
                for (i, (&q, &v)) in model.qps().iter().zip(model.vps()).enumerate() {
                    let flux = q * (x[1] / vc - x[i + 2] / v);
                    dx[i + 2] = flux;
                    flux_sum += flux;
                }
                dx[1] = ka * x[0] - cleared - flux_sum;
            }
        }
    }
}
