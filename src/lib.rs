//! Simulation of drug mass transfer through multi-compartment
//! pharmacokinetic models.
//!
//! A [`Model`] holds the compartment parameters (central volume,
//! clearance, and transfer rate/volume pairs for any number of peripheral
//! compartments), a [`Protocol`] holds the dosing regimen (a dose-rate
//! function of time plus the administration route), and [`solve`] drives
//! an adaptive ODE integrator over a fixed evaluation grid to produce a
//! [`Trajectory`] of drug amounts per compartment.
//!
//! ```
//! use pksol::{solve, Model, Protocol, DEFAULT_NSTEPS, DEFAULT_TMAX};
//!
//! let model = Model::builder()
//!     .volume_central(1.0)
//!     .clearance(1.0)
//!     .peripheral(1.0, 1.0)
//!     .build();
//! let protocol = Protocol::subcutaneous(|_t| 1.0, 1.0);
//!
//! let trajectory = solve(&model, &protocol, DEFAULT_TMAX, DEFAULT_NSTEPS).unwrap();
//! assert_eq!(trajectory.labels(), ["depot", "central", "peripheral_1"]);
//! ```

pub mod data;
pub mod error;
#[cfg(feature = "plot")]
pub mod plot;
pub mod simulator;

pub use data::{DoseFn, Model, ModelBuilder, Protocol, Route};
pub use error::{ConfigurationError, IntegrationFailure, PkError};
pub use simulator::{solve, Sample, Trajectory, DEFAULT_NSTEPS, DEFAULT_TMAX};

pub mod prelude {
    pub use crate::data::{DoseFn, Model, ModelBuilder, Protocol, Route};
    pub use crate::error::{ConfigurationError, IntegrationFailure, PkError};
    pub use crate::simulator::{solve, Sample, Trajectory, DEFAULT_NSTEPS, DEFAULT_TMAX};
}
