use thiserror::Error;

/// Invalid or inconsistent input parameters, detected before any
/// integration work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("central volume must be positive and finite, got {0}")]
    InvalidCentralVolume(f64),
    #[error("clearance must be non-negative and finite, got {0}")]
    InvalidClearance(f64),
    #[error("transfer rate Q_p{index} must be non-negative and finite, got {value}")]
    InvalidTransferRate { index: usize, value: f64 },
    #[error("peripheral volume V_p{index} must be positive and finite, got {value}")]
    InvalidPeripheralVolume { index: usize, value: f64 },
    #[error("peripheral arrays must have equal length, got {qps} transfer rates and {vps} volumes")]
    PeripheralMismatch { qps: usize, vps: usize },
    #[error("absorption rate k_a must be positive and finite, got {0}")]
    InvalidAbsorptionRate(f64),
    #[error("tmax must be positive and finite, got {0}")]
    InvalidTmax(f64),
    #[error("nsteps must be at least 2, got {0}")]
    InvalidSteps(usize),
}

/// The numerical integrator could not produce a solution within its error
/// tolerances and step budget. A failed solve returns no partial trajectory.
#[derive(Error, Debug)]
pub enum IntegrationFailure {
    #[error("the step size of the ODE solver went to zero near t = {time}; one of the model parameters is getting very close to 0.0 or infinite")]
    StepSizeTooSmall { time: f64 },
    #[error("integrator produced a non-finite state at t = {time}")]
    NonFiniteState { time: f64 },
    #[error(transparent)]
    Solver(#[from] diffsol::error::DiffsolError),
}

#[derive(Error, Debug)]
pub enum PkError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Integration(#[from] IntegrationFailure),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "plot")]
    #[error("plot error: {0}")]
    Plot(String),
}
