//! Dosing protocol parameters.

use crate::error::ConfigurationError;

/// Dose rate as a function of time, in mass per unit time.
///
/// The function must be defined (and non-negative) over the whole
/// evaluation interval of a solve; the integrator evaluates it at
/// intermediate times between grid points.
pub type DoseFn = fn(f64) -> f64;

/// Administration route of the dosing regimen.
///
/// Subcutaneous dosing carries its absorption rate constant, so a
/// subcutaneous protocol without `k_a` is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    /// Dosing directly into the central compartment.
    Intravenous,
    /// Dosing into a depot that drains into the central compartment with
    /// first-order rate `ka`.
    Subcutaneous { ka: f64 },
}

/// A dosing regimen: a dose-rate function of time and the administration
/// route.
///
/// # Example
///
/// ```
/// use pksol::Protocol;
///
/// let iv = Protocol::intravenous(|_t| 1.0);
/// let sc = Protocol::subcutaneous(|t| if t < 0.5 { 1.0 } else { 0.0 }, 2.0);
///
/// assert_eq!(iv.dose_rate(0.3), 1.0);
/// assert_eq!(sc.dose_rate(0.7), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Protocol {
    dose: DoseFn,
    route: Route,
}

impl Protocol {
    /// Intravenous protocol with the given dose-rate function.
    pub fn intravenous(dose: DoseFn) -> Self {
        Self {
            dose,
            route: Route::Intravenous,
        }
    }

    /// Subcutaneous protocol with the given dose-rate function and
    /// absorption rate constant.
    pub fn subcutaneous(dose: DoseFn, ka: f64) -> Self {
        Self {
            dose,
            route: Route::Subcutaneous { ka },
        }
    }

    /// The dose-rate function.
    pub fn dose(&self) -> DoseFn {
        self.dose
    }

    /// Evaluate the dose rate at time `t`.
    pub fn dose_rate(&self, t: f64) -> f64 {
        (self.dose)(t)
    }

    /// The administration route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Number of state pools for a model with `size` compartments under
    /// this route. Subcutaneous dosing adds one leading depot pool.
    pub fn nstates(&self, size: usize) -> usize {
        match self.route {
            Route::Intravenous => size,
            Route::Subcutaneous { .. } => size + 1,
        }
    }

    /// Compartment labels matching the state layout for a model with
    /// `size` compartments.
    pub fn state_labels(&self, size: usize) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.nstates(size));
        if let Route::Subcutaneous { .. } = self.route {
            labels.push("depot".to_string());
        }
        labels.push("central".to_string());
        for i in 1..size {
            labels.push(format!("peripheral_{}", i));
        }
        labels
    }

    /// Check the route parameters for consistency.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Route::Subcutaneous { ka } = self.route {
            if !(ka > 0.0) || !ka.is_finite() {
                return Err(ConfigurationError::InvalidAbsorptionRate(ka));
            }
        }
        Ok(())
    }
}
