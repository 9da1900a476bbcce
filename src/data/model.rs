//! Compartmental model parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Parameters of a multi-compartment pharmacokinetic model.
///
/// The model consists of one central compartment with volume `vc` and
/// clearance `cl`, plus zero or more peripheral compartments. Each
/// peripheral compartment `i` exchanges mass with the central compartment
/// at transfer rate `qps[i]` and has volume `vps[i]`.
///
/// Construction does not validate; [`solve`](crate::simulator::solve)
/// checks the parameters before integration starts, and callers that want
/// to fail earlier can call [`Model::validate`] themselves.
///
/// # Example
///
/// ```
/// use pksol::Model;
///
/// let model = Model::builder()
///     .volume_central(2.0)
///     .clearance(1.0)
///     .peripheral(1.0, 1.0)
///     .peripheral(0.5, 2.0)
///     .build();
///
/// assert_eq!(model.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    vc: f64,
    cl: f64,
    qps: Vec<f64>,
    vps: Vec<f64>,
}

impl Model {
    /// Create a model from raw parameter arrays.
    ///
    /// `qps` and `vps` must have equal length; this is only checked by
    /// [`Model::validate`], not here.
    pub fn new(vc: f64, cl: f64, qps: Vec<f64>, vps: Vec<f64>) -> Self {
        Self { vc, cl, qps, vps }
    }

    /// Create a [`ModelBuilder`].
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Volume of the central compartment.
    pub fn vc(&self) -> f64 {
        self.vc
    }

    /// Clearance rate from the central compartment.
    pub fn cl(&self) -> f64 {
        self.cl
    }

    /// Transfer rates of the peripheral compartments.
    pub fn qps(&self) -> &[f64] {
        &self.qps
    }

    /// Volumes of the peripheral compartments.
    pub fn vps(&self) -> &[f64] {
        &self.vps
    }

    /// Total number of compartments (central + peripherals).
    pub fn size(&self) -> usize {
        1 + self.qps.len()
    }

    /// Number of peripheral compartments.
    pub fn n_peripherals(&self) -> usize {
        self.qps.len()
    }

    /// Check the model parameters for consistency.
    ///
    /// Returns the first violation found: non-positive or non-finite
    /// volumes, negative transfer rates or clearance, or peripheral arrays
    /// of unequal length.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.vc > 0.0) || !self.vc.is_finite() {
            return Err(ConfigurationError::InvalidCentralVolume(self.vc));
        }
        if !(self.cl >= 0.0) || !self.cl.is_finite() {
            return Err(ConfigurationError::InvalidClearance(self.cl));
        }
        if self.qps.len() != self.vps.len() {
            return Err(ConfigurationError::PeripheralMismatch {
                qps: self.qps.len(),
                vps: self.vps.len(),
            });
        }
        for (index, &value) in self.qps.iter().enumerate() {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigurationError::InvalidTransferRate { index, value });
            }
        }
        for (index, &value) in self.vps.iter().enumerate() {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigurationError::InvalidPeripheralVolume { index, value });
            }
        }
        Ok(())
    }
}

/// Builder for [`Model`].
///
/// Peripheral compartments are appended with [`ModelBuilder::peripheral`],
/// which pushes to both parameter arrays in lockstep, so built models
/// cannot have mismatched peripheral arrays.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    vc: f64,
    cl: f64,
    qps: Vec<f64>,
    vps: Vec<f64>,
}

impl ModelBuilder {
    /// Set the central compartment volume.
    pub fn volume_central(mut self, vc: f64) -> Self {
        self.vc = vc;
        self
    }

    /// Set the clearance rate.
    pub fn clearance(mut self, cl: f64) -> Self {
        self.cl = cl;
        self
    }

    /// Append a peripheral compartment with transfer rate `q` and volume `v`.
    pub fn peripheral(mut self, q: f64, v: f64) -> Self {
        self.qps.push(q);
        self.vps.push(v);
        self
    }

    /// Build the [`Model`].
    pub fn build(self) -> Model {
        Model {
            vc: self.vc,
            cl: self.cl,
            qps: self.qps,
            vps: self.vps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_peripherals_in_lockstep() {
        let model = Model::builder()
            .volume_central(2.0)
            .clearance(0.5)
            .peripheral(1.0, 1.0)
            .peripheral(0.5, 2.0)
            .build();

        assert_eq!(model.size(), 3);
        assert_eq!(model.n_peripherals(), 2);
        assert_eq!(model.qps(), &[1.0, 0.5]);
        assert_eq!(model.vps(), &[1.0, 2.0]);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn central_only_model_is_valid() {
        let model = Model::new(1.0, 0.0, vec![], vec![]);
        assert_eq!(model.size(), 1);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn zero_central_volume_is_rejected() {
        let model = Model::new(0.0, 1.0, vec![], vec![]);
        assert_eq!(
            model.validate(),
            Err(ConfigurationError::InvalidCentralVolume(0.0))
        );
    }

    #[test]
    fn negative_clearance_is_rejected() {
        let model = Model::new(1.0, -0.1, vec![], vec![]);
        assert_eq!(
            model.validate(),
            Err(ConfigurationError::InvalidClearance(-0.1))
        );
    }

    #[test]
    fn mismatched_peripheral_arrays_are_rejected() {
        let model = Model::new(1.0, 1.0, vec![1.0, 2.0], vec![1.0]);
        assert_eq!(
            model.validate(),
            Err(ConfigurationError::PeripheralMismatch { qps: 2, vps: 1 })
        );
    }

    #[test]
    fn non_positive_peripheral_volume_is_rejected() {
        let model = Model::new(1.0, 1.0, vec![1.0], vec![0.0]);
        assert_eq!(
            model.validate(),
            Err(ConfigurationError::InvalidPeripheralVolume {
                index: 0,
                value: 0.0
            })
        );
    }

    #[test]
    fn nan_transfer_rate_is_rejected() {
        let model = Model::new(1.0, 1.0, vec![f64::NAN], vec![1.0]);
        assert!(matches!(
            model.validate(),
            Err(ConfigurationError::InvalidTransferRate { index: 0, .. })
        ));
    }

    #[test]
    fn model_serializes_round_trip() {
        let model = Model::new(2.0, 1.0, vec![1.0], vec![3.0]);
        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
