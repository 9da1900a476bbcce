//! End-to-end properties of the solve entry point.

use approx::assert_relative_eq;
use pksol::{solve, ConfigurationError, Model, PkError, Protocol};

fn two_peripheral_model() -> Model {
    Model::builder()
        .volume_central(2.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .peripheral(0.5, 2.0)
        .build()
}

#[test]
fn zero_dose_trajectory_stays_at_zero() {
    let model = two_peripheral_model();
    for protocol in [
        Protocol::intravenous(|_t| 0.0),
        Protocol::subcutaneous(|_t| 0.0, 1.0),
    ] {
        let trajectory = solve(&model, &protocol, 1.0, 50).unwrap();
        for sample in trajectory.samples() {
            for &q in sample.state() {
                assert_relative_eq!(q, 0.0, epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn mass_is_conserved_without_clearance() {
    let model = Model::builder()
        .volume_central(2.0)
        .clearance(0.0)
        .peripheral(1.0, 1.0)
        .peripheral(0.5, 2.0)
        .build();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, 1.0, 101).unwrap();

    // flux only redistributes mass, so total mass equals the integrated
    // dose at every grid point
    for sample in trajectory.samples() {
        assert_relative_eq!(sample.total(), sample.time(), max_relative = 1e-4, epsilon = 1e-8);
    }
}

#[test]
fn depot_decays_once_dosing_stops() {
    let model = Model::builder()
        .volume_central(1.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .build();
    let protocol = Protocol::subcutaneous(|t| if t < 0.25 { 1.0 } else { 0.0 }, 2.0);

    let trajectory = solve(&model, &protocol, 1.0, 101).unwrap();
    let depot = trajectory.compartment(0).unwrap();
    let times = trajectory.times();

    let mut prev: Option<f64> = None;
    for (t, q) in times.iter().zip(&depot) {
        assert!(*q >= -1e-9, "depot went negative at t = {}", t);
        if *t >= 0.26 {
            if let Some(prev) = prev {
                assert!(
                    *q <= prev + 1e-9,
                    "depot increased after dosing stopped at t = {}",
                    t
                );
            }
            prev = Some(*q);
        }
    }
}

#[test]
fn identical_solves_are_identical() {
    let model = two_peripheral_model();
    let protocol = Protocol::subcutaneous(|_t| 1.0, 1.5);

    let first = solve(&model, &protocol, 1.0, 100).unwrap();
    let second = solve(&model, &protocol, 1.0, 100).unwrap();
    assert_eq!(first, second);
}

#[test]
fn two_step_solve_reports_only_the_endpoints() {
    let model = two_peripheral_model();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, 1.0, 2).unwrap();
    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory.times(), vec![0.0, 1.0]);
}

#[test]
fn grid_endpoints_are_exact_and_strictly_increasing() {
    let model = two_peripheral_model();
    let protocol = Protocol::intravenous(|_t| 0.5);

    let trajectory = solve(&model, &protocol, 2.5, 7).unwrap();
    let times = trajectory.times();
    assert_eq!(times.len(), 7);
    assert_eq!(times[0], 0.0);
    assert_eq!(times[6], 2.5);
    assert!(times.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn constant_dose_scenario_loses_mass_to_clearance() {
    let model = Model::builder()
        .volume_central(1.0)
        .clearance(1.0)
        .peripheral(1.0, 1.0)
        .build();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, 1.0, 2).unwrap();
    assert_eq!(trajectory.times(), vec![0.0, 1.0]);
    assert_eq!(trajectory.first().unwrap().state(), &[0.0, 0.0]);

    let last = trajectory.last().unwrap();
    for &q in last.state() {
        assert!(q.is_finite() && q >= 0.0);
    }
    // one unit of drug is delivered over [0, 1]; clearance must have
    // removed some of it
    assert!(last.amount(0).unwrap() < 1.0);
    assert!(last.total() < 1.0);
}

#[test]
fn invalid_central_volume_fails_before_integration() {
    let model = Model::new(0.0, 1.0, vec![], vec![]);
    let protocol = Protocol::intravenous(|_t| 1.0);

    let err = solve(&model, &protocol, 1.0, 10).unwrap_err();
    assert!(matches!(
        err,
        PkError::Configuration(ConfigurationError::InvalidCentralVolume(v)) if v == 0.0
    ));
}

#[test]
fn mismatched_peripheral_arrays_fail_before_integration() {
    let model = Model::new(1.0, 1.0, vec![1.0, 2.0], vec![1.0]);
    let protocol = Protocol::intravenous(|_t| 1.0);

    let err = solve(&model, &protocol, 1.0, 10).unwrap_err();
    assert!(matches!(
        err,
        PkError::Configuration(ConfigurationError::PeripheralMismatch { qps: 2, vps: 1 })
    ));
}

#[test]
fn invalid_grid_parameters_are_rejected() {
    let model = two_peripheral_model();
    let protocol = Protocol::intravenous(|_t| 1.0);

    assert!(matches!(
        solve(&model, &protocol, 0.0, 10).unwrap_err(),
        PkError::Configuration(ConfigurationError::InvalidTmax(_))
    ));
    assert!(matches!(
        solve(&model, &protocol, -1.0, 10).unwrap_err(),
        PkError::Configuration(ConfigurationError::InvalidTmax(_))
    ));
    assert!(matches!(
        solve(&model, &protocol, 1.0, 1).unwrap_err(),
        PkError::Configuration(ConfigurationError::InvalidSteps(1))
    ));
}

#[test]
fn missing_absorption_rate_is_a_configuration_error() {
    let model = two_peripheral_model();
    let protocol = Protocol::subcutaneous(|_t| 1.0, 0.0);

    let err = solve(&model, &protocol, 1.0, 10).unwrap_err();
    assert!(matches!(
        err,
        PkError::Configuration(ConfigurationError::InvalidAbsorptionRate(_))
    ));
}

#[test]
fn central_only_model_solves_under_both_routes() {
    let model = Model::builder().volume_central(1.0).clearance(1.0).build();

    let iv = solve(&model, &Protocol::intravenous(|_t| 1.0), 1.0, 20).unwrap();
    assert_eq!(iv.ncompartments(), 1);
    assert_eq!(iv.labels(), ["central"]);

    let sc = solve(&model, &Protocol::subcutaneous(|_t| 1.0, 2.0), 1.0, 20).unwrap();
    assert_eq!(sc.ncompartments(), 2);
    assert_eq!(sc.labels(), ["depot", "central"]);
}
