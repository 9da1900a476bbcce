//! Comparison of the ODE solve against closed-form solutions of the
//! one-compartment models.

use approx::assert_relative_eq;
use pksol::{solve, Model, Protocol};

const MAX_RELATIVE: f64 = 1e-3;
const EPSILON: f64 = 1e-6;

#[test]
fn intravenous_constant_rate_matches_closed_form() {
    // dq/dt = R - k q with k = CL/Vc has q(t) = R/k (1 - e^{-kt})
    let vc = 2.0;
    let cl = 1.0;
    let rate = 1.0;
    let k = cl / vc;

    let model = Model::builder().volume_central(vc).clearance(cl).build();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, 4.0, 41).unwrap();
    for sample in trajectory.samples() {
        let expected = rate / k * (1.0 - (-k * sample.time()).exp());
        assert_relative_eq!(
            sample.amount(0).unwrap(),
            expected,
            max_relative = MAX_RELATIVE,
            epsilon = EPSILON
        );
    }
}

#[test]
fn subcutaneous_depot_and_central_match_closed_form() {
    // with CL = 0 and constant dose R:
    //   depot:   q0(t) = R/ka (1 - e^{-ka t})
    //   central: qc(t) = R t - q0(t)
    let ka = 2.0;
    let rate = 1.0;

    let model = Model::builder().volume_central(1.0).clearance(0.0).build();
    let protocol = Protocol::subcutaneous(|_t| 1.0, 2.0);

    let trajectory = solve(&model, &protocol, 2.0, 21).unwrap();
    for sample in trajectory.samples() {
        let t = sample.time();
        let depot = rate / ka * (1.0 - (-ka * t).exp());
        let central = rate * t - depot;
        assert_relative_eq!(
            sample.amount(0).unwrap(),
            depot,
            max_relative = MAX_RELATIVE,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            sample.amount(1).unwrap(),
            central,
            max_relative = MAX_RELATIVE,
            epsilon = EPSILON
        );
    }
}

#[test]
fn auc_of_the_exponential_approach_matches_the_integral() {
    // integral of q(t) = R/k (1 - e^{-kt}) over [0, T] is
    // R/k (T - (1 - e^{-kT})/k)
    let k = 0.5;
    let rate = 1.0;
    let tmax = 4.0;

    let model = Model::builder().volume_central(2.0).clearance(1.0).build();
    let protocol = Protocol::intravenous(|_t| 1.0);

    let trajectory = solve(&model, &protocol, tmax, 401).unwrap();
    let expected = rate / k * (tmax - (1.0 - (-k * tmax).exp()) / k);
    assert_relative_eq!(trajectory.auc(0).unwrap(), expected, max_relative = 1e-3);
}
