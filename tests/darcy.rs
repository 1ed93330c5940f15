//! Darcy 유동과 등가 투수계수 테스트.
use std::collections::HashMap;

use approx::assert_relative_eq;
use fluid_mechanics_toolbox::porous_media::{
    darcy_flow_rate, darcy_velocity, equivalent_permeability_parallel,
    equivalent_permeability_series, permeability_from_darcy,
};
use fluid_mechanics_toolbox::DomainError;

fn two_layers() -> (HashMap<&'static str, f64>, HashMap<&'static str, f64>) {
    (
        HashMap::from([("L1", 1e-13), ("L2", 5e-13)]),
        HashMap::from([("L1", 0.4), ("L2", 0.6)]),
    )
}

#[test]
fn darcy_velocity_points_down_the_gradient() {
    let v = darcy_velocity(1e-12, 1e-3, 1e5).expect("velocity");
    assert_relative_eq!(v, -1e-4, max_relative = 1e-12);
    assert!(darcy_velocity(1e-12, 1e-3, -1e5).expect("velocity") > 0.0);
}

#[test]
fn darcy_velocity_requires_positive_viscosity() {
    assert_eq!(
        darcy_velocity(1e-12, 0.0, 1e5),
        Err(DomainError::NonPositive {
            name: "viscosity",
            value: 0.0
        })
    );
}

#[test]
fn darcy_flow_rate_worked_value() {
    let q = darcy_flow_rate(2e-13, 1e-3, 1e-3, 5e4, 0.2).expect("flow");
    assert_relative_eq!(q, -5e-8, max_relative = 1e-12);
}

#[test]
fn darcy_flow_rate_preconditions() {
    assert!(darcy_flow_rate(2e-13, -1e-3, 1e-3, 5e4, 0.2).is_err());
    assert!(darcy_flow_rate(2e-13, 1e-3, 0.0, 5e4, 0.2).is_err());
    assert!(darcy_flow_rate(2e-13, 1e-3, 1e-3, 5e4, 0.0).is_err());
}

#[test]
fn permeability_from_measured_flow() {
    let k = permeability_from_darcy(1e-7, 1e-3, 0.1, 5e-4, 2e5).expect("k");
    assert_relative_eq!(k, 1e-13, max_relative = 1e-12);
}

#[test]
fn permeability_inversion_recovers_input() {
    let cases = [
        (1e-13, 1e-3, 5e-4, 2e5, 0.1),
        (3.5e-12, 2.5e-3, 1.2e-3, 7.5e4, 0.05),
        (8e-15, 5e-4, 2e-2, 1e6, 1.5),
    ];
    for (k, mu, area, dp, length) in cases {
        let q = darcy_flow_rate(k, mu, area, dp, length).expect("flow");
        let back = permeability_from_darcy(q, mu, length, area, dp).expect("k");
        assert_relative_eq!(back, k, max_relative = 1e-12);
    }
}

#[test]
fn flow_against_gradient_still_gives_positive_permeability() {
    let along = permeability_from_darcy(-1e-7, 1e-3, 0.1, 5e-4, 2e5).expect("k");
    let against = permeability_from_darcy(-1e-7, 1e-3, 0.1, 5e-4, -2e5).expect("k");
    assert_relative_eq!(along, 1e-13, max_relative = 1e-12);
    assert_relative_eq!(against, along, max_relative = 1e-12);
}

#[test]
fn permeability_from_darcy_preconditions() {
    assert!(matches!(
        permeability_from_darcy(1e-7, 1e-3, 0.1, 5e-4, 0.0),
        Err(DomainError::Zero { name: "pressure_drop" })
    ));
    assert!(permeability_from_darcy(1e-7, 1e-3, 0.1, 0.0, 2e5).is_err());
    assert!(permeability_from_darcy(1e-7, 0.0, 0.1, 5e-4, 2e5).is_err());
}

#[test]
fn series_permeability_is_length_weighted_harmonic_mean() {
    let (k, l) = two_layers();
    let k_eq = equivalent_permeability_series(&k, &l).expect("series");
    // (0.4 + 0.6) / (0.4/1e-13 + 0.6/5e-13)
    assert_relative_eq!(k_eq, 1.0 / 5.2e12, max_relative = 1e-12);
    // 가장 덜 투과적인 층이 지배한다
    assert!(k_eq > 1e-13 && k_eq < 5e-13);
}

#[test]
fn parallel_permeability_is_thickness_weighted_mean() {
    let (k, t) = two_layers();
    let k_eq = equivalent_permeability_parallel(&k, &t).expect("parallel");
    assert_relative_eq!(k_eq, 3.4e-13, max_relative = 1e-12);
}

#[test]
fn parallel_never_below_series() {
    let (k, l) = two_layers();
    let series = equivalent_permeability_series(&k, &l).expect("series");
    let parallel = equivalent_permeability_parallel(&k, &l).expect("parallel");
    assert!(parallel >= series);
}

#[test]
fn single_layer_is_its_own_equivalent() {
    let k = HashMap::from([("only".to_string(), 2e-13)]);
    let l = HashMap::from([("only".to_string(), 3.0)]);
    assert_relative_eq!(equivalent_permeability_series(&k, &l).expect("series"), 2e-13);
    assert_relative_eq!(equivalent_permeability_parallel(&k, &l).expect("parallel"), 2e-13);
}

#[test]
fn layer_key_sets_must_match() {
    let k = HashMap::from([("L1", 1e-13), ("L2", 5e-13)]);
    let l = HashMap::from([("L1", 0.4), ("L3", 0.6)]);
    assert_eq!(equivalent_permeability_series(&k, &l), Err(DomainError::LayerMismatch));
    let short = HashMap::from([("L1", 0.4)]);
    assert_eq!(equivalent_permeability_parallel(&k, &short), Err(DomainError::LayerMismatch));
}

#[test]
fn layers_must_be_positive() {
    let (_, l) = two_layers();
    let bad_k = HashMap::from([("L1", 0.0), ("L2", 5e-13)]);
    assert!(matches!(
        equivalent_permeability_series(&bad_k, &l),
        Err(DomainError::NonPositive { name: "permeability", .. })
    ));
    let (k, _) = two_layers();
    let bad_t = HashMap::from([("L1", 0.4), ("L2", -0.6)]);
    assert!(matches!(
        equivalent_permeability_parallel(&k, &bad_t),
        Err(DomainError::NonPositive { name: "thickness", .. })
    ));
}

#[test]
fn empty_layer_set_is_rejected() {
    let empty: HashMap<&str, f64> = HashMap::new();
    assert!(equivalent_permeability_series(&empty, &empty).is_err());
    assert!(equivalent_permeability_parallel(&empty, &empty).is_err());
}
