//! 유체 기본 물성과 표면장력 관련 공식 테스트.
use approx::assert_relative_eq;
use fluid_mechanics_toolbox::fluids::*;
use fluid_mechanics_toolbox::porous_media::GRAVITY;
use fluid_mechanics_toolbox::DomainError;

#[test]
fn density_of_three_tonnes_in_four_cubic_meters() {
    let rho = density(3000.0, 4.0).expect("density");
    assert_relative_eq!(rho, 750.0);
    assert_relative_eq!(specific_weight(rho, GRAVITY), 7357.5, max_relative = 1e-12);
}

#[test]
fn density_rejects_empty_volume() {
    assert_eq!(
        density(3000.0, 0.0),
        Err(DomainError::NonPositive {
            name: "volume",
            value: 0.0
        })
    );
}

#[test]
fn specific_weight_inverts_to_density() {
    let w = specific_weight(850.0, GRAVITY);
    let rho = density_from_specific_weight(w, GRAVITY).expect("density");
    assert_relative_eq!(rho, 850.0, max_relative = 1e-12);
    assert!(density_from_specific_weight(w, 0.0).is_err());
}

#[test]
fn specific_gravity_relative_to_water() {
    assert_relative_eq!(specific_gravity(850.0), 0.85, max_relative = 1e-12);
    assert_relative_eq!(specific_gravity(WATER_DENSITY), 1.0);
}

#[test]
fn kinematic_viscosity_from_dynamic() {
    let nu = kinematic_viscosity(0.9, 900.0).expect("nu");
    assert_relative_eq!(nu, 0.001, max_relative = 1e-12);
    assert!(kinematic_viscosity(0.9, 0.0).is_err());
}

#[test]
fn newtonian_shear_stress() {
    assert_relative_eq!(shear_stress(0.8, 40.0), 32.0, max_relative = 1e-12);
}

#[test]
fn bulk_modulus_from_volumetric_strain() {
    let k = bulk_modulus(2.0e5, 0.01).expect("bulk modulus");
    assert_relative_eq!(k, 2.0e7, max_relative = 1e-12);
    assert!(matches!(
        bulk_modulus(2.0e5, 0.0),
        Err(DomainError::NonPositive { name: "volumetric_strain", .. })
    ));
}

#[test]
fn droplet_bubble_and_jet_pressures() {
    let droplet = pressure_due_to_surface_tension(0.072, 0.001).expect("droplet");
    assert_relative_eq!(droplet, 144.0, max_relative = 1e-12);
    let bubble = soap_bubble_pressure(0.072, 0.001).expect("bubble");
    assert_relative_eq!(bubble, 2.0 * droplet, max_relative = 1e-12);
    let jet = liquid_jet_pressure(0.072, 0.001).expect("jet");
    assert_relative_eq!(jet, droplet / 2.0, max_relative = 1e-12);
    assert!(pressure_due_to_surface_tension(0.072, 0.0).is_err());
}

#[test]
fn capillary_rise_in_water_tube() {
    // σ = 0.074 N/m, θ = 5°, d = 5 mm
    let h = capillary_rise(0.074, 5.0, 1000.0, 5e-3, GRAVITY).expect("rise");
    assert_relative_eq!(h, 6.0e-3, max_relative = 5e-3);
}

#[test]
fn capillary_rise_four_millimeter_tube() {
    let h = capillary_rise(0.072, 0.0, 1000.0, 4e-3, GRAVITY).expect("rise");
    assert_relative_eq!(h, 7.34e-3, max_relative = 1e-3);
}

#[test]
fn capillary_depression_for_obtuse_angle() {
    // 수은처럼 θ > 90° 이면 액면이 내려간다
    let h = capillary_rise(0.48, 130.0, 13_600.0, 2e-3, GRAVITY).expect("rise");
    assert!(h < 0.0);
}

#[test]
fn capillary_rise_preconditions() {
    assert!(capillary_rise(0.072, 0.0, 0.0, 4e-3, GRAVITY).is_err());
    assert!(capillary_rise(0.072, 0.0, 1000.0, 0.0, GRAVITY).is_err());
    assert!(capillary_rise(0.072, 0.0, 1000.0, 4e-3, 0.0).is_err());
}

#[test]
fn cavitation_when_local_pressure_reaches_vapour_pressure() {
    assert!(cavitation_risk(2500.0, 3000.0));
    assert!(cavitation_risk(3000.0, 3000.0));
    assert!(!cavitation_risk(4000.0, 3000.0));
}
