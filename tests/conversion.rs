//! 문자열 기반 단위 변환 테스트.
use approx::assert_relative_eq;
use fluid_mechanics_toolbox::conversion::{convert, ConversionError};
use fluid_mechanics_toolbox::quantity::QuantityKind;

#[test]
fn darcy_to_millidarcy() {
    let md = convert(QuantityKind::Permeability, 1.0, "D", "mD").expect("convert");
    assert_relative_eq!(md, 1000.0, max_relative = 1e-12);
    let m2 = convert(QuantityKind::Permeability, 100.0, "md", "m2").expect("convert");
    assert_relative_eq!(m2, 9.869233e-14, max_relative = 1e-12);
}

#[test]
fn pressure_units() {
    let pa = convert(QuantityKind::Pressure, 1.0, "bar", "Pa").expect("convert");
    assert_relative_eq!(pa, 1.0e5, max_relative = 1e-12);
    let kpa = convert(QuantityKind::Pressure, 1.0, "atm", "kPa").expect("convert");
    assert_relative_eq!(kpa, 101.325, max_relative = 1e-12);
    let psi = convert(QuantityKind::Pressure, 6894.757, "pa", "psi").expect("convert");
    assert_relative_eq!(psi, 1.0, max_relative = 1e-9);
}

#[test]
fn viscosity_and_density_units() {
    let cp = convert(QuantityKind::Viscosity, 1e-3, "Pa.s", "cP").expect("convert");
    assert_relative_eq!(cp, 1.0, max_relative = 1e-12);
    let kg_m3 = convert(QuantityKind::Density, 1.0, "g/cc", "kg/m3").expect("convert");
    assert_relative_eq!(kg_m3, 1000.0, max_relative = 1e-12);
}

#[test]
fn length_area_volume_mass_units() {
    let mm = convert(QuantityKind::Length, 1.0, "in", "mm").expect("convert");
    assert_relative_eq!(mm, 25.4, max_relative = 1e-12);
    let cm2 = convert(QuantityKind::Area, 1.0, "m2", "cm2").expect("convert");
    assert_relative_eq!(cm2, 1.0e4, max_relative = 1e-12);
    let litres = convert(QuantityKind::Volume, 1.0, "bbl", "L").expect("convert");
    assert_relative_eq!(litres, 158.987294928, max_relative = 1e-9);
    let kg = convert(QuantityKind::Mass, 3.0, "t", "kg").expect("convert");
    assert_relative_eq!(kg, 3000.0, max_relative = 1e-12);
}

#[test]
fn negative_values_pass_through() {
    let pa = convert(QuantityKind::Pressure, -2.0, "kPa", "Pa").expect("convert");
    assert_relative_eq!(pa, -2000.0, max_relative = 1e-12);
}

#[test]
fn unknown_unit_is_reported() {
    assert_eq!(
        convert(QuantityKind::Pressure, 1.0, "furlong", "Pa"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    // 면적 단위를 투수계수에 쓰면 오류
    assert!(convert(QuantityKind::Permeability, 1.0, "cm2", "mD").is_err());
}

#[test]
fn quantity_kind_from_str() {
    assert_eq!("Permeability".parse(), Ok(QuantityKind::Permeability));
    assert_eq!(" pressure ".parse(), Ok(QuantityKind::Pressure));
    assert_eq!(
        "enthalpy".parse::<QuantityKind>(),
        Err(ConversionError::UnsupportedQuantity("enthalpy".to_string()))
    );
    for kind in QuantityKind::ALL {
        assert_eq!(kind.code().parse(), Ok(kind));
    }
}
