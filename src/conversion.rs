use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kPa`, `psi`, `um`, `cm2`, `cc`, `cP`, `g/cc`, `mD` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let converted = match kind {
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            convert_pressure(value, from, to)
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            convert_length(value, from, to)
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            convert_area(value, from, to)
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            convert_volume(value, from, to)
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            convert_mass(value, from, to)
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            convert_viscosity(value, from, to)
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            convert_density(value, from, to)
        }
        QuantityKind::Permeability => {
            let from = parse_permeability_unit(from_unit_str)?;
            let to = parse_permeability_unit(to_unit_str)?;
            convert_permeability(value, from, to)
        }
    };
    log::debug!(
        "convert {}: {value} {from_unit_str} -> {converted} {to_unit_str}",
        kind.code()
    );
    Ok(converted)
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "um" | "µm" | "micron" => Ok(LengthUnit::Micrometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "cm3" | "cm^3" | "cc" | "ml" => Ok(VolumeUnit::CubicCentimeter),
        "bbl" | "barrel" => Ok(VolumeUnit::Barrel),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "t" | "tonne" | "tonnes" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        "p" | "poise" => Ok(ViscosityUnit::Poise),
        "cps" | "cp" => Ok(ViscosityUnit::Centipoise),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        "g/cm3" | "g/cc" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lbm/ft3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_permeability_unit(s: &str) -> Result<PermeabilityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" => Ok(PermeabilityUnit::SquareMeter),
        "um2" | "µm2" => Ok(PermeabilityUnit::SquareMicrometer),
        "d" | "darcy" => Ok(PermeabilityUnit::Darcy),
        "md" | "millidarcy" => Ok(PermeabilityUnit::MilliDarcy),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
