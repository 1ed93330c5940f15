use std::str::FromStr;

use crate::conversion::ConversionError;

/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Length,
    Area,
    Volume,
    Mass,
    Viscosity,
    Density,
    Permeability,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::Viscosity,
        QuantityKind::Density,
        QuantityKind::Permeability,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            QuantityKind::Pressure => "pressure",
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Mass => "mass",
            QuantityKind::Viscosity => "viscosity",
            QuantityKind::Density => "density",
            QuantityKind::Permeability => "permeability",
        }
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        QuantityKind::ALL
            .into_iter()
            .find(|k| k.code() == needle)
            .ok_or(ConversionError::UnsupportedQuantity(s.to_string()))
    }
}
