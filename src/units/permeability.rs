use serde::{Deserialize, Serialize};

/// 투수계수 단위. 내부 기준은 m² 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermeabilityUnit {
    SquareMeter,
    SquareMicrometer,
    Darcy,
    MilliDarcy,
}

/// 1 darcy = 9.869233e-13 m²
const M2_PER_DARCY: f64 = 9.869_233e-13;

impl PermeabilityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PermeabilityUnit::SquareMeter => "m²",
            PermeabilityUnit::SquareMicrometer => "µm²",
            PermeabilityUnit::Darcy => "D",
            PermeabilityUnit::MilliDarcy => "mD",
        }
    }
}

fn to_square_meter(value: f64, unit: PermeabilityUnit) -> f64 {
    match unit {
        PermeabilityUnit::SquareMeter => value,
        PermeabilityUnit::SquareMicrometer => value * 1e-12,
        PermeabilityUnit::Darcy => value * M2_PER_DARCY,
        PermeabilityUnit::MilliDarcy => value * M2_PER_DARCY / 1000.0,
    }
}

fn from_square_meter(value_m2: f64, unit: PermeabilityUnit) -> f64 {
    match unit {
        PermeabilityUnit::SquareMeter => value_m2,
        PermeabilityUnit::SquareMicrometer => value_m2 / 1e-12,
        PermeabilityUnit::Darcy => value_m2 / M2_PER_DARCY,
        PermeabilityUnit::MilliDarcy => value_m2 / M2_PER_DARCY * 1000.0,
    }
}

/// 투수계수를 변환한다.
pub fn convert_permeability(value: f64, from: PermeabilityUnit, to: PermeabilityUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
