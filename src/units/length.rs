use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
/// 공극 반경처럼 작은 값을 위해 마이크로미터를 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Inch,
    Foot,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Micrometer => value / 1_000_000.0,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Micrometer => value_m * 1_000_000.0,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
