use serde::{Deserialize, Serialize};

/// 압력(또는 차압) 단위. 내부 기준은 Pa 이다.
///
/// 모세관압·차압을 주로 다루므로 게이지/절대 구분 없이 크기만 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    Atm,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    /// 결과 표시에 쓰는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
        }
    }
}

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1_000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::Atm => value * PA_PER_ATM,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1_000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
