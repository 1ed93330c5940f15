use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicCentimeter,
    /// 석유 배럴(42 US gal)
    Barrel,
}

const M3_PER_BARREL: f64 = 0.158_987_294_928;

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::CubicCentimeter => value / 1_000_000.0,
        VolumeUnit::Barrel => value * M3_PER_BARREL,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::CubicCentimeter => value * 1_000_000.0,
        VolumeUnit::Barrel => value / M3_PER_BARREL,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
