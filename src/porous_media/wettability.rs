use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcResult, DomainError};

const WATER_WET_LIMIT_DEG: f64 = 75.0;
const OIL_WET_LIMIT_DEG: f64 = 105.0;

/// 접촉각 기준 젖음성 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wettability {
    WaterWet,
    IntermediateWet,
    OilWet,
}

impl Wettability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Wettability::WaterWet => "water-wet",
            Wettability::IntermediateWet => "intermediate-wet",
            Wettability::OilWet => "oil-wet",
        }
    }
}

impl fmt::Display for Wettability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amott / Amott-Harvey 젖음성 지수 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmottIndices {
    /// δW = VO1 / (VO1 + VO2)
    pub delta_water: f64,
    /// δO = VW1 / (VW1 + VW2)
    pub delta_oil: f64,
    /// WI = δW - δO
    pub amott_harvey_index: f64,
}

/// 접촉각으로 젖음성을 분류한다.
/// 75° 미만 water-wet, 75°~105°(경계 포함) intermediate-wet, 105° 초과 oil-wet.
pub fn contact_angle_classification(theta_deg: f64) -> Wettability {
    if theta_deg < WATER_WET_LIMIT_DEG {
        Wettability::WaterWet
    } else if theta_deg <= OIL_WET_LIMIT_DEG {
        Wettability::IntermediateWet
    } else {
        Wettability::OilWet
    }
}

/// Amott 및 Amott-Harvey 젖음성 지수를 계산한다.
///
/// - `vo1`: 자발 흡입(물)으로 배출된 오일 체적
/// - `vo2`: 강제 흡입으로 추가 배출된 오일 체적
/// - `vw1`: 자발 흡입(오일)으로 배출된 물 체적
/// - `vw2`: 강제 흡입으로 추가 배출된 물 체적
///
/// 분모가 0 이하이면 해당 δ 는 0으로 둔다. 이 함수는 실패하지 않는다.
pub fn amott_indices(vo1: f64, vo2: f64, vw1: f64, vw2: f64) -> AmottIndices {
    let guarded_ratio = |part: f64, rest: f64| {
        let denom = part + rest;
        if denom > 0.0 {
            part / denom
        } else {
            0.0
        }
    };
    let delta_water = guarded_ratio(vo1, vo2);
    let delta_oil = guarded_ratio(vw1, vw2);
    AmottIndices {
        delta_water,
        delta_oil,
        amott_harvey_index: delta_water - delta_oil,
    }
}

/// USBM 젖음성 지수. W = log10(A1 / A2)
pub fn usbm_wettability_index(a1: f64, a2: f64) -> CalcResult<f64> {
    DomainError::require_positive("a1", a1)?;
    DomainError::require_positive("a2", a2)?;
    Ok((a1 / a2).log10())
}
