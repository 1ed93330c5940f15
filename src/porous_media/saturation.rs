use std::collections::HashMap;

use crate::error::{CalcResult, DomainError};

/// 상 포화도. Si = Vi / Vp
///
/// [0, 1] 범위 검사는 호출자 책임이다.
pub fn saturation(phase_volume_m3: f64, pore_volume_m3: f64) -> CalcResult<f64> {
    DomainError::require_positive("pore_volume", pore_volume_m3)?;
    Ok(phase_volume_m3 / pore_volume_m3)
}

/// 상별 포화도의 합. 완전한 상 집합이면 1이어야 하지만 강제하지 않는다.
pub fn saturation_sum<K>(saturations: &HashMap<K, f64>) -> f64 {
    let total: f64 = saturations.values().sum();
    if !saturations.is_empty() && (total - 1.0).abs() > 1e-6 {
        log::warn!("포화도 합이 1이 아닙니다: ΣS = {total:.6}");
    }
    total
}
