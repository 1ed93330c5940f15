//! Darcy 유동과 층상 매질의 등가 투수계수.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{CalcResult, DomainError};

/// Darcy 속도. v = -(k/μ) dp/dx
///
/// 음의 부호는 고압에서 저압 방향으로의 유동을 뜻한다.
pub fn darcy_velocity(
    permeability_m2: f64,
    viscosity_pa_s: f64,
    pressure_gradient_pa_m: f64,
) -> CalcResult<f64> {
    DomainError::require_positive("viscosity", viscosity_pa_s)?;
    Ok(-permeability_m2 / viscosity_pa_s * pressure_gradient_pa_m)
}

/// Darcy 유량. Q = -k A Δp / (μ L)
pub fn darcy_flow_rate(
    permeability_m2: f64,
    viscosity_pa_s: f64,
    area_m2: f64,
    pressure_drop_pa: f64,
    length_m: f64,
) -> CalcResult<f64> {
    DomainError::require_positive("viscosity", viscosity_pa_s)?;
    DomainError::require_positive("length", length_m)?;
    DomainError::require_positive("area", area_m2)?;
    let q = -permeability_m2 * area_m2 * pressure_drop_pa / (viscosity_pa_s * length_m);
    log::debug!("darcy_flow_rate: k={permeability_m2} A={area_m2} Δp={pressure_drop_pa} -> Q={q}");
    Ok(q)
}

/// 측정 유량으로부터 투수계수를 구한다. `darcy_flow_rate` 의 역산.
///
/// 투수계수는 양의 물성이므로 크기 |Q μ L / (A Δp)| 를 반환한다.
/// Darcy 부호 규약을 따르는 Q, Δp 에 대해서는 -Q μ L / (A Δp) 와 같다.
pub fn permeability_from_darcy(
    flow_rate_m3_s: f64,
    viscosity_pa_s: f64,
    length_m: f64,
    area_m2: f64,
    pressure_drop_pa: f64,
) -> CalcResult<f64> {
    DomainError::require_positive("area", area_m2)?;
    DomainError::require_non_zero("pressure_drop", pressure_drop_pa)?;
    DomainError::require_positive("viscosity", viscosity_pa_s)?;
    let signed = -flow_rate_m3_s * viscosity_pa_s * length_m / (area_m2 * pressure_drop_pa);
    if signed < 0.0 {
        log::warn!(
            "유량 Q={flow_rate_m3_s} 과 압력차 Δp={pressure_drop_pa} 의 부호가 같습니다. \
             압력 구배를 거스르는 유동이므로 |k| 를 반환합니다."
        );
    }
    let k = signed.abs();
    log::debug!("permeability_from_darcy: Q={flow_rate_m3_s} -> k={k}");
    Ok(k)
}

/// 층 이름 집합이 같고 모든 값이 양수인지 확인한 뒤 (k, l) 쌍을 돌려준다.
fn layer_pairs<K>(
    permeabilities: &HashMap<K, f64>,
    extents: &HashMap<K, f64>,
    extent_name: &'static str,
) -> CalcResult<Vec<(f64, f64)>>
where
    K: Eq + Hash,
{
    if permeabilities.len() != extents.len() {
        return Err(DomainError::LayerMismatch);
    }
    permeabilities
        .iter()
        .map(|(layer, &k)| {
            let l = *extents.get(layer).ok_or(DomainError::LayerMismatch)?;
            DomainError::require_positive("permeability", k)?;
            DomainError::require_positive(extent_name, l)?;
            Ok((k, l))
        })
        .collect()
}

/// 직렬(층에 수직인 유동) 등가 투수계수. k_eq = ΣLi / Σ(Li/ki)
pub fn equivalent_permeability_series<K>(
    permeabilities: &HashMap<K, f64>,
    lengths: &HashMap<K, f64>,
) -> CalcResult<f64>
where
    K: Eq + Hash,
{
    let layers = layer_pairs(permeabilities, lengths, "length")?;
    let total_length: f64 = layers.iter().map(|(_, l)| l).sum();
    let resistance: f64 = layers.iter().map(|(k, l)| l / k).sum();
    // 빈 층 집합은 0/0 이 된다
    DomainError::require_positive("total_length", total_length)?;
    Ok(total_length / resistance)
}

/// 병렬(층에 평행한 유동) 등가 투수계수. k_eq = Σ(ki·ti) / Σti
pub fn equivalent_permeability_parallel<K>(
    permeabilities: &HashMap<K, f64>,
    thicknesses: &HashMap<K, f64>,
) -> CalcResult<f64>
where
    K: Eq + Hash,
{
    let layers = layer_pairs(permeabilities, thicknesses, "thickness")?;
    let total_thickness: f64 = layers.iter().map(|(_, t)| t).sum();
    DomainError::require_positive("total_thickness", total_thickness)?;
    let conductance: f64 = layers.iter().map(|(k, t)| k * t).sum();
    Ok(conductance / total_thickness)
}
