use crate::error::{CalcResult, DomainError};

/// 공극률(전체 또는 유효). φ = Vp / VT
///
/// φ > 1 인 입력도 거부하지 않고 그대로 돌려준다.
pub fn porosity(pore_volume_m3: f64, total_volume_m3: f64) -> CalcResult<f64> {
    DomainError::require_positive("total_volume", total_volume_m3)?;
    let phi = pore_volume_m3 / total_volume_m3;
    if phi > 1.0 {
        log::warn!("공극률 {phi:.4} 가 1을 초과합니다. 입력 체적을 확인하세요.");
    }
    log::debug!("porosity: Vp={pore_volume_m3} VT={total_volume_m3} -> φ={phi}");
    Ok(phi)
}

/// 고체 체적으로부터 공극률을 구한다. φ = (VT - Vs) / VT
pub fn porosity_from_solid_volume(
    solid_volume_m3: f64,
    total_volume_m3: f64,
) -> CalcResult<f64> {
    DomainError::require_positive("total_volume", total_volume_m3)?;
    Ok((total_volume_m3 - solid_volume_m3) / total_volume_m3)
}

/// 압력에 따른 공극률 변화(작은 압축률 근사). φ ≈ φ0 [1 + cφ (p - p0)]
///
/// cφ·Δp 가 작을 때만 유효한 선형 근사이며 입력 검증은 하지 않는다.
pub fn porosity_pressure_dependence(
    phi0: f64,
    c_phi_per_pa: f64,
    p_pa: f64,
    p0_pa: f64,
) -> f64 {
    phi0 * (1.0 + c_phi_per_pa * (p_pa - p0_pa))
}

/// 등온 공극 압축률. cφ = (1/φ) ∂φ/∂p
pub fn pore_compressibility(dphi_dp_per_pa: f64, phi: f64) -> CalcResult<f64> {
    DomainError::require_positive("porosity", phi)?;
    Ok(dphi_dp_per_pa / phi)
}
