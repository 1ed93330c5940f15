use crate::error::{CalcResult, DomainError};

/// 표면장력에 의한 액적 내부 압력 증가. Δp = 2σ / r
pub fn pressure_due_to_surface_tension(sigma_n_m: f64, radius_m: f64) -> CalcResult<f64> {
    DomainError::require_positive("radius", radius_m)?;
    Ok(2.0 * sigma_n_m / radius_m)
}

/// 비누방울(두 개의 표면) 내부 압력 증가. Δp = 4σ / r
pub fn soap_bubble_pressure(sigma_n_m: f64, radius_m: f64) -> CalcResult<f64> {
    DomainError::require_positive("radius", radius_m)?;
    Ok(4.0 * sigma_n_m / radius_m)
}

/// 원통형 액체 제트 내부 압력 증가. Δp = σ / r
pub fn liquid_jet_pressure(sigma_n_m: f64, radius_m: f64) -> CalcResult<f64> {
    DomainError::require_positive("radius", radius_m)?;
    Ok(sigma_n_m / radius_m)
}

/// 모세관 상승 높이. h = 4σ cosθ / (ρ g d)
///
/// 접촉각이 90°를 넘으면 음수(모세관 강하)가 된다.
pub fn capillary_rise(
    sigma_n_m: f64,
    contact_angle_deg: f64,
    density_kg_m3: f64,
    tube_diameter_m: f64,
    g: f64,
) -> CalcResult<f64> {
    DomainError::require_positive("density", density_kg_m3)?;
    DomainError::require_positive("tube_diameter", tube_diameter_m)?;
    DomainError::require_positive("g", g)?;
    let cos_theta = contact_angle_deg.to_radians().cos();
    Ok(4.0 * sigma_n_m * cos_theta / (density_kg_m3 * g * tube_diameter_m))
}

/// 국부 압력이 증기압 이하이면 공동현상(cavitation) 위험으로 판단한다.
pub fn cavitation_risk(local_pressure_pa: f64, vapour_pressure_pa: f64) -> bool {
    local_pressure_pa <= vapour_pressure_pa
}
