use crate::error::{CalcResult, DomainError};

/// 물의 기준 밀도 [kg/m³]
pub const WATER_DENSITY: f64 = 1000.0;

/// 질량 밀도. ρ = m / V
pub fn density(mass_kg: f64, volume_m3: f64) -> CalcResult<f64> {
    DomainError::require_positive("volume", volume_m3)?;
    Ok(mass_kg / volume_m3)
}

/// 비중량. w = ρ g [N/m³]
pub fn specific_weight(density_kg_m3: f64, g: f64) -> f64 {
    density_kg_m3 * g
}

/// 비중량으로부터 밀도를 구한다. ρ = w / g
pub fn density_from_specific_weight(specific_weight_n_m3: f64, g: f64) -> CalcResult<f64> {
    DomainError::require_positive("g", g)?;
    Ok(specific_weight_n_m3 / g)
}

/// 비중. 물(1000 kg/m³) 대비 밀도 비.
pub fn specific_gravity(density_kg_m3: f64) -> f64 {
    density_kg_m3 / WATER_DENSITY
}

/// 동점성계수. ν = μ / ρ [m²/s]
pub fn kinematic_viscosity(dynamic_viscosity_pa_s: f64, density_kg_m3: f64) -> CalcResult<f64> {
    DomainError::require_positive("density", density_kg_m3)?;
    Ok(dynamic_viscosity_pa_s / density_kg_m3)
}

/// 뉴턴 유체의 전단응력. τ = μ du/dy
pub fn shear_stress(dynamic_viscosity_pa_s: f64, velocity_gradient_per_s: f64) -> f64 {
    dynamic_viscosity_pa_s * velocity_gradient_per_s
}

/// 체적탄성계수. K = Δp / (ΔV/V)
///
/// 체적 변형률은 감소량의 크기(양수)로 받는다.
pub fn bulk_modulus(pressure_change_pa: f64, volumetric_strain: f64) -> CalcResult<f64> {
    DomainError::require_positive("volumetric_strain", volumetric_strain)?;
    Ok(pressure_change_pa / volumetric_strain)
}
