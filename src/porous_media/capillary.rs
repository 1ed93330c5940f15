use crate::error::{CalcResult, DomainError};

/// Laplace 식에 따른 모세관압. Pc = σ cosθ (1/r1 + 1/r2)
///
/// `r2` 가 `None` 이거나 무한대이면 두 번째 곡률 항은 0으로 본다(단일 반경 모세관).
pub fn capillary_pressure(sigma_n_m: f64, theta_deg: f64, r1_m: f64, r2_m: Option<f64>) -> f64 {
    let cos_theta = theta_deg.to_radians().cos();
    let second = match r2_m {
        Some(r2) if r2.is_finite() => 1.0 / r2,
        _ => 0.0,
    };
    let curvature = 1.0 / r1_m + second;
    sigma_n_m * cos_theta * curvature
}

/// 실험실 모세관압을 저류층 조건으로 환산한다.
/// PcR = PcL (σR cosθR) / (σL cosθL)
///
/// 분모(σL cosθL)에 대한 검사는 하지 않는다. θL = 90° 에서는 cos 값이
/// 정확히 0이 아니므로 매우 큰 유한값이, σL = 0 이면 ±∞/NaN 이 반환된다.
pub fn capillary_pressure_conversion(
    pc_lab_pa: f64,
    sigma_lab_n_m: f64,
    sigma_res_n_m: f64,
    theta_lab_deg: f64,
    theta_res_deg: f64,
) -> f64 {
    let cos_lab = theta_lab_deg.to_radians().cos();
    let cos_res = theta_res_deg.to_radians().cos();
    pc_lab_pa * (sigma_res_n_m * cos_res) / (sigma_lab_n_m * cos_lab)
}

/// Leverett J 함수. J(Sw) = Pc / (σ cosθ) · sqrt(k / φ)
pub fn leverett_j_function(
    pc_pa: f64,
    sigma_n_m: f64,
    theta_deg: f64,
    permeability_m2: f64,
    porosity: f64,
) -> CalcResult<f64> {
    DomainError::require_non_zero("porosity", porosity)?;
    let ratio = permeability_m2 / porosity;
    if ratio < 0.0 {
        return Err(DomainError::NegativeRadicand {
            name: "k/φ",
            value: ratio,
        });
    }
    let cos_theta = theta_deg.to_radians().cos();
    let j = pc_pa / (sigma_n_m * cos_theta) * ratio.sqrt();
    log::debug!("leverett_j: Pc={pc_pa} k={permeability_m2} φ={porosity} -> J={j}");
    Ok(j)
}
