use crate::error::{CalcResult, DomainError};

/// 교재 기본 중력가속도 [m/s²]
pub const GRAVITY: f64 = 9.81;

/// Pc = 0 평면으로부터의 높이. h = Pc / [(ρw - ρnw) g]
///
/// 안정한 계면을 위해 젖음상이 더 무거워야 한다(ρw > ρnw).
pub fn vertical_height_from_pc(pc_pa: f64, rho_w: f64, rho_nw: f64, g: f64) -> CalcResult<f64> {
    let delta_rho = rho_w - rho_nw;
    if delta_rho <= 0.0 {
        return Err(DomainError::DensityOrder { rho_w, rho_nw });
    }
    Ok(pc_pa / (delta_rho * g))
}

/// 높이에 따른 모세관압. Pc = (ρw - ρnw) g h
///
/// 역방향 계산은 밀도 순서를 검사하지 않는다. ρw ≤ ρnw 이면 0 또는 음수가 나온다.
pub fn capillary_pressure_from_height(h_m: f64, rho_w: f64, rho_nw: f64, g: f64) -> f64 {
    (rho_w - rho_nw) * g * h_m
}
