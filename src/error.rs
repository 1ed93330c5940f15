//! 공식 계산에서 공통으로 사용하는 도메인 오류.
//!
//! 물리적으로 의미가 없거나 수학적으로 정의되지 않는 입력은 NaN/∞ 대신
//! `DomainError` 로 호출자에게 그대로 돌려준다.

use thiserror::Error;

/// 계산 결과 타입 별칭.
pub type CalcResult<T> = Result<T, DomainError>;

/// 비물리적 입력 또는 정의되지 않는 연산.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// 0보다 커야 하는 값이 0 이하
    #[error("입력 오류: {name} 값은 0보다 커야 합니다 (입력값 {value})")]
    NonPositive { name: &'static str, value: f64 },

    /// 0이 아니어야 하는 값이 0
    #[error("입력 오류: {name} 값은 0이 아니어야 합니다")]
    Zero { name: &'static str },

    /// 젖음상 밀도가 비젖음상 밀도보다 크지 않음
    #[error("입력 오류: 젖음상 밀도({rho_w})가 비젖음상 밀도({rho_nw})보다 커야 합니다")]
    DensityOrder { rho_w: f64, rho_nw: f64 },

    /// 제곱근 안의 값이 음수
    #[error("입력 오류: 제곱근 인자 {name} 가 음수입니다 ({value})")]
    NegativeRadicand { name: &'static str, value: f64 },

    /// 층별 투수계수와 길이(두께) 맵의 키 집합이 다름
    #[error("입력 오류: 층 이름 집합이 일치하지 않습니다")]
    LayerMismatch,
}

impl DomainError {
    /// `value > 0` 이 아니면 `NonPositive` 오류를 돌려준다.
    pub(crate) fn require_positive(name: &'static str, value: f64) -> CalcResult<f64> {
        if value > 0.0 {
            Ok(value)
        } else {
            Err(DomainError::NonPositive { name, value })
        }
    }

    pub(crate) fn require_non_zero(name: &'static str, value: f64) -> CalcResult<f64> {
        if value == 0.0 {
            Err(DomainError::Zero { name })
        } else {
            Ok(value)
        }
    }
}
