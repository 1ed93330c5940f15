//! 다공성 매질 기본 물성 계산 모듈 모음.
//! Heinemann, Fluid Flow in Porous Media 1장의 공극률, 포화도, 젖음성,
//! 모세관압, Leverett J 함수, 수직 평형, Darcy 유동 관계식으로 구성한다.

pub mod capillary;
pub mod darcy;
pub mod porosity;
pub mod saturation;
pub mod vertical_equilibrium;
pub mod wettability;

pub use capillary::*;
pub use darcy::*;
pub use porosity::*;
pub use saturation::*;
pub use vertical_equilibrium::*;
pub use wettability::*;
