//! 유체의 기본 성질(Khurmi & Gupta 1장) 계산 모듈 모음.

pub mod properties;
pub mod surface;

pub use properties::*;
pub use surface::*;
