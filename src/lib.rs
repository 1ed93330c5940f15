//! 유체역학(Khurmi & Gupta)과 다공성 매질(Heinemann) 교재 공식을 모은 라이브러리.
//! 계산 로직은 모두 상태 없는 순수 함수이며 CLI 는 이를 호출만 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod exercises;
pub mod fluids;
pub mod i18n;
pub mod logging;
pub mod porous_media;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use error::{CalcResult, DomainError};
