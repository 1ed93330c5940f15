use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::error::DomainError;
use crate::exercises::{ExerciseError, ExerciseSet};
use crate::i18n::{self, Translator};
use crate::quantity::QuantityKind;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 표준 입력이 닫힘(EOF)
    #[error("입력이 종료되었습니다")]
    InputClosed,
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 공식 계산 입력 오류
    #[error("계산 오류: {0}")]
    Domain(#[from] DomainError),
    /// 연습문제 조회 오류
    #[error("연습문제 오류: {0}")]
    Exercise(#[from] ExerciseError),
}

impl AppError {
    /// 메뉴 하나의 실패로 프로그램을 끝내지 않아도 되는 오류인지 여부.
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Conversion(_) | AppError::Domain(_) | AppError::Exercise(_)
        )
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(err) => return Err(err),
        };
        let outcome = match choice {
            MenuChoice::FluidProperties => ui_cli::handle_fluid_properties(tr, config),
            MenuChoice::Surface => ui_cli::handle_surface(tr, config),
            MenuChoice::Porosity => ui_cli::handle_porosity(tr, config),
            MenuChoice::Wettability => ui_cli::handle_wettability(tr, config),
            MenuChoice::Capillary => ui_cli::handle_capillary(tr, config),
            MenuChoice::VerticalEquilibrium => ui_cli::handle_vertical_equilibrium(tr, config),
            MenuChoice::Darcy => ui_cli::handle_darcy(tr, config),
            MenuChoice::Exercises => ui_cli::handle_exercises(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config).and_then(|()| {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                Ok(())
            }),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                log::warn!("{err}");
                println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(AppError::InputClosed) => {
                config.save(config_path)?;
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// `exercise` 서브커맨드: 문제와 답안을 출력한다.
pub fn show_exercise(
    tr: &Translator,
    set: ExerciseSet,
    number: u32,
    with_answer: bool,
) -> Result<(), AppError> {
    ui_cli::print_exercise(tr, set, number, with_answer)
}

/// `convert` 서브커맨드: 단위를 변환해 출력한다.
pub fn show_conversion(
    tr: &Translator,
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let result = conversion::convert(kind, value, from, to)?;
    println!("{} {result} {to}", tr.t(i18n::keys::UNIT_CONVERSION_RESULT));
    Ok(())
}
