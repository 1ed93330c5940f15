use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fluid_mechanics_toolbox::app::{self, AppError};
use fluid_mechanics_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use fluid_mechanics_toolbox::exercises::ExerciseSet;
use fluid_mechanics_toolbox::i18n::{self, Translator};
use fluid_mechanics_toolbox::logging;
use fluid_mechanics_toolbox::quantity::QuantityKind;

/// 유체역학·다공성 매질 공식 계산기.
#[derive(Debug, Parser)]
#[command(name = "fluid_mechanics_toolbox", version, about)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, default_value = "auto", global = true)]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 로그 레벨 (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴를 실행한다 (기본값)
    Menu,
    /// 연습문제를 출력한다
    Exercise {
        /// 문제집 (examples-1.1, exercise-1.1, exercise-1.2)
        set: ExerciseSet,
        /// 문제 번호
        number: u32,
        /// 답안도 함께 출력
        #[arg(long)]
        answer: bool,
    },
    /// 단위를 변환한다
    Convert {
        /// 물리량 (pressure, length, area, volume, mass, viscosity, density, permeability)
        kind: QuantityKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut cfg = config::load_or_default(&config_path)?;
    logging::init_logging(cli.log_level.as_deref(), &cfg.log_level);

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    log::debug!("language = {}", tr.language_code());

    match cli.command {
        None | Some(Command::Menu) => app::run(&mut cfg, &tr, &config_path),
        Some(Command::Exercise {
            set,
            number,
            answer,
        }) => app::show_exercise(&tr, set, number, answer),
        Some(Command::Convert {
            kind,
            value,
            from,
            to,
        }) => app::show_conversion(&tr, kind, value, &from, &to),
    }
}
