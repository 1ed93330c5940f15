use std::io::Write;

use log::LevelFilter;

/// 로그 레벨을 결정하고 env_logger 를 초기화한다.
///
/// 우선순위: CLI 플래그 → `RUST_LOG` → 설정 파일 → `warn`.
pub fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let level = resolve_level(cli_level, std::env::var("RUST_LOG").ok().as_deref(), config_level);
    let result = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "[{:5} {}] {}", record.level(), record.target(), record.args())
        })
        .try_init();
    if let Err(err) = result {
        eprintln!("로거 초기화 실패: {err}");
        return;
    }
    log::debug!("로거 초기화 (level: {level})");
}

/// 문자열 레벨 후보들 중 처음으로 해석 가능한 값을 고른다.
pub fn resolve_level(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: &str,
) -> LevelFilter {
    [cli_level, env_level, Some(config_level)]
        .into_iter()
        .flatten()
        .find_map(|l| l.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}
