//! 설정 파일 로드/저장과 로그 레벨 결정 테스트.
use std::fs;
use std::path::PathBuf;

use fluid_mechanics_toolbox::config::{
    is_valid_gravity, load_or_default, Config, ConfigError, UnitSystem,
};
use fluid_mechanics_toolbox::logging::resolve_level;
use fluid_mechanics_toolbox::porous_media::GRAVITY;
use fluid_mechanics_toolbox::units::{PermeabilityUnit, PressureUnit, VolumeUnit};
use log::LevelFilter;

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fmt_config_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_creates_defaults() {
    let path = temp_config("missing.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.gravity_m_s2, GRAVITY);
    assert_eq!(cfg.language, "auto");
}

#[test]
fn saved_config_round_trips() {
    let path = temp_config("roundtrip.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".to_string();
    cfg.log_level = "debug".to_string();
    cfg.apply_unit_system(UnitSystem::Field);
    cfg.save(&path).expect("save");
    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let path = temp_config("partial.toml");
    fs::write(&path, "gravity_m_s2 = 9.80665\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.gravity_m_s2, 9.80665);
    assert_eq!(cfg.unit_system, UnitSystem::SI);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn non_positive_gravity_is_invalid() {
    let path = temp_config("bad_gravity.toml");
    fs::write(&path, "gravity_m_s2 = 0.0\n").expect("write");
    assert!(matches!(load_or_default(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn infinite_gravity_is_invalid() {
    let path = temp_config("inf_gravity.toml");
    fs::write(&path, "gravity_m_s2 = inf\n").expect("write");
    assert!(matches!(load_or_default(&path), Err(ConfigError::Invalid(_))));
    let path = temp_config("nan_gravity.toml");
    fs::write(&path, "gravity_m_s2 = nan\n").expect("write");
    assert!(matches!(load_or_default(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn gravity_must_be_finite_and_positive() {
    assert!(is_valid_gravity(GRAVITY));
    assert!(is_valid_gravity(1.62));
    assert!(!is_valid_gravity(f64::INFINITY));
    assert!(!is_valid_gravity(f64::NAN));
    assert!(!is_valid_gravity(0.0));
    assert!(!is_valid_gravity(-9.81));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let path = temp_config("malformed.toml");
    fs::write(&path, "gravity_m_s2 = [\n").expect("write");
    assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn unit_system_presets() {
    let mut cfg = Config::default();
    cfg.apply_unit_system(UnitSystem::Laboratory);
    assert_eq!(cfg.default_units.pressure, PressureUnit::KiloPascal);
    assert_eq!(cfg.default_units.permeability, PermeabilityUnit::MilliDarcy);
    cfg.apply_unit_system(UnitSystem::Field);
    assert_eq!(cfg.default_units.volume, VolumeUnit::Barrel);
    cfg.apply_unit_system(UnitSystem::SI);
    assert_eq!(cfg.default_units, Config::default().default_units);
}

#[test]
fn log_level_precedence() {
    assert_eq!(resolve_level(Some("debug"), Some("error"), "warn"), LevelFilter::Debug);
    assert_eq!(resolve_level(None, Some("bogus"), "info"), LevelFilter::Info);
    assert_eq!(resolve_level(Some("trace"), None, "warn"), LevelFilter::Trace);
    assert_eq!(resolve_level(None, None, "nonsense"), LevelFilter::Warn);
}
