use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::porous_media::GRAVITY;
use crate::units::*;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// 코어 실험실 단위(cm, cm³, cP, mD, kPa)
    Laboratory,
    /// 유전 현장 단위(ft, bbl, cP, mD, psi)
    Field,
}

impl UnitSystem {
    /// 프리셋에 해당하는 표시 단위 묶음.
    pub fn default_units(&self) -> DefaultUnits {
        match self {
            UnitSystem::SI => DefaultUnits::default(),
            UnitSystem::Laboratory => DefaultUnits {
                pressure: PressureUnit::KiloPascal,
                length: LengthUnit::Centimeter,
                area: AreaUnit::SquareCentimeter,
                volume: VolumeUnit::CubicCentimeter,
                viscosity: ViscosityUnit::Centipoise,
                density: DensityUnit::GramPerCubicCentimeter,
                permeability: PermeabilityUnit::MilliDarcy,
            },
            UnitSystem::Field => DefaultUnits {
                pressure: PressureUnit::Psi,
                length: LengthUnit::Foot,
                area: AreaUnit::SquareFoot,
                volume: VolumeUnit::Barrel,
                viscosity: ViscosityUnit::Centipoise,
                density: DensityUnit::PoundPerCubicFoot,
                permeability: PermeabilityUnit::MilliDarcy,
            },
        }
    }
}

/// 각 물리량별 결과 표시 단위를 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub viscosity: ViscosityUnit,
    pub density: DensityUnit,
    pub permeability: PermeabilityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Pascal,
            length: LengthUnit::Meter,
            area: AreaUnit::SquareMeter,
            volume: VolumeUnit::CubicMeter,
            viscosity: ViscosityUnit::PascalSecond,
            density: DensityUnit::KgPerCubicMeter,
            permeability: PermeabilityUnit::SquareMeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en)
    pub language: String,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: String,
    /// 수직 평형·모세관 상승 계산에 쓰는 중력가속도 [m/s²]
    pub gravity_m_s2: f64,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_level: "warn".to_string(),
            gravity_m_s2: GRAVITY,
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽었지만 사용할 수 없는 경우
    #[error("잘못된 설정 값: {0}")]
    Invalid(String),
}

/// 중력가속도로 쓸 수 있는 값인지 확인한다(유한한 양수).
pub fn is_valid_gravity(g: f64) -> bool {
    g.is_finite() && g > 0.0
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        log::debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        log::info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 시스템을 바꾸고 표시 단위를 프리셋으로 재설정한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = system.default_units();
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_gravity(self.gravity_m_s2) {
            return Err(ConfigError::Invalid(format!(
                "gravity_m_s2 는 0보다 큰 유한값이어야 합니다 ({})",
                self.gravity_m_s2
            )));
        }
        Ok(())
    }
}
