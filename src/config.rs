use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 표시 단위 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 미터법 (kW, N·m, kPa, L/h, °C). 내부 계산 기본값과 같은 계열.
    Metric,
    /// 영국식/야드파운드법 (hp, lb·ft, psi, gal/h, °F)
    Imperial,
}

/// 각 표시 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub power: PowerUnit,
    pub torque: TorqueUnit,
    pub pressure: PressureUnit,
    pub flow: FlowUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::preset(UnitSystem::Metric)
    }
}

impl DisplayUnits {
    /// 프리셋에 해당하는 단위 묶음을 돌려준다.
    pub fn preset(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                power: PowerUnit::Kilowatt,
                torque: TorqueUnit::NewtonMeter,
                pressure: PressureUnit::KiloPascal,
                flow: FlowUnit::LiterPerHour,
                temperature: TemperatureUnit::Celsius,
            },
            UnitSystem::Imperial => Self {
                power: PowerUnit::MechanicalHorsepower,
                torque: TorqueUnit::PoundFoot,
                pressure: PressureUnit::Psi,
                flow: FlowUnit::UsGallonPerHour,
                temperature: TemperatureUnit::Fahrenheit,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    pub unit_system: UnitSystem,
    pub display_units: DisplayUnits,
    /// VE/BSFC 조회 테이블 CSV 경로. 없거나 읽지 못하면 내장 곡선을 쓴다.
    pub maps_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            unit_system: UnitSystem::Metric,
            display_units: DisplayUnits::default(),
            maps_path: "maps/ve_bsfc.csv".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
