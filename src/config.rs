use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::engine::FormatPolicy;
use crate::sync::{SyncOptions, DEFAULT_SEED};

const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 누락된 키는 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 언어팩 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    /// 시작 시 선택할 카테고리 id
    pub default_category: Option<String>,
    /// 결과 표시 형식
    pub format: FormatPolicy,
    /// 카테고리/변환 변경 시 from 필드에 넣는 값
    pub seed_value: String,
    /// 사용자 정의 카테고리 TOML 경로
    pub custom_catalog: Option<String>,
    pub window_alpha: f32,
    pub always_on_top: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_category: None,
            format: FormatPolicy::Tiered,
            seed_value: DEFAULT_SEED.to_string(),
            custom_catalog: None,
            window_alpha: 1.0,
            always_on_top: false,
        }
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 동기화 코디네이터 옵션으로 변환한다. 빈 seed 는 기본값으로 대체한다.
    pub fn sync_options(&self) -> SyncOptions {
        let seed = if self.seed_value.trim().is_empty() {
            DEFAULT_SEED.to_string()
        } else {
            self.seed_value.clone()
        };
        SyncOptions {
            format: self.format,
            seed,
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
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = CONFIG_PATH, "Loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        info!(path = CONFIG_PATH, "No config file found, generated default");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(CONFIG_PATH, content)?;
    Ok(())
}
