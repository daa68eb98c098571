use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 우수 매트릭스 기본 입력값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluvialDefaults {
    /// 강우 강도 [mm/hr]
    pub intensity_mm_per_h: f64,
    /// 유출 계수 (0~1)
    pub runoff_coefficient: f64,
    /// 절대 조도 ks [m]
    pub roughness_m: f64,
    /// 동점성계수 [m2/s]
    pub kinematic_viscosity_m2_s: f64,
    /// 설계 만수비 [%]
    pub fill_ratio_percent: f64,
    /// 평가할 경사 목록 [%]
    pub slopes_percent: Vec<f64>,
}

impl Default for PluvialDefaults {
    fn default() -> Self {
        Self {
            intensity_mm_per_h: 100.0,
            runoff_coefficient: 0.9,
            roughness_m: 1.5e-6,
            kinematic_viscosity_m2_s: 1.141e-6,
            fill_ratio_percent: 85.0,
            slopes_percent: vec![0.5, 1.0, 2.0],
        }
    }
}

/// 오수 관경 선정 기본 입력값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrainageDefaults {
    /// 경사 [%]
    pub slope_percent: f64,
    /// Manning 조도계수 n
    pub manning_n: f64,
    /// 설계 충수비 [%]
    pub fill_ratio_percent: f64,
}

impl Default for DrainageDefaults {
    fn default() -> Self {
        Self {
            slope_percent: 2.0,
            manning_n: 0.009,
            fill_ratio_percent: 75.0,
        }
    }
}

/// 급수 관경 선정 기본 입력값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotableDefaults {
    /// 제한 유속 [m/s]
    pub limit_velocity_m_per_s: f64,
}

impl Default for PotableDefaults {
    fn default() -> Self {
        Self {
            limit_velocity_m_per_s: 2.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 (auto/ko-kr/en-us/es-es)
    pub language: String,
    /// 언어팩 디렉터리 (없으면 locales/ 탐색)
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도
    pub window_alpha: f32,
    pub pluvial: PluvialDefaults,
    pub drainage: DrainageDefaults,
    pub potable: PotableDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
            pluvial: PluvialDefaults::default(),
            drainage: DrainageDefaults::default(),
            potable: PotableDefaults::default(),
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
