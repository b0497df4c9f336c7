// Runtime configuration - 환경변수 기반 설정
//
// 설정 파일, 로그 파일, 프레임 속도, 테마 파일 경로를 결정합니다.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR_NAME: &str = "ramadan-card";

pub const ENV_SETTINGS_FILE: &str = "RAMADAN_CARD_SETTINGS_FILE";
pub const ENV_LOG_FILE: &str = "RAMADAN_CARD_LOG_FILE";
pub const ENV_LOG_FILTER: &str = "RAMADAN_CARD_LOG";
pub const ENV_FPS: &str = "RAMADAN_CARD_FPS";
pub const ENV_THEME_FILE: &str = "RAMADAN_CARD_THEME";
pub const ENV_LANG: &str = "RAMADAN_CARD_LANG";

const DEFAULT_FPS: u32 = 30;
const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 120;
const DEFAULT_LOG_FILTER: &str = "info";

/// 실행 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 언어 설정 저장 파일
    pub settings_file: Option<PathBuf>,
    /// 로그 파일 (None이면 로깅 비활성)
    pub log_file: Option<PathBuf>,
    /// tracing EnvFilter 지시문
    pub log_filter: String,
    /// 초당 프레임 수
    pub fps: u32,
    /// 사용자 테마 파일
    pub theme_file: Option<PathBuf>,
    /// 시작 언어 강제 지정 (저장된 설정보다 우선, 저장됨)
    pub lang: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fps: DEFAULT_FPS,
            theme_file: None,
            lang: None,
        }
    }
}

impl Config {
    /// 환경변수와 설정 디렉토리에서 설정 결정
    pub fn from_env() -> Self {
        let config_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));

        let settings_file = env_path(ENV_SETTINGS_FILE)
            .or_else(|| config_dir.as_ref().map(|dir| dir.join("settings.toml")));
        let log_file =
            env_path(ENV_LOG_FILE).or_else(|| config_dir.as_ref().map(|dir| dir.join("card.log")));
        let log_filter = env_value(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let fps = parse_fps(env_value(ENV_FPS).as_deref());
        let theme_file = env_path(ENV_THEME_FILE).or_else(|| {
            config_dir
                .as_ref()
                .map(|dir| dir.join("theme.toml"))
                .filter(|path| path.exists())
        });

        Self {
            settings_file,
            log_file,
            log_filter,
            fps,
            theme_file,
            lang: env_value(ENV_LANG),
        }
    }

    /// 한 프레임 간격
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(MIN_FPS, MAX_FPS)))
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env_value(key).map(PathBuf::from)
}

fn parse_fps(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .map(|fps| fps.clamp(MIN_FPS, MAX_FPS))
        .unwrap_or(DEFAULT_FPS)
}
