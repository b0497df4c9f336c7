// Logging - 파일 로그 초기화
//
// 터미널은 UI가 점유하므로 로그는 항상 파일로만 기록합니다.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// tracing 구독자 초기화
///
/// 로그 파일을 열 수 없거나 이미 구독자가 설정된 경우 조용히 무시합니다.
pub fn init(log_file: Option<&Path>, filter: &str) {
    let Some(path) = log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
