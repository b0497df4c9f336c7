// Preference persistence - 언어 설정 저장소
//
// 단일 키(`lang`)만 담는 TOML 파일입니다.
// 파일이 없거나 키가 없으면 "설정 없음"으로 취급합니다.

use crate::utils::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct PersistedPreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
}

/// 언어 설정 저장소
///
/// 경로가 없으면(설정 디렉토리를 찾지 못한 경우) 읽기/쓰기 모두 no-op입니다.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// 저장하지 않는 저장소
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 저장된 언어 코드 (검증하지 않음)
    pub fn get(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let data = fs::read_to_string(path).ok()?;
        match Self::decode(&data) {
            Ok(pref) => pref.lang,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                None
            }
        }
    }

    /// 언어 코드 덮어쓰기
    pub fn set(&self, code: &str) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = PersistedPreference {
            lang: Some(code.to_string()),
        };
        let data =
            toml::to_string_pretty(&payload).map_err(|e| CardError::Settings(e.to_string()))?;
        fs::write(path, data)?;
        Ok(())
    }

    fn decode(data: &str) -> Result<PersistedPreference> {
        toml::from_str(data).map_err(|e| CardError::Settings(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> SettingsStore {
        SettingsStore::new(Some(temp.path().join("nested").join("settings.toml")))
    }

    #[test]
    fn test_get_absent_on_first_run() {
        let temp = TempDir::new().unwrap();
        assert_eq!(store_in(&temp).get(), None);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.set("fr").unwrap();
        assert_eq!(store.get().as_deref(), Some("fr"));

        store.set("ar").unwrap();
        assert_eq!(store.get().as_deref(), Some("ar"));
    }

    #[test]
    fn test_file_layout_is_single_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.set("de").unwrap();
        let data = fs::read_to_string(store.path().unwrap()).unwrap();
        assert_eq!(data.trim(), "lang = \"de\"");
    }

    #[test]
    fn test_malformed_file_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let path = store.path().unwrap().to_path_buf();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "lang = [not toml").unwrap();
        assert_eq!(store.get(), None);

        fs::write(&path, "other = 1").unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_disabled_store_is_noop() {
        let store = SettingsStore::disabled();
        assert!(store.set("fr").is_ok());
        assert_eq!(store.get(), None);
    }
}
