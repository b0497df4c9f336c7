use anyhow::Context;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 색상 테마
///
/// 카드 전체의 색상을 정의합니다.
/// 기본은 밤하늘 테마이며 TOML 파일로 덮어쓸 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경 그라데이션 (좌상단 → 중앙 → 우하단)
    pub bg_from: ColorDef,
    pub bg_via: ColorDef,
    pub bg_to: ColorDef,

    // 본문
    pub title: ColorDef,
    pub message: ColorDef,
    pub moon: ColorDef,
    pub star: ColorDef,

    // 아이콘 줄
    pub icon_sparkles: ColorDef,
    pub icon_star: ColorDef,
    pub icon_heart: ColorDef,

    // 가치 카드
    pub card_bg: ColorDef,
    pub card_border: ColorDef,
    pub card_border_hover: ColorDef,
    pub card_title: ColorDef,
    pub card_desc: ColorDef,
    pub card_icon_faith: ColorDef,
    pub card_icon_quran: ColorDef,
    pub card_icon_prayer: ColorDef,
    pub card_icon_respect: ColorDef,

    // 배경 도형
    pub shape: ColorDef,

    // 언어 전환 버튼
    pub button_bg: ColorDef,
    pub button_hover_bg: ColorDef,
    pub button_active_bg: ColorDef,
    pub button_fg: ColorDef,

    // 하단 커맨드 바
    pub command_bar_fg: ColorDef,
    pub accent: ColorDef,

    // 경고 화면
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) if hex.starts_with('#') => parse_hex_color(hex),
            ColorDef::Hex(name) | ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// 밤하늘 테마 (기본)
    pub fn night() -> Self {
        Theme {
            bg_from: "#581c87".into(),
            bg_via: "#000000".into(),
            bg_to: "#312e81".into(),

            title: "#ffffff".into(),
            message: "#d6d0e0".into(),
            moon: "#fef08a".into(),
            star: "#fde047".into(),

            icon_sparkles: "#fde047".into(),
            icon_star: "#facc15".into(),
            icon_heart: "#86efac".into(),

            card_bg: "#2a1f3d".into(),
            card_border: "#5b4d73".into(),
            card_border_hover: "#e9d5ff".into(),
            card_title: "#ffffff".into(),
            card_desc: "#c4bccf".into(),
            card_icon_faith: "#d8b4fe".into(),
            card_icon_quran: "#86efac".into(),
            card_icon_prayer: "#fde047".into(),
            card_icon_respect: "#f9a8d4".into(),

            shape: "#ffffff".into(),

            button_bg: "#3d2f52".into(),
            button_hover_bg: "#574a6b".into(),
            button_active_bg: "#7e22ce".into(),
            button_fg: "#ffffff".into(),

            command_bar_fg: "#a59fb3".into(),
            accent: "#fde047".into(),

            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading theme {}", path.display()))?;
        let theme: Theme = toml::from_str(&content)
            .with_context(|| format!("parsing theme {}", path.display()))?;
        Ok(theme)
    }

    /// 사용자 테마가 있으면 로드, 실패하면 기본 테마
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::night();
        };
        match Self::from_file(path) {
            Ok(theme) => {
                tracing::info!(path = %path.display(), "loaded custom theme");
                theme
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "falling back to built-in theme");
                Self::night()
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_night_theme_creation() {
        let theme = Theme::night();
        assert_eq!(theme.bg_from.to_color(), Color::Rgb(0x58, 0x1c, 0x87));
        assert_eq!(theme.bg_via.to_color(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#123"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("White"), Color::White);
        assert_eq!(ColorDef::from("blue").to_color(), Color::Blue);
    }

    #[test]
    fn test_theme_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        let mut theme = Theme::night();
        theme.title = "#ff0000".into();
        fs::write(&path, toml::to_string_pretty(&theme).unwrap()).unwrap();

        let loaded = Theme::load_or_default(Some(&path));
        assert_eq!(loaded.title.to_color(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_broken_theme_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, "title = 3").unwrap();
        let loaded = Theme::load_or_default(Some(&path));
        assert_eq!(loaded.title.to_color(), Color::Rgb(255, 255, 255));
    }
}
