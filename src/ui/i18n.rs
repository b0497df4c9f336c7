// Localization store - 언어별 번역 테이블
//
// 언어 코드마다 평탄한 key → 문자열 TOML 테이블을 하나씩 내장합니다.
// 조회 순서: 활성 언어 → 영어(en) → 키 자체

use crate::utils::error::{CardError, Result};
use std::collections::HashMap;

const EN_TABLE: &str = include_str!("../../locales/en.toml");
const FR_TABLE: &str = include_str!("../../locales/fr.toml");
const DE_TABLE: &str = include_str!("../../locales/de.toml");
const AR_TABLE: &str = include_str!("../../locales/ar.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Arabic,
    ];

    /// 대체 언어
    pub const FALLBACK: Language = Language::English;

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Arabic => "ar",
        }
    }

    /// 지원 언어 코드만 인식 (대소문자, 앞뒤 공백 무시)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "de" => Some(Language::German),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// 알 수 없는 코드는 영어로 정규화
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// 전환 버튼 레이블
    pub fn button_label(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
            Language::German => "DE",
            Language::Arabic => "AR",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Arabic => "العربية",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Arabic => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// 다음 언어 (순환)
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 텍스트 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

/// 화면에서 사용하는 번역 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    Message,
    CardFaithTitle,
    CardFaithDesc,
    CardQuranTitle,
    CardQuranDesc,
    CardPrayerTitle,
    CardPrayerDesc,
    CardRespectTitle,
    CardRespectDesc,
    SwitcherLabel,
    HintLanguage,
    HintCycle,
    HintFocus,
    HintParticles,
    HintQuit,
    WarnTitle,
    WarnCurrent,
    WarnRequired,
    WarnHint,
    ToastParticlesOn,
    ToastParticlesOff,
}

impl TextKey {
    /// 카드 제목/설명 등 반드시 모든 언어에 있어야 하는 키
    pub const REQUIRED: [TextKey; 10] = [
        TextKey::Title,
        TextKey::Message,
        TextKey::CardFaithTitle,
        TextKey::CardFaithDesc,
        TextKey::CardQuranTitle,
        TextKey::CardQuranDesc,
        TextKey::CardPrayerTitle,
        TextKey::CardPrayerDesc,
        TextKey::CardRespectTitle,
        TextKey::CardRespectDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::Title => "title",
            TextKey::Message => "message",
            TextKey::CardFaithTitle => "card_faith_title",
            TextKey::CardFaithDesc => "card_faith_desc",
            TextKey::CardQuranTitle => "card_quran_title",
            TextKey::CardQuranDesc => "card_quran_desc",
            TextKey::CardPrayerTitle => "card_prayer_title",
            TextKey::CardPrayerDesc => "card_prayer_desc",
            TextKey::CardRespectTitle => "card_respect_title",
            TextKey::CardRespectDesc => "card_respect_desc",
            TextKey::SwitcherLabel => "switcher_label",
            TextKey::HintLanguage => "hint_language",
            TextKey::HintCycle => "hint_cycle",
            TextKey::HintFocus => "hint_focus",
            TextKey::HintParticles => "hint_particles",
            TextKey::HintQuit => "hint_quit",
            TextKey::WarnTitle => "warn_title",
            TextKey::WarnCurrent => "warn_current",
            TextKey::WarnRequired => "warn_required",
            TextKey::WarnHint => "warn_hint",
            TextKey::ToastParticlesOn => "toast_particles_on",
            TextKey::ToastParticlesOff => "toast_particles_off",
        }
    }
}

type Dictionary = HashMap<String, String>;

/// 번역 저장소
///
/// 시작 시 한 번 로드되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    tables: HashMap<Language, Dictionary>,
}

impl Localizer {
    /// 바이너리에 내장된 번역 테이블 로드
    pub fn embedded() -> Result<Self> {
        let localizer = Self::from_tables(&[
            (Language::English, EN_TABLE),
            (Language::French, FR_TABLE),
            (Language::German, DE_TABLE),
            (Language::Arabic, AR_TABLE),
        ])?;
        localizer.report_gaps();
        Ok(localizer)
    }

    /// 필수 키 누락은 치명적이지 않음 (영어 → 키 순으로 대체)
    fn report_gaps(&self) {
        for language in Language::ALL {
            for key in TextKey::REQUIRED {
                if !self.contains(language, key.as_str()) {
                    tracing::warn!(
                        language = language.code(),
                        key = key.as_str(),
                        "required translation missing"
                    );
                }
            }
        }
    }

    /// TOML 소스 목록에서 생성
    pub fn from_tables(sources: &[(Language, &str)]) -> Result<Self> {
        let mut tables = HashMap::new();
        for (language, source) in sources {
            let table: Dictionary = toml::from_str(source).map_err(|e| CardError::Locale {
                language: language.code(),
                source: e,
            })?;
            tables.insert(*language, table);
        }
        Ok(Self { tables })
    }

    /// 키 조회 (활성 언어 → 영어 → 키 자체)
    pub fn t<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(value) = self.lookup(language, key) {
            return value;
        }
        if language != Language::FALLBACK {
            if let Some(value) = self.lookup(Language::FALLBACK, key) {
                return value;
            }
        }
        tracing::debug!(key, language = language.code(), "missing translation");
        key
    }

    /// 해당 언어 테이블에 직접 정의되어 있는지 확인
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

/// 활성 언어에 묶인 조회 핸들
#[derive(Debug, Clone, Copy)]
pub struct I18n<'a> {
    localizer: &'a Localizer,
    language: Language,
}

impl<'a> I18n<'a> {
    pub fn new(localizer: &'a Localizer, language: Language) -> Self {
        Self {
            localizer,
            language,
        }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn direction(self) -> TextDirection {
        self.language.direction()
    }

    pub fn tr(self, key: TextKey) -> &'a str {
        self.localizer.t(self.language, key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        let localizer = Localizer::embedded().unwrap();
        assert_eq!(localizer.t(Language::English, "title"), "Ramadan Mubarak");
        assert_eq!(localizer.t(Language::Arabic, "title"), "رمضان مبارك");
        assert_eq!(localizer.t(Language::French, "card_faith_title"), "Foi");
        assert_eq!(localizer.t(Language::German, "card_prayer_title"), "Gebet");
    }

    #[test]
    fn test_every_language_has_required_keys() {
        let localizer = Localizer::embedded().unwrap();
        for language in Language::ALL {
            for key in TextKey::REQUIRED {
                assert!(
                    localizer.contains(language, key.as_str()),
                    "{} missing {}",
                    language,
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn test_english_only_key_falls_back_unchanged() {
        let localizer = Localizer::from_tables(&[
            (Language::English, "title = \"Hello\"\nonly_en = \"English only\""),
            (Language::French, "title = \"Bonjour\""),
            (Language::Arabic, "title = \"مرحبا\""),
        ])
        .unwrap();

        for language in Language::ALL {
            assert_eq!(localizer.t(language, "only_en"), "English only");
        }
        assert_eq!(localizer.t(Language::French, "title"), "Bonjour");
        // 테이블이 없는 언어도 영어로 대체
        assert_eq!(localizer.t(Language::German, "title"), "Hello");
    }

    #[test]
    fn test_missing_everywhere_returns_key() {
        let localizer = Localizer::embedded().unwrap();
        assert_eq!(localizer.t(Language::French, "no_such_key"), "no_such_key");
        assert_eq!(localizer.t(Language::English, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_malformed_table_is_locale_error() {
        let err = Localizer::from_tables(&[(Language::German, "title = ")]).unwrap_err();
        assert!(matches!(err, CardError::Locale { language: "de", .. }));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("fr"), Some(Language::French));
        assert_eq!(Language::from_code(" AR "), Some(Language::Arabic));
        assert_eq!(Language::from_code("ge"), None);
        assert_eq!(Language::from_code_or_default("xx"), Language::English);
        assert_eq!(Language::from_code_or_default(""), Language::English);
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_direction_is_rtl_only_for_arabic() {
        for language in Language::ALL {
            let expected = if language == Language::Arabic {
                "rtl"
            } else {
                "ltr"
            };
            assert_eq!(language.direction().as_str(), expected);
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut language = Language::English;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(language);
            language = language.next();
        }
        assert_eq!(language, Language::English);
        assert_eq!(seen, Language::ALL.to_vec());
    }

    #[test]
    fn test_i18n_handle() {
        let localizer = Localizer::embedded().unwrap();
        let i18n = I18n::new(&localizer, Language::German);
        assert_eq!(i18n.tr(TextKey::CardRespectTitle), "Respekt");
        assert_eq!(i18n.direction(), TextDirection::Ltr);
    }
}
