//! 액션 시스템 — 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crate::ui::{I18n, Language, TextKey};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Language
    SetLanguageEnglish,
    SetLanguageFrench,
    SetLanguageGerman,
    SetLanguageArabic,
    CycleLanguage,
    // Focus
    FocusNext,
    FocusPrev,
    FocusLeft,
    FocusRight,
    Activate,
    // Scene
    ToggleConfetti,
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: TextKey,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::SetLanguageEnglish,
        id: "lang_en",
        command_bar: Some(CommandBarEntry {
            key: "1-4",
            label: TextKey::HintLanguage,
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::SetLanguageFrench,
        id: "lang_fr",
        command_bar: None,
    },
    ActionDef {
        action: Action::SetLanguageGerman,
        id: "lang_de",
        command_bar: None,
    },
    ActionDef {
        action: Action::SetLanguageArabic,
        id: "lang_ar",
        command_bar: None,
    },
    ActionDef {
        action: Action::CycleLanguage,
        id: "lang_cycle",
        command_bar: Some(CommandBarEntry {
            key: "l",
            label: TextKey::HintCycle,
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::FocusNext,
        id: "focus_next",
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: TextKey::HintFocus,
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::FocusPrev,
        id: "focus_prev",
        command_bar: None,
    },
    ActionDef {
        action: Action::FocusLeft,
        id: "focus_left",
        command_bar: None,
    },
    ActionDef {
        action: Action::FocusRight,
        id: "focus_right",
        command_bar: None,
    },
    ActionDef {
        action: Action::Activate,
        id: "activate",
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleConfetti,
        id: "toggle_confetti",
        command_bar: Some(CommandBarEntry {
            key: "p",
            label: TextKey::HintParticles,
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: TextKey::HintQuit,
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 언어 순환
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::CycleLanguage,
        },
        // 포커스
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::FocusNext,
        },
        KeyBinding {
            code: KeyCode::BackTab,
            modifiers: None,
            action: Action::FocusPrev,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::FocusNext,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::FocusPrev,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: None,
            action: Action::FocusLeft,
        },
        KeyBinding {
            code: KeyCode::Right,
            modifiers: None,
            action: Action::FocusRight,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::Activate,
        },
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Activate,
        },
        // 컨페티
        KeyBinding {
            code: KeyCode::Char('p'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleConfetti,
        },
    ];

    // 언어 직접 선택: 숫자키와 언어 머리글자
    for (language, digit) in Language::ALL.into_iter().zip(['1', '2', '3', '4']) {
        let action = Action::for_language(language);
        let initial = language.code().chars().next().unwrap_or(digit);
        for c in [digit, initial] {
            bindings.push(KeyBinding {
                code: KeyCode::Char(c),
                modifiers: Some(KeyModifiers::NONE),
                action,
            });
        }
    }

    bindings
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    // Shift+문자는 대문자로 들어오므로 SHIFT만 눌린 경우는 무시
    let modifiers = match code {
        KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    };
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

impl Action {
    /// 로그용 식별자
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map_or("unknown", |d| d.id)
    }

    pub fn for_language(language: Language) -> Action {
        match language {
            Language::English => Action::SetLanguageEnglish,
            Language::French => Action::SetLanguageFrench,
            Language::German => Action::SetLanguageGerman,
            Language::Arabic => Action::SetLanguageArabic,
        }
    }

    /// 언어 선택 액션이면 대상 언어
    pub fn language(self) -> Option<Language> {
        match self {
            Action::SetLanguageEnglish => Some(Language::English),
            Action::SetLanguageFrench => Some(Language::French),
            Action::SetLanguageGerman => Some(Language::German),
            Action::SetLanguageArabic => Some(Language::Arabic),
            _ => None,
        }
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items(i18n: I18n<'_>) -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, i18n.tr(cb.label)))
        .collect()
}
