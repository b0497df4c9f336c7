use super::*;
use crate::core::actions::find_action;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use std::fs;
use tempfile::TempDir;

fn make_test_app() -> App {
    App::new_for_test()
}

fn store_in(temp: &TempDir) -> SettingsStore {
    SettingsStore::new(Some(temp.path().join("settings.toml")))
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn laid_out(app: &mut App) {
    let direction = app.direction();
    app.layout.update(Rect::new(0, 0, 120, 40), direction);
}

/// 언어 저장 후 다시 읽으면 같은 코드
#[test]
fn test_set_language_persists_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut app = App::with_settings(store_in(&temp));
    app.set_language(Language::French);
    assert_eq!(app.persisted_language().as_deref(), Some("fr"));

    // 재시작 시 복원
    let restarted = App::with_settings(store_in(&temp));
    assert_eq!(restarted.language(), Language::French);
}

/// 지원하지 않는 코드는 영어로 정규화되어 저장
#[test]
fn test_unsupported_code_normalizes_to_english() {
    let temp = TempDir::new().unwrap();
    let mut app = App::with_settings(store_in(&temp));
    app.set_language(Language::German);
    app.set_language_code("xx");
    assert_eq!(app.language(), Language::English);
    assert_eq!(app.persisted_language().as_deref(), Some("en"));
}

#[test]
fn test_direction_is_rtl_only_for_arabic() {
    let mut app = make_test_app();
    for language in Language::ALL {
        app.set_language(language);
        assert_eq!(
            app.direction() == TextDirection::Rtl,
            language == Language::Arabic
        );
    }
}

#[test]
fn test_startup_reads_stored_language() {
    let temp = TempDir::new().unwrap();
    store_in(&temp).set("ar").unwrap();
    let app = App::with_settings(store_in(&temp));
    assert_eq!(app.language(), Language::Arabic);
    assert!(app.direction().is_rtl());
}

#[test]
fn test_startup_with_garbage_defaults_to_english() {
    let temp = TempDir::new().unwrap();
    store_in(&temp).set("klingon").unwrap();
    assert_eq!(App::with_settings(store_in(&temp)).language(), Language::English);

    fs::write(temp.path().join("settings.toml"), "not = [valid").unwrap();
    assert_eq!(App::with_settings(store_in(&temp)).language(), Language::English);
}

#[test]
fn test_first_run_defaults_to_english() {
    let temp = TempDir::new().unwrap();
    let app = App::with_settings(store_in(&temp));
    assert_eq!(app.language(), Language::English);
    assert_eq!(app.persisted_language(), None);
}

#[test]
fn test_unwritable_settings_keeps_ui_running() {
    let temp = TempDir::new().unwrap();
    // 부모 경로가 파일이므로 디렉토리를 만들 수 없음
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = SettingsStore::new(Some(blocker.join("settings.toml")));

    let mut app = App::with_settings(store);
    app.set_language(Language::German);
    assert_eq!(app.language(), Language::German);
}

/// 0 → 800ms에 5개 → 1600ms에 10개 → 3800ms에 첫 배치 제거
#[test]
fn test_confetti_lifecycle_through_app() {
    let mut app = make_test_app();
    app.mount(Duration::ZERO);
    assert!(app.particles().is_empty());
    assert_eq!(app.next_deadline(), Some(ms(800)));

    app.on_tick(ms(800));
    assert_eq!(app.particles().len(), 5);
    let first_batch: Vec<_> = app.particles().iter().map(|p| p.id).collect();

    app.on_tick(ms(1600));
    assert_eq!(app.particles().len(), 10);

    // 2400ms, 3200ms 배치까지 생성
    app.on_tick(ms(3799));
    assert_eq!(app.particles().len(), 20);

    app.on_tick(ms(3800));
    let alive: Vec<_> = app.particles().iter().map(|p| p.id).collect();
    assert_eq!(alive.len(), 15);
    assert!(first_batch.iter().all(|id| !alive.contains(id)));
}

#[test]
fn test_unmount_releases_confetti() {
    let mut app = make_test_app();
    app.mount(Duration::ZERO);
    app.on_tick(ms(2000));
    assert!(!app.particles().is_empty());

    app.unmount();
    assert!(!app.is_mounted());
    assert!(app.particles().is_empty());
    assert_eq!(app.next_deadline(), None);

    // 언마운트 후 틱은 아무 일도 하지 않음
    app.on_tick(ms(5000));
    assert!(app.particles().is_empty());
}

#[test]
fn test_toggle_confetti_drains_then_resumes() {
    let mut app = make_test_app();
    app.mount(Duration::ZERO);
    app.on_tick(ms(1600));
    assert_eq!(app.particles().len(), 10);

    app.execute_action(Action::ToggleConfetti);
    assert!(!app.confetti_running());
    assert_eq!(app.toast(), Some("Confetti off"));

    // 예약된 제거는 계속 진행
    app.on_tick(ms(4600));
    assert!(app.particles().is_empty());

    app.execute_action(Action::ToggleConfetti);
    assert!(app.confetti_running());
    assert_eq!(app.toast(), Some("Confetti on"));
    app.on_tick(ms(5400));
    assert_eq!(app.particles().len(), 5);
}

#[test]
fn test_toast_expires() {
    let mut app = make_test_app();
    app.mount(Duration::ZERO);
    app.on_tick(ms(100));
    app.set_toast("hello");
    app.on_tick(ms(3000));
    assert_eq!(app.toast(), Some("hello"));
    app.on_tick(ms(3100));
    assert_eq!(app.toast(), None);
}

#[test]
fn test_language_change_shows_native_name() {
    let mut app = make_test_app();
    app.set_language(Language::German);
    assert_eq!(app.toast(), Some("Deutsch"));
}

#[test]
fn test_toggle_before_mount_is_noop() {
    let mut app = make_test_app();
    app.toggle_confetti();
    assert!(!app.confetti_running());
    assert_eq!(app.toast(), None);
}

#[test]
fn test_key_bindings_drive_language() {
    let mut app = make_test_app();
    let action = find_action(KeyModifiers::NONE, KeyCode::Char('2')).unwrap();
    app.execute_action(action);
    assert_eq!(app.language(), Language::French);

    let action = find_action(KeyModifiers::NONE, KeyCode::Char('a')).unwrap();
    app.execute_action(action);
    assert_eq!(app.language(), Language::Arabic);

    // 순환: ar → en
    app.execute_action(Action::CycleLanguage);
    assert_eq!(app.language(), Language::English);

    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_hover_and_click_on_language_button() {
    let mut app = make_test_app();
    laid_out(&mut app);
    let de = app.layout.areas().language_buttons[2];

    app.hover_at(de.x + 1, de.y);
    assert_eq!(app.hover(), Some(HoverTarget::Language(Language::German)));
    assert_eq!(app.language(), Language::English);

    app.click_at(de.x + 1, de.y);
    assert_eq!(app.language(), Language::German);
}

#[test]
fn test_hover_card_and_leave() {
    let mut app = make_test_app();
    laid_out(&mut app);
    let card = app.layout.areas().cards[1];

    app.hover_at(card.x + 2, card.y + 2);
    assert_eq!(app.hover(), Some(HoverTarget::Card(1)));

    // 클릭해도 카드는 언어를 바꾸지 않음
    app.click_at(card.x + 2, card.y + 2);
    assert_eq!(app.language(), Language::English);

    app.hover_at(0, 20);
    assert_eq!(app.hover(), None);
}

#[test]
fn test_keyboard_focus_and_activate() {
    let mut app = make_test_app();
    app.execute_action(Action::FocusNext);
    app.execute_action(Action::FocusNext);
    assert_eq!(app.hover(), Some(HoverTarget::Language(Language::French)));

    app.execute_action(Action::Activate);
    assert_eq!(app.language(), Language::French);
}

#[test]
fn test_arrow_focus_mirrors_under_rtl() {
    let mut app = make_test_app();
    app.execute_action(Action::FocusNext); // EN
    app.execute_action(Action::FocusRight);
    assert_eq!(app.hover(), Some(HoverTarget::Language(Language::French)));

    app.set_language(Language::Arabic);
    // RTL: 오른쪽은 논리 순서의 이전
    app.execute_action(Action::FocusRight);
    assert_eq!(app.hover(), Some(HoverTarget::Language(Language::English)));
    app.execute_action(Action::FocusLeft);
    assert_eq!(app.hover(), Some(HoverTarget::Language(Language::French)));
}

#[test]
fn test_rtl_layout_mirrors_hit_targets() {
    let mut app = make_test_app();
    app.set_language(Language::Arabic);
    laid_out(&mut app);
    let rightmost = app
        .layout
        .areas()
        .language_buttons
        .iter()
        .max_by_key(|r| r.x)
        .copied()
        .unwrap();
    app.click_at(rightmost.x, rightmost.y);
    assert_eq!(app.language(), Language::English);
}
