use crate::config::Config;
use crate::core::actions::Action;
use crate::models::{ConfettiStream, FloatingShape, Particle};
use crate::system::SettingsStore;
use crate::ui::{HoverTarget, I18n, Language, LayoutManager, Localizer, TextDirection, TextKey, Theme};
use crate::utils::error::Result;
use std::time::Duration;

/// 토스트 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 애플리케이션 상태
///
/// 모든 가변 상태(활성 언어, 컨페티, 호버)의 유일한 소유자입니다.
/// 상태 변경은 이 타입의 메서드를 통해서만 일어납니다.
pub struct App {
    /// 종료 플래그
    should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    pub theme: Theme,
    localizer: Localizer,
    language: Language,
    settings: SettingsStore,
    /// 마운트된 동안만 존재
    confetti: Option<ConfettiStream>,
    shapes: Vec<FloatingShape>,
    /// 마운트 이후 경과 시간 (장면 시계)
    elapsed: Duration,
    hover: Option<HoverTarget>,
    /// 토스트 메시지 (메시지, 표시 시각)
    pub toast_message: Option<(String, Duration)>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let localizer = Localizer::embedded()?;
        let theme = Theme::load_or_default(config.theme_file.as_deref());
        let settings = SettingsStore::new(config.settings_file.clone());
        Ok(Self::from_parts(
            localizer,
            theme,
            settings,
            fastrand::Rng::new(),
        ))
    }

    fn from_parts(
        localizer: Localizer,
        theme: Theme,
        settings: SettingsStore,
        mut rng: fastrand::Rng,
    ) -> Self {
        let stored = settings.get();
        let language = stored
            .as_deref()
            .map(Language::from_code_or_default)
            .unwrap_or_default();
        tracing::info!(
            path = ?settings.path(),
            stored = stored.as_deref().unwrap_or("-"),
            language = language.code(),
            "initial language resolved"
        );

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme,
            localizer,
            language,
            settings,
            confetti: None,
            shapes: FloatingShape::scatter(&mut rng),
            elapsed: Duration::ZERO,
            hover: None,
            toast_message: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        Self::with_settings(SettingsStore::disabled())
    }

    #[cfg(test)]
    pub(crate) fn with_settings(settings: SettingsStore) -> Self {
        Self::from_parts(
            Localizer::embedded().unwrap(),
            Theme::night(),
            settings,
            fastrand::Rng::with_seed(7),
        )
    }

    // === Lifecycle ===

    /// 장면 마운트: 컨페티 타이머 획득
    pub fn mount(&mut self, now: Duration) {
        self.elapsed = now;
        self.confetti = Some(ConfettiStream::start(now));
        tracing::info!(language = self.language.code(), "scene mounted");
    }

    /// 장면 언마운트: 컨페티 타이머와 파티클 해제
    pub fn unmount(&mut self) {
        if let Some(stream) = self.confetti.take() {
            tracing::info!(alive = stream.len(), "scene unmounted");
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.confetti.is_some()
    }

    /// 장면 시계 진행
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        if let Some(stream) = self.confetti.as_mut() {
            stream.advance_to(elapsed);
        }
        self.clear_expired_toast();
    }

    /// 다음 컨페티 생성/제거 시각
    pub fn next_deadline(&self) -> Option<Duration> {
        self.confetti.as_ref().and_then(ConfettiStream::next_deadline)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // === Language ===

    #[cfg(test)]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn i18n(&self) -> I18n<'_> {
        I18n::new(&self.localizer, self.language)
    }

    /// 활성 언어 변경 및 저장
    ///
    /// 저장 실패는 경고만 남기고 화면은 새 언어로 전환됩니다.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::info!(
                from = self.language.code(),
                to = language.code(),
                direction = language.direction().as_str(),
                "language changed"
            );
            self.set_toast(language.display_name());
        }
        self.language = language;
        if let Err(e) = self.settings.set(language.code()) {
            tracing::warn!(error = %e, "failed to persist language");
        }
    }

    /// 임의 코드로 언어 변경 (지원하지 않는 코드는 영어)
    pub fn set_language_code(&mut self, code: &str) {
        let language = Language::from_code_or_default(code);
        if language.code() != code {
            tracing::debug!(code, "unsupported language code, using default");
        }
        self.set_language(language);
    }

    pub fn cycle_language(&mut self) {
        self.set_language(self.language.next());
    }

    /// 저장소에 기록된 코드
    #[cfg(test)]
    pub fn persisted_language(&self) -> Option<String> {
        self.settings.get()
    }

    // === Hover / Focus ===

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    /// 마우스 이동
    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.hover = HoverTarget::at(self.layout.areas(), column, row);
    }

    /// 마우스 클릭 (언어 버튼만 반응)
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.hover_at(column, row);
        if let Some(HoverTarget::Language(language)) = self.hover {
            self.set_language(language);
        }
    }

    pub fn focus_next(&mut self) {
        self.hover = Some(HoverTarget::next(self.hover));
    }

    pub fn focus_prev(&mut self) {
        self.hover = Some(HoverTarget::prev(self.hover));
    }

    /// 화면 기준 오른쪽 (RTL이면 논리 순서의 이전)
    pub fn focus_right(&mut self) {
        if self.direction().is_rtl() {
            self.focus_prev();
        } else {
            self.focus_next();
        }
    }

    /// 화면 기준 왼쪽
    pub fn focus_left(&mut self) {
        if self.direction().is_rtl() {
            self.focus_next();
        } else {
            self.focus_prev();
        }
    }

    /// 포커스된 언어 버튼 누르기
    pub fn activate_focused(&mut self) {
        if let Some(HoverTarget::Language(language)) = self.hover {
            self.set_language(language);
        }
    }

    // === Confetti ===

    /// 활성 파티클 (오래된 순)
    pub fn particles(&self) -> Vec<&Particle> {
        match &self.confetti {
            Some(stream) if !stream.is_empty() => stream.particles().collect(),
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn confetti_running(&self) -> bool {
        self.confetti.as_ref().is_some_and(ConfettiStream::is_running)
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }

    /// 컨페티 생성 일시정지/재개 (마운트 상태에서만)
    pub fn toggle_confetti(&mut self) {
        let now = self.elapsed;
        let Some(stream) = self.confetti.as_mut() else {
            return;
        };
        let key = if stream.is_running() {
            stream.cancel();
            TextKey::ToastParticlesOff
        } else {
            stream.resume(now);
            TextKey::ToastParticlesOn
        };
        let message = self.i18n().tr(key).to_string();
        self.set_toast(&message);
    }

    // === Toast ===

    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), self.elapsed));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, shown_at)) = &self.toast_message {
            if self.elapsed.saturating_sub(*shown_at) >= TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    // === Actions ===

    pub fn execute_action(&mut self, action: Action) {
        tracing::debug!(action = action.id(), "execute action");
        if let Some(language) = action.language() {
            self.set_language(language);
            return;
        }
        match action {
            Action::CycleLanguage => self.cycle_language(),
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::FocusLeft => self.focus_left(),
            Action::FocusRight => self.focus_right(),
            Action::Activate => self.activate_focused(),
            Action::ToggleConfetti => self.toggle_confetti(),
            Action::Quit => self.quit(),
            Action::SetLanguageEnglish
            | Action::SetLanguageFrench
            | Action::SetLanguageGerman
            | Action::SetLanguageArabic => {}
        }
    }
}

#[cfg(test)]
mod tests;
