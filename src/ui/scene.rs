// Scene - 카드 전체 화면 합성
//
// 뒤에서 앞으로: 그라데이션 → 컨페티 → 배경 도형 → 머리장식/제목/메시지
// → 아이콘 줄 → 가치 카드 → 언어 버튼 → 커맨드 바

use crate::models::{FloatingShape, Particle};
use crate::ui::components::{
    AnimatedIcon, CardKind, CommandBar, CommandItem, ConfettiLayer, FloatingShapes,
    GradientBackground, Header, LanguageSwitcher, Message, Title, ValueCard, WarningScreen,
    ROW_ICONS,
};
use crate::ui::i18n::{I18n, Language, TextKey};
use crate::ui::layout::{hit, LayoutAreas, LayoutManager, LayoutMode};
use crate::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::time::Duration;

/// 마우스 호버 / 키보드 포커스 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Language(Language),
    Icon(usize),
    Card(usize),
}

impl HoverTarget {
    /// 포커스 순환 순서 (논리 순서)
    pub const ORDER: [HoverTarget; 11] = [
        HoverTarget::Language(Language::English),
        HoverTarget::Language(Language::French),
        HoverTarget::Language(Language::German),
        HoverTarget::Language(Language::Arabic),
        HoverTarget::Icon(0),
        HoverTarget::Icon(1),
        HoverTarget::Icon(2),
        HoverTarget::Card(0),
        HoverTarget::Card(1),
        HoverTarget::Card(2),
        HoverTarget::Card(3),
    ];

    fn position(self) -> Option<usize> {
        Self::ORDER.iter().position(|t| *t == self)
    }

    /// 다음 포커스 (없으면 첫 항목)
    pub fn next(current: Option<Self>) -> Self {
        match current.and_then(Self::position) {
            Some(i) => Self::ORDER[(i + 1) % Self::ORDER.len()],
            None => Self::ORDER[0],
        }
    }

    /// 이전 포커스 (없으면 마지막 항목)
    pub fn prev(current: Option<Self>) -> Self {
        let len = Self::ORDER.len();
        match current.and_then(Self::position) {
            Some(i) => Self::ORDER[(i + len - 1) % len],
            None => Self::ORDER[len - 1],
        }
    }

    /// 화면 좌표에 있는 대상
    pub fn at(areas: &LayoutAreas, column: u16, row: u16) -> Option<Self> {
        if let Some(i) = areas
            .language_buttons
            .iter()
            .position(|r| hit(*r, column, row))
        {
            return Language::ALL.get(i).map(|l| HoverTarget::Language(*l));
        }
        if let Some(i) = areas.icons.iter().position(|r| hit(*r, column, row)) {
            return Some(HoverTarget::Icon(i));
        }
        areas
            .cards
            .iter()
            .position(|r| hit(*r, column, row))
            .map(HoverTarget::Card)
    }
}

/// 한 프레임 그리기에 필요한 상태 묶음
pub struct Scene<'a> {
    i18n: I18n<'a>,
    layout: &'a LayoutManager,
    theme: &'a Theme,
    now: Duration,
    particles: &'a [&'a Particle],
    shapes: &'a [FloatingShape],
    hover: Option<HoverTarget>,
    commands: Vec<CommandItem>,
    toast: Option<&'a str>,
}

impl<'a> Scene<'a> {
    pub fn new(i18n: I18n<'a>, layout: &'a LayoutManager, theme: &'a Theme, now: Duration) -> Self {
        Self {
            i18n,
            layout,
            theme,
            now,
            particles: &[],
            shapes: &[],
            hover: None,
            commands: Vec::new(),
            toast: None,
        }
    }

    pub fn particles(mut self, particles: &'a [&'a Particle]) -> Self {
        self.particles = particles;
        self
    }

    pub fn shapes(mut self, shapes: &'a [FloatingShape]) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn hover(mut self, hover: Option<HoverTarget>) -> Self {
        self.hover = hover;
        self
    }

    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    fn render_card_view(self, area: Rect, buf: &mut Buffer) {
        let areas = self.layout.areas();
        let elapsed = self.now.as_secs_f32();
        let theme = self.theme;

        GradientBackground::new(theme).render(area, buf);
        ConfettiLayer::new(self.particles, self.now).render(areas.backdrop, buf);
        FloatingShapes::new(self.shapes, elapsed)
            .theme(theme)
            .render(areas.backdrop, buf);

        Header::new(elapsed).theme(theme).render(areas.header, buf);
        Title::new(self.i18n.tr(TextKey::Title), elapsed)
            .theme(theme)
            .render(areas.title, buf);
        Message::new(self.i18n.tr(TextKey::Message), elapsed)
            .theme(theme)
            .render(areas.message, buf);

        for (i, slot) in areas.icons.iter().enumerate().take(ROW_ICONS.len()) {
            AnimatedIcon::from_row(i, elapsed)
                .hovered(self.hover == Some(HoverTarget::Icon(i)))
                .theme(theme)
                .render(*slot, buf);
        }

        // 호버된 카드는 넓어지므로 마지막에 그림
        let hovered_card = match self.hover {
            Some(HoverTarget::Card(i)) => Some(i),
            _ => None,
        };
        let order = (0..CardKind::ALL.len())
            .filter(|i| Some(*i) != hovered_card)
            .chain(hovered_card);
        for i in order {
            let (Some(kind), Some(slot)) = (CardKind::ALL.get(i), areas.cards.get(i)) else {
                continue;
            };
            ValueCard::new(
                *kind,
                self.i18n.tr(kind.title_key()),
                self.i18n.tr(kind.description_key()),
                elapsed,
            )
            .hovered(hovered_card == Some(i))
            .theme(theme)
            .render(*slot, buf);
        }

        let hovered_language = match self.hover {
            Some(HoverTarget::Language(language)) => Some(language),
            _ => None,
        };
        let top_bar = Rect {
            height: 1,
            ..area
        };
        LanguageSwitcher::new(&areas.language_buttons, self.i18n.language())
            .hovered(hovered_language)
            .label(hovered_language.map(|_| self.i18n.tr(TextKey::SwitcherLabel)))
            .theme(theme)
            .render(top_bar, buf);

        CommandBar::new(self.commands)
            .toast(self.toast)
            .theme(theme)
            .render(areas.command_bar, buf);
    }
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.layout.mode() {
            LayoutMode::TooSmall => {
                let (width, height) = self.layout.terminal_size();
                WarningScreen::new(self.i18n)
                    .current_size(width, height)
                    .theme(self.theme)
                    .render(self.layout.areas().warning, buf);
            }
            LayoutMode::Card { .. } => self.render_card_view(area, buf),
        }
    }
}
