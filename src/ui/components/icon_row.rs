// Icon row - 반짝이/별/하트 아이콘 줄

use super::glyph::Glyph;
use crate::ui::animation::{blend, Easing, Transition};
use crate::ui::paint::put_centered;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};

/// 아이콘 줄 정의: (아이콘, 등장 지연)
pub const ROW_ICONS: [(Glyph, f32); 3] = [
    (Glyph::Sparkles, 0.9),
    (Glyph::Star, 1.1),
    (Glyph::Heart, 1.3),
];

const POP_DURATION: f32 = 0.6;

/// 호버 시 밝게 섞는 비율
const HOVER_LIFT: f32 = 0.35;

/// 등장 애니메이션 + 호버 강조 아이콘
pub struct AnimatedIcon {
    glyph: Glyph,
    transition: Transition,
    elapsed: f32,
    hovered: bool,
    color: Color,
}

impl AnimatedIcon {
    pub fn new(glyph: Glyph, delay: f32, elapsed: f32) -> Self {
        Self {
            glyph,
            transition: Transition::new(delay, POP_DURATION).easing(Easing::Spring),
            elapsed,
            hovered: false,
            color: Color::Yellow,
        }
    }

    /// `ROW_ICONS`의 `index`번째 아이콘
    pub fn from_row(index: usize, elapsed: f32) -> Self {
        let (glyph, delay) = ROW_ICONS[index % ROW_ICONS.len()];
        Self::new(glyph, delay, elapsed)
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.color = match self.glyph {
            Glyph::Sparkles => theme.icon_sparkles.to_color(),
            Glyph::Star => theme.icon_star.to_color(),
            _ => theme.icon_heart.to_color(),
        };
        self
    }

    /// 현재 표시 문자열 (아직 안 보이면 None)
    pub fn display(&self) -> Option<String> {
        let scale = self.transition.progress(self.elapsed);
        if scale < 0.1 {
            return None;
        }
        let symbol = if scale < 0.5 {
            self.glyph.seed_symbol()
        } else {
            self.glyph.symbol()
        };
        // 호버 = 확대 상태
        Some(if self.hovered {
            format!("·{}·", symbol)
        } else {
            symbol.to_string()
        })
    }
}

impl Widget for AnimatedIcon {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.display() else {
            return;
        };
        let alpha = self.transition.raw_progress(self.elapsed);
        let (color, modifier) = if self.hovered {
            (
                blend(Color::Rgb(255, 255, 255), self.color, HOVER_LIFT),
                Modifier::BOLD,
            )
        } else {
            (self.color, Modifier::empty())
        };
        put_centered(buf, area, area.y, &text, color, alpha, modifier);
    }
}
