// Value card - 아이콘/제목/설명으로 이루어진 가치 카드

use super::glyph::Glyph;
use crate::ui::animation::{blend, Easing, Transition};
use crate::ui::i18n::TextKey;
use crate::ui::paint::{cell_bg, clamp_lines, put_centered, tint_bg, wrap_words};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    symbols::border,
    widgets::Widget,
};

/// 카드 그리드 전체 등장
pub const CARDS_TRANSITION: Transition = Transition::new(1.5, 1.0).easing(Easing::EaseInOut);

/// 카드 배경 반투명도 (white/10)
const CARD_TINT: f32 = 0.10;
const CARD_TINT_HOVER: f32 = 0.16;

/// 카드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Faith,
    Quran,
    Prayer,
    Respect,
}

impl CardKind {
    /// 논리 순서
    pub const ALL: [CardKind; 4] = [
        CardKind::Faith,
        CardKind::Quran,
        CardKind::Prayer,
        CardKind::Respect,
    ];

    pub fn glyph(self) -> Glyph {
        match self {
            CardKind::Faith => Glyph::Moon,
            CardKind::Quran => Glyph::BookOpen,
            CardKind::Prayer => Glyph::Sparkles,
            CardKind::Respect => Glyph::HandHeart,
        }
    }

    pub fn title_key(self) -> TextKey {
        match self {
            CardKind::Faith => TextKey::CardFaithTitle,
            CardKind::Quran => TextKey::CardQuranTitle,
            CardKind::Prayer => TextKey::CardPrayerTitle,
            CardKind::Respect => TextKey::CardRespectTitle,
        }
    }

    pub fn description_key(self) -> TextKey {
        match self {
            CardKind::Faith => TextKey::CardFaithDesc,
            CardKind::Quran => TextKey::CardQuranDesc,
            CardKind::Prayer => TextKey::CardPrayerDesc,
            CardKind::Respect => TextKey::CardRespectDesc,
        }
    }

    fn icon_color(self, theme: &Theme) -> Color {
        match self {
            CardKind::Faith => theme.card_icon_faith.to_color(),
            CardKind::Quran => theme.card_icon_quran.to_color(),
            CardKind::Prayer => theme.card_icon_prayer.to_color(),
            CardKind::Respect => theme.card_icon_respect.to_color(),
        }
    }
}

/// 가치 카드 컴포넌트
pub struct ValueCard<'a> {
    kind: CardKind,
    title: &'a str,
    description: &'a str,
    elapsed: f32,
    hovered: bool,
    icon_color: Color,
    tint: Color,
    border_color: Color,
    border_hover_color: Color,
    title_color: Color,
    desc_color: Color,
}

impl<'a> ValueCard<'a> {
    pub fn new(kind: CardKind, title: &'a str, description: &'a str, elapsed: f32) -> Self {
        Self {
            kind,
            title,
            description,
            elapsed,
            hovered: false,
            icon_color: Color::Yellow,
            tint: Color::Rgb(255, 255, 255),
            border_color: Color::DarkGray,
            border_hover_color: Color::White,
            title_color: Color::White,
            desc_color: Color::Gray,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.icon_color = self.kind.icon_color(theme);
        self.tint = theme.card_bg.to_color();
        self.border_color = theme.card_border.to_color();
        self.border_hover_color = theme.card_border_hover.to_color();
        self.title_color = theme.card_title.to_color();
        self.desc_color = theme.card_desc.to_color();
        self
    }

    /// 호버 시 좌우로 한 칸씩 넓힘 (확대 효과)
    pub fn frame_area(&self, slot: Rect, bounds: Rect) -> Rect {
        if !self.hovered {
            return slot;
        }
        let x = slot.x.saturating_sub(1).max(bounds.x);
        let right = (slot.x + slot.width + 1).min(bounds.x + bounds.width);
        Rect {
            x,
            y: slot.y,
            width: right - x,
            height: slot.height,
        }
    }

    fn draw_border(&self, area: Rect, buf: &mut Buffer, color: Color, alpha: f32) {
        let set = if self.hovered {
            border::THICK
        } else {
            border::ROUNDED
        };
        let (left, right) = (area.left(), area.right() - 1);
        let (top, bottom) = (area.top(), area.bottom() - 1);
        for y in top..=bottom {
            for x in left..=right {
                let symbol = match (x == left, x == right, y == top, y == bottom) {
                    (true, _, true, _) => set.top_left,
                    (_, true, true, _) => set.top_right,
                    (true, _, _, true) => set.bottom_left,
                    (_, true, _, true) => set.bottom_right,
                    (_, _, true, _) => set.horizontal_top,
                    (_, _, _, true) => set.horizontal_bottom,
                    (true, _, _, _) => set.vertical_left,
                    (_, true, _, _) => set.vertical_right,
                    _ => continue,
                };
                let bg = cell_bg(buf, x, y);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.fg = blend(color, bg, alpha);
                }
            }
        }
    }
}

impl Widget for ValueCard<'_> {
    fn render(self, slot: Rect, buf: &mut Buffer) {
        let progress = CARDS_TRANSITION.progress(self.elapsed);
        if progress <= 0.0 {
            return;
        }
        // 등장 전반부에는 한 줄 아래에서 올라옴
        let lift = if progress < 0.5 { 1 } else { 0 };
        let slot = Rect {
            y: slot.y + lift,
            height: slot.height.saturating_sub(lift),
            ..slot
        };
        let area = self.frame_area(slot, buf.area).intersection(buf.area);
        if area.width < 4 || area.height < 3 {
            return;
        }

        let tint = if self.hovered {
            CARD_TINT_HOVER
        } else {
            CARD_TINT
        };
        tint_bg(buf, area, self.tint, tint * progress);

        let border_color = if self.hovered {
            self.border_hover_color
        } else {
            self.border_color
        };
        self.draw_border(area, buf, border_color, progress);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width - 2,
            height: area.height - 2,
        };
        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        put_centered(
            buf,
            inner,
            y,
            self.kind.glyph().symbol(),
            self.icon_color,
            progress,
            Modifier::BOLD,
        );
        y += 1;

        if y < bottom {
            put_centered(
                buf,
                inner,
                y,
                self.title,
                self.title_color,
                progress,
                Modifier::BOLD,
            );
            y += 1;
        }

        let width = inner.width.saturating_sub(2) as usize;
        let max_lines = bottom.saturating_sub(y) as usize;
        let lines = clamp_lines(wrap_words(self.description, width), max_lines, width);
        for line in lines {
            put_centered(buf, inner, y, &line, self.desc_color, progress, Modifier::empty());
            y += 1;
        }
    }
}
