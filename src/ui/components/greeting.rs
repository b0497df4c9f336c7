// Greeting - 달/별 머리장식, 제목, 인사 메시지

use super::glyph::Glyph;
use crate::ui::animation::{Easing, Transition};
use crate::ui::paint::{clamp_lines, put_centered, put_faded, wrap_words};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub const HEADER_TRANSITION: Transition = Transition::new(0.0, 0.8).easing(Easing::Spring);
pub const TITLE_TRANSITION: Transition = Transition::new(0.3, 0.8);
pub const MESSAGE_TRANSITION: Transition = Transition::new(0.8, 0.8).easing(Easing::Linear);

/// 별 + 달 머리장식 (스프링 등장)
pub struct Header {
    elapsed: f32,
    star_color: Color,
    moon_color: Color,
}

impl Header {
    pub fn new(elapsed: f32) -> Self {
        Self {
            elapsed,
            star_color: Color::Rgb(0xfd, 0xe0, 0x47),
            moon_color: Color::Rgb(0xfe, 0xf0, 0x8a),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.star_color = theme.star.to_color();
        self.moon_color = theme.moon.to_color();
        self
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scale = HEADER_TRANSITION.progress(self.elapsed);
        if scale < 0.15 || area.height == 0 {
            return;
        }
        // 회전(-180° → 0°) 전반부에는 뒤집힌 달
        let turned = HEADER_TRANSITION.raw_progress(self.elapsed) < 0.5;
        let (star, moon) = if scale < 0.6 || turned {
            (Glyph::Star.seed_symbol(), Glyph::Moon.seed_symbol())
        } else {
            (Glyph::Star.symbol(), Glyph::Moon.symbol())
        };
        let modifier = if scale > 1.0 {
            Modifier::BOLD | Modifier::UNDERLINED
        } else {
            Modifier::BOLD
        };

        let width = star.width() as u16 + 1 + moon.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let alpha = scale.min(1.0);
        let after_star = put_faded(buf, x, area.y, star, area.width, self.star_color, alpha, modifier);
        put_faded(
            buf,
            after_star + 1,
            area.y,
            moon,
            area.width.saturating_sub(after_star + 1 - area.x),
            self.moon_color,
            alpha,
            modifier,
        );
    }
}

/// 큰 제목 (페이드 + 위에서 내려옴)
pub struct Title<'a> {
    text: &'a str,
    elapsed: f32,
    color: Color,
}

impl<'a> Title<'a> {
    pub fn new(text: &'a str, elapsed: f32) -> Self {
        Self {
            text,
            elapsed,
            color: Color::White,
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.color = theme.title.to_color();
        self
    }
}

impl Widget for Title<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let progress = TITLE_TRANSITION.progress(self.elapsed);
        if progress <= 0.0 || area.height == 0 {
            return;
        }
        // 진행 전반부는 한 줄 위에서 시작
        let y = if progress < 0.5 && area.y > 0 {
            area.y - 1
        } else {
            area.y
        };
        put_centered(buf, area, y, self.text, self.color, progress, Modifier::BOLD);
    }
}

/// 인사 메시지 (페이드 인, 영역 높이만큼 줄바꿈)
pub struct Message<'a> {
    text: &'a str,
    elapsed: f32,
    color: Color,
}

impl<'a> Message<'a> {
    pub fn new(text: &'a str, elapsed: f32) -> Self {
        Self {
            text,
            elapsed,
            color: Color::Gray,
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.color = theme.message.to_color();
        self
    }
}

impl Widget for Message<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let alpha = MESSAGE_TRANSITION.progress(self.elapsed);
        if alpha <= 0.0 {
            return;
        }
        let width = area.width as usize;
        let lines = clamp_lines(wrap_words(self.text, width), area.height as usize, width);
        for (i, line) in lines.iter().enumerate() {
            put_centered(
                buf,
                area,
                area.y + i as u16,
                line,
                self.color,
                alpha,
                Modifier::empty(),
            );
        }
    }
}
