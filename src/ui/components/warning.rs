// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시되는 경고 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen<'a> {
    i18n: I18n<'a>,
    /// 현재 터미널 크기
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    /// 현재 크기 강조
    error_color: Color,
    /// 요구 크기 강조
    success_color: Color,
}

impl<'a> WarningScreen<'a> {
    pub fn new(i18n: I18n<'a>) -> Self {
        Self {
            i18n,
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Black,
            fg_color: Color::White,
            error_color: Color::Red,
            success_color: Color::Green,
        }
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_via.to_color();
        self.fg_color = theme.title.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self
    }
}

impl Widget for WarningScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let emphasis = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let plain = Style::default().fg(self.fg_color);

        let lines = vec![
            Line::from(Span::styled("⚠", emphasis(self.warning_color))),
            Line::from(""),
            Line::from(Span::styled(
                self.i18n.tr(TextKey::WarnTitle),
                emphasis(self.warning_color),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(self.i18n.tr(TextKey::WarnCurrent), plain),
                Span::raw(" "),
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    emphasis(self.error_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(self.i18n.tr(TextKey::WarnRequired), plain),
                Span::raw(" "),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    emphasis(self.success_color),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.i18n.tr(TextKey::WarnHint),
                plain.add_modifier(Modifier::DIM),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::{Language, Localizer};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|pos| buf.cell(pos).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_warning_screen_creation() {
        let localizer = Localizer::embedded().unwrap();
        let screen = WarningScreen::new(I18n::new(&localizer, Language::English)).current_size(30, 10);
        assert_eq!(screen.current_size, (30, 10));
    }

    #[test]
    fn test_warning_shows_sizes() {
        let localizer = Localizer::embedded().unwrap();
        let area = Rect::new(0, 0, 36, 12);
        let mut buf = Buffer::empty(area);
        WarningScreen::new(I18n::new(&localizer, Language::English))
            .current_size(36, 12)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Terminal Too Small"));
        assert!(text.contains("36x12"));
        assert!(text.contains("40x20"));
    }
}
