// Command bar component - 하단 커맨드 바 컴포넌트
//
// 단축키 안내(왼쪽)와 토스트 메시지(오른쪽) 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 커맨드 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// 단축키 (1-4, l, p, ...)
    pub key: String,
    /// 현재 언어의 레이블
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar<'a> {
    commands: Vec<CommandItem>,
    toast: Option<&'a str>,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl<'a> CommandBar<'a> {
    pub fn new(commands: Vec<CommandItem>) -> Self {
        Self {
            commands,
            toast: None,
            key_fg_color: Color::Rgb(0xfd, 0xe0, 0x47),
            label_fg_color: Color::Rgb(0xa5, 0x9f, 0xb3),
        }
    }

    /// 오른쪽 토스트 메시지
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경은 그라데이션을 그대로 둠
        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            spans.push(Span::styled(cmd.key.as_str(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.as_str(), label_style));
            if i < self.commands.len() - 1 {
                spans.push(Span::raw("  "));
            }
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(toast) = self.toast {
            let width = (toast.width() as u16 + 2).min(area.width);
            let toast_area = Rect {
                x: area.x + area.width - width,
                width,
                ..area
            };
            buf.set_style(toast_area, Style::default().bg(self.key_fg_color));
            buf.set_stringn(
                toast_area.x + 1,
                toast_area.y,
                toast,
                width.saturating_sub(1) as usize,
                Style::default()
                    .fg(Color::Black)
                    .bg(self.key_fg_color)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.cell((x, 0)).unwrap().symbol())
            .collect::<String>()
    }

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("p", "Confetti");
        assert_eq!(item.key, "p");
        assert_eq!(item.label, "Confetti");
    }

    #[test]
    fn test_render_items_and_toast() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new(vec![
            CommandItem::new("1-4", "Lang"),
            CommandItem::new("q", "Quit"),
        ])
        .toast(Some("Confetti off"))
        .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.starts_with(" 1-4:Lang  q:Quit"));
        // 토스트는 양쪽 한 칸 여백
        assert!(text.ends_with(" Confetti off "));
    }
}
