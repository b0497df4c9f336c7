// Language switcher - 우측 상단 언어 전환 버튼

use crate::ui::i18n::Language;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 언어 버튼 묶음
///
/// `slots`는 `Language::ALL` 순서의 버튼 위치입니다.
/// 방향에 따른 좌우 반전은 레이아웃에서 이미 반영되어 있습니다.
pub struct LanguageSwitcher<'a> {
    slots: &'a [Rect],
    active: Language,
    hovered: Option<Language>,
    label: Option<&'a str>,
    fg: Color,
    bg: Color,
    hover_bg: Color,
    active_bg: Color,
    label_fg: Color,
}

impl<'a> LanguageSwitcher<'a> {
    pub fn new(slots: &'a [Rect], active: Language) -> Self {
        Self {
            slots,
            active,
            hovered: None,
            label: None,
            fg: Color::White,
            bg: Color::Rgb(0x3d, 0x2f, 0x52),
            hover_bg: Color::Rgb(0x57, 0x4a, 0x6b),
            active_bg: Color::Rgb(0x7e, 0x22, 0xce),
            label_fg: Color::Gray,
        }
    }

    pub fn hovered(mut self, hovered: Option<Language>) -> Self {
        self.hovered = hovered;
        self
    }

    /// 버튼 옆에 표시할 그룹 레이블 ("Language")
    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg = theme.button_fg.to_color();
        self.bg = theme.button_bg.to_color();
        self.hover_bg = theme.button_hover_bg.to_color();
        self.active_bg = theme.button_active_bg.to_color();
        self.label_fg = theme.command_bar_fg.to_color();
        self
    }

    /// 버튼 상태별 스타일
    pub fn button_style(&self, language: Language) -> Style {
        let style = Style::default().fg(self.fg);
        if language == self.active {
            style.bg(self.active_bg).add_modifier(Modifier::BOLD)
        } else if self.hovered == Some(language) {
            style.bg(self.hover_bg)
        } else {
            style.bg(self.bg)
        }
    }
}

impl Widget for LanguageSwitcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (language, slot) in Language::ALL.iter().zip(self.slots) {
            let slot = slot.intersection(area);
            if slot.is_empty() {
                continue;
            }
            let style = self.button_style(*language);
            buf.set_style(slot, style);
            let text = format!(" {} ", language.button_label());
            buf.set_stringn(slot.x, slot.y, &text, slot.width as usize, style);
        }

        // 레이블은 버튼 묶음의 왼쪽 빈칸에
        let Some(label) = self.label else {
            return;
        };
        let Some(left) = self.slots.iter().map(|s| s.x).min() else {
            return;
        };
        let width = label.width() as u16 + 1;
        if left < area.x + width {
            return;
        }
        buf.set_stringn(
            left - width,
            area.y,
            label,
            width as usize,
            Style::default()
                .fg(self.label_fg)
                .add_modifier(Modifier::ITALIC),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> Vec<Rect> {
        (0..4).map(|i| Rect::new(20 + i * 5, 0, 4, 1)).collect()
    }

    fn row_text(buf: &Buffer) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.cell((x, 0)).unwrap().symbol())
            .collect::<String>()
    }

    #[test]
    fn test_buttons_render_codes_in_slot_order() {
        let area = Rect::new(0, 0, 40, 1);
        let slots = slots();
        let mut buf = Buffer::empty(area);
        LanguageSwitcher::new(&slots, Language::English).render(area, &mut buf);
        assert_eq!(&row_text(&buf)[20..39], " EN   FR   DE   AR ");
    }

    #[test]
    fn test_active_and_hover_styles() {
        let slots = slots();
        let theme = Theme::night();
        let switcher = LanguageSwitcher::new(&slots, Language::French)
            .hovered(Some(Language::German))
            .theme(&theme);
        assert_eq!(
            switcher.button_style(Language::French).bg,
            Some(theme.button_active_bg.to_color())
        );
        assert_eq!(
            switcher.button_style(Language::German).bg,
            Some(theme.button_hover_bg.to_color())
        );
        assert_eq!(
            switcher.button_style(Language::English).bg,
            Some(theme.button_bg.to_color())
        );
    }

    #[test]
    fn test_label_left_of_buttons() {
        let area = Rect::new(0, 0, 40, 1);
        let slots = slots();
        let mut buf = Buffer::empty(area);
        LanguageSwitcher::new(&slots, Language::English)
            .label(Some("Language"))
            .render(area, &mut buf);
        assert_eq!(&row_text(&buf)[11..19], "Language");
    }
}
