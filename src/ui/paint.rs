// Buffer painting helpers - 버퍼 그리기 보조 함수
//
// 반투명 효과는 이미 칠해진 셀 배경색과 섞어서 표현합니다.

use crate::ui::animation::blend;
use crate::ui::layout::hit;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 셀의 현재 배경색 (영역 밖이면 Reset)
pub fn cell_bg(buf: &Buffer, x: u16, y: u16) -> Color {
    buf.cell((x, y)).map(|cell| cell.bg).unwrap_or(Color::Reset)
}

/// 셀 배경을 `color`로 `alpha`만큼 덧칠
pub fn tint_bg(buf: &mut Buffer, area: Rect, color: Color, alpha: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.bg = blend(color, cell.bg, alpha);
            }
        }
    }
}

/// 문자열 출력 후 전경색을 배경과 `alpha`로 혼합
///
/// 반환값은 출력이 끝난 x 좌표입니다.
#[allow(clippy::too_many_arguments)]
pub fn put_faded(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    max_width: u16,
    fg: Color,
    alpha: f32,
    modifier: Modifier,
) -> u16 {
    if alpha <= 0.0 || !hit(buf.area, x, y) {
        return x;
    }
    let (end_x, _) = buf.set_stringn(
        x,
        y,
        text,
        max_width as usize,
        Style::default().add_modifier(modifier),
    );
    for cx in x..end_x {
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.fg = blend(fg, cell.bg, alpha);
        }
    }
    end_x
}

/// 영역 안 가운데 정렬 출력
pub fn put_centered(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    text: &str,
    fg: Color,
    alpha: f32,
    modifier: Modifier,
) {
    let width = (text.width() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    put_faded(buf, x, y, text, area.width, fg, alpha, modifier);
}

/// 표시 너비 기준 단어 단위 줄바꿈
///
/// 한 단어가 너비를 넘으면 문자 단위로 자릅니다.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_width + cw > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += cw;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// 최대 줄 수로 자르고 마지막 줄에 말줄임표
pub fn clamp_lines(mut lines: Vec<String>, max_lines: usize, width: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        while !last.is_empty() && last.width() + 1 > width {
            last.pop();
        }
        last.push('…');
    }
    lines
}
