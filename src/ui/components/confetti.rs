// Confetti layer - 아래에서 위로 솟아오르는 파티클

use crate::models::Particle;
use crate::ui::animation::{blend, keyframes};
use crate::ui::paint::cell_bg;
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use std::time::Duration;

const SCALE_FRAMES: [f32; 4] = [0.0, 1.5, 1.0, 0.5];
const OPACITY_FRAMES: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

/// 컨페티 레이어
pub struct ConfettiLayer<'a> {
    particles: &'a [&'a Particle],
    now: Duration,
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(particles: &'a [&'a Particle], now: Duration) -> Self {
        Self { particles, now }
    }

    /// 크기에 따른 문자 (너무 작으면 None)
    pub fn glyph_for_scale(scale: f32) -> Option<&'static str> {
        match scale {
            s if s >= 1.25 => Some("●"),
            s if s >= 0.75 => Some("•"),
            s if s >= 0.35 => Some("∙"),
            s if s >= 0.1 => Some("·"),
            _ => None,
        }
    }

    /// 진행률에 따른 (열, 행) 위치
    pub fn position(area: Rect, x_percent: f32, progress: f32) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let column = area.x + ((x_percent / 100.0) * (area.width - 1) as f32).round() as u16;
        // 아래 가장자리 바로 밑에서 출발해 위쪽 끝까지
        let travelled = progress * (area.height as f32 + 1.0);
        let from_bottom = travelled.floor() as u16;
        if from_bottom == 0 || from_bottom > area.height {
            return None;
        }
        let row = area.y + area.height - from_bottom;
        Some((column, row))
    }
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in self.particles {
            let Some(progress) = particle.flight_progress(self.now) else {
                continue;
            };
            let Some((x, y)) = Self::position(area, particle.x, progress) else {
                continue;
            };
            let Some(symbol) = Self::glyph_for_scale(keyframes(&SCALE_FRAMES, progress)) else {
                continue;
            };
            let opacity = keyframes(&OPACITY_FRAMES, progress);
            let color = blend(particle.color.to_color(), cell_bg(buf, x, y), opacity);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.fg = color;
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }
}
