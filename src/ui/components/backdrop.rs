// Backdrop - 배경 그라데이션과 떠다니는 도형

use crate::models::FloatingShape;
use crate::ui::animation::{keyframes, lerp_color, Looping};
use crate::ui::paint::tint_bg;
use crate::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// 좌상단 → 우하단 3색 대각선 그라데이션
pub struct GradientBackground {
    from: Color,
    via: Color,
    to: Color,
}

impl Default for GradientBackground {
    fn default() -> Self {
        Self::new(&Theme::night())
    }
}

impl GradientBackground {
    pub fn new(theme: &Theme) -> Self {
        Self {
            from: theme.bg_from.to_color(),
            via: theme.bg_via.to_color(),
            to: theme.bg_to.to_color(),
        }
    }

    /// 대각선 위치 `t` (0 ~ 1)의 색상
    pub fn color_at(&self, t: f32) -> Color {
        if t < 0.5 {
            lerp_color(self.from, self.via, t * 2.0)
        } else {
            lerp_color(self.via, self.to, (t - 0.5) * 2.0)
        }
    }
}

impl Widget for GradientBackground {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let w = area.width.saturating_sub(1).max(1) as f32;
        let h = area.height.saturating_sub(1).max(1) as f32;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let t = ((x - area.x) as f32 / w + (y - area.y) as f32 / h) / 2.0;
                let color = self.color_at(t);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.bg = color;
                }
            }
        }
    }
}

/// 떠다니는 흐릿한 원 레이어
pub struct FloatingShapes<'a> {
    shapes: &'a [FloatingShape],
    elapsed: f32,
    color: Color,
}

impl<'a> FloatingShapes<'a> {
    /// 원 크기 (셀)
    const WIDTH: u16 = 10;
    const HEIGHT: u16 = 4;
    /// 최대 불투명도에 곱하는 계수 (white/10 느낌)
    const INTENSITY: f32 = 0.18;

    pub fn new(shapes: &'a [FloatingShape], elapsed: f32) -> Self {
        Self {
            shapes,
            elapsed,
            color: Color::Rgb(255, 255, 255),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.color = theme.shape.to_color();
        self
    }

    /// 한 도형의 (세로 오프셋, 불투명도), 시작 전이면 None
    pub fn frame(shape: &FloatingShape, elapsed: f32) -> Option<(f32, f32)> {
        let phase = Looping::new(shape.delay, FloatingShape::PERIOD_SECS).phase(elapsed)?;
        let offset = keyframes(&[-1.0, 1.0, -1.0], phase);
        let opacity = keyframes(&[0.3, 0.6, 0.3], phase);
        Some((offset, opacity))
    }
}

impl Widget for FloatingShapes<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < Self::WIDTH || area.height < Self::HEIGHT {
            return;
        }
        for shape in self.shapes {
            let Some((offset, opacity)) = Self::frame(shape, self.elapsed) else {
                continue;
            };
            let x = area.x + (shape.left * (area.width - Self::WIDTH) as f32) as u16;
            let base_y = area.y as f32 + shape.top * (area.height - Self::HEIGHT) as f32;
            let y = (base_y + offset).round().max(area.y as f32) as u16;
            let alpha = opacity * Self::INTENSITY;

            // 가운데가 진하고 가장자리가 옅은 원
            for row in 0..Self::HEIGHT {
                let edge = row == 0 || row == Self::HEIGHT - 1;
                let (inset, factor) = if edge { (2, 0.5) } else { (0, 1.0) };
                let rect = Rect {
                    x: x + inset,
                    y: y + row,
                    width: Self::WIDTH - inset * 2,
                    height: 1,
                }
                .intersection(area);
                tint_bg(buf, rect, self.color, alpha * factor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::paint::cell_bg;

    #[test]
    fn test_gradient_stops() {
        let gradient = GradientBackground::new(&Theme::night());
        assert_eq!(gradient.color_at(0.0), Color::Rgb(0x58, 0x1c, 0x87));
        assert_eq!(gradient.color_at(0.5), Color::Rgb(0, 0, 0));
        assert_eq!(gradient.color_at(1.0), Color::Rgb(0x31, 0x2e, 0x81));
    }

    #[test]
    fn test_gradient_fills_corners() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        GradientBackground::new(&Theme::night()).render(area, &mut buf);
        assert_eq!(cell_bg(&buf, 0, 0), Color::Rgb(0x58, 0x1c, 0x87));
        assert_eq!(cell_bg(&buf, 19, 9), Color::Rgb(0x31, 0x2e, 0x81));
    }

    #[test]
    fn test_shape_waits_for_delay() {
        let shape = FloatingShape {
            left: 0.5,
            top: 0.5,
            delay: 1.5,
        };
        assert!(FloatingShapes::frame(&shape, 1.0).is_none());
        let (offset, opacity) = FloatingShapes::frame(&shape, 1.5).unwrap();
        assert_eq!(offset, -1.0);
        assert!((opacity - 0.3).abs() < 1e-5);
        let (offset, opacity) = FloatingShapes::frame(&shape, 3.5).unwrap();
        assert!((offset - 1.0).abs() < 1e-5);
        assert!((opacity - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_shapes_lighten_background() {
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        buf.set_style(area, ratatui::style::Style::default().bg(Color::Rgb(0, 0, 0)));
        let shapes = [FloatingShape {
            left: 0.0,
            top: 0.5,
            delay: 0.0,
        }];
        FloatingShapes::new(&shapes, 2.0).render(area, &mut buf);
        let lit = buf.content.iter().filter(|c| c.bg != Color::Rgb(0, 0, 0)).count();
        assert!(lit > 0);
    }
}
