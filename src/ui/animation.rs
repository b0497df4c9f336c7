// Animation primitives - 애니메이션 보조 함수
//
// 지연/지속 시간 기반 전환, 균등 간격 키프레임 보간, 색상 혼합

use ratatui::style::Color;

/// 이징 함수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOut,
    EaseInOut,
    /// 살짝 튀어나갔다 돌아오는 스프링 근사
    Spring,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Spring => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// 1회성 전환 (초 단위)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(delay: f32, duration: f32) -> Self {
        Self {
            delay,
            duration,
            easing: Easing::EaseOut,
        }
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// 선형 진행률 (0 ~ 1)
    pub fn raw_progress(&self, elapsed: f32) -> f32 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// 이징이 적용된 진행률 (Spring은 1을 약간 넘을 수 있음)
    pub fn progress(&self, elapsed: f32) -> f32 {
        self.easing.apply(self.raw_progress(elapsed))
    }
}

/// 무한 반복 애니메이션
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Looping {
    pub delay: f32,
    pub period: f32,
}

impl Looping {
    pub const fn new(delay: f32, period: f32) -> Self {
        Self { delay, period }
    }

    /// 현재 주기 내 위치 (지연 중이면 None)
    pub fn phase(&self, elapsed: f32) -> Option<f32> {
        if elapsed < self.delay || self.period <= 0.0 {
            return None;
        }
        Some(((elapsed - self.delay) % self.period) / self.period)
    }
}

/// 균등 간격 키프레임 선형 보간
pub fn keyframes(values: &[f32], progress: f32) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (values.len() - 1) as f32;
            let position = progress.clamp(0.0, 1.0) * segments;
            let index = (position.floor() as usize).min(values.len() - 2);
            let local = position - index as f32;
            lerp(values[index], values[index + 1], local)
        }
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    lerp(from as f32, to as f32, t.clamp(0.0, 1.0)).round() as u8
}

/// 두 RGB 색상 사이 보간
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            lerp_channel(r1, r2, t),
            lerp_channel(g1, g2, t),
            lerp_channel(b1, b2, t),
        ),
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// 배경 위에 불투명도 `alpha`로 전경색을 얹은 결과
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    lerp_color(bg, fg, alpha)
}
