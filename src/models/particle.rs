use ratatui::style::Color;
use std::time::Duration;

/// 파티클 식별자 (단조 증가)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// 컨페티 팔레트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiColor {
    Purple,
    Emerald,
    Pink,
    Yellow,
}

impl ConfettiColor {
    pub const PALETTE: [ConfettiColor; 4] = [
        ConfettiColor::Purple,
        ConfettiColor::Emerald,
        ConfettiColor::Pink,
        ConfettiColor::Yellow,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ConfettiColor::Purple => (0x93, 0x33, 0xEA),
            ConfettiColor::Emerald => (0x10, 0xB9, 0x81),
            ConfettiColor::Pink => (0xF4, 0x72, 0xB6),
            ConfettiColor::Yellow => (0xFA, 0xCC, 0x15),
        }
    }

    pub fn to_color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// 컨페티 파티클 하나
///
/// 생성 후 변경되지 않습니다. `born_at`은 장면 시계 기준 생성 시각으로
/// 비행 애니메이션 계산에만 사용됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// 가로 위치 (0 ~ 100 %)
    pub x: f32,
    pub color: ConfettiColor,
    /// 애니메이션 시작 지연 (초, 0 ~ 0.5)
    pub delay: f32,
    pub born_at: Duration,
}

impl Particle {
    /// 비행 시간 (초)
    pub const FLIGHT_SECS: f32 = 2.5;

    /// 장면 시각 `now`에서의 비행 진행률 (지연 전 None, 종료 후 None)
    pub fn flight_progress(&self, now: Duration) -> Option<f32> {
        let age = now.checked_sub(self.born_at)?.as_secs_f32() - self.delay;
        if age < 0.0 {
            return None;
        }
        let progress = age / Self::FLIGHT_SECS;
        (progress < 1.0).then_some(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(delay: f32, born_ms: u64) -> Particle {
        Particle {
            id: ParticleId(1),
            x: 50.0,
            color: ConfettiColor::Pink,
            delay,
            born_at: Duration::from_millis(born_ms),
        }
    }

    #[test]
    fn test_palette_colors() {
        assert_eq!(ConfettiColor::Purple.to_color(), Color::Rgb(147, 51, 234));
        assert_eq!(ConfettiColor::Yellow.to_color(), Color::Rgb(0xFA, 0xCC, 0x15));
        assert_eq!(ConfettiColor::PALETTE.len(), 4);
    }

    #[test]
    fn test_flight_progress_respects_delay() {
        let p = particle(0.5, 1000);
        assert_eq!(p.flight_progress(Duration::from_millis(900)), None);
        assert_eq!(p.flight_progress(Duration::from_millis(1200)), None);
        let mid = p.flight_progress(Duration::from_millis(2750)).unwrap();
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(p.flight_progress(Duration::from_millis(4000)), None);
    }
}
