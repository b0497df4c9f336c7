/// 배경에 떠다니는 흐릿한 원
///
/// 위치는 마운트 시 한 번만 정해집니다 (영역 대비 비율).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    /// 가로 위치 (0 ~ 1)
    pub left: f32,
    /// 세로 위치 (0 ~ 1)
    pub top: f32,
    /// 반복 시작 지연 (초)
    pub delay: f32,
}

impl FloatingShape {
    pub const COUNT: usize = 8;
    /// 도형 사이 시작 지연 간격 (초)
    pub const STAGGER_SECS: f32 = 0.5;
    /// 한 주기 (초)
    pub const PERIOD_SECS: f32 = 4.0;

    /// 무작위 위치에 도형 배치
    pub fn scatter(rng: &mut fastrand::Rng) -> Vec<FloatingShape> {
        (0..Self::COUNT)
            .map(|i| FloatingShape {
                left: rng.f32(),
                top: rng.f32(),
                delay: i as f32 * Self::STAGGER_SECS,
            })
            .collect()
    }
}
