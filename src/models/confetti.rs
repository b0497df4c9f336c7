// Confetti stream - 주기적 파티클 생성기
//
// 고정 간격(800ms)마다 5개씩 배치를 만들고, 각 배치는 생성 3000ms 후
// 앞에서부터(FIFO) 같은 개수만큼 제거됩니다.
// 모든 시각은 장면 시계(마운트 후 경과 시간) 기준입니다.

use super::particle::{ConfettiColor, Particle, ParticleId};
use std::collections::VecDeque;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(800);
pub const BATCH_SIZE: usize = 5;
pub const LIFETIME: Duration = Duration::from_millis(3000);
/// 생성 간격 하한 (0 간격이면 같은 시각에 배치가 끝없이 생김)
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
/// 최대 지연 (초, 미포함)
pub const MAX_DELAY_SECS: f32 = 0.5;

/// 생성기 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiConfig {
    pub interval: Duration,
    pub batch_size: usize,
    pub lifetime: Duration,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            interval: TICK_INTERVAL,
            batch_size: BATCH_SIZE,
            lifetime: LIFETIME,
        }
    }
}

impl ConfettiConfig {
    /// 동시에 살아있을 수 있는 최대 파티클 수
    pub fn max_alive(&self) -> usize {
        let interval = self.interval.as_millis().max(1);
        let batches = self.lifetime.as_millis().div_ceil(interval) as usize;
        batches * self.batch_size
    }
}

/// 예약된 배치 제거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRemoval {
    due: Duration,
    count: usize,
}

/// 컨페티 생성기
///
/// `start`로 간격 타이머를 획득하고 `cancel` 또는 drop으로 해제합니다.
/// 취소 후에도 이미 예약된 제거는 계속 처리되어 활성 집합이 비워집니다.
#[derive(Debug)]
pub struct ConfettiStream {
    config: ConfettiConfig,
    particles: VecDeque<Particle>,
    removals: VecDeque<PendingRemoval>,
    /// 다음 생성 시각 (None이면 타이머 해제 상태)
    next_tick: Option<Duration>,
    /// 마운트 시점 벽시계 (epoch ms)
    epoch_ms: u64,
    next_id: u64,
    rng: fastrand::Rng,
}

impl ConfettiStream {
    /// 타이머 획득: 첫 배치는 `now + interval`에 생성
    pub fn start(now: Duration) -> Self {
        Self::with_rng(ConfettiConfig::default(), fastrand::Rng::new(), now)
    }

    pub fn with_rng(mut config: ConfettiConfig, rng: fastrand::Rng, now: Duration) -> Self {
        config.interval = config.interval.max(MIN_INTERVAL);
        let epoch_ms = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        tracing::debug!(
            interval_ms = config.interval.as_millis() as u64,
            batch_size = config.batch_size,
            "confetti stream started"
        );
        Self {
            config,
            particles: VecDeque::with_capacity(config.max_alive()),
            removals: VecDeque::new(),
            next_tick: Some(now + config.interval),
            epoch_ms,
            next_id: 0,
            rng,
        }
    }

    /// 활성 파티클 (오래된 순)
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// 타이머가 살아있는지
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// 타이머 해제
    pub fn cancel(&mut self) {
        if self.next_tick.take().is_some() {
            tracing::debug!(alive = self.particles.len(), "confetti stream cancelled");
        }
    }

    /// 해제된 타이머 재획득
    pub fn resume(&mut self, now: Duration) {
        if self.next_tick.is_none() {
            self.next_tick = Some(now + self.config.interval);
            tracing::debug!("confetti stream resumed");
        }
    }

    /// 다음 생성/제거 예정 시각
    pub fn next_deadline(&self) -> Option<Duration> {
        let removal = self.removals.front().map(|r| r.due);
        match (self.next_tick, removal) {
            (Some(tick), Some(removal)) => Some(tick.min(removal)),
            (tick, removal) => tick.or(removal),
        }
    }

    /// `now`까지 예정된 생성/제거를 시간 순으로 모두 처리
    ///
    /// 같은 시각이면 제거가 생성보다 먼저입니다.
    pub fn advance_to(&mut self, now: Duration) {
        loop {
            let removal_due = self.removals.front().map(|r| r.due).filter(|due| *due <= now);
            let tick_due = self.next_tick.filter(|due| *due <= now);

            match (removal_due, tick_due) {
                (Some(removal), Some(tick)) if removal <= tick => self.expire_front(),
                (_, Some(tick)) => self.spawn_batch(tick),
                (Some(_), None) => self.expire_front(),
                (None, None) => break,
            }
        }
    }

    fn spawn_batch(&mut self, at: Duration) {
        let stamp = self.epoch_ms + at.as_millis() as u64;
        let first = stamp.max(self.next_id);

        for offset in 0..self.config.batch_size {
            let particle = Particle {
                id: ParticleId(first + offset as u64),
                x: self.rng.f32() * 100.0,
                color: ConfettiColor::PALETTE[self.rng.usize(..ConfettiColor::PALETTE.len())],
                delay: self.rng.f32() * MAX_DELAY_SECS,
                born_at: at,
            };
            self.particles.push_back(particle);
        }
        self.next_id = first + self.config.batch_size as u64;

        self.removals.push_back(PendingRemoval {
            due: at + self.config.lifetime,
            count: self.config.batch_size,
        });
        self.next_tick = Some(at + self.config.interval);

        tracing::trace!(
            at_ms = at.as_millis() as u64,
            alive = self.particles.len(),
            "confetti batch spawned"
        );
    }

    fn expire_front(&mut self) {
        let Some(removal) = self.removals.pop_front() else {
            return;
        };
        let count = removal.count.min(self.particles.len());
        let oldest = self.particles.front().map(|p| p.id.0);
        self.particles.drain(..count);
        tracing::trace!(
            at_ms = removal.due.as_millis() as u64,
            oldest = ?oldest,
            removed = count,
            alive = self.particles.len(),
            "confetti batch expired"
        );
    }
}
