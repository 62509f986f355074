// Synthetic gauge generator merged with status feed counters

use crate::feed::{StatusSource, now_ms};
use crate::models::{Snapshot, SyntheticMetrics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest CPU/RAM reading the generator emits.
pub const GAUGE_FLOOR: f64 = 5.0;
/// Lowest disk reading the generator emits.
pub const DISK_FLOOR: f64 = 1.0;
pub const GAUGE_CEIL: f64 = 100.0;

const DISK_PERIOD_MS: f64 = 7000.0;
const DISK_OFFSET: f64 = 40.0;
const DISK_AMPLITUDE: f64 = 40.0;

/// CPU and RAM share a random base so they move together; disk drifts on a
/// slow sine of wall-clock time.
pub fn synthetic_metrics<R: Rng>(rng: &mut R, now_ms: u64) -> SyntheticMetrics {
    let base: f64 = rng.random_range(10.0..90.0);
    let cpu = (base + rng.random_range(-15.0f64..15.0)).clamp(GAUGE_FLOOR, GAUGE_CEIL);
    let ram = (base * 0.6 + rng.random_range(-10.0f64..10.0)).clamp(GAUGE_FLOOR, GAUGE_CEIL);
    SyntheticMetrics {
        cpu,
        ram,
        disk: disk_level(now_ms),
    }
}

pub fn disk_level(now_ms: u64) -> f64 {
    let phase = now_ms as f64 / DISK_PERIOD_MS;
    (DISK_OFFSET + phase.sin() * DISK_AMPLITUDE).clamp(DISK_FLOOR, GAUGE_CEIL)
}

pub struct Sampler<S, R = StdRng> {
    source: S,
    rng: R,
}

impl<S: StatusSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }
}

impl<S: StatusSource, R: Rng + Send> Sampler<S, R> {
    pub fn with_rng(source: S, rng: R) -> Self {
        Self { source, rng }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Synthetic part only; does not touch the feed.
    pub fn synthetic_at(&mut self, now_ms: u64) -> SyntheticMetrics {
        synthetic_metrics(&mut self.rng, now_ms)
    }

    /// One full snapshot stamped with the current wall clock.
    pub async fn sample(&mut self) -> Snapshot {
        self.sample_at(now_ms()).await
    }

    /// The gauges are drawn before the feed request, so a slow feed only
    /// delays the counters.
    pub async fn sample_at(&mut self, now_ms: u64) -> Snapshot {
        let metrics = self.synthetic_at(now_ms);
        let counters = self.source.fetch().await;
        Snapshot::merge(now_ms, metrics, counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::StaticStatus;
    use crate::models::StatusCounters;

    #[test]
    fn gauges_stay_within_floors_across_seeds() {
        for seed in 0..500u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for step in 0..20u64 {
                let m = synthetic_metrics(&mut rng, seed * 977 + step * 1800);
                assert!((GAUGE_FLOOR..=GAUGE_CEIL).contains(&m.cpu), "cpu {}", m.cpu);
                assert!((GAUGE_FLOOR..=GAUGE_CEIL).contains(&m.ram), "ram {}", m.ram);
                assert!((DISK_FLOOR..=GAUGE_CEIL).contains(&m.disk), "disk {}", m.disk);
            }
        }
    }

    #[test]
    fn disk_follows_sine_drift() {
        assert!((disk_level(0) - 40.0).abs() < 1e-9);
        let peak = (std::f64::consts::FRAC_PI_2 * 7000.0) as u64;
        assert!((disk_level(peak) - 80.0).abs() < 1e-3);
        let trough = (3.0 * std::f64::consts::FRAC_PI_2 * 7000.0) as u64;
        assert!((disk_level(trough) - DISK_FLOOR).abs() < 1e-9);
    }

    #[tokio::test]
    async fn sample_merges_counters() {
        let counters = StatusCounters {
            users: 10,
            guilds: 2,
            uptime: 45,
            commands_total: 9,
            commands_ok: 8,
            commands_error: 1,
        };
        let mut sampler = Sampler::with_rng(StaticStatus(counters), StdRng::seed_from_u64(7));
        let s = sampler.sample_at(1_000).await;
        assert_eq!(s.timestamp, 1_000);
        assert_eq!(s.users, 10);
        assert_eq!(s.guilds, 2);
        assert_eq!(s.uptime, 45);
        assert_eq!(s.commands_error, 1);
        assert!((s.disk - disk_level(1_000)).abs() < 1e-12);
    }
}
