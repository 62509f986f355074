// Dashboard controller: owns the sampler, history and view for one tick cycle

use crate::feed::StatusSource;
use crate::history::HistoryBuffer;
use crate::models::Snapshot;
use crate::render::{DashboardView, render};
use crate::sampler::Sampler;
use rand::Rng;
use rand::rngs::StdRng;

pub struct Dashboard<S, V, R = StdRng> {
    sampler: Sampler<S, R>,
    history: HistoryBuffer,
    view: V,
}

impl<S, V, R> Dashboard<S, V, R>
where
    S: StatusSource,
    V: DashboardView + Send,
    R: Rng + Send,
{
    pub fn new(sampler: Sampler<S, R>, history: HistoryBuffer, view: V) -> Self {
        Self {
            sampler,
            history,
            view,
        }
    }

    /// sample -> push -> render, in that order.
    pub async fn tick(&mut self) -> Snapshot {
        let snapshot = self.sampler.sample().await;
        self.apply(&snapshot);
        snapshot
    }

    /// Same as `tick` with a caller-supplied clock.
    pub async fn tick_at(&mut self, now_ms: u64) -> Snapshot {
        let snapshot = self.sampler.sample_at(now_ms).await;
        self.apply(&snapshot);
        snapshot
    }

    fn apply(&mut self, snapshot: &Snapshot) {
        self.history.push(snapshot.cpu, snapshot.ram);
        render(&mut self.view, snapshot, &self.history.snapshot());
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn sampler(&self) -> &Sampler<S, R> {
        &self.sampler
    }
}
