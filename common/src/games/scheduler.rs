use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Owns at most one periodic timer. Starting while running and stopping while
/// stopped are no-ops, so two timers can never drive the same session.
pub struct TickScheduler {
    interval: Option<Interval>,
    period: Duration,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: None,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// First tick fires one full period from now.
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Cancels the current timer and, if it was running, starts a new one at `period`.
    pub fn reschedule(&mut self, period: Duration) {
        let was_running = self.is_running();
        self.stop();
        self.period = period;
        if was_running {
            self.start();
        }
    }

    /// Resolves on the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
