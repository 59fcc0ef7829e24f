use crate::reload::structs::interval_task::IntervalTask;
use log::info;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

impl IntervalTask {
    pub fn new(name: &str, period: Duration) -> Self {
        Self {
            name: name.to_string(),
            period,
        }
    }

    /// Calls `body` every period until shutdown is signalled.
    ///
    /// The first call happens one full period after start. A body that has
    /// started always finishes before shutdown is looked at again.
    pub async fn run<F, Fut>(self, mut shutdown: watch::Receiver<bool>, mut body: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("[{}] Starting task with {:?} interval", self.name, self.period);

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }
            tokio::select! {
                _ = interval.tick() => {
                    body().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("[{}] Task stopped", self.name);
    }
}
