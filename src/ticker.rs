use crate::calendar::{date_key, Clock};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

pub const DEFAULT_TICK: Duration = Duration::from_secs(60);

pub struct DayTicker {
    clock: Arc<dyn Clock>,
    period: Duration,
    sender: watch::Sender<NaiveDate>,
}

impl DayTicker {
    pub fn new(clock: Arc<dyn Clock>, period: Duration) -> (Self, watch::Receiver<NaiveDate>) {
        let (sender, receiver) = watch::channel(clock.today());
        let ticker = Self {
            clock,
            period,
            sender,
        };
        (ticker, receiver)
    }

    pub fn refresh(&self) -> bool {
        let today = self.clock.today();
        let changed = self.sender.send_if_modified(|current| {
            if *current == today {
                return false;
            }
            *current = today;
            true
        });
        if changed {
            info!("day rolled over to {}", date_key(today));
        }
        changed
    }

    pub fn spawn(self) -> TickerHandle {
        let task = tokio::spawn(async move {
            let mut ticks = interval(self.period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!("day ticker started, period {:?}", self.period);
            loop {
                ticks.tick().await;
                self.refresh();
            }
        });
        TickerHandle { task }
    }
}

pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub async fn shutdown(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
        debug!("day ticker stopped");
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
