//! Wall-clock ticker for the time overlay.
//!
//! The ticker publishes `HH:MM:SS` (24-hour) on a watch channel once per
//! second. The task lives exactly as long as the [`ClockTicker`]: `stop` or
//! drop aborts it.

use std::fmt;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike, Utc};
use serde::Deserialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

pub const TICK: Duration = Duration::from_millis(1000);

/// Source of the current time of day.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> NaiveTime;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockZone {
    #[default]
    Utc,
    Local,
}

impl ClockZone {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Utc => "UTC",
            Self::Local => "LCL",
        }
    }
}

impl fmt::Display for ClockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The system clock in the given zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    pub zone: ClockZone,
}

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveTime {
        match self.zone {
            ClockZone::Utc => Utc::now().time(),
            ClockZone::Local => Local::now().time(),
        }
    }
}

/// `HH:MM:SS`, 24-hour, sub-second part dropped.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

pub struct ClockTicker {
    handle: Option<JoinHandle<()>>,
    display: watch::Receiver<String>,
}

impl ClockTicker {
    /// Publish the current time now and then every [`TICK`].
    ///
    /// Must be called inside a tokio runtime.
    pub fn start<S: TimeSource>(source: S) -> Self {
        let (tx, rx) = watch::channel(format_clock(source.now()));

        let handle = tokio::spawn(async move {
            let mut ticks = interval(TICK);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial value is
            // already published.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                tx.send_replace(format_clock(source.now()));
            }
        });

        debug!("Clock ticker started");
        Self {
            handle: Some(handle),
            display: rx,
        }
    }

    /// Receiver that changes on every tick.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display.clone()
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.display.borrow().clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Release the periodic task. The last published value stays readable.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Clock ticker stopped");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
