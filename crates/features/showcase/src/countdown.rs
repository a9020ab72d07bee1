//! Early-bird countdown.

use crate::view::PageView;
use chrono::{DateTime, Utc};
use landing_domain::format::format_date;
use landing_kernel::clock::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval_at};
use tracing::{debug, info};

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Whole days, hours and minutes left before a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Remaining {
    /// Time left from `now` until `deadline`, or `None` once the deadline has passed.
    #[must_use]
    pub fn until(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Option<Self> {
        let left = (deadline - now).to_std().ok()?.as_secs();
        Some(Self {
            days: left / SECS_PER_DAY,
            hours: left % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: left % SECS_PER_HOUR / SECS_PER_MINUTE,
        })
    }

    /// Zero-padded `[days, hours, minutes]` as rendered in the timer.
    #[must_use]
    pub fn padded(&self) -> [String; 3] {
        [self.days, self.hours, self.minutes].map(|n| format!("{n:02}"))
    }
}

/// The line under the timer: `"Offer ends December 31, 2024"`.
#[must_use]
pub fn deadline_label(deadline: DateTime<Utc>) -> String {
    format!("Offer ends {}", format_date(deadline.date_naive()))
}

/// Keeps the countdown ticking until dropped.
#[derive(Debug)]
pub struct CountdownHandle {
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    /// Whether the timer still refreshes.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Renders the countdown right away, then every `interval` until the deadline passes,
/// at which point the timer is hidden and stops.
pub fn start_countdown<V: PageView>(
    view: Arc<V>,
    clock: Arc<dyn Clock>,
    deadline: DateTime<Utc>,
    interval: Duration,
) -> CountdownHandle {
    if !render(view.as_ref(), clock.as_ref(), deadline) {
        info!(%deadline, "Early bird deadline already passed");
        return CountdownHandle { task: None };
    }

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if !render(view.as_ref(), clock.as_ref(), deadline) {
                debug!(%deadline, "Countdown finished");
                break;
            }
        }
    });

    CountdownHandle { task: Some(task) }
}

fn render<V: PageView>(view: &V, clock: &dyn Clock, deadline: DateTime<Utc>) -> bool {
    match Remaining::until(clock.now(), deadline) {
        Some(remaining) => {
            view.render_countdown(&remaining);
            true
        },
        None => {
            view.hide_countdown();
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn splits_into_days_hours_minutes() {
        let deadline = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let now = deadline - TimeDelta::days(3) - TimeDelta::hours(4) - TimeDelta::minutes(5);

        let left = Remaining::until(now, deadline).unwrap();
        assert_eq!(left, Remaining { days: 3, hours: 4, minutes: 5 });
        assert_eq!(left.padded(), ["03", "04", "05"]);
    }

    #[test]
    fn none_after_deadline() {
        let deadline = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert!(Remaining::until(deadline + TimeDelta::seconds(1), deadline).is_none());
        assert_eq!(
            Remaining::until(deadline, deadline),
            Some(Remaining { days: 0, hours: 0, minutes: 0 })
        );
    }

    #[test]
    fn deadline_reads_as_a_date() {
        let deadline = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(deadline_label(deadline), "Offer ends December 31, 2024");
    }
}
