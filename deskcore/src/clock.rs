//! Clock label and the re-arming ticker that drives it.
//!
//! egui has no timer callbacks: the app polls the ticker every frame and
//! asks egui to wake it again when the ticker is next due.

use chrono::Timelike;
use std::time::{Duration, Instant};

/// Default clock refresh interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Format a time of day for the clock label, e.g. `02:03:05 PM`.
pub fn format_clock<T: Timelike>(time: &T, use_24h: bool) -> String {
    if use_24h {
        return format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second());
    }
    let (pm, hour12) = time.hour12();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour12,
        time.minute(),
        time.second(),
        if pm { "PM" } else { "AM" }
    )
}

/// A cooperative repeating timer.
///
/// `poll` returns `true` once per interval and re-arms itself from the time
/// it fired. Dropping the ticker is the only way to stop it.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// A ticker that is due immediately.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, next_due: now }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Time left until the next firing (zero if already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// The text of a clock label, refreshed by a [`Ticker`].
#[derive(Debug, Clone)]
pub struct ClockLabel {
    ticker: Ticker,
    use_24h: bool,
    text: String,
}

impl ClockLabel {
    pub fn new(interval: Duration, use_24h: bool, now: Instant) -> Self {
        Self {
            ticker: Ticker::new(interval, now),
            use_24h,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Refresh the label from `wall` if the ticker is due.
    /// Returns whether the text was recomputed.
    pub fn tick<T: Timelike>(&mut self, now: Instant, wall: &T) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.text = format_clock(wall, self.use_24h);
        true
    }

    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.ticker.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_clock(&hms(14, 3, 5), false), "02:03:05 PM");
        assert_eq!(format_clock(&hms(0, 0, 0), false), "12:00:00 AM");
        assert_eq!(format_clock(&hms(12, 30, 59), false), "12:30:59 PM");
        assert_eq!(format_clock(&hms(9, 15, 0), false), "09:15:00 AM");
    }

    #[test]
    fn test_format_24h() {
        assert_eq!(format_clock(&hms(14, 3, 5), true), "14:03:05");
        assert_eq!(format_clock(&hms(0, 7, 9), true), "00:07:09");
    }

    #[test]
    fn test_ticker_rearms() {
        let start = Instant::now();
        let mut ticker = Ticker::new(TICK_INTERVAL, start);
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert!(ticker.poll(start + Duration::from_millis(1000)));
        // re-armed from the firing time, not the previous schedule
        assert!(!ticker.poll(start + Duration::from_millis(1500)));
        assert!(ticker.poll(start + Duration::from_millis(2000)));
        assert_eq!(ticker.remaining(start + Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn test_clock_label_tick() {
        let start = Instant::now();
        let mut label = ClockLabel::new(TICK_INTERVAL, false, start);
        assert_eq!(label.text(), "");
        assert!(label.tick(start, &hms(14, 3, 5)));
        assert_eq!(label.text(), "02:03:05 PM");

        // not due yet: the label keeps its text
        assert!(!label.tick(start + Duration::from_millis(10), &hms(14, 3, 6)));
        assert_eq!(label.text(), "02:03:05 PM");

        assert!(label.tick(start + TICK_INTERVAL, &hms(14, 3, 6)));
        assert_eq!(label.text(), "02:03:06 PM");
    }
}
