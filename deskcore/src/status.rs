//! Status bar model: temporary messages, hover tips and permanent indicators.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Message {
    text: String,
    expires: Option<Instant>,
}

#[derive(Debug, Default, Clone)]
pub struct StatusBar {
    message: Option<Message>,
    hover_tip: Option<String>,
    permanent: Vec<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a temporary message, replacing any current one.
    /// A zero or missing timeout keeps it until replaced or cleared.
    pub fn show_message(&mut self, text: impl Into<String>, timeout: Option<Duration>, now: Instant) {
        let expires = timeout.filter(|t| !t.is_zero()).map(|t| now + t);
        self.message = Some(Message { text: text.into(), expires });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Set the tip of the item under the pointer for this frame.
    /// Call with `None` at the start of every frame.
    pub fn set_hover_tip(&mut self, tip: Option<&str>) {
        self.hover_tip = tip.map(str::to_owned);
    }

    /// Text for the left side of the bar: hover tip first, then the
    /// temporary message if it has not expired.
    pub fn current(&self, now: Instant) -> Option<&str> {
        if let Some(tip) = &self.hover_tip {
            return Some(tip.as_str());
        }
        match &self.message {
            Some(m) if m.expires.map_or(true, |t| now < t) => Some(m.text.as_str()),
            _ => None,
        }
    }

    /// Drop an expired message. Returns the time until the current one
    /// expires so the caller can schedule a repaint.
    pub fn expire(&mut self, now: Instant) -> Option<Duration> {
        let expires = self.message.as_ref()?.expires?;
        if now >= expires {
            self.message = None;
            None
        } else {
            Some(expires - now)
        }
    }

    pub fn set_permanent(&mut self, slot: usize, text: impl Into<String>) {
        if self.permanent.len() <= slot {
            self.permanent.resize(slot + 1, String::new());
        }
        self.permanent[slot] = text.into();
    }

    pub fn permanent(&self) -> &[String] {
        &self.permanent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_message_expires() {
        let now = Instant::now();
        let mut bar = StatusBar::new();
        bar.show_message("Ready", Some(Duration::from_millis(3000)), now);
        assert_eq!(bar.current(now), Some("Ready"));
        assert_eq!(bar.expire(now + Duration::from_millis(1000)), Some(Duration::from_millis(2000)));
        assert_eq!(bar.current(now + Duration::from_millis(2999)), Some("Ready"));
        assert_eq!(bar.current(now + Duration::from_millis(3000)), None);
        assert_eq!(bar.expire(now + Duration::from_millis(3000)), None);
        assert_eq!(bar.current(now), None);
    }

    #[test]
    fn test_zero_timeout_stays() {
        let now = Instant::now();
        let mut bar = StatusBar::new();
        bar.show_message("sticky", Some(Duration::ZERO), now);
        assert_eq!(bar.current(now + Duration::from_secs(3600)), Some("sticky"));
        assert_eq!(bar.expire(now + Duration::from_secs(3600)), None);
        bar.clear_message();
        assert_eq!(bar.current(now), None);
    }

    #[test]
    fn test_new_message_replaces_old() {
        let now = Instant::now();
        let mut bar = StatusBar::new();
        bar.show_message("first", None, now);
        bar.show_message("second", None, now);
        assert_eq!(bar.current(now), Some("second"));
    }

    #[test]
    fn test_hover_tip_wins_and_permanent_unaffected() {
        let now = Instant::now();
        let mut bar = StatusBar::new();
        bar.set_permanent(0, "42 Words");
        bar.show_message("Ready", None, now);
        bar.set_hover_tip(Some("Create a new file"));
        assert_eq!(bar.current(now), Some("Create a new file"));
        assert_eq!(bar.permanent(), ["42 Words".to_string()]);
        bar.set_hover_tip(None);
        assert_eq!(bar.current(now), Some("Ready"));
    }
}
