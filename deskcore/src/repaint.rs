//! Repaint scheduling for the deskdemos apps
//!
//! egui redraws on input by default and otherwise sleeps. Apps with timed
//! state (the clock label, an expiring status message) must ask for a
//! wake-up themselves. `RepaintController` collects those requests during a
//! frame and issues a single `request_repaint_after` for the earliest one in
//! [`RepaintController::end_frame`].
//!
//! Call [`begin_frame`](RepaintController::begin_frame) at the top of
//! `update()` and [`end_frame`](RepaintController::end_frame) at the bottom.

use std::time::Duration;

#[derive(Debug, Default)]
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Earliest wake-up requested during this frame.
    wake_after: Option<Duration>,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Ask to be woken up after `delay`. Only the earliest request of a
    /// frame is kept.
    pub fn request_after(&mut self, delay: Duration) {
        self.wake_after = Some(match self.wake_after {
            Some(current) => current.min(delay),
            None => delay,
        });
    }

    /// Forget the previous frame's requests.
    pub fn begin_frame(&mut self, _ctx: &egui::Context) {
        self.needs_repaint = false;
        self.wake_after = None;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.needs_repaint {
            ctx.request_repaint();
        } else if let Some(delay) = self.wake_after {
            log::trace!("next wake-up in {delay:?}");
            ctx.request_repaint_after(delay);
        }
        // else: egui sleeps until the next input event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_wake_wins() {
        let mut rc = RepaintController::new();
        rc.request_after(Duration::from_millis(900));
        rc.request_after(Duration::from_millis(300));
        rc.request_after(Duration::from_millis(3000));
        assert_eq!(rc.wake_after, Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_begin_frame_resets_requests() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rc.begin_frame(ctx);
            rc.request_after(Duration::from_secs(1));
            rc.mark_needs_repaint();
            rc.end_frame(ctx);
        });
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rc.begin_frame(ctx);
            assert!(!rc.needs_repaint);
            assert_eq!(rc.wake_after, None);
            rc.end_frame(ctx);
        });
    }
}
