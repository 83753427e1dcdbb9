//! Hover state for the three caption buttons.
//!
//! Entering a button region is reported reliably by `WM_NCMOUSEMOVE`, but
//! there is no leave notification for the synthetic hit-test codes: moving
//! from the close button onto the caption or out of the window can go
//! unreported. While a button is hovered a 24 ms timer re-reads the cursor,
//! which bounds the hover-exit latency. The timer only runs while hovering.

use super::button::TitleButton;
use super::events::{EventKind, TitleBarEvent};
use super::geometry::ButtonRects;
use crate::platform::WindowHost;

pub const HOVER_POLL_TIMER_ID: usize = 2233;
pub const HOVER_POLL_INTERVAL_MS: u32 = 24;

#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: TitleButton,
    polling: bool,
}

impl HoverTracker {
    pub fn hovered(&self) -> TitleButton {
        self.hovered
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Re-reads the cursor against `rects`. Returns the hover event only when
    /// the hovered button actually changed.
    pub fn reconcile(
        &mut self,
        host: &dyn WindowHost,
        rects: &ButtonRects,
    ) -> Option<TitleBarEvent> {
        let target = rects.button_at(host.cursor_position());
        self.set_hover(host, target)
    }

    pub fn set_hover(&mut self, host: &dyn WindowHost, target: TitleButton) -> Option<TitleBarEvent> {
        if self.hovered == target {
            return None;
        }
        self.hovered = target;

        if target.is_none() {
            self.disarm(host);
        } else {
            host.show_arrow_cursor();
            self.arm(host);
        }
        Some(TitleBarEvent::new(EventKind::Hovered, target))
    }

    /// Moving between two buttons keeps the running timer.
    fn arm(&mut self, host: &dyn WindowHost) {
        if self.polling {
            return;
        }
        host.arm_poll_timer(HOVER_POLL_INTERVAL_MS);
        self.polling = true;
    }

    /// Safe to call when not polling.
    pub fn disarm(&mut self, host: &dyn WindowHost) {
        if self.polling {
            host.disarm_poll_timer();
            self.polling = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::FakeHost;
    use windows::Win32::Foundation::RECT;

    fn rects() -> ButtonRects {
        ButtonRects::layout(
            &RECT {
                left: 0,
                top: 0,
                right: 800,
                bottom: 600,
            },
            30,
            46,
            0,
        )
    }

    #[test]
    fn entering_a_button_emits_once_and_arms_the_timer() {
        let host = FakeHost::new(800, 600);
        let mut tracker = HoverTracker::default();

        host.move_cursor(770, 10);
        let event = tracker.reconcile(&host, &rects());
        assert_eq!(
            event,
            Some(TitleBarEvent::new(EventKind::Hovered, TitleButton::Close))
        );
        assert!(tracker.is_polling());
        assert!(host.timer_active.get());
        assert_eq!(host.arrow_cursor_calls.get(), 1);

        assert_eq!(tracker.reconcile(&host, &rects()), None);
        assert_eq!(tracker.reconcile(&host, &rects()), None);
        assert_eq!(host.arm_calls.get(), 1);
    }

    #[test]
    fn moving_between_buttons_keeps_a_single_timer() {
        let host = FakeHost::new(800, 600);
        let mut tracker = HoverTracker::default();

        host.move_cursor(770, 10);
        tracker.reconcile(&host, &rects());
        host.move_cursor(720, 10);
        let event = tracker.reconcile(&host, &rects());

        assert_eq!(event.map(|e| e.button), Some(TitleButton::Maximize));
        assert_eq!(host.arm_calls.get(), 1);
        assert_eq!(host.overlapping_arms.get(), 0);
        assert_eq!(host.disarm_calls.get(), 0);
    }

    #[test]
    fn leaving_disarms_and_redundant_disarm_is_harmless() {
        let host = FakeHost::new(800, 600);
        let mut tracker = HoverTracker::default();

        host.move_cursor(680, 10);
        tracker.reconcile(&host, &rects());
        host.move_cursor(400, 10);
        let event = tracker.reconcile(&host, &rects());

        assert_eq!(event.map(|e| e.button), Some(TitleButton::None));
        assert!(!tracker.is_polling());
        assert!(!host.timer_active.get());

        tracker.disarm(&host);
        tracker.disarm(&host);
        assert_eq!(host.disarm_calls.get(), 1);
        assert!(!host.timer_active.get());
    }

    #[test]
    fn starting_outside_reports_nothing() {
        let host = FakeHost::new(800, 600);
        let mut tracker = HoverTracker::default();

        host.move_cursor(100, 100);
        assert_eq!(tracker.reconcile(&host, &rects()), None);
        assert_eq!(tracker.hovered(), TitleButton::None);
        assert_eq!(host.arm_calls.get(), 0);
    }
}
