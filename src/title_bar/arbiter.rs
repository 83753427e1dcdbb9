use super::button::TitleButton;
use super::events::{EventKind, TitleBarEvent};

/// Turns non-client press/release pairs into clicks. A click needs the press
/// and the release on the same button.
#[derive(Debug, Default)]
pub struct InputArbiter {
    pressed: TitleButton,
}

impl InputArbiter {
    pub fn pressed(&self) -> TitleButton {
        self.pressed
    }

    /// A second down without an up simply replaces the pressed button.
    pub fn press(&mut self, hovered: TitleButton) -> Option<TitleBarEvent> {
        if hovered.is_none() {
            return None;
        }
        self.pressed = hovered;
        Some(TitleBarEvent::new(EventKind::Down, hovered))
    }

    /// Every up clears the pressed button; only ups over a button report.
    pub fn release(&mut self, hovered: TitleButton) -> Vec<TitleBarEvent> {
        let pressed = std::mem::take(&mut self.pressed);
        if hovered.is_none() {
            return Vec::new();
        }

        let mut events = vec![TitleBarEvent::new(EventKind::Up, hovered)];
        if hovered == pressed {
            events.push(TitleBarEvent::new(EventKind::Click, hovered));
        }
        events
    }
}
