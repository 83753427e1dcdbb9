use super::button::TitleButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Hovered,
    Down,
    Up,
    Click,
}

impl EventKind {
    pub fn method_name(self) -> &'static str {
        match self {
            // Spelling is part of the host protocol.
            EventKind::Hovered => "onTitleButtonHoverd",
            EventKind::Down => "onTitleButtonDown",
            EventKind::Up => "onTitleButtonUp",
            EventKind::Click => "onTitleButtonClick",
        }
    }
}

/// Outbound notification for the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarEvent {
    pub kind: EventKind,
    pub button: TitleButton,
}

impl TitleBarEvent {
    pub fn new(kind: EventKind, button: TitleButton) -> Self {
        Self { kind, button }
    }

    pub fn method_name(&self) -> &'static str {
        self.kind.method_name()
    }

    pub fn params(&self) -> &'static str {
        self.button.as_str()
    }

    /// `{"method": ..., "params": ...}`, the shape the host's `invoke` channel expects.
    pub fn envelope(&self) -> serde_json::Value {
        serde_json::json!({
            "method": self.method_name(),
            "params": self.params(),
        })
    }
}
