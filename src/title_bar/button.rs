use std::fmt;

/// Which logical caption button. `None` is a real state: no button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TitleButton {
    #[default]
    None,
    Minimize,
    Maximize,
    Close,
}

impl TitleButton {
    pub fn as_str(self) -> &'static str {
        match self {
            TitleButton::None => "none",
            TitleButton::Minimize => "minimize",
            TitleButton::Maximize => "maximize",
            TitleButton::Close => "close",
        }
    }

    pub fn is_none(self) -> bool {
        self == TitleButton::None
    }
}

impl fmt::Display for TitleButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
