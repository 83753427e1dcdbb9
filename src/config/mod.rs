//! Title bar configuration.
//!
//! One `TitleBarConfig` exists per plugin. It is shared with every attached
//! window through `SharedConfig`, whose setters are the only way to mutate it.
//! Everything runs on the window's message thread, so a `Cell` is enough.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Button width in device-independent pixels.
pub const DEFAULT_BUTTON_WIDTH: i32 = 46;
pub const DEFAULT_BUTTON_SPACING: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleBarConfig {
    /// Caption height in DIPs. 0 means the system caption height.
    pub caption_height: i32,
    pub button_width: i32,
    pub button_spacing: i32,
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            caption_height: 0,
            button_width: DEFAULT_BUTTON_WIDTH,
            button_spacing: DEFAULT_BUTTON_SPACING,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedConfig(Rc<Cell<TitleBarConfig>>);

impl SharedConfig {
    pub fn new(config: TitleBarConfig) -> Self {
        Self(Rc::new(Cell::new(config)))
    }

    pub fn get(&self) -> TitleBarConfig {
        self.0.get()
    }

    pub fn set_caption_height(&self, height: i32) {
        let mut config = self.0.get();
        config.caption_height = height;
        self.0.set(config);
    }

    pub fn set_button_width(&self, width: i32) {
        let mut config = self.0.get();
        config.button_width = width;
        self.0.set(config);
    }
}
