//! Seam between the title bar state machine and user32.
//!
//! `WindowHost` is everything the state machine asks of one window. The Win32
//! implementation and the subclassing glue only exist on Windows; the state
//! machine itself is plain Rust over the `Foundation` value types.

use windows::Win32::Foundation::{LPARAM, POINT, RECT};

#[cfg(windows)]
pub mod subclass;
#[cfg(windows)]
mod win32;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(windows)]
pub use win32::{Win32Host, Win32Input};

pub trait WindowHost {
    fn client_rect(&self) -> RECT;
    fn dpi(&self) -> u32;
    /// Unscaled system caption height (`SM_CYCAPTION`).
    fn system_caption_height(&self) -> i32;
    /// Cursor position in client coordinates.
    fn cursor_position(&self) -> POINT;
    fn invalidate(&self, rect: &RECT);
    fn arm_poll_timer(&self, interval_ms: u32);
    fn disarm_poll_timer(&self);
    fn show_arrow_cursor(&self);
}

pub trait InputControl {
    /// Drop any mouse capture and deliver a left-button up at the cursor.
    fn release_mouse(&self);
}

/// `MAKELPARAM(x, y)`.
pub fn make_lparam(x: i32, y: i32) -> LPARAM {
    let packed = (u32::from(y as u16) << 16) | u32::from(x as u16);
    LPARAM(packed as isize)
}
