use super::{make_lparam, InputControl, WindowHost};
use crate::title_bar::{HOVER_POLL_TIMER_ID, REFERENCE_DPI};
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::{InvalidateRect, ScreenToClient};
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetActiveWindow, ReleaseCapture};
use windows::Win32::UI::WindowsAndMessaging::*;

/// The subclassed view window.
#[derive(Debug, Clone, Copy)]
pub struct Win32Host {
    hwnd: HWND,
}

impl Win32Host {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl WindowHost for Win32Host {
    fn client_rect(&self) -> RECT {
        let mut rect = RECT::default();
        unsafe {
            let _ = GetClientRect(self.hwnd, &mut rect);
        }
        rect
    }

    fn dpi(&self) -> u32 {
        match unsafe { GetDpiForWindow(self.hwnd) } {
            0 => REFERENCE_DPI,
            dpi => dpi,
        }
    }

    fn system_caption_height(&self) -> i32 {
        unsafe { GetSystemMetrics(SM_CYCAPTION) }
    }

    fn cursor_position(&self) -> POINT {
        let mut pt = POINT::default();
        unsafe {
            let _ = GetCursorPos(&mut pt);
            let _ = ScreenToClient(self.hwnd, &mut pt);
        }
        pt
    }

    fn invalidate(&self, rect: &RECT) {
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), Some(rect as *const RECT), false);
        }
    }

    fn arm_poll_timer(&self, interval_ms: u32) {
        unsafe {
            let _ = SetTimer(Some(self.hwnd), HOVER_POLL_TIMER_ID, interval_ms, None);
        }
    }

    fn disarm_poll_timer(&self) {
        unsafe {
            let _ = KillTimer(Some(self.hwnd), HOVER_POLL_TIMER_ID);
        }
    }

    fn show_arrow_cursor(&self) {
        unsafe {
            if let Ok(arrow) = LoadCursorW(None, IDC_ARROW) {
                SetCursor(Some(arrow));
            }
        }
    }
}

/// `releaseMouse` target: the active window, or the view when nothing of
/// ours is active.
#[derive(Debug, Clone, Copy)]
pub struct Win32Input {
    fallback: HWND,
}

impl Win32Input {
    pub fn new(fallback: HWND) -> Self {
        Self { fallback }
    }
}

impl InputControl for Win32Input {
    fn release_mouse(&self) {
        unsafe {
            let active = GetActiveWindow();
            let target = if active.is_invalid() {
                self.fallback
            } else {
                active
            };

            let _ = ReleaseCapture();

            let mut pt = POINT::default();
            let _ = GetCursorPos(&mut pt);
            let _ = ScreenToClient(target, &mut pt);
            // Synchronous: may re-enter our own window procedure.
            let _ = SendMessageW(
                target,
                WM_LBUTTONUP,
                Some(WPARAM(0)),
                Some(make_lparam(pt.x, pt.y)),
            );
        }
    }
}
