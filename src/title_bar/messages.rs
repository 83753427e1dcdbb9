//! Message interception.
//!
//! A subclassed window procedure runs its messages through a `HandlerChain`.
//! Each handler either answers (`Some`) or passes the message on; the window's
//! original procedure sits at the end of the chain, and `DefWindowProcW` is
//! used when the chain has nothing to say. Only the three button regions are
//! claimed, so dragging, resizing, the system menu and IME keep their native
//! behaviour everywhere else.

use super::hover::HOVER_POLL_TIMER_ID;
use super::TitleBar;
use crate::platform::WindowHost;
use std::rc::Rc;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    WM_ACTIVATE, WM_DESTROY, WM_MOUSEMOVE, WM_NCHITTEST, WM_NCLBUTTONDOWN, WM_NCLBUTTONUP,
    WM_NCMOUSEMOVE, WM_SIZE, WM_TIMER,
};

#[derive(Debug, Clone, Copy)]
pub struct WindowMessage {
    pub hwnd: HWND,
    pub msg: u32,
    pub wparam: WPARAM,
    pub lparam: LPARAM,
}

impl WindowMessage {
    pub fn new(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Self {
        Self {
            hwnd,
            msg,
            wparam,
            lparam,
        }
    }
}

pub trait MessageHandler {
    /// `None` passes the message to the next handler.
    fn handle(&self, message: &WindowMessage) -> Option<LRESULT>;
}

impl<T: MessageHandler + ?Sized> MessageHandler for Rc<T> {
    fn handle(&self, message: &WindowMessage) -> Option<LRESULT> {
        (**self).handle(message)
    }
}

#[derive(Default)]
pub struct HandlerChain {
    handlers: Vec<Box<dyn MessageHandler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: impl MessageHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, message: &WindowMessage) -> Option<LRESULT> {
        self.handlers
            .iter()
            .find_map(|handler| handler.handle(message))
    }
}

/// Hook on the top-level window. Reserved for cross-window behaviour; today
/// every message goes straight through.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopLevelHook;

impl MessageHandler for TopLevelHook {
    fn handle(&self, _message: &WindowMessage) -> Option<LRESULT> {
        None
    }
}

impl<H: WindowHost> MessageHandler for TitleBar<H> {
    fn handle(&self, message: &WindowMessage) -> Option<LRESULT> {
        match message.msg {
            WM_ACTIVATE | WM_SIZE => {
                self.invalidate_buttons();
                None
            }
            WM_NCMOUSEMOVE | WM_MOUSEMOVE => {
                self.update_hover();
                None
            }
            WM_TIMER if message.wparam.0 == HOVER_POLL_TIMER_ID => {
                self.update_hover();
                Some(LRESULT(0))
            }
            WM_NCHITTEST => self.hit_test(),
            WM_NCLBUTTONDOWN => self.button_down(),
            WM_NCLBUTTONUP => {
                self.button_up();
                None
            }
            WM_DESTROY => {
                self.stop_polling();
                None
            }
            _ => None,
        }
    }
}
