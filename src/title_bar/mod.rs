//! Per-window caption button controller.
//!
//! `TitleBar` wires the geometry, hover tracker, hit-test interceptor and
//! input arbiter together for one window. It is driven from the window's
//! message procedure (see `messages`) and reports to a `HostBridge`.

mod arbiter;
mod button;
mod events;
mod geometry;
mod hover;
pub mod messages;

use crate::bridge::HostBridge;
use crate::config::SharedConfig;
use crate::platform::WindowHost;
use std::cell::RefCell;
use std::rc::Rc;
use windows::Win32::Foundation::LRESULT;
use windows::Win32::UI::WindowsAndMessaging::HTNOWHERE;

pub use arbiter::InputArbiter;
pub use button::TitleButton;
pub use events::{EventKind, TitleBarEvent};
pub use geometry::{dpi_scale, rect_contains, ButtonRects, Geometry, REFERENCE_DPI};
pub use hit_test::{hit_test_code, intercept};
pub use hover::{HoverTracker, HOVER_POLL_INTERVAL_MS, HOVER_POLL_TIMER_ID};

/// Hover and press state, only touched from the window's message thread.
#[derive(Debug, Default)]
pub struct InteractionState {
    pub hover: HoverTracker,
    pub arbiter: InputArbiter,
}

pub struct TitleBar<H: WindowHost> {
    host: H,
    geometry: Geometry,
    bridge: Rc<dyn HostBridge>,
    state: RefCell<InteractionState>,
}

impl<H: WindowHost> TitleBar<H> {
    pub fn new(host: H, config: SharedConfig, bridge: Rc<dyn HostBridge>) -> Self {
        Self {
            host,
            geometry: Geometry::new(config),
            bridge,
            state: RefCell::new(InteractionState::default()),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn hovered(&self) -> TitleButton {
        self.state.borrow().hover.hovered()
    }

    pub fn pressed(&self) -> TitleButton {
        self.state.borrow().arbiter.pressed()
    }

    pub fn is_polling(&self) -> bool {
        self.state.borrow().hover.is_polling()
    }

    pub fn caption_height(&self) -> i32 {
        self.geometry.caption_height(&self.host)
    }

    pub fn button_rects(&self) -> ButtonRects {
        self.geometry.rects(&self.host)
    }

    pub fn invalidate_buttons(&self) {
        for (_, rect) in self.button_rects().iter() {
            self.host.invalidate(&rect);
        }
    }

    /// Mouse move and poll tick.
    pub fn update_hover(&self) {
        let rects = self.button_rects();
        let event = {
            let mut state = self.state.borrow_mut();
            state.hover.reconcile(&self.host, &rects)
        };
        self.emit(event);
    }

    pub fn hit_test(&self) -> Option<LRESULT> {
        intercept(self.hovered())
    }

    /// Returns the result that consumes the message when a button was pressed.
    pub fn button_down(&self) -> Option<LRESULT> {
        let event = {
            let mut state = self.state.borrow_mut();
            let hovered = state.hover.hovered();
            state.arbiter.press(hovered)
        };
        let consumed = event.is_some();
        self.emit(event);
        consumed.then_some(LRESULT(HTNOWHERE as isize))
    }

    pub fn button_up(&self) {
        let events = {
            let mut state = self.state.borrow_mut();
            let hovered = state.hover.hovered();
            state.arbiter.release(hovered)
        };
        self.emit(events);
    }

    /// Cancels the hover poll. Must run before the window goes away.
    pub fn stop_polling(&self) {
        self.state.borrow_mut().hover.disarm(&self.host);
    }

    // The state borrow is always released before the bridge sees an event.
    fn emit(&self, events: impl IntoIterator<Item = TitleBarEvent>) {
        for event in events {
            self.bridge.emit(&event);
        }
    }
}
