#![allow(dead_code)]

use caption_buttons::platform::WindowHost;
use caption_buttons::{HostBridge, SharedConfig, TitleBar, TitleBarEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use windows::Win32::Foundation::{POINT, RECT};

pub struct TestWindow {
    pub width: Cell<i32>,
    pub dpi: Cell<u32>,
    pub cursor: Cell<POINT>,
    pub timers: Cell<u32>,
    pub max_timers: Cell<u32>,
    pub arms: Cell<u32>,
    pub disarms: Cell<u32>,
}

impl TestWindow {
    pub fn new(width: i32) -> Self {
        Self {
            width: Cell::new(width),
            dpi: Cell::new(96),
            cursor: Cell::new(POINT { x: -1, y: -1 }),
            timers: Cell::new(0),
            max_timers: Cell::new(0),
            arms: Cell::new(0),
            disarms: Cell::new(0),
        }
    }
}

impl WindowHost for TestWindow {
    fn client_rect(&self) -> RECT {
        RECT {
            left: 0,
            top: 0,
            right: self.width.get(),
            bottom: 600,
        }
    }

    fn dpi(&self) -> u32 {
        self.dpi.get()
    }

    fn system_caption_height(&self) -> i32 {
        30
    }

    fn cursor_position(&self) -> POINT {
        self.cursor.get()
    }

    fn invalidate(&self, _rect: &RECT) {}

    // SetTimer with a live id replaces it, so one timer at most.
    fn arm_poll_timer(&self, _interval_ms: u32) {
        self.arms.set(self.arms.get() + 1);
        self.timers.set(1);
        self.max_timers.set(self.max_timers.get().max(self.arms.get() - self.disarms.get()));
    }

    fn disarm_poll_timer(&self) {
        self.disarms.set(self.disarms.get() + 1);
        self.timers.set(0);
    }

    fn show_arrow_cursor(&self) {}
}

#[derive(Default)]
pub struct Recorder {
    pub events: RefCell<Vec<TitleBarEvent>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<(&'static str, &'static str)> {
        self.events
            .borrow_mut()
            .drain(..)
            .map(|e| (e.method_name(), e.params()))
            .collect()
    }
}

impl HostBridge for Recorder {
    fn emit(&self, event: &TitleBarEvent) {
        self.events.borrow_mut().push(*event);
    }
}

pub fn window(width: i32) -> (TitleBar<TestWindow>, Rc<Recorder>, SharedConfig) {
    let recorder = Rc::new(Recorder::default());
    let config = SharedConfig::default();
    let bar = TitleBar::new(TestWindow::new(width), config.clone(), recorder.clone());
    (bar, recorder, config)
}

pub fn hover_at(bar: &TitleBar<TestWindow>, x: i32, y: i32) {
    bar.host().cursor.set(POINT { x, y });
    bar.update_hover();
}
