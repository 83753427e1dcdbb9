use super::WindowHost;
use std::cell::{Cell, RefCell};
use windows::Win32::Foundation::{POINT, RECT};

/// In-memory window for unit tests.
#[derive(Debug)]
pub struct FakeHost {
    pub client: Cell<RECT>,
    pub dpi: Cell<u32>,
    pub caption: Cell<i32>,
    pub cursor: Cell<POINT>,
    pub timer_active: Cell<bool>,
    pub arm_calls: Cell<u32>,
    pub disarm_calls: Cell<u32>,
    pub overlapping_arms: Cell<u32>,
    pub arrow_cursor_calls: Cell<u32>,
    pub invalidated: RefCell<Vec<RECT>>,
}

impl FakeHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            client: Cell::new(RECT {
                left: 0,
                top: 0,
                right: width,
                bottom: height,
            }),
            dpi: Cell::new(96),
            caption: Cell::new(23),
            cursor: Cell::new(POINT { x: -1, y: -1 }),
            timer_active: Cell::new(false),
            arm_calls: Cell::new(0),
            disarm_calls: Cell::new(0),
            overlapping_arms: Cell::new(0),
            arrow_cursor_calls: Cell::new(0),
            invalidated: RefCell::new(Vec::new()),
        }
    }

    pub fn move_cursor(&self, x: i32, y: i32) {
        self.cursor.set(POINT { x, y });
    }
}

impl WindowHost for FakeHost {
    fn client_rect(&self) -> RECT {
        self.client.get()
    }

    fn dpi(&self) -> u32 {
        self.dpi.get()
    }

    fn system_caption_height(&self) -> i32 {
        self.caption.get()
    }

    fn cursor_position(&self) -> POINT {
        self.cursor.get()
    }

    fn invalidate(&self, rect: &RECT) {
        self.invalidated.borrow_mut().push(*rect);
    }

    fn arm_poll_timer(&self, _interval_ms: u32) {
        if self.timer_active.get() {
            self.overlapping_arms.set(self.overlapping_arms.get() + 1);
        }
        self.timer_active.set(true);
        self.arm_calls.set(self.arm_calls.get() + 1);
    }

    fn disarm_poll_timer(&self) {
        self.timer_active.set(false);
        self.disarm_calls.set(self.disarm_calls.get() + 1);
    }

    fn show_arrow_cursor(&self) {
        self.arrow_cursor_calls.set(self.arrow_cursor_calls.get() + 1);
    }
}
