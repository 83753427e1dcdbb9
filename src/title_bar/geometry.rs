//! Button rectangles and caption height in physical pixels.
//!
//! Nothing here is cached: every hit-test, hover poll and repaint asks the host
//! for the current client rect and DPI, so resizes and monitor changes are
//! picked up without any invalidation bookkeeping.

use super::button::TitleButton;
use crate::config::SharedConfig;
use crate::platform::WindowHost;
use windows::Win32::Foundation::{POINT, RECT};

pub const REFERENCE_DPI: u32 = 96;

/// `value * dpi / 96`, truncating, like the system scaling helpers.
/// Results outside `i32` saturate.
pub fn dpi_scale(value: i32, dpi: u32) -> i32 {
    let scaled = i64::from(value) * i64::from(dpi) / i64::from(REFERENCE_DPI);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Half-open containment, same as `PtInRect`.
pub fn rect_contains(rect: &RECT, point: POINT) -> bool {
    point.x >= rect.left && point.x < rect.right && point.y >= rect.top && point.y < rect.bottom
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonRects {
    pub close: RECT,
    pub maximize: RECT,
    pub minimize: RECT,
}

impl ButtonRects {
    /// Lays the buttons out right to left from the client's right edge.
    pub fn layout(client: &RECT, caption_height: i32, button_width: i32, spacing: i32) -> Self {
        let right = client.right;
        // Edge `n` buttons and `gaps` spacings in from the right.
        let edge = |n: i32, gaps: i32| {
            right
                .saturating_sub(button_width.saturating_mul(n))
                .saturating_sub(spacing.saturating_mul(gaps))
        };
        let close = RECT {
            left: edge(1, 0),
            top: 0,
            right,
            bottom: caption_height,
        };
        let maximize = RECT {
            left: edge(2, 1),
            right: edge(1, 1),
            ..close
        };
        let minimize = RECT {
            left: edge(3, 2),
            right: edge(2, 2),
            ..close
        };
        Self {
            close,
            maximize,
            minimize,
        }
    }

    /// Button under `point` (client coordinates). Close wins ties, then
    /// Minimize, then Maximize.
    pub fn button_at(&self, point: POINT) -> TitleButton {
        if rect_contains(&self.close, point) {
            TitleButton::Close
        } else if rect_contains(&self.minimize, point) {
            TitleButton::Minimize
        } else if rect_contains(&self.maximize, point) {
            TitleButton::Maximize
        } else {
            TitleButton::None
        }
    }

    /// Left to right.
    pub fn iter(&self) -> impl Iterator<Item = (TitleButton, RECT)> {
        [
            (TitleButton::Minimize, self.minimize),
            (TitleButton::Maximize, self.maximize),
            (TitleButton::Close, self.close),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone)]
pub struct Geometry {
    config: SharedConfig,
}

impl Geometry {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    pub fn caption_height(&self, host: &dyn WindowHost) -> i32 {
        let configured = self.config.get().caption_height;
        let logical = if configured != 0 {
            configured
        } else {
            host.system_caption_height()
        };
        dpi_scale(logical, host.dpi())
    }

    pub fn button_width(&self, host: &dyn WindowHost) -> i32 {
        dpi_scale(self.config.get().button_width, host.dpi())
    }

    pub fn rects(&self, host: &dyn WindowHost) -> ButtonRects {
        let spacing = dpi_scale(self.config.get().button_spacing, host.dpi());
        ButtonRects::layout(
            &host.client_rect(),
            self.caption_height(host),
            self.button_width(host),
            spacing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(width: i32, height: i32) -> RECT {
        RECT {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    #[test]
    fn scales_with_truncation() {
        assert_eq!(dpi_scale(46, 96), 46);
        assert_eq!(dpi_scale(46, 120), 57); // 57.5
        assert_eq!(dpi_scale(46, 144), 69);
        assert_eq!(dpi_scale(23, 168), 40); // 40.25
    }

    #[test]
    fn oversized_values_saturate() {
        assert_eq!(dpi_scale(i32::MAX, 192), i32::MAX);
        assert_eq!(dpi_scale(i32::MIN, 192), i32::MIN);
        assert_eq!(dpi_scale(1_000_000_000, 96), 1_000_000_000);
    }

    #[test]
    fn huge_button_width_pins_the_layout_instead_of_overflowing() {
        let width = dpi_scale(i32::MAX, 192);
        let rects = ButtonRects::layout(&client(800, 600), 23, width, i32::MAX);

        assert_eq!(rects.close.right, 800);
        assert_eq!(rects.close.left, 800 - i32::MAX);
        assert_eq!(rects.minimize.left, i32::MIN);
        assert_eq!(rects.button_at(POINT { x: 400, y: 10 }), TitleButton::Close);
        assert_eq!(rects.button_at(POINT { x: 400, y: 30 }), TitleButton::None);
    }

    #[test]
    fn lays_out_800px_client_at_100_percent() {
        let rects = ButtonRects::layout(&client(800, 600), 30, 46, 0);

        assert_eq!(
            rects.close,
            RECT { left: 754, top: 0, right: 800, bottom: 30 }
        );
        assert_eq!(
            rects.maximize,
            RECT { left: 708, top: 0, right: 754, bottom: 30 }
        );
        assert_eq!(
            rects.minimize,
            RECT { left: 662, top: 0, right: 708, bottom: 30 }
        );
    }

    #[test]
    fn buttons_tile_without_gaps_or_overlap() {
        for width in [46, 57, 69, 92] {
            let rects = ButtonRects::layout(&client(1280, 720), 45, width, 0);
            let ordered: Vec<RECT> = rects.iter().map(|(_, r)| r).collect();

            assert_eq!(ordered[0].right, ordered[1].left);
            assert_eq!(ordered[1].right, ordered[2].left);
            assert_eq!(ordered[2].right, 1280);
            assert_eq!(ordered[0].left, 1280 - 3 * width);
            assert!(ordered.iter().all(|r| r.top == 0 && r.bottom == 45));
        }
    }

    #[test]
    fn spacing_separates_buttons() {
        let rects = ButtonRects::layout(&client(800, 600), 30, 46, 2);
        assert_eq!(rects.close.left, 754);
        assert_eq!(rects.maximize.right, 752);
        assert_eq!(rects.maximize.left, 706);
        assert_eq!(rects.minimize.right, 704);
        assert_eq!(rects.minimize.left, 658);
    }

    #[test]
    fn containment_is_half_open() {
        let rects = ButtonRects::layout(&client(800, 600), 30, 46, 0);

        assert_eq!(rects.button_at(POINT { x: 754, y: 0 }), TitleButton::Close);
        assert_eq!(rects.button_at(POINT { x: 799, y: 29 }), TitleButton::Close);
        assert_eq!(rects.button_at(POINT { x: 800, y: 10 }), TitleButton::None);
        assert_eq!(rects.button_at(POINT { x: 760, y: 30 }), TitleButton::None);
        assert_eq!(rects.button_at(POINT { x: 753, y: 10 }), TitleButton::Maximize);
        assert_eq!(rects.button_at(POINT { x: 662, y: 10 }), TitleButton::Minimize);
        assert_eq!(rects.button_at(POINT { x: 661, y: 10 }), TitleButton::None);
    }

    #[test]
    fn overlapping_rects_resolve_close_then_minimize_then_maximize() {
        let everywhere = RECT { left: 0, top: 0, right: 100, bottom: 100 };
        let rects = ButtonRects {
            close: everywhere,
            maximize: everywhere,
            minimize: everywhere,
        };
        assert_eq!(rects.button_at(POINT { x: 5, y: 5 }), TitleButton::Close);

        let rects = ButtonRects {
            close: RECT::default(),
            ..rects
        };
        assert_eq!(rects.button_at(POINT { x: 5, y: 5 }), TitleButton::Minimize);
    }
}
