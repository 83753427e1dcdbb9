// --- DEMO WINDOW ---
// Borderless window that paints its own caption buttons and lets the title bar
// crate make them behave like native ones.

use anyhow::{bail, Result};
use caption_buttons::platform::subclass::{attach, plugin_for, Attachment};
use caption_buttons::title_bar::dpi_scale;
use caption_buttons::{log_info, EventKind, HostBridge, MethodCall, TitleBarEvent, TitleBarPlugin, TitleButton};
use caption_buttons::{SharedConfig, TitleBarConfig};
use std::cell::RefCell;
use std::rc::Rc;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    GetDpiForWindow, SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::*;

const RESIZE_BORDER: i32 = 6;
const GLYPH_SIZE: i32 = 10;

// COLORREF is 0x00BBGGRR
const COL_BACKGROUND: u32 = 0x00202020;
const COL_CAPTION: u32 = 0x00303030;
const COL_HOVER: u32 = 0x00404040;
const COL_PRESSED: u32 = 0x00505050;
const COL_CLOSE_HOVER: u32 = 0x002311E8;
const COL_CLOSE_PRESSED: u32 = 0x003C47F1;
const COL_GLYPH: u32 = 0x00F0F0F0;

thread_local! {
    static ATTACHMENT: RefCell<Option<Attachment>> = RefCell::new(None);
}

pub fn run() -> Result<()> {
    unsafe {
        if let Err(err) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            log_info!("[Demo] DPI awareness not set: {}", err.message());
        }

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("CaptionButtonsDemo");

        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(demo_wnd_proc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            style: CS_HREDRAW | CS_VREDRAW,
            ..Default::default()
        };
        if RegisterClassExW(&wc) == 0 {
            bail!("RegisterClassExW failed: {:?}", GetLastError());
        }

        let hwnd = CreateWindowExW(
            WS_EX_APPWINDOW,
            class_name,
            w!("Caption Buttons"),
            WS_POPUP | WS_THICKFRAME | WS_SYSMENU | WS_MAXIMIZEBOX | WS_MINIMIZEBOX,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            960,
            600,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        let config = SharedConfig::new(TitleBarConfig::default());
        let plugin = plugin_for(hwnd, config.clone());
        apply_env_overrides(&plugin);

        let bridge: Rc<dyn HostBridge> =
            Rc::new(move |event: &TitleBarEvent| on_title_bar_event(hwnd, event));
        let attachment = attach(hwnd, config, bridge)?;
        ATTACHMENT.with(|cell| *cell.borrow_mut() = Some(attachment));

        // Re-run WM_NCCALCSIZE now that the frame is ours.
        let _ = SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER,
        );
        let _ = ShowWindow(hwnd, SW_SHOW);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    ATTACHMENT.with(|cell| cell.borrow_mut().take());
    Ok(())
}

/// `CAPTION_BUTTONS_TITLE_HEIGHT` / `CAPTION_BUTTONS_BUTTON_WIDTH` go through
/// the same method calls a host would make.
fn apply_env_overrides(plugin: &TitleBarPlugin) {
    let overrides = [
        ("CAPTION_BUTTONS_TITLE_HEIGHT", "setWindowsTitleHeight", "height"),
        ("CAPTION_BUTTONS_BUTTON_WIDTH", "setWindowsTitleButtonWidth", "width"),
    ];
    for (var, method, key) in overrides {
        let Ok(raw) = std::env::var(var) else {
            continue;
        };
        let value = raw
            .trim()
            .parse::<i64>()
            .map(serde_json::Value::from)
            .unwrap_or(serde_json::Value::String(raw));
        let call = MethodCall::new(method, serde_json::json!({ key: value }));
        if let Err(err) = plugin.handle_method_call(&call) {
            log_info!("[Demo] ignoring {}: {}", var, err);
        }
    }
}

fn on_title_bar_event(hwnd: HWND, event: &TitleBarEvent) {
    log_info!("[Demo] {}", event.envelope());
    unsafe {
        match event.kind {
            EventKind::Hovered | EventKind::Down | EventKind::Up => {
                let _ = InvalidateRect(Some(hwnd), None, false);
            }
            EventKind::Click => {
                let command = match event.button {
                    TitleButton::Minimize => SC_MINIMIZE,
                    TitleButton::Maximize if IsZoomed(hwnd).as_bool() => SC_RESTORE,
                    TitleButton::Maximize => SC_MAXIMIZE,
                    TitleButton::Close => SC_CLOSE,
                    TitleButton::None => return,
                };
                // Posted so the click finishes before the window changes.
                let _ = PostMessageW(
                    Some(hwnd),
                    WM_SYSCOMMAND,
                    WPARAM(command as usize),
                    LPARAM(0),
                );
            }
        }
    }
}

#[derive(Clone, Copy)]
struct PaintSnapshot {
    caption_height: i32,
    hovered: TitleButton,
    pressed: TitleButton,
    buttons: [(TitleButton, RECT); 3],
}

fn paint_snapshot() -> Option<PaintSnapshot> {
    ATTACHMENT.with(|cell| {
        let cell = cell.borrow();
        let title_bar = cell.as_ref()?.title_bar();
        let rects = title_bar.button_rects();
        Some(PaintSnapshot {
            caption_height: title_bar.caption_height(),
            hovered: title_bar.hovered(),
            pressed: title_bar.pressed(),
            buttons: [
                (TitleButton::Minimize, rects.minimize),
                (TitleButton::Maximize, rects.maximize),
                (TitleButton::Close, rects.close),
            ],
        })
    })
}

unsafe extern "system" fn demo_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe {
        match msg {
            WM_NCCALCSIZE => {
                if wparam.0 == 1 {
                    let params = &mut *(lparam.0 as *mut NCCALCSIZE_PARAMS);
                    if IsZoomed(hwnd).as_bool() {
                        let frame_x =
                            GetSystemMetrics(SM_CXFRAME) + GetSystemMetrics(SM_CXPADDEDBORDER);
                        let frame_y =
                            GetSystemMetrics(SM_CYFRAME) + GetSystemMetrics(SM_CXPADDEDBORDER);
                        params.rgrc[0].left += frame_x;
                        params.rgrc[0].top += frame_y;
                        params.rgrc[0].right -= frame_x;
                        params.rgrc[0].bottom -= frame_y;
                    }
                    return LRESULT(0);
                }
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
            WM_NCHITTEST => LRESULT(frame_hit_test(hwnd, lparam) as isize),
            WM_ERASEBKGND => LRESULT(1),
            WM_PAINT => {
                paint(hwnd);
                LRESULT(0)
            }
            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

/// Resize borders and the draggable caption. The caption buttons never get
/// here while hovered: the title bar answers for them first.
unsafe fn frame_hit_test(hwnd: HWND, lparam: LPARAM) -> u32 {
    let mut pt = POINT {
        x: lparam.0 as i16 as i32,
        y: (lparam.0 >> 16) as i16 as i32,
    };
    unsafe {
        let _ = ScreenToClient(hwnd, &mut pt);
        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);

        if !IsZoomed(hwnd).as_bool() {
            let border = dpi_scale(RESIZE_BORDER, GetDpiForWindow(hwnd));
            let top = pt.y < client.top + border;
            let bottom = pt.y >= client.bottom - border;
            let left = pt.x < client.left + border;
            let right = pt.x >= client.right - border;

            match (top, bottom, left, right) {
                (true, _, true, _) => return HTTOPLEFT,
                (true, _, _, true) => return HTTOPRIGHT,
                (_, true, true, _) => return HTBOTTOMLEFT,
                (_, true, _, true) => return HTBOTTOMRIGHT,
                (true, ..) => return HTTOP,
                (_, true, ..) => return HTBOTTOM,
                (_, _, true, _) => return HTLEFT,
                (_, _, _, true) => return HTRIGHT,
                _ => {}
            }
        }

        let caption_height = paint_snapshot().map_or(0, |s| s.caption_height);
        if pt.y < caption_height {
            HTCAPTION
        } else {
            HTCLIENT
        }
    }
}

unsafe fn fill(hdc: HDC, rect: &RECT, color: u32) {
    unsafe {
        let brush = CreateSolidBrush(COLORREF(color));
        FillRect(hdc, rect, brush);
        let _ = DeleteObject(brush.into());
    }
}

unsafe fn paint(hwnd: HWND) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);
        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);
        fill(hdc, &client, COL_BACKGROUND);

        if let Some(snapshot) = paint_snapshot() {
            let caption = RECT {
                bottom: snapshot.caption_height,
                ..client
            };
            fill(hdc, &caption, COL_CAPTION);

            let dpi = GetDpiForWindow(hwnd);
            let pen = CreatePen(PS_SOLID, dpi_scale(1, dpi).max(1), COLORREF(COL_GLYPH));
            let old_pen = SelectObject(hdc, pen.into());

            for (button, rect) in snapshot.buttons {
                let pressed = snapshot.pressed == button && snapshot.hovered == button;
                let background = match (button, pressed, snapshot.hovered == button) {
                    (TitleButton::Close, true, _) => Some(COL_CLOSE_PRESSED),
                    (TitleButton::Close, false, true) => Some(COL_CLOSE_HOVER),
                    (_, true, _) => Some(COL_PRESSED),
                    (_, false, true) => Some(COL_HOVER),
                    _ => None,
                };
                if let Some(color) = background {
                    fill(hdc, &rect, color);
                }
                draw_glyph(hdc, button, &rect, dpi_scale(GLYPH_SIZE, dpi), IsZoomed(hwnd).as_bool());
            }

            SelectObject(hdc, old_pen);
            let _ = DeleteObject(pen.into());
        }

        let _ = EndPaint(hwnd, &mut ps);
    }
}

unsafe fn draw_glyph(hdc: HDC, button: TitleButton, rect: &RECT, size: i32, maximized: bool) {
    let cx = (rect.left + rect.right) / 2;
    let cy = (rect.top + rect.bottom) / 2;
    let half = size / 2;
    let (left, top, right, bottom) = (cx - half, cy - half, cx + half, cy + half);

    unsafe {
        let line = |x0: i32, y0: i32, x1: i32, y1: i32| {
            let _ = MoveToEx(hdc, x0, y0, None);
            let _ = LineTo(hdc, x1, y1);
        };
        let square = |l: i32, t: i32, r: i32, b: i32| {
            line(l, t, r, t);
            line(r, t, r, b);
            line(r, b, l, b);
            line(l, b, l, t);
        };

        match button {
            TitleButton::Minimize => line(left, cy, right + 1, cy),
            TitleButton::Maximize if maximized => {
                let offset = (size / 5).max(2);
                square(left, top + offset, right - offset, bottom);
                line(left + offset, top + offset, left + offset, top);
                line(left + offset, top, right, top);
                line(right, top, right, bottom - offset);
                line(right, bottom - offset, right - offset, bottom - offset);
            }
            TitleButton::Maximize => square(left, top, right, bottom),
            TitleButton::Close => {
                line(left, top, right + 1, bottom + 1);
                line(right, top, left - 1, bottom + 1);
            }
            TitleButton::None => {}
        }
    }
}
