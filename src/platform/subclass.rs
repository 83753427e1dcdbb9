//! Window procedure subclassing.
//!
//! `attach` replaces the view window's procedure (and, when the view is a
//! child, the top-level window's) with `subclass_wnd_proc`. The procedure finds
//! the window's `HandlerChain` in a per-thread table keyed by window handle, so
//! any number of windows can be attached. Each chain ends with the procedure it
//! replaced.

use super::{Win32Host, Win32Input};
use crate::bridge::{HostBridge, TitleBarPlugin};
use crate::config::SharedConfig;
use crate::log_info;
use crate::title_bar::messages::{HandlerChain, MessageHandler, TopLevelHook, WindowMessage};
use crate::title_bar::TitleBar;
use anyhow::{bail, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

struct Subclass {
    chain: HandlerChain,
    original: WNDPROC,
}

thread_local! {
    static SUBCLASSES: RefCell<HashMap<isize, Rc<Subclass>>> = RefCell::new(HashMap::new());
}

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

/// The procedure that was in place before subclassing.
struct OriginalProc {
    proc: WNDPROC,
}

impl MessageHandler for OriginalProc {
    fn handle(&self, message: &WindowMessage) -> Option<LRESULT> {
        self.proc?;
        Some(unsafe {
            CallWindowProcW(
                self.proc,
                message.hwnd,
                message.msg,
                message.wparam,
                message.lparam,
            )
        })
    }
}

unsafe extern "system" fn subclass_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    // Clone out of the table: handlers may re-enter this procedure.
    let subclass = SUBCLASSES.with(|table| table.borrow().get(&key(hwnd)).cloned());
    let message = WindowMessage::new(hwnd, msg, wparam, lparam);

    let result = subclass
        .and_then(|subclass| subclass.chain.dispatch(&message))
        .unwrap_or_else(|| unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) });

    if msg == WM_NCDESTROY {
        // The handle may be reused after this.
        SUBCLASSES.with(|table| table.borrow_mut().remove(&key(hwnd)));
    }
    result
}

/// Installs `handlers` in front of the window's current procedure.
unsafe fn install(hwnd: HWND, handlers: HandlerChain) -> Result<()> {
    unsafe {
        SetLastError(WIN32_ERROR(0));
        let previous = SetWindowLongPtrW(
            hwnd,
            GWLP_WNDPROC,
            our_proc(),
        );
        if previous == 0 && GetLastError() != ERROR_SUCCESS {
            bail!(
                "failed to subclass window {:?}: {:?}",
                hwnd.0,
                GetLastError()
            );
        }

        let original: WNDPROC = std::mem::transmute(previous);
        let chain = handlers.with(OriginalProc { proc: original });
        SUBCLASSES.with(|table| {
            table
                .borrow_mut()
                .insert(key(hwnd), Rc::new(Subclass { chain, original }))
        });
    }
    Ok(())
}

fn our_proc() -> isize {
    subclass_wnd_proc as *const () as isize
}

/// Puts the original procedure back. When another hook has been installed on
/// top of ours since, the entry stays as a plain forwarder to the original
/// procedure so that hook's chain keeps working.
unsafe fn uninstall(hwnd: HWND) {
    let Some(subclass) = SUBCLASSES.with(|table| table.borrow_mut().remove(&key(hwnd))) else {
        return;
    };
    unsafe {
        if !IsWindow(Some(hwnd)).as_bool() {
            return;
        }
        if GetWindowLongPtrW(hwnd, GWLP_WNDPROC) == our_proc() {
            let original = subclass.original.map_or(0, |proc| proc as *const () as isize);
            SetWindowLongPtrW(hwnd, GWLP_WNDPROC, original);
            return;
        }
    }

    log_info!(
        "[TitleBar] {:?} was subclassed again after us, forwarding only",
        hwnd.0
    );
    let forwarder = Subclass {
        chain: HandlerChain::new().with(OriginalProc {
            proc: subclass.original,
        }),
        original: subclass.original,
    };
    SUBCLASSES.with(|table| table.borrow_mut().insert(key(hwnd), Rc::new(forwarder)));
}

/// Live subclassing of one view window. Dropping it (or calling `detach`)
/// stops the hover poll and restores the window procedures, view first.
pub struct Attachment {
    view: HWND,
    top_level: Option<HWND>,
    title_bar: Rc<TitleBar<Win32Host>>,
    detached: bool,
}

impl Attachment {
    pub fn view(&self) -> HWND {
        self.view
    }

    pub fn title_bar(&self) -> &TitleBar<Win32Host> {
        &self.title_bar
    }

    pub fn detach(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;

        self.title_bar.stop_polling();
        unsafe {
            uninstall(self.view);
            if let Some(top_level) = self.top_level {
                uninstall(top_level);
            }
        }
        log_info!("[TitleBar] detached from {:?}", self.view.0);
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Subclasses `view` so its caption buttons take part in hit-testing.
///
/// Must be called on the thread that owns `view`.
pub fn attach(view: HWND, config: SharedConfig, bridge: Rc<dyn HostBridge>) -> Result<Attachment> {
    unsafe {
        if !IsWindow(Some(view)).as_bool() {
            bail!("cannot attach title bar: {:?} is not a window", view.0);
        }
        if SUBCLASSES.with(|table| table.borrow().contains_key(&key(view))) {
            bail!("title bar already attached to {:?}", view.0);
        }

        let root = GetAncestor(view, GA_ROOT);
        let top_level = if !root.is_invalid()
            && root != view
            && !SUBCLASSES.with(|table| table.borrow().contains_key(&key(root)))
        {
            install(root, HandlerChain::new().with(TopLevelHook))?;
            Some(root)
        } else {
            None
        };

        let title_bar = Rc::new(TitleBar::new(Win32Host::new(view), config, bridge));
        if let Err(err) = install(view, HandlerChain::new().with(title_bar.clone())) {
            if let Some(top_level) = top_level {
                uninstall(top_level);
            }
            return Err(err);
        }

        log_info!(
            "[TitleBar] attached to {:?} (top-level hook: {})",
            view.0,
            top_level.is_some()
        );

        Ok(Attachment {
            view,
            top_level,
            title_bar,
            detached: false,
        })
    }
}

/// Plugin whose `releaseMouse` falls back to `view`.
pub fn plugin_for(view: HWND, config: SharedConfig) -> TitleBarPlugin {
    TitleBarPlugin::new(config, Box::new(Win32Input::new(view)))
}
