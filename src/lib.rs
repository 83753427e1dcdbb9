//! Custom caption buttons for borderless Win32 windows.
//!
//! The window draws its own minimize / maximize / close glyphs, while this crate
//! keeps those regions first-class caption buttons for the OS: it substitutes the
//! `WM_NCHITTEST` codes, tracks hover (with a polling fallback for hover exit),
//! arbitrates press/release into clicks and reports everything to a host bridge.

pub mod debug_log;

pub mod bridge;
pub mod config;
pub mod platform;
pub mod title_bar;

pub use bridge::{HostBridge, MethodCall, MethodError, TitleBarPlugin};
pub use config::{SharedConfig, TitleBarConfig};
pub use title_bar::{EventKind, TitleBar, TitleBarEvent, TitleButton};
