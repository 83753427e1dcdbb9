#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(windows)]
mod demo;

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    caption_buttons::log_info!(
        "[Demo] logging to {}",
        caption_buttons::debug_log::log_dir().display()
    );
    demo::run()
}

#[cfg(not(windows))]
fn main() {
    eprintln!("caption-buttons: the demo window needs Windows");
}
