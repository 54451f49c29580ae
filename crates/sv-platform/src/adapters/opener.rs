use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use sv_core::ports::UrlOpenerPort;

/// Opens URLs with the system's default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }
}

impl UrlOpenerPort for SystemUrlOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("opening {url}");
        open::that(url).with_context(|| format!("Failed to open URL: {url}"))
    }
}

/// Headless stand-in for [`SystemUrlOpener`]: prints the URL for the user
/// to follow.
pub struct PrintUrlOpener {
    out: Mutex<Box<dyn Write + Send>>,
}

impl PrintUrlOpener {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl UrlOpenerPort for PrintUrlOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("output lock poisoned"))?;
        writeln!(out, "Open: {url}").context("Failed to print URL")?;
        out.flush().context("Failed to print URL")?;
        log::debug!("no desktop session, printed {url}");
        Ok(())
    }
}

/// Whether a desktop URL handler can be reached from this process.
pub fn has_desktop_session() -> bool {
    desktop_session_from(
        std::env::var_os("DISPLAY"),
        std::env::var_os("WAYLAND_DISPLAY"),
    )
}

/// On X11/Wayland platforms a session needs `DISPLAY` or
/// `WAYLAND_DISPLAY`; macOS and Windows always have one.
fn desktop_session_from(display: Option<OsString>, wayland_display: Option<OsString>) -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    [display, wayland_display]
        .iter()
        .flatten()
        .any(|value| !value.is_empty())
}
