// src/clipboard.rs
//
// Copy-one / copy-all. The sink is a trait so the GUI and CLI share the
// arboard-backed clipboard while tests can record writes.

use crate::csv::paths_text;
use crate::error::ClipboardError;
use crate::filter::FilteredView;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard. Opened lazily and kept alive, since some
/// platforms drop the contents when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For short-lived processes. On X11/Wayland the write blocks until
    /// another client takes ownership of the selection; the owner has to
    /// stay alive to serve the contents.
    pub fn blocking() -> Self {
        Self { inner: None, wait: true }
    }

    pub fn waits(&self) -> bool {
        self.wait
    }
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn write_text(cb: &mut arboard::Clipboard, text: &str, wait: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    if wait {
        cb.set().wait().text(text.to_owned())
    } else {
        cb.set_text(text.to_owned())
    }
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn write_text(cb: &mut arboard::Clipboard, text: &str, _wait: bool) -> Result<(), arboard::Error> {
    cb.set_text(text.to_owned())
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        let wait = self.wait;
        match self.inner.as_mut() {
            Some(cb) => write_text(cb, text, wait).map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable(s!("not initialised"))),
        }
    }
}

/// What a copy did, phrased for a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyOutcome {
    pub count: usize,
    pub single: bool,
    pub error: Option<ClipboardError>,
}

impl CopyOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn message(&self) -> String {
        match (self.single, self.is_ok()) {
            (true, true)   => s!("XPath copied to clipboard!"),
            (true, false)  => s!("Failed to copy XPath"),
            (false, true)  => format!("Copied {} XPaths to clipboard!", self.count),
            (false, false) => s!("Failed to copy XPaths"),
        }
    }
}

pub fn copy_one(sink: &mut dyn ClipboardSink, xpath: &str) -> CopyOutcome {
    let error = sink.set_text(xpath).err();
    match &error {
        None => logf!("Copy: one → {}", xpath),
        Some(e) => loge!("Copy: one failed: {}", e),
    }
    CopyOutcome { count: 1, single: true, error }
}

pub fn copy_all(sink: &mut dyn ClipboardSink, view: &FilteredView<'_>) -> CopyOutcome {
    let text = paths_text(view.iter());
    let error = sink.set_text(&text).err();
    match &error {
        None => logf!("Copy: all rows={}", view.len()),
        Some(e) => loge!("Copy: all failed: {}", e),
    }
    CopyOutcome { count: view.len(), single: false, error }
}
