//! Transient notifications
//!
//! A toast is a message plus one of two display lengths. Where it ends up
//! is decided by the [`DisplaySurface`] it is shown on.

use owo_colors::OwoColorize;
use parking_lot::Mutex;
use rapidclick::MonotonicClock;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// How long a toast stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLength {
    Short,
    Long,
}

impl ToastLength {
    pub fn duration(self) -> Duration {
        match self {
            ToastLength::Short => Duration::from_millis(2000),
            ToastLength::Long => Duration::from_millis(3500),
        }
    }
}

impl fmt::Display for ToastLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastLength::Short => f.write_str("short"),
            ToastLength::Long => f.write_str("long"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub length: ToastLength,
}

impl Toast {
    pub fn make_text(message: impl Into<String>, length: ToastLength) -> Self {
        Self {
            message: message.into(),
            length,
        }
    }
}

/// Somewhere toasts can be displayed
pub trait DisplaySurface {
    fn show(&self, toast: Toast);
}

/// Convenience entry points for the two toast lengths
pub struct Toasty;

impl Toasty {
    pub fn show_short(surface: &dyn DisplaySurface, message: &str) {
        surface.show(Toast::make_text(message, ToastLength::Short));
    }

    pub fn show_long(surface: &dyn DisplaySurface, message: &str) {
        surface.show(Toast::make_text(message, ToastLength::Long));
    }
}

/// Prints toasts to stdout
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn show(&self, toast: Toast) {
        let tag = format!("[{} {}ms]", toast.length, toast.length.duration().as_millis());
        match toast.length {
            ToastLength::Short => println!("{} {}", tag.cyan(), toast.message),
            ToastLength::Long => println!("{} {}", tag.magenta(), toast.message.bold()),
        }
    }
}

/// A toast together with the clock reading it was shown at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownToast {
    pub toast: Toast,
    pub at_ms: u64,
}

/// Keeps every toast it is asked to show
///
/// Clones share the same record.
#[derive(Clone)]
pub struct RecordingSurface {
    clock: Arc<dyn MonotonicClock>,
    shown: Arc<Mutex<Vec<ShownToast>>>,
}

impl RecordingSurface {
    pub fn new(clock: Arc<dyn MonotonicClock>) -> Self {
        Self {
            clock,
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.shown.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.lock().is_empty()
    }

    pub fn last(&self) -> Option<ShownToast> {
        self.shown.lock().last().cloned()
    }

    pub fn toasts(&self) -> Vec<ShownToast> {
        self.shown.lock().clone()
    }
}

impl DisplaySurface for RecordingSurface {
    fn show(&self, toast: Toast) {
        let at_ms = self.clock.now_ms();
        tracing::debug!(at_ms, length = %toast.length, message = %toast.message, "toast shown");
        self.shown.lock().push(ShownToast { toast, at_ms });
    }
}
