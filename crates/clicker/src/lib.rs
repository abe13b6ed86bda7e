//! Clicker demo application
//!
//! Two buttons, two toasts. The short-toast button is protected against
//! rapid taps; the long-toast button is not unless configured otherwise.

pub mod activity;
pub mod config;
pub mod script;
pub mod toast;
pub mod widget;

pub use activity::{ButtonId, MainActivity, ToastMessages};
pub use config::AppConfig;
pub use toast::{DisplaySurface, RecordingSurface, TerminalSurface, Toast, ToastLength, Toasty};
