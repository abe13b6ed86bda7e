//! Rapid-click protection for click handlers
//!
//! This crate provides:
//! - A debounce guard that drops repeated triggers inside a minimum interval
//! - Monotonic clock sources (system and manual)
//! - A click-listener extension for any view that accepts a listener
//! - Typed extras lookup for bundles and intents

pub mod clock;
pub mod debounce;
pub mod extras;
pub mod view;

// Re-exports
pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use debounce::{
    guard, guard_default, Debouncer, Decision, GuardScope, Guarded, LastAccepted,
    DEFAULT_INTERVAL_MS,
};
pub use extras::{ApiLevel, Bundle, ExtrasError, Intent, Parcelable, TYPED_EXTRAS_API};
pub use view::{OnClick, RapidSafeClick};
