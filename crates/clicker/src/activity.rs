//! The main (and only) screen

use crate::config::{AppConfig, DebounceConfig, DEFAULT_LONG_MESSAGE, DEFAULT_SHORT_MESSAGE};
use crate::toast::{DisplaySurface, Toasty};
use crate::widget::Button;
use rapidclick::{
    Debouncer, ExtrasError, Intent, MonotonicClock, OnClick, Parcelable, RapidSafeClick,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tracing::info;

pub const ACTION_MAIN: &str = "clicker.intent.action.MAIN";

/// Extra carrying [`ToastMessages`] in the launch intent
pub const EXTRA_TOAST_MESSAGES: &str = "clicker.extra.TOAST_MESSAGES";

/// Texts shown by the two buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessages {
    pub short: String,
    pub long: String,
}

impl Default for ToastMessages {
    fn default() -> Self {
        Self {
            short: DEFAULT_SHORT_MESSAGE.to_string(),
            long: DEFAULT_LONG_MESSAGE.to_string(),
        }
    }
}

impl Parcelable for ToastMessages {
    const TYPE_NAME: &'static str = "clicker.ToastMessages";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    ShortToast,
    LongToast,
}

impl ButtonId {
    /// Accepts `short`/`s` and `long`/`l`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" | "s" => Some(ButtonId::ShortToast),
            "long" | "l" => Some(ButtonId::LongToast),
            _ => None,
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonId::ShortToast => f.write_str("short"),
            ButtonId::LongToast => f.write_str("long"),
        }
    }
}

pub struct MainActivity {
    btn_short_toast: Button,
    btn_long_toast: Button,
    messages: ToastMessages,
}

impl MainActivity {
    /// Launch intent carrying the configured toast texts
    pub fn launch_intent(config: &AppConfig) -> Result<Intent, ExtrasError> {
        let mut intent = Intent::new(ACTION_MAIN, config.platform.api_level);
        intent.put_extra(
            EXTRA_TOAST_MESSAGES,
            &ToastMessages {
                short: config.toast.short_message.clone(),
                long: config.toast.long_message.clone(),
            },
        )?;
        Ok(intent)
    }

    /// Build the screen and wire up both buttons
    ///
    /// The short-toast button always goes through the rapid-click guard.
    /// The long-toast button gets a plain listener unless
    /// `debounce.guard_long_button` is set.
    pub fn on_create(
        surface: Rc<dyn DisplaySurface>,
        clock: Arc<dyn MonotonicClock>,
        intent: &Intent,
        debounce: &DebounceConfig,
    ) -> Self {
        let messages = intent
            .parcelable::<ToastMessages>(EXTRA_TOAST_MESSAGES)
            .unwrap_or_default();

        let debouncer = || -> Debouncer {
            debounce
                .scope
                .debouncer(debounce.interval_ms)
                .with_clock(Arc::clone(&clock))
        };

        let mut btn_short_toast = Button::new("Short Toast");
        let show_short = {
            let surface = Rc::clone(&surface);
            let message = messages.short.clone();
            move || Toasty::show_short(&*surface, &message)
        };
        btn_short_toast.rapid_safe_click_listener(debouncer(), show_short);

        let mut btn_long_toast = Button::new("Long Toast");
        let show_long = {
            let surface = Rc::clone(&surface);
            let message = messages.long.clone();
            move || Toasty::show_long(&*surface, &message)
        };
        if debounce.guard_long_button {
            btn_long_toast.rapid_safe_click_listener(debouncer(), show_long);
        } else {
            btn_long_toast.set_on_click_listener(Box::new(show_long));
        }

        info!(
            interval_ms = debounce.interval_ms,
            scope = %debounce.scope,
            guard_long_button = debounce.guard_long_button,
            api = %intent.extras().api_level(),
            "main activity created"
        );

        Self {
            btn_short_toast,
            btn_long_toast,
            messages,
        }
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::ShortToast => &self.btn_short_toast,
            ButtonId::LongToast => &self.btn_long_toast,
        }
    }

    /// Deliver a click to a button
    pub fn click(&mut self, id: ButtonId) -> bool {
        match id {
            ButtonId::ShortToast => self.btn_short_toast.perform_click(),
            ButtonId::LongToast => self.btn_long_toast.perform_click(),
        }
    }

    pub fn messages(&self) -> &ToastMessages {
        &self.messages
    }
}
