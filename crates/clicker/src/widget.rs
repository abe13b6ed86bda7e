//! Minimal button widget

use rapidclick::OnClick;
use std::fmt;

/// A labelled button holding at most one click listener
pub struct Button {
    label: String,
    listener: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            listener: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Deliver a click to the listener
    ///
    /// Returns `false` if no listener is attached.
    pub fn perform_click(&mut self) -> bool {
        match self.listener.as_mut() {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }
}

impl OnClick for Button {
    fn set_on_click_listener(&mut self, listener: Box<dyn FnMut()>) {
        self.listener = Some(listener);
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
