//! Click-listener extension for toolkit views

use crate::debounce::Debouncer;

/// A view that accepts a click listener
///
/// Implemented by the hosting toolkit's widgets. Setting a listener replaces
/// the previous one.
pub trait OnClick {
    fn set_on_click_listener(&mut self, listener: Box<dyn FnMut()>);
}

/// Install click listeners that ignore rapid repeated taps
pub trait RapidSafeClick: OnClick {
    /// Run `action` on click, unless `debouncer` rejects the click
    fn rapid_safe_click_listener<F>(&mut self, debouncer: Debouncer, action: F)
    where
        F: FnMut() + 'static,
    {
        let mut guarded = debouncer.guard(action);
        self.set_on_click_listener(Box::new(move || {
            guarded.handle();
        }));
    }

    /// 300 ms guard measured against the process-wide timestamp
    fn rapid_safe_click_listener_default<F>(&mut self, action: F)
    where
        F: FnMut() + 'static,
    {
        self.rapid_safe_click_listener(Debouncer::default(), action);
    }
}

impl<V: OnClick + ?Sized> RapidSafeClick for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeView {
        listener: Option<Box<dyn FnMut()>>,
    }

    impl FakeView {
        fn tap(&mut self) {
            if let Some(listener) = self.listener.as_mut() {
                listener();
            }
        }
    }

    impl OnClick for FakeView {
        fn set_on_click_listener(&mut self, listener: Box<dyn FnMut()>) {
            self.listener = Some(listener);
        }
    }

    #[test]
    fn test_listener_debounces_taps() {
        let clock = Arc::new(ManualClock::new(0));
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);

        let mut view = FakeView::default();
        view.rapid_safe_click_listener(
            Debouncer::isolated(300).with_clock(clock.clone()),
            move || hits.set(hits.get() + 1),
        );

        view.tap();
        clock.set(120);
        view.tap();
        clock.set(300);
        view.tap();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_default_listener_lets_first_tap_through() {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);

        let mut view = FakeView::default();
        view.rapid_safe_click_listener_default(move || hits.set(hits.get() + 1));
        view.tap();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_listener_replaces_previous() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (f, s) = (Rc::clone(&first), Rc::clone(&second));

        let mut view = FakeView::default();
        view.rapid_safe_click_listener(Debouncer::isolated(0), move || f.set(f.get() + 1));
        view.rapid_safe_click_listener(Debouncer::isolated(0), move || s.set(s.get() + 1));
        view.tap();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}
