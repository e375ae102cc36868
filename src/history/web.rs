use std::rc::Rc;

use gloo::events::EventListener;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::{window, History, Window};

use super::HistoryProvider;

/// A [`HistoryProvider`] that integrates with a browser via the
/// [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).
///
/// Router-driven navigation is pushed with `pushState`, which does not fire
/// `hashchange`; the router's own match pass is the only notification.
/// External fragment changes (back/forward buttons, manual URL edits) arrive
/// through a `hashchange` listener and go through the updater callback.
pub struct WebHashHistoryProvider {
    history: History,
    listener_navigation: Option<EventListener>,
    window: Window,
}

impl WebHashHistoryProvider {
    /// Create a new [`WebHashHistoryProvider`] for the current `window`.
    #[must_use]
    pub fn new() -> Self {
        let window = window().expect("access to `window`");
        let history = window.history().expect("`window` has access to `history`");

        Self {
            history,
            listener_navigation: None,
            window,
        }
    }
}

impl Default for WebHashHistoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryProvider for WebHashHistoryProvider {
    fn current_hash(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        hash.strip_prefix('#').unwrap_or(&hash).to_string()
    }

    fn set_hash(&mut self, hash: String) {
        let url = format!("#{hash}");
        if let Err(e) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            error!("failed to push history state: {e:?}");
        }
    }

    fn updater(&mut self, callback: Rc<dyn Fn()>) {
        self.listener_navigation = Some(EventListener::new(&self.window, "hashchange", move |_| {
            (*callback)();
        }));
    }
}
