use std::{cell::RefCell, rc::Rc};

use super::HistoryProvider;

/// A [`HistoryProvider`] that stores the fragment in memory.
///
/// The provider is a cheap clone over shared state. Keep a clone around when
/// handing one to a router, and use [`emit`](MemoryHistoryProvider::emit) to
/// simulate an external fragment change:
///
/// ```rust
/// # use hash_router::prelude::*;
/// let history = MemoryHistoryProvider::new();
/// let router = HashRouter::new(Box::new(history.clone()));
/// # router.add_routes([RouteDefinition::new("users/:id", "user")]);
///
/// history.emit("/users/42/");
/// ```
#[derive(Clone, Default)]
pub struct MemoryHistoryProvider {
    state: Rc<RefCell<MemoryHistoryState>>,
}

#[derive(Default)]
struct MemoryHistoryState {
    hash: String,
    updater: Option<Rc<dyn Fn()>>,
}

impl MemoryHistoryProvider {
    /// Create a new [`MemoryHistoryProvider`] with an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a new [`MemoryHistoryProvider`] with the provided fragment.
    #[must_use]
    pub fn with_hash(hash: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.state.borrow_mut().hash = hash.into();
        provider
    }

    /// Simulate an external fragment change.
    ///
    /// Sets the fragment and invokes the router's update callback, like a
    /// browser firing `hashchange` after a manual URL edit.
    pub fn emit(&self, hash: impl Into<String>) {
        self.state.borrow_mut().hash = hash.into();

        let updater = self.state.borrow().updater.clone();
        if let Some(updater) = updater {
            (updater)();
        }
    }
}

impl HistoryProvider for MemoryHistoryProvider {
    fn current_hash(&self) -> String {
        self.state.borrow().hash.clone()
    }

    fn set_hash(&mut self, hash: String) {
        self.state.borrow_mut().hash = hash;
    }

    fn updater(&mut self, callback: Rc<dyn Fn()>) {
        self.state.borrow_mut().updater = Some(callback);
    }
}
