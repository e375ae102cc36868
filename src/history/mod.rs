//! Location integration.
//!
//! The router relies on a [`HistoryProvider`] to read and write the current
//! URL fragment. To integrate the router with any kind of location source,
//! all you have to do is implement the [`HistoryProvider`] trait. Two
//! implementations ship with the crate: [`MemoryHistoryProvider`] for native
//! use and deterministic tests, and `WebHashHistoryProvider` (behind the
//! `web` feature) for browsers.

use std::rc::Rc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of location source.
pub trait HistoryProvider {
    /// Get the current fragment.
    ///
    /// **Must _not_ contain** the leading `#`. May contain a query part; the
    /// router strips it before matching.
    ///
    /// ```rust
    /// # use hash_router::prelude::*;
    /// let mut history = MemoryHistoryProvider::new();
    /// assert_eq!(history.current_hash(), "");
    ///
    /// history.set_hash(String::from("/users/42/"));
    /// assert_eq!(history.current_hash(), "/users/42/");
    /// ```
    #[must_use]
    fn current_hash(&self) -> String;

    /// Write a new fragment.
    ///
    /// This must not re-enter the router: after a router-driven navigation
    /// the router performs its own match pass. Only *external* fragment
    /// changes go through the updater callback.
    fn set_hash(&mut self, hash: String);

    /// Provide the [`HistoryProvider`] with an update callback.
    ///
    /// Some [`HistoryProvider`]s may receive fragment updates from outside
    /// the router. When such updates are received, they should call
    /// `callback`, which will cause the router to run a match pass and notify
    /// its observers.
    #[allow(unused_variables)]
    fn updater(&mut self, callback: Rc<dyn Fn()>) {}
}
