//! The router instance.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::Rc,
};

use log::error;

use crate::{
    history::HistoryProvider,
    matching::{match_hash, MatchedRoute},
    navigation::{decode_query, Query},
    route_definition::RouteDefinition,
    routes::{ensure_hash, RouteTree},
};

/// A handle to a registered hash change observer.
///
/// Returned by [`HashRouter::on_hash_change`], accepted by
/// [`HashRouter::remove_hash_handler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandlerId(usize);

/// An observer invoked with the match chain on every hash change.
type Observer = Rc<dyn Fn(&[MatchedRoute])>;

/// The inner state of a [`HashRouter`].
struct RouterService {
    history: Box<dyn HistoryProvider>,
    listening: bool,
    next_handler: usize,
    observers: Vec<(HandlerId, Observer)>,
    routes: RouteTree,
}

impl RouterService {
    /// The current fragment with the query part stripped, in canonical form.
    fn location_hash(&self) -> String {
        let hash = self.history.current_hash();
        let hash = match hash.split_once('?') {
            Some((hash, _)) => hash,
            None => &hash,
        };
        ensure_hash(hash)
    }

    /// Build the path for `name`, with `values` substituted.
    ///
    /// Returns [`None`] (and logs) for an unknown name or a missing value.
    fn build_path(&self, name: &str, values: &BTreeMap<String, String>) -> Option<String> {
        let route = match self.routes.by_name(name) {
            Some(route) => route,
            None => {
                error!(r#"no route for name "{name}""#);
                return None;
            }
        };
        route.build_path(values)
    }
}

/// A hash router.
///
/// Owns the compiled route tree, the injected [`HistoryProvider`] and the
/// observer list. All operations run synchronously on the calling thread;
/// the router is single-threaded by design.
///
/// Cloning is cheap and yields a handle to the same router, which lets
/// observers navigate from within their callback.
///
/// # Example
/// ```rust
/// # use hash_router::prelude::*;
/// let router = HashRouter::new(Box::new(MemoryHistoryProvider::new()));
/// router.add_routes([RouteDefinition::new("users/:id", "user")]);
///
/// router.go("user", &[("id", "42")], Query::QNone);
/// assert_eq!(router.current_hash(), "/users/42/");
/// ```
#[derive(Clone)]
pub struct HashRouter {
    inner: Rc<RefCell<RouterService>>,
}

impl HashRouter {
    /// Create a new [`HashRouter`] on top of the provided location source.
    #[must_use]
    pub fn new(history: Box<dyn HistoryProvider>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RouterService {
                history,
                listening: false,
                next_handler: 0,
                observers: Vec::new(),
                routes: RouteTree::default(),
            })),
        }
    }

    /// Register routes.
    ///
    /// Compiles `definitions` into the route tree (appending to any routes
    /// registered earlier), subscribes to external fragment changes on the
    /// first call, and performs one synchronous match-and-notify pass against
    /// the current fragment.
    pub fn add_routes(&self, definitions: impl IntoIterator<Item = RouteDefinition>) {
        {
            let mut service = self.inner.borrow_mut();
            service.routes.add_routes(definitions, "");

            if !service.listening {
                service.listening = true;
                let weak = Rc::downgrade(&self.inner);
                service.history.updater(Rc::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        Self { inner }.update();
                    }
                }));
            }
        }

        self.update();
    }

    /// Register an observer.
    ///
    /// On every hash change the observer is invoked with the chain of matched
    /// routes, in root-to-leaf order. Observers are invoked in registration
    /// order; a panicking observer propagates to the caller of the operation
    /// that triggered the pass.
    pub fn on_hash_change(&self, observer: impl Fn(&[MatchedRoute]) + 'static) -> HandlerId {
        let mut service = self.inner.borrow_mut();
        let id = HandlerId(service.next_handler);
        service.next_handler += 1;
        service.observers.push((id, Rc::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown handles are ignored.
    pub fn remove_hash_handler(&self, id: HandlerId) {
        self.inner
            .borrow_mut()
            .observers
            .retain(|(handler, _)| *handler != id);
    }

    /// Navigate to the route registered under `name`.
    ///
    /// Writes the built path, with `values` substituted and `query` appended,
    /// to the location source and runs one match-and-notify pass. A no-op
    /// (logged) when the name is unknown or a declared parameter is missing
    /// from `values`.
    pub fn go(&self, name: &str, values: &[(&str, &str)], query: Query) {
        let path = self
            .inner
            .borrow()
            .build_path(name, &to_values(values));
        let path = match path {
            Some(path) => path,
            None => return,
        };

        let url = format!("{path}{query}", query = query.encode());
        self.inner.borrow_mut().history.set_hash(url);
        self.update();
    }

    /// Build a displayable `#`-prefixed URL for the route registered under
    /// `name`, without navigating.
    ///
    /// Returns [`None`] when the name is unknown or a declared parameter is
    /// missing from `values`.
    #[must_use]
    pub fn get_url(&self, name: &str, values: &[(&str, &str)]) -> Option<String> {
        let path = self.inner.borrow().build_path(name, &to_values(values))?;
        Some(format!("#{path}"))
    }

    /// Check whether a route named `name` exists and `values` provides every
    /// parameter it declares. Extra values are ignored.
    #[must_use]
    pub fn is_valid_route(&self, name: &str, values: &[(&str, &str)]) -> bool {
        let service = self.inner.borrow();
        match service.routes.by_name(name) {
            Some(route) => route.is_valid(&to_values(values)),
            None => false,
        }
    }

    /// Decode the query part of the current fragment.
    #[must_use]
    pub fn get_queries(&self) -> BTreeMap<String, String> {
        decode_query(&self.inner.borrow().history.current_hash())
    }

    /// Decode the query part of the current fragment and look up one key.
    #[must_use]
    pub fn get_query(&self, key: &str) -> Option<String> {
        self.get_queries().remove(key)
    }

    /// The current fragment in canonical form, with the query part stripped.
    #[must_use]
    pub fn current_hash(&self) -> String {
        self.inner.borrow().location_hash()
    }

    /// Run one match pass and notify all observers.
    fn update(&self) {
        let (chain, observers) = {
            let service = self.inner.borrow();
            let chain = match_hash(&service.routes, &service.location_hash());
            let observers: Vec<_> = service
                .observers
                .iter()
                .map(|(_, observer)| observer.clone())
                .collect();
            (chain, observers)
        };

        // the borrow is released: observers may call back into the router
        for observer in observers {
            (observer)(&chain);
        }
    }
}

fn to_values(values: &[(&str, &str)]) -> BTreeMap<String, String> {
    values
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
