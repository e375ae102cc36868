//! Finding the chain of routes that account for a hash.

use std::collections::BTreeMap;

use log::error;

use crate::routes::{ensure_hash, RouteTree};

/// The name of the sentinel route appended to a match chain when no declared
/// route fully reconstructs the current hash.
pub const NOT_FOUND_NAME: &str = "notFound";

/// A route that matched the current hash.
///
/// Produced fresh on every match pass and handed to observers; the router
/// keeps no history of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedRoute {
    /// The name the route was declared with.
    pub name: &'static str,

    /// The options the route was declared with.
    pub options: BTreeMap<&'static str, String>,

    /// The parameter values extracted from the hash, keyed by parameter name.
    pub values: BTreeMap<String, String>,
}

impl MatchedRoute {
    /// The sentinel appended to a chain whose last route does not fully
    /// reconstruct the current hash.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            name: NOT_FOUND_NAME,
            options: Default::default(),
            values: Default::default(),
        }
    }

    /// Check whether this is the not-found sentinel.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.name == NOT_FOUND_NAME
    }
}

/// Find all routes accounting for `hash`, in root-to-leaf order.
///
/// Scans the tree in insertion order. A route is part of the chain if its
/// pattern matches the hash *and* its path contains the path of the
/// previously matched route, which is what makes the chain nest correctly.
///
/// Afterwards the last matched route's path is rebuilt from its extracted
/// values; if it differs from the hash (extra segments the patterns never
/// accounted for), the not-found sentinel is appended. An empty chain gets
/// the sentinel alone; trees are expected to declare a root that matches
/// every hash.
#[must_use]
pub(crate) fn match_hash(tree: &RouteTree, hash: &str) -> Vec<MatchedRoute> {
    let hash = ensure_hash(hash);

    let mut matched = Vec::new();
    let mut last_matched_path = "";
    for route in tree.iter() {
        if !route.pattern.is_match(&hash) {
            continue;
        }

        // only routes nesting below the previous match stay in the chain
        if !route.path.contains(last_matched_path) {
            continue;
        }
        last_matched_path = &route.path;

        let captures = match route.pattern.captures(&hash) {
            Some(captures) => captures,
            None => continue,
        };

        let values = route
            .pattern
            .keys()
            .iter()
            .cloned()
            .zip(captures)
            .collect();
        matched.push(MatchedRoute {
            name: route.name,
            options: route.options.clone(),
            values,
        });
    }

    if !chain_reconstructs(tree, &matched, &hash) {
        matched.push(MatchedRoute::not_found());
    }

    matched
}

/// Check whether rebuilding the last matched route's path from its extracted
/// values yields the current hash.
///
/// The patterns themselves are not anchored, so a match can succeed even when
/// the hash carries extra content no declared route accounts for. Rebuilding
/// and comparing catches exactly that case.
fn chain_reconstructs(tree: &RouteTree, matched: &[MatchedRoute], hash: &str) -> bool {
    let last = match matched.last() {
        Some(last) => last,
        None => {
            error!(r#"no route matched "{hash}", missing a root route?"#);
            return false;
        }
    };

    let expected = tree
        .by_name(last.name)
        .and_then(|route| route.build_path(&last.values));
    expected.as_deref() == Some(hash)
}
