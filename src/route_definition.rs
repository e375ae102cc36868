//! The route tree as authored by the application.

use std::collections::BTreeMap;

/// A single route in the declared route tree.
///
/// A [`RouteDefinition`] pairs a path (which may contain `:parameter`
/// placeholders) with a name, and may nest further definitions. The full path
/// of a nested route is its ancestors' paths joined with its own, so the tree
/// shape mirrors the hash hierarchy.
///
/// # Example
/// ```rust
/// # use hash_router::prelude::*;
/// RouteDefinition::new("users/:id", "user")
///     .option("layout", "sidebar")
///     .sub_route(RouteDefinition::new("posts/:post", "user_post"));
/// ```
#[derive(Clone, Debug)]
pub struct RouteDefinition {
    pub(crate) path: String,
    pub(crate) name: &'static str,
    pub(crate) options: BTreeMap<&'static str, String>,
    pub(crate) sub_routes: Vec<RouteDefinition>,
}

impl RouteDefinition {
    /// Create a new [`RouteDefinition`] with the provided `path` and `name`.
    ///
    /// Parameter placeholders use the `:name` syntax, where the name consists
    /// of lowercase ASCII letters. Make sure the `name` is unique among all
    /// routes registered on a router; duplicates are not detected and the
    /// first registered route wins on lookup.
    ///
    /// # Example
    /// ```rust
    /// # use hash_router::prelude::*;
    /// RouteDefinition::new("users/:id", "user");
    /// ```
    pub fn new(path: impl Into<String>, name: &'static str) -> Self {
        Self {
            path: path.into(),
            name,
            options: Default::default(),
            sub_routes: Default::default(),
        }
    }

    /// Attach an option.
    ///
    /// Options are opaque to the router. They are carried over into every
    /// [`MatchedRoute`](crate::MatchedRoute) produced for this route, which
    /// lets applications attach rendering hints to routes.
    pub fn option(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.options.insert(key, value.into());
        self
    }

    /// Nest another route below this one.
    ///
    /// The nested route's full path is this route's full path followed by its
    /// own. Can be called multiple times; sub-routes keep their insertion
    /// order.
    ///
    /// # Example
    /// ```rust
    /// # use hash_router::prelude::*;
    /// RouteDefinition::new("app", "app")
    ///     .sub_route(RouteDefinition::new("settings", "settings"));
    /// ```
    pub fn sub_route(mut self, route: RouteDefinition) -> Self {
        self.sub_routes.push(route);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let r = RouteDefinition::new("users/:id", "user");

        assert_eq!(r.path, "users/:id");
        assert_eq!(r.name, "user");
        assert!(r.options.is_empty());
        assert!(r.sub_routes.is_empty());
    }

    #[test]
    fn option() {
        let r = RouteDefinition::new("", "").option("key", "value");

        assert_eq!(r.options.get("key"), Some(&String::from("value")));
    }

    #[test]
    fn sub_route_keeps_order() {
        let r = RouteDefinition::new("app", "app")
            .sub_route(RouteDefinition::new("first", "first"))
            .sub_route(RouteDefinition::new("second", "second"));

        let names: Vec<_> = r.sub_routes.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
