//! The compiled route registry.

use std::collections::BTreeMap;

use log::error;

use crate::route_definition::RouteDefinition;

mod pattern;
pub(crate) use pattern::PathPattern;

/// Bring a hash into canonical form.
///
/// The result always starts and ends with `/` and contains no repeated `/`,
/// regardless of how the input was assembled. The operation is idempotent.
///
/// # Example
/// ```rust
/// # use hash_router::ensure_hash;
/// assert_eq!(ensure_hash("users//42"), "/users/42/");
/// assert_eq!(ensure_hash(""), "/");
/// ```
#[must_use]
pub fn ensure_hash(hash: &str) -> String {
    let mut canonical = String::with_capacity(hash.len() + 2);
    canonical.push('/');
    for c in hash.chars() {
        if c == '/' && canonical.ends_with('/') {
            continue;
        }
        canonical.push(c);
    }
    if !canonical.ends_with('/') {
        canonical.push('/');
    }
    canonical
}

/// A single route after compilation.
///
/// The path is canonical (see [`ensure_hash`]) and already joined with all
/// ancestor paths.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRoute {
    pub(crate) path: String,
    pub(crate) name: &'static str,
    pub(crate) options: BTreeMap<&'static str, String>,
    pub(crate) pattern: PathPattern,
}

impl CompiledRoute {
    /// Substitute the parameter values into this route's path.
    ///
    /// Values are inserted verbatim; escaping them is the caller's business.
    /// Returns [`None`] if any declared parameter is missing from `values`,
    /// so a path with an unsubstituted `:name` token is never produced.
    #[must_use]
    pub(crate) fn build_path(&self, values: &BTreeMap<String, String>) -> Option<String> {
        let mut path = self.path.clone();
        for key in self.pattern.keys() {
            let value = match values.get(key) {
                Some(value) => value,
                None => {
                    error!(r#"no value for parameter "{key}", route "{name}""#, name = self.name);
                    return None;
                }
            };
            path = path.replace(&format!(":{key}"), value);
        }
        Some(path)
    }

    /// Check whether `values` provides every parameter this route declares.
    ///
    /// Extra keys in `values` are ignored.
    #[must_use]
    pub(crate) fn is_valid(&self, values: &BTreeMap<String, String>) -> bool {
        self.pattern.keys().iter().all(|key| values.contains_key(key))
    }
}

/// The flat, insertion-ordered list of compiled routes.
///
/// Built by a pre-order traversal of the declared route tree, so an
/// ancestor's entry always precedes its descendants', with siblings in
/// declaration order. The matcher depends on this order.
#[derive(Debug, Default)]
pub(crate) struct RouteTree {
    routes: Vec<CompiledRoute>,
}

impl RouteTree {
    /// Compile `definitions` and append them to the tree.
    ///
    /// Each route's full path is its parent's path joined with its own and
    /// brought into canonical form. No validation is performed: duplicate
    /// names or colliding paths are the caller's responsibility.
    pub(crate) fn add_routes(
        &mut self,
        definitions: impl IntoIterator<Item = RouteDefinition>,
        parent_path: &str,
    ) {
        for definition in definitions {
            let path = ensure_hash(&format!("{parent_path}/{}", definition.path));
            self.routes.push(CompiledRoute {
                pattern: PathPattern::new(&path),
                name: definition.name,
                options: definition.options,
                path: path.clone(),
            });
            self.add_routes(definition.sub_routes, &path);
        }
    }

    /// Find a route by name. The first registered route wins.
    #[must_use]
    pub(crate) fn by_name(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// The compiled routes in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &CompiledRoute> {
        self.routes.iter()
    }
}
