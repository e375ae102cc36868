use regex::Regex;

/// A compiled path pattern.
///
/// Each `:name` placeholder in the source path becomes a capture group
/// matching one or more characters of `[A-Za-z0-9_-]`; all other characters
/// match literally. The pattern is deliberately not anchored: a parent
/// route's pattern is expected to match anywhere inside a longer child hash,
/// which is what the containment scan in the matcher relies on.
#[derive(Clone, Debug)]
pub(crate) struct PathPattern {
    matcher: Regex,
    keys: Vec<String>,
}

/// A `:name` placeholder, as far as the matcher is concerned.
const PARAMETER_TOKEN: &str = r":[^\s/]+";

/// A `:name` placeholder with a well-formed name. Names consist of lowercase
/// ASCII letters only; the parameter *values* they capture are more
/// permissive.
const PARAMETER_KEY: &str = ":[a-z]+";

impl PathPattern {
    /// Compile the provided path.
    pub(crate) fn new(path: &str) -> Self {
        let token = Regex::new(PARAMETER_TOKEN).expect("hard-coded pattern is valid");

        let mut pattern = String::new();
        let mut last = 0;
        for m in token.find_iter(path) {
            pattern.push_str(&regex::escape(&path[last..m.start()]));
            pattern.push_str("([A-Za-z0-9_-]+)");
            last = m.end();
        }
        pattern.push_str(&regex::escape(&path[last..]));

        Self {
            // literal parts are escaped, so the pattern is always valid
            matcher: Regex::new(&pattern).expect("escaped route path compiles"),
            keys: extract_keys(path),
        }
    }

    /// The parameter names of the source path, in order of appearance.
    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Check whether `hash` contains this pattern.
    #[must_use]
    pub(crate) fn is_match(&self, hash: &str) -> bool {
        self.matcher.is_match(hash)
    }

    /// Match `hash` against this pattern and return the captured parameter
    /// values in declaration order.
    #[must_use]
    pub(crate) fn captures(&self, hash: &str) -> Option<Vec<String>> {
        self.matcher.captures(hash).map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect()
        })
    }
}

/// Scan `path` for well-formed parameter names.
fn extract_keys(path: &str) -> Vec<String> {
    let key = Regex::new(PARAMETER_KEY).expect("hard-coded pattern is valid");
    key.find_iter(path)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_path() {
        let p = PathPattern::new("/app/settings/");

        assert!(p.keys().is_empty());
        assert!(p.is_match("/app/settings/"));
        assert!(!p.is_match("/app/"));
    }

    #[test]
    fn substring_match() {
        let p = PathPattern::new("/app/");

        assert!(p.is_match("/app/settings/"));
    }

    #[test]
    fn parameter_keys_in_order() {
        let p = PathPattern::new("/users/:id/posts/:post/");

        assert_eq!(p.keys(), ["id", "post"]);
    }

    #[test]
    fn parameter_captures() {
        let p = PathPattern::new("/users/:id/posts/:post/");

        assert_eq!(
            p.captures("/users/42/posts/first-post/"),
            Some(vec![String::from("42"), String::from("first-post")])
        );
        assert_eq!(p.captures("/users/42/"), None);
    }

    #[test]
    fn parameter_value_character_class() {
        let p = PathPattern::new("/users/:id/");

        assert!(p.is_match("/users/a_b-C9/"));
        assert!(!p.is_match("/users/a.b/"));
    }

    #[test]
    fn literals_are_escaped() {
        let p = PathPattern::new("/v1.0/");

        assert!(p.is_match("/v1.0/"));
        assert!(!p.is_match("/v1x0/"));
    }

    #[test]
    fn keys_are_lowercase_only() {
        // the match token is more permissive than the key scan
        assert_eq!(extract_keys("/a/:id/:Weird/"), ["id"]);
    }
}
