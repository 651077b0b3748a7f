//! Route tables and dispatch.
//!
//! A [`RouteTable`] is an ordered list of [`RouteEntry`] values, each pairing
//! a pattern with a view. Resolving a path produces one [`RouteMatch`] per
//! entry that renders:
//!
//! - [`MatchMode::Inclusive`]: every entry is tested on its own and all
//!   matches render together. Entry order does not change the result set.
//! - [`MatchMode::Exclusive`]: entries are tested in order and the first match
//!   wins. Later entries are never evaluated.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::pattern::{MatchOptions, Params, RoutePattern};

/// How a table picks the entries that render for a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// All matching entries render.
    Inclusive,
    /// Only the first matching entry renders.
    #[default]
    Exclusive,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        })
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'inclusive' or 'exclusive')"
            )),
        }
    }
}

/// One row of a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    /// Pattern tested against the pathname.
    pub pattern: RoutePattern,
    /// Whether the whole path must be consumed.
    pub exact: bool,
    /// What to render when this entry matches.
    pub view: V,
}

impl<V> RouteEntry<V> {
    /// Create a prefix-matching entry.
    pub fn new(pattern: impl Into<RoutePattern>, view: V) -> Self {
        Self {
            pattern: pattern.into(),
            exact: false,
            view,
        }
    }

    /// Create an exact-matching entry.
    pub fn exact(pattern: impl Into<RoutePattern>, view: V) -> Self {
        Self {
            exact: true,
            ..Self::new(pattern, view)
        }
    }
}

/// The match result for one rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Index of the matched entry in its table.
    pub route: usize,
    /// The entry's pattern; its text is the match `path`.
    pub pattern: RoutePattern,
    /// Parameters bound by the pattern.
    pub params: Params,
    /// The part of the pathname the pattern consumed.
    pub url: String,
}

impl RouteMatch {
    /// The pattern text that matched.
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }
}

/// An ordered route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    mode: MatchMode,
    case_sensitive: bool,
}

impl<V> RouteTable<V> {
    /// Create an empty table.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            entries: Vec::new(),
            mode,
            case_sensitive: false,
        }
    }

    /// Compare literal segments case sensitively.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Append an entry.
    #[must_use]
    pub fn with(mut self, entry: RouteEntry<V>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append a prefix-matching route.
    #[must_use]
    pub fn route(self, pattern: impl Into<RoutePattern>, view: V) -> Self {
        self.with(RouteEntry::new(pattern, view))
    }

    /// Append an exact route.
    #[must_use]
    pub fn exact(self, pattern: impl Into<RoutePattern>, view: V) -> Self {
        self.with(RouteEntry::exact(pattern, view))
    }

    /// Append a catch-all route that matches every path.
    ///
    /// In an exclusive table placed last, it renders whenever no earlier entry
    /// matched.
    #[must_use]
    pub fn fallback(self, view: V) -> Self {
        self.with(RouteEntry::new(RoutePattern::catch_all(), view))
    }

    /// The table's match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether literal segments are compared case sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// The entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&RouteEntry<V>> {
        self.entries.get(index)
    }

    /// The view of the entry a match was produced for.
    pub fn view(&self, matched: &RouteMatch) -> Option<&V> {
        self.entry(matched.route).map(|entry| &entry.view)
    }

    /// Test a single entry against `pathname`.
    ///
    /// `None` means the slot renders nothing.
    pub fn match_entry(&self, index: usize, pathname: &str) -> Option<RouteMatch> {
        let entry = self.entries.get(index)?;
        let options = MatchOptions {
            exact: entry.exact,
            case_sensitive: self.case_sensitive,
        };
        let matched = entry.pattern.matches(pathname, options)?;

        Some(RouteMatch {
            route: index,
            pattern: entry.pattern.clone(),
            params: matched.params,
            url: matched.url,
        })
    }

    /// Resolve `pathname` to the matches that render, in table order.
    ///
    /// Exclusive tables yield at most one match. An empty result means nothing
    /// renders.
    pub fn resolve(&self, pathname: &str) -> Vec<RouteMatch> {
        let matches: Vec<RouteMatch> = match self.mode {
            MatchMode::Inclusive => (0..self.entries.len())
                .filter_map(|index| self.match_entry(index, pathname))
                .collect(),
            MatchMode::Exclusive => (0..self.entries.len())
                .find_map(|index| self.match_entry(index, pathname))
                .into_iter()
                .collect(),
        };

        tracing::trace!(
            pathname,
            mode = %self.mode,
            matched = ?matches.iter().map(RouteMatch::path).collect::<Vec<_>>(),
            "resolved"
        );
        matches
    }

    /// Resolve and pair each match with its view.
    pub fn dispatch(&self, pathname: &str) -> Vec<(RouteMatch, &V)> {
        self.resolve(pathname)
            .into_iter()
            .filter_map(|matched| {
                let view = self.view(&matched)?;
                Some((matched, view))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial_table(mode: MatchMode) -> RouteTable<&'static str> {
        RouteTable::new(mode)
            .exact("/", "home")
            .route("/users", "users")
            .exact("/contact", "contact")
    }

    fn views(table: &RouteTable<&'static str>, path: &str) -> Vec<&'static str> {
        table
            .dispatch(path)
            .into_iter()
            .map(|(_, view)| *view)
            .collect()
    }

    #[test]
    fn test_match_mode_parse_and_display() {
        assert_eq!("inclusive".parse::<MatchMode>(), Ok(MatchMode::Inclusive));
        assert_eq!("Exclusive".parse::<MatchMode>(), Ok(MatchMode::Exclusive));
        assert!("switch".parse::<MatchMode>().is_err());
        assert_eq!(MatchMode::Inclusive.to_string(), "inclusive");
        assert_eq!(MatchMode::default(), MatchMode::Exclusive);
    }

    #[test]
    fn test_exclusive_first_match_wins() {
        let table = RouteTable::new(MatchMode::Exclusive)
            .route("/users", "list")
            .route("/users/:id", "detail");

        assert_eq!(views(&table, "/users/7"), vec!["list"]);
    }

    #[test]
    fn test_exclusive_is_order_dependent() {
        let table = RouteTable::new(MatchMode::Exclusive)
            .route("/users/:id", "detail")
            .route("/users", "list");

        assert_eq!(views(&table, "/users/7"), vec!["detail"]);
    }

    #[test]
    fn test_inclusive_renders_all_matches() {
        let table = RouteTable::new(MatchMode::Inclusive)
            .route("/", "layout")
            .route("/users", "list")
            .route("/users/:id", "detail");

        assert_eq!(views(&table, "/users/7"), vec!["layout", "list", "detail"]);
    }

    #[test]
    fn test_inclusive_is_order_independent() {
        let forward = RouteTable::new(MatchMode::Inclusive)
            .route("/", "layout")
            .route("/users/:id", "detail");
        let reversed = RouteTable::new(MatchMode::Inclusive)
            .route("/users/:id", "detail")
            .route("/", "layout");

        let mut a = views(&forward, "/users/1");
        let mut b = views(&reversed, "/users/1");
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inclusive_unmatched_renders_nothing() {
        let table = tutorial_table(MatchMode::Inclusive);
        assert!(table.resolve("/bogus").is_empty());
    }

    #[test]
    fn test_exclusive_fallback_is_total() {
        let table = tutorial_table(MatchMode::Exclusive).fallback("not-found");

        for path in ["/bogus", "/contact/extra", "/a/b/c", "/home"] {
            assert_eq!(views(&table, path), vec!["not-found"], "path {path}");
        }
        assert_eq!(views(&table, "/"), vec!["home"]);
        assert_eq!(views(&table, "/users/9"), vec!["users"]);
    }

    #[test]
    fn test_match_result_fields() {
        let table = RouteTable::new(MatchMode::Exclusive).route("/users/:id", ());
        let matched = table.resolve("/users/42/posts").remove(0);

        assert_eq!(matched.route, 0);
        assert_eq!(matched.path(), "/users/:id");
        assert_eq!(matched.url, "/users/42");
        assert_eq!(matched.params.get("id"), Some("42"));
    }

    #[test]
    fn test_match_entry_slot() {
        let table = tutorial_table(MatchMode::Inclusive);
        assert!(table.match_entry(0, "/users").is_none());
        assert!(table.match_entry(1, "/users").is_some());
        assert!(table.match_entry(99, "/users").is_none());
    }

    #[test]
    fn test_case_sensitive_table() {
        let table = RouteTable::new(MatchMode::Exclusive)
            .case_sensitive(true)
            .exact("/Contact", "contact");
        assert!(table.resolve("/contact").is_empty());
        assert_eq!(table.resolve("/Contact").len(), 1);
        assert!(table.is_case_sensitive());
    }
}
