//! Locations: the pathname, search and hash of a same-origin URL.
//!
//! Hrefs are resolved with the same rules a browser applies to `<a href>`,
//! so relative targets, `..` segments, query-only and hash-only links behave
//! the way they would in the address bar.

use std::fmt;

use serde::Serialize;
use url::Url;

/// Origin used to resolve hrefs. Only the path, query and fragment survive.
const ORIGIN: &str = "http://wayfinder.invalid/";

/// A same-origin location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Percent-encoded path, always starting with `/`.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    /// Parse an absolute or root-relative href.
    ///
    /// Returns `None` for hrefs that point to another origin or cannot be
    /// parsed.
    pub fn parse(href: &str) -> Option<Self> {
        Self::default().resolve(href)
    }

    /// Resolve `to` relative to this location.
    ///
    /// # Example
    ///
    /// ```
    /// use wayfinder_core::Location;
    ///
    /// let users = Location::parse("/users").unwrap();
    /// assert_eq!(users.resolve("/users/2").unwrap().pathname, "/users/2");
    /// assert_eq!(users.resolve("users/3").unwrap().pathname, "/users/3");
    /// assert!(users.resolve("https://example.com/").is_none());
    /// ```
    pub fn resolve(&self, to: &str) -> Option<Self> {
        let origin = Url::parse(ORIGIN).ok()?;
        let base = origin.join(&self.href()).ok()?;
        let target = base.join(to).ok()?;

        if target.origin() != origin.origin() {
            return None;
        }

        Some(Self {
            pathname: target.path().to_string(),
            search: target.query().map(|q| format!("?{q}")).unwrap_or_default(),
            hash: target.fragment().map(|f| format!("#{f}")).unwrap_or_default(),
        })
    }

    /// The location as a root-relative href.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
