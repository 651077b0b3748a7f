//! Path pattern parsing and segment matching.
//!
//! Pattern syntax:
//! - `/users` - literal segments
//! - `/users/:id` - named parameter, matches any one non-empty segment
//! - `/files/*` - trailing wildcard, matches any remainder (including none)
//!
//! Both patterns and paths are split on `/` with empty segments ignored, so
//! `/users/`, `//users` and `/users` are the same path.

use std::{collections::BTreeMap, fmt};

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// A segment in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal segment that must equal the path segment.
    Literal(String),
    /// A named parameter (e.g. `:id`).
    Param(String),
    /// A trailing wildcard that consumes the rest of the path.
    Rest,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Param(name) => write!(f, ":{name}"),
            Self::Rest => f.write_str("*"),
        }
    }
}

/// Options that control how a pattern is compared to a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Reject paths with segments left over after the pattern is consumed.
    pub exact: bool,
    /// Compare literal segments case sensitively.
    pub case_sensitive: bool,
}

impl MatchOptions {
    /// Options for an exact match.
    pub fn exact() -> Self {
        Self {
            exact: true,
            ..Self::default()
        }
    }
}

/// Parameters bound by a successful match, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Bind a parameter. A later binding of the same name wins.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into `self`, with `other` winning on conflicts.
    pub fn extend(&mut self, other: &Params) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The outcome of matching one pattern against one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// Bound parameters, percent-decoded.
    pub params: Params,
    /// The part of the path consumed by the pattern, always starting with `/`.
    pub url: String,
    /// Unconsumed trailing segments, empty or starting with `/`.
    pub rest: String,
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    /// Canonical pattern text (leading `/`, no empty segments).
    raw: String,
    /// Parsed segments.
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// Parsing never fails: a bare `:` is kept as a literal, and a `*` that
    /// is not the last segment is kept as a literal.
    ///
    /// # Example
    ///
    /// ```
    /// use wayfinder_core::{MatchOptions, RoutePattern};
    ///
    /// let pattern = RoutePattern::new("/users/:id");
    /// let matched = pattern.matches("/users/42", MatchOptions::exact()).unwrap();
    /// assert_eq!(matched.params.get("id"), Some("42"));
    /// assert_eq!(matched.url, "/users/42");
    /// ```
    pub fn new(pattern: &str) -> Self {
        let parts: Vec<&str> = split_segments(pattern).collect();
        let last = parts.len().saturating_sub(1);

        let segments = parts
            .iter()
            .enumerate()
            .map(|(i, part)| match part.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ if *part == "*" && i == last => Segment::Rest,
                _ => Segment::Literal((*part).to_string()),
            })
            .collect();

        Self::from_segments(segments)
    }

    /// Build a pattern from already parsed segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let mut raw = String::new();
        for segment in &segments {
            raw.push('/');
            raw.push_str(&segment.to_string());
        }
        if raw.is_empty() {
            raw.push('/');
        }

        Self { raw, segments }
    }

    /// A pattern that matches every path.
    pub fn catch_all() -> Self {
        Self::from_segments(vec![Segment::Rest])
    }

    /// Canonical pattern text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters this pattern binds, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Whether this pattern matches every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Rest])
    }

    /// Append `child` to this pattern, used to scope nested routes under a
    /// parent's matched pattern. A trailing wildcard on `self` is dropped.
    pub fn join(&self, child: &RoutePattern) -> RoutePattern {
        let mut segments: Vec<Segment> = self
            .segments
            .iter()
            .filter(|segment| !matches!(segment, Segment::Rest))
            .cloned()
            .collect();
        segments.extend(child.segments.iter().cloned());
        Self::from_segments(segments)
    }

    /// Match `path` (a pathname, without search or hash) against this pattern.
    pub fn matches(&self, path: &str, options: MatchOptions) -> Option<PathMatch> {
        let parts: Vec<&str> = split_segments(path).collect();
        let mut params = Params::new();
        let mut consumed = 0;

        for segment in &self.segments {
            match segment {
                Segment::Rest => {
                    consumed = parts.len();
                    break;
                }
                Segment::Literal(literal) => {
                    let part = parts.get(consumed)?;
                    let equal = if options.case_sensitive {
                        part == literal
                    } else {
                        part.eq_ignore_ascii_case(literal)
                    };
                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let part = parts.get(consumed)?;
                    params.insert(name.as_str(), decode_segment(part));
                }
            }
            consumed += 1;
        }

        if options.exact && consumed < parts.len() {
            return None;
        }

        Some(PathMatch {
            params,
            url: join_segments(&parts[..consumed]),
            rest: if consumed < parts.len() {
                join_segments(&parts[consumed..])
            } else {
                String::new()
            },
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// Split a path into its non-empty `/`-delimited segments.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn join_segments(parts: &[&str]) -> String {
    if parts.is_empty() {
        return "/".to_string();
    }
    parts.iter().fold(String::new(), |mut acc, part| {
        acc.push('/');
        acc.push_str(part);
        acc
    })
}

/// Percent-decode a segment, keeping the raw text when it is not valid UTF-8.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
