//! The demo site: its pages, route tables, links and copy.
//!
//! Both the browser app and the headless [`Session`](crate::Session) render
//! from these definitions, so a path resolves to the same pages everywhere.

use serde::Serialize;

use crate::{
    config::Config,
    history::History,
    location::Location,
    pattern::{RoutePattern, Segment, split_segments},
    route::{MatchMode, RouteMatch, RouteTable},
};

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Home,
    Users,
    Contact,
    NotFound,
}

impl Page {
    /// The page's main heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Users => "Users Page",
            Self::Contact => "Contact Page",
            Self::NotFound => "Not Found",
        }
    }

    /// Short name used in document titles and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Users => "Users",
            Self::Contact => "Contact",
            Self::NotFound => "NotFound",
        }
    }
}

/// Pages mounted by the nested router inside [`Page::Users`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UserPage {
    Detail,
}

/// A navigation link: what the user clicks and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label.
    pub label: String,
    /// Target href.
    pub href: String,
}

impl NavLink {
    /// Create a new link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Whether this link points at `pathname` or one of its ancestors.
    pub fn is_active(&self, pathname: &str, case_sensitive: bool) -> bool {
        link_is_active(&self.href, pathname, case_sensitive)
    }
}

/// Whether a link to `href` is active at `pathname`: equal to it, or an
/// ancestor of it. The root link is only active on `/` itself.
///
/// Segments compare the way route literals do, so the link of the page a
/// path renders is active whatever the path's case.
pub fn link_is_active(href: &str, pathname: &str, case_sensitive: bool) -> bool {
    let mut path = split_segments(pathname);
    let mut href = split_segments(href).peekable();

    if href.peek().is_none() {
        return path.next().is_none();
    }

    href.all(|expected| {
        path.next().is_some_and(|actual| {
            if case_sensitive {
                actual == expected
            } else {
                actual.eq_ignore_ascii_case(expected)
            }
        })
    })
}

/// The app shell's navigation bar.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Users", "/users"),
        NavLink::new("Contact", "/contact"),
    ]
}

/// The top-level route table.
///
/// The exclusive table lets `/users` prefix-match so the Users page can host
/// its nested router, and ends with a NotFound catch-all. The inclusive table
/// is the first tutorial iteration: three exact routes, no catch-all.
pub fn site_routes(mode: MatchMode) -> RouteTable<Page> {
    match mode {
        MatchMode::Exclusive => RouteTable::new(mode)
            .exact("/", Page::Home)
            .route("/users", Page::Users)
            .exact("/contact", Page::Contact)
            .fallback(Page::NotFound),
        MatchMode::Inclusive => RouteTable::new(mode)
            .exact("/", Page::Home)
            .exact("/users", Page::Users)
            .exact("/contact", Page::Contact),
    }
}

/// The top-level route table configured by `config`.
pub fn configured_routes(config: &Config) -> RouteTable<Page> {
    site_routes(config.routing.mode).case_sensitive(config.routing.case_sensitive)
}

/// The nested table declared by the Users page, scoped to `{parent.path}/:id`.
pub fn user_routes(parent: &RouteMatch) -> RouteTable<UserPage> {
    let detail = parent
        .pattern
        .join(&RoutePattern::from_segments(vec![Segment::Param(
            "id".to_string(),
        )]));
    RouteTable::new(MatchMode::Exclusive).exact(detail, UserPage::Detail)
}

/// Links to the first `count` users, relative to the Users page's matched url.
pub fn user_links(url: &str, count: usize) -> Vec<NavLink> {
    let base = url.trim_end_matches('/');
    (1..=count)
        .map(|id| NavLink::new(format!("User {id}"), format!("{base}/{id}")))
        .collect()
}

/// Body text of the user detail page.
pub fn user_detail_text(id: &str) -> String {
    format!("Current user id is {id}")
}

/// Body text of the Home page.
pub const HOME_TEXT: &str = "Welcome home. Pick a page from the navigation above.";

/// Prompt shown on the Users page above the user list.
pub const USERS_PROMPT: &str = "Select a user to see their id.";

/// Body text of the NotFound page.
pub const NOT_FOUND_TEXT: &str = "Nothing lives at this address.";

/// Where the contact form sends the user after submit.
pub const CONTACT_REDIRECT: &str = "/";

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// The name field.
    pub name: String,
    /// The email field.
    pub email: String,
}

impl ContactForm {
    /// Create a form with the given field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Submit the form.
    ///
    /// Nothing is validated or stored; submitting always redirects to
    /// [`CONTACT_REDIRECT`].
    pub fn submit<'h>(&self, history: &'h mut History) -> &'h Location {
        tracing::debug!(
            name_len = self.name.len(),
            email_len = self.email.len(),
            "contact form submitted"
        );
        if history.push(CONTACT_REDIRECT).is_none() {
            tracing::warn!("contact redirect target is not a local path");
        }
        history.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(mode: MatchMode, path: &str) -> Vec<Page> {
        site_routes(mode)
            .dispatch(path)
            .into_iter()
            .map(|(_, page)| *page)
            .collect()
    }

    #[test]
    fn test_exclusive_site_routes() {
        let mode = MatchMode::Exclusive;
        assert_eq!(pages(mode, "/"), vec![Page::Home]);
        assert_eq!(pages(mode, "/users"), vec![Page::Users]);
        assert_eq!(pages(mode, "/users/42"), vec![Page::Users]);
        assert_eq!(pages(mode, "/contact"), vec![Page::Contact]);
        assert_eq!(pages(mode, "/bogus"), vec![Page::NotFound]);
        assert_eq!(pages(mode, "/contact/me"), vec![Page::NotFound]);
    }

    #[test]
    fn test_inclusive_site_routes() {
        let mode = MatchMode::Inclusive;
        assert_eq!(pages(mode, "/"), vec![Page::Home]);
        assert_eq!(pages(mode, "/users"), vec![Page::Users]);
        assert!(pages(mode, "/users/42").is_empty());
        assert!(pages(mode, "/bogus").is_empty());
    }

    #[test]
    fn test_configured_routes_case_sensitivity() {
        let mut config = Config::default();
        assert_eq!(configured_routes(&config).resolve("/USERS").len(), 1);

        config.routing.case_sensitive = true;
        let table = configured_routes(&config);
        let matched = table.dispatch("/USERS");
        assert_eq!(*matched[0].1, Page::NotFound);
    }

    #[test]
    fn test_user_routes_nested_under_parent() {
        let table = site_routes(MatchMode::Exclusive);
        let parent = table.resolve("/users/42").remove(0);
        assert_eq!(parent.url, "/users");

        let nested = user_routes(&parent);
        let matched = nested.resolve("/users/42");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].path(), "/users/:id");
        assert_eq!(matched[0].params.get("id"), Some("42"));
        assert_eq!(user_detail_text("42"), "Current user id is 42");

        assert!(nested.resolve("/users").is_empty());
        assert!(nested.resolve("/users/42/extra").is_empty());
    }

    #[test]
    fn test_user_links_relative_to_url() {
        let links = user_links("/users", 3);
        assert_eq!(links.len(), 3);
        assert_eq!(links[1], NavLink::new("User 2", "/users/2"));

        let links = user_links("/users/", 1);
        assert_eq!(links[0].href, "/users/1");
    }

    #[test]
    fn test_nav_link_active() {
        let home = NavLink::new("Home", "/");
        let users = NavLink::new("Users", "/users");

        assert!(home.is_active("/", false));
        assert!(!home.is_active("/users", false));
        assert!(users.is_active("/users", false));
        assert!(users.is_active("/users/", false));
        assert!(users.is_active("/users/2", false));
        assert!(!users.is_active("/usersx", false));
        assert!(!users.is_active("/", false));
    }

    #[test]
    fn test_nav_link_active_follows_case_sensitivity() {
        let users = NavLink::new("Users", "/users");

        assert!(users.is_active("/USERS/2", false));
        assert!(users.is_active("/Users", false));
        assert!(!users.is_active("/USERS/2", true));
        assert!(users.is_active("/users/2", true));
    }

    #[test]
    fn test_page_copy() {
        assert!(Page::Home.heading().contains("Home"));
        assert_eq!(Page::Users.heading(), "Users Page");
        assert_eq!(Page::Contact.heading(), "Contact Page");
        assert_eq!(Page::NotFound.name(), "NotFound");
    }

    #[test]
    fn test_contact_submit_always_redirects_home() {
        let mut history = History::new(Location::parse("/contact").unwrap());
        let location = ContactForm::default().submit(&mut history);
        assert_eq!(location.pathname, "/");

        let mut history = History::new(Location::parse("/contact").unwrap());
        let form = ContactForm::new("Ada", "ada@example.com");
        assert_eq!(form.submit(&mut history).pathname, "/");
        assert!(history.can_go_back());
    }
}
