//! Headless sessions: drive the site's routing without a browser.
//!
//! A [`Session`] owns the navigation state and re-resolves the route tables on
//! every read, exactly like the browser router does after each navigation.
//! [`Screen`] is the resulting tree of mounted pages.

use crate::{
    config::Config,
    history::History,
    location::Location,
    route::{RouteMatch, RouteTable},
    site::{self, ContactForm, NavLink, Page, UserPage},
};

/// A user-detail page mounted by the Users page's nested router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedUser {
    /// Which nested page rendered.
    pub page: UserPage,
    /// Its match result.
    pub matched: RouteMatch,
}

impl MountedUser {
    /// The bound user id.
    pub fn id(&self) -> &str {
        self.matched.params.get("id").unwrap_or_default()
    }
}

/// A top-level page mounted in one route-table slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedPage {
    /// Which page rendered.
    pub page: Page,
    /// Its match result.
    pub matched: RouteMatch,
    /// Links the page itself renders.
    pub links: Vec<NavLink>,
    /// Pages mounted by this page's nested router.
    pub children: Vec<MountedUser>,
}

/// Everything visible for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// The location this screen was rendered for.
    pub location: Location,
    /// The app shell's navigation bar.
    pub nav: Vec<NavLink>,
    /// Mounted pages in table order.
    pub pages: Vec<MountedPage>,
    /// Whether links compare path segments case sensitively.
    pub case_sensitive: bool,
}

impl Screen {
    /// Whether `page` is mounted.
    pub fn has_page(&self, page: Page) -> bool {
        self.pages.iter().any(|mounted| mounted.page == page)
    }

    /// The id shown by a mounted user-detail page, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.pages
            .iter()
            .flat_map(|mounted| &mounted.children)
            .map(MountedUser::id)
            .next()
    }

    /// Every link on screen, navigation bar first.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav
            .iter()
            .chain(self.pages.iter().flat_map(|mounted| &mounted.links))
    }

    /// The first link on screen with the given label.
    pub fn find_link(&self, label: &str) -> Option<&NavLink> {
        self.links().find(|link| link.label == label)
    }

    /// A plain-text rendering, one element per line.
    pub fn to_text(&self) -> String {
        let nav: Vec<String> = self
            .nav
            .iter()
            .map(|link| {
                let marker = if link.is_active(&self.location.pathname, self.case_sensitive) {
                    "*"
                } else {
                    ""
                };
                format!("{marker}{} ({})", link.label, link.href)
            })
            .collect();

        let mut lines = vec![format!("[nav] {}", nav.join(" | "))];

        if self.pages.is_empty() {
            lines.push("(no page matched)".to_string());
        }

        for mounted in &self.pages {
            lines.push(format!("# {}", mounted.page.heading()));
            match mounted.page {
                Page::Home => lines.push(site::HOME_TEXT.to_string()),
                Page::Users => {
                    lines.push(site::USERS_PROMPT.to_string());
                    lines.extend(
                        mounted
                            .links
                            .iter()
                            .map(|link| format!("- {} ({})", link.label, link.href)),
                    );
                    lines.extend(
                        mounted
                            .children
                            .iter()
                            .map(|child| format!("  {}", site::user_detail_text(child.id()))),
                    );
                }
                Page::Contact => lines.extend(
                    [
                        "[input type=name placeholder=name]",
                        "[input type=email placeholder=email]",
                        "[button Submit]",
                    ]
                    .map(String::from),
                ),
                Page::NotFound => lines.push(site::NOT_FOUND_TEXT.to_string()),
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// A browser-less app instance.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    routes: RouteTable<Page>,
    history: History,
}

impl Session {
    /// Start a session at `/`.
    pub fn new(config: Config) -> Self {
        Self {
            routes: site::configured_routes(&config),
            config,
            history: History::default(),
        }
    }

    /// Start a session at `href`, falling back to `/` for foreign hrefs.
    pub fn open(config: Config, href: &str) -> Self {
        let mut session = Self::new(config);
        if let Some(location) = Location::parse(href) {
            session.history = History::new(location);
        }
        session
    }

    /// The current location.
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// The navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The top-level route table.
    pub fn routes(&self) -> &RouteTable<Page> {
        &self.routes
    }

    /// Navigate to `to`, as if typed in the address bar or linked to.
    pub fn visit(&mut self, to: &str) -> Option<&Location> {
        self.history.push(to)
    }

    /// Activate the link labelled `label` on the current screen.
    ///
    /// Returns `None` when no such link is on screen.
    pub fn follow(&mut self, label: &str) -> Option<&Location> {
        let href = self.screen().find_link(label)?.href.clone();
        tracing::debug!(label, %href, "follow link");
        self.history.push(&href)
    }

    /// Submit the contact form, if the Contact page is mounted.
    pub fn submit_contact(&mut self, form: &ContactForm) -> Option<&Location> {
        if !self.screen().has_page(Page::Contact) {
            tracing::debug!(location = %self.location(), "no contact form on screen");
            return None;
        }
        Some(form.submit(&mut self.history))
    }

    /// Go back one entry.
    pub fn back(&mut self) -> &Location {
        self.history.back()
    }

    /// Go forward one entry.
    pub fn forward(&mut self) -> &Location {
        self.history.forward()
    }

    /// Resolve the current location into mounted pages.
    pub fn screen(&self) -> Screen {
        let location = self.location().clone();
        let pages = self
            .routes
            .dispatch(&location.pathname)
            .into_iter()
            .map(|(matched, page)| self.mount(*page, matched, &location))
            .collect();

        Screen {
            location,
            nav: site::nav_links(),
            pages,
            case_sensitive: self.routes.is_case_sensitive(),
        }
    }

    fn mount(&self, page: Page, matched: RouteMatch, location: &Location) -> MountedPage {
        let (links, children) = match page {
            Page::Users => {
                let links = site::user_links(&matched.url, self.config.app.users);
                let nested = site::user_routes(&matched)
                    .case_sensitive(self.routes.is_case_sensitive());
                let children = nested
                    .dispatch(&location.pathname)
                    .into_iter()
                    .map(|(matched, page)| MountedUser {
                        page: *page,
                        matched,
                    })
                    .collect();
                (links, children)
            }
            _ => (Vec::new(), Vec::new()),
        };

        MountedPage {
            page,
            matched,
            links,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::MatchMode;

    #[test]
    fn test_new_session_shows_home() {
        let session = Session::new(Config::default());
        let screen = session.screen();
        assert_eq!(screen.location.pathname, "/");
        assert!(screen.has_page(Page::Home));
        assert_eq!(screen.pages.len(), 1);
    }

    #[test]
    fn test_open_foreign_href_falls_back_to_root() {
        let session = Session::open(Config::default(), "https://example.com/users");
        assert_eq!(session.location().pathname, "/");
    }

    #[test]
    fn test_users_screen_lists_configured_users() {
        let mut config = Config::default();
        config.app.users = 5;
        let session = Session::open(config, "/users");
        let screen = session.screen();

        let users = &screen.pages[0];
        assert_eq!(users.page, Page::Users);
        assert_eq!(users.links.len(), 5);
        assert!(users.children.is_empty());
        assert_eq!(screen.user_id(), None);
    }

    #[test]
    fn test_follow_unknown_label() {
        let mut session = Session::new(Config::default());
        assert!(session.follow("User 2").is_none());
        assert_eq!(session.location().pathname, "/");
    }

    #[test]
    fn test_submit_requires_contact_page() {
        let mut session = Session::open(Config::default(), "/users");
        assert!(session.submit_contact(&ContactForm::default()).is_none());
        assert_eq!(session.location().pathname, "/users");
    }

    #[test]
    fn test_inclusive_unknown_path_mounts_nothing() {
        let mut config = Config::default();
        config.routing.mode = MatchMode::Inclusive;
        let session = Session::open(config, "/bogus");
        let screen = session.screen();
        assert!(screen.pages.is_empty());
        assert!(screen.to_text().contains("(no page matched)"));
    }

    #[test]
    fn test_to_text_marks_active_link_case_insensitively() {
        let text = Session::open(Config::default(), "/USERS/2").screen().to_text();
        assert!(text.contains("*Users (/users)"));
        assert!(text.contains("Current user id is 2"));

        let mut config = Config::default();
        config.routing.case_sensitive = true;
        let text = Session::open(config, "/USERS/2").screen().to_text();
        assert!(!text.contains("*Users"));
        assert!(text.contains("# Not Found"));
    }

    #[test]
    fn test_to_text_lines() {
        let text = Session::open(Config::default(), "/contact").screen().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "[nav] Home (/) | Users (/users) | *Contact (/contact)",
                "# Contact Page",
                "[input type=name placeholder=name]",
                "[input type=email placeholder=email]",
                "[button Submit]",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_to_text_marks_active_nav_link() {
        let session = Session::open(Config::default(), "/users/2");
        let text = session.screen().to_text();
        assert!(text.contains("*Users (/users)"));
        assert!(text.contains("Home (/)"));
        assert!(!text.contains("*Home"));
        assert!(text.contains("Current user id is 2"));
    }
}
