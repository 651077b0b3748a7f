//! The router context: navigation state shared with every component below
//! [`Router`].
//!
//! The state is a [`History`] held in a signal. In the browser it is mirrored
//! to the address bar with `pushState`, and `popstate` events (back/forward
//! buttons) are reconciled into it.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wayfinder_core::{History, Location};

/// Handle to the navigation state, provided as context by [`Router`].
#[derive(Debug, Clone, Copy)]
pub struct RouterContext {
    history: RwSignal<History>,
    location: Memo<Location>,
    browser: bool,
    case_sensitive: bool,
}

impl RouterContext {
    /// Create a context starting at `initial`.
    ///
    /// With `browser` set, every navigation is also pushed to
    /// `window.history`.
    pub fn new(initial: Location, browser: bool, case_sensitive: bool) -> Self {
        let history = RwSignal::new(History::new(initial));
        let location = Memo::new(move |_| history.with(|history| history.current().clone()));
        Self {
            history,
            location,
            browser,
            case_sensitive,
        }
    }

    /// The current location. Changes on every navigation.
    pub fn location(&self) -> Memo<Location> {
        self.location
    }

    /// Whether links compare path segments case sensitively, matching the
    /// route tables below this router.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Navigate to `to`, resolved against the current location.
    ///
    /// Returns `false`, leaving the state untouched, when `to` points outside
    /// the app.
    pub fn navigate(&self, to: &str) -> bool {
        let local = self
            .history
            .with_untracked(|history| history.current().resolve(to).is_some());
        if local {
            self.apply(|history| {
                history.push(to);
            });
        }
        local
    }

    /// Apply a navigation to the history and mirror the resulting location to
    /// the address bar if it changed.
    pub fn apply(&self, navigation: impl FnOnce(&mut History)) {
        let before = self.location.get_untracked();
        self.history.update(navigation);
        let after = self.location.get_untracked();

        if after != before {
            log::debug!("navigated from {before} to {after}");
            if self.browser {
                push_browser_state(&after);
            }
        }
    }

    /// Go back one entry.
    pub fn back(&self) {
        if self.browser {
            // popstate brings the location back into the history signal.
            if let Err(err) = window().history().and_then(|history| history.back()) {
                log::warn!("history.back failed: {err:?}");
            }
        } else {
            self.history.update(|history| {
                history.back();
            });
        }
    }

    fn sync(&self, location: Location) {
        self.history.update(|history| {
            history.sync(location);
        });
    }
}

/// Provides navigation state to its children.
///
/// Without `initial`, the router starts from the browser's address bar and
/// follows back/forward traversal. With `initial`, it runs detached from the
/// browser, which is what non-browser rendering needs.
#[component]
pub fn Router(
    /// Starting href for a router detached from the browser.
    #[prop(default = None)]
    initial: Option<String>,
    /// Compare link paths case sensitively. Set it to match the route tables.
    #[prop(optional)]
    case_sensitive: bool,
    children: Children,
) -> impl IntoView {
    let browser = initial.is_none();
    let start = match initial {
        Some(href) => Location::parse(&href).unwrap_or_default(),
        None => browser_location().unwrap_or_default(),
    };

    let router = RouterContext::new(start, browser, case_sensitive);
    provide_context(router);

    if browser {
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            if let Some(location) = browser_location() {
                router.sync(location);
            }
        });
        on_cleanup(move || handle.remove());
    }

    children()
}

/// The router context of the nearest [`Router`].
///
/// # Panics
///
/// Panics when called outside a [`Router`].
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

/// The current location.
pub fn use_location() -> Memo<Location> {
    use_router().location()
}

/// A function that navigates to an href.
pub fn use_navigate() -> impl Fn(&str) -> bool + Clone + Copy {
    let router = use_router();
    move |to: &str| router.navigate(to)
}

fn browser_location() -> Option<Location> {
    let location = window().location();
    let href = format!(
        "{}{}{}",
        location.pathname().ok()?,
        location.search().ok()?,
        location.hash().ok()?
    );
    Location::parse(&href)
}

fn push_browser_state(location: &Location) {
    let result = window().history().and_then(|history| {
        history.push_state_with_url(&JsValue::NULL, "", Some(&location.href()))
    });
    if let Err(err) = result {
        log::warn!("history.pushState failed: {err:?}");
    }
}
