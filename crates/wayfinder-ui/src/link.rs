//! Client-side navigation links.

use leptos::{ev::MouseEvent, prelude::*};
use wayfinder_core::{NavLink, site::link_is_active};

use crate::router::use_router;

/// Modifier state of a click, as far as link handling cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Click {
    /// Mouse button (0 is the primary button).
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    /// Whether another handler already called `preventDefault`.
    pub default_prevented: bool,
}

impl Click {
    /// Read the click state from a DOM event.
    pub fn from_event(ev: &MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            default_prevented: ev.default_prevented(),
        }
    }

    /// Whether the router should handle this click instead of the browser.
    ///
    /// Modified clicks (open in new tab/window, download) and non-primary
    /// buttons keep their browser behavior.
    pub fn is_plain(&self) -> bool {
        !self.default_prevented
            && self.button == 0
            && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

/// An anchor that navigates without reloading the page.
#[component]
pub fn Link(
    /// Target href, resolved against the current location.
    #[prop(into)]
    href: String,
    /// Extra class names for the anchor.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let location = router.location();

    let is_active = {
        let href = href.clone();
        let case_sensitive = router.is_case_sensitive();
        Memo::new(move |_| {
            location.with(|location| link_is_active(&href, &location.pathname, case_sensitive))
        })
    };

    let on_click = {
        let href = href.clone();
        move |ev: MouseEvent| {
            if Click::from_event(&ev).is_plain() && router.navigate(&href) {
                ev.prevent_default();
            }
        }
    };

    view! {
      <a
        href=href
        class=class
        class:active=is_active
        aria-current=move || { if is_active.get() { Some("page") } else { None } }
        on:click=on_click
      >
        {children()}
      </a>
    }
}

/// The app shell's navigation bar.
#[component]
pub fn NavBar(
    /// Links in display order.
    links: Vec<NavLink>,
) -> impl IntoView {
    view! {
      <nav class="wayfinder-nav" aria-label="Main navigation">
        <ul class="wayfinder-nav-list">
          {links
            .into_iter()
            .map(|link| {
              view! {
                <li class="wayfinder-nav-item">
                  <Link href=link.href>{link.label}</Link>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click() {
        assert!(Click::default().is_plain());
    }

    #[test]
    fn test_modified_clicks_are_left_to_browser() {
        let modified = [
            Click {
                ctrl: true,
                ..Click::default()
            },
            Click {
                meta: true,
                ..Click::default()
            },
            Click {
                shift: true,
                ..Click::default()
            },
            Click {
                alt: true,
                ..Click::default()
            },
            Click {
                button: 1,
                ..Click::default()
            },
            Click {
                default_prevented: true,
                ..Click::default()
            },
        ];

        for click in modified {
            assert!(!click.is_plain(), "{click:?}");
        }
    }
}
