//! The Wayfinder demo app: shell, route table and pages.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use wayfinder_core::{
    Config, Page,
    site::{configured_routes, nav_links},
};
use wayfinder_ui::{NavBar, Router, Routes};

pub mod pages;

use pages::{Contact, Home, NotFound, Users};

#[component]
pub fn App(
    /// Site configuration. The browser build runs with the defaults.
    #[prop(optional)]
    config: Config,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let title = config.app.title.clone();
    let case_sensitive = config.routing.case_sensitive;
    let routes = configured_routes(&config);
    provide_context(config);

    view! {
      // "<page> | <site title>" for every page's <Title>
      <Title formatter=move |text: String| format!("{text} | {title}") />

      <Router case_sensitive=case_sensitive>
        <div class="App">
          <NavBar links=nav_links() />
          <main>
            <Routes table=routes render=render_page />
          </main>
        </div>
      </Router>
    }
}

/// Maps a matched top-level page to its component.
fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <Home /> }.into_any(),
        Page::Users => view! { <Users /> }.into_any(),
        Page::Contact => view! { <Contact /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}
