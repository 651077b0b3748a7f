//! Page components.

use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use wayfinder_core::{
    Config, ContactForm, Page, UserPage,
    site::{self, user_detail_text, user_links, user_routes},
};
use wayfinder_ui::{Link, Routes, use_params, use_route_match, use_router};

/// Renders the home page.
#[component]
pub fn Home() -> impl IntoView {
    view! {
      <Title text=Page::Home.name() />
      <div class="page page-home">
        <h1>{Page::Home.heading()}</h1>
        <p>{site::HOME_TEXT}</p>
      </div>
    }
}

/// Lists user links relative to its own match and hosts the nested
/// `{path}/:id` router for the user detail.
#[component]
pub fn Users() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();

    // Only reachable through a route table, which always provides a match.
    let Some(parent) = use_route_match() else {
        return view! { <p class="page-error">"Users page rendered outside a route"</p> }
            .into_any();
    };

    let links = user_links(&parent.url, config.app.users);
    let nested = user_routes(&parent).case_sensitive(config.routing.case_sensitive);

    view! {
      <Title text=Page::Users.name() />
      <div class="page page-users">
        <h1>{Page::Users.heading()}</h1>
        <p>{site::USERS_PROMPT}</p>
        <ul class="user-list">
          {links
            .into_iter()
            .map(|link| {
              view! {
                <li class="user-list-item">
                  <Link href=link.href>{link.label}</Link>
                </li>
              }
            })
            .collect_view()}
        </ul>
        <Routes table=nested render=render_user_page />
      </div>
    }
    .into_any()
}

fn render_user_page(page: UserPage) -> AnyView {
    match page {
        UserPage::Detail => view! { <UserDetail /> }.into_any(),
    }
}

/// Shows the id bound by the nested `:id` segment.
#[component]
pub fn UserDetail() -> impl IntoView {
    let params = use_params();
    let id = params.get("id").unwrap_or_default().to_string();

    view! {
      <Title text=format!("User {id}") />
      <section class="user-detail">
        <p>{user_detail_text(&id)}</p>
      </section>
    }
}

/// A form with name and email fields whose submit always returns home.
#[component]
pub fn Contact() -> impl IntoView {
    let router = use_router();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm::new(name.get_untracked(), email.get_untracked());
        router.apply(|history| {
            form.submit(history);
        });
    };

    view! {
      <Title text=Page::Contact.name() />
      <div class="page page-contact">
        <h1>{Page::Contact.heading()}</h1>
        <form on:submit=on_submit novalidate=true>
          <input
            placeholder="name"
            type="name"
            name="name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
          />
          <input
            placeholder="email"
            type="email"
            name="email"
            prop:value=move || email.get()
            on:input=move |ev| email.set(event_target_value(&ev))
          />
          <button type="submit">"Submit"</button>
        </form>
      </div>
    }
}

/// Rendered when no explicit route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text=Page::NotFound.name() />
      <div class="page page-not-found">
        <h1>{Page::NotFound.heading()}</h1>
        <p>{site::NOT_FOUND_TEXT}</p>
        <Link href="/">"Back to Home"</Link>
      </div>
    }
}
