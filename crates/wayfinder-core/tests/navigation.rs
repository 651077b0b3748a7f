//! End-to-end navigation through a headless session.

use wayfinder_core::{Config, ContactForm, MatchMode, Page, Session};

fn session_at(href: &str) -> Session {
    Session::open(Config::default(), href)
}

#[test]
fn test_literal_paths_render_their_pages() {
    let home = session_at("/").screen();
    assert!(home.has_page(Page::Home));
    assert!(home.to_text().contains("Home"));

    let users = session_at("/users").screen();
    assert!(users.has_page(Page::Users));
    assert!(users.to_text().contains("Users Page"));

    let contact = session_at("/contact").screen();
    assert!(contact.has_page(Page::Contact));
    let text = contact.to_text();
    assert!(text.contains("placeholder=name"));
    assert!(text.contains("placeholder=email"));
}

#[test]
fn test_user_id_is_bound_from_path() {
    for id in ["1", "42", "ada", "x-y_z"] {
        let screen = session_at(&format!("/users/{id}")).screen();
        assert_eq!(screen.user_id(), Some(id));
        assert!(
            screen
                .to_text()
                .contains(&format!("Current user id is {id}"))
        );
    }
}

#[test]
fn test_unknown_paths_render_not_found() {
    for path in ["/bogus", "/contact/extra", "/home", "/a/b/c"] {
        let screen = session_at(path).screen();
        assert_eq!(screen.pages.len(), 1, "path {path}");
        assert_eq!(screen.pages[0].page, Page::NotFound, "path {path}");
    }
}

#[test]
fn test_exclusive_mode_mounts_exactly_one_page() {
    for path in ["/", "/users", "/users/3", "/contact", "/nope", "/users/3/4"] {
        assert_eq!(session_at(path).screen().pages.len(), 1, "path {path}");
    }
}

#[test]
fn test_contact_submit_always_navigates_home() {
    for form in [
        ContactForm::default(),
        ContactForm::new("Ada", ""),
        ContactForm::new("", "not-an-email"),
        ContactForm::new("Ada Lovelace", "ada@example.com"),
    ] {
        let mut session = session_at("/contact");
        let location = session.submit_contact(&form).expect("form on screen");
        assert_eq!(location.pathname, "/");
        assert!(session.screen().has_page(Page::Home));
    }
}

#[test]
fn test_users_then_user_two() {
    let mut session = session_at("/");

    session.follow("Users").expect("nav link");
    assert_eq!(session.location().pathname, "/users");

    session.follow("User 2").expect("user link");
    assert_eq!(session.location().pathname, "/users/2");
    assert_eq!(session.screen().user_id(), Some("2"));

    assert_eq!(session.back().pathname, "/users");
    assert_eq!(session.screen().user_id(), None);
    assert_eq!(session.forward().pathname, "/users/2");
}

#[test]
fn test_inclusive_mode_keeps_first_iteration_routes() {
    let mut config = Config::default();
    config.routing.mode = MatchMode::Inclusive;

    let screen = Session::open(config.clone(), "/users").screen();
    assert!(screen.has_page(Page::Users));

    let screen = Session::open(config.clone(), "/users/2").screen();
    assert!(screen.pages.is_empty());

    let screen = Session::open(config, "/bogus").screen();
    assert!(!screen.has_page(Page::NotFound));
}
