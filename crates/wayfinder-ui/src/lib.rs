//! Wayfinder UI Components
//!
//! Leptos router components built on the `wayfinder-core` route matcher.
//!
//! # Components
//!
//! ## Routing
//! - [`Router`] - Owns the navigation state and syncs it with the address bar
//! - [`Routes`] - Renders the entries of a route table that match the location
//!
//! ## Navigation
//! - [`Link`] - Anchor that navigates without a page reload
//! - [`NavBar`] - Main navigation list
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use wayfinder_core::{MatchMode, RouteTable};
//! use wayfinder_ui::{Link, Router, Routes, use_params};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let table = RouteTable::new(MatchMode::Exclusive)
//!         .exact("/", "home")
//!         .exact("/posts/:slug", "post")
//!         .fallback("missing");
//!
//!     view! {
//!         <Router>
//!             <Link href="/posts/hello">"Hello"</Link>
//!             <Routes table=table render=|name: &'static str| view! { <p>{name}</p> }.into_any() />
//!         </Router>
//!     }
//! }
//! ```

pub mod link;
pub mod router;
pub mod routes;

pub use link::{Click, Link, NavBar};
pub use router::{Router, RouterContext, use_location, use_navigate, use_router};
pub use routes::{Routes, use_params, use_route_match};
