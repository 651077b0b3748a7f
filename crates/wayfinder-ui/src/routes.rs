//! Table-driven route rendering.

use std::sync::Arc;

use leptos::{context::Provider, prelude::*};
use wayfinder_core::{Params, RouteMatch, RouteTable};

use crate::router::use_router;

/// Renders the entries of `table` that match the current location.
///
/// Each rendered view gets its [`RouteMatch`] as context, readable with
/// [`use_route_match`] and [`use_params`]. Views only re-render when their
/// match result changes, so moving from `/users/1` to `/users/2` keeps a
/// `/users` prefix route mounted and only updates its nested routes.
#[component]
pub fn Routes<V, F>(
    /// The route table to resolve.
    table: RouteTable<V>,
    /// Builds the view for a matched entry.
    render: F,
) -> impl IntoView
where
    V: Clone + Send + Sync + 'static,
    F: Fn(V) -> AnyView + Send + Sync + 'static,
{
    let location = use_router().location();
    let table = Arc::new(table);
    let render = Arc::new(render);

    let matches = {
        let table = Arc::clone(&table);
        Memo::new(move |_| location.with(|location| table.resolve(&location.pathname)))
    };

    move || {
        matches
            .get()
            .into_iter()
            .filter_map(|matched| {
                let page = table.view(&matched)?.clone();
                let render = Arc::clone(&render);
                Some(view! { <Provider value=matched>{(*render)(page.clone())}</Provider> })
            })
            .collect_view()
    }
}

/// The match result of the closest enclosing [`Routes`] entry.
pub fn use_route_match() -> Option<RouteMatch> {
    use_context::<RouteMatch>()
}

/// Parameters bound by the closest enclosing [`Routes`] entry.
pub fn use_params() -> Params {
    use_route_match()
        .map(|matched| matched.params)
        .unwrap_or_default()
}
