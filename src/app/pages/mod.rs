//! Page components and the catch-all route that picks between them.

mod dashboard;
mod not_found;
mod permission;
mod role;
mod users;

use dioxus::prelude::*;

use crate::app::Route;
use crate::routes::{resolve_route, Page, RouteResolution};

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use permission::Permission;
pub use role::Role;
pub use users::Users;

/// Component for an opaque page handle from the route table.
pub fn page_view(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { Dashboard {} },
        Page::Users => rsx! { Users {} },
        Page::Role => rsx! { Role {} },
        Page::Permission => rsx! { Permission {} },
    }
}

/// Catch-all route: resolves the URL through the flattened route table.
#[component]
pub fn Screen(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    match resolve_route(&path) {
        RouteResolution::Render(page) => page_view(page),
        RouteResolution::Redirect(target) => rsx! {
            RedirectTo { from: path, to: target }
        },
        RouteResolution::NotFound => rsx! {
            NotFound { path }
        },
    }
}

/// Replaces the current history entry once mounted.
#[component]
fn RedirectTo(from: String, to: &'static str) -> Element {
    let router = navigator();

    use_effect(move || {
        tracing::info!("Redirecting {} to {}", from, to);
        router.replace(Route::from_path(to));
    });

    rsx! {}
}
