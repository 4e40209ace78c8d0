//! End-to-end navigation scenarios over the public API.
//!
//! Each test walks the same steps the shell performs on a URL change:
//! resolve the page through the flattened route table, mark the selected
//! menu key, and re-derive which sections are expanded.

use admin_console::app::Route;
use admin_console::menu::build_menu_items;
use admin_console::navigation::{resolve_open_sections, NavigationViewState};
use admin_console::routes::{
    flatten_routes, resolve_route, Page, RouteResolution, DEFAULT_PATH, ROUTE_TABLE,
};

/// What the shell shows after settling on a URL.
#[derive(Debug, PartialEq)]
struct Rendered {
    path: String,
    page: Option<Page>,
    selected_key: String,
}

/// Follow redirects the way the catch-all route does, then sync state.
fn navigate(state: &mut NavigationViewState, path: &str) -> Rendered {
    let mut path = Route::from_path(path).path();
    let page = loop {
        match resolve_route(&path) {
            RouteResolution::Render(page) => break Some(page),
            RouteResolution::Redirect(target) => path = target.to_string(),
            RouteResolution::NotFound => break None,
        }
    };
    state.sync_with_path(&path);

    Rendered {
        selected_key: path.clone(),
        path,
        page,
    }
}

#[test]
fn permission_page_selects_key_and_expands_users() {
    let mut state = NavigationViewState::new();
    let rendered = navigate(&mut state, "/users/permission");

    assert_eq!(rendered.page, Some(Page::Permission));
    assert_eq!(rendered.selected_key, "/users/permission");
    assert!(state.is_open("/users"));
    assert_eq!(state.open_section_keys.len(), 1);

    // The selected key must exist somewhere in the menu tree
    let menu = build_menu_items(ROUTE_TABLE);
    let in_menu = menu.iter().any(|node| {
        node.children
            .iter()
            .flatten()
            .any(|child| child.key == rendered.selected_key)
    });
    assert!(in_menu, "selected key should be a submenu item");
}

#[test]
fn root_renders_dashboard_via_redirect() {
    let mut state = NavigationViewState::new();
    let rendered = navigate(&mut state, "/");

    assert_eq!(rendered.path, DEFAULT_PATH);
    assert_eq!(rendered.page, Some(Page::Dashboard));
    assert!(state.open_section_keys.is_empty());
}

#[test]
fn leaving_a_section_closes_it() {
    let mut state = NavigationViewState::new();
    navigate(&mut state, "/users/role");
    assert!(state.is_open("/users"));

    navigate(&mut state, "/dashboard");
    assert!(state.open_section_keys.is_empty());
}

#[test]
fn collapse_survives_navigation() {
    let mut state = NavigationViewState::new();
    state.toggle_collapsed();
    navigate(&mut state, "/users/role");
    navigate(&mut state, "/dashboard");
    assert!(state.collapsed);
}

#[test]
fn unknown_path_renders_nothing_from_the_table() {
    let mut state = NavigationViewState::new();
    let rendered = navigate(&mut state, "/reports/monthly");

    assert_eq!(rendered.page, None);
    // The resolver still only looks at the URL shape
    assert!(state.is_open("/reports"));
}

#[test]
fn every_flat_route_resolves_to_its_own_page() {
    for route in flatten_routes(ROUTE_TABLE) {
        assert_eq!(
            resolve_route(route.path),
            RouteResolution::Render(route.page),
            "{} should render its page",
            route.path
        );
    }
}

#[test]
fn resolver_matches_documented_cases() {
    assert!(resolve_open_sections("/dashboard").is_empty());
    assert!(resolve_open_sections("/").is_empty());
    assert_eq!(
        resolve_open_sections("/users/role").into_iter().collect::<Vec<_>>(),
        ["/users"]
    );
    assert_eq!(
        resolve_open_sections("/users/role/extra")
            .into_iter()
            .collect::<Vec<_>>(),
        ["/users"]
    );
}
