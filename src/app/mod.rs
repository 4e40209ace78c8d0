//! Dioxus application entry point.
//!
//! This module provides the root App component, the router enum and the
//! glue between the routing core and the rendered shell.

use dioxus::prelude::*;

pub mod components;
pub mod navigation_context;
pub mod pages;

use crate::routes::{route_label, validate_route_table, ROUTE_TABLE};
use components::Shell;
use navigation_context::use_navigation_provider;
use pages::Screen;

/// Brand label shown in the sidebar and browser tab.
pub const BRAND: &str = "管理后台";

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize navigation context at app root (collapse flag + open sections)
    use_navigation_provider();

    use_hook(|| {
        if cfg!(debug_assertions) {
            if let Err(e) = validate_route_table(ROUTE_TABLE) {
                tracing::error!("Route table is malformed: {}", e);
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes.
///
/// A single catch-all under the shell layout; [`Screen`] resolves the path
/// through the route table so the table stays the only place pages are
/// registered.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/:..segments")]
        Screen { segments: Vec<String> },
}

impl Route {
    /// Router target for a URL path such as `/users/role`.
    pub fn from_path(path: &str) -> Self {
        Route::Screen {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// URL path of this route, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Route::Screen { segments } => format!("/{}", segments.join("/")),
        }
    }
}

/// Browser tab title for a path.
pub fn page_title(path: &str) -> String {
    match route_label(path) {
        Some(label) => format!("{} - {}", label, BRAND),
        None => BRAND.to_string(),
    }
}



#[cfg(test)]
mod render_tests {
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::history::{History, MemoryHistory};

    use super::test_support::item_tag;
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct AppAtProps {
        path: String,
    }

    /// The real app mounted on an in-memory history at `path`.
    #[component]
    fn AppAt(props: AppAtProps) -> Element {
        let path = props.path.clone();
        use_context_provider(move || {
            Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
        });

        rsx! {
            App {}
        }
    }

    async fn render_app(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            AppAt,
            AppAtProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();

        // Let effects (section sync, redirects) run and re-render
        for _ in 0..5 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }

        dioxus::ssr::render(&dom)
    }

    #[tokio::test]
    async fn permission_path_selects_item_and_expands_users() {
        let html = render_app("/users/permission").await;

        assert!(html.contains("<h1>权限管理</h1>"), "page missing: {html}");
        assert!(
            html.contains(r#"class="side-menu-sub""#),
            "users submenu not expanded: {html}"
        );
        assert!(item_tag(&html, "权限管理").contains(r#"aria-current="page""#));
        assert!(item_tag(&html, "角色管理").contains(r#"aria-current="false""#));
        assert!(item_tag(&html, "用户管理").contains("active-section"));
    }

    #[tokio::test]
    async fn root_redirects_and_renders_dashboard() {
        let html = render_app("/").await;

        assert!(html.contains("<h1>仪表盘</h1>"), "dashboard missing: {html}");
        assert!(item_tag(&html, "仪表盘").contains(r#"aria-current="page""#));
        assert!(!html.contains(r#"class="side-menu-sub""#));
    }

    #[tokio::test]
    async fn top_level_path_keeps_sections_closed() {
        let html = render_app("/dashboard").await;

        assert!(html.contains("<h1>仪表盘</h1>"));
        assert!(!html.contains(r#"class="side-menu-sub""#));
        assert!(!html.contains("角色管理"));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found() {
        let html = render_app("/nope").await;

        assert!(html.contains("<h1>404</h1>"), "not-found page missing: {html}");
        assert!(html.contains("/nope"));
    }
}
