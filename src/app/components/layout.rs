//! Shell layout wrapping every page: sidebar, floating collapse toggle,
//! header and content card.

use dioxus::prelude::*;

use super::icon::IconGlyph;
use super::nav::SideMenu;
use crate::app::navigation_context::use_navigation;
use crate::app::{page_title, Route, BRAND};
use crate::components::{Button, ButtonVariant};
use crate::menu::build_menu_items;
use crate::routes::{Icon, ROUTE_TABLE};

/// Frame styling. Offsets that depend on the collapse flag are set inline.
const SHELL_CSS: &str = r#"
body { margin: 0; background: #f5f5f5; font-family: -apple-system, "Segoe UI", "PingFang SC", "Microsoft YaHei", sans-serif; }
.shell { min-height: 100vh; }
.shell-sider { position: fixed; top: 5px; left: 16px; bottom: 16px; height: calc(100vh - 16px); background: #001529; color: rgba(255,255,255,0.65); border-radius: 8px; box-shadow: 2px 0 12px rgba(0,0,0,0.15); overflow: hidden auto; transition: width 0.2s; }
.shell-sider.collapsed { overflow: visible; }
.shell-logo { color: #fff; padding: 16px; white-space: nowrap; font-weight: 600; }
.shell-main { transition: margin-left 0.2s; }
.shell-header { position: fixed; top: 16px; right: 16px; z-index: 1; height: 64px; line-height: 64px; padding: 0 16px; background: #fff; border-bottom: 1px solid #f0f0f0; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,0.1); display: flex; justify-content: flex-end; }
.shell-header small { color: rgba(0,0,0,0.45); }
.shell-content { margin: 16px; padding: 16px; }
.shell-card { position: fixed; top: 16px; right: 16px; z-index: 1; margin-top: 80px; padding: 24px; background: #fff; border-radius: 8px; min-height: calc(100vh - 64px - 48px); box-shadow: 0 2px 12px rgba(0,0,0,0.1); overflow: auto; }
.icon { display: inline-block; width: 1.25em; text-align: center; }
"#;

/// Layout route component. Renders the active page through the outlet.
#[component]
pub fn Shell() -> Element {
    let path = use_route::<Route>().path();
    let navigation = use_navigation();

    // Re-derive open sections whenever the URL path changes
    use_effect(use_reactive((&path,), move |(path,)| {
        tracing::debug!("Navigated to {}", path);
        navigation.sync_with_path(&path);
    }));

    let state = navigation.snapshot();
    let collapsed = state.collapsed;
    let metrics = state.layout();
    let menu = use_hook(|| build_menu_items(ROUTE_TABLE));
    let title = page_title(&path);
    let version = env!("ADMIN_CONSOLE_VERSION");
    let git_sha = env!("ADMIN_CONSOLE_GIT_SHA");

    let (toggle_icon, toggle_label) = if collapsed {
        (Icon::MenuUnfold, "Expand sidebar")
    } else {
        (Icon::MenuFold, "Collapse sidebar")
    };
    let toggle_style = format!(
        "position: fixed; top: 20px; z-index: 2; left: {}px",
        metrics.toggle_left
    );
    let sider_style = format!("width: {}px", metrics.sider_width);
    let main_style = format!("margin-left: {}px", metrics.main_margin_left);
    let frame_style = format!("left: {}px", metrics.frame_left);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{title}" }
        document::Style { {SHELL_CSS} }

        div { class: "shell",
            Button {
                variant: ButtonVariant::Primary,
                style: toggle_style,
                title: toggle_label,
                onclick: move |_| navigation.toggle_collapsed(),
                IconGlyph { icon: toggle_icon }
            }

            aside {
                class: if collapsed { "shell-sider collapsed" } else { "shell-sider" },
                style: sider_style,
                div { class: "shell-logo",
                    if !collapsed {
                        "{BRAND}"
                    }
                }
                SideMenu {
                    items: menu,
                    selected: path.clone(),
                    open_sections: state.open_section_keys.clone(),
                    collapsed: collapsed,
                }
            }

            div {
                class: "shell-main",
                style: main_style,
                header {
                    class: "shell-header",
                    style: frame_style.clone(),
                    small { "v{version} ({git_sha})" }
                }
                main { class: "shell-content",
                    div {
                        class: "shell-card",
                        style: frame_style,
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
