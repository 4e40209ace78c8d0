//! Inline side navigation menu.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use super::icon::IconGlyph;
use crate::app::navigation_context::use_navigation;
use crate::app::Route;
use crate::menu::MenuNode;

const MENU_CSS: &str = r#"
.side-menu ul { list-style: none; margin: 0; padding: 0; }
.side-menu-item { display: flex; align-items: center; gap: 10px; height: 40px; margin: 4px; padding: 0 16px; border-radius: 8px; cursor: pointer; white-space: nowrap; }
.side-menu-item:hover { color: #fff; }
.side-menu-item[aria-current="page"] { background: #1677ff; color: #fff; }
.side-menu-item.active-section { color: #fff; }
.side-menu-arrow { margin-left: auto; font-size: 10px; transition: transform 0.2s; }
.side-menu-arrow.open { transform: rotate(180deg); }
.side-menu-sub { background: #000c17; }
.side-menu-sub .side-menu-item { padding-left: 48px; }
.side-menu.collapsed > ul > li { position: relative; }
.side-menu.collapsed > ul > li > .side-menu-item { justify-content: center; padding: 0; }
.side-menu.collapsed .side-menu-sub { position: absolute; left: 100%; top: 0; z-index: 3; min-width: 160px; margin-left: 4px; border-radius: 8px; box-shadow: 0 6px 16px rgba(0,0,0,0.2); }
.side-menu.collapsed .side-menu-sub .side-menu-item { padding-left: 16px; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct SideMenuProps {
    /// Menu tree built from the route table
    pub items: Vec<MenuNode>,
    /// Selected key (the current URL path)
    pub selected: String,
    /// Sections currently expanded
    pub open_sections: BTreeSet<String>,
    /// Icon-only rendering when the sidebar is collapsed
    #[props(default = false)]
    pub collapsed: bool,
}

/// Navigation menu. Leaf items navigate; section headers open and close
/// their submenu. When collapsed, an open submenu pops out beside its icon.
#[component]
pub fn SideMenu(props: SideMenuProps) -> Element {
    let menu_class = if props.collapsed {
        "side-menu collapsed"
    } else {
        "side-menu"
    };

    rsx! {
        document::Style { {MENU_CSS} }
        nav { class: menu_class,
            ul {
                for node in props.items.iter() {
                    MenuEntry {
                        key: "{node.key}",
                        open: props.open_sections.contains(&node.key),
                        node: node.clone(),
                        selected: props.selected.clone(),
                        collapsed: props.collapsed,
                    }
                }
            }
        }
    }
}

#[component]
fn MenuEntry(node: MenuNode, selected: String, open: bool, collapsed: bool) -> Element {
    let navigation = use_navigation();

    if !node.is_section() {
        return rsx! {
            MenuLeaf { node: node.clone(), selected: selected.clone(), collapsed: collapsed }
        };
    }
    let children = node.children.clone().unwrap_or_default();

    let key = node.key.clone();
    let in_section = selected.starts_with(&format!("{}/", node.key));
    let item_class = if in_section {
        "side-menu-item active-section"
    } else {
        "side-menu-item"
    };
    let arrow_class = if open {
        "side-menu-arrow open"
    } else {
        "side-menu-arrow"
    };

    rsx! {
        li {
            div {
                class: item_class,
                title: "{node.label}",
                onclick: move |_| navigation.toggle_section(&key),
                if let Some(icon) = node.icon {
                    IconGlyph { icon }
                }
                if !collapsed {
                    span { "{node.label}" }
                    span { class: arrow_class, "▾" }
                }
            }
            if open {
                ul { class: "side-menu-sub",
                    for child in children {
                        // Pop-out items keep their labels
                        MenuLeaf {
                            key: "{child.key}",
                            node: child.clone(),
                            selected: selected.clone(),
                            collapsed: false,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuLeaf(node: MenuNode, selected: String, collapsed: bool) -> Element {
    let key = node.key.clone();
    let is_selected = node.key == selected;

    rsx! {
        li {
            div {
                class: "side-menu-item",
                title: "{node.label}",
                "aria-current": if is_selected { "page" } else { "false" },
                onclick: move |_| {
                    tracing::debug!("Menu navigation to {}", key);
                    navigator().push(Route::from_path(&key));
                },
                if let Some(icon) = node.icon {
                    IconGlyph { icon }
                }
                if !collapsed {
                    span { "{node.label}" }
                }
            }
        }
    }
}
