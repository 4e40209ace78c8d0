//! Menu description for the side navigation widget.

use serde::Serialize;

use crate::routes::{Icon, RouteEntry};

/// One item in the navigation menu.
///
/// `key` is the route path. Only top-level nodes carry an icon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuNode {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub label: String,
    /// `None` for a plain item, `Some` for a section (even an empty one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNode>>,
}

impl MenuNode {
    /// True when the node opens a submenu rather than navigating.
    pub fn is_section(&self) -> bool {
        self.children.is_some()
    }
}

/// Build the menu tree mirroring the route table's shape.
pub fn build_menu_items(table: &[RouteEntry]) -> Vec<MenuNode> {
    table
        .iter()
        .map(|entry| MenuNode {
            key: entry.path.to_string(),
            icon: entry.icon,
            label: entry.name.to_string(),
            children: entry.children.map(|children| {
                children
                    .iter()
                    .map(|child| MenuNode {
                        key: child.path.to_string(),
                        icon: None,
                        label: child.name.to_string(),
                        children: None,
                    })
                    .collect()
            }),
        })
        .collect()
}
