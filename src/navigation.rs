//! Navigation panel view state.
//!
//! Holds the sidebar collapse flag and the set of expanded menu sections.
//! The open set is recomputed from the URL on every navigation via
//! [`resolve_open_sections`] and can be replaced wholesale when the user
//! opens or closes a section by hand.

use std::collections::BTreeSet;

/// Sections to keep expanded for a URL path.
///
/// A path with two or more segments (a child route such as `/users/role`)
/// keeps its first segment's section open. Anything shorter opens nothing.
pub fn resolve_open_sections(path: &str) -> BTreeSet<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(first), Some(_)) => BTreeSet::from([format!("/{first}")]),
        _ => BTreeSet::new(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationViewState {
    pub collapsed: bool,
    pub open_section_keys: BTreeSet<String>,
}

impl NavigationViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        tracing::debug!("Sidebar collapsed: {}", self.collapsed);
    }

    /// Recompute the open set for a new URL, discarding any previous
    /// expansion (manual or automatic).
    pub fn sync_with_path(&mut self, path: &str) {
        self.open_section_keys = resolve_open_sections(path);
    }

    /// Replace the open set as reported by the menu widget.
    pub fn set_open_sections(&mut self, keys: BTreeSet<String>) {
        self.open_section_keys = keys;
    }

    /// Open set that results from clicking a section header.
    pub fn toggled_section(&self, key: &str) -> BTreeSet<String> {
        let mut keys = self.open_section_keys.clone();
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
        keys
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_section_keys.contains(key)
    }

    pub fn layout(&self) -> LayoutMetrics {
        LayoutMetrics::for_state(self.collapsed)
    }
}

/// Pixel offsets of the shell frame, derived from the collapse flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub sider_width: u32,
    pub toggle_left: u32,
    pub main_margin_left: u32,
    pub frame_left: u32,
}

impl LayoutMetrics {
    pub fn for_state(collapsed: bool) -> Self {
        if collapsed {
            Self {
                sider_width: 80,
                toggle_left: 80,
                main_margin_left: 80,
                frame_left: 120,
            }
        } else {
            Self {
                sider_width: 200,
                toggle_left: 200,
                main_margin_left: 232,
                frame_left: 238,
            }
        }
    }
}
