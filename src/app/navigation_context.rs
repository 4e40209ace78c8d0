//! Navigation context for shared shell state.
//!
//! Wraps [`NavigationViewState`] in a signal so the shell layout, the
//! collapse toggle and the side menu all see the same collapse flag and
//! open-section set.

use dioxus::prelude::*;

use crate::navigation::NavigationViewState;

/// Global navigation state shared via context
#[derive(Clone, Copy)]
pub struct NavigationContext {
    state: Signal<NavigationViewState>,
}

impl NavigationContext {
    /// Current state (subscribes the calling component)
    pub fn snapshot(&self) -> NavigationViewState {
        self.state.read().clone()
    }

    pub fn toggle_collapsed(&self) {
        let mut state = self.state;
        state.write().toggle_collapsed();
    }

    /// Recompute open sections after the URL changed
    pub fn sync_with_path(&self, path: &str) {
        let mut state = self.state;
        state.write().sync_with_path(path);
    }

    /// Open or close a section as the user clicked it
    pub fn toggle_section(&self, key: &str) {
        let mut state = self.state;
        let next = state.peek().toggled_section(key);
        tracing::debug!("Menu sections open: {:?}", next);
        state.write().set_open_sections(next);
    }
}

/// Initialize navigation context provider - call once at app root
pub fn use_navigation_provider() {
    let state = use_signal(NavigationViewState::new);
    use_context_provider(|| NavigationContext { state });
}

/// Get navigation context - use in any component
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>()
}
