//! Shell components for the Dioxus web UI.

pub mod icon;
pub mod layout;
pub mod nav;

pub use icon::IconGlyph;
pub use layout::Shell;
pub use nav::SideMenu;
