//! Icon glyphs for route table icons and shell controls.

use dioxus::prelude::*;

use crate::routes::Icon;

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "▦",
        Icon::User => "👤",
        Icon::MenuFold => "⇤",
        Icon::MenuUnfold => "⇥",
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        span { class: "icon", "aria-hidden": "true", "{glyph(icon)}" }
    }
}
