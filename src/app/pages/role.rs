use dioxus::prelude::*;

#[component]
pub fn Role() -> Element {
    rsx! {
        h1 { "角色管理" }
    }
}
