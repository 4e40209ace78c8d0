use dioxus::prelude::*;

#[component]
pub fn Permission() -> Element {
    rsx! {
        h1 { "权限管理" }
    }
}
