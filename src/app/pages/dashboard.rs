//! Dashboard page.

use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        h1 { "仪表盘" }
        p { "欢迎使用管理后台。" }
    }
}
