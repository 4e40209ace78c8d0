//! User management landing page.

use dioxus::prelude::*;

#[component]
pub fn Users() -> Element {
    rsx! {
        h1 { "用户管理" }
        p { "从左侧菜单选择角色管理或权限管理。" }
    }
}
