//! Shown for paths that match no route table entry.

use dioxus::prelude::*;

use crate::app::Route;
use crate::routes::DEFAULT_PATH;

#[component]
pub fn NotFound(path: String) -> Element {
    tracing::warn!("No route for {}", path);

    rsx! {
        h1 { "404" }
        p { "页面不存在：" code { "{path}" } }
        Link { to: Route::from_path(DEFAULT_PATH), "返回仪表盘" }
    }
}
