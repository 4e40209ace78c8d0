//! The console's navigable pages.

use super::{ChildRoute, Icon, Page, RouteEntry};

const USER_CHILDREN: &[ChildRoute] = &[
    ChildRoute {
        path: "/users/role",
        name: "角色管理",
        page: Page::Role,
    },
    ChildRoute {
        path: "/users/permission",
        name: "权限管理",
        page: Page::Permission,
    },
];

/// Static route table. Paths must stay unique across entries and children.
pub static ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        path: "/dashboard",
        name: "仪表盘",
        icon: Some(Icon::Dashboard),
        page: Page::Dashboard,
        children: None,
    },
    RouteEntry {
        path: "/users",
        name: "用户管理",
        icon: Some(Icon::User),
        page: Page::Users,
        children: Some(USER_CHILDREN),
    },
];
