//! Route table and router-facing resolution.
//!
//! The route table is a static, two-level declaration of every navigable
//! path. Top-level entries are [`RouteEntry`] values; their children are
//! [`ChildRoute`] values, which carry no children of their own, so the
//! table can never nest deeper than two levels.
//!
//! Everything the router needs is derived from the table:
//! - [`flatten_routes`] produces the flat path→page list used for matching
//! - [`resolve_route`] maps a concrete URL path to what should be shown
//! - [`validate_route_table`] checks the uniqueness invariant

mod table;

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

pub use table::ROUTE_TABLE;

/// Redirect target for the root path.
///
/// Deliberately a literal rather than the table's first entry.
pub const DEFAULT_PATH: &str = "/dashboard";

/// Opaque handle to a renderable page.
///
/// The routing core never looks inside; the presentation layer maps each
/// variant to a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Users,
    Role,
    Permission,
}

/// Visual token attached to top-level entries and shell controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Dashboard,
    User,
    MenuFold,
    MenuUnfold,
}

/// Top-level route table entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub icon: Option<Icon>,
    pub page: Page,
    /// `None` means the entry has no submenu at all, which is not the same
    /// thing as an empty submenu.
    pub children: Option<&'static [ChildRoute]>,
}

/// Second-level route table entry. Has no children by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

impl RouteEntry {
    /// Children in declared order (empty when the entry has none).
    pub fn child_routes(&self) -> &'static [ChildRoute] {
        self.children.unwrap_or(&[])
    }
}

/// A single path→page rule handed to the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatRoute {
    pub path: &'static str,
    pub page: Page,
}

/// Flatten a route table into pre-order path→page pairs.
///
/// Each entry is immediately followed by its children in declared order.
pub fn flatten_routes(table: &[RouteEntry]) -> Vec<FlatRoute> {
    let mut flat = Vec::with_capacity(table.len());
    for entry in table {
        flat.push(FlatRoute {
            path: entry.path,
            page: entry.page,
        });
        flat.extend(entry.child_routes().iter().map(|child| FlatRoute {
            path: child.path,
            page: child.page,
        }));
    }
    flat
}

/// What the router should do for a given URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteResolution {
    /// Render the page registered for the path
    Render(Page),
    /// Replace the current location with another path
    Redirect(&'static str),
    /// No rule matches
    NotFound,
}

/// Resolve a URL path against [`ROUTE_TABLE`].
pub fn resolve_route(path: &str) -> RouteResolution {
    resolve_route_in(ROUTE_TABLE, path)
}

/// Resolve a URL path against an arbitrary route table.
///
/// The root path always redirects to [`DEFAULT_PATH`]. A single trailing
/// slash is ignored and ASCII case does not matter, so `/users/role/` and
/// `/Users/Role` both match `/users/role`.
pub fn resolve_route_in(table: &[RouteEntry], path: &str) -> RouteResolution {
    let path = normalize_path(path);
    if path == "/" {
        return RouteResolution::Redirect(DEFAULT_PATH);
    }

    flatten_routes(table)
        .into_iter()
        .find(|route| route.path.eq_ignore_ascii_case(path))
        .map_or(RouteResolution::NotFound, |route| {
            RouteResolution::Render(route.page)
        })
}

/// Display name for a path, searching entries and their children.
pub fn route_label(path: &str) -> Option<&'static str> {
    let path = normalize_path(path);
    ROUTE_TABLE.iter().find_map(|entry| {
        if entry.path.eq_ignore_ascii_case(path) {
            return Some(entry.name);
        }
        entry
            .child_routes()
            .iter()
            .find(|child| child.path.eq_ignore_ascii_case(path))
            .map(|child| child.name)
    })
}

/// Strip query/fragment and a trailing slash; empty becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Structural defects a hand-written route table can contain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("route path {0:?} must start with '/' and contain no empty segments")]
    InvalidPath(String),

    #[error("child route {child:?} is not nested under its section {section:?}")]
    ChildOutsideSection { section: String, child: String },
}

/// Check the invariants the router relies on.
///
/// Paths must be unique across the whole table (entries and children
/// combined), well formed, and child paths must live under their parent's
/// path so the section resolver can find the parent from the URL alone.
pub fn validate_route_table(table: &[RouteEntry]) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();

    for entry in table {
        check_path(entry.path, &mut seen)?;

        for child in entry.child_routes() {
            check_path(child.path, &mut seen)?;

            let nested = child
                .path
                .strip_prefix(entry.path)
                .is_some_and(|rest| rest.starts_with('/'));
            if !nested {
                return Err(RouteTableError::ChildOutsideSection {
                    section: entry.path.to_string(),
                    child: child.path.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn check_path(
    path: &'static str,
    seen: &mut HashSet<&'static str>,
) -> Result<(), RouteTableError> {
    let well_formed =
        path.len() > 1 && path.starts_with('/') && path[1..].split('/').all(|s| !s.is_empty());
    if !well_formed {
        return Err(RouteTableError::InvalidPath(path.to_string()));
    }
    if !seen.insert(path) {
        return Err(RouteTableError::DuplicatePath(path.to_string()));
    }
    Ok(())
}
