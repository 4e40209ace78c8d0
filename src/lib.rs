//! Admin Console
//!
//! Shell of a browser-based administrative console.
//!
//! This library provides:
//! - A static two-level route table and its flattened router form
//! - Menu descriptions for the side navigation
//! - Navigation view state (collapsed sidebar, open sections)
//! - The Dioxus shell, pages and router
//! - An axum server hosting the app (feature `server`)

pub mod app;
pub mod components;
pub mod menu;
pub mod navigation;
pub mod routes;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
