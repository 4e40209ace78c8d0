//! Styled UI primitives shared by the shell and pages.

pub mod button;

pub use button::{Button, ButtonVariant};
