mod component;

pub use component::{Button, ButtonVariant};
