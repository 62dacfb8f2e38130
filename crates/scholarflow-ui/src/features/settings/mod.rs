//! Settings feature: appearance, notifications and team management.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
