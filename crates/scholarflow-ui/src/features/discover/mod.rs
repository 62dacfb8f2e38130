//! Discover feature: recommendations and trending topics.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
