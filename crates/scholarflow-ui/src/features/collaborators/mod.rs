//! Collaborators feature.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
