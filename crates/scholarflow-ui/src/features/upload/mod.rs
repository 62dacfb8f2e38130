//! Upload feature: PDF validation and simulated transfer.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
