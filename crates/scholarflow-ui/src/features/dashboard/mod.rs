//! Dashboard feature: library overview and reading progress.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
