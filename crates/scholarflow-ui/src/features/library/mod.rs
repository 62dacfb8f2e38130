//! Paper library feature.
//!
//! # Design
//! - Toolbar state stays local to the view; only bookmark changes reach the store.
//! - Filtering and sorting live in `logic` so they test natively.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
