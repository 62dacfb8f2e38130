//! Profile feature: editor, completeness meter and avatar upload.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
