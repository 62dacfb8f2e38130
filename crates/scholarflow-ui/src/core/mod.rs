//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod controls;
pub mod navigation;
pub mod routing;
pub mod store;
pub mod theme;
