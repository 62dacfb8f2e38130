//! Feature slices, one per page.
pub mod collaborators;
pub mod dashboard;
pub mod discover;
pub mod library;
pub mod profile;
pub mod settings;
pub mod upload;
