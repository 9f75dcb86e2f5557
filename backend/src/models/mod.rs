//! Data models for the photo gallery.
//!
//! Field names serialize in camelCase to match the frontend and the store document.

mod image;
mod payload;

pub use image::*;
pub use payload::*;
