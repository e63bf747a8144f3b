//! DitherMe
//!
//! Black-and-white dithering for PNG images, built on the `halftone` crate.
//! This library exposes modules for the CLI, the HTTP server and
//! integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;

pub use services::{dither_image, dither_image_with, DitherOptions};
