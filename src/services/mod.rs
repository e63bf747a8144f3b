pub mod dither_service;
pub mod pipeline;

pub use dither_service::DitherService;
pub use pipeline::{dither_image, dither_image_with, DitherOptions};
