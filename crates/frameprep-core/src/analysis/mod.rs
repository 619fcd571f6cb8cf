/// Analysis helpers — file qualification rules applied during the scan.

pub mod image_types;

pub use image_types::{image_extension, is_qualifying_image};
