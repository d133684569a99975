pub mod loader;
pub mod preprocessing;

pub use loader::{Image, ImageLoader};
pub use preprocessing::ImagePreprocessor;
