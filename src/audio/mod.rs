// Audio module - file loading, tag normalization and cover art lookup

pub mod cover_art;
pub mod loader;
pub mod ogg;
pub mod stream_info;
pub mod tags;

pub use cover_art::extract_cover_art;
pub use loader::{load, AudioHandle};
pub use tags::normalize;
