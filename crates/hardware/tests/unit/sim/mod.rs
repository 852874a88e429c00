/// Image loading from disk.
pub mod loader;
