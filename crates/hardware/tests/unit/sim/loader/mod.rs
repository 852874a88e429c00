/// Reading image files and placing them in ROM.
pub mod binary_loading;
