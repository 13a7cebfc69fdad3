pub mod fetch;
pub mod preset;
pub mod sample_loader;
