pub mod canvas;
pub mod grid;
pub mod input;
pub mod view;
