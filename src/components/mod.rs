pub mod background;
pub mod canvas;
pub mod help;
pub mod pixel_art;
