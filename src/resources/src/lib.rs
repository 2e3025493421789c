pub mod bmp;
pub mod images;
