pub mod bmp;
pub mod reader;
