pub mod browser;
pub mod style;
