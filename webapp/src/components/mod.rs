pub mod navigation;
pub mod toast;
