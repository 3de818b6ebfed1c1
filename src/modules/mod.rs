pub mod images;
pub mod proxy;
