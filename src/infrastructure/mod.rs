pub mod drive;
pub mod http;
