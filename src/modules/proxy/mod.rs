use axum::routing::get;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod service;
pub mod transform;

pub fn router() -> Router<AppState> {
    Router::new().route("/proxy-image", get(handler::proxy_image))
}
