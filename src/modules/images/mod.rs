use axum::routing::get;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod links;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/images", get(handler::list_images))
}
