use super::dto::{ImagesResponse, ListImagesQuery};
use super::service::{ImageService, ImagesError};
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

pub const LISTING_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// List images in the configured Drive folder, newest first
#[utoipa::path(
    get,
    path = "/api/images",
    params(ListImagesQuery),
    responses(
        (status = 200, description = "One page of images", body = ImagesResponse),
        (status = 500, description = "Folder not configured or Drive failure", body = ErrorBody)
    ),
    tag = "Images"
)]
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ListImagesQuery>,
) -> impl IntoResponse {
    match ImageService::list(state, query).await {
        Ok(res) => ApiSuccess::ok(res).cached(LISTING_CACHE_CONTROL).into_response(),
        Err(e @ ImagesError::FolderNotConfigured) => {
            error!("{}", e);
            ApiError(e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
        Err(ImagesError::Drive(e)) => {
            error!("Error fetching images from Google Drive: {}", e);
            ApiError("Failed to fetch images".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}
