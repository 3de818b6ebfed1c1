use super::dto::ProxyImageQuery;
use super::service::{ProxiedImage, ProxyService};
use crate::common::response::ErrorBody;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

const X_IMAGE_QUALITY: HeaderName = HeaderName::from_static("x-image-quality");
const X_FILE_SIZE: HeaderName = HeaderName::from_static("x-file-size");

/// Fetch a remote image and optionally shrink it
///
/// Without `quality`/`maxWidth`/`maxHeight` the upstream bytes are returned
/// untouched. Otherwise the image is decoded, fit inside the bounds and
/// re-encoded at the requested quality.
#[utoipa::path(
    get,
    path = "/api/proxy-image",
    params(ProxyImageQuery),
    responses(
        (status = 200, description = "Image bytes, original or transcoded"),
        (status = 400, description = "Missing url parameter", body = ErrorBody),
        (status = 500, description = "Fetch or transcode failure", body = ErrorBody)
    ),
    tag = "Images"
)]
pub async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ProxyImageQuery>,
) -> Response {
    match ProxyService::proxy(state, query).await {
        Ok(image) => image_response(image),
        Err(e) => {
            error!("Error proxying image: {}", e);
            e.into_response()
        }
    }
}

fn image_response(image: ProxiedImage) -> Response {
    let mut headers = HeaderMap::new();

    let content_type = HeaderValue::from_str(&image.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("image/jpeg"));
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(header::CACHE_CONTROL, cache_control(image.max_age()));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(X_IMAGE_QUALITY, HeaderValue::from(u16::from(image.quality)));
    headers.insert(X_FILE_SIZE, HeaderValue::from(image.bytes.len()));

    (StatusCode::OK, headers, image.bytes).into_response()
}

fn cache_control(max_age: u32) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={}", max_age))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}
