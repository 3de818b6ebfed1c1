use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// JSON payload plus status and an optional `Cache-Control` value.
pub struct ApiSuccess<T> {
    pub body: T,
    pub status: StatusCode,
    pub cache_control: Option<&'static str>,
}

impl<T> ApiSuccess<T>
where
    T: Serialize,
{
    pub fn ok(body: T) -> Self {
        Self {
            body,
            status: StatusCode::OK,
            cache_control: None,
        }
    }

    pub fn cached(mut self, cache_control: &'static str) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        if let Some(cc) = self.cache_control {
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static(cc));
        }
        response
    }
}

#[derive(Debug)]
pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        (status, Json(ErrorBody::new(&message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn api_error_renders_error_field() {
        let response = ApiError("boom".to_string(), StatusCode::BAD_GATEWAY).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));
    }

    #[tokio::test]
    async fn api_success_sets_cache_control_when_requested() {
        let response = ApiSuccess::ok(serde_json::json!({ "a": 1 }))
            .cached("public, max-age=5")
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=5"
        );
    }
}
