use crate::common::response::ApiError;
use crate::infrastructure::http::client::FetchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{0}")]
    BadRequest(&'static str),

    /// `status` is the upstream's answer when there was one.
    #[error("Failed to fetch image: {reason}")]
    UpstreamFetch {
        status: Option<StatusCode>,
        reason: String,
    },

    #[error("Unrecognized or corrupt image data: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to proxy image: {0}")]
    Failure(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamFetch { status, .. } => {
                status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ProxyError::Decode(_) | ProxyError::Failure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::BadRequest(message) => *message,
            ProxyError::UpstreamFetch { .. } => "Failed to fetch image",
            ProxyError::Decode(_) | ProxyError::Failure(_) => "Failed to proxy image",
        }
    }
}

impl From<FetchError> for ProxyError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status(status) => ProxyError::UpstreamFetch {
                status: Some(status),
                reason: format!("upstream responded with {}", status),
            },
            FetchError::Request(e) => ProxyError::UpstreamFetch {
                status: e.status(),
                reason: e.to_string(),
            },
        }
    }
}

impl From<tokio::task::JoinError> for ProxyError {
    fn from(err: tokio::task::JoinError) -> Self {
        ProxyError::Failure(format!("transcode task failed: {}", err))
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        ApiError(err.public_message().to_string(), err.status())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_forwarded() {
        let err = ProxyError::from(FetchError::Status(StatusCode::NOT_FOUND));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Failed to fetch image");
    }

    #[test]
    fn upstream_without_status_is_internal_error() {
        let err = ProxyError::UpstreamFetch {
            status: None,
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn failures_hide_internal_details() {
        let err = ProxyError::Failure("encoder exploded".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to proxy image");
    }
}
