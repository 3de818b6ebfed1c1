use super::dto::{ProxyImageQuery, TranscodeParams};
use super::error::ProxyError;
use super::transform::transform;
use crate::state::AppState;
use bytes::Bytes;
use tracing::{info, warn};

pub const COMPRESSED_MAX_AGE: u32 = 86_400;
pub const ORIGINAL_MAX_AGE: u32 = 31_536_000;

/// Result of one proxy request, ready to be written out.
#[derive(Debug)]
pub struct ProxiedImage {
    pub bytes: Bytes,
    /// Declared type of the upstream response, even if the codec changed.
    pub content_type: String,
    pub quality: u8,
    pub compressed: bool,
}

impl ProxiedImage {
    pub fn max_age(&self) -> u32 {
        if self.compressed {
            COMPRESSED_MAX_AGE
        } else {
            ORIGINAL_MAX_AGE
        }
    }
}

pub struct ProxyService;

impl ProxyService {
    pub async fn proxy(state: AppState, query: ProxyImageQuery) -> Result<ProxiedImage, ProxyError> {
        let url = query
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ProxyError::BadRequest("Image URL is required"))?;
        let params = TranscodeParams::from_query(&query);

        let fetched = state.http.fetch(url).await.map_err(|e| {
            warn!("Upstream fetch failed for {}: {}", url, e);
            ProxyError::from(e)
        })?;

        let content_type = fetched
            .content_type
            .unwrap_or_else(|| mime::IMAGE_JPEG.to_string());
        let source_len = fetched.bytes.len();

        let transcoded =
            tokio::task::spawn_blocking(move || transform(fetched.bytes, &params)).await??;

        if let Some(codec) = transcoded.codec {
            info!(
                "Transcoded {} ({} bytes) to {:?} q{} {:?}: {} bytes",
                url,
                source_len,
                codec,
                params.quality,
                transcoded.dimensions,
                transcoded.bytes.len()
            );
        }

        Ok(ProxiedImage {
            bytes: transcoded.bytes,
            content_type,
            quality: params.quality,
            compressed: params.compression_requested(),
        })
    }
}
