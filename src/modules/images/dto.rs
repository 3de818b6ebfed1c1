use super::links;
use crate::infrastructure::drive::client::DriveFile;
use crate::modules::proxy::dto::parse_lenient_int;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MIN_PAGE_SIZE: u32 = 6;
pub const MAX_PAGE_SIZE: u32 = 48;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListImagesQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Images per page, clamped to 6..=48
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn from_query(query: &ListImagesQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(parse_lenient_int)
            .unwrap_or(1)
            .clamp(1, u32::MAX as i64) as u32;
        let page_size = query
            .page_size
            .as_deref()
            .and_then(parse_lenient_int)
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u32;

        Self { page, page_size }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriveImage {
    pub id: String,
    pub name: String,
    pub thumbnail_link: Option<String>,
    pub web_view_link: Option<String>,
    pub web_content_link: Option<String>,
    pub direct_link: String,
    pub mime_type: String,
    pub size: Option<String>,
    /// RFC 3339 timestamp exactly as Drive reported it
    pub created_time: String,
    /// Proxy URL for grid thumbnails
    pub thumbnail_url: Option<String>,
    /// Proxy URL for the full-size view
    pub full_size_url: Option<String>,
}

impl From<DriveFile> for DriveImage {
    fn from(f: DriveFile) -> Self {
        let direct_link = links::direct_link(&f.id);
        let thumbnail_url = links::thumbnail_url(
            Some(&direct_link),
            f.thumbnail_link.as_deref(),
            f.web_content_link.as_deref(),
        );
        let full_size_url = links::full_size_url(
            Some(&direct_link),
            f.thumbnail_link.as_deref(),
            f.web_content_link.as_deref(),
        );

        Self {
            id: f.id,
            name: f.name,
            thumbnail_link: f.thumbnail_link,
            web_view_link: f.web_view_link,
            web_content_link: f.web_content_link,
            direct_link,
            mime_type: f.mime_type,
            size: f.size,
            created_time: f.created_time,
            thumbnail_url,
            full_size_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_images: u32,
    pub page_size: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImagesResponse {
    pub images: Vec<DriveImage>,
    pub pagination: PaginationInfo,
}
