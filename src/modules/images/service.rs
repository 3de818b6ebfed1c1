use super::dto::{DriveImage, ImagesResponse, ListImagesQuery, PageRequest, PaginationInfo};
use crate::infrastructure::drive::client::DriveError;
use crate::state::AppState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagesError {
    #[error("Google Drive folder ID not configured")]
    FolderNotConfigured,

    #[error("Failed to fetch images")]
    Drive(#[from] DriveError),
}

pub struct ImageService;

impl ImageService {
    pub async fn list(state: AppState, query: ListImagesQuery) -> Result<ImagesResponse, ImagesError> {
        let folder_id = state
            .config
            .drive_folder_id
            .as_deref()
            .ok_or(ImagesError::FolderNotConfigured)?;
        let request = PageRequest::from_query(&query);

        let files = state.drive.list_folder_images(folder_id).await?;
        let (files, pagination) = paginate(files, request);

        Ok(ImagesResponse {
            images: files.into_iter().map(DriveImage::from).collect(),
            pagination,
        })
    }
}

/// Slices one page out of the full, already ordered list.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> (Vec<T>, PaginationInfo) {
    let total = items.len();
    let page_size = request.page_size.max(1) as usize;
    let total_pages = total.div_ceil(page_size);
    let offset = (request.page as usize - 1).saturating_mul(page_size);

    let page: Vec<T> = items.into_iter().skip(offset).take(page_size).collect();

    let pagination = PaginationInfo {
        current_page: request.page,
        total_pages: total_pages as u32,
        total_images: total as u32,
        page_size: request.page_size,
        has_next_page: (request.page as usize) < total_pages,
        has_previous_page: request.page > 1,
    };
    (page, pagination)
}
