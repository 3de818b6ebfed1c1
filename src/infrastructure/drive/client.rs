use crate::infrastructure::http::client::HttpClient;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const LIST_PAGE_SIZE: &str = "1000";
const LIST_FIELDS: &str =
    "nextPageToken,files(id,name,thumbnailLink,webViewLink,webContentLink,mimeType,size,createdTime)";

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("Google Drive API key not configured")]
    MissingApiKey,

    #[error("Drive request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Drive API responded with {0}: {1}")]
    Status(StatusCode, String),
}

/// File metadata as returned by Drive v3 `files.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub thumbnail_link: Option<String>,
    pub web_view_link: Option<String>,
    pub web_content_link: Option<String>,
    pub mime_type: String,
    pub size: Option<String>,
    pub created_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListPage {
    #[serde(default)]
    files: Vec<DriveFile>,
    next_page_token: Option<String>,
}

#[derive(Clone)]
pub struct DriveService {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl DriveService {
    pub fn new(http: HttpClient, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Every non-trashed image in `folder_id`, newest first.
    /// Follows page tokens until the listing is exhausted.
    pub async fn list_folder_images(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        let api_key = self.api_key.as_deref().ok_or(DriveError::MissingApiKey)?;
        let query = folder_image_query(folder_id);
        let url = format!("{}/files", self.base_url);

        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("q", query.as_str()),
                ("fields", LIST_FIELDS),
                ("orderBy", "createdTime desc"),
                ("pageSize", LIST_PAGE_SIZE),
                ("key", api_key),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let resp = self.http.inner().get(&url).query(&params).send().await?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(DriveError::Status(status, body));
            }

            let page: FileListPage = resp.json().await?;
            debug!("Drive page returned {} files", page.files.len());
            files.extend(page.files);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!("Listed {} images in Drive folder {}", files.len(), folder_id);
        Ok(files)
    }
}

fn folder_image_query(folder_id: &str) -> String {
    let escaped = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents and (mimeType contains 'image/') and trashed=false", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use std::collections::HashMap;

    async fn spawn_fake_drive() -> String {
        async fn files(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
            assert_eq!(params.get("key").map(String::as_str), Some("test-key"));
            assert_eq!(params.get("orderBy").map(String::as_str), Some("createdTime desc"));
            assert!(params["q"].starts_with("'folder-1' in parents"));

            match params.get("pageToken").map(String::as_str) {
                None => Json(serde_json::json!({
                    "nextPageToken": "page-2",
                    "files": [{
                        "id": "a",
                        "name": "a.jpg",
                        "mimeType": "image/jpeg",
                        "size": "1024",
                        "createdTime": "2024-05-02T10:00:00.000Z"
                    }]
                })),
                Some("page-2") => Json(serde_json::json!({
                    "files": [{
                        "id": "b",
                        "name": "b.png",
                        "thumbnailLink": "https://lh3.example/b",
                        "mimeType": "image/png",
                        "createdTime": "yesterday"
                    }]
                })),
                Some(other) => panic!("unexpected page token {other}"),
            }
        }

        let app = Router::new().route("/files", get(files));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn follows_page_tokens_until_exhausted() {
        let base = spawn_fake_drive().await;
        let http = HttpClient::new("test-agent").unwrap();
        let drive = DriveService::new(http, &base, Some("test-key".to_string()));

        let files = drive.list_folder_images("folder-1").await.unwrap();
        let ids: Vec<_> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(files[0].size.as_deref(), Some("1024"));
        assert_eq!(files[1].thumbnail_link.as_deref(), Some("https://lh3.example/b"));
        assert_eq!(files[0].created_time, "2024-05-02T10:00:00.000Z");
        assert_eq!(files[1].created_time, "yesterday");
    }

    #[tokio::test]
    async fn missing_api_key_is_an_error() {
        let http = HttpClient::new("test-agent").unwrap();
        let drive = DriveService::new(http, "http://127.0.0.1:9", None);

        let err = drive.list_folder_images("folder-1").await.unwrap_err();
        assert!(matches!(err, DriveError::MissingApiKey));
    }

    #[test]
    fn folder_query_escapes_quotes() {
        assert_eq!(
            folder_image_query("it's"),
            "'it\\'s' in parents and (mimeType contains 'image/') and trashed=false"
        );
    }
}
