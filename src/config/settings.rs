use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; Gallery Bot)";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub drive_api_key: Option<String>,
    pub drive_folder_id: Option<String>,
    pub drive_api_base: String,
    pub proxy_user_agent: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            drive_api_key: env::get_optional(EnvKey::DriveApiKey),
            drive_folder_id: env::get_optional(EnvKey::DriveFolderId),
            drive_api_base: env::get_or(EnvKey::DriveApiBase, DEFAULT_DRIVE_API_BASE),
            proxy_user_agent: env::get_or(EnvKey::ProxyUserAgent, DEFAULT_USER_AGENT),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            drive_api_key: None,
            drive_folder_id: None,
            drive_api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            proxy_user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
