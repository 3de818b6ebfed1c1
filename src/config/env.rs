use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    DriveApiKey,
    DriveFolderId,
    DriveApiBase,
    ProxyUserAgent,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DriveApiKey => "GOOGLE_DRIVE_API_KEY",
            EnvKey::DriveFolderId => "GOOGLE_DRIVE_FOLDER_ID",
            EnvKey::DriveApiBase => "GOOGLE_DRIVE_API_BASE",
            EnvKey::ProxyUserAgent => "PROXY_USER_AGENT",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Like [`get`], but blank values count as unset.
pub fn get_optional(key: EnvKey) -> Option<String> {
    get(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
