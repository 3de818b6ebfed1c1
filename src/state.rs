use crate::config::settings::AppConfig;
use crate::infrastructure::drive::client::DriveService;
use crate::infrastructure::http::client::HttpClient;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: HttpClient,
    pub drive: DriveService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = HttpClient::new(&config.proxy_user_agent)?;
        let drive = DriveService::new(
            http.clone(),
            &config.drive_api_base,
            config.drive_api_key.clone(),
        );

        Ok(Self {
            config,
            http,
            drive,
        })
    }
}
