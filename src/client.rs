use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::project::CreateProjectRequest;

/// HTTP client for the project-management API.
///
/// No request timeout is configured: a call waits for a response or a
/// transport-level failure.
#[derive(Clone)]
pub struct ProjectApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProjectApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn add_project_url(&self, board_id: i64) -> String {
        format!("{}/Project/AddProject/{}", self.base_url, board_id)
    }

    /// POST the new project under its board. Any 2xx status counts as
    /// created; the response body is not inspected.
    pub async fn add_project(&self, request: &CreateProjectRequest) -> AppResult<()> {
        let request_id = Uuid::new_v4();
        let url = self.add_project_url(request.board_id);
        let start_time = Instant::now();

        info!(
            request_id = %request_id,
            url = %url,
            board_id = %request.board_id,
            title = %request.title,
            "Creating project"
        );

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        let duration_ms = start_time.elapsed().as_millis();

        if status.is_success() {
            info!(
                request_id = %request_id,
                status = %status,
                duration_ms = %duration_ms,
                "Project created"
            );
            Ok(())
        } else {
            warn!(
                request_id = %request_id,
                status = %status,
                duration_ms = %duration_ms,
                "Project creation rejected"
            );
            Err(AppError::server(status.as_u16()))
        }
    }
}
