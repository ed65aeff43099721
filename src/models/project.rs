use serde::{Deserialize, Serialize};

// Project models
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
}

/// Session-local record of a project created through this form. Never
/// reconciled with the server; used only for duplicate-title checks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
}

// Project API DTOs
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub board_id: i64,
}
