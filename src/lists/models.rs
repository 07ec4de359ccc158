use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color given to lists created without one
pub const DEFAULT_LIST_COLOR: &str = "#4A90E2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// A list annotated with its task tallies, as returned by `GET /lists`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSummary {
    #[serde(flatten)]
    pub list: List,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Full replacement of a list's editable fields
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
}
