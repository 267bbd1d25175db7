use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct GithubAppInfo {
    pub installation_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_slug: Option<String>,
}

/// Tells the landing page where the GitHub App can be installed.
pub async fn get_github_app_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GithubAppInfo>, ApiError> {
    let installation_url = state.config.installation_url()?;
    tracing::debug!("Serving installation url {}", installation_url);
    Ok(Json(GithubAppInfo {
        installation_url,
        app_slug: state.config.github_app_slug.clone(),
    }))
}
