//! Search endpoint client.
//!
//! Pure network IO; callers map the result into compute updates.

use crate::http::{Client, HttpError};
use crate::users::model::{SearchUsersResponse, UserRecord};
use crate::users::query::SearchFilters;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("search returned status {status}")]
    Status { status: u16 },
    #[error("malformed search response: {0}")]
    Malformed(String),
}

impl From<HttpError> for SearchError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

/// GET `{endpoint}?q=..&role=..&status=..`
pub async fn search_users(
    endpoint: &str,
    filters: &SearchFilters,
) -> Result<Vec<UserRecord>, SearchError> {
    let url = filters.search_url(endpoint);
    log::debug!("searching users: {url}");

    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(SearchError::Status {
            status: response.status,
        });
    }

    let body: SearchUsersResponse = response
        .json()
        .map_err(|e| SearchError::Malformed(e.to_string()))?;

    Ok(body.users)
}
