//! User search compute + command.
//!
//! - `UserSearchCompute` caches the rows of the latest applied search.
//! - `SearchUsersCommand` performs the request and publishes through a
//!   `LatestOnlyUpdater`, so only the most recent dispatch lands.
//!
//! UI reads via `ctx.cached::<UserSearchCompute>()` and searches with
//! `ctx.dispatch::<SearchUsersCommand>()` after writing `SearchFilters`.

use std::any::Any;

use campus_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State,
    snapshot_clone,
};
use chrono::{DateTime, Utc};

use crate::BusinessConfig;
use crate::users::api::{self, SearchError};
use crate::users::model::UserRecord;
use crate::users::query::SearchFilters;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSearchCompute {
    pub users: Vec<UserRecord>,
    /// When the current `users` arrived. `None` until the first success.
    pub loaded_at: Option<DateTime<Utc>>,
    pub in_flight: bool,
    /// Message of the last failed search. Rows are left as they were.
    pub error: Option<String>,
}

impl UserSearchCompute {
    pub fn loaded(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            loaded_at: Some(Utc::now()),
            in_flight: false,
            error: None,
        }
    }

    fn loading(&self) -> Self {
        Self {
            in_flight: true,
            ..self.clone()
        }
    }

    fn failed(&self, err: &SearchError) -> Self {
        Self {
            in_flight: false,
            error: Some(err.to_string()),
            ..self.clone()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl State for UserSearchCompute {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        snapshot_clone(self)
    }
}

impl Compute for UserSearchCompute {}

/// Manual-only command: GET the search endpoint with the current filters.
#[derive(Default, Debug)]
pub struct SearchUsersCommand;

impl Command for SearchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let filters = snap.state::<SearchFilters>().clone();
        let config = snap.state::<BusinessConfig>().clone();
        let previous = snap.compute::<UserSearchCompute>().clone();

        Box::pin(async move {
            let endpoint = config.search_endpoint();
            let generation = updater.task().generation();

            updater.set(previous.loading());

            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("user search #{generation} superseded");
                    return;
                }
                result = api::search_users(endpoint.as_str(), &filters) => result,
            };

            match result {
                Ok(users) => {
                    log::info!("user search #{generation} returned {} users", users.len());
                    updater.set(UserSearchCompute::loaded(users));
                }
                Err(err) => {
                    log::error!("user search #{generation} failed: {err}");
                    updater.set(previous.failed(&err));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> UserRecord {
        UserRecord {
            id,
            email: format!("user{id}@school.example"),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_loading_keeps_previous_rows() {
        let compute = UserSearchCompute::loaded(vec![record(1), record(2)]);
        let loading = compute.loading();

        assert!(loading.is_loading());
        assert_eq!(loading.users, compute.users);
        assert_eq!(loading.loaded_at, compute.loaded_at);
    }

    #[test]
    fn test_failure_keeps_rows_and_records_message() {
        let compute = UserSearchCompute::loaded(vec![record(3)]).loading();
        let failed = compute.failed(&SearchError::Status { status: 502 });

        assert!(!failed.is_loading());
        assert_eq!(failed.users.len(), 1);
        assert_eq!(failed.error_message(), Some("search returned status 502"));
    }

    #[test]
    fn test_success_clears_error() {
        let loaded = UserSearchCompute::loaded(Vec::new());
        assert!(loaded.error.is_none());
        assert!(loaded.loaded_at.is_some());
    }
}
