//! Shared application state: configuration, external clients, and the
//! stale-view set workflows use to signal that dashboard views need a
//! fresh read.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::ai::CompletionClient;
use crate::build_service::BuildClient;
use crate::config::Config;
use crate::store::client::TableClient;
use crate::types::View;

/// Sentinel used when no acting-user identity is configured. The
/// approval workflow never blocks on identity.
pub const UNKNOWN_USER: &str = "Unknown User";

pub struct AppState {
    pub config: Config,
    pub store: TableClient,
    pub builds: BuildClient,
    pub ai: CompletionClient,
    stale_views: Mutex<HashSet<View>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = TableClient::new(&config.store_url, &config.store_table, &config.store_api_key);
        let builds = BuildClient::new(&config.build_service_url);
        let ai = CompletionClient::new(&config.ai_url, &config.ai_api_key, &config.ai_model);
        Self {
            config,
            store,
            builds,
            ai,
            stale_views: Mutex::new(HashSet::new()),
        }
    }

    /// Display name of the acting user.
    pub fn acting_user(&self) -> String {
        self.config
            .user_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    }

    /// Mark views stale after a workflow write.
    pub fn mark_stale(&self, views: &[View]) {
        if let Ok(mut guard) = self.stale_views.lock() {
            guard.extend(views.iter().copied());
        }
    }

    /// Drain the stale-view set; callers re-read whatever comes back.
    pub fn take_stale_views(&self) -> HashSet<View> {
        self.stale_views
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user_name: Option<&str>) -> Config {
        Config {
            store_url: "https://api.example.com/v0/app123".to_string(),
            store_api_key: "key".to_string(),
            store_table: "Jobs".to_string(),
            build_service_url: "https://builds.example.com".to_string(),
            ai_url: "https://ai.example.com/v1".to_string(),
            ai_api_key: "sk-x".to_string(),
            ai_model: "gpt-4o-mini".to_string(),
            user_name: user_name.map(str::to_string),
        }
    }

    #[test]
    fn acting_user_falls_back_to_sentinel() {
        assert_eq!(AppState::new(config(Some("James"))).acting_user(), "James");
        assert_eq!(AppState::new(config(None)).acting_user(), UNKNOWN_USER);
        assert_eq!(AppState::new(config(Some("  "))).acting_user(), UNKNOWN_USER);
    }

    #[test]
    fn stale_views_accumulate_and_drain() {
        let state = AppState::new(config(None));
        state.mark_stale(&[View::Approvals, View::Building]);
        state.mark_stale(&[View::Building, View::FollowUps]);

        let stale = state.take_stale_views();
        assert_eq!(stale.len(), 3);
        assert!(stale.contains(&View::Approvals));
        assert!(state.take_stale_views().is_empty());
    }
}
