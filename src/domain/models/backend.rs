use anyhow::Result;
use async_trait::async_trait;

use super::MatchResult;
use super::Outcome;

/// What the service hands back after a login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginProfile {
    pub food_choices: Vec<String>,
    pub is_new: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSummary {
    pub name: String,
    pub food_choices: Vec<String>,
}

/// Remote authority that stores users and computes matches.
///
/// An `Err` means the call could not complete at all (unreachable service,
/// unreadable body). A readable answer is always `Ok`, with the service's
/// verdict carried by the `Outcome`.
#[async_trait]
pub trait Backend {
    /// Used at startup to verify the service is reachable.
    async fn health_check(&self) -> Result<()>;

    /// Logs in, creating the user remotely when the name is unknown.
    async fn login(&self, name: &str) -> Result<Outcome<LoginProfile>>;

    /// Replaces the full list of food choices for a user. Any non-2xx answer
    /// is an error.
    async fn update_foods(&self, name: &str, food_choices: &[String]) -> Result<()>;

    /// Ranks other users against the preferences the service already holds
    /// for `name`. Order is preserved as served.
    async fn calculate_matches(&self, name: &str) -> Result<Outcome<Vec<MatchResult>>>;

    /// Turns a free text description into a list of food choices.
    async fn extract_foods(&self, description: &str) -> Result<Outcome<Vec<String>>>;

    async fn list_users(&self) -> Result<Outcome<Vec<UserSummary>>>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
