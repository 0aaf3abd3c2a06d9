#[cfg(test)]
#[path = "food_friend_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::LoginProfile;
use crate::domain::models::MatchResult;
use crate::domain::models::Outcome;
use crate::domain::models::UserSummary;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct NameRequest {
    name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFoodsRequest {
    name: String,
    food_choices: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ExtractFoodsRequest {
    description: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    food_choices: Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    user: Option<UserRecord>,
    #[serde(default)]
    is_new: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    matches: Option<Vec<MatchResult>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractFoodsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    food_choices: Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    users: Option<Vec<UserRecord>>,
}

/// Client for the Food-Friend HTTP API. Every operation is a JSON request
/// against `url`, which already carries the `/api` prefix.
pub struct FoodFriend {
    url: String,
    timeout: String,
}

impl Default for FoodFriend {
    fn default() -> FoodFriend {
        return FoodFriend {
            url: Config::get(ConfigKey::ApiURL)
                .trim_end_matches('/')
                .to_string(),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

impl FoodFriend {
    /// Posts `body` and reads the answer as JSON whatever the status code, as
    /// the service reports refusals in the body of 4xx answers.
    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let res = reqwest::Client::new()
            .post(format!("{url}{path}", url = self.url))
            .json(body)
            .send()
            .await?;

        let status = res.status().as_u16();
        let text = res.text().await?;
        tracing::debug!(path, status, body = %text, "Food-Friend API response");

        return Ok(serde_json::from_str(&text)?);
    }
}

#[async_trait]
impl Backend for FoodFriend {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Food-Friend API URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(format!("{url}/users", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let status = match res {
            Ok(res) => res.status(),
            Err(err) => {
                tracing::error!(error = ?err, "Food-Friend API is not running");
                bail!("Food-Friend API is not running");
            }
        };
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Food-Friend API health check failed");
            bail!("Food-Friend API health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, name: &str) -> Result<Outcome<LoginProfile>> {
        let req = NameRequest {
            name: name.to_string(),
        };
        let res: LoginResponse = self.post("/login", &req).await?;

        let profile = LoginProfile {
            food_choices: res
                .user
                .and_then(|user| return user.food_choices)
                .unwrap_or_default(),
            is_new: res.is_new,
        };

        return Ok(Outcome::from_reply(res.success, res.error, profile));
    }

    #[allow(clippy::implicit_return)]
    async fn update_foods(&self, name: &str, food_choices: &[String]) -> Result<()> {
        let req = UpdateFoodsRequest {
            name: name.to_string(),
            food_choices: food_choices.to_vec(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/update-foods", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to update foods on the Food-Friend API"
            );
            bail!("Failed to update foods on the Food-Friend API");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn calculate_matches(&self, name: &str) -> Result<Outcome<Vec<MatchResult>>> {
        let req = NameRequest {
            name: name.to_string(),
        };
        let res: MatchesResponse = self.post("/calculate-matches", &req).await?;

        return Ok(Outcome::from_reply(
            res.success,
            res.error,
            res.matches.unwrap_or_default(),
        ));
    }

    #[allow(clippy::implicit_return)]
    async fn extract_foods(&self, description: &str) -> Result<Outcome<Vec<String>>> {
        let req = ExtractFoodsRequest {
            description: description.to_string(),
        };
        let res: ExtractFoodsResponse = self.post("/extract-foods", &req).await?;

        return Ok(Outcome::from_reply(
            res.success,
            res.error,
            res.food_choices.unwrap_or_default(),
        ));
    }

    #[allow(clippy::implicit_return)]
    async fn list_users(&self) -> Result<Outcome<Vec<UserSummary>>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/users", url = self.url))
            .send()
            .await?
            .json::<UsersResponse>()
            .await?;

        let users = res
            .users
            .unwrap_or_default()
            .into_iter()
            .map(|user| {
                return UserSummary {
                    name: user.name,
                    food_choices: user.food_choices.unwrap_or_default(),
                };
            })
            .collect();

        return Ok(Outcome::from_reply(res.success, res.error, users));
    }
}
