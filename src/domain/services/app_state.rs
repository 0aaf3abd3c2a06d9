#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::LoginProfile;
use crate::domain::models::MatchResult;
use crate::domain::models::Outcome;
use crate::domain::models::RequestId;
use crate::domain::models::Session;

pub const CONNECT_ERROR: &str = "Failed to connect to server. Make sure the backend is running.";
pub const LOGIN_FAILED: &str = "Login failed";
pub const EMPTY_PREFERENCES: &str = "Please add some food preferences first";
pub const CALCULATE_FAILED: &str = "Failed to calculate matches";
pub const CALCULATE_CONNECT_ERROR: &str =
    "Failed to calculate matches. Make sure the backend is running.";
pub const EXTRACT_FAILED: &str = "Failed to extract foods";

/// Everything the client knows. Transitions never perform I/O: the ones that
/// need the remote return the `Action` to send, and remote answers come back
/// through the `handle_*` methods.
#[derive(Default)]
pub struct AppState {
    pub session: Session,
    pub foods: Vec<String>,
    pub matches: Vec<MatchResult>,
    pub error: Option<String>,
    pub selected_food: usize,
    pub scroll: Scroll,
    last_request_id: RequestId,
    login_request: Option<(RequestId, String)>,
    matches_request: Option<RequestId>,
    extract_request: Option<RequestId>,
}

impl AppState {
    pub async fn new(backend: &BackendBox) -> AppState {
        let mut app_state = AppState::default();
        if let Err(err) = backend.health_check().await {
            tracing::warn!(error = ?err, "Food-Friend API failed its health check");
            app_state.error = Some(CONNECT_ERROR.to_string());
        }

        return app_state;
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        return self.last_request_id;
    }

    fn update_foods_action(&self) -> Action {
        return Action::UpdateFoods(self.session.user_name().to_string(), self.foods.clone());
    }

    pub fn is_logging_in(&self) -> bool {
        return self.login_request.is_some();
    }

    pub fn is_calculating(&self) -> bool {
        return self.matches_request.is_some();
    }

    pub fn is_extracting(&self) -> bool {
        return self.extract_request.is_some();
    }

    pub fn can_calculate(&self) -> bool {
        return self.session.is_logged_in() && !self.foods.is_empty() && !self.is_calculating();
    }

    pub fn login(&mut self, name: &str) -> Option<Action> {
        let name = name.trim();
        if name.is_empty() || self.session.is_logged_in() || self.is_logging_in() {
            return None;
        }

        let request_id = self.next_request_id();
        self.login_request = Some((request_id, name.to_string()));

        return Some(Action::Login(request_id, name.to_string()));
    }

    pub fn handle_login_response(&mut self, request_id: RequestId, outcome: Outcome<LoginProfile>) {
        let name = match self.login_request.take() {
            Some((id, name)) if id == request_id => name,
            other => {
                tracing::debug!(request_id, "Discarding stale login response");
                self.login_request = other;
                return;
            }
        };

        match outcome {
            Outcome::Success(profile) => {
                if let Some(session) = Session::logged_in(&name, profile.is_new) {
                    self.session = session;
                    self.foods = profile.food_choices;
                    self.selected_food = 0;
                    self.error = None;
                }
            }
            Outcome::Rejected(message) => {
                self.error = Some(message.unwrap_or_else(|| return LOGIN_FAILED.to_string()));
            }
            Outcome::Unreachable => {
                self.error = Some(CONNECT_ERROR.to_string());
            }
        }
    }

    /// Drops every piece of user state. Requests still in flight are
    /// forgotten, so their answers are discarded when they arrive.
    pub fn logout(&mut self) {
        *self = AppState {
            last_request_id: self.last_request_id,
            ..AppState::default()
        };
    }

    pub fn add_food(&mut self, text: &str) -> Option<Action> {
        let food = text.trim();
        if food.is_empty() || !self.session.is_logged_in() {
            return None;
        }

        self.foods.push(food.to_string());
        self.selected_food = self.foods.len() - 1;

        return Some(self.update_foods_action());
    }

    pub fn remove_food(&mut self, index: usize) -> Option<Action> {
        if index >= self.foods.len() || !self.session.is_logged_in() {
            return None;
        }

        self.foods.remove(index);
        self.selected_food = self.selected_food.min(self.foods.len().saturating_sub(1));

        return Some(self.update_foods_action());
    }

    pub fn remove_selected_food(&mut self) -> Option<Action> {
        return self.remove_food(self.selected_food);
    }

    pub fn select_previous_food(&mut self) {
        self.selected_food = self.selected_food.saturating_sub(1);
    }

    pub fn select_next_food(&mut self) {
        if self.selected_food + 1 < self.foods.len() {
            self.selected_food += 1;
        }
    }

    pub fn calculate_matches(&mut self) -> Option<Action> {
        if !self.session.is_logged_in() || self.is_calculating() {
            return None;
        }

        if self.foods.is_empty() {
            self.error = Some(EMPTY_PREFERENCES.to_string());
            return None;
        }

        let request_id = self.next_request_id();
        self.matches_request = Some(request_id);
        self.error = None;

        return Some(Action::CalculateMatches(
            request_id,
            self.session.user_name().to_string(),
        ));
    }

    pub fn handle_matches_response(
        &mut self,
        request_id: RequestId,
        outcome: Outcome<Vec<MatchResult>>,
    ) {
        if self.matches_request != Some(request_id) {
            tracing::debug!(request_id, "Discarding stale matches response");
            return;
        }
        self.matches_request = None;

        match outcome {
            Outcome::Success(matches) => {
                self.matches = matches;
            }
            Outcome::Rejected(message) => {
                self.matches = vec![];
                self.error = Some(message.unwrap_or_else(|| return CALCULATE_FAILED.to_string()));
            }
            Outcome::Unreachable => {
                self.matches = vec![];
                self.error = Some(CALCULATE_CONNECT_ERROR.to_string());
            }
        }

        self.scroll.first();
    }

    pub fn extract_foods(&mut self, description: &str) -> Option<Action> {
        let description = description.trim();
        if description.is_empty() || !self.session.is_logged_in() || self.is_extracting() {
            return None;
        }

        let request_id = self.next_request_id();
        self.extract_request = Some(request_id);

        return Some(Action::ExtractFoods(request_id, description.to_string()));
    }

    /// Appends every extracted food and, when anything was added, returns a
    /// single push of the whole list.
    pub fn handle_extract_response(
        &mut self,
        request_id: RequestId,
        outcome: Outcome<Vec<String>>,
    ) -> Option<Action> {
        if self.extract_request != Some(request_id) {
            tracing::debug!(request_id, "Discarding stale extract response");
            return None;
        }
        self.extract_request = None;

        match outcome {
            Outcome::Success(foods) => {
                let before = self.foods.len();
                self.foods.extend(
                    foods
                        .iter()
                        .map(|food| return food.trim().to_string())
                        .filter(|food| return !food.is_empty()),
                );

                if self.foods.len() == before {
                    return None;
                }
                self.selected_food = self.foods.len() - 1;

                return Some(self.update_foods_action());
            }
            Outcome::Rejected(message) => {
                self.error = Some(message.unwrap_or_else(|| return EXTRACT_FAILED.to_string()));
            }
            Outcome::Unreachable => {
                self.error = Some(CONNECT_ERROR.to_string());
            }
        }

        return None;
    }
}
