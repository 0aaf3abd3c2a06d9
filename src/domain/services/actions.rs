#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task;

use crate::domain::models::Action;
use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::domain::models::Outcome;

/// Folds transport failures into the outcome handed to the UI.
fn settle<T>(operation: &str, res: Result<Outcome<T>>) -> Outcome<T> {
    match res {
        Ok(outcome) => {
            if !outcome.is_success() {
                tracing::info!(operation, "Food-Friend API rejected the request");
            }
            return outcome;
        }
        Err(err) => {
            tracing::error!(operation, error = ?err, "Food-Friend API is unreachable");
            return Outcome::Unreachable;
        }
    }
}

type SharedBackend = Arc<dyn Backend + Send + Sync>;

async fn perform(
    backend: &SharedBackend,
    tx: &mpsc::UnboundedSender<Event>,
    action: Action,
) -> Result<()> {
    match action {
        Action::Login(request_id, name) => {
            let outcome = settle("login", backend.login(&name).await);
            tx.send(Event::LoginResponse(request_id, outcome))?;
        }
        Action::UpdateFoods(name, food_choices) => {
            // Local state stays as the user left it, failures only reach the
            // log.
            if let Err(err) = backend.update_foods(&name, &food_choices).await {
                tracing::warn!(
                    name = %name,
                    foods = food_choices.len(),
                    error = ?err,
                    "Failed to update foods"
                );
            }
        }
        Action::CalculateMatches(request_id, name) => {
            let outcome = settle("calculate-matches", backend.calculate_matches(&name).await);
            tx.send(Event::MatchesResponse(request_id, outcome))?;
        }
        Action::ExtractFoods(request_id, description) => {
            let outcome = settle("extract-foods", backend.extract_foods(&description).await);
            tx.send(Event::ExtractResponse(request_id, outcome))?;
        }
    }

    return Ok(());
}

/// Preference pushes and match requests. Each one finishes before the next
/// starts, so a match is only computed once every earlier push has landed.
async fn run_ordered(
    backend: SharedBackend,
    tx: mpsc::UnboundedSender<Event>,
    mut rx: mpsc::UnboundedReceiver<Action>,
) -> Result<()> {
    while let Some(action) = rx.recv().await {
        perform(&backend, &tx, action).await?;
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Pushes and match requests run one at a time in the order the UI issued
    /// them. Logins and extractions run on their own tasks so a slow match
    /// never holds them up; their replies carry request ids, which makes
    /// arrival order irrelevant. Returns once the UI side of the channel is
    /// gone and every started call has settled.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend: SharedBackend = Arc::from(backend);
        let (ordered_tx, ordered_rx) = mpsc::unbounded_channel::<Action>();

        let mut tasks = task::JoinSet::new();
        tasks.spawn(run_ordered(backend.clone(), tx.clone(), ordered_rx));

        while let Some(action) = rx.recv().await {
            match action {
                Action::UpdateFoods(..) | Action::CalculateMatches(..) => {
                    ordered_tx.send(action)?;
                }
                Action::Login(..) | Action::ExtractFoods(..) => {
                    let backend = backend.clone();
                    let tx = tx.clone();
                    tasks.spawn(async move {
                        return perform(&backend, &tx, action).await;
                    });
                }
            }
        }

        drop(ordered_tx);
        while let Some(res) = tasks.join_next().await {
            res??;
        }

        return Ok(());
    }
}
