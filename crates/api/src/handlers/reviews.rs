//! Handler for the "Write a Review" form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use malar_core::error::CoreError;
use malar_core::review_form::{ReviewDraft, ReviewFormState, REJECTED_ALERT};
use malar_db::repositories::ReviewRepo;
use serde::Deserialize;

use crate::handlers::home::render_home;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReviewFormInput {
    #[serde(default)]
    pub name: String,
    pub rating: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// POST /reviews
///
/// Re-renders the home page with either the thank-you note or the form
/// still holding the visitor's values and an alert.
pub async fn submit_review(
    State(state): State<AppState>,
    Form(input): Form<ReviewFormInput>,
) -> Html<String> {
    let draft = ReviewDraft::from_fields(&input.name, input.rating.as_deref(), &input.message);

    let form = match draft.to_new_review() {
        Err(e) => {
            tracing::debug!(error = %e, "Review form rejected");
            let alert = match e {
                CoreError::Validation(msg) => msg,
                other => other.to_string(),
            };
            ReviewFormState::rejected(draft, alert)
        }
        Ok(review) => match ReviewRepo::create(&state.backend, &review).await {
            Some(created) => ReviewFormState::submitted(created.name),
            None => ReviewFormState::rejected(draft, REJECTED_ALERT),
        },
    };

    render_home(&state, &form).await
}
