//! The public "Write a Review" form.
//!
//! `Editing` is the only state that accepts input. A successful submission
//! moves to `Submitted`, which has no way back to an empty form.

use crate::error::CoreError;
use crate::review::NewReview;

/// Message shown when required inputs are missing.
pub const INCOMPLETE_ALERT: &str = "Please add your name, a star rating and your story.";

/// Message shown when the backend rejects a review.
pub const REJECTED_ALERT: &str = "Error submitting review. Please try again.";

/// Values typed into the form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    /// Selected star count; 0 means no star picked.
    pub rating: i32,
    pub message: String,
}

impl ReviewDraft {
    /// Build a draft from raw form fields. A missing or unparsable rating
    /// counts as "no star selected".
    pub fn from_fields(name: &str, rating: Option<&str>, message: &str) -> Self {
        let rating = rating
            .and_then(|r| r.trim().parse::<i32>().ok())
            .unwrap_or(0);
        Self {
            name: name.to_string(),
            rating,
            message: message.to_string(),
        }
    }

    /// Name and message present and a star selected.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.rating != 0 && !self.message.trim().is_empty()
    }

    /// Convert into an insert DTO, validating every rule.
    pub fn to_new_review(&self) -> Result<NewReview, CoreError> {
        if !self.is_complete() {
            return Err(CoreError::Validation(INCOMPLETE_ALERT.into()));
        }
        let review = NewReview::new(self.name.clone(), self.rating, self.message.clone());
        review.validate()?;
        Ok(review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFormState {
    Editing {
        draft: ReviewDraft,
        alert: Option<String>,
    },
    Submitted {
        name: String,
    },
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self::Editing {
            draft: ReviewDraft::default(),
            alert: None,
        }
    }
}

impl ReviewFormState {
    /// Keep the draft and show an alert.
    pub fn rejected(draft: ReviewDraft, alert: impl Into<String>) -> Self {
        Self::Editing {
            draft,
            alert: Some(alert.into()),
        }
    }

    pub fn submitted(name: impl Into<String>) -> Self {
        Self::Submitted { name: name.into() }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}
