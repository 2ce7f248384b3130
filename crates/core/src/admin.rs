//! Admin panel rules: the password gate, create-form validation and the
//! per-session state machine.
//!
//! The gate is a plain secret comparison. It keeps casual visitors out of
//! the content tools and is not a security boundary.

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::portfolio::{validate_persistable_image_url, PortfolioItem};
use crate::types::RecordId;
use crate::upload::ImageUpload;

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Compares login attempts against the configured admin secret.
#[derive(Clone)]
pub struct AdminGate {
    digest: Option<[u8; 32]>,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminGate {
    /// An empty or missing secret leaves the gate permanently closed.
    pub fn new(secret: Option<&str>) -> Self {
        let digest = secret.filter(|s| !s.is_empty()).map(sha256);
        Self { digest }
    }

    pub fn is_configured(&self) -> bool {
        self.digest.is_some()
    }

    /// Whether `attempt` matches the secret.
    pub fn check(&self, attempt: &str) -> bool {
        let Some(expected) = &self.digest else {
            return false;
        };
        let actual = sha256(attempt);
        expected
            .iter()
            .zip(actual.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

fn sha256(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(value.as_bytes()));
    out
}

// ---------------------------------------------------------------------------
// Create form
// ---------------------------------------------------------------------------

/// Where the image of a new item comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Paste an externally hosted image URL.
    Url,
    /// Upload a photo to object storage.
    #[default]
    File,
}

impl UploadMode {
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("url") => Self::Url,
            Some(v) if v.eq_ignore_ascii_case("file") => Self::File,
            _ => Self::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::File => "file",
        }
    }
}

/// Raw create-form submission.
#[derive(Debug, Clone, Default)]
pub struct CreateItemForm {
    pub mode: UploadMode,
    pub image_url: String,
    pub file: Option<ImageUpload>,
    pub name: String,
    pub description: String,
}

/// Image source of a validated submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Url(String),
    File(ImageUpload),
}

/// A submission that passed validation and may be sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub source: ImageSource,
    pub name: String,
    pub description: String,
}

impl CreateItemForm {
    /// Validate according to the selected mode.
    pub fn validate(self) -> Result<ValidatedItem, CoreError> {
        let name = self.name.trim().to_string();
        let description = self.description.trim().to_string();

        let source = match self.mode {
            UploadMode::Url => {
                let url = self.image_url.trim().to_string();
                if url.is_empty() || name.is_empty() || description.is_empty() {
                    return Err(CoreError::Validation("Please fill all fields!".into()));
                }
                validate_persistable_image_url(&url)?;
                ImageSource::Url(url)
            }
            UploadMode::File => {
                let file = match self.file {
                    Some(file) if !name.is_empty() && !description.is_empty() => file,
                    _ => {
                        return Err(CoreError::Validation(
                            "Please fill all fields and select an image!".into(),
                        ))
                    }
                };
                file.check()?;
                ImageSource::File(file)
            }
        };

        Ok(ValidatedItem {
            source,
            name,
            description,
        })
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Whether a create/delete action is in flight for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A one-shot message shown at the top of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// State of one opened admin gate.
///
/// `items` is a local projection of the store: loaded once when the gate
/// opens, then patched on confirmed creates and deletes without re-fetching.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    items: Vec<PortfolioItem>,
    submit: SubmitState,
    status: Option<StatusMessage>,
}

impl AdminSession {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn find(&self, id: &RecordId) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// `Idle -> Submitting`. Refused while another action is in flight.
    pub fn begin_submit(&mut self) -> Result<(), CoreError> {
        match self.submit {
            SubmitState::Idle => {
                self.submit = SubmitState::Submitting;
                Ok(())
            }
            SubmitState::Submitting => Err(CoreError::Validation(
                "Another change is still being saved. Please wait.".into(),
            )),
        }
    }

    /// `Submitting -> Idle`.
    pub fn finish_submit(&mut self) {
        self.submit = SubmitState::Idle;
    }

    /// Prepend a confirmed new item.
    pub fn record_created(&mut self, item: PortfolioItem) {
        self.items.insert(0, item);
    }

    /// Drop a confirmed deleted item. Returns whether it was in the list.
    pub fn record_deleted(&mut self, id: &RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Take the pending status message, clearing it.
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }
}
