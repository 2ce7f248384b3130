//! Image upload constraints and object naming.
//!
//! Uploaded images land in the `portfolio_images` bucket under the
//! `portfolio/` folder with a collision-resistant name of the form
//! `{unix_millis}-{random}.{ext}`.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Object-storage bucket holding portfolio images.
pub const IMAGE_BUCKET: &str = "portfolio_images";

/// Logical folder inside the bucket.
pub const IMAGE_FOLDER: &str = "portfolio";

/// `Cache-Control` max-age sent with uploaded objects (seconds).
pub const UPLOAD_CACHE_MAX_AGE_SECS: u32 = 3600;

/// Extension used when the original file name has none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Length of the random part of generated object names.
const RANDOM_SUFFIX_LEN: usize = 6;

/// Fallback content type for unknown payloads.
pub const OCTET_STREAM: &str = "application/octet-stream";

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Upload payload
// ---------------------------------------------------------------------------

/// An image file received from the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Reasons an upload is refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadViolation {
    #[error("Please select an image file (JPG, PNG, etc.)")]
    NotAnImage { content_type: String },

    #[error("Image size must be less than 5MB")]
    TooLarge { size: usize },

    #[error("The selected image file is empty")]
    Empty,
}

impl ImageUpload {
    /// Build an upload, falling back to sniffing the bytes when the declared
    /// content type is missing or generic.
    pub fn new(file_name: impl Into<String>, declared_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let content_type = effective_content_type(declared_type, &bytes);
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Check content type and size limits.
    pub fn check(&self) -> Result<(), UploadViolation> {
        if !self.content_type.starts_with("image/") {
            return Err(UploadViolation::NotAnImage {
                content_type: self.content_type.clone(),
            });
        }
        if self.bytes.is_empty() {
            return Err(UploadViolation::Empty);
        }
        if self.size() > MAX_UPLOAD_BYTES {
            return Err(UploadViolation::TooLarge { size: self.size() });
        }
        Ok(())
    }
}

/// Resolve the content type of an upload.
///
/// A specific declared type wins. A missing or `application/octet-stream`
/// declaration falls back to the image format detected from magic bytes.
pub fn effective_content_type(declared: Option<&str>, bytes: &[u8]) -> String {
    match declared.map(str::trim) {
        Some(t) if !t.is_empty() && !t.eq_ignore_ascii_case(OCTET_STREAM) => t.to_ascii_lowercase(),
        _ => image::guess_format(bytes)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| OCTET_STREAM.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Object naming
// ---------------------------------------------------------------------------

/// Extract a safe, lower-cased extension from an original file name.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| EXTENSION_RE.is_match(ext))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Build the object path from its parts: `portfolio/{millis}-{suffix}.{ext}`.
pub fn object_path(millis: i64, suffix: &str, file_name: &str) -> String {
    format!(
        "{IMAGE_FOLDER}/{millis}-{suffix}.{}",
        file_extension(file_name)
    )
}

/// Generate a fresh object path for `file_name` at time `now`.
pub fn generate_object_path(file_name: &str, now: Timestamp) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    object_path(now.timestamp_millis(), &suffix, file_name)
}
