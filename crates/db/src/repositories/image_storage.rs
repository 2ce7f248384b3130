//! Image uploads to the `portfolio_images` bucket.

use malar_core::upload::{
    generate_object_path, ImageUpload, UploadViolation, IMAGE_BUCKET, UPLOAD_CACHE_MAX_AGE_SECS,
};

use crate::service::ObjectUpload;
use crate::Backend;

/// Why an upload did not produce a public URL.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Storage is not configured")]
    NotConfigured,

    /// The file broke a type or size rule; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] UploadViolation),

    /// The storage service refused or failed the upload.
    #[error("Upload failed: {0}")]
    Rejected(String),

    #[error("Could not resolve a public URL for the uploaded image")]
    NoPublicUrl,
}

pub struct ImageStorage;

impl ImageStorage {
    /// Upload an image under a fresh `portfolio/` name and return its
    /// public URL.
    ///
    /// Configuration, content type and size are checked before any network
    /// call. Existing objects are never overwritten.
    pub async fn upload(backend: &Backend, upload: &ImageUpload) -> Result<String, UploadError> {
        let service = backend.service().ok_or(UploadError::NotConfigured)?;
        upload.check()?;

        let path = generate_object_path(&upload.file_name, chrono::Utc::now());
        let object = ObjectUpload {
            content_type: &upload.content_type,
            bytes: &upload.bytes,
            cache_max_age_secs: UPLOAD_CACHE_MAX_AGE_SECS,
            upsert: false,
        };

        service
            .upload_object(IMAGE_BUCKET, &path, object)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %path, "Image upload failed");
                UploadError::Rejected(e.to_string())
            })?;

        let url = service
            .public_url(IMAGE_BUCKET, &path)
            .ok_or(UploadError::NoPublicUrl)?;
        tracing::info!(%path, size = upload.size(), "Image uploaded");
        Ok(url)
    }
}
