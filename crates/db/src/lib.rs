//! Data access for the Casa De Malar site.
//!
//! Every read and write goes through a single [`Backend`] handle built once
//! at startup. The handle is either connected to a [`BackendService`] or the
//! unconfigured sentinel, in which case reads come back empty, writes fail,
//! and no network I/O happens.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod service;
pub mod supabase;

pub use config::BackendConfig;
pub use error::StoreError;
pub use service::BackendService;

/// Shared, cheaply cloneable handle to the managed backend.
#[derive(Clone, Default)]
pub struct Backend {
    service: Option<Arc<dyn BackendService>>,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("service", &self.service.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Backend {
    /// Build the handle from an optional configuration.
    ///
    /// A configuration that cannot produce a client (for example an
    /// unparsable URL) is logged and treated as absent.
    pub fn connect(config: Option<BackendConfig>) -> Self {
        let Some(config) = config else {
            tracing::warn!("Backend credentials missing; running without a backend");
            return Self::unconfigured();
        };
        match supabase::SupabaseClient::new(&config) {
            Ok(client) => {
                tracing::info!(url = %config.url, "Backend configured");
                Self::with_service(Arc::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "Invalid backend configuration; running without a backend");
                Self::unconfigured()
            }
        }
    }

    /// The "not configured" sentinel.
    pub fn unconfigured() -> Self {
        Self { service: None }
    }

    pub fn with_service(service: Arc<dyn BackendService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// Human-readable status for diagnostics.
    pub fn status(&self) -> &'static str {
        if self.is_configured() {
            "Connected"
        } else {
            "Not configured"
        }
    }

    pub(crate) fn service(&self) -> Option<&dyn BackendService> {
        self.service.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_handle() {
        let backend = Backend::connect(None);
        assert!(!backend.is_configured());
        assert_eq!(backend.status(), "Not configured");
    }

    #[test]
    fn connect_with_valid_config() {
        let config =
            BackendConfig::from_values(Some("https://abc.supabase.co"), Some("anon-key")).unwrap();
        let backend = Backend::connect(Some(config));
        assert!(backend.is_configured());
        assert!(format!("{backend:?}").contains("supabase"));
    }

    #[test]
    fn connect_with_unparsable_url_is_unconfigured() {
        let config = BackendConfig::from_values(Some("not a url"), Some("anon-key")).unwrap();
        assert!(!Backend::connect(Some(config)).is_configured());
    }
}
