//! Backend credentials loaded from the environment.

/// Environment variable holding the backend endpoint.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the backend public (anon) key.
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Marker found in the values of an unedited `.env.example`.
const PLACEHOLDER_MARKER: &str = "your_";

/// Endpoint and public key of the managed backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl BackendConfig {
    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    ///
    /// Returns `None` when either is missing, empty, or still a placeholder.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_VAR).ok();
        let key = std::env::var(KEY_VAR).ok();
        Self::from_values(url.as_deref(), key.as_deref())
    }

    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = usable(url)?;
        let anon_key = usable(anon_key)?;
        Some(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

fn usable(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.contains(PLACEHOLDER_MARKER))
}
