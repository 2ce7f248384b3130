use malar_db::BackendConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// backend credentials and the admin password, which stay unset unless
/// provided.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Secret that opens the admin panel. `None` keeps it closed.
    pub admin_password: Option<String>,
    /// Managed backend credentials. `None` runs the site without data.
    pub backend: Option<BackendConfig>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("admin_password_set", &self.admin_password.is_some())
            .field("backend", &self.backend)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `ADMIN_PASSWORD`       | unset     |
    /// | `SUPABASE_URL`         | unset     |
    /// | `SUPABASE_ANON_KEY`    | unset     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        Self {
            host,
            port,
            request_timeout_secs,
            admin_password,
            backend: BackendConfig::from_env(),
        }
    }
}
