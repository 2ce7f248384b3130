//! Server-side admin sessions keyed by an opaque cookie.
//!
//! A session holds the admin panel's local item list and its submit state.
//! Sessions live in memory only. They disappear on restart, on logout, or
//! once left idle for longer than the store's idle timeout.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use malar_core::admin::AdminSession;
use malar_core::portfolio::PortfolioItem;
use tokio::sync::RwLock;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "malar_admin";

/// Path the session cookie is scoped to.
const COOKIE_PATH: &str = "/admin";

/// Sessions untouched for this long are dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(8 * 60 * 60);

#[derive(Debug)]
struct Entry {
    session: AdminSession,
    last_seen: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Open a session seeded with the item list loaded at login.
    ///
    /// Expired sessions are swept first.
    pub async fn open(&self, items: Vec<PortfolioItem>) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!(expired, "Dropped idle admin sessions");
        }

        sessions.insert(
            id,
            Entry {
                session: AdminSession::new(items),
                last_seen: now,
            },
        );
        tracing::info!(session = %id, "Admin session opened");
        id
    }

    /// Discard a session. Returns whether it existed.
    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(session = %id, "Admin session closed");
        }
        removed
    }

    /// Whether `id` names a live session. Refreshes its idle clock.
    pub async fn touch(&self, id: Uuid) -> bool {
        self.update(id, |_| ()).await.is_some()
    }

    /// Run `f` against a live session under the write lock.
    ///
    /// `f` must not await; backend calls happen between separate updates.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut AdminSession) -> R) -> Option<R> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        if now.duration_since(entry.last_seen) >= self.idle_timeout {
            sessions.remove(&id);
            tracing::info!(session = %id, "Admin session expired");
            return None;
        }
        entry.last_seen = now;
        Some(f(&mut entry.session))
    }
}

/// Cookie for a freshly opened session.
pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_path(COOKIE_PATH);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Cookie matching [`session_cookie`] by name and path, for removal.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path(COOKIE_PATH);
    cookie
}

/// Session id carried by the request, if any parses.
pub fn session_id(cookies: &Cookies) -> Option<Uuid> {
    cookies
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_update_close() {
        let store = SessionStore::default();
        let id = store.open(vec![]).await;
        assert!(store.touch(id).await);

        let began = store.update(id, |s| s.begin_submit().is_ok()).await;
        assert_eq!(began, Some(true));
        assert_eq!(store.update(Uuid::new_v4(), |_| ()).await, None);

        assert!(store.close(id).await);
        assert!(!store.close(id).await);
        assert!(!store.touch(id).await);
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let store = SessionStore::with_idle_timeout(Duration::from_millis(50));
        let stale = store.open(vec![]).await;
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(!store.touch(stale).await);
        assert!(!store.close(stale).await, "expired session is already gone");
    }

    #[tokio::test]
    async fn opening_sweeps_abandoned_sessions() {
        let store = SessionStore::with_idle_timeout(Duration::from_millis(50));
        let abandoned = store.open(vec![]).await;
        tokio::time::sleep(Duration::from_millis(80)).await;

        let fresh = store.open(vec![]).await;
        assert!(!store.sessions.read().await.contains_key(&abandoned));
        assert!(store.touch(fresh).await);
    }

    #[test]
    fn session_cookie_is_http_only_and_scoped() {
        let cookie = session_cookie(Uuid::nil());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some(COOKIE_PATH));
        assert_eq!(removal_cookie().path(), Some(COOKIE_PATH));
    }
}
