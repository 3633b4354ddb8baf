use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::wizard::form::JobPostForm;

pub type SharedForm = Arc<Mutex<JobPostForm>>;

pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

struct Session {
    form: SharedForm,
    last_seen: Instant,
}

impl Session {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.duration_since(self.last_seen) >= idle_timeout
    }
}

/// In-memory wizard sessions. A discarded session is gone for good, and a
/// session untouched for `idle_timeout` is dropped on the next sweep or
/// lookup.
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_IDLE_TIMEOUT)
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("Session store lock poisoned".to_string())
}

impl SessionService {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn create(&self) -> Result<(Uuid, SharedForm)> {
        let id = Uuid::new_v4();
        let form = Arc::new(Mutex::new(JobPostForm::new()));
        let now = Instant::now();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let expired = Self::remove_idle(&mut sessions, now, self.idle_timeout);
        sessions.insert(
            id,
            Session {
                form: form.clone(),
                last_seen: now,
            },
        );
        info!(session_id = %id, expired, "Job post session started");
        Ok((id, form))
    }

    /// Returns the session and marks it as used.
    pub fn get(&self, id: Uuid) -> Result<SharedForm> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        match sessions.get_mut(&id) {
            Some(session) if !session.is_idle(now, self.idle_timeout) => {
                session.last_seen = now;
                Ok(session.form.clone())
            }
            Some(_) => {
                sessions.remove(&id);
                info!(session_id = %id, "Job post session expired");
                Err(Self::not_found(id))
            }
            None => Err(Self::not_found(id)),
        }
    }

    pub fn discard(&self, id: Uuid) -> Result<()> {
        let removed = self.sessions.write().map_err(poisoned)?.remove(&id);
        match removed {
            Some(_) => {
                info!(session_id = %id, "Job post session discarded");
                Ok(())
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// Drops every idle session and returns how many were removed.
    pub fn evict_idle(&self) -> Result<usize> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let expired = Self::remove_idle(&mut sessions, Instant::now(), self.idle_timeout);
        if expired > 0 {
            info!(expired, remaining = sessions.len(), "Expired idle job post sessions");
        } else {
            debug!(remaining = sessions.len(), "No idle job post sessions");
        }
        Ok(expired)
    }

    fn remove_idle(
        sessions: &mut HashMap<Uuid, Session>,
        now: Instant,
        idle_timeout: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, idle_timeout));
        before - sessions.len()
    }

    fn not_found(id: Uuid) -> Error {
        Error::NotFound(format!("Job post session {} not found", id))
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_isolated_and_discardable() {
        let service = SessionService::default();
        let (first, _) = service.create().unwrap();
        let (second, _) = service.create().unwrap();
        assert_ne!(first, second);
        assert_eq!(service.len(), 2);

        tokio_test::block_on(async {
            let form = service.get(first).unwrap();
            form.lock().await.handle_previous();
        });

        service.discard(first).unwrap();
        assert!(matches!(service.get(first), Err(Error::NotFound(_))));
        assert!(service.get(second).is_ok());
        assert!(matches!(service.discard(first), Err(Error::NotFound(_))));
    }

    #[test]
    fn idle_sessions_expire() {
        let service = SessionService::new(Duration::from_millis(50));
        let (stale, _) = service.create().unwrap();
        std::thread::sleep(Duration::from_millis(80));

        assert!(matches!(service.get(stale), Err(Error::NotFound(_))));
        assert!(service.is_empty());
    }

    #[test]
    fn sweep_drops_only_untouched_sessions() {
        let service = SessionService::new(Duration::from_millis(300));
        let (kept, _) = service.create().unwrap();
        let (abandoned, _) = service.create().unwrap();

        std::thread::sleep(Duration::from_millis(200));
        service.get(kept).unwrap();
        std::thread::sleep(Duration::from_millis(200));

        assert_eq!(service.evict_idle().unwrap(), 1);
        assert_eq!(service.len(), 1);
        assert!(service.get(kept).is_ok());
        assert!(matches!(service.get(abandoned), Err(Error::NotFound(_))));
    }
}
