//! Session store: the explicit, injectable home of per-user assessment state.
//!
//! In-memory only. Each session carries the profile being filled in, the wizard
//! step, the last generated suggestions, and bookmarks. Locks are held only for
//! the duration of a mutation, never across a generation call. Sessions idle past
//! the TTL are evicted, and the store holds at most `max_sessions` at once.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::profile::models::{ProfileUpdate, UserProfile};
use crate::recommendation::models::RecommendationRecord;

/// Number of assessment steps (one per profile group).
pub const TOTAL_STEPS: u8 = 6;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("step must be between 1 and 6, got {0}")]
    InvalidStep(u8),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub profile: UserProfile,
    pub current_step: u8,
    pub total_steps: u8,
    pub assessment_completed: bool,
    pub career_suggestions: Vec<RecommendationRecord>,
    pub bookmarked_careers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile: UserProfile::default(),
            current_step: 1,
            total_steps: TOTAL_STEPS,
            assessment_completed: false,
            career_suggestions: Vec::new(),
            bookmarked_careers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sessions idle this long are evicted.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Upper bound on live sessions; the least recently active one makes room.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct Entry {
    session: Session,
    last_active: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::default(),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        remove_idle(&mut sessions, now, self.idle_ttl);
        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_active)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                warn!("Session limit {} reached, evicted {oldest}", self.max_sessions);
            }
        }

        sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_active: now,
            },
        );
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, SessionError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = live_entry(&mut sessions, id, now, self.idle_ttl)?;
        entry.last_active = now;
        Ok(entry.session.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for at least the TTL. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        remove_idle(&mut sessions, Instant::now(), self.idle_ttl)
    }

    /// Runs `evict_idle` on a fixed period. Never returns.
    pub async fn run_eviction(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = self.evict_idle().await;
            if evicted > 0 {
                info!(
                    "Evicted {evicted} idle sessions, {} remain",
                    self.session_count().await
                );
            }
        }
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            s.profile.apply(update);
            Ok(())
        })
        .await
    }

    pub async fn set_current_step(&self, id: Uuid, step: u8) -> Result<Session, SessionError> {
        if !(1..=TOTAL_STEPS).contains(&step) {
            return Err(SessionError::InvalidStep(step));
        }
        self.mutate(id, |s| {
            s.current_step = step;
            Ok(())
        })
        .await
    }

    pub async fn complete_assessment(&self, id: Uuid) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            s.assessment_completed = true;
            Ok(())
        })
        .await
    }

    pub async fn set_suggestions(
        &self,
        id: Uuid,
        suggestions: Vec<RecommendationRecord>,
    ) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            s.career_suggestions = suggestions;
            Ok(())
        })
        .await
    }

    pub async fn clear_suggestions(&self, id: Uuid) -> Result<Session, SessionError> {
        self.set_suggestions(id, Vec::new()).await
    }

    /// Adds a bookmark. Bookmarking the same career twice is a no-op.
    pub async fn bookmark(&self, id: Uuid, career_id: &str) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            if !s.bookmarked_careers.iter().any(|c| c == career_id) {
                s.bookmarked_careers.push(career_id.to_string());
            }
            Ok(())
        })
        .await
    }

    pub async fn remove_bookmark(
        &self,
        id: Uuid,
        career_id: &str,
    ) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            s.bookmarked_careers.retain(|c| c != career_id);
            Ok(())
        })
        .await
    }

    /// Clears the form: profile, step, and suggestions. Bookmarks survive a reset.
    pub async fn reset_form(&self, id: Uuid) -> Result<Session, SessionError> {
        self.mutate(id, |s| {
            s.profile = UserProfile::default();
            s.current_step = 1;
            s.career_suggestions.clear();
            Ok(())
        })
        .await
    }

    async fn mutate<F>(&self, id: Uuid, f: F) -> Result<Session, SessionError>
    where
        F: FnOnce(&mut Session) -> Result<(), SessionError>,
    {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = live_entry(&mut sessions, id, now, self.idle_ttl)?;
        f(&mut entry.session)?;
        entry.session.updated_at = Utc::now();
        entry.last_active = now;
        Ok(entry.session.clone())
    }
}

/// Looks up a session, dropping it instead if it has outlived the idle TTL.
fn live_entry(
    sessions: &mut HashMap<Uuid, Entry>,
    id: Uuid,
    now: Instant,
    idle_ttl: Duration,
) -> Result<&mut Entry, SessionError> {
    let expired = match sessions.get(&id) {
        Some(entry) => now.duration_since(entry.last_active) >= idle_ttl,
        None => return Err(SessionError::NotFound(id)),
    };
    if expired {
        sessions.remove(&id);
        return Err(SessionError::NotFound(id));
    }
    sessions.get_mut(&id).ok_or(SessionError::NotFound(id))
}

fn remove_idle(sessions: &mut HashMap<Uuid, Entry>, now: Instant, idle_ttl: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, entry| now.duration_since(entry.last_active) < idle_ttl);
    before - sessions.len()
}
