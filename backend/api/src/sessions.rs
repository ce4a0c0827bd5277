//! In-memory session store — creation, lookup, and removal.
//!
//! Sessions are process-local and never persisted; a restart starts empty.
//! Each session is owned exclusively by the store and mutated only while the
//! caller holds the store lock, so a mutation's validate → recompute →
//! replace cycle is atomic from every other caller's point of view.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use qf_engine::{Archetype, ProjectCatalog, SimulationSession};

use crate::errors::{ApiError, Result};

/// One hosted session plus its bookkeeping.
pub struct HostedSession {
    pub session: SimulationSession,
    pub created_at: DateTime<Utc>,
}

/// All live sessions, keyed by an auto-increment id.
pub struct SessionStore {
    next_id: u64,
    sessions: HashMap<u64, HostedSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            sessions: HashMap::new(),
        }
    }

    /// Open a session over `catalog` and return its id
    /// (the pre-increment counter value).
    pub fn create(
        &mut self,
        catalog: ProjectCatalog,
        pool: f64,
        archetype: Archetype,
    ) -> Result<u64> {
        let session = SimulationSession::new(catalog, pool, archetype)?;
        let id = self.next_id;
        self.next_id += 1;
        self.sessions.insert(
            id,
            HostedSession {
                session,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<&HostedSession> {
        self.sessions.get(&id).ok_or(ApiError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: u64) -> Result<&mut HostedSession> {
        self.sessions
            .get_mut(&id)
            .ok_or(ApiError::SessionNotFound(id))
    }

    pub fn remove(&mut self, id: u64) -> Result<()> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::SessionNotFound(id))
    }
}
