//! In-memory unit of work used by service tests and local tooling.
//!
//! Writes go to a shared store guarded by a mutex; a scope snapshots the
//! store on `begin` and restores the snapshot when dropped without a
//! commit. Scopes are meant to run one at a time: there is no isolation
//! between overlapping scopes, which the tests never need.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::user::{NewUser, User, UserPatch};
use crate::domain::entities::verification::Verification;
use crate::domain::value_objects::EmailAddress;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{UserRepository, VerificationRepository};
use crate::uow::{TransactionScope, UnitOfWork};

#[derive(Debug, Clone)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    verifications: Vec<Verification>,
    next_user_id: i64,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            verifications: Vec::new(),
            next_user_id: 1,
        }
    }
}

type SharedState = Arc<Mutex<MemoryState>>;

fn lock(state: &SharedState) -> DomainResult<MutexGuard<'_, MemoryState>> {
    state.lock().map_err(|_| DomainError::Internal {
        message: "in-memory store mutex poisoned".to_string(),
    })
}

/// In-memory unit of work
#[derive(Clone, Default)]
pub struct InMemoryUnitOfWork {
    state: SharedState,
}

impl InMemoryUnitOfWork {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    type Scope = InMemoryScope;

    async fn begin(&self) -> DomainResult<InMemoryScope> {
        let snapshot = lock(&self.state)?.clone();
        Ok(InMemoryScope {
            users: InMemoryUserRepository {
                state: Arc::clone(&self.state),
            },
            verifications: InMemoryVerificationRepository {
                state: Arc::clone(&self.state),
            },
            state: Arc::clone(&self.state),
            snapshot: Some(snapshot),
            finished: false,
        })
    }
}

/// Transaction scope over the in-memory store
pub struct InMemoryScope {
    users: InMemoryUserRepository,
    verifications: InMemoryVerificationRepository,
    state: SharedState,
    snapshot: Option<MemoryState>,
    finished: bool,
}

#[async_trait]
impl TransactionScope for InMemoryScope {
    type Users = InMemoryUserRepository;
    type Verifications = InMemoryVerificationRepository;

    fn users(&self) -> &InMemoryUserRepository {
        &self.users
    }

    fn verifications(&self) -> &InMemoryVerificationRepository {
        &self.verifications
    }

    async fn commit(mut self) -> DomainResult<()> {
        self.snapshot = None;
        self.finished = true;
        Ok(())
    }

    async fn rollback(mut self) -> DomainResult<()> {
        if let Some(snapshot) = self.snapshot.take() {
            *lock(&self.state)? = snapshot;
        }
        self.finished = true;
        Ok(())
    }
}

impl Drop for InMemoryScope {
    fn drop(&mut self) {
        if !self.finished {
            if let (Some(snapshot), Ok(mut guard)) = (self.snapshot.take(), self.state.lock()) {
                *guard = snapshot;
            }
        }
    }
}

/// In-memory user repository bound to a scope
pub struct InMemoryUserRepository {
    state: SharedState,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(lock(&self.state)?.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(lock(&self.state)?
            .users
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn list_paginated(&self, offset: i64, limit: i64) -> DomainResult<Vec<User>> {
        Ok(lock(&self.state)?
            .users
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn add(&self, user: NewUser) -> DomainResult<User> {
        let mut state = lock(&self.state)?;

        // Same invariant the production schema enforces with a unique key
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyTaken);
        }

        let id = state.next_user_id;
        state.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id,
            email: user.email,
            password: user.password,
            first_name: user.first_name,
            last_name: user.last_name,
            is_verified: false,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> DomainResult<Option<User>> {
        let mut state = lock(&self.state)?;
        let touched = !patch.is_empty();

        let Some(user) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(first_name) = patch.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(is_verified) = patch.is_verified {
            user.is_verified = is_verified;
        }
        if touched {
            user.updated_at = Utc::now();
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        lock(&self.state)?.users.remove(&id);
        Ok(())
    }
}

/// In-memory verification repository bound to a scope
pub struct InMemoryVerificationRepository {
    state: SharedState,
}

impl InMemoryVerificationRepository {
    /// Number of verification records stored for a user. Test-facing:
    /// the repository contract only ever exposes the latest record.
    pub fn count_for_user(&self, user_id: i64) -> DomainResult<usize> {
        Ok(lock(&self.state)?
            .verifications
            .iter()
            .filter(|v| v.user_id == user_id)
            .count())
    }
}

#[async_trait]
impl VerificationRepository for InMemoryVerificationRepository {
    async fn add(&self, verification: Verification) -> DomainResult<Verification> {
        lock(&self.state)?.verifications.push(verification.clone());
        Ok(verification)
    }

    async fn get_latest_for_user(&self, user_id: i64) -> DomainResult<Option<Verification>> {
        // max_by_key keeps the last of equally-recent records, matching
        // the insertion-order tie break
        Ok(lock(&self.state)?
            .verifications
            .iter()
            .filter(|v| v.user_id == user_id)
            .max_by_key(|v| v.created_at)
            .cloned())
    }

    async fn mark_consumed(&self, verification: &Verification) -> DomainResult<()> {
        let mut state = lock(&self.state)?;
        if let Some(record) = state
            .verifications
            .iter_mut()
            .find(|v| v.user_id == verification.user_id && v.code == verification.code)
        {
            if record.consumed_at.is_none() {
                record.consumed_at = verification.consumed_at;
            }
        }
        Ok(())
    }
}
