//! Explicit, bounded memoization of computed profiles.
//!
//! The engine is fast enough that caching is optional; when enabled it
//! is a local map keyed by the full subject, never shared process-wide
//! state.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::pgd::{Profile, Subject};

/// Bounded profile memo.
///
/// At capacity the whole map is discarded rather than evicting
/// entry-by-entry; recomputation is cheap and the coarse clear keeps
/// the structure simple. A poisoned lock is recovered by discarding the
/// cached contents, which is always safe for a pure-function memo.
pub struct ProfileCache {
    entries: Mutex<HashMap<Subject, Profile>>,
    capacity: usize,
}

impl ProfileCache {
    /// Creates a cache holding at most `capacity` profiles.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the cached profile for a subject, if present.
    pub fn get(&self, subject: &Subject) -> Option<Profile> {
        self.lock_entries().get(subject).cloned()
    }

    /// Stores a computed profile, clearing the map first when full.
    pub fn insert(&self, subject: Subject, profile: Profile) {
        let mut entries = self.lock_entries();
        if entries.len() >= self.capacity && !entries.contains_key(&subject) {
            entries.clear();
        }
        entries.insert(subject, profile);
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    /// Drops every cached profile.
    pub fn clear(&self) {
        self.lock_entries().clear();
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<Subject, Profile>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                guard.clear();
                guard
            }
        }
    }
}
