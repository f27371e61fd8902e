use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RegistryError;
use crate::models::{Activity, ActivityList};

/// In-memory roster store.
///
/// The set of activities is fixed when the registry is built; only rosters
/// change afterwards. Each activity has its own lock so a signup for one
/// activity never waits on another, and the check-then-modify of a roster
/// is atomic.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    entries: Vec<(String, Mutex<Activity>)>,
    index: HashMap<String, usize>,
}

impl ActivityRegistry {
    pub fn new(seed: Vec<(String, Activity)>) -> Self {
        let mut entries: Vec<(String, Mutex<Activity>)> = Vec::with_capacity(seed.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(seed.len());
        for (name, activity) in seed {
            let existing = index.get(&name).copied();
            match existing {
                // Later definitions win, keeping the first position.
                Some(pos) => entries[pos].1 = Mutex::new(activity),
                None => {
                    index.insert(name.clone(), entries.len());
                    entries.push((name, Mutex::new(activity)));
                }
            }
        }
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.slot(name).map(|slot| lock(slot).clone())
    }

    /// Copies every activity in seed order. Each roster is read under its
    /// own lock, so the snapshot is consistent per activity, not globally.
    pub fn snapshot(&self) -> ActivityList {
        ActivityList(
            self.entries
                .iter()
                .map(|(name, slot)| (name.clone(), lock(slot).clone()))
                .collect(),
        )
    }

    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let slot = self.slot(name).ok_or_else(|| not_found(name))?;
        let mut activity = lock(slot);
        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let slot = self.slot(name).ok_or_else(|| not_found(name))?;
        let mut activity = lock(slot);
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };
        activity.participants.remove(pos);
        Ok(())
    }

    fn slot(&self, name: &str) -> Option<&Mutex<Activity>> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }
}

// A roster is a plain Vec; a panic mid-push cannot leave it half-written.
fn lock(slot: &Mutex<Activity>) -> MutexGuard<'_, Activity> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn not_found(name: &str) -> RegistryError {
    RegistryError::ActivityNotFound {
        activity: name.to_string(),
    }
}
