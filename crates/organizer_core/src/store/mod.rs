//! In-memory entity stores.
//!
//! # Responsibility
//! - Hold one feature's ordered record list for the process lifetime.
//! - Assign ids on insert, replace by id on edit, remove by id on delete.
//! - Load initial records from an injected [`SeedSource`].
//!
//! # Invariants
//! - Every record id is non-zero and unique within the store.
//! - Insertion order is preserved; edits never move a record.
//! - `delete` removes at most one record and is a no-op for unknown ids.

pub mod filter;
pub mod seed;

pub use filter::{FilteredView, ListState, NO_CONTACTS_MESSAGE};
pub use seed::{EmptySeed, FixtureSeed, JsonSeed, SeedError, SeedSource};

use crate::model::record::{Record, RecordId};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure. None of these are user input errors.
#[derive(Debug)]
pub enum StoreError {
    NotFound(RecordId),
    /// Seed or inserted data repeats an existing id.
    DuplicateId(RecordId),
    /// Seed data carries id `0`.
    InvalidId(RecordId),
    /// `IdPolicy::CountPlusOne` produced an id that is already taken.
    IdCollision(RecordId),
    /// No further ids can be issued.
    IdExhausted,
    Seed(SeedError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
            Self::InvalidId(id) => write!(f, "invalid record id: {id}"),
            Self::IdCollision(id) => {
                write!(f, "count-based id {id} collides with an existing record")
            }
            Self::IdExhausted => write!(f, "record id space exhausted"),
            Self::Seed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SeedError> for StoreError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

/// How new record ids are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `len + 1`. Can repeat a live id after deletes; a repeat is reported as
    /// [`StoreError::IdCollision`] instead of being stored.
    CountPlusOne,
    /// One past the highest id this store has ever held. Never reuses ids.
    #[default]
    Monotonic,
}

/// Ordered, id-addressed list of records for one feature.
#[derive(Debug, Clone)]
pub struct EntityStore<R: Record> {
    records: Vec<R>,
    id_policy: IdPolicy,
    high_water: RecordId,
}

impl<R: Record> EntityStore<R> {
    /// Creates an empty store.
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            records: Vec::new(),
            id_policy,
            high_water: 0,
        }
    }

    /// Creates a store from pre-existing records, keeping their order.
    ///
    /// # Errors
    /// - `InvalidId` when a record has id `0`.
    /// - `DuplicateId` when two records share an id.
    pub fn from_records(records: Vec<R>, id_policy: IdPolicy) -> StoreResult<Self> {
        let mut seen = BTreeSet::new();
        for record in &records {
            let id = record.id();
            if id == 0 {
                return Err(StoreError::InvalidId(id));
            }
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId(id));
            }
        }
        let high_water = seen.last().copied().unwrap_or(0);
        Ok(Self {
            records,
            id_policy,
            high_water,
        })
    }

    /// Creates a store from an injected seed source.
    pub fn from_seed<S>(source: &S, id_policy: IdPolicy) -> StoreResult<Self>
    where
        S: SeedSource<R> + ?Sized,
    {
        let records = match source.load() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=seed_load module=store status=error entity={} source={} error={}",
                    R::kind(),
                    source.name(),
                    err
                );
                return Err(err.into());
            }
        };
        let store = Self::from_records(records, id_policy)?;
        info!(
            "event=seed_load module=store status=ok entity={} source={} count={}",
            R::kind(),
            source.name(),
            store.len()
        );
        Ok(store)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(R::id)
    }

    /// Id the next insert would receive under the store's policy.
    pub fn next_id(&self) -> StoreResult<RecordId> {
        let base = match self.id_policy {
            IdPolicy::CountPlusOne => {
                RecordId::try_from(self.records.len()).map_err(|_| StoreError::IdExhausted)?
            }
            IdPolicy::Monotonic => self.high_water,
        };
        base.checked_add(1).ok_or(StoreError::IdExhausted)
    }

    /// Appends a record built from a validated draft. Returns its new id.
    pub fn insert(&mut self, draft: R::Draft) -> StoreResult<RecordId> {
        let id = self.next_id()?;
        if self.contains(id) {
            warn!(
                "event=record_insert module=store status=error entity={} error_code=id_collision id={}",
                R::kind(),
                id
            );
            return Err(StoreError::IdCollision(id));
        }
        self.records.push(R::from_draft(id, draft));
        self.high_water = self.high_water.max(id);
        debug!(
            "event=record_insert module=store status=ok entity={} id={} count={}",
            R::kind(),
            id,
            self.records.len()
        );
        Ok(id)
    }

    /// Replaces the fields of record `id` in place, keeping its id and
    /// position.
    pub fn replace(&mut self, id: RecordId, draft: R::Draft) -> StoreResult<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = R::from_draft(id, draft);
        debug!(
            "event=record_update module=store status=ok entity={} id={}",
            R::kind(),
            id
        );
        Ok(())
    }

    /// Removes record `id`. Returns whether a record was removed.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id() == id) else {
            debug!(
                "event=record_delete module=store status=noop entity={} id={}",
                R::kind(),
                id
            );
            return false;
        };
        self.records.remove(index);
        info!(
            "event=record_delete module=store status=ok entity={} id={} count={}",
            R::kind(),
            id,
            self.records.len()
        );
        true
    }

    /// Removes every record matching `predicate`. Returns how many went.
    pub fn delete_where(&mut self, mut predicate: impl FnMut(&R) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !predicate(record));
        before - self.records.len()
    }
}
