//! Ordered, in-memory sequence of user records.
//!
//! Insertion order is display order. Every operation is a plain `Vec`
//! mutation and cannot fail.

use crate::models::{Draft, UserRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserList {
    records: Vec<UserRecord>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence, e.g. with a freshly fetched list.
    pub fn replace_all(&mut self, records: Vec<UserRecord>) {
        self.records = records;
    }

    /// Id for the next locally created record.
    ///
    /// `max(len, highest id) + 1`: equal to `len + 1` while ids are the
    /// contiguous `1..=len`, and never an id that is still present. When the
    /// highest id is `u64::MAX` the lowest free id is used instead.
    pub fn next_id(&self) -> u64 {
        let highest = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        (self.records.len() as u64)
            .max(highest)
            .checked_add(1)
            .unwrap_or_else(|| self.lowest_free_id())
    }

    /// Smallest id >= 1 that no record holds.
    fn lowest_free_id(&self) -> u64 {
        let mut taken: Vec<u64> = self.records.iter().map(|r| r.id).collect();
        taken.sort_unstable();
        taken.dedup();

        let mut candidate = 1;
        for id in taken {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate += 1;
            }
        }
        candidate
    }

    /// Append a record built from `draft` and return its id.
    pub fn create(&mut self, draft: &Draft) -> u64 {
        let id = self.next_id();
        self.records.push(UserRecord::from_draft(id, draft));
        id
    }

    /// Replace the fields of every record with `id` in place.
    /// Returns whether anything matched.
    pub fn update(&mut self, id: u64, draft: &Draft) -> bool {
        let mut matched = false;
        for record in self.records.iter_mut().filter(|r| r.id == id) {
            record.apply(draft);
            matched = true;
        }
        matched
    }

    /// Remove every record with `id`. Returns how many were removed.
    pub fn delete(&mut self, id: u64) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.records.iter()
    }
}

impl From<Vec<UserRecord>> for UserList {
    fn from(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}
