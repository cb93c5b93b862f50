//! In-memory contact book keyed by contact name.

use super::birthdays::{upcoming_for, UpcomingBirthday};
use crate::domain::{ContactName, PhoneNumber};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of [`ContactBook::add_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created.
    Added,
    /// A record with this name already existed.
    Updated,
}

/// Collection of contact records with unique names.
///
/// Records are iterated in insertion order. Overwriting an existing name via
/// [`add_record`](Self::add_record) keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    records: Vec<ContactRecord>,
    index: HashMap<ContactName, usize>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.index.get(record.name()) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name().clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Create the contact if needed, then append `phone` when one is given.
    ///
    /// Reports [`AddOutcome::Updated`] whenever the name already existed,
    /// even if no phone was supplied.
    pub fn add_contact(&mut self, name: ContactName, phone: Option<PhoneNumber>) -> AddOutcome {
        let outcome = if self.contains(name.as_str()) {
            AddOutcome::Updated
        } else {
            self.add_record(ContactRecord::new(name.clone()));
            AddOutcome::Added
        };

        if let Some(phone) = phone {
            if let Some(record) = self.find_mut(name.as_str()) {
                record.push_phone(phone);
            }
        }

        debug!(contact = %name, ?outcome, "Contact stored");
        outcome
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove the record for `name`. Returns it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let pos = self.index.remove(name)?;
        let removed = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        debug!(contact = %name, "Contact deleted");
        Some(removed)
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Contacts to congratulate within `window_days` of `today`, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| upcoming_for(record, today, window_days))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
