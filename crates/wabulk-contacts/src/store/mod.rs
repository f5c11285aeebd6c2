//! Ordered in-memory contact table.
//!
//! Split into focused submodules:
//! - `io` — CSV read/write of `Name,Number` rows
//!
//! There is no deduplication: the table is append-only apart from explicit
//! `remove`/`clear`, and the same number may appear more than once.

pub mod io;


use tracing::debug;
use wabulk_core::contact::{Contact, ContactStatus};
use wabulk_core::error::WabulkError;
use wabulk_core::job::{SendOutcome, SendResult};

pub use io::ImportRow;

/// Counts returned by a bulk import. Rows without a number are skipped,
/// never fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Ordered collection of contacts.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contact with status `Pending`.
    pub fn add(&mut self, name: Option<String>, number: &str) -> Result<Contact, WabulkError> {
        if number.trim().is_empty() {
            return Err(WabulkError::Validation("number must not be empty".into()));
        }
        let contact = Contact::new(name, number);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// Append records from tabular rows. Each row missing a number is
    /// skipped and counted, not fatal.
    pub fn import<I>(&mut self, rows: I) -> ImportSummary
    where
        I: IntoIterator<Item = ImportRow>,
    {
        let mut summary = ImportSummary::default();
        for row in rows {
            match row.number.as_deref().map(str::trim) {
                Some(number) if !number.is_empty() => {
                    let name = row.name.filter(|n| !n.trim().is_empty());
                    self.contacts.push(Contact::new(name, number));
                    summary.imported += 1;
                }
                _ => {
                    summary.skipped += 1;
                }
            }
        }
        debug!(
            imported = summary.imported,
            skipped = summary.skipped,
            "contact import finished"
        );
        summary
    }

    /// Pure projection of `(Name, Number)` pairs, in table order.
    pub fn export(&self) -> Vec<(String, String)> {
        self.contacts
            .iter()
            .map(|c| (c.name.clone().unwrap_or_default(), c.number.clone()))
            .collect()
    }

    /// Remove the contact at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Contact, WabulkError> {
        if index >= self.contacts.len() {
            return Err(WabulkError::Contacts(format!(
                "no contact at index {index} (table has {} rows)",
                self.contacts.len()
            )));
        }
        Ok(self.contacts.remove(index))
    }

    /// Drop all contacts.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Clone the table as send targets, preserving order.
    pub fn targets(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Apply a send report back onto the table — the workflow's status side
    /// channel for UI reporting. Matches by number; a number that appears
    /// more than once gets the same status on every row.
    pub fn apply_report(&mut self, results: &[SendResult]) {
        for result in results {
            let status = match result.outcome {
                SendOutcome::Success => ContactStatus::Sent,
                SendOutcome::Failure => ContactStatus::Failed,
            };
            for contact in self
                .contacts
                .iter_mut()
                .filter(|c| c.number == result.number)
            {
                contact.status = status;
            }
        }
    }

    /// Load a store from a CSV file.
    pub fn load_csv(path: &str) -> Result<(Self, ImportSummary), WabulkError> {
        let rows = io::read_rows(path)?;
        let mut store = Self::new();
        let summary = store.import(rows);
        Ok((store, summary))
    }

    /// Write the table to a CSV file with exactly `Name,Number` columns.
    pub fn save_csv(&self, path: &str) -> Result<(), WabulkError> {
        io::write_contacts(path, &self.contacts)
    }
}
