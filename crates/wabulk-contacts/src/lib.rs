//! # wabulk-contacts
//!
//! The contact list: an ordered, in-memory table of (name, number, status)
//! records with CSV import/export as the exchange format.

pub mod store;

pub use store::{ContactStore, ImportSummary};
