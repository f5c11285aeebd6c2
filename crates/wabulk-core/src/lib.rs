//! # wabulk-core
//!
//! Core types, traits, configuration, and error handling for wabulk.

pub mod config;
pub mod contact;
pub mod error;
pub mod job;
pub mod selectors;
pub mod session;

pub use config::shellexpand;
