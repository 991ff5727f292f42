//! Work-entry ledger and earnings engine.
//!
//! This crate provides the core of a single-user work tracker: a per-user
//! ledger of logged work days (regular, weekend, holiday), an earnings
//! calculator driven by tiered day rates derived from an hourly rate, and
//! the aggregation queries (dashboard totals, monthly/annual reports,
//! stable multi-field sorting) that a presentation layer renders.
//!
//! The session mechanism that resolves the current user and the concrete
//! storage technology are external collaborators: identity arrives as a
//! [`models::User`] and persistence goes through the
//! [`store::KeyValueBackend`] trait.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
