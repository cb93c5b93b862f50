//! Data models for the contact book.
//!
//! A [`ContactRecord`] groups the validated value objects from
//! [`crate::domain`] under one contact name.

pub mod record;

pub use record::ContactRecord;
