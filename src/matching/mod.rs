//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides fuzzy name matching and exact phone matching over
//! the records in a contact book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
