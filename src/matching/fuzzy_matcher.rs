//! Fuzzy matching for the `find` command.
//!
//! This module provides contact lookup with:
//! - Exact matching on phone numbers (digits only)
//! - Fuzzy name matching using substring and Levenshtein scoring
//! - Confidence scoring (0-100 scale)

use crate::models::ContactRecord;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a ContactRecord,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query` by phone or by name.
    ///
    /// # Arguments
    /// * `query` - Free text: a name fragment or a phone number
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first), then by name
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        records: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a ContactRecord>,
    {
        let phone_query = Self::normalize_phone(query);
        let name_query = Self::normalize_name(query);
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in records {
            if !phone_query.is_empty() && Self::match_phone(&phone_query, record) {
                results.push(MatchResult {
                    record,
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            let confidence =
                Self::calculate_fuzzy_score(&name_query, &Self::normalize_name(record.name().as_str()));
            if confidence > 0 && confidence >= min_confidence {
                results.push(MatchResult {
                    record,
                    confidence,
                    match_type: MatchType::FuzzyName,
                });
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Any phone of the record equal to the normalized query.
    fn match_phone(normalized_query: &str, record: &ContactRecord) -> bool {
        record
            .phones()
            .iter()
            .any(|phone| phone.as_str() == normalized_query)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Substring of the name: 10-95 depending on how much of it is covered
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rolling rows instead of the full matrix
        let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut curr = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2_chars.len()]
    }

    /// Normalize a phone query for comparison.
    ///
    /// Keeps only ASCII digits; anything that isn't ten digits can't match.
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == crate::domain::PHONE_DIGITS {
            digits
        } else {
            String::new()
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
