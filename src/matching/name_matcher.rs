//! Fuzzy matching for contact lookup.
//!
//! This module provides:
//! - "Did you mean" suggestions when an exact name lookup fails
//! - Free-text search across names and phone numbers
//! - Confidence scoring (0-100 scale)

use crate::book::AddressBook;
use crate::models::Record;

/// A search hit with its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals one of the record's phones
    ExactPhone,

    /// Query digits appear inside one of the record's phones
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// A suggested name for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestion {
    pub name: String,
    pub confidence: u8,
}

/// Stateless name and phone matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Names close to `query`, best first.
    ///
    /// Exact matches are left out: the caller only asks after an exact
    /// lookup has already failed.
    pub fn suggest<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<NameSuggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut suggestions: Vec<NameSuggestion> = names
            .into_iter()
            .filter(|name| *name != query)
            .filter_map(|name| {
                let confidence = Self::score(query, name);
                (confidence > 0 && confidence >= min_confidence).then(|| NameSuggestion {
                    name: name.to_string(),
                    confidence,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        suggestions.truncate(max_results);
        suggestions
    }

    /// Search records by fuzzy name or by phone digits.
    ///
    /// Phone matches win over name matches for the same record. Results are
    /// sorted by confidence, then by name.
    pub fn search<'a>(
        &self,
        book: &'a AddressBook,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in book {
            if let Some((confidence, match_type)) = Self::match_phone(query, record) {
                results.push(MatchResult {
                    record,
                    confidence,
                    match_type,
                });
                continue;
            }

            let confidence = Self::score(query, record.name().as_str());
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
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });
        results.truncate(max_results);
        results
    }

    fn match_phone(query: &str, record: &Record) -> Option<(u8, MatchType)> {
        let digits = Self::normalize_phone(query);
        // Short digit runs match too many phones to be useful
        if digits.len() < 3 || digits.len() != query.trim().len() {
            return None;
        }

        let phones = record.phones();
        if phones.iter().any(|p| p.as_str() == digits) {
            return Some((100, MatchType::ExactPhone));
        }
        if phones.iter().any(|p| p.as_str().contains(&digits)) {
            return Some((90, MatchType::PartialPhone));
        }
        None
    }

    /// Score how well `query` matches `target`, from 0 to 95.
    ///
    /// Comparison ignores case and repeated whitespace.
    pub fn score(query: &str, target: &str) -> u8 {
        let query = Self::normalize_name(query);
        let target = Self::normalize_name(target);
        Self::calculate_fuzzy_score(&query, &target)
    }

    /// Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (100 is reserved for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Substring match, scaled by how much of the target is covered
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
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();

        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2.len()).collect();
        let mut current = vec![0; s2.len() + 1];

        for (i, c1) in s1.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2.len()]
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

    /// Keep only the ASCII digits of a phone query.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}
