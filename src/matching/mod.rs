//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides fuzzy name matching for "did you mean" hints and a
//! free-text search over names and phone numbers.

pub mod name_matcher;

pub use name_matcher::{MatchResult, MatchType, NameMatcher, NameSuggestion};
