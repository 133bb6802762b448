//! Token counting and top-N ranking.
//!
//! [`FrequencyTable`] keeps distinct tokens in first-occurrence order, so a
//! stable sort by descending count breaks ties in favour of the token seen
//! first. [`SelectionRange`] holds the bounds a user may pick `n` from:
//! `[1, min(max_keywords, distinct)]` with the midpoint as default.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{FrequencyTable, TokenSequence};
//!
//! let tokens: TokenSequence = ["苹果", "苹果", "香蕉", "苹果", "橙子", "香蕉"].into_iter().collect();
//! let table = FrequencyTable::count(&tokens);
//! let top = table.top_n(2);
//! assert_eq!(top.pairs(), vec![("苹果", 3), ("香蕉", 2)]);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::tokenize::TokenSequence;
use crate::{Result, WordlensError};

/// Upper bound on the number of keywords a user can select.
pub const MAX_KEYWORDS: usize = 40;

/// Occurrence counts of distinct tokens, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Counts exact-string occurrences.
    pub fn count(tokens: &TokenSequence) -> Self {
        let mut table = Self::default();
        for token in tokens {
            table.add(token);
        }
        tracing::debug!(tokens = table.total, distinct = table.distinct_count(), "counted tokens");
        table
    }

    fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Number of distinct tokens.
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts, equal to the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].1)
    }

    /// Iterates `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// The bounds a caller may choose `n` from.
    pub fn selection_range(&self) -> Result<SelectionRange> {
        SelectionRange::for_distinct(self.distinct_count())
    }

    /// Top `n` tokens by descending count, `n` clamped to the selection range.
    ///
    /// Equal counts keep first-occurrence order. An empty table yields an
    /// empty selection.
    pub fn top_n(&self, n: usize) -> RankedSelection {
        match self.selection_range() {
            Ok(range) => self.top_n_within(n, &range),
            Err(_) => RankedSelection::default(),
        }
    }

    /// Top `n` tokens with `n` clamped to a caller-supplied range.
    pub fn top_n_within(&self, n: usize, range: &SelectionRange) -> RankedSelection {
        let n = range.clamp(n);

        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(token, count)| RankedEntry { token: token.clone(), count: *count })
            .collect()
    }
}

/// Inclusive bounds for the keyword count plus its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    min: usize,
    max: usize,
}

impl SelectionRange {
    /// Range for a table with `distinct` tokens and the standard [`MAX_KEYWORDS`] cap.
    pub fn for_distinct(distinct: usize) -> Result<Self> {
        Self::with_cap(distinct, MAX_KEYWORDS)
    }

    /// Range `[1, min(cap, distinct)]`.
    ///
    /// Returns [`WordlensError::NoContent`] when nothing can be selected.
    pub fn with_cap(distinct: usize, cap: usize) -> Result<Self> {
        let max = distinct.min(cap);
        if max == 0 {
            return Err(WordlensError::NoContent);
        }
        Ok(Self { min: 1, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Midpoint of the range, rounded down.
    pub fn default_value(&self) -> usize {
        (self.min + self.max) / 2
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && n <= self.max
    }

    pub fn clamp(&self, n: usize) -> usize {
        n.clamp(self.min, self.max)
    }
}

/// One ranked `(token, count)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: usize,
}

/// Top-N pairs sorted by descending count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSelection {
    entries: Vec<RankedEntry>,
}

impl RankedSelection {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// Sum of the counts in this selection.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Largest count, the first entry's.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.token.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }

    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries.iter().map(|e| (e.token.as_str(), e.count)).collect()
    }

    /// Share of `count` in this selection, in percent, rounded to one decimal.
    pub fn percentage(&self, count: usize) -> f64 {
        percentage(count, self.total())
    }

    /// Entries re-sorted by ascending count, ties in reverse ranked order.
    pub fn ascending(&self) -> Vec<&RankedEntry> {
        let mut entries: Vec<&RankedEntry> = self.entries.iter().rev().collect();
        entries.sort_by_key(|e| e.count);
        entries
    }
}

impl FromIterator<RankedEntry> for RankedSelection {
    fn from_iter<I: IntoIterator<Item = RankedEntry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RankedSelection {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// `100 * count / total`, rounded to one decimal place; zero when `total` is zero.
///
/// Exact halves round to even (`1/16` gives `6.2`), the same as a `{:.1}` label.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let share = 100.0 * count as f64 / total as f64;
    format!("{:.1}", share).parse().unwrap_or(share)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(words: &[&str]) -> TokenSequence {
        words.iter().copied().collect()
    }

    #[test]
    fn test_count_totals() {
        let seq = tokens(&["苹果", "苹果", "香蕉", "苹果", "橙子", "香蕉"]);
        let table = FrequencyTable::count(&seq);

        assert_eq!(table.total(), seq.len());
        assert_eq!(table.iter().map(|(_, c)| c).sum::<usize>(), seq.len());
        assert_eq!(table.distinct_count(), 3);
        assert_eq!(table.get("苹果"), Some(3));
        assert_eq!(table.get("葡萄"), None);
    }

    #[test]
    fn test_count_is_exact_string_match() {
        let table = FrequencyTable::count(&tokens(&["Rust", "rust", "Rust"]));
        assert_eq!(table.get("Rust"), Some(2));
        assert_eq!(table.get("rust"), Some(1));
    }

    #[test]
    fn test_top_n_scenario() {
        let table = FrequencyTable::count(&tokens(&["苹果", "苹果", "香蕉", "苹果", "橙子", "香蕉"]));
        assert_eq!(table.top_n(2).pairs(), vec![("苹果", 3), ("香蕉", 2)]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn test_top_n_ties_keep_first_occurrence(#[case] n: usize) {
        let table = FrequencyTable::count(&tokens(&["gamma", "alpha", "beta", "alpha", "gamma", "beta", "delta"]));
        let expected = [("gamma", 2), ("alpha", 2), ("beta", 2), ("delta", 1)];
        assert_eq!(table.top_n(n).pairs(), expected[..n].to_vec());
    }

    #[test]
    fn test_ties_follow_first_occurrence_not_final_count() {
        // "bb" reaches 2 first, "aa" appears first
        let table = FrequencyTable::count(&tokens(&["aa", "bb", "bb", "aa"]));
        assert_eq!(table.top_n(2).pairs(), vec![("aa", 2), ("bb", 2)]);
    }

    #[test]
    fn test_top_n_not_alphabetical() {
        let table = FrequencyTable::count(&tokens(&["zz", "aa", "mm"]));
        assert_eq!(table.top_n(3).tokens(), vec!["zz", "aa", "mm"]);
    }

    #[test]
    fn test_top_n_clamps_to_distinct() {
        let table = FrequencyTable::count(&tokens(&["aa", "bb", "cc", "aa"]));
        let range = table.selection_range().unwrap();
        assert_eq!(range.max(), 3);

        let top = table.top_n(5);
        assert_eq!(top.len(), 3);
        assert!(top.counts().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_top_n_zero_clamps_up() {
        let table = FrequencyTable::count(&tokens(&["aa", "bb"]));
        assert_eq!(table.top_n(0).len(), 1);
    }

    #[test]
    fn test_top_n_respects_keyword_cap() {
        let words: Vec<String> = (0..100).map(|i| format!("w{}", i)).collect();
        let table = FrequencyTable::count(&words.iter().map(String::as_str).collect());
        assert_eq!(table.top_n(100).len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_top_n_within_custom_cap() {
        let table = FrequencyTable::count(&tokens(&["aa", "bb", "cc", "dd"]));
        let range = SelectionRange::with_cap(table.distinct_count(), 2).unwrap();
        assert_eq!(table.top_n_within(4, &range).tokens(), vec!["aa", "bb"]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::count(&TokenSequence::default());
        assert!(table.is_empty());
        assert!(matches!(table.selection_range(), Err(WordlensError::NoContent)));
        assert!(table.top_n(5).is_empty());
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(3, 3, 2)]
    #[case(10, 10, 5)]
    #[case(40, 40, 20)]
    #[case(250, 40, 20)]
    fn test_selection_range(#[case] distinct: usize, #[case] max: usize, #[case] default: usize) {
        let range = SelectionRange::for_distinct(distinct).unwrap();
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), max);
        assert_eq!(range.default_value(), default);
        assert!(range.contains(default));
    }

    #[test]
    fn test_selection_range_clamp() {
        let range = SelectionRange::for_distinct(3).unwrap();
        assert_eq!(range.clamp(5), 3);
        assert_eq!(range.clamp(0), 1);
        assert_eq!(range.clamp(2), 2);
        assert!(!range.contains(5));
    }

    #[rstest]
    #[case(1, 3, 33.3)]
    #[case(2, 3, 66.7)]
    #[case(3, 8, 37.5)]
    #[case(5, 5, 100.0)]
    #[case(1, 16, 6.2)]
    #[case(5, 16, 31.2)]
    #[case(3, 16, 18.8)]
    #[case(0, 0, 0.0)]
    fn test_percentage(#[case] count: usize, #[case] total: usize, #[case] expected: f64) {
        assert!((percentage(count, total) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_selection_percentages_use_selection_total() {
        let table = FrequencyTable::count(&tokens(&["aa", "aa", "aa", "bb", "cc"]));
        let top = table.top_n(2);
        assert_eq!(top.total(), 4);
        assert!((top.percentage(3) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascending_order() {
        let table = FrequencyTable::count(&tokens(&["aa", "aa", "aa", "bb", "cc", "cc"]));
        let top = table.top_n(3);
        let ascending: Vec<&str> = top.ascending().iter().map(|e| e.token.as_str()).collect();
        assert_eq!(ascending, vec!["bb", "cc", "aa"]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let seq = tokens(&["xx", "yy", "xx", "zz", "yy", "ww"]);
        let first = FrequencyTable::count(&seq).top_n(4);
        let second = FrequencyTable::count(&seq).top_n(4);
        assert_eq!(first, second);
    }
}
