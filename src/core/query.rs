//! Multi-term query combination
//!
//! Several search terms typed in one command collapse into a single
//! result set: each term is resolved on its own, then the per-term id
//! sets are intersected (AND, the default) or unioned (OR). The output
//! keeps first-seen order across terms and is filtered incrementally —
//! a record that drops out of the valid-id set at term k is gone for
//! good, it is not reinstated by a later term.

use std::collections::HashSet;

use crate::core::record::RestfulRecord;
use crate::error::Result;

/// How per-term result sets are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combine {
    /// Records must match every term.
    #[default]
    All,
    /// Records may match any term.
    Any,
}

impl Combine {
    pub fn from_or_flag(or: bool) -> Self {
        if or {
            Combine::Any
        } else {
            Combine::All
        }
    }
}

/// Resolve each term through `fetch` and combine the results.
///
/// Callers pass `search_one_or_more` as `fetch`, so a term matching
/// nothing fails the whole query. A single term degenerates to exactly
/// the `fetch` output.
pub fn combine_terms<R, F>(terms: &[String], mode: Combine, mut fetch: F) -> Result<Vec<R>>
where
    R: RestfulRecord,
    F: FnMut(&str) -> Result<Vec<R>>,
{
    let mut valid_ids: HashSet<i64> = HashSet::new();
    let mut accumulated: Vec<R> = Vec::new();
    let mut first = true;

    for term in terms {
        let results = fetch(term)?;
        let ids: HashSet<i64> = results.iter().filter_map(RestfulRecord::id).collect();

        if first {
            valid_ids = ids;
            first = false;
        } else {
            match mode {
                Combine::Any => valid_ids.extend(ids),
                Combine::All => valid_ids.retain(|id| ids.contains(id)),
            }
        }

        // Append, de-dup by first occurrence, then cut the accumulated
        // list down to the ids still valid after this term.
        accumulated.extend(results);
        let mut seen = HashSet::new();
        accumulated.retain(|record| match record.id() {
            Some(id) => seen.insert(id) && valid_ids.contains(&id),
            None => false,
        });
    }

    Ok(accumulated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fact::Fact;
    use crate::error::Error;

    fn fact(id: i64) -> Fact {
        Fact {
            id: Some(id),
            category_id: Some(1),
            content: format!("fact {}", id),
            category: None,
        }
    }

    fn facts(ids: &[i64]) -> Vec<Fact> {
        ids.iter().map(|id| fact(*id)).collect()
    }

    fn ids(records: &[Fact]) -> Vec<i64> {
        records.iter().filter_map(|f| f.id).collect()
    }

    fn fetch_table(term: &str) -> Result<Vec<Fact>> {
        match term {
            "a" => Ok(facts(&[1, 2, 3])),
            "b" => Ok(facts(&[2, 3, 4])),
            "c" => Ok(facts(&[2])),
            _ => Err(Error::ImpreciseQuery(format!(
                "no objects matched '{}'",
                term
            ))),
        }
    }

    #[test]
    fn and_keeps_the_intersection_in_first_seen_order() {
        let terms = vec!["a".to_string(), "b".to_string()];
        let results = combine_terms(&terms, Combine::All, fetch_table).unwrap();
        assert_eq!(ids(&results), vec![2, 3]);
    }

    #[test]
    fn or_keeps_the_union_in_first_seen_order() {
        let terms = vec!["a".to_string(), "b".to_string()];
        let results = combine_terms(&terms, Combine::Any, fetch_table).unwrap();
        assert_eq!(ids(&results), vec![1, 2, 3, 4]);
    }

    #[test]
    fn single_term_matches_fetch_output_exactly() {
        let terms = vec!["a".to_string()];
        let results = combine_terms(&terms, Combine::All, fetch_table).unwrap();
        assert_eq!(results, fetch_table("a").unwrap());

        // OR-mode with one term behaves identically.
        let results = combine_terms(&terms, Combine::Any, fetch_table).unwrap();
        assert_eq!(results, fetch_table("a").unwrap());
    }

    #[test]
    fn a_term_matching_nothing_fails_the_whole_query() {
        let terms = vec!["a".to_string(), "missing".to_string()];
        let err = combine_terms(&terms, Combine::All, fetch_table).unwrap_err();
        assert!(matches!(err, Error::ImpreciseQuery(_)));
    }

    #[test]
    fn records_filtered_out_are_not_reinstated() {
        // "a" seeds {1,2,3}; "c" narrows to {2}; the final "a" appends
        // 1 and 3 again but the valid set no longer admits them.
        let terms = vec!["a".to_string(), "c".to_string(), "a".to_string()];
        let results = combine_terms(&terms, Combine::All, fetch_table).unwrap();
        assert_eq!(ids(&results), vec![2]);
    }

    #[test]
    fn duplicates_keep_their_first_position() {
        let terms = vec!["b".to_string(), "a".to_string()];
        let results = combine_terms(&terms, Combine::Any, fetch_table).unwrap();
        assert_eq!(ids(&results), vec![2, 3, 4, 1]);
    }
}
