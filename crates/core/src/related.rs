//! Related-article selection.
//!
//! The article page runs two sequential queries: a primary pass over the
//! source post's category and, only when that under-fills, a backfill
//! pass over the newest published posts. The passes already exclude the
//! source and prior picks in SQL; [`merge_related`] is the final merge
//! that enforces the output guarantees regardless of what the queries
//! returned.

use crate::types::DbId;

/// Number of related articles shown on the article page.
pub const RELATED_COUNT: usize = 3;

/// Merge the primary and backfill passes into the final related list.
///
/// Guarantees, for any inputs:
/// - the source post never appears;
/// - no id appears twice (primary-pass picks win over backfill);
/// - the result never exceeds `desired`.
///
/// A result shorter than `desired` simply means the site has too few
/// published posts; that is not an error.
pub fn merge_related<T>(
    source_id: DbId,
    desired: usize,
    primary: Vec<T>,
    backfill: Vec<T>,
    id_of: impl Fn(&T) -> DbId,
) -> Vec<T> {
    let mut seen = vec![source_id];
    let mut out = Vec::with_capacity(desired);

    for item in primary.into_iter().chain(backfill) {
        if out.len() == desired {
            break;
        }
        let id = id_of(&item);
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        out.push(item);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn id(n: u128) -> DbId {
        Uuid::from_u128(n)
    }

    #[test]
    fn primary_results_come_first() {
        let merged = merge_related(id(0), 3, vec![id(1), id(2)], vec![id(3), id(4)], |p| *p);
        assert_eq!(merged, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn never_includes_source_post() {
        let merged = merge_related(id(0), 3, vec![id(0), id(1)], vec![id(0), id(2)], |p| *p);
        assert!(!merged.contains(&id(0)));
        assert_eq!(merged, vec![id(1), id(2)]);
    }

    #[test]
    fn never_includes_duplicates() {
        let merged = merge_related(id(0), 3, vec![id(1), id(2)], vec![id(2), id(1), id(3)], |p| *p);
        assert_eq!(merged, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn never_exceeds_desired_count() {
        let primary: Vec<DbId> = (1..=5).map(id).collect();
        let backfill: Vec<DbId> = (6..=10).map(id).collect();
        let merged = merge_related(id(0), 3, primary, backfill, |p| *p);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn short_result_is_acceptable_when_site_has_few_posts() {
        let merged = merge_related(id(0), 3, vec![id(1)], vec![], |p| *p);
        assert_eq!(merged, vec![id(1)]);

        let merged = merge_related(id(0), 3, vec![], vec![], |p: &DbId| *p);
        assert!(merged.is_empty());
    }
}
