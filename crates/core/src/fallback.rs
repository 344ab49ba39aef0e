//! Fallback substitution policy for public read paths.
//!
//! Some views substitute a static sample set when the live query fails,
//! so the page still renders content instead of an error card. The
//! policies intentionally differ per view and are preserved as found:
//! the homepage substitutes only on query failure (an empty success is a
//! legitimate "no content" state), while the news ticker also substitutes
//! when a successful query returns no rows.
//!
//! This is a per-request resilience mechanism, not a cache: nothing is
//! persisted, expired, or refreshed.

/// When to substitute the fallback set for the live result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute only when the query reports an error.
    OnError,
    /// Substitute when the query errors or succeeds with zero rows.
    OnErrorOrEmpty,
}

/// Outcome of [`FallbackPolicy::apply`]: the effective rows plus whether
/// they came from the fallback set, so callers can log or flag it.
#[derive(Debug)]
pub struct Resolved<T> {
    pub rows: Vec<T>,
    pub used_fallback: bool,
}

impl FallbackPolicy {
    /// Apply this policy to a live query result.
    ///
    /// The fallback set is built lazily; it is only constructed when the
    /// policy actually triggers.
    pub fn apply<T, E>(
        self,
        live: Result<Vec<T>, E>,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> Resolved<T> {
        match live {
            Ok(rows) if rows.is_empty() && self == FallbackPolicy::OnErrorOrEmpty => Resolved {
                rows: fallback(),
                used_fallback: true,
            },
            Ok(rows) => Resolved {
                rows,
                used_fallback: false,
            },
            Err(_) => Resolved {
                rows: fallback(),
                used_fallback: true,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_rows() -> Vec<i32> {
        vec![7, 8, 9]
    }

    #[test]
    fn live_rows_pass_through() {
        let resolved = FallbackPolicy::OnError.apply::<_, ()>(Ok(vec![1, 2]), fallback_rows);
        assert_eq!(resolved.rows, vec![1, 2]);
        assert!(!resolved.used_fallback);
    }

    #[test]
    fn error_triggers_fallback_under_both_policies() {
        for policy in [FallbackPolicy::OnError, FallbackPolicy::OnErrorOrEmpty] {
            let resolved = policy.apply(Err("boom"), fallback_rows);
            assert_eq!(resolved.rows, vec![7, 8, 9]);
            assert!(resolved.used_fallback);
        }
    }

    #[test]
    fn empty_success_renders_empty_under_on_error() {
        let resolved = FallbackPolicy::OnError.apply::<i32, ()>(Ok(vec![]), fallback_rows);
        assert!(resolved.rows.is_empty());
        assert!(!resolved.used_fallback);
    }

    #[test]
    fn empty_success_substitutes_under_on_error_or_empty() {
        let resolved = FallbackPolicy::OnErrorOrEmpty.apply::<i32, ()>(Ok(vec![]), fallback_rows);
        assert_eq!(resolved.rows, vec![7, 8, 9]);
        assert!(resolved.used_fallback);
    }
}
