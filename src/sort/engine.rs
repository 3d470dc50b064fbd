//! Row comparison and the sorted projection.

use std::cmp::Ordering;

use super::state::{SortDirection, SortState};
use super::value::{SortKeyed, SortValue};

/// Compare two resolved values in ascending order.
///
/// Dispatch is evaluated in a fixed priority:
///
/// 1. missing values — a missing value compares greater than any present
///    one, so missing rows collect at the tail;
/// 2. both text — case-insensitive comparison;
/// 3. both numeric — numeric comparison;
/// 4. both interpretable as instants (date-valued, or one side date-valued
///    and the other a parseable date string) — chronological comparison;
/// 5. otherwise — both coerced to text and compared case-insensitively.
///
/// Two textual values always land in branch 2, even when both would parse
/// as dates, so date-looking strings compare as text.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Greater,
        (_, SortValue::Missing) => Ordering::Less,
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (a, b) => match (a.as_instant(), b.as_instant()) {
            (Some(da), Some(db)) => da.cmp(&db),
            _ => compare_text(&a.coerce_text(), &b.coerce_text()),
        },
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Produce a sorted copy of `rows` per the given state.
///
/// An inactive state (no direction, or an empty key) returns the rows
/// unchanged in order. Otherwise rows are compared on the value each
/// resolves for the state's key. The sort is stable, so rows with equal
/// keys keep their relative source order, and repeated sorts on tied
/// values never reshuffle visibly.
///
/// Missing values stay at the tail for descending sorts too: direction
/// only negates comparisons between two present values.
pub fn sort_rows<R>(rows: &[R], state: &SortState) -> Vec<R>
where
    R: SortKeyed + Clone,
{
    let mut sorted = rows.to_vec();
    let Some(direction) = state.direction else {
        return sorted;
    };
    if state.key.is_empty() {
        return sorted;
    }

    sorted.sort_by(|a, b| {
        let va = a.sort_value(&state.key);
        let vb = b.sort_value(&state.key);
        if va.is_missing() || vb.is_missing() {
            return compare_values(&va, &vb);
        }
        match direction {
            SortDirection::Ascending => compare_values(&va, &vb),
            SortDirection::Descending => compare_values(&va, &vb).reverse(),
        }
    });
    sorted
}
