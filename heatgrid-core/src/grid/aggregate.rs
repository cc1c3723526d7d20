use std::collections::{BTreeMap, btree_map::Entry};

use crate::types::Contribution;

/// Fold a contribution list into a map keyed by canonical day key.
///
/// - Records are keyed by [`DayRef::to_key`](crate::types::DayRef::to_key):
///   structured dates are formatted `yyyy-MM-dd`, string dates are used
///   verbatim. A malformed string occupies the map but never joins a
///   materialized day.
/// - When several records share a key, `value` is the sum over all of them
///   while every other field (`summary`, `items`, the `date` itself) comes
///   from the record seen last in input order. With three or more duplicates
///   the pairwise fold still lands on the final record's fields.
/// - Multiple records per day are expected and intentional (e.g. several
///   events on one day), not an error.
#[must_use]
pub fn aggregate_by_day(data: &[Contribution]) -> BTreeMap<String, Contribution> {
    let mut map: BTreeMap<String, Contribution> = BTreeMap::new();
    for item in data {
        match map.entry(item.date.to_key()) {
            Entry::Vacant(v) => {
                v.insert(item.clone());
            }
            Entry::Occupied(mut o) => {
                let sum = o.get().value + item.value;
                let mut merged = item.clone();
                merged.value = sum;
                o.insert(merged);
            }
        }
    }
    map
}
