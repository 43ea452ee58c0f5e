use crate::types::Record;

/// Case-insensitive substring match across the searchable fields
/// (firstName, lastName, email).
pub fn record_matches(rec: &Record, needle_lower: &str) -> bool {
    rec.first_name.to_lowercase().contains(needle_lower)
        || rec.last_name.to_lowercase().contains(needle_lower)
        || rec.email.to_lowercase().contains(needle_lower)
}

/// Apply the search string to the stored list.
///
/// An empty query returns the whole list. A query that matches nothing also
/// returns the whole list: the filter is silently dropped rather than showing
/// an empty table.
pub fn apply_search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    let matched: Vec<&Record> = records
        .iter()
        .filter(|r| record_matches(r, &needle))
        .collect();
    if matched.is_empty() {
        records.iter().collect()
    } else {
        matched
    }
}
