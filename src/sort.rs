use crate::types::{Record, SortDir, SortField};
use std::cmp::Ordering;

/// Re-order the full stored list by (field, direction).
///
/// `id` compares numerically, everything else lexicographically. The sort is
/// stable, so ties keep their previous relative order.
pub fn sort_records(records: &mut [Record], field: SortField, dir: SortDir) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::FirstName => a.first_name.cmp(&b.first_name),
        SortField::LastName => a.last_name.cmp(&b.last_name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Phone => a.phone.cmp(&b.phone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, first: &str) -> Record {
        Record {
            id,
            first_name: first.to_string(),
            last_name: "X".to_string(),
            email: format!("{first}@example.com"),
            phone: String::new(),
            address: None,
            description: None,
        }
    }

    #[test]
    fn id_sorts_numerically_not_lexically() {
        let mut records = vec![rec(10, "a"), rec(2, "b"), rec(1, "c")];
        sort_records(&mut records, SortField::Id, SortDir::Asc);
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let mut asc = vec![rec(3, "Cara"), rec(1, "Abe"), rec(2, "Bo")];
        let mut desc = asc.clone();
        sort_records(&mut asc, SortField::FirstName, SortDir::Asc);
        sort_records(&mut desc, SortField::FirstName, SortDir::Desc);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn string_fields_sort_lexicographically() {
        let mut records = vec![rec(1, "Zoe"), rec(2, "Ann"), rec(3, "Mel")];
        sort_records(&mut records, SortField::FirstName, SortDir::Asc);
        let names: Vec<&str> = records.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Mel", "Zoe"]);
    }
}
