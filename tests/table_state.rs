//! View-state transition tests: sorting, searching, pagination, selection,
//! and committing a form submission into the table.

use tabcat::app::{App, PAGE_SIZE};
use tabcat::theme::ColorScheme;
use tabcat::types::{AppEvent, Record, SortField};

fn make_records(n: u64) -> Vec<Record> {
    (1..=n)
        .map(|i| Record {
            id: i,
            first_name: format!("First{i:04}"),
            last_name: format!("Last{i:04}"),
            email: format!("user{i:04}@example.com"),
            phone: format!("+7 (900) 000-{i:04}"),
            address: None,
            description: None,
        })
        .collect()
}

fn ready_app(n: u64) -> App {
    let mut app = App::new(Vec::new(), ColorScheme::default());
    app.on_event(AppEvent::RecordsLoaded(make_records(n)));
    app
}

fn type_search(app: &mut App, text: &str) {
    app.start_search();
    for c in text.chars() {
        app.search_add_char(c);
    }
    app.end_search();
}

#[test]
fn sort_toggle_produces_exact_reverse_order() {
    let mut app = ready_app(10);
    let before: Vec<u64> = app.records().iter().map(|r| r.id).collect();

    // Default ordering is (id, asc); activating the id header flips to desc
    app.on_sort(SortField::Id);
    let after: Vec<u64> = app.records().iter().map(|r| r.id).collect();

    let mut reversed = before.clone();
    reversed.reverse();
    assert_eq!(after, reversed);
}

#[test]
fn switching_sort_column_also_flips_direction() {
    let mut app = ready_app(5);
    app.on_sort(SortField::Id); // asc -> desc
    app.on_sort(SortField::FirstName); // desc -> asc, new column

    assert_eq!(app.sort_field(), SortField::FirstName);
    let names: Vec<&str> = app
        .records()
        .iter()
        .map(|r| r.first_name.as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn search_with_no_matches_shows_the_full_list() {
    let mut app = ready_app(3);
    type_search(&mut app, "zzz");
    assert_eq!(app.filtered_records().len(), 3);
}

#[test]
fn search_resets_page_sort_does_not() {
    let mut app = ready_app(120);

    app.next_page();
    assert_eq!(app.current_page(), 1);

    app.on_sort(SortField::Email);
    assert_eq!(app.current_page(), 1, "sorting must leave the page alone");

    type_search(&mut app, "z");
    assert_eq!(app.current_page(), 0, "searching must reset the page");
}

#[test]
fn pagination_controls_follow_the_stored_list_length() {
    let at_limit = ready_app(PAGE_SIZE as u64);
    assert!(!at_limit.pagination_visible());

    let over_limit = ready_app(PAGE_SIZE as u64 + 1);
    assert!(over_limit.pagination_visible());
}

#[test]
fn page_keys_are_ignored_while_everything_fits_one_page() {
    let mut app = ready_app(40);
    app.next_page();
    assert_eq!(app.current_page(), 0);
}

#[test]
fn hundred_twenty_records_paginate_into_three_pages() {
    let mut app = ready_app(120);
    assert_eq!(app.page_count(), 3);

    let first_page: Vec<u64> = app.visible_page().iter().map(|r| r.id).collect();
    assert_eq!(first_page.len(), PAGE_SIZE);
    assert_eq!(first_page.first().copied(), Some(1));
    assert_eq!(first_page.last().copied(), Some(50));

    app.next_page();
    app.next_page();
    assert_eq!(app.visible_page().len(), 20);

    // already on the last page
    app.next_page();
    assert_eq!(app.current_page(), 2);
}

#[test]
fn page_count_follows_the_filtered_list() {
    let mut app = ready_app(120);
    // exactly one match
    type_search(&mut app, "user0007");
    assert_eq!(app.filtered_records().len(), 1);
    assert_eq!(app.page_count(), 1);
    // but the controls still key off the stored list
    assert!(app.pagination_visible());
}

#[test]
fn selecting_a_row_keeps_it_for_the_detail_panel() {
    let mut app = ready_app(10);
    app.cursor_down();
    app.cursor_down();
    app.select_row();
    assert_eq!(app.selected().map(|r| r.id), Some(3));

    // selection is replaced, never cleared
    app.cursor_up();
    app.select_row();
    assert_eq!(app.selected().map(|r| r.id), Some(2));
}

#[test]
fn submitting_the_form_commits_a_sorted_row() {
    let mut app = ready_app(3);
    app.show_form();

    for c in "2".chars() {
        app.form_mut().input_char(c);
    }
    app.form_mut().next_field();
    for c in "Nina".chars() {
        app.form_mut().input_char(c);
    }
    app.form_mut().next_field();
    for c in "Petrova".chars() {
        app.form_mut().input_char(c);
    }
    app.form_mut().next_field();
    for c in "nina@example.com".chars() {
        app.form_mut().input_char(c);
    }
    app.form_mut().next_field();
    for c in "9031112233".chars() {
        app.form_mut().input_char(c);
    }

    app.submit_form();

    let ids: Vec<u64> = app.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 2, 3], "committed row lands in sort order");
    assert!(app.form().is_pristine(), "form clears after a commit");
}

#[test]
fn submitting_with_a_missing_id_changes_nothing() {
    let mut app = ready_app(3);
    app.show_form();
    // only a first name, everything else empty
    app.form_mut().next_field();
    for c in "Nina".chars() {
        app.form_mut().input_char(c);
    }

    app.submit_form();
    assert_eq!(app.records().len(), 3);
    assert!(app.form().has_blocking_errors());
}
