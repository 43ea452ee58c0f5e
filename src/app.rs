use std::time::{Duration, Instant};

use crate::config::Mode;
use crate::filter::apply_search;
use crate::form::RecordForm;
use crate::sort::sort_records;
use crate::theme::ColorScheme;
use crate::types::{AppEvent, Record, SortDir, SortField};

/// Fixed page size for the record table.
pub const PAGE_SIZE: usize = 50;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    ModeSelect,
    Normal,
    Search,
    Form,
}

/// Owns the whole view state. Every other layer either reads it (ui) or
/// feeds it events (key handling, fetch completion).
pub struct App {
    quit: bool,
    input_mode: InputMode,
    theme: ColorScheme,

    // Mode selection
    modes: Vec<Mode>,
    mode_selection: usize,
    selected_mode: Option<usize>,

    // Data
    loading: bool,
    records: Vec<Record>,

    // View state over the data
    search: String,
    sort_field: SortField,
    sort_dir: SortDir,
    cursor: usize,
    selected: Option<Record>,
    current_page: usize,

    // Add-row form
    form: RecordForm,
    form_visible: bool,

    toast: Option<(String, Instant)>,
    spinner_idx: usize,
}

impl App {
    pub fn new(modes: Vec<Mode>, theme: ColorScheme) -> Self {
        Self {
            quit: false,
            input_mode: InputMode::ModeSelect,
            theme,
            modes,
            mode_selection: 0,
            selected_mode: None,
            loading: false,
            records: Vec::new(),
            search: String::new(),
            sort_field: SortField::Id,
            sort_dir: SortDir::Asc,
            cursor: 0,
            selected: None,
            current_page: 0,
            form: RecordForm::new(),
            form_visible: false,
            toast: None,
            spinner_idx: 0,
        }
    }

    // ----- getters -----
    pub fn quit_flag(&self) -> bool {
        self.quit
    }
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }
    pub fn theme(&self) -> &ColorScheme {
        &self.theme
    }
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }
    pub fn mode_selection(&self) -> usize {
        self.mode_selection
    }
    pub fn is_mode_selected(&self) -> bool {
        self.selected_mode.is_some()
    }
    pub fn is_loading(&self) -> bool {
        self.loading
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn search(&self) -> &str {
        &self.search
    }
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }
    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }
    pub fn current_page(&self) -> usize {
        self.current_page
    }
    pub fn form(&self) -> &RecordForm {
        &self.form
    }
    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }
    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_idx = (self.spinner_idx + 1) % SPINNER_FRAMES.len();
    }
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_idx]
    }

    pub fn show_toast(&mut self, msg: String) {
        self.toast = Some((msg, Instant::now()));
    }

    /// Current toast message if still within its display window.
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().and_then(|(msg, at)| {
            if at.elapsed() < TOAST_DURATION {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    // ----- events -----
    pub fn on_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::RecordsLoaded(records) => self.records_loaded(records),
            AppEvent::Quit => self.quit = true,
        }
    }

    /// Fetch resolved: store the list ordered by the current sort state.
    fn records_loaded(&mut self, mut records: Vec<Record>) {
        sort_records(&mut records, self.sort_field, self.sort_dir);
        self.records = records;
        self.loading = false;
    }

    // ----- mode selection -----
    pub fn mode_up(&mut self) {
        self.mode_selection = self.mode_selection.saturating_sub(1);
    }

    pub fn mode_down(&mut self) {
        if self.mode_selection + 1 < self.modes.len() {
            self.mode_selection += 1;
        }
    }

    /// Commit the highlighted mode: enter the loading state and hand the URL
    /// back so the caller can start the single fetch. The selector is not
    /// reachable again afterwards.
    pub fn select_mode(&mut self) -> Option<String> {
        let mode = self.modes.get(self.mode_selection)?;
        let url = mode.url.clone();
        self.selected_mode = Some(self.mode_selection);
        self.loading = true;
        self.input_mode = InputMode::Normal;
        Some(url)
    }

    // ----- sorting -----

    /// Header activation: flip the direction (even when switching columns)
    /// and re-sort the full stored list. The page index is left alone.
    pub fn on_sort(&mut self, field: SortField) {
        self.sort_dir = self.sort_dir.flip();
        self.sort_field = field;
        sort_records(&mut self.records, self.sort_field, self.sort_dir);
    }

    // ----- search -----
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn end_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Every edit of the search string resets the page to the first one.
    pub fn search_add_char(&mut self, c: char) {
        self.search.push(c);
        self.current_page = 0;
        self.cursor = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.current_page = 0;
        self.cursor = 0;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.current_page = 0;
        self.cursor = 0;
        self.input_mode = InputMode::Normal;
    }

    // ----- derived views -----

    /// The stored list under the current search (with the zero-match
    /// fallback applied).
    pub fn filtered_records(&self) -> Vec<&Record> {
        apply_search(&self.records, &self.search)
    }

    pub fn page_count(&self) -> usize {
        self.filtered_records().len().div_ceil(PAGE_SIZE)
    }

    /// The current page's slice of the filtered list. An out-of-range page
    /// yields an empty slice.
    pub fn visible_page(&self) -> Vec<&Record> {
        self.filtered_records()
            .into_iter()
            .skip(self.current_page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    // ----- pagination -----

    /// Page controls exist only when the stored (unfiltered) list does not
    /// fit one page.
    pub fn pagination_visible(&self) -> bool {
        self.records.len() > PAGE_SIZE
    }

    pub fn next_page(&mut self) {
        if !self.pagination_visible() {
            return;
        }
        if self.current_page + 1 < self.page_count() {
            self.current_page += 1;
            self.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if !self.pagination_visible() {
            return;
        }
        if self.current_page > 0 {
            self.current_page -= 1;
            self.cursor = 0;
        }
    }

    // ----- row selection -----
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_page().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Store the record under the cursor for the detail panel. Replaced by
    /// the next selection; there is no explicit deselect.
    pub fn select_row(&mut self) {
        let picked = {
            let visible = self.visible_page();
            if visible.is_empty() {
                None
            } else {
                let idx = self.cursor.min(visible.len() - 1);
                visible.get(idx).map(|r| (*r).clone())
            }
        };
        if let Some(rec) = picked {
            self.selected = Some(rec);
        }
    }

    // ----- add-row form -----

    /// Show the form (there is no path that hides it again) and focus it.
    pub fn show_form(&mut self) {
        self.form_visible = true;
        self.input_mode = InputMode::Form;
    }

    /// Move focus back to the table; the form panel stays visible.
    pub fn leave_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Commit a valid submission into the stored list, keeping the current
    /// ordering, then clear the form for the next entry.
    pub fn submit_form(&mut self) {
        if let Some(record) = self.form.submit() {
            self.records.push(record);
            sort_records(&mut self.records, self.sort_field, self.sort_dir);
            self.form.reset();
            self.show_toast("Row added".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records(n: u64) -> Vec<Record> {
        (1..=n)
            .map(|i| Record {
                id: i,
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                email: format!("user{i}@example.com"),
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

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let mut app = ready_app(120);
        app.current_page = 9;
        assert!(app.visible_page().is_empty());
        assert_eq!(app.page_count(), 3);
    }

    #[test]
    fn loaded_records_arrive_sorted_by_default_order() {
        let mut app = App::new(Vec::new(), ColorScheme::default());
        let mut records = make_records(5);
        records.reverse();
        app.on_event(AppEvent::RecordsLoaded(records));
        let ids: Vec<u64> = app.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn select_row_clamps_cursor_to_visible_rows() {
        let mut app = ready_app(3);
        app.cursor = 10;
        app.select_row();
        assert_eq!(app.selected().map(|r| r.id), Some(3));
    }

    #[test]
    fn toast_expires() {
        let mut app = ready_app(1);
        app.show_toast("Row added".to_string());
        assert_eq!(app.toast_message(), Some("Row added"));
        app.toast = Some(("old".to_string(), Instant::now() - Duration::from_secs(3)));
        assert_eq!(app.toast_message(), None);
    }
}
