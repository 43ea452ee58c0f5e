use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
        TableState, Wrap,
    },
    Frame,
};

use crate::app::{App, InputMode};
use crate::form::{self, FieldMessage};
use crate::types::{Record, SortField};

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App) {
    // Advance spinner animation on each render
    app.tick_spinner();

    if !app.is_mode_selected() {
        draw_mode_select(f, app);
        return;
    }

    // Dynamic chrome: the search bar only takes space while it is in use.
    let search_expanded =
        !app.is_loading() && (app.input_mode() == InputMode::Search || !app.search().is_empty());

    let mut constraints: Vec<Constraint> = Vec::with_capacity(4);
    constraints.push(Constraint::Length(1)); // header
    if search_expanded {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0)); // body
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0usize;
    header(f, chunks[idx], app);
    idx += 1;
    if search_expanded {
        search_bar(f, chunks[idx], app);
        idx += 1;
    }
    if app.is_loading() {
        preloader(f, chunks[idx], app);
    } else {
        body(f, chunks[idx], app);
    }
    idx += 1;
    footer(f, chunks[idx], app);
}

// ===============================
// Mode selection screen
// ===============================
fn draw_mode_select(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = 44u16.min(area.width);
    let height = (app.modes().len() as u16 + 4).min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay = Rect {
        x,
        y,
        width,
        height,
    };

    f.render_widget(Clear, overlay);

    let items: Vec<ListItem> = app
        .modes()
        .iter()
        .map(|m| ListItem::new(m.label))
        .collect();

    let mut st = ListState::default();
    if !app.modes().is_empty() {
        st.select(Some(app.mode_selection().min(app.modes().len() - 1)));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(app.theme().selection_bg)
                .fg(app.theme().selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ")
        .block(
            Block::default()
                .title(" Select data source ")
                .title_bottom(Line::from(" ↑/↓ choose · Enter load · q quit ").centered())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.theme().focus_border)),
        );

    f.render_stateful_widget(list, overlay, &mut st);
}

// ===============================
// Header / Search / Preloader
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " tabcat ",
            Style::default()
                .fg(app.theme().accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];
    if app.is_loading() {
        spans.push(Span::styled(
            "loading…",
            Style::default().fg(app.theme().text_dim),
        ));
    } else {
        spans.push(Span::raw(format!("{} records", app.records().len())));
        spans.push(Span::raw(" │ sorted by "));
        spans.push(Span::styled(
            format!("{} {}", app.sort_field(), app.sort_dir().arrow()),
            Style::default().fg(app.theme().accent),
        ));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}

fn search_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_mode() == InputMode::Search;
    let query = app.search();

    let border_color = if focused {
        app.theme().focus_border
    } else {
        app.theme().unfocused_border
    };
    let hint = "(type to search firstName, lastName, email)";
    let text = if query.is_empty() && !focused {
        hint
    } else {
        query
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(if focused {
            app.theme().focus_border
        } else {
            app.theme().text
        }))
        .block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(paragraph, area);

    if focused && area.width > 2 {
        // Cursor inside the input box
        let x = area.x + 1 + (query.len().min((area.width.saturating_sub(2)) as usize) as u16);
        let y = area.y + 1;
        f.set_cursor_position((x, y));
    }
}

fn preloader(f: &mut Frame, area: Rect, app: &App) {
    let text = format!("{} Loading records…", app.spinner_char());
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme().text_dim))
        .block(Block::default().borders(Borders::NONE));

    let vertical = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Percentage(45),
    ])
    .split(area);
    f.render_widget(paragraph, vertical[1]);
}

// ===============================
// Body
// ===============================
fn body(f: &mut Frame, area: Rect, app: &App) {
    // Add-row form takes a fixed column on the right once shown
    let (main_area, form_area) = if app.form_visible() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    if let Some(rec) = app.selected() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(main_area);
        render_table(f, rows[0], app);
        render_detail(f, rows[1], app, rec);
    } else {
        render_table(f, main_area, app);
    }

    if let Some(fa) = form_area {
        render_form_panel(f, fa, app);
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let table_focused = app.input_mode() == InputMode::Normal;
    let focus_color = app.theme().focus_border;
    let unfocused_color = app.theme().unfocused_border;

    let filtered_len = app.filtered_records().len();
    let total = app.records().len();
    let visible = app.visible_page();

    let header_cells: Vec<Cell> = SortField::ALL
        .iter()
        .map(|field| {
            if *field == app.sort_field() {
                Cell::from(Span::styled(
                    format!("{} {}", field.title(), app.sort_dir().arrow()),
                    Style::default()
                        .fg(app.theme().accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Cell::from(Span::styled(
                    field.title(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
        })
        .collect();
    let header_row = Row::new(header_cells).bottom_margin(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.id.to_string()),
                Cell::from(r.first_name.as_str()),
                Cell::from(r.last_name.as_str()),
                Cell::from(r.email.as_str()),
                Cell::from(r.phone.as_str()),
            ])
        })
        .collect();

    let title = if filtered_len < total {
        format!(" Records ({filtered_len} / {total}) ")
    } else {
        format!(" Records ({total}) ")
    };

    let widths = [
        Constraint::Length(6),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Min(24),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header_row)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(app.theme().selection_bg)
                .fg(app.theme().selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(if table_focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(if table_focused {
                    focus_color
                } else {
                    unfocused_color
                })),
        );

    let mut st = TableState::default();
    if !visible.is_empty() {
        st.select(Some(app.cursor().min(visible.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut st);
}

fn render_detail(f: &mut Frame, area: Rect, app: &App, rec: &Record) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(
                format!("{} {}", rec.first_name, rec.last_name),
                Style::default()
                    .fg(app.theme().accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("id:    {}", rec.id)),
        Line::from(format!("email: {}", rec.email)),
        Line::from(format!("phone: {}", rec.phone)),
    ];
    if let Some(addr) = &rec.address {
        lines.push(Line::from(format!(
            "address: {}, {}, {} {}",
            addr.street_address, addr.city, addr.state, addr.zip
        )));
    }
    if let Some(desc) = &rec.description {
        lines.push(Line::from(format!("description: {desc}")));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Record details ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme().unfocused_border)),
    );
    f.render_widget(paragraph, area);
}

// ===============================
// Add-row form panel
// ===============================
fn render_form_panel(f: &mut Frame, area: Rect, app: &App) {
    let form_focused = app.input_mode() == InputMode::Form;
    let focus_color = app.theme().focus_border;
    let unfocused_color = app.theme().unfocused_border;

    let outer = Block::default()
        .title(" Add row ")
        .borders(Borders::ALL)
        .border_type(if form_focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if form_focused {
            focus_color
        } else {
            unfocused_color
        }));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(3); form::FIELDS.len()];
    constraints.push(Constraint::Length(1)); // hint line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = app.form();
    for (i, spec) in form::FIELDS.iter().enumerate() {
        let focused = form_focused && form.focus() == i;
        let mut block = Block::default()
            .title(format!(" {} ", spec.name))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                focus_color
            } else {
                unfocused_color
            }));

        if let Some(msg) = form.message(i) {
            let (text, color) = match msg {
                FieldMessage::Error(e) => (e, app.theme().error),
                FieldMessage::Warning(w) => (w, app.theme().warning),
            };
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {text} "),
                Style::default().fg(color),
            )));
        }

        let value = form.value(i);
        let paragraph = Paragraph::new(value).block(block);
        f.render_widget(paragraph, rows[i]);

        if focused && rows[i].width > 2 {
            let x = rows[i].x
                + 1
                + (value.len().min((rows[i].width.saturating_sub(2)) as usize) as u16);
            let y = rows[i].y + 1;
            f.set_cursor_position((x, y));
        }
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(app.theme().accent)),
        Span::raw(" submit  "),
        Span::styled("Ctrl+U", Style::default().fg(app.theme().accent)),
        Span::raw(" clear  "),
        Span::styled("Esc", Style::default().fg(app.theme().accent)),
        Span::raw(" table"),
    ]))
    .style(Style::default().fg(app.theme().text_dim));
    f.render_widget(hint, rows[form::FIELDS.len()]);
}

// ===============================
// Footer
// ===============================
fn footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |s: &'static str| Span::styled(s, Style::default().fg(app.theme().accent));
    let mut spans: Vec<Span> = Vec::with_capacity(24);

    match app.input_mode() {
        InputMode::Search => {
            spans.push(key("Enter"));
            spans.push(Span::raw(" apply │ "));
            spans.push(key("Esc"));
            spans.push(Span::raw(" clear search"));
        }
        InputMode::Form => {
            spans.push(key("Tab"));
            spans.push(Span::raw(" next field │ "));
            spans.push(key("Enter"));
            spans.push(Span::raw(" submit │ "));
            spans.push(key("Ctrl+U"));
            spans.push(Span::raw(" clear values │ "));
            spans.push(key("Esc"));
            spans.push(Span::raw(" back to table"));
        }
        _ => {
            spans.push(key("↑/↓"));
            spans.push(Span::raw(" row │ "));
            spans.push(key("Enter"));
            spans.push(Span::raw(" details │ "));
            spans.push(key("1-5"));
            spans.push(Span::raw(" sort │ "));
            spans.push(key("/"));
            spans.push(Span::raw(" search │ "));
            if !app.form_visible() {
                spans.push(key("a"));
                spans.push(Span::raw(" add row │ "));
            }
            spans.push(key("q"));
            spans.push(Span::raw(" quit"));
        }
    }

    if app.pagination_visible() {
        spans.push(Span::raw(" │ "));
        spans.push(key("←/→"));
        spans.push(Span::raw(format!(
            " page {}/{}",
            app.current_page() + 1,
            app.page_count().max(1)
        )));
    }

    if let Some(toast) = app.toast_message() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            toast,
            Style::default()
                .fg(app.theme().success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
