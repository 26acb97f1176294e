use anyhow::Result;
use beneficiary_directory::{
    filter_records, render_report, unions, villages, Beneficiary, DirectoryStats,
    ExportController, ExportOutcome, FilterField, ImageExporter, Printer, ReportSignatory,
    SearchFilters, SpoolPrinter, TextReportExporter,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use std::path::Path;

/// Which filter control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    Phone,
    Union,
    Village,
}

impl FilterFocus {
    pub fn next(&self) -> Self {
        match self {
            FilterFocus::Phone => FilterFocus::Union,
            FilterFocus::Union => FilterFocus::Village,
            FilterFocus::Village => FilterFocus::Phone,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FilterFocus::Phone => FilterFocus::Village,
            FilterFocus::Union => FilterFocus::Phone,
            FilterFocus::Village => FilterFocus::Union,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FilterFocus::Phone => "Phone",
            FilterFocus::Union => "Union",
            FilterFocus::Village => "Village",
        }
    }
}

pub struct App {
    pub records: Vec<Beneficiary>,
    pub filters: SearchFilters,
    pub filtered: Vec<Beneficiary>,
    pub unions: Vec<String>,
    pub villages: Vec<String>,
    pub state: TableState,
    pub focus: FilterFocus,
    pub show_detail: bool,
    pub status: Option<String>,
    controller: ExportController,
    exporter: Box<dyn ImageExporter>,
    printer: Box<dyn Printer>,
    signatory: ReportSignatory,
}

impl App {
    pub fn new(records: Vec<Beneficiary>) -> Self {
        Self::with_collaborators(
            records,
            Box::new(TextReportExporter::new(Path::new("."))),
            Box::new(SpoolPrinter),
        )
    }

    /// Inject the export collaborators (tests, alternative hosts).
    pub fn with_collaborators(
        records: Vec<Beneficiary>,
        exporter: Box<dyn ImageExporter>,
        printer: Box<dyn Printer>,
    ) -> Self {
        let mut app = Self {
            records,
            filters: SearchFilters::default(),
            filtered: Vec::new(),
            unions: Vec::new(),
            villages: Vec::new(),
            state: TableState::default(),
            focus: FilterFocus::Phone,
            show_detail: false,
            status: None,
            controller: ExportController::new(),
            exporter,
            printer,
            signatory: ReportSignatory::default(),
        };
        app.refresh();
        app
    }

    /// Recompute options and matches from scratch. Total and stateless -
    /// every filter mutation funnels through here.
    fn refresh(&mut self) {
        self.unions = unions(&self.records);
        self.villages = villages(&self.records, &self.filters.union_name);
        self.filtered = filter_records(&self.records, &self.filters);

        if self.filtered.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        self.filters = self.filters.apply_change(field, value);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::reset();
        self.refresh();
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats::compute(&self.records, &self.filtered, &self.unions, &self.villages)
    }

    pub fn selected_beneficiary(&self) -> Option<&Beneficiary> {
        self.state.selected().and_then(|i| self.filtered.get(i))
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    // ------------------------------------------------------------------
    // Phone query editing
    // ------------------------------------------------------------------

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.filters.phone.clone();
        query.push(c);
        self.set_filter(FilterField::Phone, &query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.filters.phone.clone();
        query.pop();
        self.set_filter(FilterField::Phone, &query);
    }

    // ------------------------------------------------------------------
    // Union / village selection cycling
    // ------------------------------------------------------------------

    /// Step the focused selector through "" (all) plus its derived options.
    pub fn cycle_option(&mut self, forward: bool) {
        let (field, choices, current) = match self.focus {
            FilterFocus::Union => (FilterField::Union, &self.unions, &self.filters.union_name),
            FilterFocus::Village => (FilterField::Village, &self.villages, &self.filters.village),
            FilterFocus::Phone => return,
        };

        // Position 0 is the "all" option (empty selection).
        let len = choices.len() + 1;
        let position = match choices.iter().position(|c| c == current) {
            Some(i) => i + 1,
            None => 0,
        };
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };

        let value = if next == 0 {
            String::new()
        } else {
            choices[next - 1].clone()
        };
        self.set_filter(field, &value);
    }

    // ------------------------------------------------------------------
    // Export actions
    // ------------------------------------------------------------------

    fn current_report(&self) -> String {
        render_report(&self.filtered, &self.stats(), &self.signatory)
    }

    pub fn export_image(&mut self) {
        let report = self.current_report();
        let outcome = self.controller.export(self.exporter.as_ref(), &report);
        self.status = Some(match outcome {
            ExportOutcome::Saved(path) => format!("Saved {}", path.display()),
            ExportOutcome::Busy => "An export is already running".to_string(),
            ExportOutcome::Failed(message) => message,
            ExportOutcome::Printed => unreachable!("export never prints"),
        });
    }

    pub fn print_list(&mut self) {
        let report = self.current_report();
        let outcome = self.controller.print(self.printer.as_ref(), &report);
        self.status = Some(match outcome {
            ExportOutcome::Printed => "Sent to printer".to_string(),
            ExportOutcome::Busy => "An export is already running".to_string(),
            ExportOutcome::Failed(message) => message,
            ExportOutcome::Saved(_) => unreachable!("print never saves"),
        });
    }

    // ------------------------------------------------------------------
    // Table navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                let next = i + 20;
                if next >= len {
                    len - 1
                } else {
                    next
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if i < 20 {
                    0
                } else {
                    i - 20
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => app.focus = app.focus.next(),
                KeyCode::BackTab => app.focus = app.focus.previous(),
                KeyCode::Left => app.cycle_option(false),
                KeyCode::Right => app.cycle_option(true),
                KeyCode::Backspace if app.focus == FilterFocus::Phone => app.pop_query_char(),
                KeyCode::Delete if app.focus == FilterFocus::Phone => {
                    app.set_filter(FilterField::Phone, "")
                }
                // The phone control swallows printable keys; command keys
                // apply everywhere else.
                KeyCode::Char(c)
                    if app.focus == FilterFocus::Phone
                        && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    app.push_query_char(c)
                }
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('c') => app.clear_filters(),
                KeyCode::Char('e') => app.export_image(),
                KeyCode::Char('p') => app.print_list(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home => app.state.select(Some(0)),
                KeyCode::End => {
                    if !app.filtered.is_empty() {
                        app.state.select(Some(app.filtered.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Statistics header
            Constraint::Length(3), // Filter controls
            Constraint::Min(0),    // Results table
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_filter_bar(f, chunks[1], app);

    if app.filtered.is_empty() {
        render_empty_state(f, chunks[2]);
    } else if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Result list
                Constraint::Percentage(40), // Detail panel
            ])
            .split(chunks[2]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_table(f, chunks[2], app);
    }

    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();

    let header_text = vec![Line::from(vec![
        Span::styled(
            " Beneficiary Directory ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("Applicants: {}", stats.total),
            Style::default().fg(Color::White),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("Matched: {}", stats.matched),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("Unions: {}", stats.unions),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("Villages: {}", stats.villages),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let phone_value = if app.filters.phone.is_empty() {
        "type to search...".to_string()
    } else {
        app.filters.phone.clone()
    };
    render_filter_control(f, controls[0], app, FilterFocus::Phone, &phone_value);

    let union_value = if app.filters.union_name.is_empty() {
        "All unions".to_string()
    } else {
        app.filters.union_name.clone()
    };
    render_filter_control(f, controls[1], app, FilterFocus::Union, &union_value);

    let village_value = if app.filters.village.is_empty() {
        "All villages".to_string()
    } else {
        app.filters.village.clone()
    };
    render_filter_control(f, controls[2], app, FilterFocus::Village, &village_value);
}

fn render_filter_control(f: &mut Frame, area: Rect, app: &App, focus: FilterFocus, value: &str) {
    let focused = app.focus == focus;

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let control = Paragraph::new(Line::from(Span::styled(format!(" {}", value), value_style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", focus.title())),
        );

    f.render_widget(control, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["ID", "Name", "Phone", "Category / Profession", "Union / Village", "Income"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.filtered.iter().map(|b| {
        let cells = vec![
            Cell::from(b.id.clone()).style(Style::default().fg(Color::DarkGray)),
            Cell::from(truncate(&b.name, 24)),
            Cell::from(b.display_phone()).style(Style::default().fg(Color::Green)),
            Cell::from(format!("{} / {}", b.category, truncate(&b.profession, 16))),
            Cell::from(format!("{} / {}", b.union_name, b.village)),
            Cell::from(b.income.clone()).style(Style::default().fg(Color::White)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(26),
            Constraint::Length(14),
            Constraint::Length(28),
            Constraint::Length(28),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Beneficiaries "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No beneficiaries found!",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Adjust the phone number or union filter, or press"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::raw(" to start over with all filters cleared."),
        ]),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" No results "),
    );

    f.render_widget(panel, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let b = match app.selected_beneficiary() {
        Some(b) => b,
        None => {
            let no_selection = Paragraph::new("No beneficiary selected").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Beneficiary Details "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  ID: ", label), Span::raw(&b.id)]),
        Line::from(""),
        Line::from(vec![Span::styled("  Name: ", label), Span::raw(&b.name)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Phone: ", label),
            Span::styled(b.display_phone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("  Category: ", label), Span::raw(&b.category)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Profession: ", label),
            Span::raw(&b.profession),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Daily income: ", label),
            Span::styled(&b.income, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(vec![Span::styled("  Union: ", label), Span::raw(&b.union_name)]),
        Line::from(""),
        Line::from(vec![Span::styled("  Village: ", label), Span::raw(&b.village)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press Enter to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let detail_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Beneficiary Details "),
    );

    f.render_widget(detail_panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.filtered.len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if app.filters.is_active() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            "Filters on",
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    if let Some(message) = &app.status {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Magenta),
        ));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Focus | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Select | "));
    status_spans.push(Span::styled("e", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Export | "));
    status_spans.push(Span::styled("p", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Print | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_text = vec![Line::from(status_spans)];

    let status_bar = Paragraph::new(status_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use beneficiary_directory::NullPrinter;
    use std::path::PathBuf;

    fn beneficiary(id: &str, phone: &str, union_name: &str, village: &str) -> Beneficiary {
        Beneficiary {
            id: id.to_string(),
            name: format!("Beneficiary {}", id),
            phone: phone.to_string(),
            category: "Ultra-poor".to_string(),
            profession: "Day Labourer".to_string(),
            income: "৳250".to_string(),
            union_name: union_name.to_string(),
            village: village.to_string(),
        }
    }

    fn sample_app() -> App {
        let records = vec![
            beneficiary("1", "0170000001", "Nawpara", "Charpara"),
            beneficiary("2", "0180000002", "Maria", "Shibpur"),
            beneficiary("3", "0170000003", "Nawpara", "Dakshinpara"),
        ];
        App::with_collaborators(records, Box::new(FailingExporter), Box::new(NullPrinter))
    }

    struct FailingExporter;

    impl ImageExporter for FailingExporter {
        fn export(&self, _report: &str) -> Result<PathBuf> {
            bail!("render backend unavailable")
        }
    }

    #[test]
    fn test_new_app_shows_whole_roster() {
        let app = sample_app();

        assert_eq!(app.filtered.len(), 3);
        assert_eq!(app.unions, vec!["Maria", "Nawpara"]);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_typing_into_phone_control_filters() {
        let mut app = sample_app();

        for c in "018".chars() {
            app.push_query_char(c);
        }

        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.filtered[0].id, "2");

        app.pop_query_char();
        app.pop_query_char();
        app.pop_query_char();
        assert_eq!(app.filtered.len(), 3);
    }

    #[test]
    fn test_cycling_union_narrows_village_options() {
        let mut app = sample_app();
        app.focus = FilterFocus::Union;

        // "" -> "Maria"
        app.cycle_option(true);

        assert_eq!(app.filters.union_name, "Maria");
        assert_eq!(app.villages, vec!["Shibpur"]);
        assert_eq!(app.filtered.len(), 1);
    }

    #[test]
    fn test_union_cycle_clears_stale_village() {
        let mut app = sample_app();
        app.set_filter(FilterField::Union, "Nawpara");
        app.set_filter(FilterField::Village, "Charpara");
        assert_eq!(app.filtered.len(), 1);

        app.focus = FilterFocus::Union;
        app.cycle_option(true); // Nawpara is last, forward wraps to "" (all)

        assert_eq!(app.filters.union_name, "");
        assert_eq!(app.filters.village, "");
        assert_eq!(app.filtered.len(), 3);
    }

    #[test]
    fn test_cycle_wraps_back_to_all() {
        let mut app = sample_app();
        app.focus = FilterFocus::Union;

        // "" -> Maria -> Nawpara -> ""
        app.cycle_option(true);
        app.cycle_option(true);
        app.cycle_option(true);

        assert_eq!(app.filters.union_name, "");
    }

    #[test]
    fn test_clear_filters_restores_roster() {
        let mut app = sample_app();
        app.set_filter(FilterField::Phone, "018");
        app.set_filter(FilterField::Union, "Maria");

        app.clear_filters();

        assert!(!app.filters.is_active());
        assert_eq!(app.filtered.len(), 3);
    }

    #[test]
    fn test_no_match_deselects_table_row() {
        let mut app = sample_app();

        app.set_filter(FilterField::Phone, "99999");

        assert!(app.filtered.is_empty());
        assert_eq!(app.state.selected(), None);
        assert!(app.selected_beneficiary().is_none());
    }

    #[test]
    fn test_failed_export_surfaces_status_and_recovers() {
        let mut app = sample_app();

        app.export_image();

        let status = app.status.clone().unwrap();
        assert!(status.contains("render backend unavailable"));

        // State untouched, print path still available.
        assert_eq!(app.filtered.len(), 3);
        app.print_list();
        assert_eq!(app.status.as_deref(), Some("Sent to printer"));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = sample_app();

        app.previous();
        assert_eq!(app.state.selected(), Some(2));

        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }
}
