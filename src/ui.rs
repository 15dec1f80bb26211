use crate::catalog::{Catalog, Resource};
use crate::query::Selection;
use crate::resources::{contract_terms, AssetStatus, LegalDetails, LegalResource, SatelliteAsset};
use crate::view::ViewState;
use anyhow::Result;
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Marketplace,
    LegalLibrary,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Marketplace => Page::LegalLibrary,
            Page::LegalLibrary => Page::Marketplace,
        }
    }

    pub fn previous(&self) -> Self {
        // Two pages, so previous == next
        self.next()
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Marketplace => "Marketplace",
            Page::LegalLibrary => "Legal Library",
        }
    }
}

/// One screen: its catalog, its filter state, and the derived visible rows.
/// The two screens are fully independent; filters on one never touch the
/// other.
pub struct Screen<R: Resource> {
    pub catalog: Catalog<R>,
    pub view: ViewState,
    /// Indices into the catalog that pass the current filters, in order
    pub rows: Vec<usize>,
    pub table: TableState,
}

impl<R: Resource> Screen<R> {
    pub fn new(catalog: Catalog<R>) -> Self {
        let mut screen = Screen {
            catalog,
            view: ViewState::new(),
            rows: Vec::new(),
            table: TableState::default(),
        };
        screen.refilter();
        screen
    }

    /// Re-run the query engine and reset the selection to the first row
    pub fn refilter(&mut self) {
        self.rows = self
            .catalog
            .resources()
            .iter()
            .enumerate()
            .filter(|(_, resource)| self.view.matches(resource))
            .map(|(i, _)| i)
            .collect();

        if self.rows.is_empty() {
            self.table.select(None);
        } else {
            self.table.select(Some(0));
        }
    }

    pub fn selected(&self) -> Option<&R> {
        self.table
            .selected()
            .and_then(|i| self.rows.get(i))
            .map(|&i| &self.catalog.resources()[i])
    }

    pub fn push_char(&mut self, c: char) {
        self.view.push_char(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        self.view.pop_char();
        self.refilter();
    }

    pub fn select_filter(&mut self, selection: Selection) {
        self.view.select(selection);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.view.clear();
        self.refilter();
    }

    pub fn next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table.select(Some(i));
    }

    pub fn home(&mut self) {
        if !self.rows.is_empty() {
            self.table.select(Some(0));
        }
    }

    pub fn end(&mut self) {
        if !self.rows.is_empty() {
            self.table.select(Some(self.rows.len() - 1));
        }
    }
}

pub struct App {
    pub current_page: Page,
    pub marketplace: Screen<SatelliteAsset>,
    pub legal: Screen<LegalResource>,
    pub searching: bool,
    pub show_detail: bool,
}

impl App {
    pub fn new(marketplace: Catalog<SatelliteAsset>, legal: Catalog<LegalResource>) -> Self {
        App {
            current_page: Page::Marketplace,
            marketplace: Screen::new(marketplace),
            legal: Screen::new(legal),
            searching: false,
            show_detail: false,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.searching = false;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.searching = false;
    }

    /// Digit-key filter map for the current page
    pub fn select_filter(&mut self, digit: char) {
        match self.current_page {
            Page::Marketplace => {
                let selection = match digit {
                    '1' => Selection::All,
                    '2' => Selection::from_key("active"),
                    '3' => Selection::from_key("maintenance"),
                    _ => return,
                };
                self.marketplace.select_filter(selection);
            }
            Page::LegalLibrary => {
                let selection = match digit {
                    '1' => Selection::All,
                    '2' => Selection::from_key("contract"),
                    '3' => Selection::from_key("agreement"),
                    '4' => Selection::from_key("principle"),
                    '5' => Selection::from_key("treaty"),
                    _ => return,
                };
                self.legal.select_filter(selection);
            }
        }
    }

    pub fn push_search(&mut self, c: char) {
        match self.current_page {
            Page::Marketplace => self.marketplace.push_char(c),
            Page::LegalLibrary => self.legal.push_char(c),
        }
    }

    pub fn pop_search(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.pop_char(),
            Page::LegalLibrary => self.legal.pop_char(),
        }
    }

    pub fn clear_filters(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.clear_filters(),
            Page::LegalLibrary => self.legal.clear_filters(),
        }
    }

    pub fn next_row(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.next(),
            Page::LegalLibrary => self.legal.next(),
        }
    }

    pub fn previous_row(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.previous(),
            Page::LegalLibrary => self.legal.previous(),
        }
    }

    pub fn home(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.home(),
            Page::LegalLibrary => self.legal.home(),
        }
    }

    pub fn end(&mut self) {
        match self.current_page {
            Page::Marketplace => self.marketplace.end(),
            Page::LegalLibrary => self.legal.end(),
        }
    }

    fn current_view(&self) -> &ViewState {
        match self.current_page {
            Page::Marketplace => &self.marketplace.view,
            Page::LegalLibrary => &self.legal.view,
        }
    }

    fn current_row_position(&self) -> (usize, usize) {
        let (state, total) = match self.current_page {
            Page::Marketplace => (&self.marketplace.table, self.marketplace.rows.len()),
            Page::LegalLibrary => (&self.legal.table, self.legal.rows.len()),
        };
        (state.selected().map(|i| i + 1).unwrap_or(0), total)
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
            if app.searching {
                // Search mode: keystrokes edit the query and re-filter
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => app.searching = false,
                    KeyCode::Backspace => app.pop_search(),
                    KeyCode::Down => app.next_row(),
                    KeyCode::Up => app.previous_row(),
                    KeyCode::Char(c) => app.push_search(c),
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => {
                    if app.show_detail {
                        app.show_detail = false;
                    } else {
                        return Ok(());
                    }
                }
                KeyCode::Char('/') => app.searching = true,
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('c') => app.clear_filters(),
                KeyCode::Char(d @ '1'..='5') => app.select_filter(d),
                KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                KeyCode::Home => app.home(),
                KeyCode::End => app.end(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation + counts
            Constraint::Length(3), // Search / filter bar
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_search_bar(f, chunks[1], app);

    // Content area with optional split for detail panel
    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Resource list
                Constraint::Percentage(40), // Detail panel
            ])
            .split(chunks[2]);

        render_content(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_content(f, chunks[2], app);
    }

    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Marketplace, Page::LegalLibrary];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    // Per-category derived counts for the current page's catalog
    let counts = match app.current_page {
        Page::Marketplace => {
            let mut spans = vec![Span::styled(
                format!("Assets: {}", app.marketplace.catalog.len()),
                Style::default().fg(Color::White),
            )];
            for (category, count) in app.marketplace.catalog.category_counts() {
                spans.push(Span::raw("  "));
                let color = match category {
                    "active" => Color::Green,
                    "maintenance" => Color::Yellow,
                    _ => Color::White,
                };
                spans.push(Span::styled(
                    format!("{}: {}", category, count),
                    Style::default().fg(color),
                ));
            }
            spans
        }
        Page::LegalLibrary => {
            let mut spans = vec![Span::styled(
                format!("Resources: {}", app.legal.catalog.len()),
                Style::default().fg(Color::White),
            )];
            for (category, count) in app.legal.catalog.category_counts() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("{}: {}", category, count),
                    Style::default().fg(legal_kind_color(category)),
                ));
            }
            spans
        }
    };

    tab_spans.push(Span::raw("  |  "));
    tab_spans.extend(counts);

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Space Trade Platform "),
    );

    f.render_widget(header, area);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let view = app.current_view();

    let filter_hints = match app.current_page {
        Page::Marketplace => "1 All  2 Active  3 Maintenance",
        Page::LegalLibrary => "1 All  2 Contracts  3 Agreements  4 Principles  5 Treaties",
    };

    let query_style = if app.searching {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(" Search: ", Style::default().fg(Color::Cyan)),
        Span::styled(view.query().to_string(), query_style),
    ];
    if app.searching {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled("Category: ", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(
        view.selection().key().to_string(),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(filter_hints, Style::default().fg(Color::DarkGray)));

    let title = if app.searching {
        " Search (typing) "
    } else {
        " Search (/) "
    };

    let bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if app.searching {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            })
            .title(title),
    );

    f.render_widget(bar, area);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    let empty = match app.current_page {
        Page::Marketplace => app.marketplace.rows.is_empty(),
        Page::LegalLibrary => app.legal.rows.is_empty(),
    };

    if empty {
        render_empty_state(f, area, app.current_page);
        return;
    }

    match app.current_page {
        Page::Marketplace => render_marketplace_table(f, area, app),
        Page::LegalLibrary => render_legal_table(f, area, app),
    }
}

/// An empty result is a normal state, not an error
fn render_empty_state(f: &mut Frame, area: Rect, page: Page) {
    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "  No resources found",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Try adjusting your search or filter criteria.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  c", Style::default().fg(Color::Yellow)),
            Span::styled(" clears both filters", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", page.title())),
    );

    f.render_widget(paragraph, area);
}

fn render_marketplace_table(f: &mut Frame, area: Rect, app: &mut App) {
    let screen = &mut app.marketplace;

    let header_cells = ["ID", "Name", "Kind", "Orbit", "Operator", "Status", "Price"]
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

    let resources = screen.catalog.resources();
    let rows = screen.rows.iter().map(|&i| {
        let asset = &resources[i];
        let status_color = match asset.status {
            AssetStatus::Active => Color::Green,
            AssetStatus::Maintenance => Color::Yellow,
        };

        let cells = vec![
            Cell::from(asset.id.clone()),
            Cell::from(asset.name.clone()),
            Cell::from(truncate(&asset.kind, 28)),
            Cell::from(asset.orbit.label()),
            Cell::from(truncate(&asset.operator, 14)),
            Cell::from(asset.status.label()).style(Style::default().fg(status_color)),
            Cell::from(asset.price.clone()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(30),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Satellite Assets "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut screen.table);
}

fn legal_kind_color(kind: &str) -> Color {
    match kind {
        "contract" => Color::Cyan,
        "agreement" => Color::Green,
        "principle" => Color::Magenta,
        "treaty" => Color::Yellow,
        _ => Color::White,
    }
}

fn render_legal_table(f: &mut Frame, area: Rect, app: &mut App) {
    let screen = &mut app.legal;

    let header_cells = ["ID", "Kind", "Name", "Updated"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let resources = screen.catalog.resources();
    let rows = screen.rows.iter().map(|&i| {
        let resource = &resources[i];
        let kind = resource.details.key();

        let updated = resource
            .last_updated
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string());

        let cells = vec![
            Cell::from(resource.id.clone()),
            Cell::from(resource.details.label())
                .style(Style::default().fg(legal_kind_color(kind))),
            Cell::from(truncate(&resource.name, 48)),
            Cell::from(updated),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(50),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Legal Resources "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut screen.table);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (selected, total) = app.current_row_position();
    let view = app.current_view();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if view.is_filtered() {
        status_spans.push(Span::raw(" | "));
        let mut label = String::new();
        if !view.query().is_empty() {
            label.push_str(&format!("\"{}\"", view.query()));
        }
        if !view.selection().is_all() {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str(view.selection().key());
        }
        status_spans.push(Span::styled(
            format!("Filter: {}", label),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("/", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Search | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Details | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    match app.current_page {
        Page::Marketplace => render_asset_detail(f, area, app),
        Page::LegalLibrary => render_legal_detail(f, area, app),
    }
}

fn detail_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}: ", label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        value,
    ])
}

fn render_asset_detail(f: &mut Frame, area: Rect, app: &App) {
    let asset = match app.marketplace.selected() {
        Some(a) => a,
        None => {
            render_no_selection(f, area, " Asset Details ");
            return;
        }
    };

    let status_color = match asset.status {
        AssetStatus::Active => Color::Green,
        AssetStatus::Maintenance => Color::Yellow,
    };

    let terms = contract_terms(&asset.id);

    let mut content = vec![
        Line::from(""),
        detail_line("Name", Span::raw(asset.name.clone())),
        Line::from(""),
        detail_line("Kind", Span::raw(asset.kind.clone())),
        Line::from(""),
        detail_line(
            "Orbit",
            Span::raw(format!("{} ({})", asset.orbit.label(), asset.orbit.altitude())),
        ),
        Line::from(""),
        detail_line("Operator", Span::raw(asset.operator.clone())),
        Line::from(""),
        detail_line(
            "Status",
            Span::styled(asset.status.label(), Style::default().fg(status_color)),
        ),
        Line::from(""),
        detail_line("Coverage", Span::raw(asset.coverage.clone())),
        Line::from(""),
        detail_line(
            "Share Available",
            Span::styled(
                asset.share_available.clone(),
                Style::default().fg(Color::Green),
            ),
        ),
        Line::from(""),
        detail_line(
            "Price",
            Span::styled(asset.price.clone(), Style::default().fg(Color::Green)),
        ),
        Line::from(""),
        detail_line("Revenue", Span::raw(asset.revenue.clone())),
        Line::from(""),
        detail_line(
            "Launched",
            Span::raw(asset.launch_date.format("%Y-%m-%d").to_string()),
        ),
        Line::from(""),
        detail_line(
            "Next Maintenance",
            Span::raw(asset.next_maintenance.format("%Y-%m-%d").to_string()),
        ),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(Span::styled(
            "  CONTRACT",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        detail_line("Type", Span::raw(terms.contract_type)),
        detail_line("Terms", Span::raw(terms.terms)),
        detail_line("Coverage", Span::raw(terms.coverage)),
        detail_line("Payment", Span::raw(terms.payment_terms)),
        detail_line("Liability", Span::raw(terms.liability_limit)),
        detail_line("Arbitration", Span::raw(terms.arbitration_clause)),
        detail_line("Maintenance", Span::raw(terms.maintenance_schedule)),
    ];

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Asset Details "),
    );

    f.render_widget(panel, area);
}

fn render_legal_detail(f: &mut Frame, area: Rect, app: &App) {
    let resource = match app.legal.selected() {
        Some(r) => r,
        None => {
            render_no_selection(f, area, " Resource Details ");
            return;
        }
    };

    let kind_color = legal_kind_color(resource.details.key());

    let mut content = vec![
        Line::from(""),
        detail_line("Name", Span::raw(resource.name.clone())),
        Line::from(""),
        detail_line(
            "Kind",
            Span::styled(resource.details.label(), Style::default().fg(kind_color)),
        ),
        Line::from(""),
        detail_line("ID", Span::raw(resource.id.clone())),
        Line::from(""),
    ];

    if let Some(updated) = resource.last_updated {
        content.push(detail_line(
            "Updated",
            Span::raw(updated.format("%Y-%m-%d").to_string()),
        ));
        content.push(Line::from(""));
    }

    content.push(Line::from("  ─────────────────────────────────────"));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            wrap_text(&resource.description, 35),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    ]));
    content.push(Line::from(""));
    content.push(Line::from("  ─────────────────────────────────────"));
    content.push(Line::from(""));

    match &resource.details {
        LegalDetails::Contract {
            category,
            pages,
            downloads,
            rating,
        } => {
            content.push(detail_line("Category", Span::raw(category.clone())));
            content.push(detail_line("Pages", Span::raw(pages.to_string())));
            content.push(detail_line("Downloads", Span::raw(downloads.to_string())));
            content.push(detail_line(
                "Rating",
                Span::styled(
                    format!("{:.1} / 5.0", rating),
                    Style::default().fg(Color::Yellow),
                ),
            ));
        }
        LegalDetails::Agreement {
            domain,
            applicability,
            status,
        } => {
            content.push(detail_line("Domain", Span::raw(domain.clone())));
            content.push(detail_line("Applicability", Span::raw(applicability.clone())));
            content.push(detail_line(
                "Status",
                Span::styled(status.clone(), Style::default().fg(Color::Green)),
            ));
        }
        LegalDetails::Principle {
            topics,
            relevance,
            last_reviewed,
        } => {
            content.push(detail_line("Topics", Span::raw(topics.join(", "))));
            content.push(detail_line("Relevance", Span::raw(relevance.clone())));
            content.push(detail_line(
                "Reviewed",
                Span::raw(last_reviewed.format("%Y-%m-%d").to_string()),
            ));
        }
        LegalDetails::Treaty {
            signatories,
            key_provisions,
            relevance,
            status,
        } => {
            content.push(detail_line("Signatories", Span::raw(signatories.clone())));
            content.push(detail_line(
                "Provisions",
                Span::raw(key_provisions.join(", ")),
            ));
            content.push(detail_line("Relevance", Span::raw(relevance.clone())));
            content.push(detail_line(
                "Status",
                Span::styled(status.clone(), Style::default().fg(Color::Green)),
            ));
        }
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Resource Details "),
    );

    f.render_widget(panel, area);
}

fn render_no_selection(f: &mut Frame, area: Rect, title: &str) {
    let panel = Paragraph::new("No resource selected").block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title.to_string()),
    );
    f.render_widget(panel, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

fn wrap_text(text: &str, width: usize) -> String {
    if text.len() <= width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.len() + word.len() + 1 <= width {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push_str("\n  ");
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push_str("\n  ");
        }
        result.push_str(&current_line);
    }

    result
}
