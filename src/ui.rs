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
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use world_clock::{timezone_label, Catalog, DisplayRecord, WorldClockView};

/// How long the event loop waits before redrawing with fresh tick data
const REDRAW_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    WorldClocks,
    UsStates,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::WorldClocks => Page::UsStates,
            Page::UsStates => Page::WorldClocks,
        }
    }

    pub fn previous(&self) -> Self {
        // Two pages: previous and next coincide
        self.next()
    }

    pub fn title(&self) -> &str {
        match self {
            Page::WorldClocks => "World Clocks",
            Page::UsStates => "US States",
        }
    }
}

/// Terminal surface over two clock views: the world catalog grouped by
/// region, and the states catalog grouped by timezone. The views do all the
/// computation; this struct only holds input state.
pub struct App {
    pub world: WorldClockView,
    pub states: WorldClockView,
    pub current_page: Page,
    pub search_query: String,
    pub scroll: u16,
}

impl App {
    pub fn new() -> Self {
        App {
            world: WorldClockView::new(Catalog::world_locations()),
            states: WorldClockView::new(Catalog::us_states()),
            current_page: Page::WorldClocks,
            search_query: String::new(),
            scroll: 0,
        }
    }

    /// Start both views ticking. Called once when the surface comes up.
    pub fn activate(&mut self) {
        self.world.activate();
        self.states.activate();
    }

    /// Stop both views. Called once when the surface goes down.
    pub fn deactivate(&mut self) {
        self.world.deactivate();
        self.states.deactivate();
    }

    pub fn current_view(&self) -> &WorldClockView {
        match self.current_page {
            Page::WorldClocks => &self.world,
            Page::UsStates => &self.states,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.scroll = 0;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.scroll = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.scroll = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.scroll = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Sections to render for the current page: (heading, records)
    pub fn sections(&self) -> Vec<(String, Vec<DisplayRecord>)> {
        match self.current_page {
            Page::WorldClocks => self
                .world
                .grouped(&self.search_query)
                .into_iter()
                .map(|(region, records)| (region.label().to_string(), records))
                .collect(),
            Page::UsStates => self
                .states
                .grouped_by_timezone(&self.search_query)
                .into_iter()
                .map(|(timezone, records)| (timezone_label(&timezone).to_string(), records))
                .collect(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.activate();

    // Run the app
    let res = run_app(&mut terminal, app);

    app.deactivate();

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

        // Redraw on a short timeout even without input, so the seconds move
        if !event::poll(REDRAW_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Esc => {
                    if app.search_query.is_empty() {
                        return Ok(());
                    }
                    app.clear_search();
                }
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::Backspace => app.pop_search_char(),
                KeyCode::Down => app.scroll_down(),
                KeyCode::Up => app.scroll_up(),
                KeyCode::Char(c) => app.push_search_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with page tabs
            Constraint::Min(0),    // Clock sections
            Constraint::Length(3), // Search / status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_clocks(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::WorldClocks, Page::UsStates];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(page.title(), style));
    }

    let shown: usize = app.sections().iter().map(|(_, records)| records.len()).sum();
    let total = app.current_view().catalog().len();
    tab_spans.push(Span::raw("   "));
    tab_spans.push(Span::styled(
        format!("{}/{} locations", shown, total),
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(tab_spans))
        .block(Block::default().borders(Borders::ALL).title("World Clock"));
    f.render_widget(header, area);
}

fn render_clocks(f: &mut Frame, area: Rect, app: &App) {
    let sections = app.sections();

    if sections.is_empty() {
        // Normal empty state, not an error: say why the grid is blank
        let message = Paragraph::new(Line::from(vec![
            Span::raw("No locations match "),
            Span::styled(
                format!("'{}'", app.search_query),
                Style::default().fg(Color::Yellow),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (heading, records) in &sections {
        lines.push(Line::from(Span::styled(
            heading.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for record in records {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<18}", record.location)),
                Span::styled(
                    format!("{:<16}", record.country),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>12}", record.time),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   {}", record.date),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        lines.push(Line::from(""));
    }

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.current_page.title()),
        )
        .scroll((app.scroll, 0));
    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.search_query.clone()),
        Span::styled("▏", Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Filter"));
    f.render_widget(search, chunks[0]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "Type to search │ Tab: switch page │ ↑/↓: scroll │ Esc: clear/quit",
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(hints, chunks[1]);
}
