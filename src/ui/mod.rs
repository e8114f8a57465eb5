mod config;
mod filter;
mod state;

use crate::ui::state::{InputMode, PickerState};
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::io::{self, Stderr};

pub use config::{UiConfig, load_ui_config};

/// Picks one entry out of an ordered list. `Ok(None)` means the user
/// cancelled.
pub trait Chooser {
    fn choose(&mut self, items: &[String], page_size: usize) -> io::Result<Option<String>>;
}

/// Full-screen picker drawn on stderr so stdout stays free for the
/// chosen path.
pub struct TerminalChooser {
    config: UiConfig,
}

impl TerminalChooser {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }
}

impl Chooser for TerminalChooser {
    fn choose(&mut self, items: &[String], page_size: usize) -> io::Result<Option<String>> {
        let mut app = PickerState::new(items).with_search(self.config.show_search);
        let theme = Theme::from_config(&self.config);

        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stderr());
        let result = Terminal::new(backend).and_then(|mut terminal| {
            run_picker(&mut terminal, &mut app, &self.config, &theme, page_size.max(1))
        });
        let restored = guard.restore();

        let outcome = result?;
        restored?;
        Ok(outcome)
    }
}

/// Raw mode plus the alternate screen on stderr. Dropping the guard puts the
/// terminal back even when drawing or reading keys failed part way.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stderr(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Runs every restore step and reports the first failure.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mut stderr = io::stderr();
        first_error([
            disable_raw_mode(),
            execute!(stderr, LeaveAlternateScreen),
            execute!(stderr, Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

struct Theme {
    highlight: Color,
    border: Color,
    help: Color,
    text: Color,
}

impl Theme {
    fn from_config(config: &UiConfig) -> Self {
        Self {
            highlight: parse_color(&config.theme.highlight),
            border: parse_color(&config.theme.border),
            help: parse_color(&config.theme.help),
            text: parse_color(&config.theme.text),
        }
    }
}

fn run_picker(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    app: &mut PickerState,
    config: &UiConfig,
    theme: &Theme,
    page_size: usize,
) -> io::Result<Option<String>> {
    loop {
        terminal.draw(|frame| draw_picker(frame, app, config, theme, page_size))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(outcome) = handle_key(app, key, page_size) {
                return Ok(outcome);
            }
        }
    }
}

/// `Some(outcome)` ends the picker.
fn handle_key(app: &mut PickerState, key: KeyEvent, page_size: usize) -> Option<Option<String>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(None);
    }

    match app.mode() {
        InputMode::Normal => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(None),
            KeyCode::Enter => return app.selected_path().map(|path| Some(path.to_string())),
            KeyCode::Up | KeyCode::Char('k') => app.move_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.move_next(),
            KeyCode::PageUp => app.page_up(page_size),
            KeyCode::PageDown => app.page_down(page_size),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::Char('/') if app.searchable() => {
                app.filter.clear();
                app.refresh_filter();
                app.set_mode(InputMode::Search);
            }
            _ => {}
        },
        InputMode::Search => match key.code {
            KeyCode::Esc => app.set_mode(InputMode::Normal),
            KeyCode::Enter => return app.selected_path().map(|path| Some(path.to_string())),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Up => app.move_prev(),
            KeyCode::Down => app.move_next(),
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                app.on_char(ch)
            }
            _ => {}
        },
    }
    None
}

fn draw_picker(
    frame: &mut ratatui::Frame,
    app: &PickerState,
    config: &UiConfig,
    theme: &Theme,
    page_size: usize,
) {
    let mut constraints = Vec::new();
    let mut search_index = None;
    let mut help_index = None;

    if config.show_search {
        search_index = Some(constraints.len());
        constraints.push(Constraint::Length(3));
    }
    let list_index = constraints.len();
    let list_height = u16::try_from(page_size).unwrap_or(u16::MAX).saturating_add(2);
    constraints.push(Constraint::Max(list_height));
    if config.show_help {
        help_index = Some(constraints.len());
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    if let Some(index) = search_index {
        let search = Paragraph::new(format!("/{}", app.filter))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title("Filter"),
            );
        frame.render_widget(search, chunks[index]);

        if app.mode() == InputMode::Search {
            let cursor_x = chunks[index].x + 2 + app.filter.chars().count() as u16;
            let cursor_y = chunks[index].y + 1;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }

    let items: Vec<ListItem> = app
        .filtered_paths()
        .into_iter()
        .map(|path| ListItem::new(path.to_string()))
        .collect();
    let title = format!(
        "{} ({}/{})",
        config.title,
        app.selected_index().map(|idx| idx + 1).unwrap_or(0),
        items.len()
    );
    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.selected_index());
    frame.render_stateful_widget(list, chunks[list_index], &mut state);

    if let Some(index) = help_index {
        let help = Paragraph::new(mode_help_text(app.mode(), app.searchable()))
            .style(Style::default().fg(theme.help));
        frame.render_widget(help, chunks[index]);
    }
}

fn mode_help_text(mode: InputMode, searchable: bool) -> &'static str {
    match mode {
        InputMode::Normal if searchable => {
            "j/k move | PgUp/PgDn page | g/G top/bottom | / filter | Enter choose | Esc/q cancel"
        }
        InputMode::Normal => "j/k move | PgUp/PgDn page | g/G top/bottom | Enter choose | Esc/q cancel",
        InputMode::Search => "Type to filter | Up/Down move | Enter choose | Esc stop filtering",
    }
}

fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" | "dark_gray" => Color::DarkGray,
        "lightred" | "light_red" => Color::LightRed,
        "lightgreen" | "light_green" => Color::LightGreen,
        "lightyellow" | "light_yellow" => Color::LightYellow,
        "lightblue" | "light_blue" => Color::LightBlue,
        "lightmagenta" | "light_magenta" => Color::LightMagenta,
        "lightcyan" | "light_cyan" => Color::LightCyan,
        _ => Color::White,
    }
}
