//! TUI label-jump demo
//!
//! A read-only terminal file viewer built with crossterm and ratatui that runs label-jump
//! sessions against a `label_jump_buffer::Document`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-jump -- <file_path>
//!
//! # custom alphabet / styles, debug log
//! export LABEL_JUMP_CONFIG=jump.toml LABEL_JUMP_LOG=/tmp/jump.log RUST_LOG=debug
//! cargo run -p tui-jump -- foo.rs
//! ```
//!
//! # Keys
//!
//! - Arrows: move caret (Shift extends the selection)
//! - Home/End: line start/end
//! - PageUp/PageDown: scroll
//! - Ctrl+G: start_jump
//! - Ctrl+E: start_select
//! - Ctrl+N: start_multi_jump
//! - Ctrl+L: fold the next 5 lines under the caret
//! - Ctrl+U: unfold all
//! - Ctrl+Q: quit
//!
//! While a session is open, typed characters and Backspace edit the query, Enter accepts and
//! Esc cancels.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use label_jump::{JumpCommand, JumpConfig, LabelStyle, Mode, Session, SessionState, Status, start};
use label_jump_buffer::{BufferHost, Document, Position};
use log::{info, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env, fs,
    io::{self, stdout},
    path::PathBuf,
    process,
    str::FromStr,
    sync::Arc,
    time::Duration,
};
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 4;
const FOLD_LINES: usize = 5;
const CHORD_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::ALT);

struct App {
    document: Document,
    file_path: PathBuf,
    config: Arc<JumpConfig>,
    /// Open jump session, if any.
    session: Option<Session<Position>>,
    /// Query line contents while a session is open.
    query: String,
    status_message: String,
    should_quit: bool,
}

impl App {
    fn new(file_path: PathBuf) -> io::Result<Self> {
        let content = fs::read_to_string(&file_path)?;

        let mut status_message = String::new();
        let config = match env::var("LABEL_JUMP_CONFIG") {
            Ok(path) => match JumpConfig::load(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!("failed to load {}: {}", path, err);
                    status_message = format!("Config {} ignored: {}", path, err);
                    JumpConfig::default()
                }
            },
            Err(_) => JumpConfig::default(),
        };

        Ok(Self {
            document: Document::new(&content, 0),
            file_path,
            config: Arc::new(config),
            session: None,
            query: String::new(),
            status_message,
            should_quit: false,
        })
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.session.is_some() {
            self.handle_session_key(key);
        } else {
            self.handle_normal_key(key);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('g') if ctrl => self.start_session(JumpCommand::Jump),
            KeyCode::Char('e') if ctrl => self.start_session(JumpCommand::Select),
            KeyCode::Char('n') if ctrl => self.start_session(JumpCommand::MultiJump),
            KeyCode::Char('l') if ctrl => {
                let line = self.document.cursor_position().line;
                if self.document.fold(line, line + FOLD_LINES) {
                    self.status_message = self.fold_message(line);
                }
            }
            KeyCode::Char('u') if ctrl => {
                self.document.unfold_all();
                self.status_message = "Unfolded all".to_string();
            }
            KeyCode::Left => self.move_caret(shift, step_left),
            KeyCode::Right => self.move_caret(shift, step_right),
            KeyCode::Up => self.move_caret(shift, step_up),
            KeyCode::Down => self.move_caret(shift, step_down),
            KeyCode::Home => self.move_caret(shift, |_, pos| Position::new(pos.line, 0)),
            KeyCode::End => self.move_caret(shift, step_end),
            KeyCode::PageUp => {
                let page = self.document.viewport().height.max(1);
                let top = self.document.viewport().scroll_top.saturating_sub(page);
                self.document.set_scroll_top(top);
            }
            KeyCode::PageDown => {
                let page = self.document.viewport().height.max(1);
                let top = self.document.viewport().scroll_top + page;
                self.document.set_scroll_top(top);
            }
            _ => {}
        }
    }

    fn handle_session_key(&mut self, key: KeyEvent) {
        let chorded = key.modifiers.intersects(CHORD_MODIFIERS);
        match key.code {
            KeyCode::Esc => self.transition(|session, host, _| session.on_cancel(host)),
            KeyCode::Enter => self.transition(|session, host, _| session.on_accept(host)),
            KeyCode::Backspace => {
                self.query.pop();
                self.transition(|session, host, query| session.on_query_changed(host, query));
            }
            KeyCode::Char(ch) if !chorded => {
                self.query.push(ch);
                self.transition(|session, host, query| session.on_query_changed(host, query));
            }
            _ => {}
        }
    }

    fn start_session(&mut self, command: JumpCommand) {
        let mut host = BufferHost::new(&mut self.document);
        self.session = start(command, Some(&mut host), Arc::clone(&self.config));
        self.status_message = host.status().map(|s| s.to_string()).unwrap_or_default();
        self.query.clear();
        info!("{} opened", command);
    }

    /// Run one session transition against the document and tear the session down if it ended.
    fn transition<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut Session<Position>, &mut BufferHost<'_>, &str) -> SessionState,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let mut host = BufferHost::new(&mut self.document);
        let state = apply(session, &mut host, &self.query);
        if let Some(reset) = host.take_query_reset() {
            self.query = reset;
        }
        let status = host.status();

        match state {
            SessionState::Open => {
                if let Some(status) = status {
                    self.status_message = status.to_string();
                }
            }
            SessionState::Committed => {
                self.status_message = match session.mode() {
                    Mode::Jump => "Jumped".to_string(),
                    Mode::Select => "Selected".to_string(),
                    Mode::MultiJump => format!("{} cursors", self.document.selections().len()),
                };
                self.end_session();
            }
            SessionState::Cancelled => {
                self.status_message = "Cancelled".to_string();
                self.end_session();
            }
        }
        self.adjust_scroll();
    }

    fn end_session(&mut self) {
        self.session = None;
        self.query.clear();
    }

    fn move_caret<F>(&mut self, extend: bool, step: F)
    where
        F: FnOnce(&Document, Position) -> Position,
    {
        let primary = self.document.primary_selection();
        let target = step(&self.document, primary.end);
        if extend {
            self.document.set_selection(primary.start, target);
        } else {
            self.document.set_cursor(target);
        }
        self.status_message.clear();
        self.adjust_scroll();
    }

    /// Status text for the fold whose header is `line`.
    fn fold_message(&self, line: usize) -> String {
        match self.document.folds().iter().find(|f| f.start_line == line) {
            Some(fold) => format!("Folded lines {}-{}", fold.start_line + 2, fold.end_line + 1),
            None => String::new(),
        }
    }

    /// Keep the caret line inside the viewport.
    fn adjust_scroll(&mut self) {
        let line = self.document.cursor_position().line;
        let viewport = self.document.viewport();
        if line < viewport.scroll_top {
            self.document.set_scroll_top(line);
            return;
        }
        if viewport.height == 0 {
            return;
        }
        while !self.document.visible_lines().contains(&line)
            && self.document.viewport().scroll_top < line
        {
            let top = self.document.viewport().scroll_top;
            self.document.set_scroll_top(top + 1);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let editor_area = chunks[0];
        let viewport_height = editor_area.height.saturating_sub(2) as usize;
        if viewport_height != self.document.viewport().height {
            self.document.set_viewport_height(viewport_height);
            self.adjust_scroll();
        }

        self.render_document(frame, editor_area);
        self.render_status_line(frame, chunks[1]);
        self.render_shortcuts(frame, chunks[2]);
    }

    fn render_document(&self, frame: &mut Frame, area: Rect) {
        let visible = self.document.visible_lines();
        let display_lines: Vec<Line> = visible.iter().map(|&l| self.render_line(l)).collect();

        let paragraph = Paragraph::new(display_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.file_path.display())),
        );
        frame.render_widget(paragraph, area);

        let cursor = self.document.cursor_position();
        let Some(row) = visible.iter().position(|&line| line == cursor.line) else {
            return;
        };
        let line_text = self.document.line_text(cursor.line).unwrap_or_default();
        let x: usize = line_text.chars().take(cursor.column).map(cell_width).sum();

        if self.session.is_none() {
            frame.set_cursor_position(cursor_cell(area, x, row));
        }
    }

    fn render_line(&self, line: usize) -> Line<'static> {
        let text = self.document.line_text(line).unwrap_or_default();
        let selections = self.document.selections();
        let primary = self.document.cursor_position();
        let is_secondary_caret =
            |pos: Position| pos != primary && selections.iter().any(|s| s.end == pos);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (column, ch) in text.chars().enumerate() {
            let pos = Position::new(line, column);
            let width = cell_width(ch);

            if let Some(label) = self.document.label_at(pos) {
                let glyph_width = cell_width(label.glyph);
                let mut cell = label.glyph.to_string();
                cell.push_str(&" ".repeat(width.saturating_sub(glyph_width)));
                spans.push(Span::styled(cell, style_for_label(&label.style)));
                continue;
            }

            let mut style = Style::default();
            let selected = selections.iter().any(|s| {
                let (start, end) = s.min_max();
                !s.is_caret() && start <= pos && pos < end
            });
            if selected {
                style = style.bg(Color::Blue).fg(Color::White);
            }
            if is_secondary_caret(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let cell = if ch == '\t' {
                " ".repeat(TAB_WIDTH)
            } else {
                ch.to_string()
            };
            spans.push(Span::styled(cell, style));
        }

        let eol = Position::new(line, text.chars().count());
        if is_secondary_caret(eol) {
            spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
        }
        if self.document.folds().iter().any(|f| f.start_line == line) {
            spans.push(Span::styled(" [...]", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let status_text = match &self.session {
            Some(session) => {
                let status = if self.status_message.is_empty() {
                    Status::Prompt.to_string()
                } else {
                    self.status_message.clone()
                };
                let title = session_title(session.mode());
                format!("{} > {}  | {}", title, self.query, status)
            }
            None if !self.status_message.is_empty() => self.status_message.clone(),
            None => {
                let cursor = self.document.cursor_position();
                format!(
                    "Ln {} Col {} | cursors {} | lines {}",
                    cursor.line + 1,
                    cursor.column + 1,
                    self.document.selections().len(),
                    self.document.line_count()
                )
            }
        };

        let status_line = Paragraph::new(status_text).style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status_line, area);
    }

    fn render_shortcuts(&self, frame: &mut Frame, area: Rect) {
        let shortcuts = if self.session.is_some() {
            "Type to search, uppercase labels to pick  Enter:accept  Esc:cancel  Backspace:edit"
        } else {
            "Ctrl-G:jump  Ctrl-E:select  Ctrl-N:multi-jump  Ctrl-L/U:fold/unfold  Ctrl-Q:quit"
        };
        let shortcuts_line =
            Paragraph::new(shortcuts).style(Style::default().bg(Color::Blue).fg(Color::White));
        frame.render_widget(shortcuts_line, area);
    }
}

/// Terminal cell of the caret `x` cells into the `row`-th line of the bordered `area`.
fn cursor_cell(area: Rect, x: usize, row: usize) -> (u16, u16) {
    let x = u16::try_from(x).unwrap_or(u16::MAX);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let inner_right = area.x.saturating_add(area.width.saturating_sub(2));
    let inner_bottom = area.y.saturating_add(area.height.saturating_sub(2));
    let left = area.x.saturating_add(1);
    let top = area.y.saturating_add(1);
    (
        left.saturating_add(x).min(inner_right),
        top.saturating_add(row).min(inner_bottom),
    )
}

fn step_left(doc: &Document, pos: Position) -> Position {
    if pos.column > 0 {
        return Position::new(pos.line, pos.column - 1);
    }
    step_line(doc, pos.line, false)
        .map(|line| Position::new(line, doc.line_len(line)))
        .unwrap_or(pos)
}

fn step_right(doc: &Document, pos: Position) -> Position {
    if pos.column < doc.line_len(pos.line) {
        return Position::new(pos.line, pos.column + 1);
    }
    step_line(doc, pos.line, true)
        .map(|line| Position::new(line, 0))
        .unwrap_or(pos)
}

fn step_end(doc: &Document, pos: Position) -> Position {
    Position::new(pos.line, doc.line_len(pos.line))
}

fn step_up(doc: &Document, pos: Position) -> Position {
    step_line(doc, pos.line, false)
        .map(|line| doc.clamp(Position::new(line, pos.column)))
        .unwrap_or(pos)
}

fn step_down(doc: &Document, pos: Position) -> Position {
    step_line(doc, pos.line, true)
        .map(|line| doc.clamp(Position::new(line, pos.column)))
        .unwrap_or(pos)
}

/// Next (or previous) line that is not hidden by a fold.
fn step_line(doc: &Document, line: usize, forward: bool) -> Option<usize> {
    let mut candidate = line;
    loop {
        candidate = if forward {
            candidate.checked_add(1).filter(|&l| l < doc.line_count())?
        } else {
            candidate.checked_sub(1)?
        };
        if !doc.is_line_hidden(candidate) {
            return Some(candidate);
        }
    }
}

fn cell_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

fn session_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Jump => "Jump",
        Mode::Select => "Select",
        Mode::MultiJump => "Multi-jump",
    }
}

fn style_for_label(style: &LabelStyle) -> Style {
    let parse = |name: &Option<String>| name.as_deref().and_then(|c| Color::from_str(c).ok());

    let mut out = Style::default();
    if let Some(fg) = parse(&style.foreground) {
        out = out.fg(fg);
    }
    if let Some(bg) = parse(&style.background) {
        out = out.bg(bg);
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}

/// Log to the file named by `LABEL_JUMP_LOG`; the terminal itself is taken by the UI.
fn init_logging() -> io::Result<()> {
    let Ok(path) = env::var("LABEL_JUMP_LOG") else {
        return Ok(());
    };
    let file = fs::File::create(path)?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let Some(file_path) = env::args().nth(1) else {
        eprintln!("usage: tui-jump <file_path>");
        process::exit(1);
    };

    init_logging()?;
    let mut app = App::new(PathBuf::from(file_path))?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }
    }

    Ok(())
}
