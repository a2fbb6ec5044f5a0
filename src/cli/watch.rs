//! Watch command implementation - Interactive TUI explorer.

use super::CliError;
use betza::{Board, Move, MoveType, Offset};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::time::Duration;

const MIN_BOARD: u16 = 5;
const MAX_BOARD: u16 = 21;

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error for a zero board size or if the TUI fails.
pub(crate) fn execute(notation: String, board_size: u16) -> Result<(), CliError> {
    let size = board_size.clamp(MIN_BOARD, MAX_BOARD);
    let board = Board::new(size).ok_or_else(|| CliError::new("board size must be positive"))?;

    let mut app = App::new(notation, board);
    app.recompute();

    run_tui(&mut app)
}

/// App state for the TUI.
struct App {
    input: String,
    board: Board,
    cursor: Offset,
    moves: Vec<Move>,
}

impl App {
    fn new(input: String, board: Board) -> Self {
        Self {
            input,
            board,
            cursor: Offset::new(0, 0),
            moves: Vec::new(),
        }
    }

    fn recompute(&mut self) {
        self.moves = betza::compile_on_board(&self.input, self.board.size());
    }

    fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.recompute();
    }

    fn pop_char(&mut self) {
        self.input.pop();
        self.recompute();
    }

    fn resize(&mut self, grow: bool) {
        let size = if grow {
            (self.board.size() + 2).min(MAX_BOARD)
        } else {
            self.board.size().saturating_sub(2).max(MIN_BOARD)
        };
        if size == self.board.size() {
            return;
        }
        let Some(mut resized) = Board::new(size) else {
            return;
        };
        // Blockers that still fit carry over; toggle ignores the rest.
        for blocker in self.board.blockers() {
            resized.toggle_blocker(blocker);
        }
        self.board = resized;
        let half = self.board.half_extent();
        self.cursor = Offset::new(self.cursor.x.clamp(-half, half), self.cursor.y.clamp(-half, half));
        self.recompute();
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let half = self.board.half_extent();
        self.cursor = Offset::new(
            (self.cursor.x + dx).clamp(-half, half),
            (self.cursor.y + dy).clamp(-half, half),
        );
    }

    fn toggle_blocker(&mut self) {
        self.board.toggle_blocker(self.cursor);
    }
}

fn run_tui(app: &mut App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Left => app.move_cursor(-1, 0),
                KeyCode::Right => app.move_cursor(1, 0),
                KeyCode::Up => app.move_cursor(0, 1),
                KeyCode::Down => app.move_cursor(0, -1),
                KeyCode::Char(' ') => app.toggle_blocker(),
                KeyCode::Char('+' | '=') => app.resize(true),
                KeyCode::Char('-') => app.resize(false),
                KeyCode::Char(c) if c.is_ascii_alphanumeric() => app.push_char(c),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Notation input
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_input(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app);
    render_stats(f, main_chunks[1], app);

    render_footer(f, chunks[2]);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let input = Paragraph::new(format!(" {}_", app.input))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Notation "));

    f.render_widget(input, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let half = app.board.half_extent();
    let reachable = app.board.reachable_moves(&app.moves);

    let mut lines: Vec<Line> = Vec::new();
    for y in (-half..=half).rev() {
        let mut spans = vec![Span::raw(" ")];
        for x in -half..=half {
            let square = Offset::new(x, y);
            let (ch, color) = square_char_color(app, &reachable, square);
            let mut style = Style::default().fg(color);
            if square == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(ch.to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let title = format!(" Board {0}x{0} ", app.board.size());
    let board_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(board_widget, area);
}

fn square_char_color(app: &App, reachable: &[&Move], square: Offset) -> (char, Color) {
    if square == Offset::new(0, 0) {
        return ('@', Color::Yellow);
    }

    // Later records win, matching the ASCII renderer.
    let mut marker = None;
    for mv in reachable {
        if mv.offset == square {
            marker = Some(mv.move_type);
        }
    }
    if let Some(move_type) = marker {
        return match move_type {
            MoveType::MoveCapture => ('x', Color::Green),
            MoveType::Move => ('m', Color::Cyan),
            MoveType::Capture => ('c', Color::Red),
        };
    }

    if app.board.is_blocked(square) {
        ('o', Color::White)
    } else {
        ('·', Color::DarkGray)
    }
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let reachable = app.board.reachable_moves(&app.moves);
    let count_of = |wanted: MoveType| reachable.iter().filter(|m| m.move_type == wanted).count();

    let lines = vec![
        Line::from(""),
        Line::from(format!("  Records:    {}", app.moves.len())),
        Line::from(format!("  Reachable:  {}", reachable.len())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  x ", Style::default().fg(Color::Green)),
            Span::raw(format!("move+capture  {}", count_of(MoveType::MoveCapture))),
        ]),
        Line::from(vec![
            Span::styled("  m ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("move only     {}", count_of(MoveType::Move))),
        ]),
        Line::from(vec![
            Span::styled("  c ", Style::default().fg(Color::Red)),
            Span::raw(format!("capture only  {}", count_of(MoveType::Capture))),
        ]),
        Line::from(""),
        Line::from(format!("  Blockers:   {}", app.board.blockers().count())),
        Line::from(format!(
            "  Cursor:     ({}, {})",
            app.cursor.x, app.cursor.y
        )),
    ];

    let stats_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Moves "))
        .wrap(Wrap { trim: false });

    f.render_widget(stats_widget, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let controls =
        " [a-z A-Z 0-9] Edit notation  [Bksp] Delete  [Arrows] Cursor  [Space] Blocker  [+/-] Board size  [Esc] Quit ";

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
