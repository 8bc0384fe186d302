// ui.rs - Terminal rendering and key handling with crossterm

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::game::GameOfLife;

/// Header row, blank row, grid, blank row, stats row.
const CHROME_ROWS: usize = 4;

#[derive(Debug, Error)]
pub enum UiError {
    #[error(
        "terminal is {cols}x{rows} but a {grid_rows}x{grid_cols} grid needs at least \
         {needed_cols}x{needed_rows}; enlarge the window or pass smaller --rows/--cols"
    )]
    TooSmall {
        cols: u16,
        rows: u16,
        grid_rows: usize,
        grid_cols: usize,
        needed_cols: usize,
        needed_rows: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Owns the terminal while the simulation runs: raw mode, alternate screen
/// and hidden cursor are all undone on drop.
pub struct Screen {
    stdout: Stdout,
    glyph: char,
}

impl Screen {
    pub fn enter(glyph: char) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout, glyph })
    }

    /// Draws one full frame. Fails if the terminal cannot hold the grid.
    pub fn draw(&mut self, game: &GameOfLife) -> Result<(), UiError> {
        let (cols, rows) = terminal::size()?;
        let lines = frame_lines(game, self.glyph);
        check_fits(game, &lines, cols, rows)?;

        queue!(self.stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if y == 0 {
                queue!(self.stdout, SetForegroundColor(Color::Cyan), Print(line), ResetColor)?;
            } else {
                queue!(self.stdout, Print(line))?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Every line of a frame, top to bottom.
pub fn frame_lines(game: &GameOfLife, glyph: char) -> Vec<String> {
    let grid = game.grid();
    let mut lines = Vec::with_capacity(grid.rows() + CHROME_ROWS);
    lines.push(format!("Conway's Game of Life: tick {}", game.generation()));
    lines.push(String::new());
    lines.extend(grid.iter_rows().map(|row| render_row(row, glyph)));
    lines.push(String::new());
    lines.push(stats_line(game));
    lines
}

/// Live cells become `glyph`, dead cells a space, separated by single spaces.
pub fn render_row(cells: &[bool], glyph: char) -> String {
    let mut line = String::with_capacity(cells.len() * 2);
    for (i, &alive) in cells.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(if alive { glyph } else { ' ' });
    }
    line
}

fn stats_line(game: &GameOfLife) -> String {
    let grid = game.grid();
    let total = grid.rows() * grid.cols();
    let live = grid.live_count();
    format!(
        "Live cells: {}  Dead cells: {}  Population: {:.1}%  [{}]",
        live,
        total - live,
        live as f64 / total as f64 * 100.0,
        game.strategy()
    )
}

fn check_fits(game: &GameOfLife, lines: &[String], cols: u16, rows: u16) -> Result<(), UiError> {
    let needed_cols = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let needed_rows = lines.len();
    if needed_cols > usize::from(cols) || needed_rows > usize::from(rows) {
        return Err(UiError::TooSmall {
            cols,
            rows,
            grid_rows: game.grid().rows(),
            grid_cols: game.grid().cols(),
            needed_cols,
            needed_rows,
        });
    }
    Ok(())
}

/// `true` for the key presses that end the run: `q`, `Esc` or `Ctrl-C`.
pub fn is_quit_event(event: &Event) -> bool {
    matches!(event, Event::Key(key) if is_quit_key(key))
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
