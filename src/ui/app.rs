//! Harness application
//!
//! One button per debugger event; pressing a button plays that event's noise.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::audio::SoundCategory;

/// Height of a single button, borders included
const BUTTON_HEIGHT: u16 = 3;
/// Widest a button is drawn
const BUTTON_WIDTH: u16 = 30;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    /// Write the default noise config to the user's config directory
    ExportConfig,
}

/// Harness state
pub struct App {
    /// Highlighted button (index into `SoundCategory::ALL`)
    cursor: usize,
    /// Most recently pressed button
    last_pressed: Option<SoundCategory>,
    /// Total button presses this session
    presses: u32,
    /// One-off message shown in the status line
    status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            last_pressed: None,
            presses: 0,
            status: None,
        }
    }

    /// Currently highlighted category
    pub fn selected(&self) -> SoundCategory {
        SoundCategory::ALL[self.cursor]
    }

    pub fn last_pressed(&self) -> Option<SoundCategory> {
        self.last_pressed
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Replace the status line message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Handle a key press, calling `play` for any button pressed
    pub fn handle_input(&mut self, key: KeyEvent, play: &mut impl FnMut(SoundCategory)) -> Action {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('e') => return Action::ExportConfig,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < SoundCategory::ALL.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press(self.cursor, play);
            }
            KeyCode::Char(c) => {
                // 1-8 press the nth button directly
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize;
                    if (1..=SoundCategory::ALL.len()).contains(&index) {
                        self.cursor = index - 1;
                        self.press(self.cursor, play);
                    }
                }
            }
            _ => {}
        }

        Action::Continue
    }

    fn press(&mut self, index: usize, play: &mut impl FnMut(SoundCategory)) {
        let category = SoundCategory::ALL[index];
        play(category);
        self.last_pressed = Some(category);
        self.presses += 1;
        self.status = None;
    }

    /// Draw the harness
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(SoundCategory::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(2));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Debug Noises",
            Style::default().fg(Color::Rgb(180, 50, 50)).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        for (i, category) in SoundCategory::ALL.iter().enumerate() {
            self.render_button(frame, *category, i, chunks[i + 1]);
        }

        let status = match (&self.status, self.last_pressed) {
            (Some(message), _) => message.clone(),
            (None, Some(category)) => format!("Played {} ({} presses)", category, self.presses),
            (None, None) => "Press a button".to_string(),
        };
        let footer = vec![
            Line::from(Span::styled(status, Style::default().fg(Color::White))),
            Line::from(Span::styled(
                "[↑/↓] Move  [Enter] Play  [1-8] Quick  [E] Export config  [Q] Quit",
                Style::default().fg(Color::Rgb(100, 100, 100)),
            )),
        ];
        let footer_area = chunks[chunks.len() - 1];
        frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), footer_area);
    }

    fn render_button(&self, frame: &mut Frame, category: SoundCategory, index: usize, area: Rect) {
        let area = centered_width(BUTTON_WIDTH, area);
        let selected = index == self.cursor;

        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let button = Paragraph::new(Span::styled(format!("On {}", category), text_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(button, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontally center a column of at most `width` cells
fn centered_width(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_plays_selected() {
        let mut app = App::new();
        let mut played = Vec::new();
        let mut play = |c: SoundCategory| played.push(c);

        app.handle_input(key(KeyCode::Down), &mut play);
        app.handle_input(key(KeyCode::Down), &mut play);
        app.handle_input(key(KeyCode::Enter), &mut play);

        assert_eq!(played, [SoundCategory::ExceptionHit]);
        assert_eq!(app.last_pressed(), Some(SoundCategory::ExceptionHit));
        assert_eq!(app.presses(), 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = App::new();
        let mut play = |_: SoundCategory| {};

        app.handle_input(key(KeyCode::Up), &mut play);
        assert_eq!(app.selected(), SoundCategory::Breakpoint);

        for _ in 0..20 {
            app.handle_input(key(KeyCode::Char('j')), &mut play);
        }
        assert_eq!(app.selected(), SoundCategory::Start);
    }

    #[test]
    fn test_digits_press_buttons() {
        let mut app = App::new();
        let mut played = Vec::new();
        let mut play = |c: SoundCategory| played.push(c);

        app.handle_input(key(KeyCode::Char('4')), &mut play);
        app.handle_input(key(KeyCode::Char('8')), &mut play);
        app.handle_input(key(KeyCode::Char('9')), &mut play);
        app.handle_input(key(KeyCode::Char('0')), &mut play);

        assert_eq!(played, [SoundCategory::Step, SoundCategory::Start]);
        assert_eq!(app.selected(), SoundCategory::Start);
    }

    #[test]
    fn test_quit_and_export_keys() {
        let mut app = App::new();
        let mut play = |_: SoundCategory| panic!("nothing should play");

        assert_eq!(app.handle_input(key(KeyCode::Char('q')), &mut play), Action::Quit);
        assert_eq!(app.handle_input(key(KeyCode::Esc), &mut play), Action::Quit);
        assert_eq!(
            app.handle_input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), &mut play),
            Action::Quit
        );
        assert_eq!(app.handle_input(key(KeyCode::Char('e')), &mut play), Action::ExportConfig);
    }

    #[test]
    fn test_render_shows_every_button() {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        let app = App::new();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        for category in SoundCategory::ALL {
            let label = format!("On {}", category);
            assert!(screen.contains(&label), "missing button {}", label);
        }
    }
}
