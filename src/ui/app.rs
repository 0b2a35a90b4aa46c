//! Main TUI application state and logic

use crate::parser::{ParseError, Parser, SyntaxTree, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Tokens,
    Tree,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> tokens -> tree -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::History,
            FocusedPane::History => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::History,
            FocusedPane::Tokens => FocusedPane::Input,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::History => FocusedPane::Tree,
        }
    }
}

/// Result of the most recent parse, with the tokens it saw.
#[derive(Debug)]
pub struct Outcome {
    pub expression: String,
    pub tokens: Vec<Token>,
    pub result: Result<SyntaxTree, ParseError>,
}

/// One submitted expression and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub output: String,
    pub accepted: bool,
}

/// The main application state
pub struct App {
    parser: Parser,

    /// Expression being edited
    pub input: String,

    /// Last parse, if any
    pub outcome: Option<Outcome>,

    pub history: Vec<HistoryEntry>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            parser: Parser::new(),
            input: String::new(),
            outcome: None,
            history: Vec::new(),
            focused_pane: FocusedPane::Input,
            tokens_scroll: 0,
            tree_scroll: 0,
            history_scroll: 0,
            should_quit: false,
            status_message: String::from("Type an expression and press Enter"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input, result, panes, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(40),
                Constraint::Percentage(35),
            ])
            .split(rows[2]);

        super::panes::render_input_pane(
            frame,
            rows[0],
            &self.input,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_result_pane(frame, rows[1], self.outcome.as_ref());

        let tokens = self.outcome.as_ref().map_or(&[][..], |o| o.tokens.as_slice());
        super::panes::render_tokens_pane(
            frame,
            columns[0],
            tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        let tree = self.outcome.as_ref().and_then(|o| o.result.as_ref().ok());
        super::panes::render_tree_pane(
            frame,
            columns[1],
            tree,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_history_pane(
            frame,
            columns[2],
            &self.history,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        let accepted = self.history.iter().filter(|h| h.accepted).count();
        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            accepted,
            self.history.len() - accepted,
            self.outcome.as_ref().is_some_and(|o| o.result.is_err()),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> Option<&mut usize> {
        match self.focused_pane {
            FocusedPane::Input => None,
            FocusedPane::Tokens => Some(&mut self.tokens_scroll),
            FocusedPane::Tree => Some(&mut self.tree_scroll),
            FocusedPane::History => Some(&mut self.history_scroll),
        }
    }

    /// Parse the current input and record the outcome.
    pub fn submit(&mut self) {
        let expression = std::mem::take(&mut self.input);
        let result = self.parser.parse(&expression);

        let (output, accepted) = match &result {
            Ok(tree) => {
                self.status_message = format!("Parsed {} tokens", self.parser.tokens().len());
                (tree.print_tree(), true)
            }
            Err(e) => {
                self.status_message = format!("Rejected ({} error)", e.kind());
                (e.to_string(), false)
            }
        };

        self.history.push(HistoryEntry {
            expression: expression.clone(),
            output,
            accepted,
        });
        self.outcome = Some(Outcome {
            expression,
            tokens: self.parser.tokens().to_vec(),
            result,
        });

        self.tokens_scroll = 0;
        self.tree_scroll = 0;
        // Keep the newest history entry in view
        self.history_scroll = usize::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_submit() {
        let mut app = App::new();
        type_text(&mut app, "x-2*y");
        assert_eq!(app.input, "x-2*y");

        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.input.is_empty());

        let outcome = app.outcome.as_ref().unwrap();
        assert_eq!(outcome.expression, "x-2*y");
        assert_eq!(outcome.tokens.len(), 5);
        assert_eq!(outcome.result.as_ref().unwrap().print_tree(), "-x*2y");
        assert_eq!(
            app.history,
            vec![HistoryEntry {
                expression: "x-2*y".to_string(),
                output: "-x*2y".to_string(),
                accepted: true,
            }]
        );
    }

    #[test]
    fn test_rejected_expression() {
        let mut app = App::new();
        type_text(&mut app, "a/b-*");
        app.submit();

        assert!(app.outcome.as_ref().unwrap().result.is_err());
        assert!(!app.history[0].accepted);
        assert_eq!(app.status_message, "Rejected (syntax error)");
    }

    #[test]
    fn test_backspace_and_quit() {
        let mut app = App::new();
        type_text(&mut app, "ab");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.input, "a");
        assert!(!app.should_quit);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_focus_cycle_and_scroll() {
        let mut app = App::new();
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.tokens_scroll, 1);

        app.handle_key_event(key(KeyCode::BackTab));
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.focused_pane, FocusedPane::History);
    }

    #[test]
    fn test_render_shows_prefix_and_tokens() {
        let mut app = App::new();
        type_text(&mut app, "a + 35 - b");
        app.submit();

        let text = screen(&mut app);
        assert!(text.contains("-+a35b"));
        assert!(text.contains("number"));
        assert!(text.contains("expr_prime"));
        assert!(text.contains("1 ok / 0 failed"));
    }
}
