//! TUI application state and logic

use crate::commands::{SolveConfig, SolveResult, solve_ladder};
use crate::core::Dictionary;
use crate::solver::SearchOutcome;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub start_input: String,
    pub goal_input: String,
    pub focus: InputField,
    pub current: Option<SolveResult>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Start,
    Goal,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub start: String,
    pub goal: String,
    /// Ladder length in words, `None` when no ladder was found
    pub length: Option<usize>,
    pub expansions: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub searches: usize,
    pub found: usize,
    pub total_expansions: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            start_input: String::new(),
            goal_input: String::new(),
            focus: InputField::Start,
            current: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a start word, TAB to the goal, ENTER to search.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            InputField::Start => &mut self.start_input,
            InputField::Goal => &mut self.goal_input,
        }
    }

    /// Append a letter to the focused field; anything else is ignored
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            let lower = c.to_ascii_lowercase();
            self.focused_input().push(lower);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Start => InputField::Goal,
            InputField::Goal => InputField::Start,
        };
    }

    /// Exchange start and goal
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.start_input, &mut self.goal_input);
    }

    /// Clear inputs and the current ladder
    pub fn reset(&mut self) {
        self.start_input.clear();
        self.goal_input.clear();
        self.focus = InputField::Start;
        self.current = None;
        self.add_message("Cleared. Enter a new pair.", MessageStyle::Info);
    }

    /// Search for a ladder between the two inputs
    pub fn submit(&mut self) {
        let config = SolveConfig::new(self.start_input.clone(), self.goal_input.clone());

        match solve_ladder(config, self.dictionary) {
            Ok(result) => {
                self.stats.searches += 1;
                self.stats.total_expansions += result.stats.expansions;

                let length = result.outcome.ladder().map(crate::core::Ladder::len);
                match &result.outcome {
                    SearchOutcome::Found(ladder) => {
                        self.stats.found += 1;
                        let text = format!(
                            "Found {} → {} in {} steps.",
                            result.start.to_uppercase(),
                            result.goal.to_uppercase(),
                            ladder.steps()
                        );
                        self.add_message(&text, MessageStyle::Success);
                    }
                    SearchOutcome::NoPath | SearchOutcome::Aborted { .. } => {
                        let text = format!(
                            "No path exists from {} to {}.",
                            result.start.to_uppercase(),
                            result.goal.to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                    }
                }

                self.history.push(HistoryEntry {
                    start: result.start.clone(),
                    goal: result.goal.clone(),
                    length,
                    expansions: result.stats.expansions,
                });
                self.current = Some(result);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Dictionary words sharing the start word's length
    #[must_use]
    pub fn same_length_count(&self) -> usize {
        let len = self
            .current
            .as_ref()
            .map_or(self.start_input.len(), |r| r.start.len());
        self.dictionary.words_of_length(len).len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('r') if ctrl => app.reset(),
                KeyCode::Char('s') if ctrl => app.swap(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_slice;

    fn dict() -> Dictionary {
        dictionary_from_slice(&["cat", "cot", "cog", "dog", "zen"])
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let d = dict();
        let mut app = App::new(&d);

        type_word(&mut app, "CAT");
        app.toggle_focus();
        type_word(&mut app, "d0g");

        assert_eq!(app.start_input, "cat");
        assert_eq!(app.goal_input, "dg");
        app.backspace();
        assert_eq!(app.goal_input, "d");
    }

    #[test]
    fn submit_records_found_ladder() {
        let d = dict();
        let mut app = App::new(&d);
        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "dog");

        app.submit();

        let result = app.current.as_ref().unwrap();
        assert!(result.success());
        assert_eq!(app.stats.searches, 1);
        assert_eq!(app.stats.found, 1);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].length, Some(4));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn submit_reports_no_path() {
        let d = dict();
        let mut app = App::new(&d);
        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "zen");

        app.submit();

        assert_eq!(app.stats.found, 0);
        assert_eq!(app.history[0].length, None);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn submit_invalid_query_keeps_state() {
        let d = dict();
        let mut app = App::new(&d);
        type_word(&mut app, "cat");

        app.submit();

        assert!(app.current.is_none());
        assert_eq!(app.stats.searches, 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn swap_and_reset() {
        let d = dict();
        let mut app = App::new(&d);
        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "dog");

        app.swap();
        assert_eq!(app.start_input, "dog");
        assert_eq!(app.goal_input, "cat");

        app.reset();
        assert!(app.start_input.is_empty());
        assert!(app.goal_input.is_empty());
        assert_eq!(app.focus, InputField::Start);
    }

    #[test]
    fn messages_are_capped() {
        let d = dict();
        let mut app = App::new(&d);
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "msg 9");
    }
}
