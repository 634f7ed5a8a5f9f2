//! TUI application state and event loop
//!
//! The app wraps one [`Game`], a judge handle and the focused-cell cursor.
//! Keystrokes edit the active row; Enter submits it. Focus movement goes
//! through the navigation policy in the game module, never ad hoc.

use crate::game::{Game, GameStatus, NavKey, SubmitOutcome, navigation_target};
use crate::judge::Judge;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game,
    judge: &'a dyn Judge,
    /// Cell of the active row that holds input focus
    pub cursor: usize,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game, judge: &'a dyn Judge) -> Self {
        Self {
            game,
            judge,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Type a character into the focused cell and move focus forward
    ///
    /// Only alphanumerics land in cells (letter validity is checked at
    /// submission, so a typed digit is representable and rejected then).
    pub fn type_char(&mut self, ch: char) {
        if !ch.is_ascii_alphanumeric() {
            return;
        }
        if self.game.type_letter(self.cursor, ch) {
            self.move_focus(NavKey::Input);
        }
    }

    /// Erase at the cursor; an already-empty cell erases the one before it
    pub fn erase(&mut self) {
        let at_empty_cell = self
            .game
            .active_row()
            .is_some_and(|row| row.letter_at(self.cursor).is_none());
        if at_empty_cell {
            self.move_focus(NavKey::Backward);
        }
        self.game.erase_letter(self.cursor);
    }

    /// Move input focus per the navigation policy
    pub fn move_focus(&mut self, key: NavKey) {
        if let Some(next) = navigation_target(self.cursor, self.game.word_length(), key) {
            self.cursor = next;
        }
    }

    /// Submit the active row; a newly activated row takes focus at cell 0
    pub fn submit(&mut self) {
        if let SubmitOutcome::Advanced { .. } = self.game.submit_active(self.judge) {
            self.cursor = 0;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let game_over = app.game.status() != GameStatus::InProgress;
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('q' | 'Q') if game_over => {
                    app.should_quit = true;
                }
                KeyCode::Char(ch) if !game_over => {
                    app.type_char(ch);
                }
                KeyCode::Backspace if !game_over => {
                    app.erase();
                }
                KeyCode::Left if !game_over => {
                    app.move_focus(NavKey::Backward);
                }
                KeyCode::Right if !game_over => {
                    app.move_focus(NavKey::Forward);
                }
                KeyCode::Enter if !game_over => {
                    app.submit();
                }
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
    use crate::core::{Feedback, LetterResult, LetterStatus};
    use crate::judge::{JudgeError, JudgeReply, Verdict};

    struct FixedJudge(JudgeReply);

    impl Judge for FixedJudge {
        fn judge(&self, _guess: &str) -> Result<JudgeReply, JudgeError> {
            Ok(self.0.clone())
        }
    }

    fn mixed_judge() -> FixedJudge {
        let mut statuses = vec![LetterStatus::Absent; 5];
        statuses[0] = LetterStatus::Present;
        FixedJudge(JudgeReply {
            verdict: Verdict::Ok,
            message: "Scored".to_string(),
            feedback: Some(Feedback::new(
                statuses
                    .into_iter()
                    .map(|status| LetterResult { letter: 'x', status })
                    .collect(),
            )),
        })
    }

    fn app_with(judge: &dyn Judge) -> App<'_> {
        App::new(Game::new(5, 5).unwrap(), judge)
    }

    #[test]
    fn typing_fills_cells_and_moves_focus() {
        let judge = mixed_judge();
        let mut app = app_with(&judge);

        app.type_char('c');
        app.type_char('a');
        assert_eq!(app.cursor, 2);
        assert_eq!(app.game.rows()[0].candidate(), "ca");
    }

    #[test]
    fn focus_stays_on_last_cell() {
        let judge = mixed_judge();
        let mut app = app_with(&judge);

        for ch in "crane".chars() {
            app.type_char(ch);
        }
        assert_eq!(app.cursor, 4);
        assert_eq!(app.game.rows()[0].candidate(), "crane");
    }

    #[test]
    fn non_alphanumeric_keys_are_ignored() {
        let judge = mixed_judge();
        let mut app = app_with(&judge);

        app.type_char('!');
        app.type_char(' ');
        assert_eq!(app.cursor, 0);
        assert_eq!(app.game.rows()[0].candidate(), "");
    }

    #[test]
    fn erase_on_empty_cell_steps_back_first() {
        let judge = mixed_judge();
        let mut app = app_with(&judge);

        app.type_char('c');
        app.type_char('a');
        // Cursor sits on the empty cell 2; erasing removes the 'a' behind it.
        app.erase();
        assert_eq!(app.cursor, 1);
        assert_eq!(app.game.rows()[0].candidate(), "c");
    }

    #[test]
    fn advancing_resets_focus_to_first_cell() {
        let judge = mixed_judge();
        let mut app = app_with(&judge);

        for ch in "crane".chars() {
            app.type_char(ch);
        }
        app.submit();

        assert_eq!(app.game.active_row_index(), Some(1));
        assert_eq!(app.cursor, 0);
    }
}
