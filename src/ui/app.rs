//! Main TUI application state and logic

use crate::playback::{PlaybackMode, Workbench};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Step,
    Log,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Step => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Step,
        }
    }
}

/// Which text field the editor writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Input,
    Param,
}

/// Uncommitted input while the user is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub field: EditField,
    pub input: String,
    pub param: String,
}

impl EditState {
    fn buffer(&mut self) -> &mut String {
        match self.field {
            EditField::Input => &mut self.input,
            EditField::Param => &mut self.param,
        }
    }
}

/// The main application state
pub struct App {
    /// The algorithm, its committed input and the session playing it
    pub workbench: Workbench,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub step_scroll: usize,
    /// Lines from the bottom of the log
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// `Some` while the input editor is open
    pub editing: Option<EditState>,

    /// Message of the last rejected apply
    pub input_error: Option<String>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(workbench: Workbench) -> Self {
        App {
            workbench,
            focused_pane: FocusedPane::Step,
            step_scroll: 0,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            editing: None,
            input_error: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive the auto-play timer
            self.update(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.workbench.session_mut().cancel_timer();
        Ok(())
    }

    /// Fire due ticks and bring the log up to date
    pub fn update(&mut self, now: Instant) {
        let session = self.workbench.session_mut();
        let fired = session.poll(now);
        session.sync_log();
        if fired > 0 {
            self.log_scroll = 0;
            if session.state().mode == PlaybackMode::Finished {
                self.status_message = "Playback complete".to_string();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let spec = self.workbench.algorithm().spec();
        let input_height = 3 + spec.param_hint.map_or(0, |_| 1) + self.input_error.as_ref().map_or(0, |_| 1);

        // Panes on top, input box, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        let session = self.workbench.session();
        let view = session.view();
        super::panes::render_step_pane(
            frame,
            columns[0],
            &spec,
            view.as_ref(),
            session.len(),
            self.focused_pane == FocusedPane::Step,
            &mut self.step_scroll,
        );

        super::panes::render_log_pane(
            frame,
            columns[1],
            session.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_input_pane(
            frame,
            main_chunks[1],
            &spec,
            (self.workbench.input(), self.workbench.param()),
            self.editing.as_ref(),
            self.input_error.as_deref(),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            session.state(),
            session.len(),
            self.editing.is_some(),
            self.input_error.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right => {
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Step => self.step_scroll = self.step_scroll.saturating_sub(1),
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_add(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Step => self.step_scroll = self.step_scroll.saturating_add(1),
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_sub(1),
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play(Instant::now());
                }
            }
            KeyCode::Backspace => {
                self.workbench.session_mut().reset();
                self.step_scroll = 0;
                self.log_scroll = 0;
                self.status_message = "Reset to start".to_string();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.editing = Some(EditState {
                    field: EditField::Input,
                    input: self.workbench.input().to_string(),
                    param: self.workbench.param().to_string(),
                });
                self.status_message = "Editing input".to_string();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let has_param = self.workbench.algorithm().spec().param_hint.is_some();
        let Some(edit) = self.editing.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                self.input_error = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Tab if has_param => {
                edit.field = match edit.field {
                    EditField::Input => EditField::Param,
                    EditField::Param => EditField::Input,
                };
            }
            KeyCode::Backspace => {
                edit.buffer().pop();
            }
            KeyCode::Char(c) => {
                edit.buffer().push(c);
            }
            KeyCode::Enter => {
                let (input, param) = (edit.input.clone(), edit.param.clone());
                self.apply(&input, &param);
            }
            _ => {}
        }
    }

    /// Commit edited input; the editor stays open on error
    fn apply(&mut self, input: &str, param: &str) {
        match self.workbench.apply(input, param) {
            Ok(()) => {
                self.editing = None;
                self.input_error = None;
                self.step_scroll = 0;
                self.log_scroll = 0;
                self.status_message =
                    format!("Applied: {} steps recorded", self.workbench.session().len());
            }
            Err(err) => {
                debug!(%err, "input rejected");
                self.input_error = Some(err.to_string());
                self.status_message = "Input rejected".to_string();
            }
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        let session = self.workbench.session_mut();
        if session.state().mode == PlaybackMode::Playing {
            session.pause();
            self.status_message = "Paused".to_string();
        } else if session.play(now) {
            self.log_scroll = 0;
            self.status_message = "Playing...".to_string();
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        let session = self.workbench.session_mut();
        // A manual step stops auto-play first
        session.pause();
        if session.step() {
            session.sync_log();
            self.log_scroll = 0;
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Cannot step forward: already at the last step".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crossterm::event::KeyModifiers;

    fn app(algorithm: Algorithm) -> App {
        App::new(Workbench::with_sample(algorithm).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_step_and_reset_keys() {
        let mut app = app(Algorithm::MergeSort);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.workbench.session().state().cursor, 2);
        assert_eq!(app.workbench.session().log().len(), 2);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.workbench.session().state().cursor, 0);
        assert_eq!(app.workbench.session().state().mode, PlaybackMode::Idle);
    }

    #[test]
    fn test_step_while_playing_pauses() {
        let mut app = app(Algorithm::MergeSort);
        app.toggle_play(Instant::now());
        press(&mut app, KeyCode::Right);

        let session = app.workbench.session();
        assert_eq!(session.state().mode, PlaybackMode::Paused);
        assert_eq!(session.state().cursor, 1);
        assert!(session.timer_id().is_none());
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn test_update_drives_playback() {
        let mut app = app(Algorithm::SpiralOrder);
        let start = Instant::now();
        app.toggle_play(start);
        assert_eq!(app.workbench.session().state().mode, PlaybackMode::Playing);

        let delay = app.workbench.config().delay();
        app.update(start + delay);
        assert_eq!(app.workbench.session().state().cursor, 1);

        app.toggle_play(start + delay);
        assert_eq!(app.workbench.session().state().mode, PlaybackMode::Paused);
    }

    #[test]
    fn test_edit_and_apply() {
        let mut app = app(Algorithm::CombinationSum);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.editing.is_some());

        for _ in 0..20 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2,5");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "9");
        press(&mut app, KeyCode::Enter);

        assert!(app.editing.is_none());
        assert_eq!(app.workbench.input(), "2,5");
        assert_eq!(app.workbench.param(), "9");
        assert_eq!(app.workbench.session().state().cursor, 0);
    }

    #[test]
    fn test_rejected_edit_keeps_session() {
        let mut app = app(Algorithm::ThreeSum);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, ",x");
        press(&mut app, KeyCode::Enter);

        assert!(app.editing.is_some());
        assert!(app.input_error.is_some());
        assert_eq!(app.workbench.session().state().cursor, 1);
        assert_eq!(app.workbench.input(), "-1,0,1,2,-1,-4");

        press(&mut app, KeyCode::Esc);
        assert!(app.editing.is_none());
        assert!(app.input_error.is_none());
    }
}
