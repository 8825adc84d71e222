//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Transient status message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            status_message: None,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status message on key press
        self.status_message = None;

        let on_button_row = self.state.form.is_button_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Enter on the button row triggers submission
            KeyCode::Enter if on_button_row => self.submit_feedback(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_feedback();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_latest()?;
            }
            KeyCode::Esc => self.state.form.reset(),
            // Form field input (only when not on the button row)
            KeyCode::Char(c) if !on_button_row => {
                self.form_input_char(c, key.modifiers.contains(KeyModifiers::SHIFT));
            }
            KeyCode::Backspace if !on_button_row => {
                self.state.form.get_active_field_mut().pop_char();
            }
            KeyCode::Enter if !on_button_row => {
                // Enter in the message field adds a newline
                if self.state.form.is_active_field_multiline() {
                    self.state.form.get_active_field_mut().push_newline();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle character input in the form
    fn form_input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        self.state.form.get_active_field_mut().push_char(ch);
    }

    /// Submit the current draft: copy it into the latest slot, then clear
    /// the form. An incomplete draft is ignored without any feedback,
    /// mirroring a browser's required-field gate.
    pub fn submit_feedback(&mut self) {
        if !self.state.form.is_complete() {
            return;
        }

        let record = self.state.form.to_record();

        // Hand-off to a durable store goes here once one exists; the
        // request/response contract for it is still undecided. Until then
        // the submission is only traced.
        tracing::info!(
            "feedback submitted: name={:?} email={:?} message={:?}",
            record.name,
            record.email,
            record.message
        );

        self.state.latest_feedback = Some(record);
        self.state.form.reset();
        self.status_message = Some("Feedback submitted!".to_string());
    }

    /// Copy the latest submission to the clipboard (no-op before the first
    /// submission)
    pub fn copy_latest(&mut self) -> Result<()> {
        if let Some(record) = &self.state.latest_feedback {
            let text = format!("{} <{}>\n{}", record.name, record.email, record.message);
            self.copy_to_clipboard(&text)?;
            self.status_message = Some(format!("Copied {} chars", text.len()));
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
