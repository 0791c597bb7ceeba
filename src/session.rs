/// The bounded history of evaluated expressions.
pub mod history;
/// Keypad-style editing rules.
///
/// Implements the rules applied when text is typed into or deleted from the
/// expression being edited: `ANS` insertion before a leading operator and
/// token-aware backspace.
pub mod input;

use crate::{
    CalcError, evaluate,
    interpreter::{angle::AngleMode, formatter::ERROR_MARKER},
    session::{
        history::{DEFAULT_CAPACITY, History, HistoryEntry},
        input::{apply_input_rules, smart_backspace},
    },
    store::{HistoryState, HistoryStore},
    EvaluationOutcome,
};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text typed or a key pressed that inserts text.
    Input(String),
    /// Clear the expression, result and error.
    Clear,
    /// Delete the last token, or dismiss an error.
    Backspace,
    /// Evaluate the expression.
    Equals,
    /// Switch between degrees and radians.
    ToggleAngleMode,
    /// Load a history entry's expression for editing.
    HistorySelected(HistoryEntry),
    /// Load a history entry's result, making it the answer register.
    HistoryResultSelected(HistoryEntry),
    /// Forget every history entry.
    ClearHistory,
}

/// The state of one calculator between evaluations.
///
/// A session owns the expression being edited, the angle mode, the answer
/// register and the history. It changes only through [`Session::handle`].
/// When created with a [`HistoryStore`], history and angle-mode changes are
/// saved as they happen; a failed save is logged and otherwise ignored.
///
/// # Example
/// ```
/// use reckon::{Event, Session};
///
/// let mut session = Session::new();
/// session.handle(Event::Input("4".into()));
/// session.handle(Event::Equals);
/// assert_eq!(session.answer(), 4.0);
///
/// session.handle(Event::Clear);
/// session.handle(Event::Input("*".into()));
/// session.handle(Event::Input("3".into()));
/// assert_eq!(session.expression(), "ANS*3");
///
/// session.handle(Event::Equals);
/// assert_eq!(session.result(), Some("12"));
/// assert_eq!(session.history().len(), 2);
/// ```
#[derive(Debug)]
pub struct Session {
    expression: String,
    angle_mode: AngleMode,
    history:    History,
    result:     Option<String>,
    error:      Option<CalcError>,
    answer:     f64,
    store:      Option<HistoryStore>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an in-memory session in degree mode with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an in-memory session keeping at most `capacity` history
    /// entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { expression: String::new(),
               angle_mode: AngleMode::default(),
               history:    History::new(capacity),
               result:     None,
               error:      None,
               answer:     0.0,
               store:      None, }
    }

    /// Creates a session backed by `store`, restoring its history and angle
    /// mode.
    #[must_use]
    pub fn with_store(store: HistoryStore, capacity: usize) -> Self {
        let HistoryState { history, angle_mode } = store.load();
        tracing::debug!(entries = history.len(), %angle_mode, "restored session");
        Self { history: History::from_entries(history, capacity),
               angle_mode,
               store: Some(store),
               ..Self::with_capacity(capacity) }
    }

    /// Applies one event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Input(text) => self.input(&text),
            Event::Clear => {
                self.expression.clear();
                self.result = None;
                self.error = None;
            },
            Event::Backspace => {
                if self.error.take().is_none() {
                    self.expression = smart_backspace(&self.expression);
                }
            },
            Event::Equals => self.equals(),
            Event::ToggleAngleMode => self.set_angle_mode(self.angle_mode.toggled()),
            Event::HistorySelected(entry) => {
                self.expression = entry.expression;
                self.error = None;
            },
            Event::HistoryResultSelected(entry) => {
                if let Some(value) = entry.result.as_deref().and_then(|r| r.parse::<f64>().ok()) {
                    self.answer = value;
                }
                self.expression = entry.result.clone().unwrap_or_default();
                self.result = entry.result;
                self.error = None;
            },
            Event::ClearHistory => {
                self.history.clear();
                self.persist();
            },
        }
    }

    /// Seeds the answer register, e.g. from a command-line option.
    pub const fn set_answer(&mut self, answer: f64) {
        self.answer = answer;
    }

    /// Switches the angle mode and saves it.
    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
        self.persist();
    }

    fn input(&mut self, text: &str) {
        // Typing after an error starts a fresh expression.
        let base = if self.error.is_some() { "" } else { self.expression.as_str() };
        self.expression = apply_input_rules(base, text);
        self.error = None;
    }

    fn equals(&mut self) {
        let expression = self.expression.trim().to_string();
        if expression.is_empty() {
            return;
        }

        match evaluate(&expression, self.angle_mode, self.answer) {
            EvaluationOutcome::Success { value, formatted } => {
                self.history.push(HistoryEntry::now(expression, formatted.clone()));
                self.expression.clone_from(&formatted);
                self.result = Some(formatted);
                self.error = None;
                self.answer = value;
                self.persist();
            },
            EvaluationOutcome::Error(error) => {
                self.error = Some(error);
            },
        }
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        let state = HistoryState { history:    self.history.to_vec(),
                                   angle_mode: self.angle_mode, };
        if let Err(error) = store.save(&state) {
            tracing::warn!(%error, "failed to save history");
        }
    }

    /// The expression being edited.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// What a display should show: the error marker after a failed
    /// evaluation, the expression otherwise.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            ERROR_MARKER
        } else {
            &self.expression
        }
    }

    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The last successful result, formatted.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The error of the last evaluation, until the next edit.
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// The answer register: the value `ANS` stands for.
    #[must_use]
    pub const fn answer(&self) -> f64 {
        self.answer
    }
}
