//! Application state and key dispatch.
//!
//! # Responsibility
//! - Own the controller, the card selection cursor and the alert slot.
//! - Run the event loop and route key presses by UI mode.
//!
//! # Invariants
//! - While an alert is pending, only its dismissal keys are handled.
//! - Selection stays within the rendered card list.

use crate::ui;
use cardbox_core::{FormField, NoteController, Notifier, StubSummarizer, ViewState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Blocking-alert slot shared between the controller and the UI.
///
/// The core pushes notification text through `Notifier`; the UI draws the
/// pending message as a popup and swallows all other input until it is
/// dismissed. Single logical thread, hence `Rc` over any sync primitive.
#[derive(Clone, Default)]
pub struct AlertSink(Rc<RefCell<Option<String>>>);

impl Notifier for AlertSink {
    fn notify(&mut self, message: &str) {
        *self.0.borrow_mut() = Some(message.to_string());
    }
}

impl AlertSink {
    /// Returns the pending message, if any.
    pub fn current(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    /// Clears the pending message.
    pub fn dismiss(&self) {
        *self.0.borrow_mut() = None;
    }

    fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

pub struct App {
    pub(crate) controller: NoteController<AlertSink, StubSummarizer>,
    pub(crate) alert: AlertSink,
    pub(crate) selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let alert = AlertSink::default();
        Self {
            controller: NoteController::new(alert.clone(), StubSummarizer),
            alert,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.alert.is_pending() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert.dismiss();
            }
            return;
        }

        if self.controller.form().is_open() {
            self.handle_form_key(key);
            return;
        }

        match self.controller.view() {
            ViewState::List => self.handle_list_key(key),
            ViewState::Detail { .. } => self.handle_detail_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.last_card_index());
            }
            KeyCode::Enter => {
                let cards = self.controller.list_view();
                if let Some(card) = cards.get(self.selected) {
                    self.controller.open_detail(card.note_id);
                }
            }
            KeyCode::Char('n') => self.controller.open_form(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.controller.back_to_list(),
            KeyCode::Char('s') => self.controller.summarize_current(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                // Validation failures surface through the alert; nothing
                // else to do with the result here.
                let _ = self.controller.save_form();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.controller.close_form(),
            KeyCode::Tab => self.with_form(|form| form.focus_next()),
            KeyCode::BackTab => self.with_form(|form| form.focus_prev()),
            KeyCode::Backspace => self.with_form(|form| form.backspace()),
            KeyCode::Enter => self.with_form(|form| {
                // Enter types a newline in the body and otherwise advances
                // focus, matching the tab order of the original form.
                if form.focus == FormField::Content {
                    form.insert_char('\n');
                } else {
                    form.focus_next();
                }
            }),
            KeyCode::Char(ch) => self.with_form(|form| form.insert_char(ch)),
            _ => {}
        }
    }

    fn with_form(&mut self, edit: impl FnOnce(&mut cardbox_core::CreateForm)) {
        if let Some(form) = self.controller.form_mut() {
            edit(form);
        }
    }

    fn last_card_index(&self) -> usize {
        self.controller.store().len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertSink, App};
    use cardbox_core::Notifier;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn alert_sink_holds_latest_message_until_dismissed() {
        let mut sink = AlertSink::default();
        sink.notify("first");
        sink.notify("second");
        assert_eq!(sink.current().as_deref(), Some("second"));
        sink.dismiss();
        assert_eq!(sink.current(), None);
    }

    #[test]
    fn pending_alert_swallows_navigation_keys() {
        let mut app = App::new();
        app.alert.clone().notify("heads up");

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected, 0);

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.alert.current(), None);
    }

    #[test]
    fn selection_stays_within_card_list() {
        let mut app = App::new();
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.selected, app.controller.store().len() - 1);

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Up));
        }
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn typed_text_lands_in_the_focused_form_field() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('n')));
        assert!(app.controller.form().is_open());

        for ch in "Test".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        app.handle_key(press(KeyCode::Tab));
        for ch in "A, B".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        assert_eq!(app.controller.form().title, "Test");
        assert_eq!(app.controller.form().topics, "A, B");
    }

    #[test]
    fn ctrl_s_saves_a_completed_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('n')));
        for ch in "Test".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Tab));
        for ch in "hello".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.controller.store().len(), 4);
        assert!(!app.controller.form().is_open());
    }
}
