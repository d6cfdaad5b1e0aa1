//! Note view controller.
//!
//! # Responsibility
//! - Drive the LIST/DETAIL state machine and the creation form lifecycle.
//! - Orchestrate save: validate, append, reset the form, notify on failure.
//! - Build list/detail view models for whatever front-end draws them.
//!
//! # Invariants
//! - `ViewState` has exactly two states; transitions go through guarded
//!   methods, so invalid intermediate states are unrepresentable.
//! - Card selection is only honored in `List`; `back_to_list` is
//!   unconditional.
//! - A failed save leaves the form fields and the collection untouched.
//! - View-model builders rebuild their full output on every call.

use crate::model::note::NoteId;
use crate::store::note_store::{NoteStore, ValidationError};
use crate::summary::Summarizer;
use log::info;

/// Alert text shown when a required field is blank at save time.
const VALIDATION_ALERT: &str = "Please fill in the title and content!";

/// Sink for synchronous user-visible notifications.
///
/// The core decides when a notification fires and with what text; rendering
/// (and the blocking behavior of the original alert) is the front-end's job.
pub trait Notifier {
    /// Presents `message` to the user.
    fn notify(&mut self, message: &str);
}

/// Explicit view state. Exactly two states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The card list is visible, along with the header and add affordance.
    List,
    /// One note's full content is visible; the list is hidden.
    Detail {
        /// Id of the note being shown.
        note_id: NoteId,
    },
}

/// Form fields of the creation modal, in focus-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Topics,
    Content,
}

/// Creation form state.
///
/// Field contents persist across close/open: closing neither validates nor
/// discards, only a successful save clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    /// Title input, used verbatim (after trim check) as the note title.
    pub title: String,
    /// Raw comma-separated topics input.
    pub topics: String,
    /// Content input.
    pub content: String,
    /// Currently focused field.
    pub focus: FormField,
    open: bool,
}

impl CreateForm {
    /// Returns whether the form is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    /// Removes the last character of the focused field, if any.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Topics,
            FormField::Topics => FormField::Content,
            FormField::Content => FormField::Title,
        };
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Content,
            FormField::Topics => FormField::Title,
            FormField::Content => FormField::Topics,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Topics => &mut self.topics,
            FormField::Content => &mut self.content,
        }
    }

    fn clear(&mut self) {
        self.title.clear();
        self.topics.clear();
        self.content.clear();
        self.focus = FormField::Title;
    }
}

/// Rendered card for one note in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Id of the note this card stands for.
    pub note_id: NoteId,
    /// Card title line.
    pub title: String,
    /// Individual topic tags, order preserved.
    pub topics: Vec<String>,
    /// Creation date line.
    pub date: String,
}

/// Rendered payload for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Title of the selected note.
    pub title: String,
    /// Creation date of the selected note.
    pub date: String,
    /// Full content of the selected note.
    pub content: String,
    /// Topic tags of the selected note, order preserved.
    pub topics: Vec<String>,
}

/// Controller owning the note collection, view state and creation form.
///
/// Collaborators are injected at construction so the controller stays
/// testable without a real display surface.
pub struct NoteController<N: Notifier, S: Summarizer> {
    store: NoteStore,
    view: ViewState,
    form: CreateForm,
    notifier: N,
    summarizer: S,
}

impl<N: Notifier, S: Summarizer> NoteController<N, S> {
    /// Creates a controller over a freshly seeded store, starting in `List`.
    pub fn new(notifier: N, summarizer: S) -> Self {
        let store = NoteStore::seeded();
        info!(
            "event=controller_init module=controller status=ok seed_count={}",
            store.len()
        );
        Self {
            store,
            view: ViewState::List,
            form: CreateForm::default(),
            notifier,
            summarizer,
        }
    }

    /// Returns the current view state.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Returns the underlying note collection.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Returns the creation form state.
    pub fn form(&self) -> &CreateForm {
        &self.form
    }

    /// Returns the form for editing, but only while it is open.
    pub fn form_mut(&mut self) -> Option<&mut CreateForm> {
        self.form.open.then_some(&mut self.form)
    }

    /// Shows the creation form.
    ///
    /// Only honored in `List` (the add affordance is hidden in `Detail`).
    /// Fields are not pre-populated; whatever they held last time stays.
    pub fn open_form(&mut self) {
        if self.view != ViewState::List {
            return;
        }
        if !self.form.open {
            self.form.open = true;
            info!("event=form_opened module=controller status=ok");
        }
    }

    /// Hides the creation form without validating or discarding fields.
    pub fn close_form(&mut self) {
        if self.form.open {
            self.form.open = false;
            info!("event=form_closed module=controller status=ok");
        }
    }

    /// Saves the form as a new note.
    ///
    /// On success the note joins the end of the collection, all three
    /// fields are cleared and the form closes. On failure nothing is
    /// mutated and the user is notified synchronously.
    ///
    /// # Errors
    /// - Propagates `ValidationError` from the store for callers that want
    ///   to inspect the failure; the user notification has already fired.
    pub fn save_form(&mut self) -> Result<NoteId, ValidationError> {
        match self
            .store
            .add_note(&self.form.title, &self.form.topics, &self.form.content)
        {
            Ok(note) => {
                let id = note.id;
                self.form.clear();
                self.form.open = false;
                info!("event=note_saved module=controller status=ok id={id}");
                Ok(id)
            }
            Err(err) => {
                self.notifier.notify(VALIDATION_ALERT);
                Err(err)
            }
        }
    }

    /// Transitions `List -> Detail` for the selected card.
    ///
    /// Ignored in `Detail` (the list is hidden there, so selection cannot
    /// occur) and for ids not present in the collection.
    pub fn open_detail(&mut self, note_id: NoteId) {
        if self.view != ViewState::List || self.store.get(note_id).is_none() {
            return;
        }
        self.view = ViewState::Detail { note_id };
        info!("event=view_transition module=controller status=ok from=list to=detail id={note_id}");
    }

    /// Transitions back to `List` unconditionally.
    ///
    /// The collection did not change while in `Detail`, so no re-render
    /// beyond the normal full redraw is needed.
    pub fn back_to_list(&mut self) {
        if let ViewState::Detail { note_id } = self.view {
            info!(
                "event=view_transition module=controller status=ok from=detail to=list id={note_id}"
            );
        }
        self.view = ViewState::List;
    }

    /// Requests the placeholder AI summary for the note shown in `Detail`.
    ///
    /// Reachable only from `Detail`; routes the acknowledgement through the
    /// notifier. No response is awaited.
    pub fn summarize_current(&mut self) {
        let ViewState::Detail { note_id } = self.view else {
            return;
        };
        let Some(note) = self.store.get(note_id) else {
            return;
        };
        let message = self.summarizer.request_summary(note);
        self.notifier.notify(&message);
        info!("event=summary_requested module=controller status=stub id={note_id}");
    }

    /// Builds one card per note, in collection order.
    ///
    /// Total and idempotent: the full card set is rebuilt from the
    /// collection on every call, with no diffing against prior output.
    pub fn list_view(&self) -> Vec<CardView> {
        self.store
            .notes()
            .iter()
            .map(|note| CardView {
                note_id: note.id,
                title: note.title.clone(),
                topics: note.topics.clone(),
                date: note.date.clone(),
            })
            .collect()
    }

    /// Builds the detail payload for the note shown in `Detail`.
    ///
    /// Returns `None` in `List`.
    pub fn detail_view(&self) -> Option<DetailView> {
        let ViewState::Detail { note_id } = self.view else {
            return None;
        };
        self.store.get(note_id).map(|note| DetailView {
            title: note.title.clone(),
            date: note.date.clone(),
            content: note.content.clone(),
            topics: note.topics.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, NoteController, Notifier, ViewState};
    use crate::store::note_store::ValidationError;
    use crate::summary::StubSummarizer;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Recording sink shared with the test through an `Rc` clone.
    #[derive(Clone, Default)]
    struct SharedNotifier(Rc<RefCell<Vec<String>>>);

    impl Notifier for SharedNotifier {
        fn notify(&mut self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn controller() -> (NoteController<SharedNotifier, StubSummarizer>, SharedNotifier) {
        let sink = SharedNotifier::default();
        (
            NoteController::new(sink.clone(), StubSummarizer),
            sink,
        )
    }

    #[test]
    fn starts_in_list_with_closed_form() {
        let (controller, _) = controller();
        assert_eq!(controller.view(), ViewState::List);
        assert!(!controller.form().is_open());
        assert_eq!(controller.list_view().len(), 3);
    }

    #[test]
    fn form_fields_persist_across_close_and_reopen() {
        let (mut controller, _) = controller();
        controller.open_form();
        {
            let form = controller.form_mut().expect("form should be open");
            form.insert_char('h');
            form.insert_char('i');
        }
        controller.close_form();
        assert_eq!(controller.form().title, "hi");

        controller.open_form();
        assert_eq!(controller.form().title, "hi");
    }

    #[test]
    fn failed_save_notifies_and_keeps_fields() {
        let (mut controller, sink) = controller();
        controller.open_form();
        controller.form_mut().expect("open").title = "only a title".to_string();

        let result = controller.save_form();
        assert_eq!(result, Err(ValidationError::EmptyContent));
        assert!(controller.form().is_open());
        assert_eq!(controller.form().title, "only a title");
        assert_eq!(controller.store().len(), 3);
        assert_eq!(
            sink.0.borrow().as_slice(),
            ["Please fill in the title and content!"]
        );
    }

    #[test]
    fn successful_save_clears_fields_and_closes_form() {
        let (mut controller, sink) = controller();
        controller.open_form();
        {
            let form = controller.form_mut().expect("open");
            form.title = "Test".to_string();
            form.topics = "A, B".to_string();
            form.content = "hello".to_string();
        }

        let id = controller.save_form().expect("valid input should save");
        assert_eq!(controller.store().len(), 4);
        assert_eq!(
            controller.store().get(id).expect("saved note").topics,
            vec!["A", "B"]
        );
        assert!(!controller.form().is_open());
        assert_eq!(controller.form().title, "");
        assert_eq!(controller.form().topics, "");
        assert_eq!(controller.form().content, "");
        assert_eq!(controller.form().focus, FormField::Title);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn detail_transition_carries_exactly_the_selected_note() {
        let (mut controller, _) = controller();
        let second_id = controller.list_view()[1].note_id;

        controller.open_detail(second_id);
        assert_eq!(controller.view(), ViewState::Detail { note_id: second_id });

        let detail = controller.detail_view().expect("detail should render");
        assert_eq!(detail.title, "Grocery List");
        assert_eq!(detail.date, "2024-05-21");
        assert_eq!(detail.topics, vec!["Personal"]);

        controller.back_to_list();
        assert_eq!(controller.view(), ViewState::List);
        assert_eq!(controller.detail_view(), None);
        assert_eq!(controller.list_view().len(), 3);
    }

    #[test]
    fn selection_is_ignored_in_detail_and_for_unknown_ids() {
        let (mut controller, _) = controller();
        controller.open_detail(999);
        assert_eq!(controller.view(), ViewState::List);

        let first_id = controller.list_view()[0].note_id;
        let second_id = controller.list_view()[1].note_id;
        controller.open_detail(first_id);
        controller.open_detail(second_id);
        assert_eq!(controller.view(), ViewState::Detail { note_id: first_id });
    }

    #[test]
    fn form_cannot_open_in_detail() {
        let (mut controller, _) = controller();
        let first_id = controller.list_view()[0].note_id;
        controller.open_detail(first_id);

        controller.open_form();
        assert!(!controller.form().is_open());
    }

    #[test]
    fn summarize_fires_only_in_detail() {
        let (mut controller, sink) = controller();
        controller.summarize_current();
        assert!(sink.0.borrow().is_empty());

        let first_id = controller.list_view()[0].note_id;
        controller.open_detail(first_id);
        controller.summarize_current();

        let messages = sink.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Project Brainstorm"));
    }

    #[test]
    fn focus_cycles_forward_and_backward() {
        let (mut controller, _) = controller();
        controller.open_form();
        let form = controller.form_mut().expect("open");
        assert_eq!(form.focus, FormField::Title);
        form.focus_next();
        assert_eq!(form.focus, FormField::Topics);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Content);
    }
}
