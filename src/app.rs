//! Application state and core logic

use crate::draft::{self, DraftStore};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{self, Action, Effect, Field, FieldErrors, Focus, FormModel};
use crate::submit::SubmissionSink;
use crossterm::event::{KeyCode, KeyEvent};

/// Message shown in the status bar until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Main application struct
pub struct App {
    /// Form state, errors and password visibility
    pub model: FormModel,
    /// Focused input or button
    pub focus: Focus,
    /// Chip highlighted in the skills row
    pub selected_skill: usize,
    /// Status bar feedback
    pub status: Option<Status>,
    /// Draft persistence
    store: Box<dyn DraftStore>,
    /// Destination for valid applications
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the form, restoring the stored draft
    pub fn new(
        store: Box<dyn DraftStore>,
        sink: Box<dyn SubmissionSink>,
        show_password: bool,
    ) -> Self {
        let application = draft::restore(store.as_ref());
        let mut app = Self {
            model: FormModel::new(application, show_password),
            focus: Focus::default(),
            selected_skill: 0,
            status: None,
            store,
            sink,
            quit: false,
        };
        // The store mirrors the form from the first frame on
        app.save_draft();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.model.errors
    }

    /// Run an action through the form and observe its effects
    pub fn dispatch(&mut self, action: Action) {
        let before = self.model.application.clone();

        match state::update(&mut self.model, action.clone()) {
            Some(Effect::Submitted(payload)) => self.deliver(payload),
            None => self.report(&action),
        }

        if self.model.application != before {
            self.save_draft();
        }
        self.settle_focus();
    }

    /// Hand a validated application to the sink
    fn deliver(&mut self, payload: state::Application) {
        match self.sink.submit(&payload) {
            Ok(()) => {
                tracing::info!("application accepted");
                self.status = Some(Status::Info("Application submitted".to_string()));
            }
            Err(err) => {
                tracing::error!("submission failed: {err:#}");
                self.model.application = payload;
                self.status = Some(Status::Error(format!("Submission failed: {err}")));
            }
        }
    }

    fn report(&mut self, action: &Action) {
        match action {
            Action::Submit => {
                let count = self.model.errors.len();
                if let Some(first) = self.model.errors.fields().next() {
                    self.focus = Focus::for_field(first);
                }
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status = Some(Status::Error(format!("{count} {noun} attention")));
            }
            Action::ResetForm => {
                self.status = Some(Status::Info("Form reset".to_string()));
            }
            _ => {}
        }
    }

    fn save_draft(&mut self) {
        if let Err(err) = draft::persist(self.store.as_mut(), &self.model.application) {
            tracing::warn!("failed to save draft: {err}");
            self.status = Some(Status::Error("Draft could not be saved".to_string()));
        }
    }

    /// Keep focus and chip selection pointing at something that exists
    fn settle_focus(&mut self) {
        let count = self.model.application.skills.len();
        if count == 0 {
            self.selected_skill = 0;
            if self.focus == Focus::Skills {
                self.focus = Focus::SkillInput;
            }
        } else if self.selected_skill >= count {
            self.selected_skill = count - 1;
        }
    }

    fn has_skills(&self) -> bool {
        !self.model.application.skills.is_empty()
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next_with(self.has_skills());
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev_with(self.has_skills());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status = None;

        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER);
        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('s') if shortcut => self.dispatch(Action::Submit),
            KeyCode::Char('r') if shortcut => self.dispatch(Action::ResetForm),
            KeyCode::Char('p') if shortcut => self.dispatch(Action::ToggleVisibility),
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.prev_focus(),
            _ if shortcut => {}
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        if let Some(field) = self.focus.text_field() {
            self.handle_text_key(field, key);
            return;
        }

        match self.focus {
            Focus::Position => self.handle_position_key(key),
            Focus::SkillInput => self.handle_skill_input_key(key),
            Focus::Skills => self.handle_chips_key(key),
            button if button.is_button() => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.press_button(button);
                }
            }
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: Field, key: KeyEvent) {
        let current = self.model.application.value(field);
        match key.code {
            KeyCode::Char(c) if field.accepts_char(c) => {
                let mut value = current.to_string();
                value.push(c);
                self.dispatch(Action::EditField { field, value });
            }
            KeyCode::Backspace if !current.is_empty() => {
                let mut value = current.to_string();
                value.pop();
                self.dispatch(Action::EditField { field, value });
            }
            KeyCode::Enter if field == Field::Password => {
                self.dispatch(Action::ToggleVisibility);
            }
            KeyCode::Enter | KeyCode::Down => self.next_focus(),
            KeyCode::Up => self.prev_focus(),
            _ => {}
        }
    }

    fn handle_position_key(&mut self, key: KeyEvent) {
        let current = self.model.application.applying_position;
        let position = match key.code {
            KeyCode::Left | KeyCode::Char('h') => current.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => current.next(),
            KeyCode::Enter | KeyCode::Down => return self.next_focus(),
            KeyCode::Up => return self.prev_focus(),
            _ => return,
        };
        self.dispatch(Action::EditField {
            field: Field::ApplyingPosition,
            value: position.as_str().to_string(),
        });
    }

    fn handle_skill_input_key(&mut self, key: KeyEvent) {
        let current = &self.model.application.skill_input;
        match key.code {
            KeyCode::Char(c) => {
                let mut text = current.clone();
                text.push(c);
                self.dispatch(Action::UpdateSkillInput(text));
            }
            KeyCode::Backspace if !current.is_empty() => {
                let mut text = current.clone();
                text.pop();
                self.dispatch(Action::UpdateSkillInput(text));
            }
            KeyCode::Enter => self.dispatch(Action::AddSkill),
            KeyCode::Down => self.next_focus(),
            KeyCode::Up => self.prev_focus(),
            _ => {}
        }
    }

    fn handle_chips_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_skill = self.selected_skill.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_skill + 1 < self.model.application.skills.len() {
                    self.selected_skill += 1;
                }
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('x') => {
                self.dispatch(Action::RemoveSkill(self.selected_skill));
            }
            KeyCode::Down => self.next_focus(),
            KeyCode::Up => self.prev_focus(),
            _ => {}
        }
    }

    fn press_button(&mut self, button: Focus) {
        match button {
            Focus::ResetSkills => self.dispatch(Action::ResetSkills),
            Focus::ResetForm => self.dispatch(Action::ResetForm),
            Focus::Submit => self.dispatch(Action::Submit),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftError, MemoryDraftStore, MockDraftStore, DRAFT_KEY};
    use crate::state::{Application, Position, PASSWORD_REQUIRED};
    use crate::submit::MockSubmissionSink;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn valid_application() -> Application {
        Application {
            full_name: "A".to_string(),
            phone: "1".to_string(),
            address: "B".to_string(),
            age: "30".to_string(),
            password: "p".to_string(),
            email: "a@b.co".to_string(),
            ..Default::default()
        }
    }

    fn store_with(application: &Application) -> MemoryDraftStore {
        let mut store = MemoryDraftStore::new();
        draft::persist(&mut store, application).unwrap();
        store
    }

    /// Store mock recording every document written
    fn recording_store(initial: Option<String>) -> (MockDraftStore, Arc<Mutex<Vec<String>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let mut store = MockDraftStore::new();
        store
            .expect_read()
            .returning(move |_| Ok(initial.clone()));
        let log = Arc::clone(&writes);
        store.expect_write().returning(move |key, contents| {
            assert_eq!(key, DRAFT_KEY);
            log.lock().unwrap().push(contents.to_string());
            Ok(())
        });
        (store, writes)
    }

    fn idle_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().never();
        sink
    }

    fn app_with(application: &Application) -> App {
        App::new(
            Box::new(store_with(application)),
            Box::new(idle_sink()),
            false,
        )
    }

    fn stored(app: &App) -> Option<Application> {
        draft::load(app.store.as_ref()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_restores_stored_draft() {
            let application = Application {
                skills: vec!["rust".to_string()],
                ..valid_application()
            };
            let app = app_with(&application);
            assert_eq!(app.model.application, application);
            assert!(app.errors().is_empty());
        }

        #[test]
        fn test_corrupt_draft_is_replaced_by_defaults() {
            let (store, writes) = recording_store(Some("][".to_string()));
            let app = App::new(Box::new(store), Box::new(idle_sink()), false);

            assert_eq!(app.model.application, Application::default());
            let writes = writes.lock().unwrap();
            assert_eq!(writes.len(), 1);
            let written: Application = serde_json::from_str(&writes[0]).unwrap();
            assert_eq!(written, Application::default());
        }

        #[test]
        fn test_show_password_comes_from_caller() {
            let app = App::new(
                Box::new(MemoryDraftStore::new()),
                Box::new(idle_sink()),
                true,
            );
            assert!(app.model.show_password);
        }
    }

    mod persistence {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_change_rewrites_draft() {
            let (store, writes) = recording_store(None);
            let mut app = App::new(Box::new(store), Box::new(idle_sink()), false);

            type_text(&mut app, "Al");

            let writes = writes.lock().unwrap();
            assert_eq!(writes.len(), 3); // startup + two keystrokes
            let last: Application = serde_json::from_str(writes.last().unwrap()).unwrap();
            assert_eq!(last.full_name, "Al");
        }

        #[test]
        fn test_noop_actions_do_not_write() {
            let (store, writes) = recording_store(None);
            let mut app = App::new(Box::new(store), Box::new(idle_sink()), false);

            app.dispatch(Action::AddSkill);
            app.dispatch(Action::RemoveSkill(3));
            app.dispatch(Action::ToggleVisibility);

            assert_eq!(writes.lock().unwrap().len(), 1);
        }

        #[test]
        fn test_round_trip_through_restart() {
            let mut app = app_with(&Application::default());
            type_text(&mut app, "Ada");
            app.focus = Focus::SkillInput;
            type_text(&mut app, "math");
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "draft");

            let saved = stored(&app).unwrap();
            assert_eq!(saved, app.model.application);

            let restarted = app_with(&saved);
            assert_eq!(restarted.model.application, app.model.application);
        }

        #[test]
        fn test_save_failure_reported_in_status() {
            let mut store = MockDraftStore::new();
            store.expect_read().returning(|_| Ok(None));
            store.expect_write().returning(|_, _| {
                Err(DraftError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )))
            });
            let mut app = App::new(Box::new(store), Box::new(idle_sink()), false);
            app.dispatch(Action::UpdateSkillInput("go".to_string()));

            assert_eq!(app.model.application.skill_input, "go");
            assert_eq!(
                app.status,
                Some(Status::Error("Draft could not be saved".to_string()))
            );
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submit_sends_payload_and_resets() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|application| *application == valid_application())
                .times(1)
                .returning(|_| Ok(()));
            let mut app = App::new(
                Box::new(store_with(&valid_application())),
                Box::new(sink),
                false,
            );

            app.handle_key(ctrl('s'));

            assert_eq!(app.model.application, Application::default());
            assert!(app.errors().is_empty());
            assert_eq!(stored(&app), Some(Application::default()));
            assert_eq!(
                app.status,
                Some(Status::Info("Application submitted".to_string()))
            );
        }

        #[test]
        fn test_invalid_submit_keeps_form_and_focuses_first_error() {
            let application = Application {
                password: String::new(),
                ..valid_application()
            };
            let mut app = app_with(&application);
            app.focus = Focus::Submit;

            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.model.application, application);
            assert_eq!(stored(&app), Some(application));
            assert_eq!(app.errors().get(Field::Password), Some(PASSWORD_REQUIRED));
            assert_eq!(app.focus, Focus::Password);
            assert_eq!(
                app.status,
                Some(Status::Error("1 field needs attention".to_string()))
            );
        }

        #[test]
        fn test_sink_failure_keeps_form() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("offline")));
            let mut app = App::new(
                Box::new(store_with(&valid_application())),
                Box::new(sink),
                false,
            );

            app.dispatch(Action::Submit);

            assert_eq!(app.model.application, valid_application());
            assert_eq!(stored(&app), Some(valid_application()));
            assert_eq!(
                app.status,
                Some(Status::Error("Submission failed: offline".to_string()))
            );
        }

        #[test]
        fn test_reset_button_clears_everything() {
            let mut app = app_with(&valid_application());
            app.dispatch(Action::EditField {
                field: Field::Email,
                value: "bad".to_string(),
            });
            app.dispatch(Action::Submit);
            assert!(!app.errors().is_empty());

            app.focus = Focus::ResetForm;
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.model.application, Application::default());
            assert!(app.errors().is_empty());
            assert_eq!(stored(&app), Some(Application::default()));
        }
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_edits_focused_field() {
            let mut app = app_with(&Application::default());
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.model.application.full_name, "Ad");
        }

        #[test]
        fn test_numeric_field_filters_letters() {
            let mut app = app_with(&Application::default());
            app.focus = Focus::Age;
            type_text(&mut app, "3x0");
            assert_eq!(app.model.application.age, "30");
        }

        #[test]
        fn test_tab_cycles_focus_and_skips_empty_chips() {
            let mut app = app_with(&Application::default());
            app.focus = Focus::SkillInput;
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, Focus::ResetSkills);
            app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
            assert_eq!(app.focus, Focus::SkillInput);
        }

        #[test]
        fn test_enter_on_password_toggles_visibility() {
            let mut app = app_with(&Application::default());
            app.focus = Focus::Password;
            app.handle_key(key(KeyCode::Enter));
            assert!(app.model.show_password);
            app.handle_key(ctrl('p'));
            assert!(!app.model.show_password);
        }

        #[test]
        fn test_position_cycles_with_arrows() {
            let mut app = app_with(&Application::default());
            app.focus = Focus::Position;
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.model.application.applying_position, Position::Frontend);
            app.handle_key(key(KeyCode::Left));
            app.handle_key(key(KeyCode::Left));
            assert_eq!(
                app.model.application.applying_position,
                Position::FullStack
            );
        }

        #[test]
        fn test_skill_entry_and_chip_removal() {
            let mut app = app_with(&Application::default());
            app.focus = Focus::SkillInput;
            for skill in ["rust", "go", "sql"] {
                type_text(&mut app, skill);
                app.handle_key(key(KeyCode::Enter));
            }
            assert_eq!(app.model.application.skills, vec!["rust", "go", "sql"]);

            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, Focus::Skills);
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Delete));
            assert_eq!(app.model.application.skills, vec!["rust", "sql"]);
            assert_eq!(app.selected_skill, 1);

            app.handle_key(key(KeyCode::Delete));
            assert_eq!(app.model.application.skills, vec!["rust"]);
            assert_eq!(app.selected_skill, 0);

            app.handle_key(key(KeyCode::Delete));
            assert!(app.model.application.skills.is_empty());
            assert_eq!(app.focus, Focus::SkillInput);
        }

        #[test]
        fn test_reset_skills_button() {
            let application = Application {
                skills: vec!["a".to_string(), "b".to_string()],
                skill_input: "c".to_string(),
                ..Default::default()
            };
            let mut app = app_with(&application);
            app.focus = Focus::ResetSkills;
            app.handle_key(key(KeyCode::Char(' ')));
            assert!(app.model.application.skills.is_empty());
            assert_eq!(app.model.application.skill_input, "c");
        }

        #[test]
        fn test_ctrl_r_resets_form() {
            let mut app = app_with(&valid_application());
            app.handle_key(ctrl('r'));
            assert_eq!(app.model.application, Application::default());
            assert_eq!(app.status, Some(Status::Info("Form reset".to_string())));
        }

        #[test]
        fn test_unbound_shortcut_does_not_type() {
            let mut app = app_with(&Application::default());
            app.handle_key(ctrl('a'));
            assert_eq!(app.model.application.full_name, "");
        }

        #[test]
        fn test_escape_quits() {
            let mut app = app_with(&Application::default());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_key_press_clears_status() {
            let mut app = app_with(&valid_application());
            app.handle_key(ctrl('r'));
            assert!(app.status.is_some());
            app.handle_key(key(KeyCode::Tab));
            assert!(app.status.is_none());
        }
    }
}
