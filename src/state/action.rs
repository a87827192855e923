//! Form actions and the transition function
//!
//! Every change to the form goes through [`update`]. The caller observes
//! the returned [`Effect`] and compares the application before and after
//! to decide whether the draft must be written.

use super::application::{Application, Field};
use super::validation::{validate, FieldErrors};

/// Everything the form view owns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormModel {
    pub application: Application,
    pub errors: FieldErrors,
    pub show_password: bool,
}

impl FormModel {
    pub fn new(application: Application, show_password: bool) -> Self {
        Self {
            application,
            errors: FieldErrors::default(),
            show_password,
        }
    }
}

/// User intents understood by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditField { field: Field, value: String },
    UpdateSkillInput(String),
    AddSkill,
    RemoveSkill(usize),
    ResetSkills,
    ResetForm,
    Submit,
    ToggleVisibility,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A validated application ready for the submission sink
    Submitted(Application),
}

/// Apply an action to the model
pub fn update(model: &mut FormModel, action: Action) -> Option<Effect> {
    match action {
        Action::EditField { field, value } => {
            if let Err(err) = model.application.set(field, value) {
                tracing::warn!(%field, "ignoring edit: {err}");
            }
            None
        }
        Action::UpdateSkillInput(text) => {
            model.application.skill_input = text;
            None
        }
        Action::AddSkill => {
            if !model.application.skill_input.is_empty() {
                let skill = std::mem::take(&mut model.application.skill_input);
                model.application.skills.push(skill);
            }
            None
        }
        Action::RemoveSkill(index) => {
            if index < model.application.skills.len() {
                model.application.skills.remove(index);
            } else {
                tracing::debug!(
                    index,
                    len = model.application.skills.len(),
                    "skill index out of range"
                );
            }
            None
        }
        Action::ResetSkills => {
            model.application.skills.clear();
            None
        }
        Action::ResetForm => {
            reset(model);
            None
        }
        Action::Submit => {
            let errors = validate(&model.application);
            if !errors.is_empty() {
                tracing::debug!(count = errors.len(), "submission blocked by validation");
                model.errors = errors;
                return None;
            }
            let payload = std::mem::take(&mut model.application);
            reset(model);
            Some(Effect::Submitted(payload))
        }
        Action::ToggleVisibility => {
            model.show_password = !model.show_password;
            None
        }
    }
}

fn reset(model: &mut FormModel) {
    model.application = Application::default();
    model.errors.clear();
}
