//! Keyboard focus across the form's inputs and buttons

use super::application::Field;

/// Focusable element of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FullName,
    Phone,
    Address,
    Age,
    Email,
    Password,
    Position,
    SkillInput,
    Skills,
    ResetSkills,
    ResetForm,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 12] = [
        Self::FullName,
        Self::Phone,
        Self::Address,
        Self::Age,
        Self::Email,
        Self::Password,
        Self::Position,
        Self::SkillInput,
        Self::Skills,
        Self::ResetSkills,
        Self::ResetForm,
        Self::Submit,
    ];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }

    /// Focus that moves on to the next element, skipping the chip row when
    /// there are no chips to select
    pub fn next_with(&self, has_skills: bool) -> Self {
        match self.next() {
            Self::Skills if !has_skills => Self::Skills.next(),
            other => other,
        }
    }

    pub fn prev_with(&self, has_skills: bool) -> Self {
        match self.prev() {
            Self::Skills if !has_skills => Self::Skills.prev(),
            other => other,
        }
    }

    /// The free-text application field behind this focus, if any
    pub fn text_field(&self) -> Option<Field> {
        match self {
            Self::FullName => Some(Field::FullName),
            Self::Phone => Some(Field::Phone),
            Self::Address => Some(Field::Address),
            Self::Age => Some(Field::Age),
            Self::Email => Some(Field::Email),
            Self::Password => Some(Field::Password),
            _ => None,
        }
    }

    /// Focus holding the input for an application field
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::FullName => Self::FullName,
            Field::Phone => Self::Phone,
            Field::Address => Self::Address,
            Field::Age => Self::Age,
            Field::Email => Self::Email,
            Field::Password => Self::Password,
            Field::ApplyingPosition => Self::Position,
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Self::ResetSkills | Self::ResetForm | Self::Submit)
    }
}
