//! Application record and field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position the applicant is applying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    #[serde(rename = "")]
    Unselected,
    #[serde(rename = "frontend")]
    Frontend,
    #[serde(rename = "backend")]
    Backend,
    #[serde(rename = "full-stack")]
    FullStack,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Self::Unselected,
        Self::Frontend,
        Self::Backend,
        Self::FullStack,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Unselected => Self::Frontend,
            Self::Frontend => Self::Backend,
            Self::Backend => Self::FullStack,
            Self::FullStack => Self::Unselected,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unselected => Self::FullStack,
            Self::Frontend => Self::Unselected,
            Self::Backend => Self::Frontend,
            Self::FullStack => Self::Backend,
        }
    }

    /// Value stored in the draft and passed to `EditField`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::FullStack => "full-stack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "Select Position",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::FullStack => "Full-Stack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position `{0}`")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// Editable fields of the application
///
/// The order of the variants is the order used when listing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Phone,
    Address,
    Age,
    Password,
    Email,
    ApplyingPosition,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Age => "age",
            Self::Password => "password",
            Self::Email => "email",
            Self::ApplyingPosition => "applyingPosition",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Age => "Age",
            Self::Password => "Password",
            Self::Email => "Email",
            Self::ApplyingPosition => "Applying Position",
        }
    }

    /// Numeric inputs only take characters a number input would accept
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Phone | Self::Age)
    }

    pub fn accepts_char(&self, c: char) -> bool {
        if self.is_numeric() {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
        } else {
            !c.is_control()
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The application record, also the shape of the stored draft
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub age: String,
    pub password: String,
    pub email: String,
    pub applying_position: Position,
    pub skills: Vec<String>,
    pub skill_input: String,
}

impl Application {
    /// Text value of a field (the wire value for the position)
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Age => &self.age,
            Field::Password => &self.password,
            Field::Email => &self.email,
            Field::ApplyingPosition => self.applying_position.as_str(),
        }
    }

    /// Replace a single field, leaving every other field untouched
    pub fn set(&mut self, field: Field, value: String) -> Result<(), UnknownPosition> {
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::Age => self.age = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
            Field::ApplyingPosition => self.applying_position = value.parse()?,
        }
        Ok(())
    }
}
