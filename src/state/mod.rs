//! Form state module

mod action;
mod application;
mod focus;
mod validation;

pub use action::*;
pub use application::*;
pub use focus::*;
pub use validation::*;
