//! Reusable UI components

mod button;
mod chips;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use chips::{chip_rows, render_chips};
