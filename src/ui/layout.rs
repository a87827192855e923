//! Layout components (form area, status bar)

use crate::app::{App, Status};
use crate::platform::{RESET_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    match &app.status {
        Some(Status::Info(msg)) => {
            spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
            spans.push(Span::raw(" | "));
        }
        Some(Status::Error(msg)) => {
            spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
            spans.push(Span::raw(" | "));
        }
        None => {}
    }

    spans.push(Span::styled(
        get_focus_hints(app.focus),
        Style::default().fg(Color::Gray),
    ));

    let shortcuts = format!(" {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  Esc:quit ");
    let width = u16::try_from(shortcuts.chars().count())
        .unwrap_or(area.width)
        .min(area.width);
    let (status_area, shortcut_area) = split_status_bar(area, width);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let shortcut_widget =
        Paragraph::new(shortcuts).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(shortcut_widget, shortcut_area);
}

/// Split the status bar so the right-aligned shortcuts never overlap the hints
fn split_status_bar(area: Rect, shortcut_width: u16) -> (Rect, Rect) {
    let shortcut_width = shortcut_width.min(area.width);
    let status_width = area.width - shortcut_width;
    (
        Rect {
            width: status_width,
            ..area
        },
        Rect {
            x: area.x + status_width,
            width: shortcut_width,
            ..area
        },
    )
}

/// Get keyboard hints for the focused element
pub fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Password => format!("Tab:next  Enter/{REVEAL_SHORTCUT}:show/hide"),
        Focus::Position => "←/→:choose  Tab:next".to_string(),
        Focus::SkillInput => "Enter:add skill  Tab:next".to_string(),
        Focus::Skills => "←/→:select  Del:remove  Tab:next".to_string(),
        Focus::ResetSkills | Focus::ResetForm | Focus::Submit => {
            "Enter:press  Tab:next".to_string()
        }
        _ => "Tab:next  Shift+Tab:prev".to_string(),
    }
}
