//! Application form rendering

use super::components::{chip_rows, render_action_button, render_chips, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, field_height, mask, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 72;

const TOGGLE_WIDTH: u16 = 10;
const ADD_WIDTH: u16 = 9;

/// Rows used by the "^" and "v" markers while the body is clipped
const INDICATOR_ROWS: u16 = 2;

/// Scrolling parts of the form, top to bottom. The Reset Form / Submit row
/// is pinned below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Text(Field, Focus),
    Password,
    Position,
    SkillInput,
    Chips,
    ResetSkills,
}

const SECTIONS: [Section; 10] = [
    Section::Text(Field::FullName, Focus::FullName),
    Section::Text(Field::Phone, Focus::Phone),
    Section::Text(Field::Address, Focus::Address),
    Section::Text(Field::Age, Focus::Age),
    Section::Text(Field::Email, Focus::Email),
    Section::Password,
    Section::Position,
    Section::SkillInput,
    Section::Chips,
    Section::ResetSkills,
];

impl Section {
    fn height(self, app: &App, width: u16) -> u16 {
        match self {
            Section::Text(field, _) => field_height(app.errors().get(field)),
            Section::Password => field_height(app.errors().get(Field::Password)),
            Section::Position | Section::SkillInput => FIELD_HEIGHT,
            Section::Chips => chip_rows(&app.model.application.skills, width),
            Section::ResetSkills => BUTTON_HEIGHT,
        }
    }
}

/// Section that has to stay on screen for `focus`
fn focused_section(focus: Focus) -> usize {
    match focus {
        Focus::FullName => 0,
        Focus::Phone => 1,
        Focus::Address => 2,
        Focus::Age => 3,
        Focus::Email => 4,
        Focus::Password => 5,
        Focus::Position => 6,
        Focus::SkillInput => 7,
        Focus::Skills => 8,
        Focus::ResetSkills | Focus::ResetForm | Focus::Submit => SECTIONS.len() - 1,
    }
}

/// Pick the sections that fit in `available` rows while keeping `focused`
/// visible. The window starts as high as it can with `focused` at its bottom.
fn visible_sections(heights: &[u16], focused: usize, available: u16) -> Range<usize> {
    let total: u16 = heights.iter().sum();
    if total <= available {
        return 0..heights.len();
    }

    let mut first = focused;
    let mut used = heights[focused];
    while first > 0 && used + heights[first - 1] <= available {
        first -= 1;
        used += heights[first];
    }

    let mut end = focused + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    first..end
}

/// Center the form horizontally, capped at `MAX_FORM_WIDTH`
pub fn form_area(area: Rect) -> Rect {
    let width = area.width.min(MAX_FORM_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the whole form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let area = form_area(area);
    let block = Block::default()
        .title(" Job Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Scrolling body
            Constraint::Length(1),             // Separator
            Constraint::Length(BUTTON_HEIGHT), // Reset Form / Submit
        ])
        .split(inner);

    draw_body(frame, chunks[0], app);

    let separator = Paragraph::new("─".repeat(usize::from(inner.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(separator, chunks[1]);

    draw_actions(frame, chunks[2], app);
}

/// Draw the sections that fit, scrolled so the focused one is in view
fn draw_body(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let heights: Vec<u16> = SECTIONS
        .iter()
        .map(|section| section.height(app, area.width))
        .collect();
    let total: u16 = heights.iter().sum();
    let clipped = total > area.height;
    let usable = if clipped {
        area.height.saturating_sub(INDICATOR_ROWS)
    } else {
        area.height
    };
    let visible = visible_sections(&heights, focused_section(app.focus), usable);

    let mut constraints = Vec::with_capacity(visible.len() + 3);
    if clipped {
        constraints.push(Constraint::Length(1)); // Up indicator
    }
    constraints.extend(visible.clone().map(|idx| Constraint::Length(heights[idx])));
    if clipped {
        constraints.push(Constraint::Length(1)); // Down indicator
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut chunk_idx = 0;
    if clipped {
        if visible.start > 0 {
            draw_indicator(frame, chunks[chunk_idx], "^");
        }
        chunk_idx += 1;
    }

    for idx in visible.clone() {
        draw_section(frame, chunks[chunk_idx], app, SECTIONS[idx]);
        chunk_idx += 1;
    }

    if clipped && visible.end < SECTIONS.len() {
        draw_indicator(frame, chunks[chunk_idx], "v");
    }
}

fn draw_indicator(frame: &mut Frame, area: Rect, marker: &str) {
    let indicator = Paragraph::new(marker)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}

fn draw_section(frame: &mut Frame, area: Rect, app: &App, section: Section) {
    match section {
        Section::Text(field, focus) => draw_field(
            frame,
            area,
            field.label(),
            app.model.application.value(field),
            app.focus == focus,
            app.errors().get(field),
        ),
        Section::Password => draw_password(frame, area, app),
        Section::Position => draw_position(frame, area, app),
        Section::SkillInput => draw_skill_input(frame, area, app),
        Section::Chips => {
            let selected = (app.focus == Focus::Skills).then_some(app.selected_skill);
            render_chips(frame, area, &app.model.application.skills, selected);
        }
        Section::ResetSkills => draw_reset_skills(frame, area, app),
    }
}

fn draw_password(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(TOGGLE_WIDTH)])
        .split(area);

    let password = &app.model.application.password;
    let shown = if app.model.show_password {
        password.clone()
    } else {
        mask(password)
    };

    draw_field(
        frame,
        chunks[0],
        Field::Password.label(),
        &shown,
        app.focus == Focus::Password,
        app.errors().get(Field::Password),
    );

    let toggle_area = Rect {
        height: chunks[1].height.min(BUTTON_HEIGHT),
        ..chunks[1]
    };
    let label = if app.model.show_password { "Hide" } else { "Show" };
    render_action_button(frame, toggle_area, label, false, Some(Color::Blue));
}

fn draw_position(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.focus == Focus::Position;
    let position = app.model.application.applying_position;

    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(position.label(), label_style),
        Span::styled(" ▶", arrow_style),
    ]));

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", Field::ApplyingPosition.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

fn draw_skill_input(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ADD_WIDTH)])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        "Skills",
        &app.model.application.skill_input,
        app.focus == Focus::SkillInput,
        None,
    );
    render_action_button(frame, chunks[1], "Add", false, Some(Color::Blue));
}

fn draw_reset_skills(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);
    render_action_button(
        frame,
        chunks[0],
        "Reset Skills",
        app.focus == Focus::ResetSkills,
        Some(Color::Red),
    );
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Reset Form
            Constraint::Min(0),
            Constraint::Length(12), // Submit
        ])
        .split(area);

    render_action_button(
        frame,
        chunks[0],
        "Reset Form",
        app.focus == Focus::ResetForm,
        Some(Color::Red),
    );
    render_action_button(
        frame,
        chunks[2],
        "Submit",
        app.focus == Focus::Submit,
        Some(Color::Green),
    );
}
