//! Removable skill chips

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Marker shown after each chip label, the terminal stand-in for a close icon
pub const CHIP_CLOSE: &str = "✕";

/// Columns a chip takes: " skill ✕ " plus the separating space
fn chip_width(skill: &str) -> usize {
    skill.chars().count() + CHIP_CLOSE.chars().count() + 4
}

/// Pack chips into rows of at most `width` columns. A chip is never split;
/// one wider than the row gets a row of its own.
pub fn chip_lines(skills: &[String], width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, skill) in skills.iter().enumerate() {
        let token = chip_width(skill);
        if used > 0 && used + token > width {
            lines.push(start..idx);
            start = idx;
            used = 0;
        }
        used += token;
    }
    if start < skills.len() {
        lines.push(start..skills.len());
    }
    lines
}

/// Rows needed to show the chips inside `width` columns
pub fn chip_rows(skills: &[String], width: u16) -> u16 {
    let rows = chip_lines(skills, width).len().max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Render chips one packed row per line; `selected` is highlighted when the
/// row has focus
pub fn render_chips(
    frame: &mut Frame,
    area: Rect,
    skills: &[String],
    selected: Option<usize>,
) {
    if skills.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No skills added",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = chip_lines(skills, area.width)
        .into_iter()
        .map(|range| {
            let mut spans = Vec::with_capacity(range.len() * 2);
            for idx in range {
                let style = if selected == Some(idx) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White).bg(Color::DarkGray)
                };
                spans.push(Span::styled(
                    format!(" {} {CHIP_CLOSE} ", skills[idx]),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn rendered_rows(skills: &[String], width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_chips(frame, frame.area(), skills, None))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_chip_rows_single_row_when_empty() {
        assert_eq!(chip_rows(&[], 40), 1);
    }

    #[test]
    fn test_chip_rows_wraps_long_lists() {
        let skills: Vec<String> = (0..6).map(|i| format!("skill-{i}")).collect();
        // each chip is 7 + 1 + 4 = 12 columns
        assert_eq!(chip_rows(&skills, 80), 1);
        assert_eq!(chip_rows(&skills, 24), 3);
    }

    #[test]
    fn test_chip_lines_keep_whole_chips() {
        let skills = skills(&["machine learning", "distributed systems", "rust"]);
        assert_eq!(chip_lines(&skills, 44), vec![0..1, 1..3]);
    }

    #[test]
    fn test_oversized_chip_gets_own_row() {
        let skills = skills(&["a", "a very long skill name", "b"]);
        assert_eq!(chip_lines(&skills, 10), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_multi_word_chips_render_intact() {
        let skills = skills(&[
            "machine learning",
            "distributed systems",
            "rust",
            "go lang",
            "type theory",
        ]);
        let height = chip_rows(&skills, 44);
        let rows = rendered_rows(&skills, 44, height);

        assert_eq!(rows.len(), 3);
        for skill in &skills {
            let chip = format!("{skill} {CHIP_CLOSE}");
            assert!(
                rows.iter().any(|row| row.contains(&chip)),
                "{chip:?} split across rows: {rows:#?}"
            );
        }
        assert!(rows.iter().all(|row| !row.trim_start().starts_with(CHIP_CLOSE)));
    }
}
