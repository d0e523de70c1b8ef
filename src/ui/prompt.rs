//! Archive name prompt
//!
//! Echoing text input with a block cursor, centered on screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the output-archive-name input box.
pub fn render_name_prompt(f: &mut Frame, input: &str) {
    let area = f.area();
    let prompt_width = 60.min(area.width);
    let prompt_height = 5;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let lines = vec![
        Line::from(vec![Span::raw(input), Span::styled("█", cursor_style)]),
        Line::from(Span::styled(
            "Enter: compress   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Output archive name (suffix picks the format) ")
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, prompt_area);
    f.render_widget(Paragraph::new(lines).block(block), prompt_area);
}
