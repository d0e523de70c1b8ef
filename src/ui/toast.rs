use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a transient status message anchored near the bottom of the screen.
///
/// Messages starting with "Error:" get the error styling; everything else is
/// treated as a success/progress note.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let is_error = message.starts_with("Error:");
    let color = if is_error { Color::Red } else { Color::Green };
    let marker = if is_error { "✗" } else { "✓" };

    let width = ((message.len() + 6) as u16).min(area.width.max(20)).max(20);
    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", marker),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message),
    ]);

    // Clear first so the browser list does not bleed through
    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        toast_area,
    );
}
