use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the completion notice, dismissed by any keypress.
pub fn render_notice(f: &mut Frame, message: &str) {
    let area = f.area();
    let width = ((message.len() + 8) as u16).clamp(30, area.width.max(30));
    let height = 6;
    let notice_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height,
    };

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue...",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Done ")
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(Clear, notice_area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        notice_area,
    );
}
