use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the top-level menu: compress / extract / quit.
pub fn render_menu(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(f.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " arctui ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items = vec![
        Line::from(Span::styled(
            "Choose an action:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  1  ", Style::default().fg(Color::Yellow)),
            Span::raw("Compress files"),
        ]),
        Line::from(vec![
            Span::styled("  2  ", Style::default().fg(Color::Yellow)),
            Span::raw("Extract an archive"),
        ]),
        Line::from(vec![
            Span::styled("  q  ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]),
    ];

    let body = Paragraph::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);
}
