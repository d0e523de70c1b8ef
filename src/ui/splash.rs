use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BANNER: &str = r"
  __ _ _ __ ___| |_ _   _(_)
 / _` | '__/ __| __| | | | |
| (_| | | | (__| |_| |_| | |
 \__,_|_|  \___|\__|\__,_|_|
";

/// Render the startup banner, dismissed by any keypress.
pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = BANNER
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("terminal archive manager"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "press any key",
        Style::default().fg(Color::DarkGray),
    )));

    let area = f.area();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

    // Vertically center the banner
    let banner_height = 10u16;
    let top = area.height.saturating_sub(banner_height) / 2;
    let centered = ratatui::layout::Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: banner_height.min(area.height),
    };
    f.render_widget(paragraph, centered);
}
