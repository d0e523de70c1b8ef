use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::model::types::BrowsePurpose;

/// Render the directory browser: current path, key hints, entry list with
/// the highlight marker, and (while compressing) the running selection.
pub fn render_browser(f: &mut Frame, app: &mut App, purpose: BrowsePurpose) {
    let selection_lines = match purpose {
        BrowsePurpose::PickForCompress => (app.model.selection.len().min(5) + 2) as u16,
        BrowsePurpose::PickArchive => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(selection_lines),
        ])
        .split(f.area());

    let hint = match purpose {
        BrowsePurpose::PickForCompress => {
            "Enter: open/select   b: back   q: done selecting   ↑/↓: move"
        }
        BrowsePurpose::PickArchive => {
            "Enter: open/extract   b: back   q: cancel   ↑/↓: move"
        }
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Current directory: {}", app.model.navigation.current_dir.display()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ]);
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = app
        .model
        .navigation
        .entries
        .iter()
        .map(|entry| {
            let style = if entry.is_dir {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let suffix = if entry.is_dir { "/" } else { "" };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", entry.name, suffix),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.model.navigation.selected);
    f.render_stateful_widget(list, chunks[1], &mut state);
    app.model.navigation.selected = state.selected();

    if matches!(purpose, BrowsePurpose::PickForCompress) && chunks[2].height > 0 {
        let mut lines: Vec<Line> = app
            .model
            .selection
            .iter()
            .rev()
            .take(5)
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Line::from(format!("  + {}", name))
            })
            .collect();
        if app.model.selection.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none yet)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let footer = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Selected: {} ", app.model.selection.len())),
        );
        f.render_widget(footer, chunks[2]);
    }
}
