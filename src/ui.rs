use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::app::{App, TITLE};
use crate::theme::{colors, styles};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Greetings panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_greetings(frame, app, chunks[0]);
    draw_status_bar(frame, chunks[1]);
}

fn draw_greetings(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::TEXT_MUTED))
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {TITLE} "), styles::title()));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("environment.helloWorld  ", styles::label()),
            Span::styled(app.hello_from_environment(), styles::environment_value()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("config.helloWorld       ", styles::label()),
            Span::styled(app.hello_from_config(), styles::config_value()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let hint = Line::from(Span::styled(" q / Esc to quit ", styles::status_bar()));
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Left), area);
}
