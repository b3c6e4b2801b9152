//! Dashboard header component
//!
//! Renders the title, the connection indicator and the last-update clock

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and connection status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("POLYGON POL INDEXER v{version}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Status line: connection indicator on the left, clock on the right
    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(header_chunks[1]);

    let (dot_color, status_text) = if state.connected {
        (
            Color::Green,
            format!("Connected to {}", state.environment.network_name()),
        )
    } else {
        (Color::Red, "Disconnected".to_string())
    };

    // The dot pulses while connected - loops every 10 ticks
    let status_dot = if state.connected && state.tick % 10 < 5 {
        "○ "
    } else {
        "● "
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(status_dot, Style::default().fg(dot_color)),
        Span::styled(
            status_text,
            Style::default()
                .fg(dot_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, status_chunks[0]);

    let clock_text = if state.last_update.is_empty() {
        "Last update: --".to_string()
    } else {
        format!("Last update: {}", state.last_update)
    };
    let clock = Paragraph::new(clock_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(clock, status_chunks[1]);
}
