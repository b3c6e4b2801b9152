//! Dashboard metrics components
//!
//! Renders the net-flow metric and the flow counters

use super::super::state::DashboardState;
use super::super::utils::format_token_amount;
use crate::consts::cli_consts::simulation::EXCHANGE_ADDRESSES;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the metrics section.
pub fn render_metrics_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let metrics_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_net_flow_panel(f, metrics_chunks[0], state);
    render_flow_stats(f, metrics_chunks[1], state);
}

/// Render the running net-flow metric.
pub fn render_net_flow_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let flow_color = if state.net_flow_pol >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(Span::styled(
            format_token_amount(state.net_flow_pol),
            Style::default().fg(flow_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Net flow into tracked exchange wallets",
            Style::default().fg(Color::Gray),
        )),
    ];

    let flow_block = Block::default()
        .title("NET FLOW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(flow_color))
        .padding(Padding::uniform(1));

    let flow_paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(flow_block)
        .wrap(Wrap { trim: true });
    f.render_widget(flow_paragraph, area);
}

/// Render the flow counters panel.
pub fn render_flow_stats(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut stats_lines = Vec::new();

    stats_lines.push(Line::from(vec![
        Span::styled("Transfers: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", state.transfers_seen),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    stats_lines.push(Line::from(vec![
        Span::styled("Volume: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_token_amount(state.total_volume_pol),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    stats_lines.push(Line::from(vec![
        Span::styled("Tracked wallets: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", EXCHANGE_ADDRESSES.len()),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    let last_amount = state
        .transfers
        .front()
        .map(|transfer| format_token_amount(transfer.amount_pol))
        .unwrap_or_else(|| "None".to_string());
    stats_lines.push(Line::from(vec![
        Span::styled("Last transfer: ", Style::default().fg(Color::Gray)),
        Span::styled(last_amount, Style::default().fg(Color::Yellow)),
    ]));

    let stats_block = Block::default()
        .title("FLOW STATS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let stats_paragraph = Paragraph::new(stats_lines)
        .block(stats_block)
        .wrap(Wrap { trim: true });
    f.render_widget(stats_paragraph, area);
}
