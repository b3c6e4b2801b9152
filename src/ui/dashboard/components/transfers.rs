//! Dashboard transfers panel component
//!
//! Renders the scrolling list of recent transfers, newest first

use super::super::state::DashboardState;
use super::super::utils::{format_token_amount, shorten_address, shorten_hash};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the recent-transfers panel.
pub fn render_transfers_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Show as many rows as fit between the borders and padding
    let max_rows = (area.height.saturating_sub(3)) as usize;
    let row_count = if max_rows > 0 { max_rows } else { 1 };

    let transfer_lines: Vec<Line> = state
        .transfers
        .iter()
        .take(row_count)
        .map(|transfer| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", shorten_hash(&transfer.transaction_hash)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    shorten_address(&transfer.from_address),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" → "),
                Span::styled(
                    shorten_address(&transfer.to_address),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("  {}", format_token_amount(transfer.amount_pol)),
                    Style::default()
                        .fg(Color::LightYellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", transfer.age_label),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let transfers_paragraph = if transfer_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for first transfer...")])
    } else {
        Paragraph::new(transfer_lines)
    };

    let transfers_block = Block::default()
        .title("RECENT TRANSFERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let transfers_widget = transfers_paragraph
        .block(transfers_block)
        .wrap(Wrap { trim: true });

    f.render_widget(transfers_widget, area);
}
