//! Dashboard info panel component
//!
//! Renders network and session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the network info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Mainnet => Color::Green,
        Environment::Local => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Network: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Endpoint: {}", state.environment.rpc_url()),
        Style::default().fg(Color::LightBlue),
    )]));

    // Version info
    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    // The feed is fabricated client-side; say so where the operator looks
    info_lines.push(Line::from(vec![Span::styled(
        "Feed: Simulated",
        Style::default().fg(Color::LightYellow),
    )]));

    let info_block = Block::default()
        .title("NETWORK INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
