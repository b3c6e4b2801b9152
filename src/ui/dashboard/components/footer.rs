//! Dashboard footer component
//!
//! Renders footer with quit instructions

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer_text = "[Q] Quit | Polygon POL Flow Dashboard".to_string();

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
