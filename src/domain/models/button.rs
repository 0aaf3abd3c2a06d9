use ratatui::prelude::Alignment;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;

/// A bordered one line button. Disabled buttons are dimmed.
pub struct Button {}

impl<'a> Button {
    pub fn widget(label: &'a str, enabled: bool) -> Paragraph<'a> {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if !enabled {
            style = Style::default().fg(Color::DarkGray);
        }

        return Paragraph::new(label)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center);
    }
}
