#[cfg(test)]
#[path = "textarea_test.rs"]
mod tests;

use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::CursorMove;

pub struct TextArea {}

impl<'a> TextArea {
    fn with_title(title: &'a str, text: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(vec![text.to_string()]);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.move_cursor(CursorMove::End);

        return textarea;
    }

    pub fn login(name: &str) -> tui_textarea::TextArea<'a> {
        return TextArea::with_title("Enter your name", name);
    }

    pub fn food() -> tui_textarea::TextArea<'a> {
        return TextArea::with_title("Enter a food you like... (/describe your tastes)", "");
    }

    /// True when nothing but whitespace has been typed.
    pub fn is_blank(textarea: &tui_textarea::TextArea) -> bool {
        return textarea.lines().iter().all(|line| return line.trim().is_empty());
    }
}
