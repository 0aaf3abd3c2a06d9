#[cfg(test)]
#[path = "match_cards_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::MatchResult;

const INDENT: &str = "  ";

fn wrap(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut char_count = 0;
    let mut current_line: Vec<&str> = vec![];

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !current_line.is_empty() && word_len + char_count + 1 > line_max_width {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            char_count = word_len + 1;
        } else {
            current_line.push(word);
            char_count += word_len + 1;
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    return lines;
}

fn score_style(score: f64) -> Style {
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if score >= 70.0 {
        style = style.fg(Color::Green);
    } else if score >= 40.0 {
        style = style.fg(Color::Yellow);
    }

    return style;
}

pub struct MatchCards {}

impl MatchCards {
    /// Text for the matches panel when there is nothing to list yet.
    pub fn placeholder(is_calculating: bool) -> &'static str {
        if is_calculating {
            return "Finding your matches using AI...";
        }

        return "Add food preferences and press CTRL+F to calculate matches.";
    }

    /// Renders the matches as cards in the order given, one blank line apart.
    pub fn as_lines(matches: &[MatchResult], line_width: usize) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line<'static>> = vec![];

        for (idx, entry) in matches.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }

            let score = entry.score_label();
            let used = entry.name.chars().count() + score.chars().count();
            let padding = line_width.saturating_sub(used).max(1);
            lines.push(Line::from(vec![
                Span::styled(entry.name.to_string(), bold),
                Span::raw(" ".repeat(padding)),
                Span::styled(score, score_style(entry.score)),
            ]));

            for (label, value) in entry.evidence() {
                let label = format!("{label}:");
                let wrapped = wrap(
                    &format!("{label} {value}"),
                    line_width.saturating_sub(INDENT.len()),
                );

                for (line_idx, line) in wrapped.into_iter().enumerate() {
                    if line_idx == 0 && line.starts_with(&label) {
                        let rest = line[label.len()..].to_string();
                        lines.push(Line::from(vec![
                            Span::raw(INDENT),
                            Span::styled(label.to_string(), bold),
                            Span::raw(rest),
                        ]));
                    } else {
                        lines.push(Line::from(vec![Span::raw(INDENT), Span::raw(line)]));
                    }
                }
            }
        }

        return lines;
    }
}
