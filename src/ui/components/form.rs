use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{ui::components::spinner::Spinner, util::colors};

const CURSOR: &str = "▏";

pub const LINK_LABEL: &str = "Spotify Playlist Link:";
pub const LINK_PLACEHOLDER: &str = "e.g., https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M";
pub const SUBMIT_LABEL: &str = "Find Top 5 Tracks";
pub const BUSY_LABEL: &str = "Analyzing Playlist...";

/// Link field plus submit control. The control is inert while loading.
pub struct LinkForm<'a> {
    input: &'a str,
    is_loading: bool,
}

impl<'a> LinkForm<'a> {
    pub fn new(input: &'a str, is_loading: bool) -> Self {
        Self { input, is_loading }
    }

    pub const fn height() -> u16 {
        5
    }
}

impl Widget for LinkForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(LINK_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::TEXT))
            .render(chunks[0], buf);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(if self.is_loading {
                colors::NEUTRAL
            } else {
                colors::PRIMARY
            }));

        // One column goes to the cursor.
        let room = usize::from(area.width.saturating_sub(2)).saturating_sub(CURSOR.width());
        let visible = visible_tail(self.input, room);
        let alignment = if visible.len() < self.input.len() {
            Alignment::Left
        } else {
            Alignment::Center
        };

        let field = if self.input.is_empty() {
            Line::from(Span::styled(
                LINK_PLACEHOLDER,
                Style::default().fg(colors::NEUTRAL),
            ))
        } else {
            Line::from(vec![
                Span::raw(visible),
                Span::styled(CURSOR, Style::default().fg(colors::PRIMARY)),
            ])
        };

        Paragraph::new(field)
            .block(input_block)
            .alignment(alignment)
            .render(chunks[1], buf);

        if self.is_loading {
            Spinner::default()
                .with_style(Style::default().fg(colors::NEUTRAL))
                .with_label(BUSY_LABEL)
                .render(chunks[2], buf);
        } else {
            Paragraph::new(Line::from(format!("[ {SUBMIT_LABEL} ]")))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .render(chunks[2], buf);
        }
    }
}

/// The longest suffix of `input` that fits into `width` columns.
fn visible_tail(input: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = input.len();
    for (i, c) in input.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = i;
    }
    &input[start..]
}
