use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    ui::{
        app::App,
        components::{form::LinkForm, results::ResultsPanel},
        state::FormState,
    },
    util::colors,
};

pub const TITLE: &str = "Spotify Top 5 Playlist Tracks Analyzer";
pub const SUBTITLE: &str =
    "Enter a public Spotify playlist link to find its top 5 most listened tracks.";
const KEY_HINTS: &str = "Enter submit · Ctrl+U clear · ↑/↓ scroll · Esc quit";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.state).render(area, buf);
    }
}

impl Widget for &FormState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title_top(TITLE)
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(KEY_HINTS);
        let inner = frame.inner(area);
        frame.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(LinkForm::height()),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        Paragraph::new(SUBTITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::TEXT))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        LinkForm::new(&self.input, self.is_loading).render(chunks[1], buf);
        ResultsPanel::new(self.view(), self.scroll).render(chunks[3], buf);
    }
}
