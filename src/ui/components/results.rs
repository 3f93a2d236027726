use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::{ui::state::ResultView, util::colors};

pub const RESULTS_HEADING: &str = "Top 5 Tracks";

pub struct ResultsPanel<'a> {
    view: ResultView<'a>,
    scroll: usize,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(view: ResultView<'a>, scroll: usize) -> Self {
        Self { view, scroll }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = match self.view {
            ResultView::Nothing => return,
            ResultView::Error(message) => {
                Paragraph::new(message)
                    .style(Style::default().fg(colors::ERROR))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
                return;
            }
            other => other,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        Paragraph::new(RESULTS_HEADING)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(colors::NEUTRAL)),
            )
            .render(chunks[0], buf);

        match body {
            ResultView::Tracks(tracks) => {
                let items: Vec<ListItem> = tracks
                    .iter()
                    .enumerate()
                    .skip(self.scroll)
                    .map(|(i, track)| {
                        ListItem::new(Line::from(vec![
                            Span::raw(format!("{}. ", i + 1)),
                            Span::styled(
                                track.name.as_str(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(" by "),
                            Span::raw(track.artist.as_str()),
                        ]))
                        .style(Style::default().fg(colors::TEXT))
                    })
                    .collect();

                List::new(items).render(chunks[1], buf);
            }
            ResultView::Empty(message) => {
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(
                        Style::default()
                            .fg(colors::TEXT)
                            .add_modifier(Modifier::ITALIC),
                    )
                    .wrap(Wrap { trim: true })
                    .render(chunks[1], buf);
            }
            ResultView::Nothing | ResultView::Error(_) => {}
        }
    }
}
