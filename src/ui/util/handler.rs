use ratatui::crossterm::event::KeyEvent;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::{FormMessage, InputEdit},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains whatever background
    /// work has reported back in the meantime.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        Self::drain_actions(app);
        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => app.update(AppMessage::Edit(InputEdit::Paste(text))),
            TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
        }

        Ok(())
    }

    pub fn drain_actions(app: &mut App) {
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        app.tasks.finish(evt.request_id());

        let (request_id, outcome) = match evt {
            Event::TopTracksFetched(request_id, result) => (request_id, Ok(result)),
            Event::FetchError(request_id, e) => (request_id, Err(e)),
        };
        app.dispatch(FormMessage::Settled {
            request_id,
            outcome,
        });
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if let Some(msg) = InputHandler::handle_key(evt, app.state.is_loading) {
            app.update(msg);
        }
    }
}
