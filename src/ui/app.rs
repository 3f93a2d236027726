use std::sync::Arc;

use flume::{Receiver, Sender};

use ratatui::Frame;

use crate::{
    config::AppConfig,
    event::events::Event,
    http::{ApiService, TopTracksSource},
    util::task::TaskManager,
};

use super::{
    message::AppMessage,
    state::{Effect, FormMessage, FormState, RequestId},
    tui::Tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub source: Arc<dyn TopTracksSource>,
    pub state: FormState,
    pub tasks: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let api = ApiService::new(config)?;
        tracing::info!(endpoint = api.endpoint(), "app_started");
        Ok(Self::with_source(Arc::new(api)))
    }

    pub fn with_source(source: Arc<dyn TopTracksSource>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            source,
            state: FormState::default(),
            tasks: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    pub fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Submit => self.dispatch(FormMessage::Submit {
                request_id: RequestId::new(),
            }),
            AppMessage::Edit(edit) => self.dispatch(FormMessage::Edit(edit)),
            AppMessage::ScrollResults(scroll) => self.dispatch(FormMessage::Scroll(scroll)),
        }
    }

    pub fn dispatch(&mut self, message: FormMessage) {
        if let Some(effect) = self.state.apply(message) {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::FetchTopTracks {
                request_id,
                playlist_link,
            } => {
                let source = self.source.clone();
                let tx = self.event_tx.clone();

                self.tasks.spawn(
                    request_id,
                    tokio::spawn(async move {
                        let event = match source.fetch_top_tracks(&playlist_link).await {
                            Ok(result) => Event::TopTracksFetched(request_id, result),
                            Err(e) => Event::FetchError(request_id, e),
                        };
                        let _ = tx.send(event);
                    }),
                );
            }
        }
    }
}
