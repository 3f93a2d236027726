use std::fmt;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    http::{
        error::FetchError,
        models::{TopTracksResult, TrackEntry},
    },
    util::link::{INVALID_LINK_MESSAGE, is_valid_playlist_link},
};

pub const NO_TRACKS_MESSAGE: &str = "No top tracks found.";

/// Identifies one submission. Only the settlement carrying the latest id is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    Edit(InputEdit),
    Scroll(Scroll),
    Submit {
        request_id: RequestId,
    },
    Settled {
        request_id: RequestId,
        outcome: Result<TopTracksResult, FetchError>,
    },
}

/// Work the caller has to carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTopTracks {
        request_id: RequestId,
        playlist_link: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the result area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Nothing,
    Error(&'a str),
    Tracks(&'a [TrackEntry]),
    Empty(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: String,
    pub result: Option<TopTracksResult>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub pending: Option<RequestId>,
    pub scroll: usize,
}

impl FormState {
    /// The only place the form state changes.
    pub fn apply(&mut self, message: FormMessage) -> Option<Effect> {
        match message {
            FormMessage::Edit(edit) => {
                self.edit(edit);
                None
            }
            FormMessage::Scroll(scroll) => {
                self.scroll(scroll);
                None
            }
            FormMessage::Submit { request_id } => self.submit(request_id),
            FormMessage::Settled {
                request_id,
                outcome,
            } => {
                self.settle(request_id, outcome);
                None
            }
        }
    }

    fn edit(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Insert(c) => self.input.push(c),
            InputEdit::Paste(text) => self
                .input
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r')),
            InputEdit::Backspace => {
                self.input.pop();
            }
            InputEdit::Clear => self.input.clear(),
        }
    }

    fn scroll(&mut self, scroll: Scroll) {
        let len = self.result.as_ref().map_or(0, |r| r.top_tracks.len());
        self.scroll = match scroll {
            Scroll::Up => self.scroll.saturating_sub(1),
            Scroll::Down => (self.scroll + 1).min(len.saturating_sub(1)),
        };
    }

    fn submit(&mut self, request_id: RequestId) -> Option<Effect> {
        self.error_message = None;
        self.result = None;
        self.scroll = 0;

        if !is_valid_playlist_link(&self.input) {
            warn!(input = self.input.as_str(), "playlist_link_rejected");
            // Anything still in flight belongs to an older attempt now.
            self.pending = None;
            self.is_loading = false;
            self.error_message = Some(INVALID_LINK_MESSAGE.to_string());
            return None;
        }

        info!(%request_id, link = self.input.as_str(), "top_tracks_submitted");
        self.is_loading = true;
        self.pending = Some(request_id);

        Some(Effect::FetchTopTracks {
            request_id,
            playlist_link: self.input.clone(),
        })
    }

    fn settle(&mut self, request_id: RequestId, outcome: Result<TopTracksResult, FetchError>) {
        if self.pending != Some(request_id) {
            warn!(%request_id, "stale_settlement_discarded");
            return;
        }

        self.pending = None;
        self.is_loading = false;

        match outcome {
            Ok(result) => {
                info!(%request_id, tracks = result.top_tracks.len(), "top_tracks_loaded");
                self.result = Some(result);
            }
            Err(e) => {
                error!(%request_id, "Error fetching top tracks: {}", e);
                self.error_message = Some(e.user_message());
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> ResultView<'_> {
        if let Some(message) = self.error_message.as_deref().filter(|m| !m.is_empty()) {
            return ResultView::Error(message);
        }

        match &self.result {
            Some(result) if !result.top_tracks.is_empty() => ResultView::Tracks(&result.top_tracks),
            Some(result) => ResultView::Empty(
                result
                    .message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(NO_TRACKS_MESSAGE),
            ),
            None => ResultView::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::ErrorDetail;

    const LINK: &str = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123";

    fn with_input(input: &str) -> FormState {
        let mut state = FormState::default();
        state.apply(FormMessage::Edit(InputEdit::Paste(input.to_string())));
        state
    }

    fn submit(state: &mut FormState) -> (RequestId, Option<Effect>) {
        let request_id = RequestId::new();
        let effect = state.apply(FormMessage::Submit { request_id });
        (request_id, effect)
    }

    fn tracks(entries: &[(&str, &str)]) -> TopTracksResult {
        TopTracksResult {
            top_tracks: entries
                .iter()
                .map(|(name, artist)| TrackEntry {
                    name: name.to_string(),
                    artist: artist.to_string(),
                })
                .collect(),
            message: None,
        }
    }

    #[test]
    fn starts_idle() {
        let state = FormState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.view(), ResultView::Nothing);
        assert!(!state.is_loading);
    }

    #[test]
    fn editing_only_touches_input() {
        let mut state = with_input("open.spotify.com/playlist/ab\r\n");
        assert_eq!(state.input, "open.spotify.com/playlist/ab");

        state.apply(FormMessage::Edit(InputEdit::Insert('c')));
        state.apply(FormMessage::Edit(InputEdit::Backspace));
        state.apply(FormMessage::Edit(InputEdit::Backspace));
        assert_eq!(state.input, "open.spotify.com/playlist/a");
        assert_eq!(state.phase(), Phase::Idle);

        state.apply(FormMessage::Edit(InputEdit::Clear));
        assert!(state.input.is_empty());
    }

    #[test]
    fn invalid_link_sets_error_without_effect() {
        for input in ["", "https://open.spotify.com/album/abc", "open.spotify.com/playlist/abc/"] {
            let mut state = with_input(input);
            let (_, effect) = submit(&mut state);

            assert_eq!(effect, None);
            assert!(!state.is_loading);
            assert_eq!(state.error_message.as_deref(), Some(INVALID_LINK_MESSAGE));
            assert_eq!(state.phase(), Phase::Error);
        }
    }

    #[test]
    fn valid_link_starts_loading_and_requests_fetch() {
        let mut state = with_input(LINK);
        let (request_id, effect) = submit(&mut state);

        assert_eq!(
            effect,
            Some(Effect::FetchTopTracks {
                request_id,
                playlist_link: LINK.to_string(),
            })
        );
        assert!(state.is_loading);
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.view(), ResultView::Nothing);
        // Input is kept after submitting.
        assert_eq!(state.input, LINK);
    }

    #[test]
    fn success_shows_tracks() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Ok(tracks(&[("A", "B")])),
        });

        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Success);
        match state.view() {
            ResultView::Tracks(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].to_string(), "A by B");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn empty_result_falls_back_to_default_message() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Ok(TopTracksResult::default()),
        });

        assert_eq!(state.view(), ResultView::Empty(NO_TRACKS_MESSAGE));
    }

    #[test]
    fn empty_result_prefers_backend_message() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Ok(TopTracksResult {
                top_tracks: vec![],
                message: Some("No tracks found in this playlist.".to_string()),
            }),
        });

        assert_eq!(
            state.view(),
            ResultView::Empty("No tracks found in this playlist.")
        );
    }

    #[test]
    fn failure_shows_error() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Err(FetchError::Http {
                status: 404,
                detail: ErrorDetail::Message("not found".to_string()),
            }),
        });

        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Error);
        match state.view() {
            ResultView::Error(message) => {
                assert!(message.contains("404"));
                assert!(message.contains("not found"));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn resubmitting_clears_previous_outcome() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Err(FetchError::Network("connection refused".to_string())),
        });
        assert_eq!(state.phase(), Phase::Error);

        submit(&mut state);
        assert_eq!(state.error_message, None);
        assert_eq!(state.result, None);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn stale_settlement_is_discarded() {
        let mut state = with_input(LINK);
        let (first, _) = submit(&mut state);
        let (second, _) = submit(&mut state);

        state.apply(FormMessage::Settled {
            request_id: first,
            outcome: Ok(tracks(&[("Old", "Result")])),
        });
        assert!(state.is_loading);
        assert_eq!(state.result, None);

        state.apply(FormMessage::Settled {
            request_id: second,
            outcome: Ok(tracks(&[("New", "Result")])),
        });
        assert!(!state.is_loading);
        assert_eq!(state.result, Some(tracks(&[("New", "Result")])));

        // A late duplicate of the settled request changes nothing either.
        state.apply(FormMessage::Settled {
            request_id: second,
            outcome: Err(FetchError::Network("late".to_string())),
        });
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn invalid_resubmit_supersedes_pending_request() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);

        state.apply(FormMessage::Edit(InputEdit::Clear));
        submit(&mut state);
        assert!(!state.is_loading);

        state.apply(FormMessage::Settled {
            request_id,
            outcome: Ok(tracks(&[("A", "B")])),
        });
        assert_eq!(state.view(), ResultView::Error(INVALID_LINK_MESSAGE));
    }

    #[test]
    fn scrolling_stays_within_results() {
        let mut state = with_input(LINK);
        let (request_id, _) = submit(&mut state);
        state.apply(FormMessage::Settled {
            request_id,
            outcome: Ok(tracks(&[("A", "1"), ("B", "2"), ("C", "3")])),
        });

        state.apply(FormMessage::Scroll(Scroll::Up));
        assert_eq!(state.scroll, 0);
        for _ in 0..5 {
            state.apply(FormMessage::Scroll(Scroll::Down));
        }
        assert_eq!(state.scroll, 2);

        submit(&mut state);
        assert_eq!(state.scroll, 0);
    }
}
