use crate::{
    http::{error::FetchError, models::TopTracksResult},
    ui::state::RequestId,
};

/// Results of background work, delivered back to the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    TopTracksFetched(RequestId, TopTracksResult),
    FetchError(RequestId, FetchError),
}

impl Event {
    pub fn request_id(&self) -> RequestId {
        match self {
            Event::TopTracksFetched(request_id, _) | Event::FetchError(request_id, _) => *request_id,
        }
    }
}
