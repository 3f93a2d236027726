use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTracksRequest<'a> {
    pub playlist_link: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackEntry {
    pub name: String,
    pub artist: String,
}

impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.name, self.artist)
    }
}

/// Successful response of `/get_top_5_from_playlist`.
///
/// The backend omits `top_tracks` entirely when a playlist has no tracks
/// and only sends a `message`. An explicit `null` means the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopTracksResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub top_tracks: Vec<TrackEntry>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TrackEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TrackEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_field() {
        let body = serde_json::to_value(TopTracksRequest {
            playlist_link: "open.spotify.com/playlist/abc",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "playlistLink": "open.spotify.com/playlist/abc" })
        );
    }

    #[test]
    fn message_only_response_has_no_tracks() {
        let result: TopTracksResult =
            serde_json::from_str(r#"{"message":"No tracks found in this playlist."}"#).unwrap();
        assert!(result.top_tracks.is_empty());
        assert_eq!(
            result.message.as_deref(),
            Some("No tracks found in this playlist.")
        );
    }

    #[test]
    fn null_tracks_read_as_empty() {
        let result: TopTracksResult =
            serde_json::from_str(r#"{"top_tracks":null,"message":"Nothing here."}"#).unwrap();
        assert!(result.top_tracks.is_empty());
        assert_eq!(result.message.as_deref(), Some("Nothing here."));
    }

    #[test]
    fn track_entry_displays_as_name_by_artist() {
        let track = TrackEntry {
            name: "Around the World".to_string(),
            artist: "Daft Punk".to_string(),
        };
        assert_eq!(track.to_string(), "Around the World by Daft Punk");
    }

    #[test]
    fn track_without_artist_is_rejected() {
        assert!(serde_json::from_str::<TopTracksResult>(r#"{"top_tracks":[{"name":"A"}]}"#).is_err());
    }
}
