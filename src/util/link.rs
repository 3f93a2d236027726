use lazy_static::lazy_static;
use regex::Regex;

pub const INVALID_LINK_MESSAGE: &str = "Please enter a valid Spotify playlist URL.";

lazy_static! {
    static ref PLAYLIST_LINK: Regex = Regex::new(
        r"^(https?://)?(www\.)?open\.spotify\.com/playlist/[a-zA-Z0-9]+(\?si=[a-zA-Z0-9]+)?$"
    )
    .expect("playlist link pattern is valid");
}

/// Checks the shape of a playlist link. Nothing is trimmed: surrounding
/// whitespace, trailing slashes and extra query parameters are rejected.
pub fn is_valid_playlist_link(input: &str) -> bool {
    PLAYLIST_LINK.is_match(input)
}
