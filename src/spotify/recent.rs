use crate::{
    types::{Play, RecentlyPlayedResponse},
    utils::{self, ListeningZone},
};

/// Converts a saved recently-played response into plays.
///
/// The response comes from `GET /me/player/recently-played`. The play duration
/// is the track length, since the endpoint does not report how long a track
/// actually played; no minimum-duration filter applies. Items without an
/// artist or with an unparseable `played_at` are skipped.
pub fn process_recently_played(response: &RecentlyPlayedResponse, zone: ListeningZone) -> Vec<Play> {
    response
        .items
        .iter()
        .filter_map(|item| {
            let artist = item.track.artists.first()?;
            let played_at = utils::parse_timestamp(&item.played_at)?;

            Some(Play {
                track_name: item.track.name.clone(),
                artist_name: artist.name.clone(),
                album_name: item.track.album.name.clone(),
                played_at,
                local_time: zone.localize(&played_at),
                ms_played: item.track.duration_ms,
                platform: None,
            })
        })
        .collect()
}
