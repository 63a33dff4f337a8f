use tabled::Table;

use crate::{
    cli::{connect, spinner},
    error, info, success,
    types::TrackTableRow,
    utils, warning,
};

pub async fn album(id: String, play: bool, save: bool) {
    let client = connect().await;

    let pb = spinner("Fetching album...");
    let album = client.albums().get(&id, None).await;
    pb.finish_and_clear();

    let album = match album {
        Ok(a) => a,
        Err(e) => error!("Failed to fetch album {}. Err: {}", id, e),
    };

    info!(
        "{} by {} ({}, {} tracks)",
        album.name,
        utils::artist_names(album.artists.iter().map(|a| a.name.as_str())),
        album.release_date,
        album.total_tracks
    );

    match &album.tracks {
        Some(page) => {
            let rows: Vec<TrackTableRow> = page
                .items
                .iter()
                .map(|t| TrackTableRow {
                    number: t.track_number,
                    name: t.name.clone(),
                    artists: utils::artist_names(t.artists.iter().map(|a| a.name.as_str())),
                    duration: utils::format_duration(t.duration_ms),
                })
                .collect();
            println!("{}", Table::new(rows));
            if page.next.is_some() {
                warning!("Showing {} of {} tracks", page.items.len(), page.total);
            }
        }
        None => warning!("Album has no track listing"),
    }

    if save {
        match album.save().await {
            Ok(_) => success!("Saved {} to your library", album.name),
            Err(e) => error!("Failed to save album. Err: {}", e),
        }
    }

    if play {
        match album.play().await {
            Ok(_) => success!("Playing {}", album.name),
            Err(e) => error!("Failed to start playback. Err: {}", e),
        }
    }
}
