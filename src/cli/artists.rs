use tabled::Table;

use crate::{
    cli::{connect, spinner},
    error, info, success,
    types::{ArtistTableRow, TrackTableRow},
    utils,
};

pub async fn artist(id: String, top_tracks: bool, country: String, follow: bool) {
    let client = connect().await;

    let pb = spinner("Fetching artist...");
    let artist = client.artists().get(&id).await;
    pb.finish_and_clear();

    let artist = match artist {
        Ok(a) => a,
        Err(e) => error!("Failed to fetch artist {}. Err: {}", id, e),
    };

    let row = ArtistTableRow {
        name: artist.name.clone(),
        genres: artist.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
        followers: artist.followers.total,
    };
    println!("{}", Table::new([row]));

    if top_tracks {
        let pb = spinner("Fetching top tracks...");
        let tracks = artist.top_tracks(&country).await;
        pb.finish_and_clear();

        match tracks {
            Ok(tracks) => {
                let rows: Vec<TrackTableRow> = tracks
                    .iter()
                    .enumerate()
                    .map(|(i, t)| TrackTableRow {
                        number: i as u32 + 1,
                        name: t.name.clone(),
                        artists: utils::artist_names(t.artists.iter().map(|a| a.name.as_str())),
                        duration: utils::format_duration(t.duration_ms),
                    })
                    .collect();
                info!("Top tracks in {}", country);
                println!("{}", Table::new(rows));
            }
            Err(e) => error!("Failed to fetch top tracks. Err: {}", e),
        }
    }

    if follow {
        match artist.follow().await {
            Ok(_) => success!("Now following {}", artist.name),
            Err(e) => error!("Failed to follow {}. Err: {}", artist.name, e),
        }
    }
}
