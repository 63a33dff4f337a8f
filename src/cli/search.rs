use tabled::Table;

use crate::{
    cli::{connect, spinner},
    error, info,
    spotify::SearchType,
    types::{AlbumTableRow, ArtistTableRow, TrackTableRow},
    utils, warning,
};

pub async fn search(query: String, types: Vec<SearchType>, limit: Option<u32>) {
    let client = connect().await;

    let types = if types.is_empty() {
        vec![SearchType::Artist, SearchType::Album, SearchType::Track]
    } else {
        types
    };

    let pb = spinner(&format!("Searching for \"{}\"...", query));
    let results = client.search().search(&query, &types, limit, None, None).await;
    pb.finish_and_clear();

    let results = match results {
        Ok(r) => r,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    if let Some(artists) = results.artists {
        info!("Artists ({} total)", artists.total);
        let rows: Vec<ArtistTableRow> = artists
            .items
            .into_iter()
            .map(|a| ArtistTableRow {
                name: a.name,
                genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
                followers: a.followers.total,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(albums) = results.albums {
        info!("Albums ({} total)", albums.total);
        let rows: Vec<AlbumTableRow> = albums
            .items
            .into_iter()
            .map(|a| AlbumTableRow {
                date: a.release_date,
                artists: utils::artist_names(a.artists.iter().map(|x| x.name.as_str())),
                name: a.name,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(tracks) = results.tracks {
        info!("Tracks ({} total)", tracks.total);
        let rows: Vec<TrackTableRow> = tracks
            .items
            .into_iter()
            .enumerate()
            .map(|(i, t)| TrackTableRow {
                number: i as u32 + 1,
                artists: utils::artist_names(t.artists.iter().map(|x| x.name.as_str())),
                duration: utils::format_duration(t.duration_ms),
                name: t.name,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(playlists) = results.playlists {
        info!("Playlists ({} total)", playlists.total);
        // the API returns null entries for playlists that are no longer available
        for playlist in playlists.items.into_iter().flatten() {
            println!("  {} ({})", playlist.name, playlist.uri);
        }
        if playlists.total == 0 {
            warning!("No playlists found");
        }
    }
}
