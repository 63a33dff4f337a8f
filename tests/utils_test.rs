use sporlapi::Error;
use sporlapi::spotify::{ResourceType, SpotifyUri};
use sporlapi::utils::*;

#[test]
fn test_query_skips_missing_values() {
    let query = Query::new()
        .param("limit", 20)
        .opt::<u32>("offset", None)
        .opt("market", Some("DE"))
        .ids("ids", &[]);

    assert_eq!(
        query.pairs(),
        &[
            ("limit".to_string(), "20".to_string()),
            ("market".to_string(), "DE".to_string()),
        ]
    );
}

#[test]
fn test_endpoint_without_query() {
    let url = endpoint("https://api.spotify.com/v1", &["artists", "abc123"], &Query::new()).unwrap();
    assert_eq!(url, "https://api.spotify.com/v1/artists/abc123");
}

#[test]
fn test_endpoint_normalizes_slashes() {
    let url = endpoint("https://api.spotify.com/v1/", &["me"], &Query::new()).unwrap();
    assert_eq!(url, "https://api.spotify.com/v1/me");
}

#[test]
fn test_endpoint_encodes_query() {
    let query = Query::new().param("q", "daft punk & friends").param("type", "artist,album");
    let url = endpoint("https://api.spotify.com/v1", &["search"], &query).unwrap();

    assert_eq!(
        url,
        "https://api.spotify.com/v1/search?q=daft+punk+%26+friends&type=artist%2Calbum"
    );
}

#[test]
fn test_endpoint_rejects_invalid_base() {
    let err = endpoint("not a url", &["me"], &Query::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));

    let err = endpoint("mailto:someone@example.com", &["me"], &Query::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}

#[test]
fn test_endpoint_keeps_ids_inside_their_segment() {
    let base = "https://api.spotify.com/v1";

    let url = endpoint(base, &["audio-features", "../me"], &Query::new()).unwrap();
    assert_eq!(url, "https://api.spotify.com/v1/audio-features/..%2Fme");

    let query = Query::new().param("market", "US");
    let url = endpoint(base, &["albums", "abc?market=XX"], &query).unwrap();
    assert_eq!(url, "https://api.spotify.com/v1/albums/abc%3Fmarket=XX?market=US");

    let url = endpoint(base, &["artists", "abc#frag", "albums"], &Query::new()).unwrap();
    assert_eq!(url, "https://api.spotify.com/v1/artists/abc%23frag/albums");
}

#[test]
fn test_endpoint_rejects_dot_and_empty_segments() {
    let base = "https://api.spotify.com/v1";

    for segment in ["", " ", ".", ".."] {
        let err = endpoint(base, &["tracks", segment], &Query::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)), "{segment:?}");
    }
}

#[test]
fn test_join_ids_trims_and_skips_empty() {
    assert_eq!(join_ids(&["a", " b ", "", "c"]), "a,b,c");
    assert_eq!(join_ids(&[]), "");
}

#[test]
fn test_require_ids() {
    assert!(require_ids(&["abc"]).is_ok());
    assert!(matches!(require_ids(&[]), Err(Error::InvalidRequest(_))));
    assert!(matches!(require_ids(&["", " "]), Err(Error::InvalidRequest(_))));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(215_000), "3:35");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_artist_names() {
    assert_eq!(artist_names(["Daft Punk", "Pharrell Williams"]), "Daft Punk, Pharrell Williams");
    assert_eq!(artist_names(Vec::<&str>::new()), "");
}

#[test]
fn test_spotify_uri_parse() {
    let uri: SpotifyUri = "spotify:album:4aawyAB9vmqN3uQ7FjRGTy".parse().unwrap();
    assert_eq!(uri.kind, ResourceType::Album);
    assert_eq!(uri.id, "4aawyAB9vmqN3uQ7FjRGTy");
    assert_eq!(uri.to_string(), "spotify:album:4aawyAB9vmqN3uQ7FjRGTy");
}

#[test]
fn test_spotify_uri_rejects_malformed() {
    for input in [
        "",
        "spotify:album",
        "spotify:album:",
        "open:album:abc",
        "spotify:album:abc:extra",
        "spotify:galaxy:abc",
    ] {
        let result = input.parse::<SpotifyUri>();
        assert!(
            matches!(result, Err(Error::InvalidUri(_))),
            "expected {input:?} to be rejected"
        );
    }
}
