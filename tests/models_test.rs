//! Wire-format fixtures for the typed response models: realistic
//! payload shapes, null/missing optional fields, and the serialized
//! form of write payloads.

use arrctl::modules::monitor::models::{Health, Page, StreamsData, Violation};
use arrctl::modules::movies::models::Movie;
use arrctl::modules::requests::models::{CreateRequest, MediaRequest, SearchResponse, SeasonSelection};
use arrctl::modules::series::models::{
    AddOptions, AddSeriesPayload, QualityProfile, Series, SeriesCandidate,
};

#[test]
fn series_ignores_unknown_fields_and_defaults_optionals() {
    let json = r#"{
        "id": 3,
        "title": "Severance",
        "year": 2022,
        "tvdbId": 371980,
        "ended": false,
        "episodeCount": 19,
        "episodeFileCount": 19,
        "overview": "Mark leads a team...",
        "network": "Apple TV+"
    }"#;
    let series: Series = serde_json::from_str(json).unwrap();
    assert_eq!(series.tvdb_id, Some(371980));
    assert_eq!(series.episode_file_count, Some(19));

    let sparse: Series = serde_json::from_str(r#"{"id": 4, "title": "Unknown Pilot"}"#).unwrap();
    assert!(sparse.year.is_none());
    assert!(sparse.tvdb_id.is_none());
    assert!(sparse.ended.is_none());
}

#[test]
fn lookup_candidate_may_lack_a_tvdb_id() {
    let json = r#"[{"title": "Some New Show", "year": 2026, "seriesType": "standard"}]"#;
    let candidates: Vec<SeriesCandidate> = serde_json::from_str(json).unwrap();
    assert_eq!(candidates[0].tvdb_id, None);
    assert_eq!(candidates[0].series_type.as_deref(), Some("standard"));
}

#[test]
fn add_payload_serializes_to_camel_case() {
    let payload = AddSeriesPayload {
        title: "The Office".to_string(),
        tvdb_id: 5,
        quality_profile_id: 3,
        root_folder_path: "/tv".to_string(),
        monitored: true,
        season_folder: true,
        series_type: "standard".to_string(),
        add_options: AddOptions {
            search_for_missing_episodes: true,
        },
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["tvdbId"], 5);
    assert_eq!(value["qualityProfileId"], 3);
    assert_eq!(value["rootFolderPath"], "/tv");
    assert_eq!(value["monitored"], true);
    assert_eq!(value["seasonFolder"], true);
    assert_eq!(value["addOptions"]["searchForMissingEpisodes"], true);
}

#[test]
fn quality_profile_list_roundtrip() {
    let json = r#"[{"id": 1, "name": "Any"}, {"id": 4, "name": "HD-1080p"}]"#;
    let profiles: Vec<QualityProfile> = serde_json::from_str(json).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[1].name, "HD-1080p");
}

#[test]
fn movie_downloaded_state_is_optional() {
    let json = r#"{"id": 9, "title": "Heat", "year": 1995, "tmdbId": 949, "hasFile": true}"#;
    let movie: Movie = serde_json::from_str(json).unwrap();
    assert_eq!(movie.has_file, Some(true));

    let sparse: Movie = serde_json::from_str(r#"{"id": 10, "title": "Unreleased"}"#).unwrap();
    assert_eq!(sparse.has_file, None);
}

#[test]
fn search_result_picks_title_and_date_per_media_type() {
    let json = r#"{
        "totalResults": 2,
        "results": [
            {"id": 949, "mediaType": "movie", "title": "Heat", "releaseDate": "1995-12-15", "overview": "..."},
            {"id": 2316, "mediaType": "tv", "name": "The Office", "firstAirDate": "2005-03-24"}
        ]
    }"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.total_results, Some(2));
    assert_eq!(response.results[0].display_title(), "Heat");
    assert_eq!(response.results[0].display_year(), "1995");
    assert_eq!(response.results[1].display_title(), "The Office");
    assert_eq!(response.results[1].display_year(), "2005");
}

#[test]
fn tv_request_without_seasons_sends_the_all_keyword() {
    let request = CreateRequest {
        media_type: "tv".to_string(),
        media_id: 2316,
        seasons: Some(SeasonSelection::all()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["mediaType"], "tv");
    assert_eq!(value["mediaId"], 2316);
    assert_eq!(value["seasons"], "all");
}

#[test]
fn movie_request_omits_seasons_entirely() {
    let request = CreateRequest {
        media_type: "movie".to_string(),
        media_id: 949,
        seasons: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("seasons").is_none());
}

#[test]
fn season_numbers_serialize_as_a_list() {
    let value = serde_json::to_value(SeasonSelection::Numbers(vec![1, 3])).unwrap();
    assert_eq!(value, serde_json::json!([1, 3]));
}

#[test]
fn request_status_labels() {
    let pending: MediaRequest = serde_json::from_str(r#"{"id": 17, "status": 1}"#).unwrap();
    assert_eq!(pending.status_label(), "Pending");
    let unknown: MediaRequest = serde_json::from_str(r#"{"id": 18}"#).unwrap();
    assert_eq!(unknown.status_label(), "Unknown");
}

#[test]
fn health_payload_with_servers() {
    let json = r#"{
        "status": "ok",
        "timestamp": "2026-01-10T18:00:00Z",
        "servers": [
            {"name": "plex-main", "type": "plex", "online": true, "activeStreams": 3},
            {"name": "emby-backup", "type": "emby", "online": false}
        ]
    }"#;
    let health: Health = serde_json::from_str(json).unwrap();
    assert_eq!(health.servers.len(), 2);
    assert_eq!(health.servers[0].active_streams, Some(3));
    assert!(!health.servers[1].online);
}

#[test]
fn streams_summary_accepts_numeric_bitrate() {
    let json = r#"{
        "summary": {
            "total": 2,
            "transcodes": 1,
            "directStreams": 0,
            "directPlays": 1,
            "totalBitrate": 24800,
            "byServer": []
        },
        "data": [
            {
                "mediaTitle": "The Marvelous Pilot",
                "showTitle": "Some Show",
                "seasonNumber": 1,
                "episodeNumber": 2,
                "username": "alice",
                "state": "playing",
                "isTranscode": true,
                "bitrate": 12400,
                "serverName": "plex-main"
            }
        ]
    }"#;
    let streams: StreamsData = serde_json::from_str(json).unwrap();
    assert_eq!(streams.summary.total_bitrate.as_deref(), Some("24800"));
    assert_eq!(
        streams.data[0].display_media(),
        "Some Show - The Marvelous Pilot (S01E02)"
    );
}

#[test]
fn paginated_violations_with_nested_refs() {
    let json = r#"{
        "data": [
            {
                "rule": {"name": "Concurrent streams", "type": "concurrency"},
                "user": {"username": "bob"},
                "severity": "high",
                "acknowledged": false,
                "createdAt": "2026-01-09T21:14:00Z",
                "serverName": "plex-main"
            }
        ],
        "meta": {"page": 1, "total": 12}
    }"#;
    let page: Page<Violation> = serde_json::from_str(json).unwrap();
    assert_eq!(page.meta.total, Some(12));
    let violation = &page.data[0];
    assert_eq!(
        violation.rule.as_ref().unwrap().name.as_deref(),
        Some("Concurrent streams")
    );
    assert_eq!(
        violation.user.as_ref().unwrap().username.as_deref(),
        Some("bob")
    );
}

#[test]
fn empty_page_defaults() {
    let page: Page<Violation> = serde_json::from_str("{}").unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.page, None);
}
