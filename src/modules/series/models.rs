use serde::{Deserialize, Serialize};

/// A series already present in the Sonarr library. Only the fields the
/// commands read are modeled; everything else stays on the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub tvdb_id: Option<i64>,
    pub ended: Option<bool>,
    pub episode_count: Option<i64>,
    pub episode_file_count: Option<i64>,
}

/// One `series/lookup` result. The TVDB id can be absent for catalog
/// entries Sonarr cannot link yet, so it stays optional until the
/// add-flow insists on it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCandidate {
    pub title: String,
    pub year: Option<i32>,
    pub tvdb_id: Option<i64>,
    pub series_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QualityProfile {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RootFolder {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeriesPayload {
    pub title: String,
    pub tvdb_id: i64,
    pub quality_profile_id: i64,
    pub root_folder_path: String,
    pub monitored: bool,
    pub season_folder: bool,
    pub series_type: String,
    pub add_options: AddOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptions {
    pub search_for_missing_episodes: bool,
}

/// What the server echoes back after a successful add.
#[derive(Debug, Clone, Deserialize)]
pub struct AddedSeries {
    pub id: i64,
    pub title: String,
}
