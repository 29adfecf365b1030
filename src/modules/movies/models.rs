use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<i64>,
    pub has_file: Option<bool>,
}

/// One `movie/lookup` result; unreleased films may carry no TMDB id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCandidate {
    pub title: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<i64>,
}
