use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A combined movie/TV search hit. Movies carry `title`/`releaseDate`,
/// TV carries `name`/`firstAirDate`; both sets stay optional and the
/// accessors below pick the right one per media type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: Option<i64>,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
}

impl SearchResult {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown")
    }

    /// Four-digit year prefix of whichever date field applies.
    pub fn display_year(&self) -> String {
        let date = self
            .release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .unwrap_or("");
        date.chars().take(4).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub media_type: String,
    pub media_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<SeasonSelection>,
}

/// Jellyseerr accepts either a season-number list or the string "all".
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SeasonSelection {
    Numbers(Vec<i32>),
    Keyword(String),
}

impl SeasonSelection {
    pub fn all() -> Self {
        SeasonSelection::Keyword("all".to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaRequest {
    pub id: Option<i64>,
    pub status: Option<i64>,
}

impl MediaRequest {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(1) => "Pending",
            Some(2) => "Approved",
            Some(3) => "Declined",
            _ => "Unknown",
        }
    }
}
