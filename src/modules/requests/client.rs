use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;
use crate::shared::http::{ApiClient, Auth};

use super::models::{CreateRequest, MediaRequest, SearchResponse, SeasonSelection};

pub struct JellyseerrClient {
    api: ApiClient,
}

impl JellyseerrClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/api/v1", Auth::Header("X-Api-Key"))?,
        })
    }

    pub async fn search(&self, query: &str) -> AppResult<SearchResponse> {
        self.api.get_query("search", &[("query", query)]).await
    }

    /// TV requests without an explicit season list ask for all seasons.
    pub async fn request(
        &self,
        media_type: &str,
        tmdb_id: i64,
        seasons: Option<Vec<i32>>,
    ) -> AppResult<MediaRequest> {
        let seasons = if media_type == "tv" {
            Some(
                seasons
                    .map(SeasonSelection::Numbers)
                    .unwrap_or_else(SeasonSelection::all),
            )
        } else {
            None
        };
        let payload = CreateRequest {
            media_type: media_type.to_string(),
            media_id: tmdb_id,
            seasons,
        };
        self.api.post("request", &payload).await
    }
}
