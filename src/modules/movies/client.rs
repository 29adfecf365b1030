use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;
use crate::shared::http::{ApiClient, Auth};

use super::models::{Movie, MovieCandidate};

pub struct RadarrClient {
    api: ApiClient,
}

impl RadarrClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/api/v3", Auth::Header("X-Api-Key"))?,
        })
    }

    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.api.get("movie").await
    }

    pub async fn lookup(&self, term: &str) -> AppResult<Vec<MovieCandidate>> {
        self.api.get_query("movie/lookup", &[("term", term)]).await
    }

    pub async fn movie_detail(&self, id: i64) -> AppResult<serde_json::Value> {
        self.api.get(&format!("movie/{}", id)).await
    }
}
