use async_trait::async_trait;

use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;
use crate::shared::http::{ApiClient, Auth};

use super::add_flow::SeriesCatalog;
use super::models::{
    AddSeriesPayload, AddedSeries, QualityProfile, RootFolder, Series, SeriesCandidate,
};

pub struct SonarrClient {
    api: ApiClient,
}

impl SonarrClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/api/v3", Auth::Header("X-Api-Key"))?,
        })
    }

    pub async fn list_series(&self) -> AppResult<Vec<Series>> {
        self.api.get("series").await
    }

    pub async fn lookup(&self, term: &str) -> AppResult<Vec<SeriesCandidate>> {
        self.api.get_query("series/lookup", &[("term", term)]).await
    }

    /// Full server-side record, kept as raw JSON for display.
    pub async fn series_detail(&self, id: i64) -> AppResult<serde_json::Value> {
        self.api.get(&format!("series/{}", id)).await
    }

    pub async fn quality_profiles(&self) -> AppResult<Vec<QualityProfile>> {
        self.api.get("qualityprofile").await
    }

    pub async fn root_folders(&self) -> AppResult<Vec<RootFolder>> {
        self.api.get("rootfolder").await
    }

    pub async fn add_series(&self, payload: &AddSeriesPayload) -> AppResult<AddedSeries> {
        self.api.post("series", payload).await
    }

    /// Removes the library entry but keeps files on disk and does not
    /// add an import-list exclusion.
    pub async fn delete_series(&self, id: i64) -> AppResult<()> {
        self.api
            .delete(
                &format!("series/{}", id),
                &[
                    ("deleteFiles", "false"),
                    ("addImportListExclusion", "false"),
                ],
            )
            .await
    }
}

#[async_trait]
impl SeriesCatalog for SonarrClient {
    async fn lookup(&self, term: &str) -> AppResult<Vec<SeriesCandidate>> {
        SonarrClient::lookup(self, term).await
    }

    async fn list_series(&self) -> AppResult<Vec<Series>> {
        SonarrClient::list_series(self).await
    }

    async fn quality_profiles(&self) -> AppResult<Vec<QualityProfile>> {
        SonarrClient::quality_profiles(self).await
    }

    async fn root_folders(&self) -> AppResult<Vec<RootFolder>> {
        SonarrClient::root_folders(self).await
    }

    async fn add_series(&self, payload: &AddSeriesPayload) -> AppResult<AddedSeries> {
        SonarrClient::add_series(self, payload).await
    }
}
