use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;
use crate::shared::http::{ApiClient, Auth};

use super::models::{
    DashboardStats, Health, MonitoredUser, Page, SessionRecord, StreamsData, Violation,
};

/// Query-parameter builder for the list endpoints; every filter is
/// optional and omitted filters stay off the wire.
#[derive(Debug, Default, Clone)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub server_id: Option<String>,
    pub severity: Option<String>,
    pub acknowledged: Option<bool>,
    pub state: Option<String>,
    pub media_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl PageQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        if let Some(server_id) = &self.server_id {
            params.push(("serverId", server_id.clone()));
        }
        if let Some(severity) = &self.severity {
            params.push(("severity", severity.clone()));
        }
        if let Some(acknowledged) = self.acknowledged {
            params.push(("acknowledged", acknowledged.to_string()));
        }
        if let Some(state) = &self.state {
            params.push(("state", state.clone()));
        }
        if let Some(media_type) = &self.media_type {
            params.push(("mediaType", media_type.clone()));
        }
        if let Some(start_date) = &self.start_date {
            params.push(("startDate", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            params.push(("endDate", end_date.clone()));
        }
        params
    }
}

pub struct TracearrClient {
    api: ApiClient,
}

impl TracearrClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/api/v1/public", Auth::Bearer)?,
        })
    }

    pub async fn health(&self) -> AppResult<Health> {
        self.api.get("health").await
    }

    pub async fn stats(&self, server_id: Option<&str>) -> AppResult<DashboardStats> {
        let mut params = Vec::new();
        if let Some(server_id) = server_id {
            params.push(("serverId", server_id.to_string()));
        }
        self.api.get_query("stats", &params).await
    }

    pub async fn streams(
        &self,
        server_id: Option<&str>,
        summary_only: bool,
    ) -> AppResult<StreamsData> {
        let mut params = Vec::new();
        if let Some(server_id) = server_id {
            params.push(("serverId", server_id.to_string()));
        }
        if summary_only {
            params.push(("summary", "true".to_string()));
        }
        self.api.get_query("streams", &params).await
    }

    pub async fn users(&self, query: &PageQuery) -> AppResult<Page<MonitoredUser>> {
        self.api.get_query("users", &query.to_params()).await
    }

    pub async fn violations(&self, query: &PageQuery) -> AppResult<Page<Violation>> {
        self.api.get_query("violations", &query.to_params()).await
    }

    pub async fn history(&self, query: &PageQuery) -> AppResult<Page<SessionRecord>> {
        self.api.get_query("history", &query.to_params()).await
    }
}
