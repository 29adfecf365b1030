use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;
use crate::shared::http::{ApiClient, Auth};

use super::models::ApiEnvelope;

/// Tautulli exposes one endpoint; the operation is the `cmd` query
/// parameter and the key rides along as `apikey`.
pub struct TautulliClient {
    api: ApiClient,
}

impl TautulliClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/api/v2", Auth::QueryParam("apikey"))?,
        })
    }

    /// Issue `cmd` with the given parameters and unwrap the response
    /// envelope, returning the raw `data` payload.
    pub async fn call(&self, cmd: &str, params: &[(&str, String)]) -> AppResult<serde_json::Value> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 1);
        query.push(("cmd", cmd.to_string()));
        query.extend_from_slice(params);
        let envelope: ApiEnvelope = self.api.get_query("", &query).await?;
        envelope.into_data()
    }
}
