use std::time::Duration;

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::ServiceConfig;
use crate::shared::errors::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("arrctl/", env!("CARGO_PKG_VERSION"));

/// How a service expects its API key.
#[derive(Debug, Clone, Copy)]
pub enum Auth {
    /// Fixed header carrying the key verbatim, e.g. `X-Api-Key`.
    Header(&'static str),
    /// `Authorization: Bearer <key>`.
    Bearer,
    /// Query parameter carrying the key, e.g. `apikey` (Tautulli).
    QueryParam(&'static str),
}

/// One authenticated JSON round-trip per call: build URL from base +
/// versioned prefix + path, inject the key, decode the body, classify
/// failures. Non-2xx responses become [`AppError::Api`] with the raw
/// body; network-level failures become [`AppError::Transport`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    prefix: &'static str,
    auth: Auth,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: ServiceConfig, prefix: &'static str, auth: Auth) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            prefix,
            auth,
            api_key: config.api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}{}", self.base_url, self.prefix)
        } else {
            format!("{}{}/{}", self.base_url, self.prefix, path)
        }
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth {
            Auth::Header(name) => request.header(name, &self.api_key),
            Auth::Bearer => request.bearer_auth(&self.api_key),
            Auth::QueryParam(name) => request.query(&[(name, self.api_key.as_str())]),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        self.execute(self.client.get(url)).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("GET {}", url);
        self.execute(self.client.get(url).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(body)).await
    }

    pub async fn delete<Q>(&self, path: &str, query: &Q) -> AppResult<()>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self
            .authenticated(self.client.delete(url).query(query))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.authenticated(request).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
