use serde::{Deserialize, Deserializer};

/// Bitrates arrive as either a formatted string ("12.4 Mbps") or a bare
/// number depending on the endpoint; normalize to a display string.
pub fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Str(s) => s,
        Raw::Int(v) => v.to_string(),
        Raw::Float(v) => v.to_string(),
    }))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub servers: Vec<ServerHealth>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerHealth {
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub online: bool,
    pub active_streams: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_streams: i64,
    pub total_users: i64,
    pub total_sessions: i64,
    pub recent_violations: i64,
    pub timestamp: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamsData {
    #[serde(default)]
    pub summary: StreamSummary,
    #[serde(default)]
    pub data: Vec<StreamSession>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub total: Option<i64>,
    pub transcodes: Option<i64>,
    pub direct_streams: Option<i64>,
    pub direct_plays: Option<i64>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub total_bitrate: Option<String>,
    #[serde(default)]
    pub by_server: Vec<ServerStreamSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStreamSummary {
    pub server_name: String,
    pub total: i64,
    #[serde(default, deserialize_with = "flexible_string")]
    pub total_bitrate: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSession {
    pub media_title: Option<String>,
    pub show_title: Option<String>,
    pub season_number: Option<i64>,
    pub episode_number: Option<i64>,
    pub username: Option<String>,
    pub state: Option<String>,
    pub is_transcode: Option<bool>,
    pub video_decision: Option<String>,
    pub device: Option<String>,
    pub player: Option<String>,
    pub bitrate: Option<i64>,
    pub server_name: Option<String>,
}

impl StreamSession {
    /// "Show - Episode (S01E02)" for episodes, bare title otherwise.
    pub fn display_media(&self) -> String {
        let title = self
            .media_title
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        match &self.show_title {
            Some(show) => {
                let mut media = format!("{} - {}", show, title);
                if let (Some(season), Some(episode)) = (self.season_number, self.episode_number) {
                    media.push_str(&format!(" (S{:02}E{:02})", season, episode));
                }
                media
            }
            None => title,
        }
    }
}

/// Paginated list envelope shared by users/violations/history.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageMeta {
    pub page: Option<i64>,
    pub total: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredUser {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub trust_score: Option<i64>,
    pub total_violations: Option<i64>,
    pub session_count: Option<i64>,
    pub last_activity_at: Option<String>,
    pub server_name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule: Option<ViolationRule>,
    pub user: Option<AccountRef>,
    pub severity: Option<String>,
    pub acknowledged: Option<bool>,
    pub created_at: String,
    pub server_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationRule {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountRef {
    pub username: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub media_title: Option<String>,
    pub show_title: Option<String>,
    pub season_number: Option<i64>,
    pub episode_number: Option<i64>,
    pub user: Option<AccountRef>,
    pub started_at: String,
    pub stopped_at: Option<String>,
    pub duration_ms: Option<i64>,
    pub progress_ms: Option<i64>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub year: Option<String>,
    pub media_type: Option<String>,
    pub device: Option<String>,
    pub server_name: Option<String>,
}

impl SessionRecord {
    pub fn display_media(&self) -> String {
        let title = self
            .media_title
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        match &self.show_title {
            Some(show) => {
                let mut media = format!("{} - {}", show, title);
                if let (Some(season), Some(episode)) = (self.season_number, self.episode_number) {
                    media.push_str(&format!(" (S{:02}E{:02})", season, episode));
                }
                media
            }
            None => title,
        }
    }
}
