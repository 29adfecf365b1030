use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::shared::errors::{AppError, AppResult};

/// Tautulli wraps every payload in `{"response": {...}}` and reports
/// failure in-band via `result`, regardless of HTTP status.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub response: ResponseBody,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    pub result: String,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl ApiEnvelope {
    pub fn into_data(self) -> AppResult<serde_json::Value> {
        if self.response.result != "success" {
            return Err(AppError::Remote(
                self.response
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        Ok(self.response.data.unwrap_or(serde_json::Value::Null))
    }
}

/// Decode a `data` payload; an absent payload decodes to the type's
/// default, mirroring the service's habit of omitting empty sets.
pub fn parse_data<T>(value: serde_json::Value) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value)?)
}

/// Tautulli serializes many numeric fields as either a number or a
/// string ("3600", "45.0", sometimes ""). Normalize all of them to an
/// integer; empty or unparseable strings become `None`.
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(v)) => Some(v),
        Some(Raw::Float(v)) => Some(v as i64),
        Some(Raw::Str(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryData {
    #[serde(default)]
    pub data: Vec<HistoryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub started: Option<i64>,
    pub user: Option<String>,
    pub full_title: Option<String>,
    pub media_type: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub duration: Option<i64>,
    pub transcode_decision: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TautulliUser {
    pub username: Option<String>,
    pub friendly_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub last_seen: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub section_id: Option<i64>,
    pub section_name: Option<String>,
    pub section_type: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub count: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub parent_count: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub child_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub stream_count: Option<i64>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub user: Option<String>,
    pub full_title: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub progress_percent: Option<i64>,
    pub quality_profile: Option<String>,
    pub transcode_decision: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeStat {
    pub stat_id: String,
    #[serde(default)]
    pub rows: Vec<StatRow>,
}

/// One row of any home-stat section; the populated fields vary by
/// `stat_id`, so everything is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct StatRow {
    pub title: Option<String>,
    pub user: Option<String>,
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub users_watched: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub total_plays: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub total_duration: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub started: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_surfaces_message() {
        let json = r#"{"response": {"result": "error", "message": "Invalid apikey", "data": null}}"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.to_string(), "API error: Invalid apikey");
    }

    #[test]
    fn success_envelope_unwraps_data() {
        let json = r#"{"response": {"result": "success", "message": null, "data": {"stream_count": "2", "sessions": []}}}"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        let activity: Activity = parse_data(envelope.into_data().unwrap()).unwrap();
        assert_eq!(activity.stream_count, Some(2));
    }

    #[test]
    fn missing_data_parses_as_default() {
        let data: HistoryData = parse_data(serde_json::Value::Null).unwrap();
        assert!(data.data.is_empty());
    }

    #[test]
    fn history_record_accepts_mixed_numeric_types() {
        let json = r#"{"started": 1700000000, "user": "alice", "full_title": "Severance", "media_type": "episode", "duration": "3600", "transcode_decision": "direct play"}"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.started, Some(1700000000));
        assert_eq!(record.duration, Some(3600));
    }

    #[test]
    fn flexible_numbers_tolerate_empty_and_float_strings() {
        let json = r#"{"user": "bob", "full_title": "x", "media_type": "movie", "started": "", "duration": "95.5", "transcode_decision": null}"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.started, None);
        assert_eq!(record.duration, Some(95));
    }
}
