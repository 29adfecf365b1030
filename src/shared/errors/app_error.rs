use thiserror::Error;

/// Title + year pair carried by [`AppError::AmbiguousSelection`] so the
/// message can list what the catalog actually returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSummary {
    pub title: String,
    pub year: Option<i32>,
}

impl std::fmt::Display for CandidateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{} (?)", self.title),
        }
    }
}

fn join_candidates(candidates: &[CandidateSummary]) -> String {
    candidates
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The remote accepted the HTTP exchange but reported failure in-band
    /// (Tautulli's `result != "success"` envelope).
    #[error("API error: {0}")]
    Remote(String),

    #[error("no results for '{term}'")]
    NoResults { term: String },

    /// No case-insensitive exact title match; carries at most the first
    /// five candidates in catalog order.
    #[error("no exact title match for '{}'. Top results: {}", .term, join_candidates(.candidates))]
    AmbiguousSelection {
        term: String,
        candidates: Vec<CandidateSummary>,
    },

    #[error("unknown quality profile '{}'. Available: {}", .token, .available.join(", "))]
    UnknownQualityProfile {
        token: String,
        available: Vec<String>,
    },

    #[error("unknown root folder '{}'. Available: {}", .token, .available.join(", "))]
    UnknownRootFolder {
        token: String,
        available: Vec<String>,
    },

    #[error("no root folders configured")]
    NoRootFolderConfigured,

    #[error("missing TVDB ID for '{title}'")]
    MissingExternalId { title: String },

    #[error("not found in library: '{term}'")]
    NotInLibrary { term: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport("request timed out".to_string())
        } else if err.is_connect() {
            AppError::Transport(format!("connection failed: {}", err))
        } else if err.is_decode() {
            AppError::Serialization(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_selection_lists_candidates() {
        let err = AppError::AmbiguousSelection {
            term: "the office".to_string(),
            candidates: vec![
                CandidateSummary {
                    title: "The Office (US)".to_string(),
                    year: Some(2005),
                },
                CandidateSummary {
                    title: "The Office".to_string(),
                    year: None,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "no exact title match for 'the office'. Top results: The Office (US) (2005); The Office (?)"
        );
    }

    #[test]
    fn unknown_quality_profile_lists_names() {
        let err = AppError::UnknownQualityProfile {
            token: "UHD".to_string(),
            available: vec!["Any".to_string(), "HD-1080p".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown quality profile 'UHD'. Available: Any, HD-1080p"
        );
    }
}
