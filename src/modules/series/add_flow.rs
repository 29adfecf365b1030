//! The series add-flow: lookup, exact-match disambiguation, duplicate
//! guard, profile/folder resolution, then one submission.
//!
//! The resolution steps are pure functions over data fetched through the
//! [`SeriesCatalog`] port, so the whole flow runs against a mock in
//! tests. Every step is read-only except the final [`SeriesCatalog::add_series`].

use async_trait::async_trait;

use crate::shared::errors::{AppError, AppResult, CandidateSummary};

use super::models::{
    AddOptions, AddSeriesPayload, AddedSeries, QualityProfile, RootFolder, Series, SeriesCandidate,
};

/// How many alternatives an ambiguous lookup reports back.
const MAX_LISTED_ALTERNATIVES: usize = 5;

/// Port over the five Sonarr operations the flow sequences.
#[async_trait]
pub trait SeriesCatalog: Send + Sync {
    async fn lookup(&self, term: &str) -> AppResult<Vec<SeriesCandidate>>;
    async fn list_series(&self) -> AppResult<Vec<Series>>;
    async fn quality_profiles(&self) -> AppResult<Vec<QualityProfile>>;
    async fn root_folders(&self) -> AppResult<Vec<RootFolder>>;
    async fn add_series(&self, payload: &AddSeriesPayload) -> AppResult<AddedSeries>;
}

/// Caller-supplied parameters for one add.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub term: String,
    /// Quality profile id or case-insensitive name.
    pub quality: String,
    /// Root folder override; defaults to the server's first folder.
    pub root: Option<String>,
    /// Kick off a search for missing episodes after the add.
    pub search_missing: bool,
}

/// Terminal success states of the flow. A duplicate is a success, not
/// an error: the series the caller wanted is in the library.
#[derive(Debug, Clone)]
pub enum AddOutcome {
    Added(AddedSeries),
    AlreadyInLibrary { title: String },
}

/// Case-insensitive exact title match; the first hit in catalog order
/// wins. No exact match is a hard failure listing the top alternatives,
/// never a fuzzy fallback.
pub fn pick_exact_match<'a>(
    candidates: &'a [SeriesCandidate],
    term: &str,
) -> AppResult<&'a SeriesCandidate> {
    if candidates.is_empty() {
        return Err(AppError::NoResults {
            term: term.to_string(),
        });
    }
    let term_lower = term.to_lowercase();
    if let Some(hit) = candidates
        .iter()
        .find(|c| c.title.to_lowercase() == term_lower)
    {
        return Ok(hit);
    }
    Err(AppError::AmbiguousSelection {
        term: term.to_string(),
        candidates: candidates
            .iter()
            .take(MAX_LISTED_ALTERNATIVES)
            .map(|c| CandidateSummary {
                title: c.title.clone(),
                year: c.year,
            })
            .collect(),
    })
}

/// True when any library entry shares the TVDB id OR the title
/// (case-insensitive). Either alone counts: skipping a legitimate add
/// beats inserting a duplicate.
pub fn is_in_library(library: &[Series], tvdb_id: i64, title: &str) -> bool {
    let title_lower = title.to_lowercase();
    library
        .iter()
        .any(|s| s.tvdb_id == Some(tvdb_id) || s.title.to_lowercase() == title_lower)
}

/// Numeric token matching an existing profile id wins; otherwise the
/// token is matched against profile names case-insensitively.
pub fn resolve_quality_profile(profiles: &[QualityProfile], token: &str) -> AppResult<i64> {
    if let Ok(id) = token.parse::<i64>() {
        if profiles.iter().any(|p| p.id == id) {
            return Ok(id);
        }
    }
    if let Some(profile) = profiles
        .iter()
        .find(|p| p.name.to_lowercase() == token.to_lowercase())
    {
        return Ok(profile.id);
    }
    Err(AppError::UnknownQualityProfile {
        token: token.to_string(),
        available: profiles.iter().map(|p| p.name.clone()).collect(),
    })
}

/// An explicit token must match a configured path exactly
/// (case-sensitive). Without a token the server's first folder is used.
pub fn resolve_root_folder(folders: &[RootFolder], requested: Option<&str>) -> AppResult<String> {
    if let Some(root) = requested {
        if let Some(folder) = folders.iter().find(|f| f.path == root) {
            return Ok(folder.path.clone());
        }
        return Err(AppError::UnknownRootFolder {
            token: root.to_string(),
            available: folders.iter().map(|f| f.path.clone()).collect(),
        });
    }
    folders
        .first()
        .map(|f| f.path.clone())
        .ok_or(AppError::NoRootFolderConfigured)
}

/// Exact case-insensitive title match against the library, for delete.
pub fn find_by_title<'a>(library: &'a [Series], term: &str) -> Option<&'a Series> {
    let term_lower = term.to_lowercase();
    library.iter().find(|s| s.title.to_lowercase() == term_lower)
}

/// Run the whole flow. At most five round-trips, strictly ordered; the
/// duplicate guard short-circuits before any profile or folder call.
pub async fn run(catalog: &dyn SeriesCatalog, request: &AddRequest) -> AppResult<AddOutcome> {
    let candidates = catalog.lookup(&request.term).await?;
    let candidate = pick_exact_match(&candidates, &request.term)?;
    let tvdb_id = candidate.tvdb_id.ok_or_else(|| AppError::MissingExternalId {
        title: candidate.title.clone(),
    })?;

    let library = catalog.list_series().await?;
    if is_in_library(&library, tvdb_id, &candidate.title) {
        return Ok(AddOutcome::AlreadyInLibrary {
            title: candidate.title.clone(),
        });
    }

    let profiles = catalog.quality_profiles().await?;
    let quality_profile_id = resolve_quality_profile(&profiles, &request.quality)?;

    let folders = catalog.root_folders().await?;
    let root_folder_path = resolve_root_folder(&folders, request.root.as_deref())?;

    let payload = AddSeriesPayload {
        title: candidate.title.clone(),
        tvdb_id,
        quality_profile_id,
        root_folder_path,
        monitored: true,
        season_folder: true,
        series_type: candidate
            .series_type
            .clone()
            .unwrap_or_else(|| "standard".to_string()),
        add_options: AddOptions {
            search_for_missing_episodes: request.search_missing,
        },
    };
    let added = catalog.add_series(&payload).await?;
    Ok(AddOutcome::Added(added))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, year: Option<i32>, tvdb_id: Option<i64>) -> SeriesCandidate {
        SeriesCandidate {
            title: title.to_string(),
            year,
            tvdb_id,
            series_type: None,
        }
    }

    fn entry(id: i64, title: &str, tvdb_id: Option<i64>) -> Series {
        Series {
            id,
            title: title.to_string(),
            year: None,
            tvdb_id,
            ended: None,
            episode_count: None,
            episode_file_count: None,
        }
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let candidates = vec![candidate("Severance", Some(2022), Some(12))];
        let picked = pick_exact_match(&candidates, "severance").unwrap();
        assert_eq!(picked.tvdb_id, Some(12));
    }

    #[test]
    fn first_exact_match_wins_on_duplicates() {
        let candidates = vec![
            candidate("The Office", Some(2001), Some(5)),
            candidate("The Office", Some(2005), Some(9)),
        ];
        let picked = pick_exact_match(&candidates, "The Office").unwrap();
        assert_eq!(picked.tvdb_id, Some(5));
    }

    #[test]
    fn empty_candidates_is_no_results() {
        let err = pick_exact_match(&[], "Nonexistent Show 9999").unwrap_err();
        assert!(matches!(err, AppError::NoResults { .. }));
    }

    #[test]
    fn no_exact_match_lists_at_most_five() {
        let candidates: Vec<_> = (0..8)
            .map(|i| candidate(&format!("Office Variant {}", i), Some(2000 + i), Some(i as i64)))
            .collect();
        let err = pick_exact_match(&candidates, "The Office").unwrap_err();
        match err {
            AppError::AmbiguousSelection { candidates, .. } => {
                assert_eq!(candidates.len(), 5);
                assert_eq!(candidates[0].title, "Office Variant 0");
            }
            other => panic!("expected AmbiguousSelection, got {:?}", other),
        }
    }

    #[test]
    fn library_matches_by_id_or_title() {
        let library = vec![entry(1, "Severance", Some(12)), entry(2, "Dark", Some(44))];
        assert!(is_in_library(&library, 12, "Something Else"));
        assert!(is_in_library(&library, 999, "severance"));
        assert!(!is_in_library(&library, 999, "The Bear"));
    }

    #[test]
    fn numeric_quality_token_matching_id_resolves_directly() {
        let profiles = vec![
            QualityProfile {
                id: 7,
                name: "Any".to_string(),
            },
            QualityProfile {
                id: 3,
                name: "HD".to_string(),
            },
        ];
        assert_eq!(resolve_quality_profile(&profiles, "7").unwrap(), 7);
    }

    #[test]
    fn numeric_token_without_matching_id_falls_back_to_names() {
        // A profile literally named "99" still resolves by name.
        let profiles = vec![QualityProfile {
            id: 1,
            name: "99".to_string(),
        }];
        assert_eq!(resolve_quality_profile(&profiles, "99").unwrap(), 1);
    }

    #[test]
    fn quality_name_match_is_case_insensitive() {
        let profiles = vec![QualityProfile {
            id: 4,
            name: "hd-1080p".to_string(),
        }];
        assert_eq!(resolve_quality_profile(&profiles, "HD-1080p").unwrap(), 4);
    }

    #[test]
    fn unknown_quality_lists_all_names() {
        let profiles = vec![
            QualityProfile {
                id: 1,
                name: "Any".to_string(),
            },
            QualityProfile {
                id: 2,
                name: "HD-1080p".to_string(),
            },
        ];
        let err = resolve_quality_profile(&profiles, "UHD").unwrap_err();
        match err {
            AppError::UnknownQualityProfile { token, available } => {
                assert_eq!(token, "UHD");
                assert_eq!(available, vec!["Any", "HD-1080p"]);
            }
            other => panic!("expected UnknownQualityProfile, got {:?}", other),
        }
    }

    #[test]
    fn omitted_root_uses_first_folder_in_server_order() {
        let folders = vec![
            RootFolder {
                path: "/tv".to_string(),
            },
            RootFolder {
                path: "/anime".to_string(),
            },
        ];
        assert_eq!(resolve_root_folder(&folders, None).unwrap(), "/tv");
    }

    #[test]
    fn explicit_root_must_match_exactly() {
        let folders = vec![RootFolder {
            path: "/tv".to_string(),
        }];
        assert_eq!(resolve_root_folder(&folders, Some("/tv")).unwrap(), "/tv");
        let err = resolve_root_folder(&folders, Some("/TV")).unwrap_err();
        match err {
            AppError::UnknownRootFolder { available, .. } => {
                assert_eq!(available, vec!["/tv"]);
            }
            other => panic!("expected UnknownRootFolder, got {:?}", other),
        }
    }

    #[test]
    fn empty_folder_set_without_token_is_configuration_gap() {
        let err = resolve_root_folder(&[], None).unwrap_err();
        assert!(matches!(err, AppError::NoRootFolderConfigured));
    }

    #[test]
    fn delete_lookup_matches_title_case_insensitively() {
        let library = vec![entry(7, "Severance", Some(12))];
        assert_eq!(find_by_title(&library, "severance").unwrap().id, 7);
        assert!(find_by_title(&library, "Dark").is_none());
    }
}
