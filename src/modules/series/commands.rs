use log::info;

use crate::shared::errors::{AppError, AppResult};

use super::add_flow::{self, AddOutcome, AddRequest};
use super::client::SonarrClient;

pub async fn list(client: &SonarrClient) -> AppResult<()> {
    let mut series = client.list_series().await?;
    series.sort_by(|a, b| a.title.cmp(&b.title));
    for s in &series {
        let status = if s.ended.unwrap_or(false) {
            "Ended"
        } else {
            "Continuing"
        };
        let year = s
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{} ({}) - {} - {}/{} eps",
            s.title,
            year,
            status,
            s.episode_file_count.unwrap_or(0),
            s.episode_count.unwrap_or(0)
        );
    }
    Ok(())
}

pub async fn search(client: &SonarrClient, term: &str) -> AppResult<()> {
    let results = client.lookup(term).await?;
    for s in results.iter().take(10) {
        let year = s
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        let tvdb = s
            .tvdb_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!("{} ({}) - TVDB: {}", s.title, year, tvdb);
    }
    Ok(())
}

pub async fn get(client: &SonarrClient, id: i64) -> AppResult<()> {
    let detail = client.series_detail(id).await?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

pub async fn add(client: &SonarrClient, request: &AddRequest) -> AppResult<()> {
    info!("adding series '{}'", request.term);
    match add_flow::run(client, request).await? {
        AddOutcome::Added(added) => println!("Added: {}", added.title),
        AddOutcome::AlreadyInLibrary { title } => println!("Already in library: {}", title),
    }
    Ok(())
}

pub async fn delete(client: &SonarrClient, term: &str) -> AppResult<()> {
    let library = client.list_series().await?;
    let series = add_flow::find_by_title(&library, term).ok_or_else(|| AppError::NotInLibrary {
        term: term.to_string(),
    })?;
    client.delete_series(series.id).await?;
    println!("Deleted: {}", series.title);
    Ok(())
}
