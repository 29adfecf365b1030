use crate::shared::errors::AppResult;

use super::client::RadarrClient;

pub async fn list(client: &RadarrClient) -> AppResult<()> {
    let mut movies = client.list_movies().await?;
    movies.sort_by(|a, b| a.title.cmp(&b.title));
    for m in &movies {
        let year = m
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        let status = if m.has_file.unwrap_or(false) {
            "Downloaded"
        } else {
            "Missing"
        };
        println!("{} ({}) - {}", m.title, year, status);
    }
    Ok(())
}

pub async fn search(client: &RadarrClient, term: &str) -> AppResult<()> {
    let results = client.lookup(term).await?;
    for m in results.iter().take(10) {
        let year = m
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        let tmdb = m
            .tmdb_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!("{} ({}) - TMDB: {}", m.title, year, tmdb);
    }
    Ok(())
}

pub async fn get(client: &RadarrClient, id: i64) -> AppResult<()> {
    let detail = client.movie_detail(id).await?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}
