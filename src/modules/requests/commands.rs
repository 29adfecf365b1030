use crate::shared::errors::AppResult;
use crate::shared::utils::format::ellipsize;

use super::client::JellyseerrClient;

pub async fn search(client: &JellyseerrClient, query: &str) -> AppResult<()> {
    let response = client.search(query).await?;
    if response.results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!(
        "Found {} results:\n",
        response.total_results.unwrap_or(response.results.len() as i64)
    );

    for item in response.results.iter().take(10) {
        // Only movies and TV are requestable; skip people etc.
        let media_type = match item.media_type.as_deref() {
            Some(t @ ("movie" | "tv")) => t,
            _ => continue,
        };
        let overview = ellipsize(item.overview.as_deref().unwrap_or(""), 100);
        println!(
            "[{}] {} ({})",
            media_type.to_uppercase(),
            item.display_title(),
            item.display_year()
        );
        println!("  TMDB ID: {}", item.id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string()));
        println!("  {}\n", overview);
    }
    Ok(())
}

pub async fn request(
    client: &JellyseerrClient,
    media_type: &str,
    tmdb_id: i64,
    seasons: Option<Vec<i32>>,
) -> AppResult<()> {
    let result = client.request(media_type, tmdb_id, seasons).await?;
    println!("Request created successfully!");
    println!(
        "  Request ID: {}",
        result.id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string())
    );
    println!("  Status: {}", result.status_label());
    Ok(())
}
