use std::collections::BTreeMap;

use chrono::{Duration, Local};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::shared::errors::AppResult;
use crate::shared::utils::format::{format_duration, format_timestamp, truncate};

use super::client::TautulliClient;
use super::models::{
    parse_data, Activity, HistoryData, HomeStat, Library, StatRow, TautulliUser,
};

fn print_json(value: &serde_json::Value) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{}", table);
}

/// The `data` list inside a history-shaped payload, for `--json`.
fn history_records(value: &serde_json::Value) -> serde_json::Value {
    value
        .get("data")
        .cloned()
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()))
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    media_type: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Transcode")]
    transcode: String,
}

impl HistoryRow {
    fn from_record(record: &super::models::HistoryRecord) -> Self {
        Self {
            date: format_timestamp(record.started),
            user: truncate(record.user.as_deref().unwrap_or("Unknown"), 15),
            title: truncate(record.full_title.as_deref().unwrap_or("Unknown"), 40),
            media_type: record.media_type.clone().unwrap_or_else(|| "?".to_string()),
            duration: format_duration(record.duration),
            transcode: truncate(record.transcode_decision.as_deref().unwrap_or("direct"), 10),
        }
    }
}

pub async fn history(
    client: &TautulliClient,
    days: Option<i64>,
    user: Option<&str>,
    media_type: Option<&str>,
    limit: i64,
    json: bool,
) -> AppResult<()> {
    let mut params = vec![("length", limit.to_string())];
    if let Some(days) = days {
        let start = Local::now() - Duration::days(days);
        params.push(("start_date", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(user) = user {
        params.push(("user", user.to_string()));
    }
    if let Some(media_type) = media_type {
        params.push(("media_type", media_type.to_string()));
    }

    let data = client.call("get_history", &params).await?;
    if json {
        return print_json(&history_records(&data));
    }

    let history: HistoryData = parse_data(data)?;
    if history.data.is_empty() {
        println!("No history found");
        return Ok(());
    }

    let rows: Vec<_> = history.data.iter().map(HistoryRow::from_record).collect();
    let total = rows.len();
    print_table(rows);
    println!("\nTotal: {} plays", total);
    Ok(())
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Friendly Name")]
    friendly_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Last Seen")]
    last_seen: String,
}

pub async fn users(client: &TautulliClient, json: bool) -> AppResult<()> {
    let data = client.call("get_users", &[]).await?;
    if json {
        return print_json(&data);
    }

    let users: Vec<TautulliUser> = parse_data(data)?;
    let rows: Vec<_> = users
        .iter()
        .filter(|u| u.username.as_deref() != Some("Local"))
        .map(|u| UserRow {
            username: u.username.clone().unwrap_or_else(|| "Unknown".to_string()),
            friendly_name: u.friendly_name.clone().unwrap_or_default(),
            email: u.email.clone().unwrap_or_default(),
            last_seen: format_timestamp(u.last_seen),
        })
        .collect();

    if rows.is_empty() {
        println!("No users found");
        return Ok(());
    }
    print_table(rows);
    Ok(())
}

#[derive(Tabled)]
struct LibraryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    library_type: String,
    #[tabled(rename = "Items")]
    items: i64,
    #[tabled(rename = "Shows/Artists")]
    parents: i64,
    #[tabled(rename = "Episodes/Tracks")]
    children: i64,
}

pub async fn libraries(client: &TautulliClient, json: bool) -> AppResult<()> {
    let data = client.call("get_libraries", &[]).await?;
    if json {
        return print_json(&data);
    }

    let libraries: Vec<Library> = parse_data(data)?;
    if libraries.is_empty() {
        println!("No libraries found");
        return Ok(());
    }

    let rows: Vec<_> = libraries
        .iter()
        .map(|lib| LibraryRow {
            id: lib
                .section_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: lib.section_name.clone().unwrap_or_default(),
            library_type: lib.section_type.clone().unwrap_or_default(),
            items: lib.count.unwrap_or(0),
            parents: lib.parent_count.unwrap_or(0),
            children: lib.child_count.unwrap_or(0),
        })
        .collect();
    print_table(rows);
    Ok(())
}

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Quality")]
    quality: String,
    #[tabled(rename = "Transcode")]
    transcode: String,
    #[tabled(rename = "Platform")]
    platform: String,
}

pub async fn watching(client: &TautulliClient, json: bool) -> AppResult<()> {
    let data = client.call("get_activity", &[]).await?;
    if json {
        return print_json(&data);
    }

    let activity: Activity = parse_data(data)?;
    println!("Active streams: {}", activity.stream_count.unwrap_or(0));
    if activity.sessions.is_empty() {
        println!("No active streams");
        return Ok(());
    }

    println!();
    let rows: Vec<_> = activity
        .sessions
        .iter()
        .map(|s| SessionRow {
            user: s.user.clone().unwrap_or_else(|| "Unknown".to_string()),
            title: truncate(s.full_title.as_deref().unwrap_or("Unknown"), 40),
            state: s.state.clone().unwrap_or_else(|| "?".to_string()),
            progress: format!("{}%", s.progress_percent.unwrap_or(0)),
            quality: s.quality_profile.clone().unwrap_or_else(|| "?".to_string()),
            transcode: s
                .transcode_decision
                .clone()
                .unwrap_or_else(|| "direct".to_string()),
            platform: s.platform.clone().unwrap_or_else(|| "?".to_string()),
        })
        .collect();
    print_table(rows);
    Ok(())
}

#[derive(Tabled)]
struct PopularRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Users")]
    users: i64,
    #[tabled(rename = "Plays")]
    plays: i64,
    #[tabled(rename = "Total Time")]
    total_time: String,
}

pub async fn popular(
    client: &TautulliClient,
    kind: &str,
    days: i64,
    limit: i64,
    json: bool,
) -> AppResult<()> {
    let stat_id = match kind {
        "shows" => "popular_tv",
        "music" => "popular_music",
        _ => "popular_movies",
    };
    let params = vec![
        ("stat_id", stat_id.to_string()),
        ("stats_count", limit.to_string()),
        ("time_range", days.to_string()),
    ];
    let data = client.call("get_home_stats", &params).await?;

    // The service returns every stat section; pick the one we asked for.
    let raw_rows = data
        .as_array()
        .and_then(|stats| {
            stats
                .iter()
                .find(|s| s.get("stat_id").and_then(|v| v.as_str()) == Some(stat_id))
        })
        .and_then(|s| s.get("rows"))
        .cloned()
        .unwrap_or(serde_json::Value::Null);

    if json {
        return print_json(&raw_rows);
    }

    let rows: Vec<StatRow> = parse_data(raw_rows)?;
    if rows.is_empty() {
        println!("No {} stats found", kind);
        return Ok(());
    }

    let rows: Vec<_> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| PopularRow {
            rank: i + 1,
            title: truncate(r.title.as_deref().unwrap_or("Unknown"), 50),
            users: r.users_watched.unwrap_or(0),
            plays: r.total_plays.unwrap_or(0),
            total_time: format_duration(r.total_duration),
        })
        .collect();
    print_table(rows);
    Ok(())
}

#[derive(Tabled)]
struct TopUserRow {
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Plays")]
    plays: i64,
    #[tabled(rename = "Watch Time")]
    watch_time: String,
}

#[derive(Tabled)]
struct TopPlatformRow {
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Plays")]
    plays: i64,
}

#[derive(Tabled)]
struct ConcurrentRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Streams")]
    streams: i64,
}

pub async fn stats(client: &TautulliClient, days: i64, json: bool) -> AppResult<()> {
    let params = vec![
        ("time_range", days.to_string()),
        ("stats_count", "10".to_string()),
    ];
    let data = client.call("get_home_stats", &params).await?;
    if json {
        return print_json(&data);
    }

    let sections: Vec<HomeStat> = parse_data(data)?;
    println!("Statistics for last {} days\n", days);

    for section in &sections {
        let rows: &[StatRow] = &section.rows;
        if rows.is_empty() {
            continue;
        }
        match section.stat_id.as_str() {
            "top_users" => {
                println!("TOP USERS");
                print_table(
                    rows.iter()
                        .take(5)
                        .map(|r| TopUserRow {
                            user: r.user.clone().unwrap_or_else(|| "?".to_string()),
                            plays: r.total_plays.unwrap_or(0),
                            watch_time: format_duration(r.total_duration),
                        })
                        .collect(),
                );
                println!();
            }
            "top_platforms" => {
                println!("TOP PLATFORMS");
                print_table(
                    rows.iter()
                        .take(5)
                        .map(|r| TopPlatformRow {
                            platform: r.platform.clone().unwrap_or_else(|| "?".to_string()),
                            plays: r.total_plays.unwrap_or(0),
                        })
                        .collect(),
                );
                println!();
            }
            "most_concurrent" => {
                println!("PEAK CONCURRENT STREAMS");
                print_table(
                    rows.iter()
                        .take(3)
                        .map(|r| ConcurrentRow {
                            time: format_timestamp(r.started),
                            streams: r.count.unwrap_or(0),
                        })
                        .collect(),
                );
                println!();
            }
            _ => {}
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

pub async fn user_history(
    client: &TautulliClient,
    username: &str,
    limit: i64,
    json: bool,
) -> AppResult<()> {
    let params = vec![
        ("user", username.to_string()),
        ("length", limit.to_string()),
    ];
    let data = client.call("get_history", &params).await?;
    if json {
        return print_json(&history_records(&data));
    }

    let history: HistoryData = parse_data(data)?;
    if history.data.is_empty() {
        println!("No history found for user: {}", username);
        return Ok(());
    }

    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_duration = 0i64;
    for record in &history.data {
        let media_type = record
            .media_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        *by_type.entry(media_type).or_insert(0) += 1;
        total_duration += record.duration.unwrap_or(0);
    }

    println!("History for: {}", username);
    println!("Total plays: {}", history.data.len());
    println!("Total watch time: {}", format_duration(Some(total_duration)));
    println!();

    for (media_type, plays) in &by_type {
        println!("{}: {} plays", media_type.to_uppercase(), plays);
    }

    println!("\nRecent activity:");
    let rows: Vec<_> = history
        .data
        .iter()
        .take(20)
        .map(|r| RecentRow {
            date: format_timestamp(r.started),
            title: truncate(r.full_title.as_deref().unwrap_or("Unknown"), 45),
            duration: format_duration(r.duration),
        })
        .collect();
    print_table(rows);
    Ok(())
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

pub async fn search(
    client: &TautulliClient,
    query: &str,
    limit: i64,
    json: bool,
) -> AppResult<()> {
    let params = vec![
        ("search", query.to_string()),
        ("length", limit.to_string()),
    ];
    let data = client.call("get_history", &params).await?;
    if json {
        return print_json(&history_records(&data));
    }

    let history: HistoryData = parse_data(data)?;
    if history.data.is_empty() {
        println!("No results for: {}", query);
        return Ok(());
    }

    println!("Search results for: {}\n", query);
    let rows: Vec<_> = history
        .data
        .iter()
        .map(|r| SearchRow {
            date: format_timestamp(r.started),
            user: truncate(r.user.as_deref().unwrap_or("?"), 12),
            title: truncate(r.full_title.as_deref().unwrap_or("Unknown"), 40),
            duration: format_duration(r.duration),
        })
        .collect();
    print_table(rows);
    Ok(())
}
