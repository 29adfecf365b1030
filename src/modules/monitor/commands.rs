use crate::shared::errors::AppResult;
use crate::shared::utils::format::format_iso_timestamp;

use super::client::{PageQuery, TracearrClient};

pub async fn health(client: &TracearrClient) -> AppResult<()> {
    let health = client.health().await?;
    println!("Status: {}", health.status);
    println!("Timestamp: {}", health.timestamp);
    println!("\nServers:");
    for server in &health.servers {
        let status = if server.online {
            "🟢 Online"
        } else {
            "🔴 Offline"
        };
        println!(
            "  {} ({}) - {} - {} active streams",
            server.name,
            server.server_type,
            status,
            server.active_streams.unwrap_or(0)
        );
    }
    Ok(())
}

pub async fn stats(client: &TracearrClient, server_id: Option<&str>) -> AppResult<()> {
    let stats = client.stats(server_id).await?;
    println!("Active Streams: {}", stats.active_streams);
    println!("Total Users: {}", stats.total_users);
    println!("Total Sessions (30d): {}", stats.total_sessions);
    println!("Recent Violations (7d): {}", stats.recent_violations);
    println!("Timestamp: {}", stats.timestamp);
    Ok(())
}

pub async fn streams(
    client: &TracearrClient,
    server_id: Option<&str>,
    summary_only: bool,
) -> AppResult<()> {
    let streams = client.streams(server_id, summary_only).await?;

    let summary = &streams.summary;
    println!("Total Streams: {}", summary.total.unwrap_or(0));
    println!("  Transcodes: {}", summary.transcodes.unwrap_or(0));
    println!("  Direct Streams: {}", summary.direct_streams.unwrap_or(0));
    println!("  Direct Plays: {}", summary.direct_plays.unwrap_or(0));
    println!(
        "Total Bitrate: {}",
        summary.total_bitrate.as_deref().unwrap_or("N/A")
    );

    if summary.by_server.len() > 1 {
        println!("\nBy Server:");
        for server in &summary.by_server {
            println!(
                "  {}: {} streams ({})",
                server.server_name,
                server.total,
                server.total_bitrate.as_deref().unwrap_or("N/A")
            );
        }
    }

    if !summary_only && !streams.data.is_empty() {
        println!("\nActive Streams:");
        for session in &streams.data {
            let decision = if session.is_transcode.unwrap_or(false) {
                "transcode"
            } else {
                session.video_decision.as_deref().unwrap_or("unknown")
            };
            let device = session
                .device
                .as_deref()
                .or(session.player.as_deref())
                .unwrap_or("Unknown");
            let bitrate = session
                .bitrate
                .map(|b| format!("{} kbps", b))
                .unwrap_or_else(|| "N/A".to_string());

            println!(
                "\n  {} - {}",
                session.username.as_deref().unwrap_or("Unknown"),
                session.display_media()
            );
            println!(
                "    State: {} | Decision: {} | Device: {}",
                session.state.as_deref().unwrap_or("unknown"),
                decision,
                device
            );
            println!(
                "    Bitrate: {} | Server: {}",
                bitrate,
                session.server_name.as_deref().unwrap_or("Unknown")
            );
        }
    }
    Ok(())
}

pub async fn users(client: &TracearrClient, query: &PageQuery) -> AppResult<()> {
    let page = client.users(query).await?;
    println!(
        "Users (Page {} of {} total):\n",
        page.meta.page.unwrap_or(1),
        page.meta.total.unwrap_or(0)
    );

    for user in &page.data {
        let name = user
            .display_name
            .as_deref()
            .or(user.username.as_deref())
            .unwrap_or("Unknown");
        let last_activity = user
            .last_activity_at
            .as_deref()
            .map(format_iso_timestamp)
            .unwrap_or_else(|| "Never".to_string());

        println!("{} ({})", name, user.role.as_deref().unwrap_or("unknown"));
        println!(
            "  Trust: {}/100 | Violations: {} | Sessions: {}",
            user.trust_score.unwrap_or(0),
            user.total_violations.unwrap_or(0),
            user.session_count.unwrap_or(0)
        );
        println!(
            "  Server: {} | Last Activity: {}\n",
            user.server_name.as_deref().unwrap_or("Unknown"),
            last_activity
        );
    }
    Ok(())
}

pub async fn violations(client: &TracearrClient, query: &PageQuery) -> AppResult<()> {
    let page = client.violations(query).await?;
    println!(
        "Violations (Page {} of {} total):\n",
        page.meta.page.unwrap_or(1),
        page.meta.total.unwrap_or(0)
    );

    for violation in &page.data {
        let severity = violation.severity.as_deref().unwrap_or("unknown");
        let marker = match severity {
            "low" => "🟡",
            "warning" => "🟠",
            "high" => "🔴",
            _ => "⚪",
        };
        let ack = if violation.acknowledged.unwrap_or(false) {
            "✓ Acknowledged"
        } else {
            "✗ Unacknowledged"
        };
        let rule_name = violation
            .rule
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or("Unknown Rule");
        let rule_type = violation
            .rule
            .as_ref()
            .and_then(|r| r.rule_type.as_deref())
            .unwrap_or("unknown");
        let username = violation
            .user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("Unknown User");

        println!("{} {} - {}", marker, rule_name, username);
        println!("  Type: {} | Severity: {}", rule_type, severity);
        println!(
            "  Status: {} | Created: {}",
            ack,
            format_iso_timestamp(&violation.created_at)
        );
        println!(
            "  Server: {}\n",
            violation.server_name.as_deref().unwrap_or("Unknown")
        );
    }
    Ok(())
}

pub async fn history(client: &TracearrClient, query: &PageQuery) -> AppResult<()> {
    let page = client.history(query).await?;
    println!(
        "Session History (Page {} of {} total):\n",
        page.meta.page.unwrap_or(1),
        page.meta.total.unwrap_or(0)
    );

    for session in &page.data {
        let username = session
            .user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("Unknown");
        let stopped = session
            .stopped_at
            .as_deref()
            .map(format_iso_timestamp)
            .unwrap_or_else(|| "In Progress".to_string());
        let duration_mins = session.duration_ms.unwrap_or(0) / 60_000;
        let progress_mins = session.progress_ms.unwrap_or(0) / 60_000;

        println!(
            "{} ({})",
            session.display_media(),
            session.year.as_deref().unwrap_or("?")
        );
        println!(
            "  User: {} | Type: {}",
            username,
            session.media_type.as_deref().unwrap_or("unknown")
        );
        println!(
            "  Started: {} | Stopped: {}",
            format_iso_timestamp(&session.started_at),
            stopped
        );
        println!(
            "  Progress: {}/{} min | Device: {}",
            progress_mins,
            duration_mins,
            session.device.as_deref().unwrap_or("Unknown")
        );
        println!(
            "  Server: {}\n",
            session.server_name.as_deref().unwrap_or("Unknown")
        );
    }
    Ok(())
}
