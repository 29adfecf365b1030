use clap::{Parser, Subcommand};

use crate::modules::analytics::{self, TautulliClient};
use crate::modules::monitor::{self, client::PageQuery, TracearrClient};
use crate::modules::movies::{self, RadarrClient};
use crate::modules::requests::{self, JellyseerrClient};
use crate::modules::series::{self, AddRequest, SonarrClient};
use crate::shared::config::ServiceConfig;
use crate::shared::errors::AppResult;

#[derive(Parser, Debug)]
#[command(
    name = "arrctl",
    version,
    about = "Command-line companion for a self-hosted media stack"
)]
pub struct Cli {
    #[command(subcommand)]
    pub service: Service,
}

#[derive(Subcommand, Debug)]
pub enum Service {
    /// Manage the Sonarr series library
    #[command(subcommand)]
    Sonarr(SonarrCommand),
    /// Manage the Radarr movie library
    #[command(subcommand)]
    Radarr(RadarrCommand),
    /// Search and request media through Jellyseerr
    #[command(subcommand)]
    Jellyseerr(JellyseerrCommand),
    /// Query Tautulli playback analytics
    #[command(subcommand)]
    Tautulli(TautulliCommand),
    /// Query Tracearr playback monitoring
    #[command(subcommand)]
    Tracearr(TracearrCommand),
}

#[derive(Subcommand, Debug)]
pub enum SonarrCommand {
    /// List all series in the library
    List,
    /// Search the catalog by name
    Search {
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Print one series as raw JSON
    Get { id: i64 },
    /// Add a series by exact title
    Add {
        #[arg(required = true)]
        term: Vec<String>,
        /// Quality profile name or id
        #[arg(long)]
        quality: String,
        /// Root folder path (defaults to the server's first folder)
        #[arg(long)]
        root: Option<String>,
        /// Skip the search for missing episodes after adding
        #[arg(long)]
        no_search: bool,
    },
    /// Remove a series from the library (files are kept)
    Delete {
        #[arg(required = true)]
        term: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RadarrCommand {
    /// List all movies in the library
    List,
    /// Search the catalog by name
    Search {
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Print one movie as raw JSON
    Get { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum JellyseerrCommand {
    /// Search for movies and TV shows
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Request a movie or TV show by TMDB id
    Request {
        #[arg(value_parser = ["movie", "tv"])]
        media_type: String,
        tmdb_id: i64,
        /// Specific seasons (TV only; defaults to all)
        #[arg(long, num_args = 1..)]
        seasons: Option<Vec<i32>>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TautulliCommand {
    /// View playback history
    History {
        /// Limit to the last N days
        #[arg(long)]
        days: Option<i64>,
        /// Filter by username
        #[arg(long)]
        user: Option<String>,
        #[arg(long, value_parser = ["movie", "episode", "track"])]
        media_type: Option<String>,
        #[arg(long, default_value_t = 25)]
        limit: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List users
    Users {
        #[arg(long)]
        json: bool,
    },
    /// List libraries
    Libraries {
        #[arg(long)]
        json: bool,
    },
    /// Current activity
    Watching {
        #[arg(long)]
        json: bool,
    },
    /// Most watched content
    Popular {
        #[arg(long = "type", default_value = "movies", value_parser = ["movies", "shows", "music"])]
        kind: String,
        /// Time range in days
        #[arg(long, default_value_t = 30)]
        days: i64,
        #[arg(long, default_value_t = 25)]
        limit: i64,
        #[arg(long)]
        json: bool,
    },
    /// Server statistics
    Stats {
        #[arg(long, default_value_t = 30)]
        days: i64,
        #[arg(long)]
        json: bool,
    },
    /// History for a specific user
    UserHistory {
        username: String,
        #[arg(long, default_value_t = 25)]
        limit: i64,
        #[arg(long)]
        json: bool,
    },
    /// Search history
    Search {
        #[arg(required = true)]
        query: Vec<String>,
        #[arg(long, default_value_t = 25)]
        limit: i64,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TracearrCommand {
    /// System health and server connectivity
    Health,
    /// Dashboard statistics
    Stats {
        #[arg(long)]
        server_id: Option<String>,
    },
    /// Active playback sessions
    Streams {
        #[arg(long)]
        server_id: Option<String>,
        /// Only print the summary block
        #[arg(long)]
        summary: bool,
    },
    /// List users with activity summary
    Users {
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 25)]
        page_size: i64,
        #[arg(long)]
        server_id: Option<String>,
    },
    /// List rule violations
    Violations {
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 25)]
        page_size: i64,
        #[arg(long)]
        server_id: Option<String>,
        #[arg(long, value_parser = ["low", "warning", "high"])]
        severity: Option<String>,
        #[arg(long)]
        acknowledged: Option<bool>,
    },
    /// Session history
    History {
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 25)]
        page_size: i64,
        #[arg(long)]
        server_id: Option<String>,
        #[arg(long, value_parser = ["playing", "paused", "stopped"])]
        state: Option<String>,
        #[arg(long)]
        media_type: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        end_date: Option<String>,
    },
}

pub async fn run(cli: Cli) -> AppResult<()> {
    match cli.service {
        Service::Sonarr(command) => {
            let client = SonarrClient::new(ServiceConfig::from_env("SONARR")?)?;
            match command {
                SonarrCommand::List => series::commands::list(&client).await,
                SonarrCommand::Search { term } => {
                    series::commands::search(&client, &term.join(" ")).await
                }
                SonarrCommand::Get { id } => series::commands::get(&client, id).await,
                SonarrCommand::Add {
                    term,
                    quality,
                    root,
                    no_search,
                } => {
                    let request = AddRequest {
                        term: term.join(" "),
                        quality,
                        root,
                        search_missing: !no_search,
                    };
                    series::commands::add(&client, &request).await
                }
                SonarrCommand::Delete { term } => {
                    series::commands::delete(&client, &term.join(" ")).await
                }
            }
        }
        Service::Radarr(command) => {
            let client = RadarrClient::new(ServiceConfig::from_env("RADARR")?)?;
            match command {
                RadarrCommand::List => movies::commands::list(&client).await,
                RadarrCommand::Search { term } => {
                    movies::commands::search(&client, &term.join(" ")).await
                }
                RadarrCommand::Get { id } => movies::commands::get(&client, id).await,
            }
        }
        Service::Jellyseerr(command) => {
            let client = JellyseerrClient::new(ServiceConfig::from_env("JELLYSEERR")?)?;
            match command {
                JellyseerrCommand::Search { query } => {
                    requests::commands::search(&client, &query.join(" ")).await
                }
                JellyseerrCommand::Request {
                    media_type,
                    tmdb_id,
                    seasons,
                } => requests::commands::request(&client, &media_type, tmdb_id, seasons).await,
            }
        }
        Service::Tautulli(command) => {
            let client = TautulliClient::new(ServiceConfig::from_env("TAUTULLI")?)?;
            match command {
                TautulliCommand::History {
                    days,
                    user,
                    media_type,
                    limit,
                    json,
                } => {
                    analytics::commands::history(
                        &client,
                        days,
                        user.as_deref(),
                        media_type.as_deref(),
                        limit,
                        json,
                    )
                    .await
                }
                TautulliCommand::Users { json } => analytics::commands::users(&client, json).await,
                TautulliCommand::Libraries { json } => {
                    analytics::commands::libraries(&client, json).await
                }
                TautulliCommand::Watching { json } => {
                    analytics::commands::watching(&client, json).await
                }
                TautulliCommand::Popular {
                    kind,
                    days,
                    limit,
                    json,
                } => analytics::commands::popular(&client, &kind, days, limit, json).await,
                TautulliCommand::Stats { days, json } => {
                    analytics::commands::stats(&client, days, json).await
                }
                TautulliCommand::UserHistory {
                    username,
                    limit,
                    json,
                } => analytics::commands::user_history(&client, &username, limit, json).await,
                TautulliCommand::Search { query, limit, json } => {
                    analytics::commands::search(&client, &query.join(" "), limit, json).await
                }
            }
        }
        Service::Tracearr(command) => {
            let client = TracearrClient::new(ServiceConfig::from_env("TRACEARR")?)?;
            match command {
                TracearrCommand::Health => monitor::commands::health(&client).await,
                TracearrCommand::Stats { server_id } => {
                    monitor::commands::stats(&client, server_id.as_deref()).await
                }
                TracearrCommand::Streams { server_id, summary } => {
                    monitor::commands::streams(&client, server_id.as_deref(), summary).await
                }
                TracearrCommand::Users {
                    page,
                    page_size,
                    server_id,
                } => {
                    let query = PageQuery {
                        page: Some(page),
                        page_size: Some(page_size),
                        server_id,
                        ..PageQuery::default()
                    };
                    monitor::commands::users(&client, &query).await
                }
                TracearrCommand::Violations {
                    page,
                    page_size,
                    server_id,
                    severity,
                    acknowledged,
                } => {
                    let query = PageQuery {
                        page: Some(page),
                        page_size: Some(page_size),
                        server_id,
                        severity,
                        acknowledged,
                        ..PageQuery::default()
                    };
                    monitor::commands::violations(&client, &query).await
                }
                TracearrCommand::History {
                    page,
                    page_size,
                    server_id,
                    state,
                    media_type,
                    start_date,
                    end_date,
                } => {
                    let query = PageQuery {
                        page: Some(page),
                        page_size: Some(page_size),
                        server_id,
                        state,
                        media_type,
                        start_date,
                        end_date,
                        ..PageQuery::default()
                    };
                    monitor::commands::history(&client, &query).await
                }
            }
        }
    }
}
