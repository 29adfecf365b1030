pub mod add_flow;
pub mod client;
pub mod commands;
pub mod models;

pub use add_flow::{AddOutcome, AddRequest, SeriesCatalog};
pub use client::SonarrClient;
