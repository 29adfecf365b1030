pub mod client;
pub mod commands;
pub mod models;

pub use client::TracearrClient;
