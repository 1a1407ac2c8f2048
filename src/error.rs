//! Error types for the Gametime Fantasy Football CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GametimeError>;

#[derive(Error, Debug)]
pub enum GametimeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Username not provided and {env_var} environment variable not set")]
    MissingUsername { env_var: String },

    #[error("Sleeper user not found: {username}")]
    UserNotFound { username: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season year: {year}")]
    InvalidSeason { year: String },

    #[error("Invalid week number: {week}")]
    InvalidWeek { week: String },
}
