//! Sleeper API client: payload types and fetch functions.

pub mod http;
pub mod types;
