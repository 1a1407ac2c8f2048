//! Command implementations for the Gametime Fantasy Football CLI

pub mod common;
pub mod leagues;
pub mod starters;
pub mod week;

use crate::error::{GametimeError, Result};
use crate::USERNAME_ENV_VAR;

/// Resolve the target username from the CLI argument or the environment.
pub fn resolve_username(username: Option<String>) -> Result<String> {
    if let Some(username) = username {
        return Ok(username);
    }
    match std::env::var(USERNAME_ENV_VAR) {
        Ok(username) if !username.is_empty() => Ok(username),
        _ => Err(GametimeError::MissingUsername {
            env_var: USERNAME_ENV_VAR.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests;
