//! Service configuration from environment variables.

use std::net::IpAddr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5005;
pub const DEFAULT_DAILY_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var}: invalid value {value:?}: {reason}")]
  Invalid {
    var: &'static str,
    value: String,
    reason: String,
  },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// PostgreSQL URL; usage is kept in memory when absent.
  pub database_url: Option<String>,
  /// Evaluations allowed per user per UTC day.
  pub daily_limit: u32,
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup (env, map in tests).
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let bind_addr = parse_or(&lookup, "BIND_ADDR", IpAddr::from([127, 0, 0, 1]))?;
    let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
    let daily_limit = parse_or(&lookup, "EVALUATOR_DAILY_LIMIT", DEFAULT_DAILY_LIMIT)?;
    let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
    Ok(Self {
      bind_addr,
      port,
      database_url,
      daily_limit,
    })
  }
}

fn parse_or<T>(
  lookup: &impl Fn(&str) -> Option<String>,
  var: &'static str,
  default: T,
) -> Result<T, ConfigError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(var) {
    None => Ok(default),
    Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
      var,
      reason: e.to_string(),
      value,
    }),
  }
}
