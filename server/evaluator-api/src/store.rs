//! Daily usage counters keyed by (user, UTC date).

use chrono::NaiveDate;
use dashmap::DashMap;
use sqlx_core::query::query;
use sqlx_core::query_scalar::query_scalar;
use sqlx_postgres::{PgPool, Postgres};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database: {0}")]
  Database(#[from] sqlx_core::Error),
}

/// Usage counter backend. Increments are atomic per (user, date) in both.
pub enum UsageStore {
  Postgres(PgPool),
  Memory(DashMap<(Uuid, NaiveDate), u32>),
}

impl UsageStore {
  pub fn memory() -> Self {
    Self::Memory(DashMap::new())
  }

  pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Self::Postgres(pool))
  }

  pub fn backend(&self) -> &'static str {
    match self {
      Self::Postgres(_) => "postgres",
      Self::Memory(_) => "memory",
    }
  }

  /// Create the usage table if it does not exist (no-op in memory).
  pub async fn migrate(&self) -> Result<(), StoreError> {
    if let Self::Postgres(pool) = self {
      query::<Postgres>(
        r#"
        CREATE TABLE IF NOT EXISTS evaluator_daily_usage (
          user_id UUID NOT NULL,
          usage_date DATE NOT NULL,
          evaluations INTEGER NOT NULL DEFAULT 0,
          PRIMARY KEY (user_id, usage_date)
        )
        "#,
      )
      .execute(pool)
      .await?;
    }
    Ok(())
  }

  /// Evaluations recorded for the user on `date`.
  pub async fn used(&self, user_id: Uuid, date: NaiveDate) -> Result<u32, StoreError> {
    match self {
      Self::Postgres(pool) => {
        let count = query_scalar::<Postgres, i32>(
          "SELECT evaluations FROM evaluator_daily_usage WHERE user_id = $1 AND usage_date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;
        Ok(count.unwrap_or(0).max(0) as u32)
      }
      Self::Memory(map) => Ok(map.get(&(user_id, date)).map(|c| *c).unwrap_or(0)),
    }
  }

  /// Record one evaluation and return the new count.
  pub async fn increment(&self, user_id: Uuid, date: NaiveDate) -> Result<u32, StoreError> {
    match self {
      Self::Postgres(pool) => {
        let count = query_scalar::<Postgres, i32>(
          r#"
          INSERT INTO evaluator_daily_usage (user_id, usage_date, evaluations)
          VALUES ($1, $2, 1)
          ON CONFLICT (user_id, usage_date) DO UPDATE SET
            evaluations = evaluator_daily_usage.evaluations + 1
          RETURNING evaluations
          "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;
        Ok(count.max(0) as u32)
      }
      Self::Memory(map) => {
        let mut count = map.entry((user_id, date)).or_insert(0);
        *count += 1;
        Ok(*count)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn memory_counts_per_user_and_day() {
    let store = UsageStore::memory();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();
    let day = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    let next = day.succ_opt().unwrap();

    assert_eq!(store.used(user, day).await.unwrap(), 0);
    assert_eq!(store.increment(user, day).await.unwrap(), 1);
    assert_eq!(store.increment(user, day).await.unwrap(), 2);
    assert_eq!(store.increment(other, day).await.unwrap(), 1);
    assert_eq!(store.used(user, day).await.unwrap(), 2);
    assert_eq!(store.used(user, next).await.unwrap(), 0);
    assert_eq!(store.backend(), "memory");
  }
}
