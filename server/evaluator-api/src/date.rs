//! Date utilities.

use chrono::{DateTime, NaiveDate, Utc};

/// Usage is bucketed by UTC calendar day.
pub fn usage_date(now: DateTime<Utc>) -> NaiveDate {
  now.date_naive()
}

pub fn today() -> NaiveDate {
  usage_date(Utc::now())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn buckets_by_utc_day() {
    let late = DateTime::parse_from_rfc3339("2026-03-01T23:59:59-05:00")
      .unwrap()
      .with_timezone(&Utc);
    assert_eq!(usage_date(late), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
  }
}
