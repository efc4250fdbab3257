//! Shared application state.

use ad_evaluator::Engine;

use crate::store::UsageStore;

pub struct AppState {
  pub store: UsageStore,
  pub engine: Engine,
  pub daily_limit: u32,
}

impl AppState {
  pub fn new(store: UsageStore, daily_limit: u32) -> Self {
    Self {
      store,
      engine: Engine::with_defaults(),
      daily_limit,
    }
  }
}
