use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
use crate::shell::state::AppState;
use crate::tests::fixtures::seed::{Seeded, seed_database};
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryDatabase::new()))
}

pub fn make_offline_state() -> AppState {
    let mut database = InMemoryDatabase::new();
    database.toggle_offline();
    AppState::new(Arc::new(database))
}

pub async fn make_seeded_state() -> (AppState, Seeded) {
    let seeded = seed_database().await;
    (AppState::new(seeded.database.clone()), seeded)
}
