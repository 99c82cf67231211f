//! Shared application state injected into every handler.
//!
//! The store and loader are owned here and passed through axum state — no
//! process-wide singletons.

use std::sync::Arc;

use slot_engine::ScheduleStore;

use crate::loader::ScheduleLoader;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScheduleStore>,
    pub loader: Arc<ScheduleLoader>,
}

impl AppState {
    pub fn new(store: Arc<ScheduleStore>, loader: ScheduleLoader) -> Self {
        Self {
            store,
            loader: Arc::new(loader),
        }
    }
}
