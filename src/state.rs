use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::Mutex;

use crate::core::session::QuizSession;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// The single active quiz session. One browsing context drives one quiz
    /// at a time; starting a new session replaces whatever was in flight.
    pub active_session: Arc<Mutex<Option<QuizSession>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            active_session: Arc::new(Mutex::new(None)),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
