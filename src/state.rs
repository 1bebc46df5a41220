//! Shared application state for all routes, built once at startup.

use crate::config::ApiSettings;
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub settings: Arc<ApiSettings>,
}

impl AppState {
    pub fn new<S>(store: S, settings: ApiSettings) -> Self
    where
        S: UserStore + 'static,
    {
        Self {
            store: Arc::new(store),
            settings: Arc::new(settings),
        }
    }
}
