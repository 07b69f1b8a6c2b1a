use std::ops::Deref;
use std::sync::Arc;

use api::ViewConfig;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: ViewConfig,
}

/// Read-only settings shared with every component through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ViewConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
