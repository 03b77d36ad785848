use std::{path::PathBuf, sync::Arc};
use tokio::sync::{broadcast, RwLock};

use crate::catalog::Catalog;
use crate::content::Templates;

pub type RefreshBroadcaster = broadcast::Sender<()>;

pub struct AppState {
    pub content_dir: PathBuf,
    pub templates: RwLock<Templates>,
    pub catalog: RwLock<Catalog>,
    pub is_development: bool,
}

#[derive(Clone)]
pub struct RouterState {
    pub app_state: Arc<AppState>,
    pub broadcaster: RefreshBroadcaster,
}

impl axum::extract::FromRef<RouterState> for Arc<AppState> {
    fn from_ref(state: &RouterState) -> Self {
        state.app_state.clone()
    }
}

impl axum::extract::FromRef<RouterState> for RefreshBroadcaster {
    fn from_ref(state: &RouterState) -> Self {
        state.broadcaster.clone()
    }
}
