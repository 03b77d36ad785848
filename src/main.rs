use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use tokio::{net::TcpListener, sync::{broadcast, RwLock}};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_site::content::{load_catalog, load_templates, CONTENT_DIR};
use portfolio_site::hot_reload::start_content_watcher;
use portfolio_site::routes;
use portfolio_site::state::{AppState, RouterState};

#[tokio::main]
async fn main() {
    let is_development = std::env::var("RUST_ENV")
        .map(|v| v == "development")
        .unwrap_or(false);

    // logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content_dir = PathBuf::from(CONTENT_DIR);
    let templates = load_templates(&content_dir)
        .await
        .expect("Failed to load layout templates");
    let catalog = load_catalog(&content_dir)
        .await
        .expect("Failed to load initial content");

    info!(
        posts = catalog.posts.len(),
        projects = catalog.projects.len(),
        skill_groups = catalog.skill_groups.len(),
        "content loaded"
    );

    let state = Arc::new(AppState {
        content_dir,
        templates: RwLock::new(templates),
        catalog: RwLock::new(catalog),
        is_development,
    });

    // Hot-reload setup
    let (tx, _rx) = broadcast::channel(1);
    if is_development {
        info!("Hot reload enabled. Check logs for file change events.");
        start_content_watcher(tx.clone(), state.clone());
    }

    let router_state = RouterState {
        app_state: state,
        broadcaster: tx,
    };
    let app = routes::router(router_state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, "listening");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
