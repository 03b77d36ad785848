use std::{sync::Arc, time::Duration};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use notify_debouncer_full::{
    new_debouncer, DebouncedEvent,
    notify::{Error as NotifyError, RecursiveMode, Watcher},
};
use tracing::{debug, error, info};

use crate::content::reload_content;
use crate::state::{AppState, RefreshBroadcaster};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(tx): State<RefreshBroadcaster>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, tx))
}

async fn handle_socket(mut socket: WebSocket, tx: RefreshBroadcaster) {
    let mut rx = tx.subscribe();

    // Wait for a reload signal, then tell the browser to refresh
    if rx.recv().await.is_ok()
        && socket
            .send(Message::Text("reload".to_string().into()))
            .await
            .is_err()
    {
        debug!("Client disconnected before reload message could be sent");
    }
    // The socket closes when this function returns
}

/// Watch the content directory and, on every relevant change, reload the
/// catalog and broadcast a refresh to connected browsers. Development only.
pub fn start_content_watcher(tx: RefreshBroadcaster, app_state: Arc<AppState>) {
    info!("Starting content watcher for hot-reload...");
    tokio::spawn(async move {
        let (watcher_tx, mut watcher_rx) = tokio::sync::mpsc::channel(1);

        let debouncer = new_debouncer(
            Duration::from_millis(200),
            None,
            move |res: Result<Vec<DebouncedEvent>, Vec<NotifyError>>| match res {
                Ok(events) => {
                    if events.iter().any(is_relevant) {
                        debug!(
                            "Content change detected: {:?}",
                            events
                                .iter()
                                .flat_map(|e| &e.event.paths)
                                .map(|p| p.display())
                                .collect::<Vec<_>>()
                        );
                        if let Err(e) = watcher_tx.blocking_send(()) {
                            error!("Failed to send watcher event: {}", e);
                        }
                    }
                }
                Err(errors) => {
                    for e in errors {
                        error!("Watcher error: {}", e);
                    }
                }
            },
        );

        let mut debouncer = match debouncer {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create content watcher: {}", e);
                return;
            }
        };

        if let Err(e) = debouncer
            .watcher()
            .watch(app_state.content_dir.as_path(), RecursiveMode::Recursive)
        {
            error!("Failed to watch content directory: {}", e);
            return;
        }

        // Keep the debouncer alive and wait for events
        while watcher_rx.recv().await.is_some() {
            reload_content(&app_state).await;

            if let Err(e) = tx.send(()) {
                error!("Failed to broadcast reload signal: {}", e);
            }
        }
    });
}

/// Modify/create/remove events count; editor temp files (Emacs .#*, ~
/// backups) do not.
fn is_relevant(event: &DebouncedEvent) -> bool {
    let relevant_kind =
        event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove();
    if !relevant_kind {
        return false;
    }

    let is_temp_file = event.event.paths.iter().any(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|s| s.starts_with(".#") || s.ends_with('~'))
    });

    !is_temp_file
}
