// Server loop module
// Accept loop with shutdown selection

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::ShutdownSignal;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until the shutdown signal fires.
///
/// Each accepted connection is served on its own task. Connections still in
/// flight when the loop returns are not drained; they are abandoned when the
/// process exits.
pub async fn run_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: ShutdownSignal) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => {
                logger::log_shutdown();
                break;
            }
        }
    }
}
