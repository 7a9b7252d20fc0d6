use std::sync::Arc;

use registry_server::config::{AppState, Config};
use registry_server::logger;
use registry_server::server::{self, ShutdownSignal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let root = cfg.resolve_root()?;

    // Bind failure is fatal: the error propagates out of main with no retry.
    let listener = server::create_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg, root));

    let shutdown = ShutdownSignal::new();
    server::signal::start_signal_handler(shutdown.clone());

    logger::log_server_start(&addr, &state.root);

    server::run_server_loop(listener, state, shutdown).await;
    Ok(())
}
