use log::*;
use tokio::net::TcpListener;

pub use service::AppState;

mod error;
mod router;
mod sse;

/// Binds the configured address and serves until the process is killed.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_address = app_state.config.listen_address();
    let listener = TcpListener::bind(&listen_address).await?;

    info!("Server starting... listening for connections on http://{listen_address}");

    serve(listener, app_state).await
}

/// Serves the coordinate stream on an already bound listener.
pub async fn serve(listener: TcpListener, app_state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router::define_routes(app_state)).await
}
