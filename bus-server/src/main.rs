use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use bus_server::board::{BoardConfig, DepartureBoard};
use bus_server::timetable::{OffsetTable, Timetable};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The schedule is baked in; a parse failure is a data bug, so fail fast
    let timetable = Timetable::village().expect("Failed to build village timetable");
    let board = DepartureBoard::new(timetable, OffsetTable::village(), BoardConfig::default());

    let state = AppState::new(board);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "bus-server/static".into());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Village Bus Board listening on http://{addr}");
    tracing::info!("Endpoints: GET / (page), /board, /timetable, /health");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
