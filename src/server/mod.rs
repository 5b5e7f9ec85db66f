use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::storage::Store;
use crate::ui::Icons;

pub mod page;
pub mod routes;

/// Server state
pub struct AppState {
    pub store: Store,
}

/// Dashboard routes over a shared store
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard))
        .route("/investments", post(routes::add_investment))
        .route("/projects", post(routes::add_project))
        .route("/ideas", post(routes::add_idea))
        .route("/api/stats", get(routes::api_stats))
        .route("/api/{kind}", get(routes::api_list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(bind: &str, port: u16, store: Store) -> anyhow::Result<()> {
    let state = Arc::new(AppState { store });
    let app = router(state);

    let ip: IpAddr = bind.parse()?;
    let addr = SocketAddr::new(ip, port);
    tracing::info!("Starting dashboard on {}", addr);
    println!("{} AtlasOG running at http://{}", Icons::GLOBE, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
