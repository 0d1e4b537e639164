use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, State},
    routing::{MethodFilter, get, on},
};
use juniper_axum::{extract::JuniperRequest, graphiql, playground, response::JuniperResponse};
use tokio::net::TcpListener;
use tracing::info;

use crate::state::{AppData, AppState};

mod config;
mod schema;
mod state;

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<Arc<schema::Schema<'static>>>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse(request.execute(&schema, &*state).await)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let schema = schema::schema();

    let app_state = AppState::new(AppData::new());

    let app = Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .route("/graphiql", get(graphiql("/graphql", None)))
        .route("/playground", get(playground("/graphql", None)))
        .with_state(app_state)
        .layer(Extension(Arc::new(schema)));

    let addr = config::CONFIG.bind_addr;

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.expect("Server failed");
}
