use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_graph::schema::{build_schema, AppSchema};
use movie_graph::state::init_app_state;
use movie_graph::store::JsonFileStore;

const DEFAULT_PORT: u16 = 4000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_dir = env::var("DATA_DIR")
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/data").to_owned());
    let state = Arc::new(init_app_state(Box::new(JsonFileStore::new(&data_dir)))?);
    let schema = build_schema(state);

    let app = Router::new()
        .route("/graphql", post(post_graphql))
        .route("/schema", get(get_schema))
        .route("/healthz", get(get_healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(schema);

    let host = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    let port = env::var("PORT").map(|raw| raw.parse()).unwrap_or(Ok(DEFAULT_PORT))?;
    let address = SocketAddr::new(host, port);

    info!(%address, "serving GraphQL API");

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn post_graphql(State(schema): State<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn get_schema(State(schema): State<AppSchema>) -> String {
    schema.sdl()
}

async fn get_healthz() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn shutdown_signal() {
    // wait for a SIGINT, i.e. a Ctrl+C from the keyboard
    let sigint = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install signal handler")
    };
    // wait for a SIGTERM, i.e. a normal `kill` command
    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await
    };
    // block until either of the above happens
    #[cfg(unix)]
    tokio::select! {
        () = sigint => (),
        _ = sigterm => (),
    }
    #[cfg(windows)]
    tokio::select! {
        () = sigint => (),
    }
}
