#[macro_use]
extern crate tracing;

use axum::{Router, extract::FromRef};

use axum_extra::middleware::option_layer;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

mod api;
mod config;
mod error;
mod form;
mod lookup;
mod middleware;
mod trace;
mod validate;

pub use crate::config::CONFIG;
pub use error::Error;

use lookup::LookupClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    launch_info();
    dotenv().ok();
    trace::init(&CONFIG.log);

    let client = match LookupClient::new(&CONFIG.lookup) {
        Ok(client) => client,
        Err(err) => panic!("failed to build lookup client: {}", err),
    };
    info!("forwarding lookups to {}", client.url());

    let cors = if CONFIG.debug {
        Some(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods(Any)
                .allow_origin(Any),
        )
    } else {
        None
    };
    let cors = option_layer(cors);
    let layer = ServiceBuilder::new()
        .layer(middleware::TraceLayer)
        .layer(cors);
    let state = AppState { client };
    let app = Router::new()
        .nest("/api", api::routes())
        .with_state(state)
        .fallback_service(ServeDir::new(&CONFIG.web_dir))
        .layer(layer);

    let listener = match TcpListener::bind(CONFIG.addr).await {
        Ok(listener) => listener,
        Err(err) => panic!("failed to bind {}: {}", CONFIG.addr, err),
    };
    if let Ok(local_addr) = listener.local_addr() {
        info!("listening on http://{}", local_addr);
    }
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {}", err);
    }
    info!("server stopped");
}

#[derive(FromRef, Clone)]
pub struct AppState {
    pub client: LookupClient,
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
    }
}

fn launch_info() {
    println!();
    println!(
        "=================== Starting IP Lookup {} ===================",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}
