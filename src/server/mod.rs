//! Preview server for the generated output

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands::generate;
use crate::Press;

/// Serve `public_dir`, optionally regenerating when sources change
pub async fn start(press: &Press, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = Router::new()
        .fallback_service(
            ServeDir::new(&press.public_dir).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let press = press.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = generate::watch(&press) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
