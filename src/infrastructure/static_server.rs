//! Static file server for the built site
//!
//! Serves the `dx build` output (WASM bundle, CSS, profile picture, résumé)
//! under the deployment base path, like the production static host would.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::shared::constants::DEFAULT_BASE_PATH;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::LogOperation;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-server", about = "Serve the built portfolio site")]
pub struct ServerArgs {
    /// Directory holding the built site (must contain index.html)
    #[arg(long, env = "PORTFOLIO_DIST", default_value = "dist")]
    pub dir: PathBuf,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "PORTFOLIO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Path prefix the site is mounted under
    #[arg(long, env = "PORTFOLIO_BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,
}

impl ServerArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Fail early if the site directory is missing
    pub fn validate(&self) -> Result<()> {
        let index = self.dir.join("index.html");
        if !index.is_file() {
            return Err(AppError::InvalidContent(format!(
                "{} not found, build the site first (dx build --platform web --release)",
                index.display()
            )));
        }
        Ok(())
    }
}

/// `react-portfolio/` -> `/react-portfolio`, empty or `/` -> `/`
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Router serving `dir` under `base_path`; unknown paths fall back to index.html
pub fn build_router(args: &ServerArgs) -> Router {
    let base_path = normalize_base_path(&args.base_path);
    let site = ServeDir::new(&args.dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(args.dir.join("index.html")));

    let router = if base_path == "/" {
        Router::new().fallback_service(site)
    } else {
        let target = format!("{}/", base_path);
        Router::new()
            .route(
                "/",
                get(move || {
                    let target = target.clone();
                    async move { Redirect::temporary(&target) }
                }),
            )
            .nest_service(&base_path, site)
    };

    tracing::info!(
        operation = LogOperation::StaticServe.as_str(),
        dir = %args.dir.display(),
        base_path = %base_path,
        "Static routes configured"
    );

    router
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
