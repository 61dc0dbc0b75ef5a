//! HTTP API Server
//!
//! Builds the middleware stack and runs the axum server.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use appraisal_core::Config;

use crate::error::{ApiError, Result};
use crate::routes::create_router;

/// Router with request tracing and CORS applied
pub fn build_app(config: &Config) -> Result<Router> {
    let cors = cors_layer(config.api.allowed_origins.as_deref())?;

    Ok(create_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}

/// CORS policy: permissive without a configured list, otherwise the list only
pub fn cors_layer(allowed_origins: Option<&[String]>) -> Result<CorsLayer> {
    let origins = match allowed_origins {
        Some(origins) if !origins.is_empty() => origins,
        _ => return Ok(CorsLayer::permissive()),
    };

    let values = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ApiError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Parse the configured `host:port`
pub fn socket_addr(config: &Config) -> Result<SocketAddr> {
    let address = config.bind_address();
    address.parse().map_err(|e: std::net::AddrParseError| ApiError::InvalidAddress {
        reason: e.to_string(),
        address,
    })
}

/// Start the HTTP API server and run until the process is stopped
pub async fn start_server(config: Config) -> Result<()> {
    start_server_with_shutdown(config, std::future::pending()).await
}

/// Start the HTTP API server and stop gracefully once `shutdown` resolves
pub async fn start_server_with_shutdown<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = socket_addr(&config)?;
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP API stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_core::ApiConfig;

    fn config(host: &str, port: u16, origins: Option<Vec<&str>>) -> Config {
        Config {
            api: ApiConfig {
                host: host.to_string(),
                port,
                allowed_origins: origins.map(|o| o.into_iter().map(String::from).collect()),
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = socket_addr(&config("0.0.0.0", 8080, None)).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let err = socket_addr(&config("not a host", 8080, None)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidAddress { ref address, .. } if address == "not a host:8080"));
    }

    #[test]
    fn test_cors_layer_accepts_configured_origins() {
        let origins = vec!["http://localhost:3000".to_string()];
        assert!(cors_layer(Some(origins.as_slice())).is_ok());
        assert!(cors_layer(None).is_ok());
        assert!(cors_layer(Some(&[][..])).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let origins = vec!["http://bad\norigin".to_string()];
        let err = cors_layer(Some(origins.as_slice())).unwrap_err();
        assert!(matches!(err, ApiError::InvalidOrigin(ref o) if o == "http://bad\norigin"));
    }

    #[test]
    fn test_build_app_with_invalid_origin_fails() {
        let cfg = config("127.0.0.1", 0, Some(vec!["bad\u{7f}"]));
        assert!(build_app(&cfg).is_err());
    }

    #[tokio::test]
    async fn test_server_stops_on_shutdown_signal() {
        let cfg = config("127.0.0.1", 0, None);
        let result = start_server_with_shutdown(cfg, async {}).await;
        assert!(result.is_ok());
    }
}
