#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use portfolio_app::app::*;
    use portfolio_app::core::config::Config;
    use portfolio_app::core::proxy::api_proxy_router;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing, RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load application config from environment variables
    let config = Config::from_env();
    match &config.backend_url {
        Some(url) => tracing::info!(
            "Config loaded: backend={}, timeout={}s",
            url,
            config.backend_timeout_secs
        ),
        None => tracing::warn!("BACKEND_URL is not set; /api requests will answer 503"),
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets (.br / .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // REST calls from the browser are relayed to the backend
    let api = api_proxy_router(&config);

    let app = Router::new()
        .merge(api)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
