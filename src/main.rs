#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_site=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = serve().await {
        tracing::error!(error = %err, "shutting down");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), portfolio_site::error::SiteError> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, content, error::SiteError};
    use tower::ServiceBuilder;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    content::validate()?;

    let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;
    tracing::info!(
        %addr,
        build_time = env!("BUILD_TIME"),
        "listening on http://{addr}"
    );
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(SiteError::Serve)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
