#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use showcase::app::*;
    use showcase::config::Config;
    use showcase::db;
    use showcase::error::AppError;
    use tower_http::compression::CompressionLayer;

    let config = Config::load().map_err(AppError::from)?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("deployment.environment.name", config.otel.environment.clone())
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .endpoint(config.otel.endpoint.as_str())
        .with_standard_env()
        .build()
        .context("failed to initialise OpenTelemetry")?;

    let database_url = config
        .database_url()
        .ok_or(AppError::NotConfigured("database url"))?;
    let pool = db::init_pool(database_url)
        .await
        .map_err(AppError::from)
        .context("failed to connect to database")?;
    db::run_migrations(&pool).await.map_err(AppError::from)?;

    let conf = get_configuration(None).context("failed to read leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config
        .listen
        .parse()
        .with_context(|| format!("invalid listen address {}", config.listen))?;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let pool = pool.clone();
                move || provide_context(pool.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options);

    if let Some(socket_path) = config.socket.as_deref() {
        tracing::info!("listening on unix socket {}", socket_path);
        let listener = tokio::net::UnixListener::bind(socket_path)
            .with_context(|| format!("failed to bind {socket_path}"))?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
