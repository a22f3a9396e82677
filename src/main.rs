use actix_web::{web, App, HttpServer};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use leaderboard_service::handlers::{get_customer_with_neighbors, get_leaderboard, update_score};
use leaderboard_service::openapi::ApiDoc;
use leaderboard_service::{Config, Leaderboard};

async fn openapi_json(
    doc: web::Data<utoipa::openapi::OpenApi>,
) -> actix_web::Result<actix_web::HttpResponse> {
    let body = serde_json::to_string(&**doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(actix_web::HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting {} v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    // One shared leaderboard for the process lifetime; there is no
    // persistence, so the board starts empty on every boot.
    let leaderboard = web::Data::new(Leaderboard::new());

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!("HTTP server listening on {}", bind_addr);

    HttpServer::new(move || {
        let openapi_doc = ApiDoc::openapi();

        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(leaderboard.clone())
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), openapi_doc.clone()),
            )
            .route(ApiDoc::openapi_json_path(), web::get().to(openapi_json))
            .route("/health", web::get().to(|| async { "OK" }))
            // Health endpoints for K8s probes
            .route("/api/v1/health/live", web::get().to(|| async { "OK" }))
            .route("/api/v1/health/ready", web::get().to(|| async { "OK" }))
            .service(update_score)
            .service(get_leaderboard)
            .service(get_customer_with_neighbors)
    })
    .bind(bind_addr)?
    .run()
    .await
}
