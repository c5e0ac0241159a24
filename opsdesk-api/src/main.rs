use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use opsdesk_api::config::ApiConfig;
use opsdesk_api::sessions::SessionStore;
use opsdesk_api::store::StoreClient;
use opsdesk_api::handlers;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("opsdesk-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = ApiConfig::load().expect("Failed to load config");
    tracing::info!("Config loaded from {:?}", config_path);

    if config.store.base_url.is_empty() {
        tracing::warn!("store.base_url is empty; every store call will fail");
    }

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    let store_client = Arc::new(StoreClient::new(
        &config.store.base_url,
        &config.store.service_key,
    ));
    let sessions = Arc::new(SessionStore::new(config.session_ttl_minutes()));
    let admin = config.admin.clone();

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(store_client.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .app_data(web::Data::new(admin.clone()))
            .service(health)
            .route("/api/auth/login", web::post().to(handlers::auth::login))
            .route("/api/auth/logout", web::post().to(handlers::auth::logout))
            .route("/api/clients", web::get().to(handlers::clients::list_clients))
            .route("/api/clients", web::post().to(handlers::clients::create_client))
            .route("/api/clients/{id}", web::put().to(handlers::clients::update_client))
            .route("/api/clients/{id}", web::delete().to(handlers::clients::delete_client))
            .route("/api/projects", web::get().to(handlers::projects::list_projects))
            .route("/api/projects", web::post().to(handlers::projects::create_project))
            .route("/api/projects/{id}", web::put().to(handlers::projects::update_project))
            .route("/api/projects/{id}", web::delete().to(handlers::projects::delete_project))
            .route("/api/payments", web::get().to(handlers::payments::list_payments))
            .route("/api/payments", web::post().to(handlers::payments::create_payment))
            .route("/api/payments/{id}", web::put().to(handlers::payments::update_payment))
            .route("/api/payments/{id}", web::delete().to(handlers::payments::delete_payment))
            .route("/api/portals", web::get().to(handlers::portals::list_portals))
            .route("/api/portals", web::post().to(handlers::portals::create_portal))
            .route("/api/portals/{id}", web::put().to(handlers::portals::update_portal))
            .route("/api/portals/{id}", web::delete().to(handlers::portals::delete_portal))
            .route("/api/forms", web::get().to(handlers::forms::list_forms))
            .route("/api/forms", web::post().to(handlers::forms::create_form))
            .route("/api/forms/{id}", web::put().to(handlers::forms::update_form))
            .route("/api/forms/{id}", web::delete().to(handlers::forms::delete_form))
            .route("/api/tracking", web::get().to(handlers::tracking::list_entries))
            .route("/api/tracking", web::post().to(handlers::tracking::create_entry))
    })
    .bind((host.as_str(), port))?
    .run();

    server.await
}
