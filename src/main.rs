use std::process;

use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use tera::Tera;

use pushkind_catalog::models::config::ServerConfig;
use pushkind_catalog::repository::StaticCatalogRepository;
use pushkind_catalog::routes::configure;
use pushkind_catalog::services::catalog::load_catalog;

fn load_server_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match load_server_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let repo = match &server_config.catalog_dir {
        Some(dir) => StaticCatalogRepository::from_dir(dir),
        None => StaticCatalogRepository::embedded(),
    };
    let repo = match repo {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to load catalog datasets: {e}");
            process::exit(1);
        }
    };

    let catalog = match load_catalog(&repo) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to build catalog: {e}");
            process::exit(1);
        }
    };

    let tera = match Tera::new(&format!("{}/**/*", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting catalog server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let catalog = web::Data::new(catalog);
    let server_config = web::Data::new(server_config);
    let tera = web::Data::new(tera);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(catalog.clone())
            .app_data(server_config.clone())
            .app_data(tera.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
