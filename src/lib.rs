use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::gateway::types::Activation;
use crate::gateway::{GatewayClient, ReportSession};
use crate::middleware::RedirectUnauthorized;
use crate::models::config::{AuthConfig, ServerConfig};
use crate::repository::DieselRepository;
use crate::routes::api::api_v1_sales;
use crate::routes::commission::{save_rate, set_earning_status, show_commissions};
use crate::routes::dealer::{
    add_dealer, add_shop, deactivate_dealer, save_dealer, save_shop, show_dealer,
};
use crate::routes::main::{logout, not_assigned, show_index};
use crate::routes::sale::{record_sale, show_sales};
use crate::routes::selfcare::{activate_sim, buy_bundle, show_activations, show_selfcare};
use crate::routes::stock::{show_stock, swap_imei, transfer_stock, upload_stock};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

pub const SERVICE_ACCESS_ROLE: &str = "backoffice";
pub const SERVICE_ADMIN_ROLE: &str = "backoffice_admin";
/// Accounts restricted to their own dealer's records.
pub const SERVICE_DEALER_ROLE: &str = "backoffice_dealer";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let auth_config = AuthConfig::from(&server_config);

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let gateway = GatewayClient::new(
        &server_config.gateway_url,
        &server_config.gateway_api_key,
        Duration::from_secs(server_config.gateway_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build gateway client: {e}")))?;

    // One session per report screen; it keeps newest-wins ordering across
    // concurrent refreshes.
    let activations_session = web::Data::new(ReportSession::<Activation>::new());

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(not_assigned)
            .service(web::scope("/api").service(api_v1_sales))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_dealer)
                    .service(add_dealer)
                    .service(save_dealer)
                    .service(deactivate_dealer)
                    .service(add_shop)
                    .service(save_shop)
                    .service(show_stock)
                    .service(upload_stock)
                    .service(transfer_stock)
                    .service(swap_imei)
                    .service(show_sales)
                    .service(record_sale)
                    .service(show_commissions)
                    .service(save_rate)
                    .service(set_earning_status)
                    .service(show_selfcare)
                    .service(buy_bundle)
                    .service(activate_sim)
                    .service(show_activations)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(auth_config.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .app_data(activations_session.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
