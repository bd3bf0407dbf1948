//! Backend entry-point: wires the hypermedia REST endpoints, health probes,
//! and OpenAPI docs.

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::Trace;
use backend::api::health::{HealthState, live, ready};
use backend::api::{customers, orders, products};
use backend::config::Config;
use backend::domain::Catalogue;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = Config::parse();
    let base = config
        .link_base()
        .map_err(|e| std::io::Error::other(format!("invalid public base URL: {e}")))?;

    let catalogue = web::Data::new(Catalogue::seeded());
    let link_base = web::Data::new(base);
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server_catalogue = catalogue.clone();
    let server_link_base = link_base.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Trace)
            .app_data(server_health_state.clone())
            .app_data(server_catalogue.clone())
            .app_data(server_link_base.clone())
            .service(orders::list_orders)
            .service(orders::get_order)
            .service(orders::get_order_items)
            .service(products::list_products)
            .service(products::get_product)
            .service(customers::get_customer)
            .service(ready)
            .service(live);
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind((config.bind_address.as_str(), config.port))?;

    info!(
        address = %config.bind_address,
        port = config.port,
        base_url = %config.public_base_url,
        "hypermedia storefront API listening"
    );
    health_state.mark_ready();

    // Fail liveness as soon as shutdown starts so probes see the drain
    // before actix finishes closing connections.
    let drain_state = health_state.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => drain_state.mark_unhealthy(),
            Err(error) => warn!(%error, "failed to install shutdown signal handler"),
        }
    });

    server.run().await
}
