//! Relay server.
//!
//! Wires the hosting lobby into an actix-web application: a health probe
//! and the WebSocket upgrade route. Static assets and page routing are
//! served elsewhere; this process only speaks the relay protocol.
//!
//! ## Submodules
//!
//! - [`handlers`] — route handlers

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use oxo_engine::SweepConfig;
use oxo_hosting::Lobby;

/// Listen address: BIND_ADDR wins, else 0.0.0.0:$PORT, else port 4000.
fn address() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| String::from("4000"));
        format!("0.0.0.0:{}", port)
    })
}

pub async fn run() -> Result<(), std::io::Error> {
    let lobby = web::Data::from(Lobby::new(SweepConfig::default()));
    let address = address();
    log::info!("starting relay server on {}", address);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/ws", web::get().to(handlers::connect))
    })
    .bind(address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_defaults_to_port_4000() {
        // assumes a test environment without BIND_ADDR or PORT set
        if std::env::var("BIND_ADDR").is_err() && std::env::var("PORT").is_err() {
            assert_eq!(address(), "0.0.0.0:4000");
        }
    }
}
