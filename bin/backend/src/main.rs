//! Relay Server Binary
//!
//! Serves the oxo WebSocket relay on BIND_ADDR (e.g. 0.0.0.0:4000).

#[tokio::main]
async fn main() {
    oxo_core::log();
    oxo_core::kys();
    oxo_server::run().await.unwrap();
}
