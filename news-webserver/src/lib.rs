#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use news_core::gateways::notify::NotificationGateway;
use news_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections, enable_cors, cfg, notify_gw, version).await;
}
