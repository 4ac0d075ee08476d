use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use news_db_sqlite as sqlite;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(name = "newsbundle", version, about = "REST API for news posts and their comments")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, u32::from(cfg.db.conn_pool_size))?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let notify_gw = gateways::notification_gateway(&cfg)?;
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;
    let web_cfg = news_webserver::Cfg {
        moderator_tokens: cfg.webserver.moderator_tokens,
    };
    news_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        Box::new(notify_gw),
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
